//! REST API surface over the PetCare backend.
//!
//! Browser (csr): real HTTP calls via `gloo-net`, with the bearer token read
//! from localStorage at request-build time. Native builds get stubs that
//! resolve to a network-class error, which keeps the rest of the crate
//! compiling and testable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures map to [`ApiError::Network`], 401 to
//! [`ApiError::Unauthorized`], any other non-2xx to [`ApiError::Rejected`]
//! with whatever message the DRF body offers, and undecodable success
//! bodies to [`ApiError::Malformed`]. Mutations discard their response body
//! and resolve to `Ok(())` on any 2xx.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::{ApiError, AuthenticationError};
#[cfg(feature = "csr")]
use super::error::rejection_message;
#[cfg(feature = "csr")]
use super::types::{Credentials, ListResponse};
use super::types::{
    Adopter, AdopterPayload, Animal, AnimalPayload, Consultation, ConsultationPayload, Ngo,
    NgoPayload, TokenPair,
};
#[cfg(feature = "csr")]
use crate::util::session_store::{LocalStorageStore, TokenStore};

/// Backend origin, the Django dev server's default bind address.
#[cfg(any(test, feature = "csr"))]
const BASE_URL: &str = "http://127.0.0.1:8000";

#[cfg(any(test, feature = "csr"))]
const TOKEN_PATH: &str = "/api/token/";

const ANIMALS: &str = "animais";
const ADOPTERS: &str = "adotantes";
const CONSULTATIONS: &str = "consultas";
const NGOS: &str = "ongs";

#[cfg(any(test, feature = "csr"))]
fn api_url(path: &str) -> String {
    format!("{BASE_URL}{path}")
}

fn collection_endpoint(resource: &str) -> String {
    format!("/api/v1/{resource}/")
}

/// Item paths keep DRF's trailing slash; without it the dev server answers
/// with a redirect the fetch layer will not follow for mutations.
fn item_endpoint(resource: &str, id: i64) -> String {
    format!("/api/v1/{resource}/{id}/")
}

fn available_animals_endpoint() -> String {
    format!("/api/v1/{ANIMALS}/?adotado=false")
}

/// `Authorization` header value carrying `token`.
#[cfg(any(test, feature = "csr"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Header value for the current token state: a session without a token gets
/// no `Authorization` header at all, not an empty one.
#[cfg(any(test, feature = "csr"))]
fn bearer_header(token: Option<&str>) -> Option<String> {
    token.map(bearer)
}

/// Attach the persisted bearer token, when one exists. Reading the store at
/// request-build time means a token persisted by a fresh login is used on
/// the very next call, and a cleared one stops being sent immediately.
#[cfg(feature = "csr")]
fn authorized(req: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match bearer_header(LocalStorageStore.load().as_deref()) {
        Some(value) => req.header("Authorization", &value),
        None => req,
    }
}

/// Map a non-2xx response onto the error taxonomy.
#[cfg(feature = "csr")]
async fn failure(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    if status == 401 {
        return ApiError::Unauthorized;
    }
    let body = resp
        .json::<serde_json::Value>()
        .await
        .unwrap_or(serde_json::Value::Null);
    ApiError::Rejected { status, message: rejection_message(&body) }
}

#[cfg(not(feature = "csr"))]
fn offline() -> ApiError {
    ApiError::Network("indisponível fora do navegador".to_owned())
}

// ============================================================================
// Request cores
// ============================================================================

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = authorized(gloo_net::http::Request::get(&api_url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(failure(resp).await);
        }
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
        Err(offline())
    }
}

/// Fetch a collection, accepting both a DRF-paginated envelope and a bare
/// JSON array.
async fn get_list<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, ApiError> {
    #[cfg(feature = "csr")]
    {
        Ok(get_json::<ListResponse<T>>(path).await?.into_items())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
        Err(offline())
    }
}

async fn post_json<P: Serialize>(path: &str, payload: &P) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = authorized(gloo_net::http::Request::post(&api_url(path)))
            .json(payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(failure(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, payload);
        Err(offline())
    }
}

async fn put_json<P: Serialize>(path: &str, payload: &P) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = authorized(gloo_net::http::Request::put(&api_url(path)))
            .json(payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(failure(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, payload);
        Err(offline())
    }
}

async fn delete_item(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = authorized(gloo_net::http::Request::delete(&api_url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(failure(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
        Err(offline())
    }
}

// ============================================================================
// Authentication
// ============================================================================

/// Exchange credentials for a token pair via `POST /api/token/`.
///
/// The request is sent bare: no bearer header, even when a stale token is
/// still persisted.
///
/// # Errors
///
/// Every failure collapses into the same [`AuthenticationError`], so the
/// login page cannot reveal which of the two fields was wrong.
pub async fn login(username: &str, password: &str) -> Result<TokenPair, AuthenticationError> {
    request_tokens(username, password)
        .await
        .map_err(AuthenticationError::from)
}

async fn request_tokens(username: &str, password: &str) -> Result<TokenPair, ApiError> {
    #[cfg(feature = "csr")]
    {
        let credentials = Credentials { username, password };
        let resp = gloo_net::http::Request::post(&api_url(TOKEN_PATH))
            .json(&credentials)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(failure(resp).await);
        }
        resp.json::<TokenPair>()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (username, password);
        Err(offline())
    }
}

// ============================================================================
// Animals
// ============================================================================

pub async fn list_animals() -> Result<Vec<Animal>, ApiError> {
    get_list(&collection_endpoint(ANIMALS)).await
}

/// Animals still up for adoption (`?adotado=false`), the only ones a new
/// consultation may be scheduled for.
pub async fn list_available_animals() -> Result<Vec<Animal>, ApiError> {
    get_list(&available_animals_endpoint()).await
}

pub async fn fetch_animal(id: i64) -> Result<Animal, ApiError> {
    get_json(&item_endpoint(ANIMALS, id)).await
}

pub async fn create_animal(payload: &AnimalPayload) -> Result<(), ApiError> {
    post_json(&collection_endpoint(ANIMALS), payload).await
}

pub async fn update_animal(id: i64, payload: &AnimalPayload) -> Result<(), ApiError> {
    put_json(&item_endpoint(ANIMALS, id), payload).await
}

pub async fn delete_animal(id: i64) -> Result<(), ApiError> {
    delete_item(&item_endpoint(ANIMALS, id)).await
}

// ============================================================================
// Adopters
// ============================================================================

pub async fn list_adopters() -> Result<Vec<Adopter>, ApiError> {
    get_list(&collection_endpoint(ADOPTERS)).await
}

pub async fn fetch_adopter(id: i64) -> Result<Adopter, ApiError> {
    get_json(&item_endpoint(ADOPTERS, id)).await
}

pub async fn create_adopter(payload: &AdopterPayload) -> Result<(), ApiError> {
    post_json(&collection_endpoint(ADOPTERS), payload).await
}

pub async fn update_adopter(id: i64, payload: &AdopterPayload) -> Result<(), ApiError> {
    put_json(&item_endpoint(ADOPTERS, id), payload).await
}

pub async fn delete_adopter(id: i64) -> Result<(), ApiError> {
    delete_item(&item_endpoint(ADOPTERS, id)).await
}

// ============================================================================
// Consultations
// ============================================================================

pub async fn list_consultations() -> Result<Vec<Consultation>, ApiError> {
    get_list(&collection_endpoint(CONSULTATIONS)).await
}

pub async fn fetch_consultation(id: i64) -> Result<Consultation, ApiError> {
    get_json(&item_endpoint(CONSULTATIONS, id)).await
}

pub async fn create_consultation(payload: &ConsultationPayload) -> Result<(), ApiError> {
    post_json(&collection_endpoint(CONSULTATIONS), payload).await
}

pub async fn update_consultation(id: i64, payload: &ConsultationPayload) -> Result<(), ApiError> {
    put_json(&item_endpoint(CONSULTATIONS, id), payload).await
}

pub async fn delete_consultation(id: i64) -> Result<(), ApiError> {
    delete_item(&item_endpoint(CONSULTATIONS, id)).await
}

// ============================================================================
// NGOs
// ============================================================================

pub async fn list_ngos() -> Result<Vec<Ngo>, ApiError> {
    get_list(&collection_endpoint(NGOS)).await
}

pub async fn fetch_ngo(id: i64) -> Result<Ngo, ApiError> {
    get_json(&item_endpoint(NGOS, id)).await
}

pub async fn create_ngo(payload: &NgoPayload) -> Result<(), ApiError> {
    post_json(&collection_endpoint(NGOS), payload).await
}

pub async fn update_ngo(id: i64, payload: &NgoPayload) -> Result<(), ApiError> {
    put_json(&item_endpoint(NGOS, id), payload).await
}

pub async fn delete_ngo(id: i64) -> Result<(), ApiError> {
    delete_item(&item_endpoint(NGOS, id)).await
}
