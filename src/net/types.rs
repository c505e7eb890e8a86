//! Wire DTOs for the Django REST boundary.
//!
//! DESIGN
//! ======
//! The backend serializers speak Portuguese field names; Rust fields are
//! English with explicit serde renames so the JSON contract stays visible at
//! the type definition. List endpoints may answer with a bare array or a DRF
//! pagination envelope, so every list read goes through [`ListResponse`].

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Token pair issued by `POST /api/token/`.
///
/// Only `access` is retained by the session; `refresh` is decoded for wire
/// honesty but there is no renewal flow in this client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived credential presented on each protected request.
    pub access: String,
    /// Longer-lived credential; received and discarded.
    pub refresh: String,
}

/// Login request body for `POST /api/token/`. Transient: serialized onto the
/// wire and never stored anywhere.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Animal species as constrained by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Species {
    #[default]
    #[serde(rename = "cachorro")]
    Dog,
    #[serde(rename = "gato")]
    Cat,
    #[serde(rename = "outro")]
    Other,
}

impl Species {
    /// All species, in the order the form select offers them.
    pub const ALL: [Species; 3] = [Species::Dog, Species::Cat, Species::Other];

    /// Wire value used in JSON bodies and `<select>` option values.
    pub fn as_value(self) -> &'static str {
        match self {
            Species::Dog => "cachorro",
            Species::Cat => "gato",
            Species::Other => "outro",
        }
    }

    /// Parse a wire value back; unknown strings yield `None`.
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "cachorro" => Some(Species::Dog),
            "gato" => Some(Species::Cat),
            "outro" => Some(Species::Other),
            _ => None,
        }
    }

    /// Display label (pt-BR).
    pub fn label(self) -> &'static str {
        match self {
            Species::Dog => "Cachorro",
            Species::Cat => "Gato",
            Species::Other => "Outro",
        }
    }
}

/// An animal as returned by `/api/v1/animais/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    /// Backend-issued primary key.
    pub id: i64,
    /// Creation timestamp (ISO-8601 string, rendered via `util::format`).
    pub created_at: String,
    #[serde(rename = "nome")]
    pub name: String,
    /// Age in whole years.
    #[serde(rename = "idade")]
    pub age: u32,
    #[serde(rename = "especie")]
    pub species: Species,
    #[serde(rename = "adotado")]
    pub adopted: bool,
    /// Owning NGO primary key.
    pub ong_id: i64,
    /// NGO display name, when the serializer expands it.
    #[serde(rename = "ong_nome")]
    pub ong_name: Option<String>,
    /// Adopter primary key; `null` while the animal is unadopted.
    #[serde(rename = "adotante_id")]
    pub adopter_id: Option<i64>,
    /// Adopter display name, when the serializer expands it.
    #[serde(rename = "adotante_nome")]
    pub adopter_name: Option<String>,
}

/// Create/update body for an animal.
///
/// The write path takes the NGO key as `ong` while reads expose `ong_id`;
/// the asymmetry is the backend serializer's.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimalPayload {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "idade")]
    pub age: u32,
    #[serde(rename = "especie")]
    pub species: Species,
    #[serde(rename = "adotado")]
    pub adopted: bool,
    /// Owning NGO primary key.
    pub ong: i64,
    /// Adopter primary key, or `null` when unadopted.
    #[serde(rename = "adotante")]
    pub adopter: Option<i64>,
}

/// An adopter as returned by `/api/v1/adotantes/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adopter {
    pub id: i64,
    pub created_at: String,
    #[serde(rename = "nome")]
    pub name: String,
    /// Brazilian taxpayer registry number, formatted or bare.
    pub cpf: String,
    #[serde(rename = "endereco")]
    pub address: String,
    pub email: String,
    #[serde(rename = "telefone")]
    pub phone: String,
}

/// Create/update body for an adopter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdopterPayload {
    #[serde(rename = "nome")]
    pub name: String,
    pub cpf: String,
    #[serde(rename = "endereco")]
    pub address: String,
    pub email: String,
    #[serde(rename = "telefone")]
    pub phone: String,
}

/// A shelter NGO as returned by `/api/v1/ongs/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ngo {
    pub id: i64,
    pub created_at: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "endereco")]
    pub address: String,
    #[serde(rename = "contato")]
    pub contact: String,
}

/// Create/update body for an NGO.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NgoPayload {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "endereco")]
    pub address: String,
    #[serde(rename = "contato")]
    pub contact: String,
}

/// A veterinary consultation as returned by `/api/v1/consultas/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consultation {
    pub id: i64,
    pub created_at: String,
    /// Scheduled date or date-time (ISO-8601 string).
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "veterinario")]
    pub veterinarian: String,
    #[serde(rename = "observacoes")]
    pub notes: Option<String>,
    /// Animal primary key.
    pub animal_id: i64,
    /// Animal display name, when the serializer expands it.
    #[serde(rename = "animal_nome")]
    pub animal_name: Option<String>,
}

impl Consultation {
    /// Display label for the animal column; the serializer may omit the
    /// expanded name, in which case the key stands in.
    pub fn animal_label(&self) -> String {
        match &self.animal_name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => format!("Animal #{}", self.animal_id),
        }
    }
}

/// Create/update body for a consultation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationPayload {
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "veterinario")]
    pub veterinarian: String,
    #[serde(rename = "observacoes")]
    pub notes: Option<String>,
    pub animal_id: i64,
}

/// Either shape a DRF list endpoint may answer with.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    /// Pagination envelope: `{"results": [...], ...}`.
    Paginated { results: Vec<T> },
    /// Bare array: `[...]`.
    Bare(Vec<T>),
}

impl<T> ListResponse<T> {
    /// Normalize both shapes to the plain item list.
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListResponse::Paginated { results } => results,
            ListResponse::Bare(items) => items,
        }
    }
}
