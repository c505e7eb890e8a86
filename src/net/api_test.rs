use super::*;

// ============================================================================
// Endpoint builders
// ============================================================================

#[test]
fn api_url_joins_base_and_path() {
    assert_eq!(api_url(TOKEN_PATH), "http://127.0.0.1:8000/api/token/");
}

#[test]
fn collection_endpoints_cover_every_resource() {
    assert_eq!(collection_endpoint(ANIMALS), "/api/v1/animais/");
    assert_eq!(collection_endpoint(ADOPTERS), "/api/v1/adotantes/");
    assert_eq!(collection_endpoint(CONSULTATIONS), "/api/v1/consultas/");
    assert_eq!(collection_endpoint(NGOS), "/api/v1/ongs/");
}

#[test]
fn item_endpoint_keeps_the_trailing_slash() {
    assert_eq!(item_endpoint(ANIMALS, 7), "/api/v1/animais/7/");
    assert_eq!(item_endpoint(NGOS, 123), "/api/v1/ongs/123/");
}

#[test]
fn available_animals_endpoint_filters_on_adotado() {
    assert_eq!(available_animals_endpoint(), "/api/v1/animais/?adotado=false");
}

// ============================================================================
// Bearer header
// ============================================================================

#[test]
fn bearer_prefixes_the_raw_token() {
    assert_eq!(bearer("abc.def.ghi"), "Bearer abc.def.ghi");
}

#[test]
fn bearer_does_not_touch_token_contents() {
    let token = "eyJhbGciOiJIUzI1NiJ9.payload.sig";
    assert_eq!(bearer(token), format!("Bearer {token}"));
}

#[test]
fn bearer_header_wraps_a_present_token() {
    assert_eq!(bearer_header(Some("abc.def.ghi")).as_deref(), Some("Bearer abc.def.ghi"));
}

#[test]
fn no_stored_token_produces_no_header() {
    assert_eq!(bearer_header(None), None);
}
