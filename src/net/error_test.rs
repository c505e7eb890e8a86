use super::*;

// =============================================================
// rejection_message
// =============================================================

#[test]
fn rejection_message_prefers_detail() {
    let body = serde_json::json!({
        "detail": "Método não permitido.",
        "nome": ["Este campo é obrigatório."]
    });
    assert_eq!(rejection_message(&body).as_deref(), Some("Método não permitido."));
}

#[test]
fn rejection_message_concatenates_field_errors() {
    let body = serde_json::json!({
        "cpf": ["CPF inválido."],
        "email": ["Já existe um adotante com este email.", "Formato inválido."]
    });
    assert_eq!(
        rejection_message(&body).as_deref(),
        Some("CPF inválido.; Já existe um adotante com este email.; Formato inválido.")
    );
}

#[test]
fn rejection_message_includes_bare_string_values() {
    let body = serde_json::json!({ "nome": "Obrigatório." });
    assert_eq!(rejection_message(&body).as_deref(), Some("Obrigatório."));
}

#[test]
fn rejection_message_yields_nothing_for_unusable_bodies() {
    assert_eq!(rejection_message(&serde_json::json!({})), None);
    assert_eq!(rejection_message(&serde_json::Value::Null), None);
}

#[test]
fn rejection_message_ignores_non_string_entries() {
    let body = serde_json::json!({ "count": 3, "flags": [1, 2] });
    assert_eq!(rejection_message(&body), None);
}

// =============================================================
// ApiError display
// =============================================================

#[test]
fn api_error_displays_portuguese_messages() {
    assert_eq!(
        ApiError::Network("fetch falhou".to_owned()).to_string(),
        "falha de rede: fetch falhou"
    );
    assert_eq!(
        ApiError::Unauthorized.to_string(),
        "sessão expirada, faça login novamente"
    );
    assert_eq!(
        ApiError::Rejected { status: 400, message: Some("CPF inválido.".to_owned()) }.to_string(),
        "CPF inválido."
    );
}

#[test]
fn rejected_without_a_message_names_the_status() {
    assert_eq!(
        ApiError::Rejected { status: 500, message: None }.to_string(),
        "o servidor respondeu 500"
    );
}

#[test]
fn is_unauthorized_only_matches_the_lapse_variant() {
    assert!(ApiError::Unauthorized.is_unauthorized());
    assert!(!ApiError::Network("x".to_owned()).is_unauthorized());
    assert!(!ApiError::Rejected { status: 403, message: None }.is_unauthorized());
}

// =============================================================
// Uniform login failure
// =============================================================

#[test]
fn every_api_error_collapses_into_the_same_authentication_error() {
    let causes = [
        ApiError::Network("sem conexão".to_owned()),
        ApiError::Unauthorized,
        ApiError::Rejected { status: 401, message: Some("No active account".to_owned()) },
        ApiError::Rejected { status: 500, message: None },
        ApiError::Malformed("EOF".to_owned()),
    ];
    for cause in causes {
        assert_eq!(AuthenticationError::from(cause), AuthenticationError);
    }
}

#[test]
fn authentication_error_message_is_fixed() {
    assert_eq!(AuthenticationError.to_string(), "usuário ou senha inválidos");
}
