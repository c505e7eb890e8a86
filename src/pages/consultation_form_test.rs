use super::*;

// ============================================================================
// Field validation
// ============================================================================

#[test]
fn accepts_an_animal_and_a_veterinarian() {
    assert!(validate_consultation(3, "Dra. Paula").is_none());
}

#[test]
fn rejects_the_placeholder_animal_first() {
    let message = validate_consultation(0, "").unwrap();
    assert_eq!(message, "Por favor, selecione um animal.");
}

#[test]
fn rejects_a_blank_veterinarian() {
    let message = validate_consultation(3, "   ").unwrap();
    assert_eq!(message, "O nome do veterinário é obrigatório.");
}

// ============================================================================
// Save failure wording
// ============================================================================

#[test]
fn rejection_keeps_the_server_wording() {
    let err = ApiError::Rejected {
        status: 400,
        message: Some("data: Data inválida.".to_owned()),
    };
    assert_eq!(save_error_message(false, &err), "data: Data inválida.");
}

#[test]
fn fallback_names_the_attempted_action() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(save_error_message(false, &err), "Erro ao agendar a consulta.");
    assert_eq!(save_error_message(true, &err), "Erro ao atualizar a consulta.");
}

#[test]
fn rejection_without_wording_also_names_the_action() {
    let err = ApiError::Rejected { status: 500, message: None };
    assert_eq!(save_error_message(false, &err), "Erro ao agendar a consulta.");
    assert_eq!(save_error_message(true, &err), "Erro ao atualizar a consulta.");
}

// ============================================================================
// Payload assembly
// ============================================================================

#[test]
fn notes_always_ride_along() {
    let payload = build_consultation_payload("2024-03-09", "Dra. Paula", "", 5);
    assert_eq!(payload.notes, Some(String::new()));
    assert_eq!(payload.animal_id, 5);
    assert_eq!(payload.date, "2024-03-09");
}

#[test]
fn veterinarian_is_sent_as_typed() {
    let payload = build_consultation_payload("2024-03-09", " Dr. Zé ", "retorno", 5);
    assert_eq!(payload.veterinarian, " Dr. Zé ");
    assert_eq!(payload.notes.as_deref(), Some("retorno"));
}
