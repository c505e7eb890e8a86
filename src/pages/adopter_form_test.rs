use super::*;

// ============================================================================
// Banner wording
// ============================================================================

#[test]
fn success_message_matches_the_mode() {
    assert_eq!(success_message(true), "Adotante atualizado com sucesso!");
    assert_eq!(success_message(false), "Adotante cadastrado com sucesso!");
}

#[test]
fn rejection_keeps_the_server_wording() {
    let err = ApiError::Rejected {
        status: 400,
        message: Some("cpf: CPF inválido.".to_owned()),
    };
    assert_eq!(save_error_message(&err), "Erro ao salvar: cpf: CPF inválido.");
}

#[test]
fn rejection_without_wording_still_reads_as_a_save_error() {
    let err = ApiError::Rejected { status: 500, message: None };
    assert_eq!(save_error_message(&err), "Erro ao salvar: o servidor respondeu 500");
}

#[test]
fn transport_failures_read_as_network_errors() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(save_error_message(&err), "Erro de rede. Tente novamente.");

    let err = ApiError::Malformed("EOF".to_owned());
    assert_eq!(save_error_message(&err), "Erro de rede. Tente novamente.");
}
