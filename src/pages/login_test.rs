use super::*;

// ============================================================================
// Credential validation
// ============================================================================

#[test]
fn accepts_plain_credentials() {
    let (user, pass) = validate_credentials("ana", "s3cret").unwrap();
    assert_eq!(user, "ana");
    assert_eq!(pass, "s3cret");
}

#[test]
fn trims_the_username_only() {
    let (user, pass) = validate_credentials("  ana  ", "com espaço ").unwrap();
    assert_eq!(user, "ana");
    assert_eq!(pass, "com espaço ");
}

#[test]
fn rejects_missing_username() {
    assert!(validate_credentials("   ", "s3cret").is_err());
}

#[test]
fn rejects_missing_password() {
    assert!(validate_credentials("ana", "").is_err());
}

#[test]
fn rejection_message_names_both_fields() {
    let err = validate_credentials("", "").unwrap_err();
    assert_eq!(err, "Informe usuário e senha.");
}

#[test]
fn failure_banner_does_not_single_out_a_field() {
    assert_eq!(LOGIN_FAILED, "Falha no login. Verifique seu usuário e senha.");
}
