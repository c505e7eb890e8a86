//! Error taxonomy for the REST boundary.
//!
//! DESIGN
//! ======
//! Every variant renders as a user-displayable pt-BR string, because the
//! propagation policy is "convert at the call site, show inline, never
//! escalate". Login failures are flattened further: all causes collapse into
//! one [`AuthenticationError`] so callers never see status distinctions.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure of a REST call, already shaped for inline display.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport failed before any response existed.
    #[error("falha de rede: {0}")]
    Network(String),
    /// A protected endpoint answered 401 after the session was established.
    #[error("sessão expirada, faça login novamente")]
    Unauthorized,
    /// Any other non-2xx answer; `message` is extracted from the DRF body
    /// when it carries one.
    #[error("{}", rejected_display(.status, .message))]
    Rejected {
        /// HTTP status code, kept for logging.
        status: u16,
        /// Display message, see [`rejection_message`]. `None` when the body
        /// had nothing usable; callers pick their own fallback wording.
        message: Option<String>,
    },
    /// A 2xx answer whose body did not decode.
    #[error("resposta inesperada do servidor: {0}")]
    Malformed(String),
}

impl ApiError {
    /// True when the session should be considered lapsed.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

fn rejected_display(status: impl std::fmt::Display, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => format!("o servidor respondeu {status}"),
    }
}

/// Login rejection. One value for every underlying cause: bad credentials,
/// transport failure, and malformed responses are indistinguishable to the
/// caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Error)]
#[error("usuário ou senha inválidos")]
pub struct AuthenticationError;

impl From<ApiError> for AuthenticationError {
    fn from(_: ApiError) -> Self {
        AuthenticationError
    }
}

/// Extract a display message from a DRF error body.
///
/// Preference order: the `detail` string, then every field-error entry
/// concatenated with `"; "` (DRF reports validation failures as lists keyed
/// by field name). A body with nothing usable yields `None`, leaving the
/// caller's own fallback in charge.
pub fn rejection_message(body: &serde_json::Value) -> Option<String> {
    if let Some(detail) = body.get("detail").and_then(serde_json::Value::as_str) {
        return Some(detail.to_owned());
    }
    if let Some(map) = body.as_object() {
        let mut parts = Vec::new();
        for value in map.values() {
            match value {
                serde_json::Value::String(message) => parts.push(message.clone()),
                serde_json::Value::Array(messages) => {
                    parts.extend(messages.iter().filter_map(|m| m.as_str().map(str::to_owned)));
                }
                _ => {}
            }
        }
        if !parts.is_empty() {
            return Some(parts.join("; "));
        }
    }
    None
}
