//! Shared reactive state provided as context at the app root.

pub mod session;
