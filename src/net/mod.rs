//! HTTP client layer: wire types, error taxonomy, and the typed endpoint
//! surface over the PetCare REST backend.

pub mod api;
pub mod error;
pub mod types;
