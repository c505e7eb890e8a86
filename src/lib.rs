//! # petcare-client
//!
//! Leptos + WASM frontend for the PetCare pet-adoption management
//! application, talking to a Django REST backend.
//!
//! This crate contains pages, components, the session state machine, the
//! REST client with bearer-token injection, and browser storage/formatting
//! utilities. Browser-only code sits behind the `csr` feature so the default
//! build (and the test suite) compiles natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
