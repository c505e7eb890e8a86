//! Cross-cutting helpers shared by pages.

pub mod format;
pub mod guard;
pub mod session_store;
