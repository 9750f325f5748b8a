//! Promptbase domain types.
//!
//! Pure logic with no I/O: identifiers, the error taxonomy, prompt field
//! validation, list-query parameters and the edit-session slot. Shared by the
//! database layer and the HTTP API.

pub mod error;
pub mod prompt;
pub mod query;
pub mod session;
pub mod types;
