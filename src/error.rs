//! # Errors
//!
//! This module defines the errors surfaced by the ceremony endpoints.
//! `Display` yields the underlying description verbatim so callers can show
//! it to users unchanged; [`Error::to_json`] provides a structured rendering
//! for presentation layers that want one.

use serde_json::{json, Value};
use thiserror::Error;

/// Errors surfaced by the ceremony endpoints.
#[derive(Error, Debug)]
pub enum Error {
    /// The request envelope failed validation: malformed outer JSON, a
    /// missing or non-string required field, malformed nested options JSON,
    /// or an empty custom field name.
    ///
    /// Surfaced before the authenticator is invoked; no partial output is
    /// produced.
    #[error("{0}")]
    InvalidInput(String),

    /// The authenticator capability rejected the ceremony, timed out, or the
    /// user cancelled. The capability's message is preserved verbatim.
    ///
    /// Ceremonies are tied to single-use challenge material, so a failed
    /// ceremony is never retried; a fresh request must come from the party
    /// that issued the challenge.
    #[error("{0}")]
    Ceremony(String),

    /// An internal failure while re-serializing the ceremony result.
    #[error("{0}")]
    ServerError(String),
}

impl Error {
    /// Returns the error code for the error variant.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::Ceremony(_) => "ceremony_error",
            Self::ServerError(_) => "server_error",
        }
    }

    /// Transform the error to a JSON object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({"error": self.code(), "error_description": self.to_string()})
    }
}
