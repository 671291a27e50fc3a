//! # Error Types
//!
//! Errors surfaced by the storefront app.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Cosmic Store                           │
//! │                                                                         │
//! │  Startup                                                                │
//! │  ───────                                                                │
//! │  read catalog file ── io::Error ──┐                                     │
//! │  parse / validate ── CoreError ───┴──► AppError ──► exit code 1         │
//! │                                                                         │
//! │  Commands                                                               │
//! │  ────────                                                               │
//! │  add_to_cart(99) ── CoreError::ProductNotFound ──► ApiError             │
//! │  checkout(empty) ─────────────────────────────────► ApiError            │
//! │                                                                         │
//! │  ApiError serialises as { "code": "NOT_FOUND", "message": "..." }       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart mutations themselves never produce an error.

use std::path::PathBuf;

use cosmic_core::CoreError;
use serde::Serialize;
use thiserror::Error;

// =============================================================================
// API Error
// =============================================================================

/// Error returned from a storefront command.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input rejected
    ValidationError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match &err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", id),
            CoreError::DuplicateProductId(_) | CoreError::InvalidCatalog(_) => {
                ApiError::validation(err.to_string())
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Session Error
// =============================================================================

/// Failures while preparing or running a session.
#[derive(Debug, Error)]
pub enum AppError {
    /// The configured catalog file could not be read.
    #[error("Failed to read catalog file {}: {source}", path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file was read but is not a valid catalog.
    #[error("Catalog rejected: {0}")]
    Catalog(#[from] CoreError),

    /// Terminal input/output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
