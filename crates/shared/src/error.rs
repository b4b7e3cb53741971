//! Errors raised outside the ledger itself: session gating, unknown routes
//! and session store faults. Ledger failures use `LedgerError` in core.

use thiserror::Error;

/// Request-level error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// No valid session accompanied the request.
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// The session's role may not use this module.
    #[error("Access denied: {0}")]
    Forbidden(String),

    /// Unknown ledger collection.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Session store failure.
    #[error("Database error: {0}")]
    Database(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Unauthorized(_) => 401,
            Self::Forbidden(_) => 403,
            Self::NotFound(_) => 404,
            Self::Database(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Returns the message without the category prefix.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::Unauthorized(m) | Self::Forbidden(m) | Self::NotFound(m) | Self::Database(m) => m,
        }
    }
}
