//! Ledger error types.
//!
//! Every failed add, edit or delete ends up as one of these. Messages are the
//! single sentence shown to the user.

use thiserror::Error;

use super::store::{Collection, StoreError};

/// Broad category of a ledger failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing field, bad range or self-referencing journal entry.
    Validation,
    /// Business key already taken.
    DuplicateKey,
    /// Referenced parent does not exist.
    Referential,
    /// Edit or delete target does not exist.
    NotFound,
    /// Store failure.
    System,
}

impl ErrorKind {
    /// Returns the HTTP status code for this category.
    #[must_use]
    pub const fn http_status_code(self) -> u16 {
        match self {
            Self::Validation => 400,
            Self::NotFound => 404,
            Self::DuplicateKey => 409,
            Self::Referential => 422,
            Self::System => 500,
        }
    }
}

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    // ========== Validation Errors ==========
    /// A required field is missing or blank.
    #[error("{0}")]
    Required(&'static str),

    /// A numeric field is outside its allowed range.
    #[error("{0}")]
    OutOfRange(&'static str),

    /// Journal entry debits and credits the same account.
    #[error("Debit and Credit accounts must be different.")]
    SameAccount,

    // ========== Duplicate Key Errors ==========
    /// The business key is already used by another record.
    #[error("{field} '{value}' already exists.")]
    DuplicateKey {
        /// Label of the business key field.
        field: &'static str,
        /// The conflicting value.
        value: String,
    },

    // ========== Referential Errors ==========
    /// A referenced parent record does not exist.
    #[error("Selected {reference} not found.")]
    ReferenceNotFound {
        /// What was referenced, e.g. `partner` or `debit account`.
        reference: &'static str,
        /// Raw id that was looked up.
        id: i32,
    },

    // ========== Not Found Errors ==========
    /// The edit or delete target does not exist.
    #[error("{} {id} was not found.", .collection.label())]
    NotFound {
        /// Collection searched.
        collection: Collection,
        /// Raw id searched for.
        id: i32,
    },

    // ========== System Errors ==========
    /// The store failed.
    #[error("Storage error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for LedgerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation { collection, key } => Self::DuplicateKey {
                field: collection.business_key_label().unwrap_or("Key"),
                value: key,
            },
            StoreError::Missing { collection, id } => Self::NotFound { collection, id },
            other @ StoreError::Unavailable(_) => Self::Store(other),
        }
    }
}

impl LedgerError {
    /// Returns the failure category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Required(_) | Self::OutOfRange(_) | Self::SameAccount => ErrorKind::Validation,
            Self::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            Self::ReferenceNotFound { .. } => ErrorKind::Referential,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Store(_) => ErrorKind::System,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Required(_) => "REQUIRED_FIELD",
            Self::OutOfRange(_) => "OUT_OF_RANGE",
            Self::SameAccount => "SAME_ACCOUNT",
            Self::DuplicateKey { .. } => "DUPLICATE_KEY",
            Self::ReferenceNotFound { .. } => "REFERENCE_NOT_FOUND",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Store(_) => "STORAGE_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        self.kind().http_status_code()
    }

    /// Returns true for faults the caller cannot fix by changing the input.
    #[must_use]
    pub const fn is_system(&self) -> bool {
        matches!(self.kind(), ErrorKind::System)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(LedgerError::Required("x").error_code(), "REQUIRED_FIELD");
        assert_eq!(LedgerError::SameAccount.error_code(), "SAME_ACCOUNT");
        assert_eq!(
            LedgerError::ReferenceNotFound {
                reference: "partner",
                id: 7
            }
            .error_code(),
            "REFERENCE_NOT_FOUND"
        );
    }

    #[test]
    fn test_http_status_codes() {
        assert_eq!(LedgerError::OutOfRange("x").http_status_code(), 400);
        assert_eq!(
            LedgerError::NotFound {
                collection: Collection::Invoices,
                id: 1
            }
            .http_status_code(),
            404
        );
        assert_eq!(
            LedgerError::DuplicateKey {
                field: "Tax code",
                value: "VAT".into()
            }
            .http_status_code(),
            409
        );
        assert_eq!(
            LedgerError::ReferenceNotFound {
                reference: "invoice",
                id: 999
            }
            .http_status_code(),
            422
        );
        assert_eq!(
            LedgerError::Store(StoreError::Unavailable("down".into())).http_status_code(),
            500
        );
    }

    #[test]
    fn test_error_display() {
        let err = LedgerError::DuplicateKey {
            field: "Account number",
            value: "1000".to_string(),
        };
        assert_eq!(err.to_string(), "Account number '1000' already exists.");

        let err = LedgerError::ReferenceNotFound {
            reference: "debit account",
            id: 3,
        };
        assert_eq!(err.to_string(), "Selected debit account not found.");

        let err = LedgerError::NotFound {
            collection: Collection::JournalLines,
            id: 12,
        };
        assert_eq!(err.to_string(), "Journal line 12 was not found.");
    }

    #[test]
    fn test_store_errors_map_to_categories() {
        let dup: LedgerError = StoreError::UniqueViolation {
            collection: Collection::Payments,
            key: "PAY-1".to_string(),
        }
        .into();
        assert_eq!(dup.kind(), ErrorKind::DuplicateKey);
        assert_eq!(dup.to_string(), "Payment number 'PAY-1' already exists.");

        let missing: LedgerError = StoreError::Missing {
            collection: Collection::Accounts,
            id: 4,
        }
        .into();
        assert_eq!(missing.kind(), ErrorKind::NotFound);

        let down: LedgerError = StoreError::Unavailable("connection refused".into()).into();
        assert!(down.is_system());
    }
}
