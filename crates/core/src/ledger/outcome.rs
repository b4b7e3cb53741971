//! Results of ledger mutations as shown to the user.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tracing::{debug, error};

use super::error::{ErrorKind, LedgerError};

/// Message shown when a store fault aborts an operation.
pub const SYSTEM_FAILURE_MESSAGE: &str =
    "The ledger could not be updated right now. Please try again.";

/// A successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation<T> {
    /// Success message.
    pub message: String,
    /// The stored record, absent for deletes.
    pub record: Option<T>,
}

impl<T> Mutation<T> {
    /// A mutation that produced a record.
    #[must_use]
    pub fn stored(message: impl Into<String>, record: T) -> Self {
        Self {
            message: message.into(),
            record: Some(record),
        }
    }

    /// A mutation with nothing to return.
    #[must_use]
    pub fn removed(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            record: None,
        }
    }
}

/// `{success, message, record?}` envelope returned for every mutation.
#[derive(Debug, Clone, Serialize)]
pub struct OperationOutcome<T> {
    /// Whether the mutation was applied.
    pub success: bool,
    /// One sentence describing what happened.
    pub message: String,
    /// Machine-readable error code on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    /// The stored record, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<T>,
    /// Failure category, kept for the transport layer.
    #[serde(skip)]
    pub kind: Option<ErrorKind>,
}

impl<T> OperationOutcome<T> {
    /// Converts an operation result into an outcome.
    ///
    /// System faults are logged and replaced with a generic message; every
    /// other failure keeps its own message.
    pub fn settle(result: Result<Mutation<T>, LedgerError>) -> Self {
        match result {
            Ok(mutation) => Self {
                success: true,
                message: mutation.message,
                error: None,
                record: mutation.record,
                kind: None,
            },
            Err(err) => {
                let message = if err.is_system() {
                    error!(error = %err, "Ledger operation failed");
                    SYSTEM_FAILURE_MESSAGE.to_string()
                } else {
                    debug!(error = %err, code = err.error_code(), "Ledger operation rejected");
                    err.to_string()
                };
                Self {
                    success: false,
                    message,
                    error: Some(err.error_code()),
                    record: None,
                    kind: Some(err.kind()),
                }
            }
        }
    }

    /// HTTP status for this outcome; `created` is used for successful adds.
    #[must_use]
    pub fn http_status_code(&self, created: bool) -> u16 {
        match self.kind {
            Some(kind) => kind.http_status_code(),
            None if created => 201,
            None => 200,
        }
    }
}

/// Formats an amount as US currency, e.g. `$1,234.50` or `-$50.00`.
#[must_use]
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .abs();
    let text = format!("{rounded:.2}");
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{cents}")
}

/// Formats a percentage without trailing zeros, e.g. `8` or `7.25`.
#[must_use]
pub fn format_percent(percentage: Decimal) -> String {
    percentage.normalize().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::store::StoreError;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(500), "$500.00")]
    #[case(dec!(1234.5), "$1,234.50")]
    #[case(dec!(1000000), "$1,000,000.00")]
    #[case(dec!(-50), "-$50.00")]
    #[case(dec!(0.005), "$0.01")]
    #[case(dec!(-0.001), "$0.00")]
    #[case(dec!(999.999), "$1,000.00")]
    fn test_format_money(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(format_money(amount), expected);
    }

    #[rstest]
    #[case(dec!(8), "8")]
    #[case(dec!(8.00), "8")]
    #[case(dec!(7.250), "7.25")]
    fn test_format_percent(#[case] value: Decimal, #[case] expected: &str) {
        assert_eq!(format_percent(value), expected);
    }

    #[test]
    fn test_settle_success() {
        let outcome = OperationOutcome::settle(Ok(Mutation::stored("Saved!", 5)));
        assert!(outcome.success);
        assert_eq!(outcome.message, "Saved!");
        assert_eq!(outcome.record, Some(5));
        assert_eq!(outcome.http_status_code(true), 201);
        assert_eq!(outcome.http_status_code(false), 200);
    }

    #[test]
    fn test_settle_validation_failure_keeps_message() {
        let outcome: OperationOutcome<i32> =
            OperationOutcome::settle(Err(LedgerError::SameAccount));
        assert!(!outcome.success);
        assert_eq!(outcome.message, "Debit and Credit accounts must be different.");
        assert_eq!(outcome.error, Some("SAME_ACCOUNT"));
        assert_eq!(outcome.http_status_code(true), 400);
    }

    #[test]
    fn test_settle_system_failure_hides_details() {
        let outcome: OperationOutcome<i32> = OperationOutcome::settle(Err(LedgerError::Store(
            StoreError::Unavailable("password authentication failed".into()),
        )));
        assert!(!outcome.success);
        assert_eq!(outcome.message, SYSTEM_FAILURE_MESSAGE);
        assert_eq!(outcome.http_status_code(false), 500);
    }

    #[test]
    fn test_outcome_serialization_shape() {
        let outcome: OperationOutcome<i32> =
            OperationOutcome::settle(Ok(Mutation::removed("Gone.")));
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "message": "Gone."}));
    }
}
