//! Typed IDs for type-safe entity references.
//!
//! Every ledger row is keyed by an integer surrogate assigned by the store.
//! Wrapping the raw `i32` prevents accidentally passing a `PartnerId` where an
//! `InvoiceId` is expected.

use serde::{Deserialize, Serialize};

/// Common behaviour of integer surrogate keys.
pub trait SurrogateId: Copy + Eq + std::hash::Hash + std::fmt::Display + Send + Sync {
    /// Wraps a raw key.
    fn from_raw(raw: i32) -> Self;

    /// Returns the raw key.
    fn raw(self) -> i32;
}

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i32);

        impl $name {
            /// Placeholder carried by records that have not been stored yet.
            pub const UNASSIGNED: Self = Self(0);

            /// Creates an ID from a raw key.
            #[must_use]
            pub const fn new(raw: i32) -> Self {
                Self(raw)
            }

            /// Returns the raw key.
            #[must_use]
            pub const fn get(self) -> i32 {
                self.0
            }

            /// Returns true if this looks like a key the store could have assigned.
            #[must_use]
            pub const fn is_assigned(self) -> bool {
                self.0 > 0
            }
        }

        impl SurrogateId for $name {
            fn from_raw(raw: i32) -> Self {
                Self(raw)
            }

            fn raw(self) -> i32 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }

        impl From<i32> for $name {
            fn from(raw: i32) -> Self {
                Self(raw)
            }
        }
    };
}

typed_id!(AccountId, "Unique identifier for a chart of accounts entry.");
typed_id!(PartnerId, "Unique identifier for a business partner.");
typed_id!(InvoiceId, "Unique identifier for an invoice.");
typed_id!(InvoiceLineId, "Unique identifier for an invoice line.");
typed_id!(OpenBalanceId, "Unique identifier for an opening balance snapshot.");
typed_id!(PaymentId, "Unique identifier for a payment.");
typed_id!(JournalEntryId, "Unique identifier for a journal entry.");
typed_id!(JournalLineId, "Unique identifier for a journal line.");
typed_id!(TaxRateId, "Unique identifier for a tax rate.");

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
