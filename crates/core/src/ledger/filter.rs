//! Per-collection list filters.

use rxerp_shared::types::{AccountId, InvoiceId, JournalEntryId, PartnerId};
use serde::{Deserialize, Serialize};

use super::vocab::{AccountType, InvoiceStatus, PartnerType, PaymentMethod, TaxType};

/// Sentinel shown first in every dropdown; selecting it applies no predicate.
pub const ALL_SENTINEL: &str = "All";

/// A dropdown selection: everything, or one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    /// No predicate.
    All,
    /// Equality on the given value.
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> Selection<T> {
    /// Returns true if the value passes the selection.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }

    /// Returns true if an optional value passes. `None` only passes `All`.
    pub fn admits_opt(&self, value: Option<&T>) -> bool {
        match (self, value) {
            (Self::All, _) => true,
            (Self::Only(expected), Some(value)) => expected == value,
            (Self::Only(_), None) => false,
        }
    }

    /// Returns true if the selection applies no predicate.
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl<T> Selection<T>
where
    T: for<'a> From<&'a str>,
{
    /// Parses a raw dropdown value. Missing, blank and `All` select everything.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::All,
            Some(value) if value.eq_ignore_ascii_case(ALL_SENTINEL) => Self::All,
            Some(value) => Self::Only(T::from(value)),
        }
    }
}

impl<T: std::fmt::Display> Serialize for Selection<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::All => serializer.serialize_str(ALL_SENTINEL),
            Self::Only(value) => serializer.collect_str(value),
        }
    }
}

impl<'de, T> Deserialize<'de> for Selection<T>
where
    T: for<'a> From<&'a str>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(Self::parse(raw.as_deref()))
    }
}

/// Filter over accounts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountFilter {
    /// Account type selection.
    #[serde(default)]
    pub account_type: Selection<AccountType>,
}

/// Filter over partners.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerFilter {
    /// Partner type selection.
    #[serde(default)]
    pub partner_type: Selection<PartnerType>,
}

/// Filter over invoices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceFilter {
    /// Status selection.
    #[serde(default)]
    pub status: Selection<InvoiceStatus>,
    /// Restrict to one partner.
    #[serde(default)]
    pub partner_id: Option<PartnerId>,
}

/// Filter over invoice lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLineFilter {
    /// Restrict to one invoice.
    #[serde(default)]
    pub invoice_id: Option<InvoiceId>,
}

/// Filter over opening balances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenBalanceFilter {
    /// Restrict to one account.
    #[serde(default)]
    pub account_id: Option<AccountId>,
}

/// Filter over payments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentFilter {
    /// Payment method selection.
    #[serde(default)]
    pub payment_method: Selection<PaymentMethod>,
    /// Restrict to one invoice.
    #[serde(default)]
    pub invoice_id: Option<InvoiceId>,
}

/// Filter over journal entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntryFilter {
    /// Restrict to entries touching this account on either side.
    #[serde(default)]
    pub account_id: Option<AccountId>,
}

/// Filter over journal lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalLineFilter {
    /// Restrict to one journal entry.
    #[serde(default)]
    pub journal_entry_id: Option<JournalEntryId>,
}

/// Filter over tax rates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRateFilter {
    /// Tax type selection.
    #[serde(default)]
    pub tax_type: Selection<TaxType>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("  "))]
    #[case(Some("All"))]
    #[case(Some("all"))]
    fn test_selection_parse_all(#[case] raw: Option<&str>) {
        assert!(Selection::<AccountType>::parse(raw).is_all());
    }

    #[test]
    fn test_selection_parse_value() {
        let selection = Selection::<InvoiceStatus>::parse(Some("paid"));
        assert_eq!(selection, Selection::Only(InvoiceStatus::Paid));
        assert!(selection.admits(&InvoiceStatus::Paid));
        assert!(!selection.admits(&InvoiceStatus::Pending));
    }

    #[test]
    fn test_selection_optional_values() {
        let selection = Selection::Only(TaxType::State);
        assert!(!selection.admits_opt(None));
        assert!(selection.admits_opt(Some(&TaxType::State)));
        assert!(Selection::<TaxType>::All.admits_opt(None));
    }

    #[test]
    fn test_filter_deserializes_from_query_shape() {
        let filter: PaymentFilter =
            serde_json::from_str(r#"{"payment_method":"credit card"}"#).unwrap();
        assert_eq!(
            filter.payment_method,
            Selection::Only(PaymentMethod::CreditCard)
        );
        assert_eq!(filter.invoice_id, None);

        let empty: AccountFilter = serde_json::from_str("{}").unwrap();
        assert!(empty.account_type.is_all());
    }
}
