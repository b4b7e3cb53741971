//! Overview filter combining the per-field dropdown selections.

use serde::{Deserialize, Serialize};

use crate::ledger::filter::{
    AccountFilter, InvoiceFilter, PartnerFilter, PaymentFilter, Selection, TaxRateFilter,
};
use crate::ledger::vocab::{AccountType, InvoiceStatus, PartnerType, PaymentMethod, TaxType};

/// Dropdown selections applied to the ledger overview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerFilter {
    /// Account type selection.
    #[serde(default)]
    pub account_type: Selection<AccountType>,
    /// Partner type selection.
    #[serde(default)]
    pub partner_type: Selection<PartnerType>,
    /// Invoice status selection.
    #[serde(default)]
    pub invoice_status: Selection<InvoiceStatus>,
    /// Payment method selection.
    #[serde(default)]
    pub payment_method: Selection<PaymentMethod>,
    /// Tax type selection.
    #[serde(default)]
    pub tax_type: Selection<TaxType>,
}

impl LedgerFilter {
    /// Creates a filter that selects everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no selection narrows anything.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.account_type.is_all()
            && self.partner_type.is_all()
            && self.invoice_status.is_all()
            && self.payment_method.is_all()
            && self.tax_type.is_all()
    }

    /// Account filter for this selection.
    #[must_use]
    pub fn accounts(&self) -> AccountFilter {
        AccountFilter {
            account_type: self.account_type.clone(),
        }
    }

    /// Partner filter for this selection.
    #[must_use]
    pub fn partners(&self) -> PartnerFilter {
        PartnerFilter {
            partner_type: self.partner_type.clone(),
        }
    }

    /// Invoice filter for this selection.
    #[must_use]
    pub fn invoices(&self) -> InvoiceFilter {
        InvoiceFilter {
            status: self.invoice_status.clone(),
            partner_id: None,
        }
    }

    /// Payment filter for this selection.
    #[must_use]
    pub fn payments(&self) -> PaymentFilter {
        PaymentFilter {
            payment_method: self.payment_method.clone(),
            invoice_id: None,
        }
    }

    /// Tax rate filter for this selection.
    #[must_use]
    pub fn tax_rates(&self) -> TaxRateFilter {
        TaxRateFilter {
            tax_type: self.tax_type.clone(),
        }
    }
}
