//! Dropdown options built from stored values.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ledger::filter::ALL_SENTINEL;
use crate::ledger::records::{Account, Invoice, Partner, Payment, TaxRate};

/// Distinct values offered in each filter dropdown, `All` first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Account types in use.
    pub account_types: Vec<String>,
    /// Partner types in use.
    pub partner_types: Vec<String>,
    /// Invoice statuses in use.
    pub invoice_statuses: Vec<String>,
    /// Payment methods in use.
    pub payment_methods: Vec<String>,
    /// Tax types in use.
    pub tax_types: Vec<String>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        let only_all = || vec![ALL_SENTINEL.to_string()];
        Self {
            account_types: only_all(),
            partner_types: only_all(),
            invoice_statuses: only_all(),
            payment_methods: only_all(),
            tax_types: only_all(),
        }
    }
}

impl FilterOptions {
    /// Collects the options from unfiltered collections.
    #[must_use]
    pub fn collect(
        accounts: &[Account],
        partners: &[Partner],
        invoices: &[Invoice],
        payments: &[Payment],
        tax_rates: &[TaxRate],
    ) -> Self {
        Self {
            account_types: distinct_options(accounts.iter().map(|a| a.account_type.as_str())),
            partner_types: distinct_options(partners.iter().map(|p| p.partner_type.as_str())),
            invoice_statuses: distinct_options(invoices.iter().map(|i| i.status.as_str())),
            payment_methods: distinct_options(payments.iter().map(|p| p.payment_method.as_str())),
            tax_types: distinct_options(
                tax_rates
                    .iter()
                    .filter_map(|t| t.tax_type.as_ref().map(|t| t.as_str())),
            ),
        }
    }
}

/// Sorted distinct non-blank values with the `All` sentinel prepended.
#[must_use]
pub fn distinct_options<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let distinct: BTreeSet<&str> = values
        .into_iter()
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ALL_SENTINEL))
        .collect();

    std::iter::once(ALL_SENTINEL)
        .chain(distinct)
        .map(str::to_string)
        .collect()
}
