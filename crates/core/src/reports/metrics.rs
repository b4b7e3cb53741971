//! Aggregate ledger metrics.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::records::{Account, Invoice};
use crate::ledger::vocab::{AccountType, InvoiceStatus};

/// Headline figures for the loaded ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerMetrics {
    /// Sum of invoice amounts, excluding overdue invoices.
    pub total_revenue: Decimal,
    /// Sum of absolute expense account balances.
    pub total_expenses: Decimal,
    /// `total_revenue - total_expenses`.
    pub net_balance: Decimal,
    /// Number of invoices.
    pub total_invoices: usize,
    /// Invoices with status `Paid`.
    pub paid_invoices: usize,
    /// Invoices with status `Pending`.
    pub pending_invoices: usize,
}

impl LedgerMetrics {
    /// Computes the metrics over already loaded (possibly filtered) records.
    #[must_use]
    pub fn compute(invoices: &[Invoice], accounts: &[Account]) -> Self {
        let total_revenue: Decimal = invoices
            .iter()
            .filter(|i| i.status != InvoiceStatus::Overdue)
            .map(|i| i.amount)
            .sum();

        let total_expenses: Decimal = accounts
            .iter()
            .filter(|a| a.account_type == AccountType::Expense)
            .map(|a| a.balance.abs())
            .sum();

        Self {
            total_revenue,
            total_expenses,
            net_balance: total_revenue - total_expenses,
            total_invoices: invoices.len(),
            paid_invoices: invoices
                .iter()
                .filter(|i| i.status == InvoiceStatus::Paid)
                .count(),
            pending_invoices: invoices
                .iter()
                .filter(|i| i.status == InvoiceStatus::Pending)
                .count(),
        }
    }
}
