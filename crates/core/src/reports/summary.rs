//! Informational per-invoice and per-entry totals.
//!
//! Nothing here is enforced: invoices may be over-paid and journal lines need
//! not balance.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rxerp_shared::types::{InvoiceId, JournalEntryId};
use serde::{Deserialize, Serialize};

use crate::ledger::records::{Invoice, JournalEntry, JournalLine, Payment};

/// Payments received against one invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSummary {
    /// The invoice.
    pub invoice_id: InvoiceId,
    /// Invoice number.
    pub invoice_number: String,
    /// Invoice total.
    pub amount: Decimal,
    /// Sum of its payments.
    pub paid_total: Decimal,
    /// `amount - paid_total`; negative when over-paid.
    pub outstanding: Decimal,
    /// Number of payments.
    pub payment_count: usize,
}

/// Line totals of one journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalTotals {
    /// The entry.
    pub journal_entry_id: JournalEntryId,
    /// Journal number.
    pub journal_number: String,
    /// Sum of line debits.
    pub total_debit: Decimal,
    /// Sum of line credits.
    pub total_credit: Decimal,
    /// Number of lines.
    pub line_count: usize,
}

/// Summarizes payments per invoice, in invoice order.
#[must_use]
pub fn payment_summaries(invoices: &[Invoice], payments: &[Payment]) -> Vec<PaymentSummary> {
    let mut paid: HashMap<InvoiceId, (Decimal, usize)> = HashMap::new();
    for payment in payments {
        let slot = paid.entry(payment.invoice_id).or_default();
        slot.0 += payment.payment_amount;
        slot.1 += 1;
    }

    invoices
        .iter()
        .map(|invoice| {
            let (paid_total, payment_count) = paid.get(&invoice.id).copied().unwrap_or_default();
            PaymentSummary {
                invoice_id: invoice.id,
                invoice_number: invoice.invoice_number.clone(),
                amount: invoice.amount,
                paid_total,
                outstanding: invoice.amount - paid_total,
                payment_count,
            }
        })
        .collect()
}

/// Sums journal lines per entry, in entry order.
#[must_use]
pub fn journal_totals(entries: &[JournalEntry], lines: &[JournalLine]) -> Vec<JournalTotals> {
    let mut sums: HashMap<JournalEntryId, (Decimal, Decimal, usize)> = HashMap::new();
    for line in lines {
        let slot = sums.entry(line.journal_entry_id).or_default();
        slot.0 += line.debit;
        slot.1 += line.credit;
        slot.2 += 1;
    }

    entries
        .iter()
        .map(|entry| {
            let (total_debit, total_credit, line_count) =
                sums.get(&entry.id).copied().unwrap_or_default();
            JournalTotals {
                journal_entry_id: entry.id,
                journal_number: entry.journal_number.clone(),
                total_debit,
                total_credit,
                line_count,
            }
        })
        .collect()
}
