//! The ledger overview: records, metrics and dropdown options in one read.
//!
//! The read path never fails. A collection the store cannot load is logged
//! and shown empty so the rest of the page still renders.

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::filter::LedgerFilter;
use super::metrics::LedgerMetrics;
use super::options::FilterOptions;
use super::summary::{JournalTotals, PaymentSummary, journal_totals, payment_summaries};
use crate::ledger::records::{
    Account, Invoice, InvoiceLine, JournalEntry, JournalLine, OpenBalance, Partner, Payment,
    TaxRate,
};
use crate::ledger::service::LedgerService;
use crate::ledger::store::{Record, RecordStore};

/// Everything the ledger page shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerView {
    /// Accounts passing the filter.
    pub accounts: Vec<Account>,
    /// Partners passing the filter.
    pub partners: Vec<Partner>,
    /// Invoices passing the filter.
    pub invoices: Vec<Invoice>,
    /// All invoice lines.
    pub invoice_lines: Vec<InvoiceLine>,
    /// All opening balances.
    pub open_balances: Vec<OpenBalance>,
    /// Payments passing the filter.
    pub payments: Vec<Payment>,
    /// All journal entries.
    pub journal_entries: Vec<JournalEntry>,
    /// All journal lines.
    pub journal_lines: Vec<JournalLine>,
    /// Tax rates passing the filter.
    pub tax_rates: Vec<TaxRate>,
    /// Metrics over the filtered invoices and accounts.
    pub metrics: LedgerMetrics,
    /// Dropdown options over the unfiltered collections.
    pub options: FilterOptions,
    /// Payments per filtered invoice.
    pub payment_summaries: Vec<PaymentSummary>,
    /// Line totals per journal entry.
    pub journal_totals: Vec<JournalTotals>,
}

/// Lists a collection, degrading to empty on store failure.
async fn load_or_empty<R: Record>(store: &dyn RecordStore<R>, filter: &R::Filter) -> Vec<R> {
    match store.list(filter).await {
        Ok(rows) => rows,
        Err(e) => {
            error!(
                error = %e,
                collection = %R::COLLECTION,
                "Failed to load ledger collection, showing it empty"
            );
            Vec::new()
        }
    }
}

/// Loads the filtered rows and, when the filter narrows, the unfiltered rows too.
async fn load_both<R: Record>(
    store: &dyn RecordStore<R>,
    filter: R::Filter,
    narrows: bool,
) -> (Vec<R>, Vec<R>) {
    let filtered = load_or_empty(store, &filter).await;
    let unfiltered = if narrows {
        load_or_empty(store, &R::Filter::default()).await
    } else {
        filtered.clone()
    };
    (filtered, unfiltered)
}

impl LedgerService {
    /// Builds the ledger overview for the given dropdown selections.
    pub async fn overview(&self, filter: &LedgerFilter) -> LedgerView {
        let store = self.store();

        let (accounts, all_accounts) =
            load_both::<Account>(store.accounts(), filter.accounts(), !filter.account_type.is_all())
                .await;
        let (partners, all_partners) =
            load_both(store.partners(), filter.partners(), !filter.partner_type.is_all()).await;
        let (invoices, all_invoices) =
            load_both(store.invoices(), filter.invoices(), !filter.invoice_status.is_all()).await;
        let (payments, all_payments) = load_both::<Payment>(
            store.payments(),
            filter.payments(),
            !filter.payment_method.is_all(),
        )
        .await;
        let (tax_rates, all_tax_rates) =
            load_both::<TaxRate>(store.tax_rates(), filter.tax_rates(), !filter.tax_type.is_all())
                .await;

        let invoice_lines = load_or_empty(store.invoice_lines(), &Default::default()).await;
        let open_balances = load_or_empty(store.open_balances(), &Default::default()).await;
        let journal_entries =
            load_or_empty::<JournalEntry>(store.journal_entries(), &Default::default()).await;
        let journal_lines = load_or_empty(store.journal_lines(), &Default::default()).await;

        let metrics = LedgerMetrics::compute(&invoices, &accounts);
        let options = FilterOptions::collect(
            &all_accounts,
            &all_partners,
            &all_invoices,
            &all_payments,
            &all_tax_rates,
        );
        let payment_summaries = payment_summaries(&invoices, &all_payments);
        let journal_totals = journal_totals(&journal_entries, &journal_lines);

        debug!(
            invoices = invoices.len(),
            accounts = accounts.len(),
            filtered = !filter.is_empty(),
            "Ledger overview built"
        );

        LedgerView {
            accounts,
            partners,
            invoices,
            invoice_lines,
            open_balances,
            payments,
            journal_entries,
            journal_lines,
            tax_rates,
            metrics,
            options,
            payment_summaries,
            journal_totals,
        }
    }
}
