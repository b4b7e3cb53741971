//! PostgreSQL-backed ledger gateway.

use rxerp_core::ledger::{
    Account, Invoice, InvoiceLine, JournalEntry, JournalLine, KeyedStore, LedgerStore,
    OpenBalance, Partner, Payment, RecordStore, TaxRate,
};
use sea_orm::DatabaseConnection;

use super::{
    AccountRepository, InvoiceLineRepository, InvoiceRepository, JournalEntryRepository,
    JournalLineRepository, OpenBalanceRepository, PartnerRepository, PaymentRepository,
    TaxRateRepository,
};

/// All ledger repositories over one connection pool.
#[derive(Debug, Clone)]
pub struct PostgresLedgerStore {
    accounts: AccountRepository,
    partners: PartnerRepository,
    invoices: InvoiceRepository,
    invoice_lines: InvoiceLineRepository,
    open_balances: OpenBalanceRepository,
    payments: PaymentRepository,
    journal_entries: JournalEntryRepository,
    journal_lines: JournalLineRepository,
    tax_rates: TaxRateRepository,
}

impl PostgresLedgerStore {
    /// Creates the store. The connection is a pool and cheap to clone.
    #[must_use]
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            accounts: AccountRepository::new(db.clone()),
            partners: PartnerRepository::new(db.clone()),
            invoices: InvoiceRepository::new(db.clone()),
            invoice_lines: InvoiceLineRepository::new(db.clone()),
            open_balances: OpenBalanceRepository::new(db.clone()),
            payments: PaymentRepository::new(db.clone()),
            journal_entries: JournalEntryRepository::new(db.clone()),
            journal_lines: JournalLineRepository::new(db.clone()),
            tax_rates: TaxRateRepository::new(db.clone()),
        }
    }
}

impl LedgerStore for PostgresLedgerStore {
    fn accounts(&self) -> &dyn KeyedStore<Account> {
        &self.accounts
    }

    fn partners(&self) -> &dyn RecordStore<Partner> {
        &self.partners
    }

    fn invoices(&self) -> &dyn RecordStore<Invoice> {
        &self.invoices
    }

    fn invoice_lines(&self) -> &dyn RecordStore<InvoiceLine> {
        &self.invoice_lines
    }

    fn open_balances(&self) -> &dyn RecordStore<OpenBalance> {
        &self.open_balances
    }

    fn payments(&self) -> &dyn KeyedStore<Payment> {
        &self.payments
    }

    fn journal_entries(&self) -> &dyn KeyedStore<JournalEntry> {
        &self.journal_entries
    }

    fn journal_lines(&self) -> &dyn RecordStore<JournalLine> {
        &self.journal_lines
    }

    fn tax_rates(&self) -> &dyn KeyedStore<TaxRate> {
        &self.tax_rates
    }
}
