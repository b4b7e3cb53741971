//! Persistence gateway contract.
//!
//! The ledger service never talks to a database directly. It reaches every
//! collection through [`LedgerStore`], which hands out one [`RecordStore`] per
//! collection. Collections with a business key additionally implement
//! [`KeyedStore`].

use std::cmp::Ordering;
use std::fmt::Debug;

use async_trait::async_trait;
use rxerp_shared::types::SurrogateId;
use thiserror::Error;

use super::records::{
    Account, Invoice, InvoiceLine, JournalEntry, JournalLine, OpenBalance, Partner, Payment,
    TaxRate,
};

/// The named ledger collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Chart of accounts.
    Accounts,
    /// Business partners.
    Partners,
    /// Invoices.
    Invoices,
    /// Invoice lines.
    InvoiceLines,
    /// Opening balance snapshots.
    OpenBalances,
    /// Payments against invoices.
    Payments,
    /// Journal entries.
    JournalEntries,
    /// Journal lines.
    JournalLines,
    /// Tax rates.
    TaxRates,
}

impl Collection {
    /// Every collection, in overview order.
    pub const ALL: [Self; 9] = [
        Self::Accounts,
        Self::Partners,
        Self::Invoices,
        Self::InvoiceLines,
        Self::OpenBalances,
        Self::Payments,
        Self::JournalEntries,
        Self::JournalLines,
        Self::TaxRates,
    ];

    /// URL segment naming the collection.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Accounts => "accounts",
            Self::Partners => "partners",
            Self::Invoices => "invoices",
            Self::InvoiceLines => "invoice-lines",
            Self::OpenBalances => "open-balances",
            Self::Payments => "payments",
            Self::JournalEntries => "journal-entries",
            Self::JournalLines => "journal-lines",
            Self::TaxRates => "tax-rates",
        }
    }

    /// Human-readable singular label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Accounts => "Account",
            Self::Partners => "Partner",
            Self::Invoices => "Invoice",
            Self::InvoiceLines => "Invoice line",
            Self::OpenBalances => "Open balance",
            Self::Payments => "Payment",
            Self::JournalEntries => "Journal entry",
            Self::JournalLines => "Journal line",
            Self::TaxRates => "Tax rate",
        }
    }

    /// Label of the business key, for collections that have one.
    #[must_use]
    pub const fn business_key_label(self) -> Option<&'static str> {
        match self {
            Self::Accounts => Some("Account number"),
            Self::Payments => Some("Payment number"),
            Self::JournalEntries => Some("Journal number"),
            Self::TaxRates => Some("Tax code"),
            _ => None,
        }
    }

    /// Looks a collection up by its URL segment.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised by a store implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The business key is already taken.
    #[error("unique constraint violated in {collection}: '{key}'")]
    UniqueViolation {
        /// Collection holding the key.
        collection: Collection,
        /// The conflicting value.
        key: String,
    },

    /// An update targeted a row that does not exist.
    #[error("{collection} row {id} does not exist")]
    Missing {
        /// Collection that was updated.
        collection: Collection,
        /// Raw id of the row.
        id: i32,
    },

    /// The backend failed or could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// A row in one of the ledger collections.
pub trait Record: Clone + Debug + Send + Sync + 'static {
    /// Surrogate id type.
    type Id: SurrogateId;
    /// Predicate applied by [`RecordStore::list`].
    type Filter: Default + Clone + Debug + Send + Sync;

    /// Collection this record lives in.
    const COLLECTION: Collection;

    /// Returns the surrogate id.
    fn id(&self) -> Self::Id;

    /// Replaces the surrogate id. Stores call this on insert.
    fn set_id(&mut self, id: Self::Id);

    /// Returns true if the record passes the filter.
    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Default list ordering.
    fn ordering(a: &Self, b: &Self) -> Ordering;

    /// Unique business key, if the collection has one.
    fn business_key(&self) -> Option<&str> {
        None
    }
}

/// CRUD access to one collection.
#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    /// Finds a record by id.
    async fn find_by_id(&self, id: R::Id) -> Result<Option<R>, StoreError>;

    /// Lists records passing the filter, in the collection's default order.
    async fn list(&self, filter: &R::Filter) -> Result<Vec<R>, StoreError>;

    /// Inserts a record and returns it with its assigned id.
    async fn insert(&self, record: R) -> Result<R, StoreError>;

    /// Overwrites an existing record.
    async fn update(&self, record: &R) -> Result<(), StoreError>;

    /// Removes a record. Returns true if a row was removed.
    async fn delete(&self, id: R::Id) -> Result<bool, StoreError>;
}

/// A collection with a unique business key.
#[async_trait]
pub trait KeyedStore<R: Record>: RecordStore<R> {
    /// Finds a record by its business key.
    async fn find_by_key(&self, key: &str) -> Result<Option<R>, StoreError>;
}

/// Access to every ledger collection.
pub trait LedgerStore: Send + Sync {
    /// Accounts, keyed by account number.
    fn accounts(&self) -> &dyn KeyedStore<Account>;
    /// Partners.
    fn partners(&self) -> &dyn RecordStore<Partner>;
    /// Invoices.
    fn invoices(&self) -> &dyn RecordStore<Invoice>;
    /// Invoice lines.
    fn invoice_lines(&self) -> &dyn RecordStore<InvoiceLine>;
    /// Opening balances.
    fn open_balances(&self) -> &dyn RecordStore<OpenBalance>;
    /// Payments, keyed by payment number.
    fn payments(&self) -> &dyn KeyedStore<Payment>;
    /// Journal entries, keyed by journal number.
    fn journal_entries(&self) -> &dyn KeyedStore<JournalEntry>;
    /// Journal lines.
    fn journal_lines(&self) -> &dyn RecordStore<JournalLine>;
    /// Tax rates, keyed by tax code.
    fn tax_rates(&self) -> &dyn KeyedStore<TaxRate>;
}
