//! The financial ledger.
//!
//! This module covers the nine ledger collections:
//! - Records and their open vocabularies
//! - Write inputs with required-field and range checks
//! - The persistence gateway contract and an in-memory implementation
//! - The operations service that validates and applies mutations
//! - Errors and the `{success, message, record?}` outcome envelope

pub mod error;
pub mod filter;
pub mod input;
pub mod memory;
pub mod outcome;
pub mod records;
pub mod service;
pub mod store;
pub mod vocab;

pub use error::{ErrorKind, LedgerError};
pub use filter::{
    ALL_SENTINEL, AccountFilter, InvoiceFilter, InvoiceLineFilter, JournalEntryFilter,
    JournalLineFilter, OpenBalanceFilter, PartnerFilter, PaymentFilter, Selection, TaxRateFilter,
};
pub use input::{
    AccountInput, InvoiceInput, InvoiceLineInput, JournalEntryInput, JournalLineInput,
    OpenBalanceInput, PartnerInput, PaymentInput, TaxRateInput,
};
pub use memory::MemoryStore;
pub use outcome::{Mutation, OperationOutcome, SYSTEM_FAILURE_MESSAGE, format_money};
pub use records::{
    Account, Invoice, InvoiceLine, JournalEntry, JournalLine, OpenBalance, Partner, Payment,
    TaxRate,
};
pub use service::LedgerService;
pub use store::{Collection, KeyedStore, LedgerStore, Record, RecordStore, StoreError};
pub use vocab::{AccountType, InvoiceStatus, PartnerType, PaymentMethod, TaxType};
