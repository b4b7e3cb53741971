//! Entity re-exports.

pub use super::accounts::Entity as Accounts;
pub use super::invoice_lines::Entity as InvoiceLines;
pub use super::invoices::Entity as Invoices;
pub use super::journal_entries::Entity as JournalEntries;
pub use super::journal_lines::Entity as JournalLines;
pub use super::open_balances::Entity as OpenBalances;
pub use super::partners::Entity as Partners;
pub use super::payments::Entity as Payments;
pub use super::sessions::Entity as Sessions;
pub use super::tax_rates::Entity as TaxRates;
