//! `SeaORM` entity definitions.
//!
//! One entity per ledger table plus `sessions`. Reference columns are plain
//! integers: no relations are declared because the schema carries no foreign
//! keys.

pub mod prelude;

pub mod accounts;
pub mod invoice_lines;
pub mod invoices;
pub mod journal_entries;
pub mod journal_lines;
pub mod open_balances;
pub mod partners;
pub mod payments;
pub mod sessions;
pub mod tax_rates;
