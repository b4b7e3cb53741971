//! Core ledger logic for rxerp.
//!
//! This crate contains the financial ledger with ZERO web or database dependencies.
//! Persistence is reached through the store traits in [`ledger::store`].
//!
//! # Modules
//!
//! - `ledger` - Records, validation and mutation of the nine ledger collections
//! - `reports` - Metrics, dropdown options and the filtered overview

pub mod ledger;
pub mod reports;
