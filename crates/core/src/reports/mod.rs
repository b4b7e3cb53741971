//! Ledger reporting.
//!
//! Pure aggregation over loaded records plus the overview read path:
//! - Revenue, expense and invoice count metrics
//! - Dropdown options from distinct stored values
//! - Dropdown selections applied as filters
//! - Per-invoice payment and per-entry journal line totals

pub mod filter;
pub mod metrics;
pub mod options;
pub mod summary;
pub mod view;


pub use filter::LedgerFilter;
pub use metrics::LedgerMetrics;
pub use options::{FilterOptions, distinct_options};
pub use summary::{JournalTotals, PaymentSummary, journal_totals, payment_summaries};
pub use view::LedgerView;
