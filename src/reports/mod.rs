//! Reports module for the budget planner
//!
//! Provides the per-category aggregation that backs the ledger, and a
//! summary report built on top of it.

pub mod category_totals;
pub mod summary;

pub use category_totals::CategoryAggregator;
pub use summary::{CategoryShare, LedgerSummary};
