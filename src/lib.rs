//! Budget Planner - an expense ledger with per-category totals
//!
//! The core is a bounded, ordered store of expense records and an aggregator
//! that keeps one running total per distinct category. Both are owned by an
//! [`ExpenseLedger`](services::ExpenseLedger) and reached from foreign code
//! through the C ABI in [`ffi`], which hands out self-describing JSON
//! snapshots in caller-released buffers.
//!
//! # Architecture
//!
//! - `config`: User settings
//! - `error`: Custom error types
//! - `models`: Expense records, category totals, amounts and snapshots
//! - `storage`: The bounded record store
//! - `reports`: Category aggregation and spending summaries
//! - `services`: The ledger and CSV import
//! - `ffi`: C ABI exports and a safe client over them
//! - `display`, `export`, `cli`: The command-line client
//!
//! # Example
//!
//! ```rust
//! use budget_planner::models::NewExpense;
//! use budget_planner::services::ExpenseLedger;
//!
//! let mut ledger = ExpenseLedger::new(100);
//! ledger.add_expense(NewExpense::new("2025-03-01", "Food", 12.5, "Lunch")).unwrap();
//! ledger.add_expense(NewExpense::new("2025-03-02", "Food", 7.25, "Snack")).unwrap();
//!
//! assert_eq!(ledger.category_count(), 1);
//! assert_eq!(ledger.category_total(0).unwrap().total.value(), 19.75);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ffi;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{PlannerError, PlannerResult};
