//! Core data models for the budget planner
//!
//! This module contains the data structures of the expense domain: the
//! stored expense record, its amount type, the derived per-category totals,
//! and the snapshot forms both take when they leave the ledger.

pub mod amount;
pub mod category_total;
pub mod expense;
pub mod snapshot;

pub use amount::Amount;
pub use category_total::CategoryTotal;
pub use expense::{ExpenseRecord, NewExpense};
pub use snapshot::{CategoryTotalSnapshot, ExpenseSnapshot};
