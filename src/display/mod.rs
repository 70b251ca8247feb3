//! Display formatting for terminal output
//!
//! Renders expense and category total snapshots as tables for the
//! command-line client.

pub mod category;
pub mod expense;

pub use category::format_category_totals;
pub use expense::{format_expense_details, format_expense_register};
