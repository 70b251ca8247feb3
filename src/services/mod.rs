//! Service layer for the budget planner
//!
//! The service layer provides business logic on top of the storage layer:
//! the ledger that keeps records and category totals consistent, and CSV
//! import on top of it.

pub mod import;
pub mod ledger;

pub use import::{CsvLayout, ImportResult, ImportService, ParsedExpense};
pub use ledger::ExpenseLedger;
