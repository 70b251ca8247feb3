//! Export module for the budget planner
//!
//! Writes a ledger's contents in several formats:
//! - CSV: expenses or category totals (spreadsheet-compatible)
//! - JSON: machine-readable full export
//! - YAML: human-readable full export

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_category_totals_csv, export_expenses_csv};
pub use json::{export_full_json, import_from_json, ExportMetadata, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_full_yaml, import_from_yaml};
