//! Custom error types for the budget planner
//!
//! This module defines the error hierarchy for the ledger core and its
//! surrounding tooling using thiserror for ergonomic error definitions.

use thiserror::Error;

/// The main error type for budget planner operations
#[derive(Error, Debug)]
pub enum PlannerError {
    /// A required field is empty or the amount is not a positive finite number
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The record store already holds its maximum number of expenses
    #[error("Expense store is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// An index outside `[0, count)` was used for a lookup or deletion
    #[error("Index {index} out of range (count {count})")]
    IndexOutOfRange { index: usize, count: usize },

    /// A snapshot buffer could not be produced
    #[error("Allocation failure: {0}")]
    AllocationFailure(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl PlannerError {
    /// Create an "index out of range" error
    pub fn index_out_of_range(index: usize, count: usize) -> Self {
        Self::IndexOutOfRange { index, count }
    }

    /// Create an "invalid input" error for an empty required field
    pub fn empty_field(field: &str) -> Self {
        Self::InvalidInput(format!("{} must not be empty", field))
    }

    /// Check if this is an "index out of range" error
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Check if this is an input validation error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Check if this is a capacity error
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. })
    }
}

impl From<std::io::Error> for PlannerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for PlannerError {
    fn from(err: csv::Error) -> Self {
        Self::Import(err.to_string())
    }
}

/// Result type alias for budget planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;
