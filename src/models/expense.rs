//! Expense record model
//!
//! A single expense entry. Records are immutable once created; the only way
//! to change the ledger is to insert, delete or clear.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use crate::error::{PlannerError, PlannerResult};

/// Input for creating a new expense
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    /// Date text, `YYYY-MM-DD` by convention
    pub date: String,
    pub category: String,
    pub amount: f64,
    pub description: String,
}

impl NewExpense {
    /// Create a new expense input
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount,
            description: description.into(),
        }
    }
}

/// A stored expense
///
/// The date is opaque text and is never parsed. Field order here is the
/// field order of every encoded form of a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    date: String,
    category: String,
    amount: Amount,
    description: String,
}

impl ExpenseRecord {
    /// Create a validated expense record
    pub fn new(input: NewExpense) -> PlannerResult<Self> {
        let record = Self {
            date: input.date,
            category: input.category,
            amount: Amount::new(input.amount),
            description: input.description,
        };
        record.validate()?;
        Ok(record)
    }

    /// Date text as entered
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Category label
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Expense amount
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Free-form description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Validate the record
    pub fn validate(&self) -> PlannerResult<()> {
        if self.date.trim().is_empty() {
            return Err(PlannerError::empty_field("date"));
        }
        if self.category.trim().is_empty() {
            return Err(PlannerError::empty_field("category"));
        }
        if self.description.trim().is_empty() {
            return Err(PlannerError::empty_field("description"));
        }
        Amount::positive(self.amount.value())?;
        Ok(())
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date, self.category, self.amount, self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_expense() {
        let record =
            ExpenseRecord::new(NewExpense::new("2025-03-01", "Food", 12.5, "Lunch")).unwrap();
        assert_eq!(record.date(), "2025-03-01");
        assert_eq!(record.category(), "Food");
        assert_eq!(record.amount().value(), 12.5);
        assert_eq!(record.description(), "Lunch");
    }

    #[test]
    fn test_date_is_opaque() {
        let record =
            ExpenseRecord::new(NewExpense::new("sometime in March", "Food", 1.0, "x")).unwrap();
        assert_eq!(record.date(), "sometime in March");
    }

    #[test]
    fn test_validation() {
        let err = ExpenseRecord::new(NewExpense::new("2025-03-01", "Food", -3.0, "Refund"))
            .unwrap_err();
        assert!(err.is_invalid_input());

        assert!(ExpenseRecord::new(NewExpense::new("2025-03-01", "", 1.0, "x")).is_err());
        assert!(ExpenseRecord::new(NewExpense::new("2025-03-01", "Food", 1.0, "  ")).is_err());
        assert!(ExpenseRecord::new(NewExpense::new("", "Food", 1.0, "x")).is_err());
        assert!(ExpenseRecord::new(NewExpense::new("d", "Food", f64::NAN, "x")).is_err());
        assert!(ExpenseRecord::new(NewExpense::new("d", "Food", 0.0, "x")).is_err());
    }

    #[test]
    fn test_serialization_field_order() {
        let record =
            ExpenseRecord::new(NewExpense::new("2025-03-01", "Food", 12.5, "Lunch")).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"date":"2025-03-01","category":"Food","amount":12.5,"description":"Lunch"}"#
        );
    }

    #[test]
    fn test_display() {
        let record =
            ExpenseRecord::new(NewExpense::new("2025-03-01", "Food", 12.5, "Lunch")).unwrap();
        assert_eq!(record.to_string(), "2025-03-01 Food $12.50 Lunch");
    }
}
