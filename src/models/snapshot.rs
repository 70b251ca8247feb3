//! Snapshot models
//!
//! Self-describing copies of records and category totals. A snapshot is what
//! crosses the C ABI: encoded as a JSON object with a fixed field order, and
//! decoded back on the client side.
//!
//! Amounts are written with the shortest representation that parses back to
//! the identical `f64`, so `decode(encode(x)) == x` holds exactly.

use serde::{Deserialize, Serialize};

use super::category_total::CategoryTotal;
use super::expense::{ExpenseRecord, NewExpense};
use crate::error::{PlannerError, PlannerResult};

/// Encoded form of an expense record
///
/// Fields are encoded in the order `date, category, amount, description`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSnapshot {
    pub date: String,
    pub category: String,
    pub amount: f64,
    pub description: String,
}

impl ExpenseSnapshot {
    /// Encode as JSON text
    pub fn encode(&self) -> PlannerResult<String> {
        serde_json::to_string(self)
            .map_err(|e| PlannerError::AllocationFailure(format!("Failed to encode expense: {}", e)))
    }

    /// Decode from JSON text
    pub fn decode(text: &str) -> PlannerResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Turn the snapshot back into an insertable expense
    pub fn into_new_expense(self) -> NewExpense {
        NewExpense::new(self.date, self.category, self.amount, self.description)
    }
}

impl From<&ExpenseRecord> for ExpenseSnapshot {
    fn from(record: &ExpenseRecord) -> Self {
        Self {
            date: record.date().to_string(),
            category: record.category().to_string(),
            amount: record.amount().value(),
            description: record.description().to_string(),
        }
    }
}

/// Encoded form of a category total, field order `name, total`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotalSnapshot {
    pub name: String,
    pub total: f64,
}

impl CategoryTotalSnapshot {
    /// Encode as JSON text
    pub fn encode(&self) -> PlannerResult<String> {
        serde_json::to_string(self).map_err(|e| {
            PlannerError::AllocationFailure(format!("Failed to encode category total: {}", e))
        })
    }

    /// Decode from JSON text
    pub fn decode(text: &str) -> PlannerResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

impl From<&CategoryTotal> for CategoryTotalSnapshot {
    fn from(total: &CategoryTotal) -> Self {
        Self {
            name: total.name.clone(),
            total: total.total.value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;

    fn record(amount: f64) -> ExpenseRecord {
        ExpenseRecord::new(NewExpense::new("2025-03-01", "Food", amount, "Lunch")).unwrap()
    }

    #[test]
    fn test_expense_golden_output() {
        let snapshot = ExpenseSnapshot::from(&record(12.5));
        assert_eq!(
            snapshot.encode().unwrap(),
            r#"{"date":"2025-03-01","category":"Food","amount":12.5,"description":"Lunch"}"#
        );
    }

    #[test]
    fn test_category_total_golden_output() {
        let mut total = CategoryTotal::new("Food");
        total.add(Amount::new(19.75));
        assert_eq!(
            CategoryTotalSnapshot::from(&total).encode().unwrap(),
            r#"{"name":"Food","total":19.75}"#
        );
    }

    #[test]
    fn test_round_trip_is_exact() {
        for amount in [0.1, 1.0 / 3.0, 12.345678901234567, 1e-7, 123456789.125] {
            let original = record(amount);
            let text = ExpenseSnapshot::from(&original).encode().unwrap();
            let decoded = ExpenseSnapshot::decode(&text).unwrap();

            assert_eq!(decoded.amount, amount);
            let rebuilt = ExpenseRecord::new(decoded.into_new_expense()).unwrap();
            assert_eq!(rebuilt, original);
        }
    }

    #[test]
    fn test_text_is_escaped() {
        let original = ExpenseRecord::new(NewExpense::new(
            "2025-03-01",
            "Food \"out\"",
            4.0,
            "line\nbreak \\ tab\t",
        ))
        .unwrap();
        let text = ExpenseSnapshot::from(&original).encode().unwrap();
        assert!(!text.contains('\n'));

        let decoded = ExpenseSnapshot::decode(&text).unwrap();
        assert_eq!(decoded.category, "Food \"out\"");
        assert_eq!(decoded.description, "line\nbreak \\ tab\t");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(ExpenseSnapshot::decode("not json").is_err());
        assert!(CategoryTotalSnapshot::decode(r#"{"name":"Food"}"#).is_err());
    }
}
