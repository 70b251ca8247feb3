//! JSON Export functionality
//!
//! Exports a ledger's expenses and category totals to JSON with schema
//! versioning. An export can be read back and replayed into a new ledger.

use std::collections::HashMap;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, PlannerResult};
use crate::models::{Amount, CategoryTotalSnapshot, ExpenseSnapshot, NewExpense};
use crate::services::ExpenseLedger;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All expenses, in stored order
    pub expenses: Vec<ExpenseSnapshot>,

    /// All category totals, in enumeration order
    pub category_totals: Vec<CategoryTotalSnapshot>,

    /// Sum of every expense amount
    pub total_expenses: f64,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Number of expenses
    pub expense_count: usize,

    /// Number of distinct categories
    pub category_count: usize,

    /// Capacity of the exported ledger
    pub capacity: usize,

    /// Smallest date string among the expenses
    pub earliest_date: Option<String>,

    /// Largest date string among the expenses
    pub latest_date: Option<String>,
}

impl LedgerExport {
    /// Create an export from a ledger
    pub fn from_ledger(ledger: &ExpenseLedger) -> Self {
        let expenses: Vec<ExpenseSnapshot> = ledger.records().iter().map(Into::into).collect();
        let totals: Vec<CategoryTotalSnapshot> =
            ledger.category_totals().iter().map(Into::into).collect();
        Self::from_snapshots(ledger.capacity(), expenses, totals)
    }

    /// Create an export from snapshots read over the C ABI
    pub fn from_snapshots(
        capacity: usize,
        expenses: Vec<ExpenseSnapshot>,
        category_totals: Vec<CategoryTotalSnapshot>,
    ) -> Self {
        let total_expenses: Amount = expenses.iter().map(|e| Amount::new(e.amount)).sum();

        // Dates are free-form text, so these are lexical bounds
        let earliest_date = expenses.iter().map(|e| e.date.as_str()).min().map(String::from);
        let latest_date = expenses.iter().map(|e| e.date.as_str()).max().map(String::from);

        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            category_count: category_totals.len(),
            capacity,
            earliest_date,
            latest_date,
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses,
            category_totals,
            total_expenses: total_expenses.value(),
            metadata,
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        if self.metadata.expense_count != self.expenses.len() {
            return Err(format!(
                "Metadata lists {} expenses, found {}",
                self.metadata.expense_count,
                self.expenses.len()
            ));
        }

        // Recompute the totals in stored order; this is the order the
        // aggregator sums in, so matching exports agree exactly.
        let mut sums: HashMap<&str, Amount> = HashMap::new();
        for expense in &self.expenses {
            *sums.entry(expense.category.as_str()).or_default() += Amount::new(expense.amount);
        }

        if sums.len() != self.category_totals.len() {
            return Err(format!(
                "Expected {} category totals, found {}",
                sums.len(),
                self.category_totals.len()
            ));
        }

        for total in &self.category_totals {
            match sums.get(total.name.as_str()) {
                Some(sum) if sum.value() == total.total => {}
                Some(sum) => {
                    return Err(format!(
                        "Category {} total {} does not match its expenses ({})",
                        total.name,
                        total.total,
                        sum.value()
                    ))
                }
                None => return Err(format!("Category {} has no expenses", total.name)),
            }
        }

        Ok(())
    }

    /// The expenses as insertable inputs, in stored order
    pub fn into_new_expenses(self) -> Vec<NewExpense> {
        self.expenses
            .into_iter()
            .map(ExpenseSnapshot::into_new_expense)
            .collect()
    }
}

/// Export a ledger to JSON
pub fn export_full_json<W: Write>(
    export: &LedgerExport,
    writer: &mut W,
    pretty: bool,
) -> PlannerResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, export)
    } else {
        serde_json::to_writer(writer, export)
    }
    .map_err(|e| PlannerError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a JSON export
pub fn import_from_json(json_str: &str) -> PlannerResult<LedgerExport> {
    let export: LedgerExport =
        serde_json::from_str(json_str).map_err(|e| PlannerError::Import(e.to_string()))?;

    export.validate().map_err(PlannerError::Import)?;

    Ok(export)
}
