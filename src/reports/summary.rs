//! Ledger Summary
//!
//! Spending breakdown by category for everything currently in a ledger.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Amount, CategoryTotalSnapshot, ExpenseSnapshot};
use crate::services::ExpenseLedger;

/// One category's share of total spending
#[derive(Debug, Clone, Serialize)]
pub struct CategoryShare {
    /// Category name
    pub name: String,
    /// Total spending in this category
    pub total: Amount,
    /// Number of expenses in this category
    pub expense_count: usize,
    /// Percentage of total spending
    pub percentage: f64,
}

/// Summary of a ledger's contents
#[derive(Debug, Clone, Serialize)]
pub struct LedgerSummary {
    /// Number of stored expenses
    pub expense_count: usize,
    /// Ledger capacity
    pub capacity: usize,
    /// Total across all expenses
    pub total_expenses: Amount,
    /// Per-category breakdown, in category enumeration order
    pub categories: Vec<CategoryShare>,
}

impl LedgerSummary {
    /// Generate a summary for the ledger's current contents
    pub fn generate(ledger: &ExpenseLedger) -> Self {
        Self::build(
            ledger.capacity(),
            ledger.total_expenses(),
            ledger.records().iter().map(|r| r.category()),
            ledger
                .category_totals()
                .iter()
                .map(|t| (t.name.as_str(), t.total)),
        )
    }

    /// Generate a summary from snapshots read over the C ABI
    pub fn from_snapshots(
        capacity: usize,
        expenses: &[ExpenseSnapshot],
        totals: &[CategoryTotalSnapshot],
    ) -> Self {
        Self::build(
            capacity,
            expenses.iter().map(|e| Amount::new(e.amount)).sum(),
            expenses.iter().map(|e| e.category.as_str()),
            totals.iter().map(|t| (t.name.as_str(), Amount::new(t.total))),
        )
    }

    fn build<'a>(
        capacity: usize,
        total_expenses: Amount,
        expense_categories: impl Iterator<Item = &'a str>,
        totals: impl Iterator<Item = (&'a str, Amount)>,
    ) -> Self {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut expense_count = 0;
        for category in expense_categories {
            *counts.entry(category).or_insert(0) += 1;
            expense_count += 1;
        }

        let categories = totals
            .map(|(name, total)| {
                let percentage = if total_expenses.value() > 0.0 {
                    total.value() / total_expenses.value() * 100.0
                } else {
                    0.0
                };

                CategoryShare {
                    name: name.to_string(),
                    total,
                    expense_count: counts.get(name).copied().unwrap_or(0),
                    percentage,
                }
            })
            .collect();

        Self {
            expense_count,
            capacity,
            total_expenses,
            categories,
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Expense Summary\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Total Expenses: {}\n",
            self.total_expenses.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "Expenses: {} of {}\n\n",
            self.expense_count, self.capacity
        ));

        if self.categories.is_empty() {
            output.push_str("No expenses recorded.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<30} {:>12} {:>6} {:>8}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for category in &self.categories {
            output.push_str(&format!(
                "{:<30} {:>12} {:>6} {:>7.1}%\n",
                category.name,
                category.total.format_with_symbol(currency_symbol),
                category.expense_count,
                category.percentage
            ));
        }

        output
    }

    /// Get the highest-spending categories, largest first
    pub fn top_categories(&self, limit: usize) -> Vec<&CategoryShare> {
        let mut all: Vec<_> = self.categories.iter().collect();
        all.sort_by(|a, b| b.total.value().total_cmp(&a.total.value()));
        all.into_iter().take(limit).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewExpense;

    fn sample_ledger() -> ExpenseLedger {
        let mut ledger = ExpenseLedger::new(10);
        ledger
            .add_expense(NewExpense::new("2025-03-01", "Food", 12.5, "Lunch"))
            .unwrap();
        ledger
            .add_expense(NewExpense::new("2025-03-02", "Food", 7.5, "Snack"))
            .unwrap();
        ledger
            .add_expense(NewExpense::new("2025-03-02", "Rent", 60.0, "Room"))
            .unwrap();
        ledger
    }

    #[test]
    fn test_generate_summary() {
        let summary = LedgerSummary::generate(&sample_ledger());

        assert_eq!(summary.expense_count, 3);
        assert_eq!(summary.capacity, 10);
        assert_eq!(summary.total_expenses.value(), 80.0);
        assert_eq!(summary.categories.len(), 2);
        assert_eq!(summary.categories[0].name, "Food");
        assert_eq!(summary.categories[0].expense_count, 2);
        assert_eq!(summary.categories[0].percentage, 25.0);
        assert_eq!(summary.categories[1].percentage, 75.0);
    }

    #[test]
    fn test_top_categories() {
        let summary = LedgerSummary::generate(&sample_ledger());

        let top = summary.top_categories(1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].name, "Rent");
    }

    #[test]
    fn test_format_terminal() {
        let summary = LedgerSummary::generate(&sample_ledger());
        let text = summary.format_terminal("$");

        assert!(text.contains("Total Expenses: $80.00"));
        assert!(text.contains("Expenses: 3 of 10"));
        assert!(text.contains("Food"));
        assert!(text.contains("75.0%"));
    }

    #[test]
    fn test_from_snapshots_matches_generate() {
        let ledger = sample_ledger();
        let expenses: Vec<ExpenseSnapshot> = ledger.records().iter().map(Into::into).collect();
        let totals: Vec<CategoryTotalSnapshot> =
            ledger.category_totals().iter().map(Into::into).collect();

        let direct = LedgerSummary::generate(&ledger);
        let via_snapshots = LedgerSummary::from_snapshots(10, &expenses, &totals);

        assert_eq!(via_snapshots.expense_count, direct.expense_count);
        assert_eq!(via_snapshots.total_expenses, direct.total_expenses);
        assert_eq!(via_snapshots.categories.len(), direct.categories.len());
        assert_eq!(via_snapshots.categories[1].expense_count, 1);
    }

    #[test]
    fn test_empty_summary() {
        let summary = LedgerSummary::generate(&ExpenseLedger::new(5));
        assert_eq!(summary.total_expenses.value(), 0.0);
        assert!(summary.format_terminal("$").contains("No expenses recorded."));
    }
}
