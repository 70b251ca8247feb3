//! Expense ledger service
//!
//! Owns one record store and the category totals derived from it, and keeps
//! the two consistent: every structural mutation rebuilds the totals before
//! returning. Anything that needs locking later must lock the ledger as a
//! whole, never the store or the totals separately.

use log::debug;

use crate::config::Settings;
use crate::error::PlannerResult;
use crate::models::{Amount, CategoryTotal, ExpenseRecord, NewExpense};
use crate::reports::{CategoryAggregator, LedgerSummary};
use crate::storage::RecordStore;

/// An expense store together with its per-category totals
///
/// Expenses are addressed by position. Positions are not identities: after
/// `delete_expense(i)` the record that was at `i + 1` is at `i`.
#[derive(Debug, Clone, Default)]
pub struct ExpenseLedger {
    store: RecordStore,
    categories: CategoryAggregator,
}

impl ExpenseLedger {
    /// Create an empty ledger holding at most `capacity` expenses
    pub fn new(capacity: usize) -> Self {
        Self {
            store: RecordStore::new(capacity),
            categories: CategoryAggregator::new(),
        }
    }

    /// Create an empty ledger sized from settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.capacity)
    }

    /// Add a new expense at the end of the ledger
    pub fn add_expense(&mut self, input: NewExpense) -> PlannerResult<()> {
        let record = ExpenseRecord::new(input)?;
        self.store.insert(record)?;
        self.refresh_totals();

        debug!(
            "Added expense #{} ({} categories)",
            self.store.count() - 1,
            self.categories.count()
        );
        Ok(())
    }

    /// Delete the expense at `index`
    pub fn delete_expense(&mut self, index: usize) -> PlannerResult<ExpenseRecord> {
        let removed = self.store.delete_at(index)?;
        self.refresh_totals();

        debug!(
            "Deleted expense #{} ({} remaining)",
            index,
            self.store.count()
        );
        Ok(removed)
    }

    /// Remove every expense, returning how many were removed
    pub fn clear(&mut self) -> usize {
        let removed = self.store.clear();
        self.refresh_totals();

        debug!("Cleared {} expenses", removed);
        removed
    }

    fn refresh_totals(&mut self) {
        self.categories.rebuild(self.store.iter());
    }

    pub fn expense_count(&self) -> usize {
        self.store.count()
    }

    /// Look up an expense by position
    pub fn expense(&self, index: usize) -> Option<&ExpenseRecord> {
        self.store.get(index)
    }

    pub fn category_count(&self) -> usize {
        self.categories.count()
    }

    /// Look up a category total by enumeration position
    pub fn category_total(&self, index: usize) -> Option<&CategoryTotal> {
        self.categories.get(index)
    }

    /// Look up a category total by name
    pub fn category_total_by_name(&self, name: &str) -> Option<&CategoryTotal> {
        self.categories.find(name)
    }

    /// Sum of every stored amount
    pub fn total_expenses(&self) -> Amount {
        self.store.total()
    }

    /// All expenses in insertion order
    pub fn records(&self) -> &[ExpenseRecord] {
        self.store.records()
    }

    /// All category totals in enumeration order
    pub fn category_totals(&self) -> &[CategoryTotal] {
        self.categories.totals()
    }

    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    pub fn is_full(&self) -> bool {
        self.store.is_full()
    }

    /// Build a summary report of the current contents
    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary::generate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn expense(date: &str, category: &str, amount: f64, description: &str) -> NewExpense {
        NewExpense::new(date, category, amount, description)
    }

    fn assert_consistent(ledger: &ExpenseLedger) {
        let record_sum: f64 = ledger.records().iter().map(|r| r.amount().value()).sum();
        let category_sum: f64 = ledger.category_totals().iter().map(|t| t.total.value()).sum();
        assert_eq!(record_sum, category_sum);

        let mut distinct: Vec<&str> = Vec::new();
        for record in ledger.records() {
            if !distinct.contains(&record.category()) {
                distinct.push(record.category());
            }
        }
        let names: Vec<&str> = ledger
            .category_totals()
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, distinct);
    }

    #[test]
    fn test_food_scenario() {
        let mut ledger = ExpenseLedger::new(100);
        ledger
            .add_expense(expense("2025-03-01", "Food", 12.50, "Lunch"))
            .unwrap();
        ledger
            .add_expense(expense("2025-03-02", "Food", 7.25, "Snack"))
            .unwrap();

        assert_eq!(ledger.expense_count(), 2);
        assert_eq!(ledger.category_count(), 1);
        let food = ledger.category_total(0).unwrap();
        assert_eq!(food.name, "Food");
        assert_eq!(food.total.value(), 19.75);
    }

    #[test]
    fn test_delete_out_of_range_leaves_ledger_unchanged() {
        let mut ledger = ExpenseLedger::new(100);
        ledger.add_expense(expense("2025-03-01", "Food", 1.0, "a")).unwrap();
        ledger.add_expense(expense("2025-03-02", "Rent", 2.0, "b")).unwrap();

        assert!(ledger.delete_expense(5).unwrap_err().is_index_out_of_range());
        assert_eq!(ledger.expense_count(), 2);
        assert_eq!(ledger.category_count(), 2);
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut ledger = ExpenseLedger::new(100);
        ledger.add_expense(expense("2025-03-01", "Food", 1.0, "a")).unwrap();

        let err = ledger
            .add_expense(expense("2025-03-01", "Food", -3.0, "refund"))
            .unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(ledger.expense_count(), 1);
        assert_eq!(ledger.total_expenses().value(), 1.0);
    }

    #[test]
    fn test_delete_shifts_and_updates_totals() {
        let mut ledger = ExpenseLedger::new(100);
        ledger.add_expense(expense("d1", "Food", 1.0, "a")).unwrap();
        ledger.add_expense(expense("d2", "Rent", 2.0, "b")).unwrap();
        ledger.add_expense(expense("d3", "Food", 4.0, "c")).unwrap();

        let removed = ledger.delete_expense(1).unwrap();
        assert_eq!(removed.category(), "Rent");
        assert_eq!(ledger.expense(1).unwrap().description(), "c");
        assert_eq!(ledger.category_count(), 1);
        assert!(ledger.category_total_by_name("Rent").is_none());
        assert_eq!(ledger.category_total_by_name("Food").unwrap().total.value(), 5.0);
        assert_consistent(&ledger);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut ledger = ExpenseLedger::new(100);
        ledger.add_expense(expense("d1", "Food", 1.0, "a")).unwrap();

        assert_eq!(ledger.clear(), 1);
        assert_eq!(ledger.expense_count(), 0);
        assert_eq!(ledger.category_count(), 0);

        assert_eq!(ledger.clear(), 0);
        assert_eq!(ledger.expense_count(), 0);
        assert_eq!(ledger.category_count(), 0);
    }

    #[test]
    fn test_capacity_boundary() {
        let mut ledger = ExpenseLedger::new(5);
        for i in 0..5 {
            ledger
                .add_expense(expense("d", "Food", 1.0, &format!("item {}", i)))
                .unwrap();
        }
        assert!(ledger.is_full());

        let before = ledger.records().to_vec();
        let err = ledger.add_expense(expense("d", "New", 9.0, "extra")).unwrap_err();
        assert!(err.is_capacity_exceeded());
        assert_eq!(ledger.records(), before.as_slice());
        assert!(ledger.category_total_by_name("New").is_none());
    }

    #[test]
    fn test_full_ledger_reports_invalid_input_first() {
        let mut ledger = ExpenseLedger::new(1);
        ledger.add_expense(expense("d", "Food", 1.0, "a")).unwrap();

        let err = ledger
            .add_expense(expense("d", "Food", -3.0, "refund"))
            .unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(ledger.expense_count(), 1);
        assert_eq!(ledger.total_expenses().value(), 1.0);
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings {
            capacity: 7,
            ..Settings::default()
        };
        assert_eq!(ExpenseLedger::from_settings(&settings).capacity(), 7);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(usize, u32),
        Delete(usize),
        Clear,
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            6 => (0usize..5, 1u32..4000).prop_map(|(c, q)| Op::Add(c, q)),
            3 => (0usize..12).prop_map(Op::Delete),
            1 => Just(Op::Clear),
        ]
    }

    proptest! {
        #[test]
        fn prop_totals_track_records(ops in proptest::collection::vec(arb_op(), 0..60)) {
            let mut ledger = ExpenseLedger::new(10);
            for op in ops {
                match op {
                    // Quarter amounts keep every partial sum exact in f64.
                    Op::Add(category, quarters) => {
                        let _ = ledger.add_expense(expense(
                            "2025-03-01",
                            &format!("cat{}", category),
                            f64::from(quarters) / 4.0,
                            "generated",
                        ));
                    }
                    Op::Delete(index) => {
                        let before = ledger.records().to_vec();
                        match ledger.delete_expense(index) {
                            Ok(_) => {
                                prop_assert_eq!(ledger.expense_count(), before.len() - 1);
                                if index + 1 < before.len() {
                                    prop_assert_eq!(ledger.expense(index), Some(&before[index + 1]));
                                }
                            }
                            Err(_) => {
                                prop_assert_eq!(ledger.records(), before.as_slice());
                            }
                        }
                    }
                    Op::Clear => {
                        ledger.clear();
                        prop_assert_eq!(ledger.expense_count(), 0);
                        prop_assert_eq!(ledger.category_count(), 0);
                    }
                }
                assert_consistent(&ledger);
                prop_assert!(ledger.expense_count() <= ledger.capacity());
            }
        }
    }
}
