//! Category aggregation
//!
//! Derives one total per distinct category. Totals are rebuilt from the full
//! record list on every structural change; they are never patched in place.

use std::collections::HashMap;

use crate::models::{Amount, CategoryTotal, ExpenseRecord};

/// Per-category totals in first-seen order
#[derive(Debug, Clone, Default)]
pub struct CategoryAggregator {
    totals: Vec<CategoryTotal>,
    /// Index: category name -> position in `totals`
    by_name: HashMap<String, usize>,
}

impl CategoryAggregator {
    /// Create an empty aggregator
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all totals with ones computed from `records`
    ///
    /// Categories appear in the order their first record appears, so the
    /// enumeration order only changes when the records change.
    pub fn rebuild<'a, I>(&mut self, records: I)
    where
        I: IntoIterator<Item = &'a ExpenseRecord>,
    {
        self.totals.clear();
        self.by_name.clear();

        for record in records {
            let position = match self.by_name.get(record.category()) {
                Some(&position) => position,
                None => {
                    let position = self.totals.len();
                    self.totals.push(CategoryTotal::new(record.category()));
                    self.by_name.insert(record.category().to_string(), position);
                    position
                }
            };
            self.totals[position].add(record.amount());
        }
    }

    /// Number of distinct categories
    pub fn count(&self) -> usize {
        self.totals.len()
    }

    /// Look up a total by enumeration position
    pub fn get(&self, index: usize) -> Option<&CategoryTotal> {
        self.totals.get(index)
    }

    /// Look up a total by category name
    pub fn find(&self, name: &str) -> Option<&CategoryTotal> {
        self.by_name.get(name).and_then(|&i| self.totals.get(i))
    }

    /// All totals in enumeration order
    pub fn totals(&self) -> &[CategoryTotal] {
        &self.totals
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.totals.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Sum over every category
    pub fn grand_total(&self) -> Amount {
        self.totals.iter().map(|t| t.total).sum()
    }
}
