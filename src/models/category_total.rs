//! Category total model
//!
//! Derived per-category sums. These are produced by the aggregator and never
//! edited by clients.

use serde::{Deserialize, Serialize};

use super::amount::Amount;

/// Sum of all expense amounts sharing one category label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Category label, unique among totals
    pub name: String,
    /// Sum of matching amounts
    pub total: Amount,
}

impl CategoryTotal {
    /// Start a new total for a category
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total: Amount::zero(),
        }
    }

    /// Add an expense amount to this total
    pub fn add(&mut self, amount: Amount) {
        self.total += amount;
    }
}
