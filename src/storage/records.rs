//! Record store for expense entries
//!
//! An ordered, bounded collection. Positions are contiguous `[0, count)`;
//! deleting a record shifts every later record one position to the left, so
//! an index is a position and never an identity.

use crate::error::{PlannerError, PlannerResult};
use crate::models::{Amount, ExpenseRecord};

/// Default maximum number of stored expenses
pub const DEFAULT_CAPACITY: usize = 100;

/// Bounded, insertion-ordered expense storage
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<ExpenseRecord>,
    capacity: usize,
}

impl RecordStore {
    /// Create an empty store holding at most `capacity` records
    ///
    /// Nothing is reserved up front; memory grows with the records held.
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity,
        }
    }

    /// Append a record
    ///
    /// The record is re-validated here regardless of where it came from.
    /// On any error the store is left unchanged.
    pub fn insert(&mut self, record: ExpenseRecord) -> PlannerResult<()> {
        record.validate()?;

        if self.is_full() {
            return Err(PlannerError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        self.records.push(record);
        Ok(())
    }

    /// Remove the record at `index`, shifting later records left
    pub fn delete_at(&mut self, index: usize) -> PlannerResult<ExpenseRecord> {
        if index >= self.records.len() {
            return Err(PlannerError::index_out_of_range(index, self.records.len()));
        }
        Ok(self.records.remove(index))
    }

    /// Remove every record, returning how many were removed
    pub fn clear(&mut self) -> usize {
        let removed = self.records.len();
        self.records.clear();
        removed
    }

    /// Number of stored records
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Look up a record by position
    pub fn get(&self, index: usize) -> Option<&ExpenseRecord> {
        self.records.get(index)
    }

    /// All records in insertion order
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    /// Iterate over records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &ExpenseRecord> {
        self.records.iter()
    }

    /// Maximum number of records
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    /// Sum of every stored amount
    pub fn total(&self) -> Amount {
        self.records.iter().map(|r| r.amount()).sum()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
