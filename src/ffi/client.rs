//! Safe Rust client for the C ABI
//!
//! Drives a ledger exclusively through the exported functions, the same way
//! a foreign presentation layer would, while letting the type system enforce
//! the buffer contract: a [`Snapshot`] releases its handle exactly once when
//! dropped, and a [`BoundaryClient`] frees its ledger when dropped.

use std::ffi::{CStr, CString};
use std::os::raw::c_int;
use std::ptr::NonNull;

use super::boundary::{self, LedgerHandle};
use super::snapshot::SnapshotBuffer;
use crate::config::Settings;
use crate::error::{PlannerError, PlannerResult};
use crate::models::{CategoryTotalSnapshot, ExpenseSnapshot, NewExpense};

/// A snapshot handle that is released when dropped
#[derive(Debug)]
pub struct Snapshot {
    handle: NonNull<SnapshotBuffer>,
}

impl Snapshot {
    fn from_raw(handle: *mut SnapshotBuffer) -> Option<Self> {
        NonNull::new(handle).map(|handle| Self { handle })
    }

    /// The encoded snapshot text
    pub fn text(&self) -> &str {
        // SAFETY: the handle is live until `self` is dropped, and the data
        // pointer stays valid for as long as the handle does.
        let text = unsafe { CStr::from_ptr(boundary::budget_snapshot_data(self.handle.as_ptr())) };
        text.to_str().unwrap_or_default()
    }

    /// Decode as an expense snapshot
    pub fn decode_expense(&self) -> PlannerResult<ExpenseSnapshot> {
        ExpenseSnapshot::decode(self.text())
    }

    /// Decode as a category total snapshot
    pub fn decode_category_total(&self) -> PlannerResult<CategoryTotalSnapshot> {
        CategoryTotalSnapshot::decode(self.text())
    }
}

impl Drop for Snapshot {
    fn drop(&mut self) {
        // SAFETY: the handle came from the boundary and `Snapshot` is not
        // Clone, so this is its only release.
        unsafe { boundary::budget_release_snapshot(self.handle.as_ptr()) }
    }
}

/// A ledger reached only through the C ABI
#[derive(Debug)]
pub struct BoundaryClient {
    ledger: NonNull<LedgerHandle>,
    capacity: usize,
}

impl BoundaryClient {
    /// Create a ledger sized from settings
    pub fn new(settings: &Settings) -> PlannerResult<Self> {
        settings.validate()?;

        let capacity = u32::try_from(settings.capacity)
            .map_err(|_| PlannerError::Config(format!("capacity {} is too large", settings.capacity)))?;
        let max_field_length = u32::try_from(settings.max_field_length).map_err(|_| {
            PlannerError::Config(format!(
                "max_field_length {} is too large",
                settings.max_field_length
            ))
        })?;

        let ledger = NonNull::new(boundary::budget_ledger_new(capacity, max_field_length))
            .ok_or_else(|| PlannerError::AllocationFailure("ledger was not created".into()))?;

        Ok(Self {
            ledger,
            capacity: settings.capacity,
        })
    }

    fn raw(&self) -> *mut LedgerHandle {
        self.ledger.as_ptr()
    }

    /// Capacity the ledger was created with
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Add an expense; `false` when the ledger is full or the input invalid
    pub fn add_expense(&mut self, expense: &NewExpense) -> bool {
        // The boundary reads these for the duration of the call only; they
        // stay owned here and are dropped after it returns.
        let (Ok(date), Ok(category), Ok(description)) = (
            CString::new(expense.date.as_str()),
            CString::new(expense.category.as_str()),
            CString::new(expense.description.as_str()),
        ) else {
            log::warn!("add_expense rejected: text contains a NUL byte");
            return false;
        };

        // SAFETY: the ledger is live and the strings outlive the call.
        let status = unsafe {
            boundary::budget_add_expense(
                self.raw(),
                date.as_ptr(),
                category.as_ptr(),
                expense.amount,
                description.as_ptr(),
            )
        };
        status == 1
    }

    /// Delete the expense at `index`; `false` when the index is out of range
    pub fn delete_expense(&mut self, index: usize) -> bool {
        let Ok(index) = c_int::try_from(index) else {
            return false;
        };
        // SAFETY: the ledger is live.
        unsafe { boundary::budget_delete_expense(self.raw(), index) == 1 }
    }

    /// Remove every expense
    pub fn clear(&mut self) -> bool {
        // SAFETY: the ledger is live.
        unsafe { boundary::budget_clear_all_expenses(self.raw()) == 1 }
    }

    pub fn expense_count(&self) -> usize {
        // SAFETY: the ledger is live.
        let count = unsafe { boundary::budget_get_expense_count(self.raw()) };
        usize::try_from(count).unwrap_or(0)
    }

    pub fn category_count(&self) -> usize {
        // SAFETY: the ledger is live.
        let count = unsafe { boundary::budget_get_category_count(self.raw()) };
        usize::try_from(count).unwrap_or(0)
    }

    pub fn total_expenses(&self) -> f64 {
        // SAFETY: the ledger is live.
        unsafe { boundary::budget_get_total_expenses(self.raw()) }
    }

    pub fn is_full(&self) -> bool {
        self.expense_count() >= self.capacity
    }

    /// Snapshot of the expense at `index`
    pub fn expense_snapshot(&self, index: usize) -> Option<Snapshot> {
        let index = c_int::try_from(index).ok()?;
        // SAFETY: the ledger is live; ownership of the result moves into the guard.
        Snapshot::from_raw(unsafe { boundary::budget_get_expense_snapshot(self.raw(), index) })
    }

    /// Snapshot of the category total at `index`
    pub fn category_total_snapshot(&self, index: usize) -> Option<Snapshot> {
        let index = c_int::try_from(index).ok()?;
        // SAFETY: the ledger is live; ownership of the result moves into the guard.
        Snapshot::from_raw(unsafe {
            boundary::budget_get_category_total_snapshot(self.raw(), index)
        })
    }

    /// Read every expense, in order
    ///
    /// An index that yields no snapshot is skipped.
    pub fn expenses(&self) -> PlannerResult<Vec<ExpenseSnapshot>> {
        (0..self.expense_count())
            .filter_map(|i| self.expense_snapshot(i))
            .map(|snapshot| snapshot.decode_expense())
            .collect()
    }

    /// Read every category total, in enumeration order
    ///
    /// An index that yields no snapshot is skipped.
    pub fn category_totals(&self) -> PlannerResult<Vec<CategoryTotalSnapshot>> {
        (0..self.category_count())
            .filter_map(|i| self.category_total_snapshot(i))
            .map(|snapshot| snapshot.decode_category_total())
            .collect()
    }
}

impl Drop for BoundaryClient {
    fn drop(&mut self) {
        // SAFETY: the ledger came from `budget_ledger_new` and is freed only here.
        unsafe { boundary::budget_ledger_free(self.raw()) }
    }
}
