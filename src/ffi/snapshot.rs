//! Snapshot buffers handed out over the C ABI

use std::ffi::{CStr, CString};

use crate::error::{PlannerError, PlannerResult};
use crate::models::{CategoryTotal, CategoryTotalSnapshot, ExpenseRecord, ExpenseSnapshot};

/// An encoded snapshot owned by whoever holds its handle
///
/// Created only by the boundary; released only by `budget_release_snapshot`.
#[derive(Debug)]
pub struct SnapshotBuffer {
    text: CString,
}

impl SnapshotBuffer {
    /// Wrap encoded text in a null-terminated buffer
    pub fn new(text: String) -> PlannerResult<Self> {
        CString::new(text)
            .map(|text| Self { text })
            .map_err(|e| PlannerError::AllocationFailure(format!("Snapshot contains NUL: {}", e)))
    }

    /// Encode an expense record
    pub fn for_expense(record: &ExpenseRecord) -> PlannerResult<Self> {
        Self::new(ExpenseSnapshot::from(record).encode()?)
    }

    /// Encode a category total
    pub fn for_category_total(total: &CategoryTotal) -> PlannerResult<Self> {
        Self::new(CategoryTotalSnapshot::from(total).encode()?)
    }

    pub fn as_c_str(&self) -> &CStr {
        &self.text
    }

    /// Length in bytes, not counting the terminator
    pub fn len(&self) -> usize {
        self.text.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.as_bytes().is_empty()
    }

    /// Move the buffer to the heap and hand out its handle
    pub(crate) fn into_handle(self) -> *mut SnapshotBuffer {
        Box::into_raw(Box::new(self))
    }
}
