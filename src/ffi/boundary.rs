//! Exported C functions
//!
//! Every function here is a single call-and-return: it validates its
//! pointers, runs one ledger operation, and flattens the result to a status
//! code, a count, or a snapshot handle. Nothing panics on a bad index, a full
//! ledger or a null pointer.

use std::os::raw::{c_char, c_int};
use std::ptr;

use log::warn;

use super::input::decode_text;
use super::snapshot::SnapshotBuffer;
use crate::config::Settings;
use crate::error::PlannerResult;
use crate::models::NewExpense;
use crate::services::ExpenseLedger;

const SUCCESS: c_int = 1;
const FAILURE: c_int = 0;
const NO_LEDGER: c_int = -1;

/// An expense ledger owned by a C caller
#[derive(Debug)]
pub struct LedgerHandle {
    ledger: ExpenseLedger,
    max_field_length: usize,
}

impl LedgerHandle {
    /// Create a handle from settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            ledger: ExpenseLedger::from_settings(settings),
            max_field_length: settings.max_field_length,
        }
    }

    /// Read-only access to the ledger behind this handle
    pub fn ledger(&self) -> &ExpenseLedger {
        &self.ledger
    }

    unsafe fn decode_expense(
        &self,
        date: *const c_char,
        category: *const c_char,
        amount: f64,
        description: *const c_char,
    ) -> PlannerResult<NewExpense> {
        Ok(NewExpense::new(
            decode_text(date, "date", self.max_field_length)?,
            decode_text(category, "category", self.max_field_length)?,
            amount,
            decode_text(description, "description", self.max_field_length)?,
        ))
    }
}

fn status<T>(result: PlannerResult<T>, operation: &str) -> c_int {
    match result {
        Ok(_) => SUCCESS,
        Err(e) => {
            warn!("{} rejected: {}", operation, e);
            FAILURE
        }
    }
}

fn position(index: c_int) -> Option<usize> {
    usize::try_from(index).ok()
}

fn count_to_c(count: usize) -> c_int {
    c_int::try_from(count).unwrap_or(c_int::MAX)
}

fn snapshot_handle(
    snapshot: Option<PlannerResult<SnapshotBuffer>>,
    operation: &str,
    index: c_int,
) -> *mut SnapshotBuffer {
    match snapshot {
        Some(Ok(buffer)) => buffer.into_handle(),
        Some(Err(e)) => {
            warn!("{}({}) failed: {}", operation, index, e);
            ptr::null_mut()
        }
        None => ptr::null_mut(),
    }
}

/// Create a new, empty ledger
///
/// `capacity` and `max_field_length` of `0` select the defaults. Free the
/// result with [`budget_ledger_free`].
#[no_mangle]
pub extern "C" fn budget_ledger_new(capacity: u32, max_field_length: u32) -> *mut LedgerHandle {
    let mut settings = Settings::default();
    if capacity > 0 {
        settings.capacity = capacity as usize;
    }
    if max_field_length > 0 {
        settings.max_field_length = max_field_length as usize;
    }
    Box::into_raw(Box::new(LedgerHandle::from_settings(&settings)))
}

/// Destroy a ledger created by [`budget_ledger_new`]
///
/// Snapshot handles already returned stay valid; they do not borrow from
/// the ledger.
///
/// # Safety
///
/// `ledger` must be null or a pointer from [`budget_ledger_new`] that has
/// not been freed.
#[no_mangle]
pub unsafe extern "C" fn budget_ledger_free(ledger: *mut LedgerHandle) {
    if !ledger.is_null() {
        drop(Box::from_raw(ledger));
    }
}

/// Append an expense; `1` on success, `0` when the ledger is full or the
/// input is invalid
///
/// # Safety
///
/// `ledger` must be null or a live ledger handle. Each string pointer must be
/// null or a null-terminated string valid for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn budget_add_expense(
    ledger: *mut LedgerHandle,
    date: *const c_char,
    category: *const c_char,
    amount: f64,
    description: *const c_char,
) -> c_int {
    let Some(handle) = ledger.as_mut() else {
        warn!("add_expense called with a null ledger");
        return FAILURE;
    };

    let result = handle
        .decode_expense(date, category, amount, description)
        .and_then(|expense| handle.ledger.add_expense(expense));
    status(result, "add_expense")
}

/// Delete the expense at `index`; `0` when `index` is outside `[0, count)`
///
/// # Safety
///
/// `ledger` must be null or a live ledger handle.
#[no_mangle]
pub unsafe extern "C" fn budget_delete_expense(ledger: *mut LedgerHandle, index: c_int) -> c_int {
    let Some(handle) = ledger.as_mut() else {
        warn!("delete_expense called with a null ledger");
        return FAILURE;
    };

    let Some(i) = position(index) else {
        warn!("delete_expense rejected: negative index {}", index);
        return FAILURE;
    };
    status(handle.ledger.delete_expense(i), "delete_expense")
}

/// Remove every expense; always `1` for a live ledger
///
/// # Safety
///
/// `ledger` must be null or a live ledger handle.
#[no_mangle]
pub unsafe extern "C" fn budget_clear_all_expenses(ledger: *mut LedgerHandle) -> c_int {
    match ledger.as_mut() {
        Some(handle) => {
            handle.ledger.clear();
            SUCCESS
        }
        None => {
            warn!("clear_all_expenses called with a null ledger");
            FAILURE
        }
    }
}

/// Number of stored expenses
///
/// # Safety
///
/// `ledger` must be null or a live ledger handle.
#[no_mangle]
pub unsafe extern "C" fn budget_get_expense_count(ledger: *const LedgerHandle) -> c_int {
    ledger
        .as_ref()
        .map_or(NO_LEDGER, |h| count_to_c(h.ledger.expense_count()))
}

/// Number of distinct categories
///
/// # Safety
///
/// `ledger` must be null or a live ledger handle.
#[no_mangle]
pub unsafe extern "C" fn budget_get_category_count(ledger: *const LedgerHandle) -> c_int {
    ledger
        .as_ref()
        .map_or(NO_LEDGER, |h| count_to_c(h.ledger.category_count()))
}

/// Sum of all stored amounts, or `-1.0` for a null ledger
///
/// # Safety
///
/// `ledger` must be null or a live ledger handle.
#[no_mangle]
pub unsafe extern "C" fn budget_get_total_expenses(ledger: *const LedgerHandle) -> f64 {
    ledger
        .as_ref()
        .map_or(-1.0, |h| h.ledger.total_expenses().value())
}

/// Snapshot of the expense at `index`, or null
///
/// A non-null result must be released with [`budget_release_snapshot`].
///
/// # Safety
///
/// `ledger` must be null or a live ledger handle.
#[no_mangle]
pub unsafe extern "C" fn budget_get_expense_snapshot(
    ledger: *const LedgerHandle,
    index: c_int,
) -> *mut SnapshotBuffer {
    let Some(handle) = ledger.as_ref() else {
        return ptr::null_mut();
    };

    let snapshot = position(index)
        .and_then(|i| handle.ledger.expense(i))
        .map(SnapshotBuffer::for_expense);
    snapshot_handle(snapshot, "get_expense_snapshot", index)
}

/// Snapshot of the category total at `index`, or null
///
/// A non-null result must be released with [`budget_release_snapshot`].
///
/// # Safety
///
/// `ledger` must be null or a live ledger handle.
#[no_mangle]
pub unsafe extern "C" fn budget_get_category_total_snapshot(
    ledger: *const LedgerHandle,
    index: c_int,
) -> *mut SnapshotBuffer {
    let Some(handle) = ledger.as_ref() else {
        return ptr::null_mut();
    };

    let snapshot = position(index)
        .and_then(|i| handle.ledger.category_total(i))
        .map(SnapshotBuffer::for_category_total);
    snapshot_handle(snapshot, "get_category_total_snapshot", index)
}

/// Pointer to the snapshot's null-terminated UTF-8 text, or null
///
/// The pointer is valid until the snapshot is released.
///
/// # Safety
///
/// `snapshot` must be null or a live snapshot handle.
#[no_mangle]
pub unsafe extern "C" fn budget_snapshot_data(snapshot: *const SnapshotBuffer) -> *const c_char {
    snapshot
        .as_ref()
        .map_or(ptr::null(), |buffer| buffer.as_c_str().as_ptr())
}

/// Length of the snapshot text in bytes, without the terminator
///
/// # Safety
///
/// `snapshot` must be null or a live snapshot handle.
#[no_mangle]
pub unsafe extern "C" fn budget_snapshot_len(snapshot: *const SnapshotBuffer) -> usize {
    snapshot.as_ref().map_or(0, SnapshotBuffer::len)
}

/// Release a snapshot handle; null is ignored
///
/// # Safety
///
/// `snapshot` must be null or a handle returned by this boundary that has not
/// been released yet. The handle must not be used afterwards.
#[no_mangle]
pub unsafe extern "C" fn budget_release_snapshot(snapshot: *mut SnapshotBuffer) {
    if !snapshot.is_null() {
        drop(Box::from_raw(snapshot));
    }
}
