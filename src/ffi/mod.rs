//! C ABI boundary for the budget planner
//!
//! # Buffer protocol
//!
//! * **Inputs** are null-terminated C strings owned by the caller. The
//!   boundary copies what it needs during the call and never frees or keeps
//!   an input pointer. Text is decoded lossily (invalid UTF-8 becomes U+FFFD)
//!   and cut to the ledger's `max_field_length` bytes on a character
//!   boundary, so decoding never fails for a non-null pointer.
//! * **Outputs** are opaque [`SnapshotBuffer`] handles. The boundary allocates
//!   every handle it returns, and the caller must pass each non-null handle
//!   to [`budget_release_snapshot`] exactly once, after its last read through
//!   [`budget_snapshot_data`] / [`budget_snapshot_len`]. The boundary never
//!   frees a handle on its own.
//! * **Ledgers** are opaque [`LedgerHandle`]s created by [`budget_ledger_new`]
//!   and destroyed by [`budget_ledger_free`]. Each handle is an independent
//!   ledger; there is no global state. A handle must be used by one caller at
//!   a time.
//!
//! Status-returning calls yield `1` on success and `0` on failure. Counts are
//! `-1` only when the ledger pointer is null. Lookups outside `[0, count)`
//! yield a null handle.
//!
//! Rust callers should prefer [`client::BoundaryClient`], which wraps these
//! calls and releases every handle through a drop guard.

pub mod boundary;
pub mod client;
pub mod input;
pub mod snapshot;

pub use boundary::{
    budget_add_expense, budget_clear_all_expenses, budget_delete_expense,
    budget_get_category_count, budget_get_category_total_snapshot, budget_get_expense_count,
    budget_get_expense_snapshot, budget_get_total_expenses, budget_ledger_free, budget_ledger_new,
    budget_release_snapshot, budget_snapshot_data, budget_snapshot_len, LedgerHandle,
};
pub use client::{BoundaryClient, Snapshot};
pub use snapshot::SnapshotBuffer;
