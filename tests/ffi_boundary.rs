//! Drives the exported C ABI the way a foreign caller would.

use std::ffi::{CStr, CString};
use std::ptr;

use budget_planner::ffi::*;
use budget_planner::models::{CategoryTotalSnapshot, ExpenseSnapshot};

fn c(s: &str) -> CString {
    CString::new(s).unwrap()
}

unsafe fn add(ledger: *mut LedgerHandle, category: &str, amount: f64) -> i32 {
    budget_add_expense(
        ledger,
        c("2025-03-01").as_ptr(),
        c(category).as_ptr(),
        amount,
        c("note").as_ptr(),
    )
}

unsafe fn read_and_release(snapshot: *mut SnapshotBuffer) -> String {
    assert!(!snapshot.is_null());
    let text = CStr::from_ptr(budget_snapshot_data(snapshot))
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(budget_snapshot_len(snapshot), text.len());
    budget_release_snapshot(snapshot);
    text
}

#[test]
fn full_lifecycle() {
    unsafe {
        let ledger = budget_ledger_new(0, 0);
        assert!(!ledger.is_null());

        assert_eq!(add(ledger, "Food", 12.5), 1);
        assert_eq!(add(ledger, "Rent", 600.0), 1);
        assert_eq!(add(ledger, "Food", 7.25), 1);
        assert_eq!(add(ledger, "Food", 0.0), 0);

        assert_eq!(budget_get_expense_count(ledger), 3);
        assert_eq!(budget_get_category_count(ledger), 2);
        assert_eq!(budget_get_total_expenses(ledger), 619.75);

        let text = read_and_release(budget_get_category_total_snapshot(ledger, 0));
        assert_eq!(text, r#"{"name":"Food","total":19.75}"#);

        let expense = ExpenseSnapshot::decode(&read_and_release(budget_get_expense_snapshot(
            ledger, 1,
        )))
        .unwrap();
        assert_eq!(expense.category, "Rent");

        assert_eq!(budget_delete_expense(ledger, 1), 1);
        assert_eq!(budget_get_category_count(ledger), 1);
        assert!(budget_get_expense_snapshot(ledger, 2).is_null());
        assert!(budget_get_category_total_snapshot(ledger, 1).is_null());

        assert_eq!(budget_clear_all_expenses(ledger), 1);
        assert_eq!(budget_get_expense_count(ledger), 0);
        assert_eq!(budget_get_total_expenses(ledger), 0.0);

        budget_ledger_free(ledger);
    }
}

#[test]
fn ledgers_are_independent() {
    unsafe {
        let first = budget_ledger_new(2, 0);
        let second = budget_ledger_new(2, 0);

        assert_eq!(add(first, "Food", 1.0), 1);
        assert_eq!(add(first, "Food", 1.0), 1);
        assert_eq!(add(first, "Food", 1.0), 0);
        assert_eq!(add(second, "Fun", 2.0), 1);

        assert_eq!(budget_get_expense_count(first), 2);
        assert_eq!(budget_get_expense_count(second), 1);

        let total =
            CategoryTotalSnapshot::decode(&read_and_release(budget_get_category_total_snapshot(
                second, 0,
            )))
            .unwrap();
        assert_eq!(total.name, "Fun");

        budget_ledger_free(first);
        budget_ledger_free(second);
    }
}

#[test]
fn max_capacity_ledger_allocates_lazily() {
    unsafe {
        let ledger = budget_ledger_new(u32::MAX, 0);
        assert!(!ledger.is_null());
        assert_eq!(add(ledger, "Food", 1.0), 1);
        assert_eq!(budget_get_total_expenses(ledger), 1.0);
        budget_ledger_free(ledger);
    }
}

#[test]
fn null_arguments_are_reported() {
    unsafe {
        assert_eq!(budget_get_expense_count(ptr::null()), -1);
        assert_eq!(budget_get_category_count(ptr::null()), -1);
        assert_eq!(budget_get_total_expenses(ptr::null()), -1.0);
        assert_eq!(budget_clear_all_expenses(ptr::null_mut()), 0);
        assert!(budget_get_expense_snapshot(ptr::null(), 0).is_null());

        let ledger = budget_ledger_new(0, 0);
        assert_eq!(
            budget_add_expense(ledger, ptr::null(), c("Food").as_ptr(), 1.0, c("x").as_ptr()),
            0
        );
        assert_eq!(budget_delete_expense(ledger, -1), 0);
        budget_ledger_free(ledger);

        budget_release_snapshot(ptr::null_mut());
        budget_ledger_free(ptr::null_mut());
    }
}
