//! Expense display formatting
//!
//! Register and detail views of expense snapshots.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Amount, ExpenseSnapshot};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format expenses as a register, one row per stored position
pub fn format_expense_register(expenses: &[ExpenseSnapshot], currency_symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows = expenses.iter().enumerate().map(|(index, expense)| ExpenseRow {
        index,
        date: expense.date.clone(),
        category: expense.category.clone(),
        amount: Amount::new(expense.amount).format_with_symbol(currency_symbol),
        description: truncate(&expense.description, 40),
    });

    let mut output = Table::new(rows).with(Style::psql()).to_string();
    output.push('\n');
    output
}

/// Format a single expense for display
pub fn format_expense_details(
    index: usize,
    expense: &ExpenseSnapshot,
    currency_symbol: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     #{}\n", index));
    output.push_str(&format!("Date:        {}\n", expense.date));
    output.push_str(&format!("Category:    {}\n", expense.category));
    output.push_str(&format!(
        "Amount:      {}\n",
        Amount::new(expense.amount).format_with_symbol(currency_symbol)
    ));
    if !expense.description.is_empty() {
        output.push_str(&format!("Description: {}\n", expense.description));
    }

    output
}

/// Truncate on a char boundary, marking the cut with "..."
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}
