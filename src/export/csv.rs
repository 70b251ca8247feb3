//! CSV Export functionality
//!
//! Writes expenses or category totals as CSV. The expense layout matches what
//! the CSV importer reads, so an export can be imported again.

use std::io::Write;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{CategoryTotalSnapshot, ExpenseSnapshot};

fn export_err(e: impl ToString) -> PlannerError {
    PlannerError::Export(e.to_string())
}

/// Export expenses as `date,category,amount,description` rows
pub fn export_expenses_csv<W: Write>(
    expenses: &[ExpenseSnapshot],
    writer: &mut W,
) -> PlannerResult<()> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(["date", "category", "amount", "description"])
        .map_err(export_err)?;

    for expense in expenses {
        let amount = expense.amount.to_string();
        csv.write_record([
            expense.date.as_str(),
            expense.category.as_str(),
            amount.as_str(),
            expense.description.as_str(),
        ])
        .map_err(export_err)?;
    }

    csv.flush().map_err(export_err)?;
    Ok(())
}

/// Export category totals as `category,total` rows
pub fn export_category_totals_csv<W: Write>(
    totals: &[CategoryTotalSnapshot],
    writer: &mut W,
) -> PlannerResult<()> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(["category", "total"]).map_err(export_err)?;
    for total in totals {
        let amount = total.total.to_string();
        csv.write_record([total.name.as_str(), amount.as_str()])
            .map_err(export_err)?;
    }

    csv.flush().map_err(export_err)?;
    Ok(())
}
