//! CLI command handler for loading expenses from a file
//!
//! Reads a CSV file (or a JSON/YAML export), adds every row to the ledger
//! through the C ABI, applies any requested deletions, and prints the
//! resulting expense table and category totals.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use super::export::{handle_export_to_file, ExportFormat};
use crate::config::Settings;
use crate::display::{format_category_totals, format_expense_register};
use crate::error::{PlannerError, PlannerResult};
use crate::export::{import_from_json, import_from_yaml};
use crate::ffi::BoundaryClient;
use crate::models::{ExpenseRecord, NewExpense};
use crate::reports::LedgerSummary;
use crate::services::{CsvLayout, ImportResult, ImportService, ParsedExpense};

/// Input file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ImportFormat {
    /// `date,category,amount,description` rows
    Csv,
    /// A JSON ledger export
    Json,
    /// A YAML ledger export
    Yaml,
}

/// Arguments for the import command
#[derive(Args, Debug, Clone)]
pub struct ImportArgs {
    /// Path to the input file
    pub file: PathBuf,

    /// Input format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ImportFormat,

    /// The CSV file has no header row
    #[arg(long)]
    pub no_header: bool,

    /// CSV field delimiter
    #[arg(long, default_value = ",")]
    pub delimiter: char,

    /// Delete the expense at this position after loading (repeatable, applied in order)
    #[arg(short, long = "delete", value_name = "INDEX")]
    pub delete: Vec<usize>,

    /// Clear the ledger after loading
    #[arg(long)]
    pub clear: bool,

    /// Print a spending summary instead of the category table
    #[arg(long)]
    pub summary: bool,

    /// Write the resulting ledger to this file
    #[arg(short, long)]
    pub export: Option<PathBuf>,

    /// Format for --export
    #[arg(long, value_enum, default_value = "json")]
    pub export_format: ExportFormat,
}

/// Add one expense through the client, turning a rejection into an error
///
/// The record is validated locally first so a bad row gets a specific
/// message, and so it is reported as invalid even when the ledger is full.
pub(crate) fn add_through(client: &mut BoundaryClient, expense: &NewExpense) -> PlannerResult<()> {
    ExpenseRecord::new(expense.clone())?;
    if client.is_full() {
        return Err(PlannerError::CapacityExceeded {
            capacity: client.capacity(),
        });
    }
    if client.add_expense(expense) {
        Ok(())
    } else {
        Err(PlannerError::InvalidInput(
            "expense was rejected by the ledger".into(),
        ))
    }
}

fn read_rows(args: &ImportArgs) -> PlannerResult<Vec<Result<ParsedExpense, (usize, String)>>> {
    let content = fs::read_to_string(&args.file).map_err(|e| {
        PlannerError::Import(format!("Failed to read {}: {}", args.file.display(), e))
    })?;

    let from_export = |expenses: Vec<NewExpense>| {
        expenses
            .into_iter()
            .enumerate()
            .map(|(row_number, expense)| {
                Ok(ParsedExpense {
                    expense,
                    row_number,
                })
            })
            .collect()
    };

    match args.format {
        ImportFormat::Csv => {
            let delimiter = u8::try_from(args.delimiter).map_err(|_| {
                PlannerError::Import(format!("Delimiter must be ASCII: {:?}", args.delimiter))
            })?;
            let layout = CsvLayout::default()
                .with_header(!args.no_header)
                .with_delimiter(delimiter);
            ImportService::new(layout).parse_csv(content.as_bytes())
        }
        ImportFormat::Json => Ok(from_export(import_from_json(&content)?.into_new_expenses())),
        ImportFormat::Yaml => Ok(from_export(import_from_yaml(&content)?.into_new_expenses())),
    }
}

fn write_import_report<W: Write>(result: &ImportResult, out: &mut W) -> PlannerResult<()> {
    writeln!(out, "Imported {} expenses", result.imported)?;
    if result.errors > 0 {
        writeln!(out, "Skipped {} rows:", result.errors)?;
        for (row, msg) in &result.error_messages {
            writeln!(out, "  Row {}: {}", row + 1, msg)?;
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Handle the import command
pub fn handle_import_command<W: Write>(
    client: &mut BoundaryClient,
    settings: &Settings,
    args: &ImportArgs,
    out: &mut W,
) -> PlannerResult<()> {
    let rows = read_rows(args)?;
    let result = ImportService::default().import(rows, |expense| add_through(client, &expense));
    write_import_report(&result, out)?;

    for &index in &args.delete {
        if client.delete_expense(index) {
            writeln!(out, "Deleted expense #{}", index)?;
        } else {
            writeln!(
                out,
                "No expense at position {} ({} stored)",
                index,
                client.expense_count()
            )?;
        }
    }

    if args.clear {
        client.clear();
        writeln!(out, "Cleared all expenses")?;
    }

    let expenses = client.expenses()?;
    let totals = client.category_totals()?;
    let symbol = settings.currency_symbol.as_str();

    write!(out, "{}", format_expense_register(&expenses, symbol))?;
    writeln!(out)?;
    if args.summary {
        let summary = LedgerSummary::from_snapshots(client.capacity(), &expenses, &totals);
        write!(out, "{}", summary.format_terminal(symbol))?;
    } else {
        write!(out, "{}", format_category_totals(&totals, symbol))?;
    }

    if let Some(path) = &args.export {
        handle_export_to_file(client, path, args.export_format, true)?;
        writeln!(out, "\nLedger exported to: {}", path.display())?;
    }

    Ok(())
}
