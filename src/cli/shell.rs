//! Interactive shell
//!
//! A line-oriented session over one ledger. Each input line is split into
//! words (quotes group words, backslash escapes inside double quotes) and
//! parsed with clap, so `help` and per-command `--help` come for free.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::export::{handle_export_to_file, ExportFormat};
use super::import::add_through;
use crate::config::Settings;
use crate::display::{format_category_totals, format_expense_details, format_expense_register};
use crate::error::PlannerResult;
use crate::ffi::BoundaryClient;
use crate::models::{Amount, NewExpense};
use crate::reports::LedgerSummary;

const PROMPT: &str = "budget> ";

#[derive(Parser, Debug)]
#[command(no_binary_name = true, name = "budget", disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

/// Shell commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum ShellCommand {
    /// Add an expense
    Add {
        /// Category name
        category: String,
        /// Amount (e.g., "12.50" or "$12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Description
        description: String,
        /// Expense date, defaults to today (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete the expense at a position
    #[command(alias = "rm")]
    Delete {
        /// Position as shown by `list`
        index: usize,
    },

    /// Remove every expense
    Clear,

    /// List all expenses
    #[command(alias = "ls")]
    List,

    /// Show one expense
    Show {
        /// Position as shown by `list`
        index: usize,
    },

    /// Show per-category totals
    Totals,

    /// Show the total of all expenses
    Total,

    /// Show a spending summary
    Summary,

    /// Export the ledger to a file
    Export {
        /// Output file path
        output: PathBuf,
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Split a shell line into words
///
/// Single quotes take everything literally. Inside double quotes a backslash
/// escapes the next character.
pub fn split_args(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(c) => current.push(c),
                        None => return Err("unterminated single quote".into()),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(c) => current.push(c),
                            None => return Err("unterminated double quote".into()),
                        },
                        Some(c) => current.push(c),
                        None => return Err("unterminated double quote".into()),
                    }
                }
            }
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                in_word = true;
                current.push(c);
            }
        }
    }

    if in_word {
        words.push(current);
    }
    Ok(words)
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Execute one command; returns `false` when the session should end
fn execute<W: Write>(
    client: &mut BoundaryClient,
    settings: &Settings,
    command: ShellCommand,
    out: &mut W,
) -> PlannerResult<bool> {
    let symbol = settings.currency_symbol.as_str();

    match command {
        ShellCommand::Add {
            category,
            amount,
            description,
            date,
        } => {
            let amount = match Amount::parse(&amount) {
                Ok(amount) => amount,
                Err(e) => {
                    writeln!(out, "{}", e)?;
                    return Ok(true);
                }
            };
            let expense = NewExpense::new(
                date.unwrap_or_else(today),
                category,
                amount.value(),
                description,
            );
            match add_through(client, &expense) {
                Ok(()) => writeln!(
                    out,
                    "Added expense #{}",
                    client.expense_count().saturating_sub(1)
                )?,
                Err(e) => writeln!(out, "Could not add expense: {}", e)?,
            }
        }
        ShellCommand::Delete { index } => {
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
        ShellCommand::Clear => {
            let removed = client.expense_count();
            client.clear();
            writeln!(out, "Cleared {} expenses", removed)?;
        }
        ShellCommand::List => {
            write!(out, "{}", format_expense_register(&client.expenses()?, symbol))?;
        }
        ShellCommand::Show { index } => match client.expense_snapshot(index) {
            Some(snapshot) => {
                let expense = snapshot.decode_expense()?;
                write!(out, "{}", format_expense_details(index, &expense, symbol))?;
            }
            None => writeln!(out, "No expense at position {}", index)?,
        },
        ShellCommand::Totals => {
            write!(
                out,
                "{}",
                format_category_totals(&client.category_totals()?, symbol)
            )?;
        }
        ShellCommand::Total => {
            writeln!(
                out,
                "Total Expenses: {}",
                Amount::new(client.total_expenses()).format_with_symbol(symbol)
            )?;
        }
        ShellCommand::Summary => {
            let summary = LedgerSummary::from_snapshots(
                client.capacity(),
                &client.expenses()?,
                &client.category_totals()?,
            );
            write!(out, "{}", summary.format_terminal(symbol))?;
        }
        ShellCommand::Export {
            output,
            format,
            pretty,
        } => {
            handle_export_to_file(client, &output, format, pretty)?;
            writeln!(out, "Ledger exported to: {}", output.display())?;
        }
        ShellCommand::Quit => return Ok(false),
    }

    Ok(true)
}

/// Run a shell session until `quit` or end of input
///
/// Bad input is reported on `out` and the session continues; only I/O
/// failures end it early.
pub fn run_session<R: BufRead, W: Write>(
    client: &mut BoundaryClient,
    settings: &Settings,
    input: R,
    out: &mut W,
) -> PlannerResult<()> {
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;

        let words = match split_args(&line) {
            Ok(words) if words.is_empty() => continue,
            Ok(words) => words,
            Err(e) => {
                writeln!(out, "error: {}", e)?;
                continue;
            }
        };

        let command = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                // Help output and usage errors are both shown, never fatal
                write!(out, "{}", e.render())?;
                continue;
            }
        };

        log::debug!("shell command: {:?}", command);
        match execute(client, settings, command, out) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => writeln!(out, "error: {}", e)?,
        }
    }

    Ok(())
}
