//! CSV Import service
//!
//! Reads `date,category,amount,description` rows and feeds them, one by one,
//! through whatever add operation the caller supplies. Bad rows are reported
//! and skipped; they never abort the import.

use std::collections::BTreeMap;
use std::io::Read;

use csv::{ReaderBuilder, StringRecord};

use crate::error::PlannerResult;
use crate::models::{Amount, NewExpense};

/// Layout options for an expense CSV
#[derive(Debug, Clone)]
pub struct CsvLayout {
    /// Whether the first row is a header
    pub has_header: bool,
    /// Delimiter character
    pub delimiter: u8,
}

impl Default for CsvLayout {
    fn default() -> Self {
        Self {
            has_header: true,
            delimiter: b',',
        }
    }
}

impl CsvLayout {
    /// Set whether first row is header
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Set the delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// A parsed row from the CSV before import
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedExpense {
    pub expense: NewExpense,
    /// Row number in the CSV (0-indexed, excluding header)
    pub row_number: usize,
}

/// Result of a completed import
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    /// Number of expenses imported
    pub imported: usize,
    /// Number of rows that could not be imported
    pub errors: usize,
    /// Error messages by row
    pub error_messages: BTreeMap<usize, String>,
}

impl ImportResult {
    fn record_error(&mut self, row_number: usize, message: String) {
        self.errors += 1;
        self.error_messages.insert(row_number, message);
    }
}

/// Service for CSV import
#[derive(Debug, Clone, Default)]
pub struct ImportService {
    layout: CsvLayout,
}

impl ImportService {
    /// Create a new import service
    pub fn new(layout: CsvLayout) -> Self {
        Self { layout }
    }

    /// Parse a CSV into expense inputs
    ///
    /// Each element is either a parsed row or `(row_number, message)`.
    pub fn parse_csv<R: Read>(
        &self,
        reader: R,
    ) -> PlannerResult<Vec<Result<ParsedExpense, (usize, String)>>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(self.layout.has_header)
            .delimiter(self.layout.delimiter)
            .flexible(true)
            .from_reader(reader);

        let mut results = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let parsed = match result {
                Ok(record) => Self::parse_record(&record, idx).map_err(|e| (idx, e)),
                Err(e) => Err((idx, format!("Error reading CSV record: {}", e))),
            };
            results.push(parsed);
        }
        Ok(results)
    }

    fn parse_record(record: &StringRecord, row_number: usize) -> Result<ParsedExpense, String> {
        let field = |i: usize, name: &str| {
            record
                .get(i)
                .map(|s| s.trim().to_string())
                .ok_or_else(|| format!("Missing {} column", name))
        };

        let date = field(0, "date")?;
        let category = field(1, "category")?;
        let amount = Amount::parse(&field(2, "amount")?).map_err(|e| e.to_string())?;
        let description = field(3, "description")?;

        Ok(ParsedExpense {
            expense: NewExpense::new(date, category, amount.value(), description),
            row_number,
        })
    }

    /// Import parsed rows through `add`
    ///
    /// Rows that failed to parse, and rows `add` rejects, are counted as errors.
    pub fn import<F>(
        &self,
        rows: Vec<Result<ParsedExpense, (usize, String)>>,
        mut add: F,
    ) -> ImportResult
    where
        F: FnMut(NewExpense) -> PlannerResult<()>,
    {
        let mut result = ImportResult::default();

        for row in rows {
            match row {
                Ok(parsed) => match add(parsed.expense) {
                    Ok(()) => result.imported += 1,
                    Err(e) => result.record_error(parsed.row_number, e.to_string()),
                },
                Err((row_number, message)) => result.record_error(row_number, message),
            }
        }

        log::info!(
            "Imported {} expenses ({} rows rejected)",
            result.imported,
            result.errors
        );
        result
    }
}
