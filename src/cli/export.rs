//! CLI helpers for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;

use crate::error::{PlannerError, PlannerResult};
use crate::export::{csv, json, yaml, LedgerExport};
use crate::ffi::BoundaryClient;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (expenses only)
    Csv,
    /// JSON format (full ledger)
    Json,
    /// YAML format (full ledger, human-readable)
    Yaml,
}

/// Write the client's ledger in `format`
pub fn write_export<W: Write>(
    client: &BoundaryClient,
    format: ExportFormat,
    pretty: bool,
    writer: &mut W,
) -> PlannerResult<()> {
    let expenses = client.expenses()?;

    match format {
        ExportFormat::Csv => csv::export_expenses_csv(&expenses, writer),
        ExportFormat::Json | ExportFormat::Yaml => {
            let export =
                LedgerExport::from_snapshots(client.capacity(), expenses, client.category_totals()?);
            if format == ExportFormat::Json {
                json::export_full_json(&export, writer, pretty)
            } else {
                yaml::export_full_yaml(&export, writer)
            }
        }
    }
}

/// Export the client's ledger to a file
pub fn handle_export_to_file(
    client: &BoundaryClient,
    output: &Path,
    format: ExportFormat,
    pretty: bool,
) -> PlannerResult<()> {
    let file = File::create(output).map_err(|e| {
        PlannerError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    write_export(client, format, pretty, &mut writer)?;
    writer
        .flush()
        .map_err(|e| PlannerError::Export(e.to_string()))?;

    log::info!("Exported ledger to {} as {:?}", output.display(), format);
    Ok(())
}
