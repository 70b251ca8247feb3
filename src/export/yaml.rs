//! YAML Export functionality
//!
//! Writes the full ledger export as YAML for human-readable backups.

use std::io::Write;

use crate::error::{PlannerError, PlannerResult};
use crate::export::json::LedgerExport;

fn export_err(e: impl ToString) -> PlannerError {
    PlannerError::Export(e.to_string())
}

/// Export a ledger to YAML, preceded by a comment header
pub fn export_full_yaml<W: Write>(export: &LedgerExport, writer: &mut W) -> PlannerResult<()> {
    writeln!(writer, "# Budget Planner Ledger Export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, export).map_err(export_err)?;

    Ok(())
}

/// Read back a YAML export
pub fn import_from_yaml(yaml_str: &str) -> PlannerResult<LedgerExport> {
    let export: LedgerExport =
        serde_yaml::from_str(yaml_str).map_err(|e| PlannerError::Import(e.to_string()))?;

    export.validate().map_err(PlannerError::Import)?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewExpense;
    use crate::services::ExpenseLedger;

    fn sample_export() -> LedgerExport {
        let mut ledger = ExpenseLedger::new(10);
        ledger
            .add_expense(NewExpense::new("2025-03-01", "Groceries", 42.1, "Weekly shop"))
            .unwrap();
        ledger
            .add_expense(NewExpense::new("2025-03-04", "Rent", 600.0, "March"))
            .unwrap();
        LedgerExport::from_ledger(&ledger)
    }

    #[test]
    fn test_yaml_export() {
        let mut yaml_output = Vec::new();
        export_full_yaml(&sample_export(), &mut yaml_output).unwrap();
        let yaml_string = String::from_utf8(yaml_output).unwrap();

        assert!(yaml_string.starts_with("# Budget Planner Ledger Export"));
        assert!(yaml_string.contains("Groceries"));
        assert!(yaml_string.contains("Weekly shop"));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let export = sample_export();
        let mut yaml_output = Vec::new();
        export_full_yaml(&export, &mut yaml_output).unwrap();

        // Comment lines are valid YAML, so the whole file parses
        let imported = import_from_yaml(&String::from_utf8(yaml_output).unwrap()).unwrap();

        assert_eq!(imported.expenses, export.expenses);
        assert_eq!(imported.category_totals[1].name, "Rent");
    }
}
