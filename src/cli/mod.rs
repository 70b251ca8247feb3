//! CLI command handlers
//!
//! Bridges clap argument parsing with a ledger driven through the C ABI via
//! [`BoundaryClient`](crate::ffi::BoundaryClient).

pub mod export;
pub mod import;
pub mod shell;

pub use export::{handle_export_to_file, write_export, ExportFormat};
pub use import::{handle_import_command, ImportArgs, ImportFormat};
pub use shell::{run_session, split_args, ShellCommand};
