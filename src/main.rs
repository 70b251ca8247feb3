use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use budget_planner::cli::{handle_import_command, run_session, ImportArgs};
use budget_planner::config::Settings;
use budget_planner::ffi::BoundaryClient;

#[derive(Parser)]
#[command(
    name = "budget",
    author = "Kaylee Beyene",
    version,
    about = "Expense ledger with per-category totals",
    long_about = "Records expenses in a bounded in-memory ledger and keeps a running \
                  total per category. Every operation goes through the library's C ABI, \
                  the same surface a foreign front end would use."
)]
struct Cli {
    /// Settings file (JSON)
    #[arg(
        long,
        global = true,
        env = "BUDGET_PLANNER_CONFIG",
        default_value = "budget-planner.json"
    )]
    config: PathBuf,

    /// Override the ledger capacity
    #[arg(long, global = true)]
    capacity: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load expenses from a file and print the resulting ledger
    Import(ImportArgs),

    /// Start an interactive session (reads commands from stdin)
    Shell,

    /// Show current configuration
    Config {
        /// Write the effective settings to the config file
        #[arg(long)]
        init: bool,
    },
}

fn init_logging(settings: &Settings) {
    // RUST_LOG directives are applied on top of the configured level
    env_logger::Builder::new()
        .filter_level(settings.level_filter())
        .parse_default_env()
        .format_timestamp_secs()
        .format_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load_or_default(&cli.config)
        .with_context(|| format!("loading settings from {}", cli.config.display()))?;
    if let Some(capacity) = cli.capacity {
        settings.capacity = capacity;
    }
    settings.validate()?;

    init_logging(&settings);
    log::debug!("settings: {:?}", settings);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Import(args)) => {
            let mut client = BoundaryClient::new(&settings)?;
            handle_import_command(&mut client, &settings, &args, &mut out)?;
        }
        Some(Commands::Shell) => {
            let mut client = BoundaryClient::new(&settings)?;
            run_session(&mut client, &settings, io::stdin().lock(), &mut out)?;
        }
        Some(Commands::Config { init }) => {
            writeln!(out, "Budget Planner Configuration")?;
            writeln!(out, "============================")?;
            writeln!(out, "Config file: {}", cli.config.display())?;
            writeln!(out)?;
            writeln!(out, "Settings:")?;
            writeln!(out, "  Capacity:         {}", settings.capacity)?;
            writeln!(out, "  Max field length: {}", settings.max_field_length)?;
            writeln!(out, "  Currency symbol:  {}", settings.currency_symbol)?;
            writeln!(out, "  Log level:        {}", settings.log_level)?;

            if init {
                settings.save(&cli.config)?;
                writeln!(out)?;
                writeln!(out, "Settings written to {}", cli.config.display())?;
            }
        }
        None => {
            writeln!(out, "Budget Planner - expense ledger with per-category totals")?;
            writeln!(out)?;
            writeln!(out, "Run 'budget --help' for usage information.")?;
            writeln!(out, "Run 'budget shell' to start an interactive session.")?;
        }
    }

    Ok(())
}
