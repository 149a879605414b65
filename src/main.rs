//! zcalc entry point: argument parsing, logging setup and dispatch.

mod convert;
mod engine;
mod error;
mod format;
mod history;
mod paths;
mod repl;
mod settings;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::history::HistoryStore;
use crate::settings::Settings;

#[derive(Parser)]
#[command(
    name = "zcalc",
    version,
    about = "Keyboard-driven calculator with unit conversion and persisted history"
)]
struct Cli {
    /// Log filter, e.g. `info` or `zcalc=debug`.
    #[arg(long, default_value = "warn")]
    log: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a value between units of the same category.
    Convert {
        value: f64,
        from: String,
        to: String,
    },
    /// Inspect or manage the calculation history.
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// Show usage statistics.
    Stats,
    /// Write the history as CSV to the current directory.
    Export,
    /// Delete the recorded history.
    Clear,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log).unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    match cli.command {
        None => {
            let history = HistoryStore::open_default().context("failed to open history store")?;
            let settings = Settings::load_default().unwrap_or_else(|err| {
                tracing::warn!("failed to load settings, using defaults: {err}");
                Settings::default()
            });
            repl::run(history, settings)
        }
        Some(Command::Convert { value, from, to }) => {
            match repl::render_conversion(value, &from, &to) {
                Some(lines) => {
                    println!("{lines}");
                    Ok(())
                }
                None => anyhow::bail!("unknown unit or mismatched categories: {from} -> {to}"),
            }
        }
        Some(Command::History { action }) => run_history(action),
    }
}

fn run_history(action: Option<HistoryAction>) -> Result<()> {
    let mut history = HistoryStore::open_default().context("failed to open history store")?;
    match action {
        None => println!("{}", repl::render_history(&history)),
        Some(HistoryAction::Stats) => println!("{}", repl::render_stats(&history)),
        Some(HistoryAction::Export) => match repl::export_history(&history)? {
            Some(file_name) => println!("Exported to {file_name}"),
            None => println!("History is empty."),
        },
        Some(HistoryAction::Clear) => match history.clear()? {
            0 => println!("History is already empty."),
            removed => println!("Removed {removed} entries."),
        },
    }
    Ok(())
}
