//! CLI for the bookgrab catalog downloader.

mod commands;

use anyhow::Result;
use bookgrab_core::catalog::Catalog;
use bookgrab_core::config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_download, run_inspect, run_list_catalog, RunOverrides};

/// Top-level CLI for bookgrab.
#[derive(Debug, Parser)]
#[command(name = "bookgrab")]
#[command(about = "bookgrab: download every book linked from a list of catalog pages", long_about = None)]
pub struct Cli {
    /// Use this config file instead of ~/.config/bookgrab/config.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download the files of every book in the catalog, window by window.
    Run {
        /// Catalog file (one page URL per line) instead of the built-in list.
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
        /// Output directory (default from config: "dist").
        #[arg(long, value_name = "DIR")]
        output: Option<PathBuf>,
        /// Catalog entries processed concurrently per window.
        #[arg(long, value_name = "N")]
        window: Option<usize>,
        /// Pause after each window, in milliseconds.
        #[arg(long, value_name = "MS")]
        pause_ms: Option<u64>,
        /// Advance progress by the full window size even on a short last window.
        #[arg(long)]
        legacy_progress: bool,
    },

    /// Fetch one catalog page and print its title and file links without downloading.
    Inspect {
        /// Catalog page URL.
        url: String,
    },

    /// Print the catalog entries a run would process.
    Catalog {
        /// Catalog file instead of the built-in list.
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = match &cli.config {
            Some(path) => config::load_or_init_at(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Run {
                catalog,
                output,
                window,
                pause_ms,
                legacy_progress,
            } => {
                RunOverrides {
                    output,
                    window,
                    pause_ms,
                    legacy_progress,
                }
                .apply(&mut cfg);
                let catalog = Catalog::load(catalog.as_deref())?;
                run_download(&cfg, &catalog).await?;
            }
            CliCommand::Inspect { url } => run_inspect(&cfg, &url).await?,
            CliCommand::Catalog { catalog } => {
                run_list_catalog(&Catalog::load(catalog.as_deref())?);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
