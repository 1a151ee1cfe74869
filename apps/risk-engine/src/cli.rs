//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::inventory::{CiaLevel, Criticality};

/// GRC risk engine command line.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "grc-risk-engine",
    about = "Risk aggregation for GRC asset and service inventories",
    version
)]
pub struct Cli {
    /// Configuration file (defaults to ./config.yaml when present)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Engine commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rescore a snapshot (assets, then services, then risks) and save it
    Recalculate {
        /// Snapshot to read (overrides persistence.snapshot_path)
        #[arg(short, long)]
        snapshot: Option<PathBuf>,

        /// Where to write the rescored snapshot
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report without saving
        #[arg(long)]
        dry_run: bool,
    },

    /// Report stored scores that no longer match their inputs
    Check {
        /// Snapshot to read (overrides persistence.snapshot_path)
        #[arg(short, long)]
        snapshot: Option<PathBuf>,
    },

    /// Score one asset from its ratings
    ScoreAsset {
        /// Confidentiality impact (low, moderate, high)
        #[arg(long)]
        confidentiality: Option<CiaLevel>,

        /// Integrity impact (low, moderate, high)
        #[arg(long)]
        integrity: Option<CiaLevel>,

        /// Availability impact (low, moderate, high)
        #[arg(long)]
        availability: Option<CiaLevel>,

        /// Criticality (low, medium, high, critical)
        #[arg(long)]
        criticality: Option<Criticality>,
    },
}
