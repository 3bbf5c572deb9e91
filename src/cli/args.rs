//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// tallydb - interactive purchase-frequency analyzer
#[derive(Parser, Debug, Clone)]
#[command(name = "tallydb")]
#[command(version)]
#[command(about = "Analyze per-item purchase counts from a plain-text list", long_about = None)]
pub struct CliArgs {
    /// Input file of purchased item names (whitespace-delimited)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Backup file destination
    #[arg(short, long)]
    pub backup: Option<PathBuf>,

    /// Skip writing the backup file
    #[arg(long)]
    pub no_backup: bool,

    /// Configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Display width in characters
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Disable pacing delays and interactive pauses
    #[arg(long)]
    pub no_pause: bool,
}
