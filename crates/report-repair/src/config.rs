//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use report_repair_core::constants::{DEFAULT_INPUT_FILE, DEFAULT_TARGET};

/// report-repair — expense report combination solver.
#[derive(Parser, Debug)]
#[command(name = "report-repair", version)]
pub struct AppConfig {
    /// Input file with one entry per line.
    #[arg(short, long, default_value = DEFAULT_INPUT_FILE, env = "REPORT_REPAIR_INPUT")]
    pub input: PathBuf,

    /// Sum a matching combination must reach.
    #[arg(short, long, default_value_t = DEFAULT_TARGET)]
    pub target: i64,

    /// Part to solve: one, two, or all.
    #[arg(long, default_value = "all")]
    pub part: String,

    /// Quiet mode (only output the product).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Write the last computed product to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
