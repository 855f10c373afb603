//! Command line definition

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use driftguard_core::{AuditConfig, DEFAULT_BASELINE_FILE, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "driftguard")]
#[command(author, version, about = "File integrity checker", long_about = None)]
pub struct Cli {
    /// The directory to monitor
    pub directory: PathBuf,

    /// Create a new baseline for the directory instead of verifying it
    #[arg(long)]
    pub create: bool,

    /// The file to store/read the baseline hashes from
    #[arg(
        long = "baseline_file",
        visible_alias = "baseline-file",
        value_name = "PATH",
        default_value = DEFAULT_BASELINE_FILE
    )]
    pub baseline_file: PathBuf,

    /// Report format for verify mode
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the core audit configuration from the parsed arguments
    #[must_use]
    pub fn audit_config(&self) -> AuditConfig {
        AuditConfig::new(&self.directory).with_baseline_file(&self.baseline_file)
    }
}

/// Report format selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => Self::Text,
            Format::Json => Self::Json,
        }
    }
}
