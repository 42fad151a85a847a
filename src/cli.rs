//! CLI argument parsing via clap.

use clap::Parser;
use std::path::PathBuf;

/// Regenerate decorative CSS for the built-in theme catalog.
///
/// With no arguments, processes the configured theme directory.
#[derive(Debug, Parser)]
#[command(name = "themeweave", version)]
pub struct Args {
    /// Path to config file (default: ./themeweave.toml or ~/.config/themeweave/themeweave.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Override the theme record directory.
    #[arg(long = "theme-dir", value_name = "DIR")]
    pub theme_dir: Option<PathBuf>,

    /// Compose and report without writing any record.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Abort on the first theme that fails instead of skipping it.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Log per-theme detail.
    #[arg(short = 'v', long = "verbose", conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors.
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Print the default config file and exit.
    #[arg(long = "print-default-config")]
    pub print_default_config: bool,
}

impl Args {
    /// Default log directive when no env filter is set.
    pub fn default_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}
