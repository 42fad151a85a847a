//! CLI entry point for themeweave.

mod cli;

use clap::Parser;
use std::process::ExitCode;
use themeweave::batch::{run_batch, BatchOptions};
use themeweave::config::{load_config, Config, DEFAULT_CONFIG_TEMPLATE};
use themeweave::store::ThemeStore;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Env var holding a `tracing` filter directive; `RUST_LOG` is the fallback.
const LOG_ENV: &str = "THEMEWEAVE_LOG";

fn main() -> ExitCode {
    let args = cli::Args::parse();

    if args.print_default_config {
        print!("{DEFAULT_CONFIG_TEMPLATE}");
        return ExitCode::SUCCESS;
    }

    init_tracing(args.default_log_level());

    let loaded = match load_config(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("config: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %loaded.source,
        "themeweave starting"
    );

    let config = apply_cli_overrides(loaded.config, &args);
    let store = match ThemeStore::open(&config.batch.theme_dir) {
        Ok(store) => store,
        Err(e) => {
            error!("theme directory: {e}");
            return ExitCode::FAILURE;
        }
    };

    let options = BatchOptions::from(&config.batch);
    match run_batch(&store, &config.target_set(), &options) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn apply_cli_overrides(mut config: Config, args: &cli::Args) -> Config {
    if let Some(dir) = &args.theme_dir {
        config.batch.theme_dir = dir.clone();
    }
    config.batch.dry_run |= args.dry_run;
    config.batch.strict |= args.strict;
    config
}

fn init_tracing(default_level: &str) {
    let filter = std::env::var(LOG_ENV)
        .ok()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
