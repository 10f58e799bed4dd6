mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod report;

use crate::cli::{Cli, Commands};
use crate::config::ConfigOverrides;
use crate::error::{CliError, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error, info};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref()) {
        eprintln!("❌ Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run_app(cli) {
        Ok(()) => {
            info!("✅ Command completed successfully.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("❌ Command failed: {}", e);
            eprintln!("❌ Command failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_app(cli: Cli) -> Result<()> {
    info!("mdpcheck v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    if let Some(num_threads) = cli.threads {
        info!(
            "Setting Rayon global thread pool to {} threads.",
            num_threads
        );
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| {
                CliError::Other(anyhow::anyhow!("Failed to build global thread pool: {}", e))
            })?;
    }

    let mut overrides = ConfigOverrides {
        catalog_path: cli.catalog.clone(),
        ..Default::default()
    };
    if let Commands::Check(args) = &cli.command {
        overrides.format = args.format;
        overrides.min_severity = args.min_severity;
        overrides.deny_warnings = args.deny_warnings;
        overrides.disabled_codes = args.disabled_codes.clone();
    }
    let app_config = config::load(cli.config.as_deref(), &overrides)?;
    let catalog = commands::load_catalog(app_config.catalog_path.as_deref())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Check(args) => {
            info!("Dispatching to 'check' command.");
            commands::check::run(&args.files, &catalog, &app_config, &mut out)
        }
        Commands::Format(args) => {
            info!("Dispatching to 'format' command.");
            commands::format::run(&args.file, args.mode, &catalog, &mut out)
        }
        Commands::Explain(args) => {
            info!("Dispatching to 'explain' command.");
            commands::explain::run(&args.parameter, &catalog, &mut out)
        }
        Commands::List(args) => {
            info!("Dispatching to 'list' command.");
            commands::list::run(args.category.as_deref(), args.categories, &catalog, &mut out)
        }
    }
}
