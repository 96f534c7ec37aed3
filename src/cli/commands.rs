//! CLI command handlers.

use std::process::ExitCode;

use tracing::debug;

use super::args::RunOptions;
use super::output::{print_help, print_transcript, print_version};
use super::{Args, Command};
use crate::cohort::ContentCatalog;
use crate::config::CohortConfig;
use crate::engine::Simulation;
use crate::error::CohortResult;

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Run(options) => run_simulation(&options),
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
        Command::Invalid(reason) => {
            eprintln!("Error: {reason}");
            eprintln!("Run 'rollcall help' for usage.");
            ExitCode::from(1)
        }
    }
}

/// Run one simulation and print its transcript.
#[must_use]
pub fn run_simulation(options: &RunOptions) -> ExitCode {
    let config = match resolve_config(options) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(1);
        }
    };

    let catalog = ContentCatalog::standard();
    let transcript = Simulation::new(config, &catalog).run();

    if options.json {
        match transcript.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::from(1);
            }
        }
    } else {
        print_transcript(&transcript);
    }

    ExitCode::SUCCESS
}

/// Load the configuration file if given and apply command-line overrides.
///
/// # Errors
///
/// Returns error if the configuration file cannot be loaded or validated.
pub fn resolve_config(options: &RunOptions) -> CohortResult<CohortConfig> {
    let mut config = match &options.config_path {
        Some(path) => {
            debug!(path = %path.display(), "loading cohort configuration");
            CohortConfig::load(path)?
        }
        None => CohortConfig::default(),
    };

    if let Some(seed) = options.seed_override {
        config.reproducibility.seed = Some(seed);
    }

    Ok(config)
}
