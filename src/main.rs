//! rollcall CLI - Lecture Attendance Simulation
//!
//! Runs one simulation and prints the transcript. Logs go to stderr.

use std::process::ExitCode;

use rollcall::cli::{run_cli, Args};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose());
    run_cli(args)
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    let filter =
        EnvFilter::try_from_env("ROLLCALL_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    if let Err(error) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("Warning: failed to initialize tracing subscriber: {error}");
    }
}
