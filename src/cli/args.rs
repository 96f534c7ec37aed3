//! CLI argument parsing.
//!
//! Running without arguments performs one default simulation, so every
//! option is optional.

use std::path::PathBuf;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run one simulation
    Run(RunOptions),
    /// Show help
    Help,
    /// Show version
    Version,
    /// Arguments that cannot be honoured; carries the reason
    Invalid(String),
}

/// Options of the `run` command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Optional YAML cohort file.
    pub config_path: Option<PathBuf>,
    /// Optional seed override.
    pub seed_override: Option<u64>,
    /// Print the transcript as JSON instead of text.
    pub json: bool,
    /// Enable debug logging.
    pub verbose: bool,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    ///
    /// This method is testable as it accepts any iterator of strings,
    /// not just `std::env::args()`.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    /// Whether debug logging was requested.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        matches!(self.command, Command::Run(RunOptions { verbose: true, .. }))
    }

    /// Internal parsing from a vector of strings.
    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Run(RunOptions::default()),
            };
        }

        let command = match args[1].as_str() {
            "run" => Self::parse_run_options(&args[2..]),
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            flag if flag.starts_with('-') => Self::parse_run_options(&args[1..]),
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    /// Parse the options following `run` (or the program name).
    fn parse_run_options(args: &[String]) -> Command {
        let mut options = RunOptions::default();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    let Some(value) = args.get(i + 1) else {
                        return Command::Invalid("'--seed' requires a value".to_string());
                    };
                    match value.parse::<u64>() {
                        Ok(seed) => options.seed_override = Some(seed),
                        Err(e) => {
                            return Command::Invalid(format!("invalid seed '{value}': {e}"));
                        }
                    }
                    i += 2;
                }
                "-c" | "--config" => {
                    let Some(path) = args.get(i + 1) else {
                        return Command::Invalid("'--config' requires a path".to_string());
                    };
                    options.config_path = Some(PathBuf::from(path));
                    i += 2;
                }
                "--json" => {
                    options.json = true;
                    i += 1;
                }
                "-v" | "--verbose" => {
                    options.verbose = true;
                    i += 1;
                }
                "-h" | "--help" => return Command::Help,
                other => {
                    eprintln!("Warning: ignoring unknown option '{other}'");
                    i += 1;
                }
            }
        }

        Command::Run(options)
    }
}
