//! CLI module for rollcall.
//!
//! All CLI logic lives here rather than in main.rs so it can be tested.

mod args;
mod commands;
mod output;

pub use args::{Args, Command, RunOptions};
pub use commands::{resolve_config, run_cli, run_simulation};
pub use output::{print_help, print_transcript, print_version, render_transcript, TranscriptText};
