//! CLI output formatting.
//!
//! Rendering is split from printing so the transcript text can be tested.

use std::fmt::{self, Write};

use crate::engine::{Outcome, Transcript, TranscriptEvent};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Print version information.
pub fn print_version() {
    println!("rollcall {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message.
pub fn print_help() {
    println!(
        r"rollcall - Lecture Attendance Simulation

USAGE:
    rollcall [run] [OPTIONS]

COMMANDS:
    run                         Run one simulation (default)
        --seed <N>              Use a fixed seed instead of OS entropy
        -c, --config <FILE>     Load the cohort from a YAML file
        --json                  Print the transcript as JSON
        -v, --verbose           Enable debug logging on stderr

    help                        Show this help message
    version                     Show version information

ENVIRONMENT:
    ROLLCALL_LOG                Log filter (e.g. 'debug', 'rollcall=info')

EXAMPLES:
    rollcall
    rollcall run --seed 12345
    rollcall run --config cohort.yaml --json
"
    );
}

/// Human-readable view of a transcript.
pub struct TranscriptText<'a>(pub &'a Transcript);

impl fmt::Display for TranscriptText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_transcript(f, self.0)
    }
}

/// Print a transcript as text.
pub fn print_transcript(transcript: &Transcript) {
    print!("{}", TranscriptText(transcript));
}

/// Render a transcript as human-readable text.
#[must_use]
pub fn render_transcript(transcript: &Transcript) -> String {
    TranscriptText(transcript).to_string()
}

fn write_transcript<W: Write>(out: &mut W, transcript: &Transcript) -> fmt::Result {
    writeln!(out, "╔═══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║           rollcall - Lecture Attendance Simulation            ║")?;
    writeln!(out, "╚═══════════════════════════════════════════════════════════════╝")?;
    writeln!(out, "Seed: {}\n", transcript.seed())?;

    let mut evaluating = false;
    for event in transcript.events() {
        match event {
            TranscriptEvent::Exemption { student, .. } => {
                writeln!(out, "🛡  {student} has been granted immunity")?;
            }
            TranscriptEvent::NoExemption => {
                writeln!(out, "🛡  Nobody is eligible for immunity")?;
            }
            TranscriptEvent::WeekStarted { label, topic, .. } => {
                writeln!(out, "\n{RULE}")?;
                match topic {
                    Some(topic) => writeln!(out, "📚 {label}: {topic}")?,
                    None => writeln!(out, "📚 {label}: ⚠ no content found")?,
                }
                writeln!(out, "{RULE}")?;
            }
            TranscriptEvent::Attendance {
                student,
                attended,
                lectures_missed,
            } => {
                let (sym, verb) = if *attended {
                    ("✓", "attended")
                } else {
                    ("✗", "skipped")
                };
                writeln!(out, "  {sym} {student} {verb} (missed: {lectures_missed})")?;
            }
            TranscriptEvent::Verdict {
                student,
                policy,
                outcome,
            } => {
                write_evaluation_heading(out, &mut evaluating)?;
                let (sym, status) = match outcome {
                    Outcome::Passed => ("✓", "PASSED"),
                    Outcome::Failed => ("✗", "FAILED"),
                };
                writeln!(out, "  {sym} {student} {status} ({policy} policy)")?;
            }
            TranscriptEvent::Removed { flag, notice, .. } => {
                write_evaluation_heading(out, &mut evaluating)?;
                writeln!(out, "  ⚠ {flag}")?;
                writeln!(out, "    → {notice}")?;
            }
        }
    }

    let summary = transcript.summary();
    writeln!(out, "\n{RULE}")?;
    writeln!(
        out,
        "Passed: {}  Failed: {}  Removed: {}",
        summary.passed, summary.failed, summary.removed
    )?;
    Ok(())
}

fn write_evaluation_heading<W: Write>(out: &mut W, evaluating: &mut bool) -> fmt::Result {
    if !*evaluating {
        *evaluating = true;
        writeln!(out, "\n{RULE}")?;
        writeln!(out, "🎓 Final evaluation")?;
        writeln!(out, "{RULE}")?;
    }
    Ok(())
}
