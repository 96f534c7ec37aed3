//! Simulation driver.
//!
//! A run moves through strictly sequential phases and never goes back:
//!
//! ```text
//! Setup -> ExemptionDraw -> Attendance { 1 } -> ... -> Attendance { n } -> Evaluation -> Finished
//! ```
//!
//! Each call to [`Simulation::step`] executes the current phase and records
//! what happened in the [`Transcript`].

use tracing::{debug, info};

use super::rng::SimRng;
use super::transcript::{Outcome, Transcript, TranscriptEvent};
use crate::cohort::{flagging, week_label, ContentCatalog, Policy, Roster};
use crate::config::CohortConfig;

/// Phase of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Roster not built yet.
    Setup,
    /// Roster built, exemption not drawn yet.
    ExemptionDraw,
    /// Lecture week about to be simulated (1-based).
    Attendance {
        /// Week number.
        week: u32,
    },
    /// All weeks done, students not judged yet.
    Evaluation,
    /// Nothing left to do.
    Finished,
}

/// One simulation run over a cohort.
#[derive(Debug)]
pub struct Simulation<'c> {
    config: CohortConfig,
    catalog: &'c ContentCatalog,
    rng: SimRng,
    roster: Roster,
    phase: Phase,
    transcript: Transcript,
}

impl<'c> Simulation<'c> {
    /// Create a run, seeding the RNG from the configuration or OS entropy.
    #[must_use]
    pub fn new(config: CohortConfig, catalog: &'c ContentCatalog) -> Self {
        let rng = config
            .seed()
            .map_or_else(SimRng::from_entropy, SimRng::new);
        Self::with_rng(config, catalog, rng)
    }

    /// Create a run with an explicit random source.
    #[must_use]
    pub fn with_rng(config: CohortConfig, catalog: &'c ContentCatalog, rng: SimRng) -> Self {
        let transcript = Transcript::new(rng.master_seed());
        Self {
            config,
            catalog,
            rng,
            roster: Roster::default(),
            phase: Phase::Setup,
            transcript,
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Roster as it stands in the current phase.
    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Events recorded so far.
    #[must_use]
    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Master seed of this run.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.rng.master_seed()
    }

    /// Execute the current phase and advance to the next one.
    ///
    /// Returns the phase the run is in afterwards. Stepping a finished run
    /// does nothing.
    pub fn step(&mut self) -> Phase {
        self.phase = match self.phase {
            Phase::Setup => {
                self.setup();
                Phase::ExemptionDraw
            }
            Phase::ExemptionDraw => {
                self.draw_exemption();
                self.attendance_or_evaluation(1)
            }
            Phase::Attendance { week } => {
                self.run_week(week);
                self.attendance_or_evaluation(week + 1)
            }
            Phase::Evaluation => {
                self.evaluate();
                Phase::Finished
            }
            Phase::Finished => Phase::Finished,
        };
        debug!(phase = ?self.phase, "advanced simulation phase");
        self.phase
    }

    /// Step until finished and hand back the transcript.
    #[must_use]
    pub fn run(mut self) -> Transcript {
        info!(seed = self.seed(), weeks = self.config.weeks(), "starting simulation");
        while self.step() != Phase::Finished {}
        let summary = self.transcript.summary();
        info!(
            passed = summary.passed,
            failed = summary.failed,
            removed = summary.removed,
            "simulation finished"
        );
        self.transcript
    }

    const fn attendance_or_evaluation(&self, week: u32) -> Phase {
        if week <= self.config.weeks() {
            Phase::Attendance { week }
        } else {
            Phase::Evaluation
        }
    }

    fn setup(&mut self) {
        self.roster = Roster::from_specs(&self.config.roster, &mut self.rng);
        debug!(students = self.roster.len(), "roster built");
    }

    fn draw_exemption(&mut self) {
        let event = match self.roster.grant_exemption(&mut self.rng) {
            Some(student) => {
                debug!(student = student.name(), "exemption granted");
                TranscriptEvent::Exemption {
                    student: student.name().to_string(),
                    student_id: student.id(),
                }
            }
            None => TranscriptEvent::NoExemption,
        };
        self.transcript.push(event);
    }

    fn run_week(&mut self, week: u32) {
        let label = week_label(week);
        let topic = self.catalog.topic(&label).map(str::to_string);
        if topic.is_none() {
            debug!(%label, "no catalog content for week");
        }
        self.transcript
            .push(TranscriptEvent::WeekStarted { week, label, topic });

        for student in self.roster.iter_mut() {
            let attended = self.rng.coin_flip();
            if attended {
                student.attend();
            }
            self.transcript.push(TranscriptEvent::Attendance {
                student: student.name().to_string(),
                attended,
                lectures_missed: student.lectures_missed(),
            });
        }
    }

    fn evaluate(&mut self) {
        for student in self.roster.students() {
            let policy = Policy::choose(&mut self.rng);
            let event = match flagging::check(student) {
                Err(flag) => {
                    debug!(student = student.name(), "student flagged");
                    TranscriptEvent::Removed {
                        student: flag.name.clone(),
                        notice: flag.removal_notice(),
                        flag: flag.to_string(),
                    }
                }
                Ok(()) => TranscriptEvent::Verdict {
                    student: student.name().to_string(),
                    policy,
                    outcome: Outcome::from(policy.evaluate(student)),
                },
            };
            self.transcript.push(event);
        }
    }
}
