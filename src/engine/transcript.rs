//! Record of everything that happened during one run.

use serde::Serialize;

use crate::cohort::{Policy, StudentId};

/// Final judgment for a student that was not removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The chosen policy passed the student.
    Passed,
    /// The chosen policy failed the student.
    Failed,
}

impl From<bool> for Outcome {
    fn from(passed: bool) -> Self {
        if passed {
            Self::Passed
        } else {
            Self::Failed
        }
    }
}

/// One line of the transcript.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TranscriptEvent {
    /// A non-union member was made immune.
    Exemption {
        /// Name of the exempted student.
        student: String,
        /// Identifier of the exempted student.
        student_id: StudentId,
    },
    /// No student was eligible for exemption.
    NoExemption,
    /// A lecture week started.
    WeekStarted {
        /// Week number, starting at 1.
        week: u32,
        /// Catalog label, e.g. `"Week 1"`.
        label: String,
        /// Catalog topic, `None` when the catalog has no entry.
        topic: Option<String>,
    },
    /// A student's attendance for the current week.
    Attendance {
        /// Student name.
        student: String,
        /// Whether the student attended.
        attended: bool,
        /// Missed-lecture count after this week.
        lectures_missed: u32,
    },
    /// A student was judged by a policy.
    Verdict {
        /// Student name.
        student: String,
        /// Policy used.
        policy: Policy,
        /// Result.
        outcome: Outcome,
    },
    /// A student was flagged and removed before judgment.
    Removed {
        /// Student name.
        student: String,
        /// Flag message.
        flag: String,
        /// Follow-up removal notice.
        notice: String,
    },
}

/// Aggregate counts over a transcript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Students that passed.
    pub passed: usize,
    /// Students that failed.
    pub failed: usize,
    /// Students flagged and removed.
    pub removed: usize,
}

impl Summary {
    /// Number of students that reached the evaluation phase.
    #[must_use]
    pub const fn evaluated(&self) -> usize {
        self.passed + self.failed + self.removed
    }
}

/// Ordered events of one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Transcript {
    seed: u64,
    events: Vec<TranscriptEvent>,
}

impl Transcript {
    /// Empty transcript for a run with the given master seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            seed,
            events: Vec::new(),
        }
    }

    /// Append an event.
    pub fn push(&mut self, event: TranscriptEvent) {
        self.events.push(event);
    }

    /// Master seed of the run.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Events in the order they happened.
    #[must_use]
    pub fn events(&self) -> &[TranscriptEvent] {
        &self.events
    }

    /// Count passed, failed and removed students.
    #[must_use]
    pub fn summary(&self) -> Summary {
        self.events
            .iter()
            .fold(Summary::default(), |mut summary, event| {
                match event {
                    TranscriptEvent::Verdict {
                        outcome: Outcome::Passed,
                        ..
                    } => summary.passed += 1,
                    TranscriptEvent::Verdict {
                        outcome: Outcome::Failed,
                        ..
                    } => summary.failed += 1,
                    TranscriptEvent::Removed { .. } => summary.removed += 1,
                    _ => {}
                }
                summary
            })
    }

    /// Serialize the transcript and its summary as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if JSON encoding fails.
    pub fn to_json(&self) -> crate::error::CohortResult<String> {
        #[derive(Serialize)]
        struct Export<'a> {
            seed: u64,
            events: &'a [TranscriptEvent],
            summary: Summary,
        }

        Ok(serde_json::to_string_pretty(&Export {
            seed: self.seed,
            events: &self.events,
            summary: self.summary(),
        })?)
    }
}
