//! # rollcall
//!
//! Lecture attendance and evaluation simulation.
//!
//! A roster of students accumulates simulated attendance over a number of
//! lecture weeks. Each student is then judged by a randomly chosen pass/fail
//! policy, unless a risk rule flags the student for removal first.
//!
//! ## Example
//!
//! ```rust
//! use rollcall::prelude::*;
//!
//! let catalog = ContentCatalog::standard();
//! let config = CohortConfig::builder().seed(42).build();
//! let transcript = Simulation::new(config, &catalog).run();
//! assert_eq!(transcript.summary().evaluated(), 5);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_const_for_fn,  // Many functions can't be const in stable Rust
)]

pub mod cli;
pub mod cohort;
pub mod config;
pub mod engine;
pub mod error;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::cohort::{ContentCatalog, Nationality, Policy, Roster, Student, StudentId};
    pub use crate::config::{CohortConfig, CohortConfigBuilder, StudentSpec};
    pub use crate::engine::rng::SimRng;
    pub use crate::engine::{Outcome, Phase, Simulation, Transcript, TranscriptEvent};
    pub use crate::error::{CohortError, CohortResult};
}

/// Re-export for public API
pub use error::{CohortError, CohortResult};
