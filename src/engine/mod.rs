//! Core simulation engine.
//!
//! Implements the run loop with:
//! - Seeded RNG (PCG) behind every random draw
//! - A phase state machine that only moves forward
//! - A transcript recording every observable event

pub mod rng;
pub mod simulation;
pub mod transcript;

pub use rng::SimRng;
pub use simulation::{Phase, Simulation};
pub use transcript::{Outcome, Summary, Transcript, TranscriptEvent};
