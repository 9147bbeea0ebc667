//! The generation engine: availability tracking, candidate selection,
//! the greedy scheduling loop, and post-hoc scoring.
//!
//! # Algorithm
//!
//! [`TimetableGenerator`] is a greedy, randomized, constructive
//! heuristic with a fixed per-subject retry budget — not an exact
//! constraint solver. It produces a draft timetable, a conflict list,
//! and a quality score; an infeasible requirement is recorded as a
//! [`crate::models::Conflict`], never an error.

pub mod availability;
pub mod candidates;
mod generator;
mod score;

pub use generator::{
    generate_timetable, GenerationOutcome, GenerationPreferences, GenerationRequest,
    TimetableGenerator,
};
pub use score::OptimizationResult;
