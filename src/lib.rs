//! Academic timetable generation engine.
//!
//! Assigns classes (subject x batch x faculty x classroom) to a fixed
//! weekly grid of time slots, subject to hard constraints (no
//! double-booking, capacity, room-type compatibility) and faculty slot
//! preferences, then scores the result. The generator is a greedy,
//! randomized, constructive heuristic with a bounded retry budget; it
//! does not guarantee a feasible or optimal schedule, and an
//! unsatisfiable requirement is reported as a conflict rather than an
//! error.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Batch`, `Subject`, `Faculty`,
//!   `Classroom`, `TimeSlot`, `TimetableEntry`, `Conflict`,
//!   `TimetableConstraints`, `Timetable`
//! - **`calendar`**: The static 5-day x 6-period weekly slot grid
//! - **`store`**: The record-store seam the generator is constructed with
//! - **`scheduler`**: The generation loop, availability and candidate
//!   queries, and the quality scorer
//! - **`validation`**: Advisory input integrity checks (duplicate IDs,
//!   zero credits/strength/capacity)
//!
//! # Example
//!
//! ```
//! use timetable_engine::models::{
//!     Batch, Classroom, Faculty, RoomKind, Subject, SubjectKind, TimetableConstraints,
//! };
//! use timetable_engine::scheduler::{
//!     GenerationPreferences, GenerationRequest, TimetableGenerator,
//! };
//! use timetable_engine::store::InMemoryStore;
//!
//! let store = InMemoryStore::new()
//!     .with_batch(Batch::new("B1", 5, 45).with_name("CSE-A"))
//!     .with_subject(Subject::new("S1", "Operating Systems", SubjectKind::Theory, "D1", 5, 2))
//!     .with_faculty(Faculty::new("F1", "D1").with_name("Dr. Rao"))
//!     .with_classroom(Classroom::new("R1", RoomKind::LectureHall, 60));
//!
//! let request = GenerationRequest {
//!     academic_year: "2025-26".into(),
//!     semester: 5,
//!     batches: vec!["B1".into()],
//!     constraints: TimetableConstraints::default(),
//!     preferences: GenerationPreferences::default(),
//! };
//!
//! let mut generator = TimetableGenerator::from_store(&store);
//! let outcome = generator.generate(&request);
//! assert_eq!(outcome.timetable.entries.len(), 2);
//! ```

pub mod calendar;
pub mod models;
pub mod scheduler;
pub mod store;
pub mod validation;
