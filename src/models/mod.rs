//! Timetabling domain models.
//!
//! Core data types for the generation engine: the scheduling unit
//! (`Batch`), the work to place (`Subject`), the resources (`Faculty`,
//! `Classroom`), the grid cell (`TimeSlot`), and the outputs
//! (`TimetableEntry`, `Timetable`, `Conflict`).
//!
//! All entities are plain serde-serializable records; once created they
//! are never mutated by the engine.

mod batch;
mod classroom;
mod conflict;
mod constraints;
mod faculty;
mod slot;
mod subject;
mod timetable;

pub use batch::Batch;
pub use classroom::{Classroom, RoomKind};
pub use conflict::{Conflict, ConflictKind, Severity};
pub use constraints::{
    ClassroomConstraint, FacultyConstraint, TimetableConstraints, WorkingHours,
};
pub use faculty::Faculty;
pub use slot::{Day, SlotPreference, TimeSlot};
pub use subject::{Subject, SubjectKind};
pub use timetable::{EntryKind, Timetable, TimetableEntry, TimetableStatus};
