//! Timetable and entry models.
//!
//! An entry is one committed assignment of subject + faculty + room to
//! a batch at a slot; it is the unit of conflict-freedom checking.
//! Entries hold foreign keys only — consumers resolve names against
//! their own reference data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{SubjectKind, TimeSlot, TimetableConstraints};

/// Session classification on a committed entry.
///
/// Derived from the subject: practical subjects produce practical
/// sessions, everything else a lecture. Tutorials are never
/// auto-assigned by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Lecture,
    Practical,
    Tutorial,
}

impl EntryKind {
    /// Entry kind the generator derives for a subject.
    pub fn for_subject(kind: SubjectKind) -> Self {
        match kind {
            SubjectKind::Practical => EntryKind::Practical,
            _ => EntryKind::Lecture,
        }
    }
}

/// One committed class assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableEntry {
    /// Run-local entry identifier.
    pub id: String,
    /// Batch taking the class.
    pub batch_id: String,
    /// Subject taught.
    pub subject_id: String,
    /// Assigned faculty member.
    pub faculty_id: String,
    /// Assigned room.
    pub classroom_id: String,
    /// Slot the class occupies.
    pub time_slot: TimeSlot,
    /// Session classification.
    pub kind: EntryKind,
}

/// Review-workflow status.
///
/// Transitions are driven by the external review workflow; the
/// generator always emits `Draft`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimetableStatus {
    Draft,
    UnderReview,
    Approved,
    Published,
}

/// A generated timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timetable {
    /// Timetable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Academic year label (e.g., "2025-26").
    pub academic_year: String,
    /// Semester the timetable covers.
    pub semester: u8,
    /// Review-workflow status.
    pub status: TimetableStatus,
    /// Committed entries, in scheduling order.
    pub entries: Vec<TimetableEntry>,
    /// Constraints the timetable was generated under.
    pub constraints: TimetableConstraints,
    /// Creator identifier.
    pub created_by: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-modification timestamp.
    pub updated_at: DateTime<Utc>,
}
