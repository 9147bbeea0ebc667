//! Timetable generation constraints.
//!
//! Only `working_hours` is enforced by the scheduling loop. The
//! remaining fields are part of the administrative contract and are
//! carried through unchanged; enforcing them would alter the observable
//! output of existing timetables, so they stay declared extension
//! points until enforcement is explicitly opted into.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::slot::parse_hour;
use super::{Day, TimeSlot};

/// Daily working window, "HH:MM" bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    /// Earliest class start.
    pub start: String,
    /// End of day. Exclusive at the boundary hour: a slot starting at
    /// the end hour itself is rejected.
    pub end: String,
}

impl WorkingHours {
    /// Creates a working window.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Whether a slot starts within the window.
    ///
    /// Compared by start hour only: `start_hour in [start, end)`.
    /// A malformed bound (or slot time) rejects every slot rather than
    /// admitting them.
    pub fn allows(&self, slot: &TimeSlot) -> bool {
        match (
            parse_hour(&slot.start_time),
            parse_hour(&self.start),
            parse_hour(&self.end),
        ) {
            (Some(hour), Some(start), Some(end)) => hour >= start && hour < end,
            _ => false,
        }
    }
}

/// Per-faculty constraint overrides (declared, not yet consulted by the
/// scheduling loop).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FacultyConstraint {
    /// Slots this faculty member cannot take.
    pub unavailable_slots: Vec<TimeSlot>,
    /// Daily teaching ceiling for this faculty member.
    pub max_hours_per_day: u32,
}

/// Per-classroom constraint overrides (declared, not yet consulted by
/// the scheduling loop).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassroomConstraint {
    /// Slots this room cannot be booked for.
    pub unavailable_slots: Vec<TimeSlot>,
}

/// Constraints supplied with a generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableConstraints {
    /// Daily class-hour ceiling per batch.
    pub max_hours_per_day: u32,
    /// Longest allowed run of back-to-back classes.
    pub max_consecutive_hours: u32,
    /// Lunch break length in minutes.
    pub lunch_break_duration: u32,
    /// Lunch break start, "HH:MM".
    pub lunch_break_start: String,
    /// Teaching days.
    pub working_days: Vec<Day>,
    /// Daily working window. The only field the scheduling loop enforces.
    pub working_hours: WorkingHours,
    /// Per-faculty overrides, keyed by faculty ID.
    pub faculty_constraints: HashMap<String, FacultyConstraint>,
    /// Per-classroom overrides, keyed by classroom ID.
    pub classroom_constraints: HashMap<String, ClassroomConstraint>,
}

impl Default for TimetableConstraints {
    /// The institution-wide defaults: 09:00-17:00, Monday through Friday,
    /// lunch at 13:15.
    fn default() -> Self {
        Self {
            max_hours_per_day: 8,
            max_consecutive_hours: 3,
            lunch_break_duration: 60,
            lunch_break_start: "13:15".into(),
            working_days: vec![
                Day::Monday,
                Day::Tuesday,
                Day::Wednesday,
                Day::Thursday,
                Day::Friday,
            ],
            working_hours: WorkingHours::new("09:00", "17:00"),
            faculty_constraints: HashMap::new(),
            classroom_constraints: HashMap::new(),
        }
    }
}
