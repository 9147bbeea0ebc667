//! Availability queries over a run's committed entries.
//!
//! Read-only predicates with no side effects. Busy checks compare
//! (id, day, start_time) only — end time and duration are ignored, so
//! two sessions of different length starting together still clash.
//! The model has no overlapping-but-offset sessions.
//!
//! All three are linear scans over the entries committed so far; at
//! this problem size no index is needed.

use crate::models::{TimeSlot, TimetableEntry};

/// Whether the batch already has a class at the slot.
pub fn batch_busy(entries: &[TimetableEntry], batch_id: &str, slot: &TimeSlot) -> bool {
    entries
        .iter()
        .any(|e| e.batch_id == batch_id && same_start(e, slot))
}

/// Whether the faculty member already teaches at the slot.
pub fn faculty_busy(entries: &[TimetableEntry], faculty_id: &str, slot: &TimeSlot) -> bool {
    entries
        .iter()
        .any(|e| e.faculty_id == faculty_id && same_start(e, slot))
}

/// Whether the classroom is already booked at the slot.
pub fn classroom_busy(entries: &[TimetableEntry], classroom_id: &str, slot: &TimeSlot) -> bool {
    entries
        .iter()
        .any(|e| e.classroom_id == classroom_id && same_start(e, slot))
}

fn same_start(entry: &TimetableEntry, slot: &TimeSlot) -> bool {
    entry.time_slot.day == slot.day && entry.time_slot.start_time == slot.start_time
}
