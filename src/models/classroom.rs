//! Classroom model.

use serde::{Deserialize, Serialize};

use super::{Batch, Subject, SubjectKind};

/// Room classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomKind {
    LectureHall,
    Lab,
    TutorialRoom,
    SeminarHall,
}

/// A room that classes can be assigned to.
///
/// Rooms flagged unavailable are excluded from candidate pools for the
/// whole generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classroom {
    /// Unique classroom identifier.
    pub id: String,
    /// Human-readable name (e.g., "LH-101").
    pub name: String,
    /// Seating capacity, checked against batch strength.
    pub capacity: u32,
    /// Room classification.
    pub kind: RoomKind,
    /// Global availability flag.
    pub is_available: bool,
}

impl Classroom {
    /// Creates an available classroom.
    pub fn new(id: impl Into<String>, kind: RoomKind, capacity: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            capacity,
            kind,
            is_available: true,
        }
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Marks the room unavailable for scheduling.
    pub fn unavailable(mut self) -> Self {
        self.is_available = false;
        self
    }

    /// Whether this room can host the given subject for the given batch.
    ///
    /// Checks capacity and room-type compatibility only; slot-level
    /// availability is the candidate selector's concern.
    pub fn fits(&self, subject: &Subject, batch: &Batch) -> bool {
        if self.capacity < batch.strength {
            return false;
        }
        match subject.kind {
            SubjectKind::Practical => self.kind == RoomKind::Lab,
            SubjectKind::Theory => self.kind != RoomKind::Lab,
            SubjectKind::Tutorial => true,
        }
    }
}
