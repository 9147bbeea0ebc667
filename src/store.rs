//! Record store seam.
//!
//! The generator pulls its input records once, at construction time,
//! through this trait — an in-memory snapshot with no re-fetch mid-run.
//! Callers back it with whatever storage they have; tests and small
//! deployments use [`InMemoryStore`].

use crate::models::{Batch, Classroom, Faculty, Subject};

/// Source of the reference records a generation run consumes.
///
/// Implementations return owned snapshots; the engine never observes
/// concurrent mutation.
pub trait RecordStore {
    /// All batches.
    fn batches(&self) -> Vec<Batch>;
    /// All subjects.
    fn subjects(&self) -> Vec<Subject>;
    /// All faculty.
    fn faculty(&self) -> Vec<Faculty>;
    /// Classrooms with `is_available == true` only.
    fn available_classrooms(&self) -> Vec<Classroom>;
}

/// A plain in-memory record store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    batches: Vec<Batch>,
    subjects: Vec<Subject>,
    faculty: Vec<Faculty>,
    classrooms: Vec<Classroom>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a batch.
    pub fn with_batch(mut self, batch: Batch) -> Self {
        self.batches.push(batch);
        self
    }

    /// Adds a subject.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Adds a faculty member.
    pub fn with_faculty(mut self, faculty: Faculty) -> Self {
        self.faculty.push(faculty);
        self
    }

    /// Adds a classroom.
    pub fn with_classroom(mut self, classroom: Classroom) -> Self {
        self.classrooms.push(classroom);
        self
    }
}

impl RecordStore for InMemoryStore {
    fn batches(&self) -> Vec<Batch> {
        self.batches.clone()
    }

    fn subjects(&self) -> Vec<Subject> {
        self.subjects.clone()
    }

    fn faculty(&self) -> Vec<Faculty> {
        self.faculty.clone()
    }

    fn available_classrooms(&self) -> Vec<Classroom> {
        self.classrooms
            .iter()
            .filter(|c| c.is_available)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RoomKind, SubjectKind};

    #[test]
    fn test_in_memory_store() {
        let store = InMemoryStore::new()
            .with_batch(Batch::new("B1", 5, 40))
            .with_subject(Subject::new("S1", "OS", SubjectKind::Theory, "D1", 5, 3))
            .with_faculty(Faculty::new("F1", "D1"))
            .with_classroom(Classroom::new("R1", RoomKind::LectureHall, 60));

        assert_eq!(store.batches().len(), 1);
        assert_eq!(store.subjects().len(), 1);
        assert_eq!(store.faculty().len(), 1);
        assert_eq!(store.available_classrooms().len(), 1);
    }

    #[test]
    fn test_unavailable_rooms_excluded() {
        let store = InMemoryStore::new()
            .with_classroom(Classroom::new("R1", RoomKind::Lab, 30).unavailable())
            .with_classroom(Classroom::new("R2", RoomKind::Lab, 30));

        let rooms = store.available_classrooms();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].id, "R2");
    }
}
