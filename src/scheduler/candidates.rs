//! Candidate faculty and classroom selection.
//!
//! Both selectors preserve storage order and the scheduler always
//! takes the first match — there is no load balancing or round-robin
//! across candidates.

use crate::models::{Batch, Classroom, Faculty, Subject, TimeSlot, TimetableEntry};

use super::availability;

/// Faculty able to teach the subject, in storage order.
///
/// Same department, plus either no declared specializations or a
/// case-insensitive substring match (either direction) between a
/// specialization and the subject name. An empty result means the
/// subject cannot be scheduled at all.
pub fn suitable_faculty<'a>(faculty: &'a [Faculty], subject: &Subject) -> Vec<&'a Faculty> {
    faculty.iter().filter(|f| f.can_teach(subject)).collect()
}

/// First classroom that can host the subject for the batch at the slot.
///
/// Filters by capacity, room-type compatibility, and slot availability.
/// No distance or facility matching beyond the lab/non-lab rule.
pub fn suitable_classroom<'a>(
    classrooms: &'a [Classroom],
    subject: &Subject,
    batch: &Batch,
    slot: &TimeSlot,
    entries: &[TimetableEntry],
) -> Option<&'a Classroom> {
    classrooms
        .iter()
        .find(|room| room.fits(subject, batch) && !availability::classroom_busy(entries, &room.id, slot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, EntryKind, RoomKind, SubjectKind};

    fn subject(kind: SubjectKind) -> Subject {
        Subject::new("S1", "Operating Systems", kind, "D1", 5, 3)
    }

    fn slot() -> TimeSlot {
        TimeSlot::new("1", Day::Monday, "09:00", "10:00", 1)
    }

    #[test]
    fn test_suitable_faculty_department_filter() {
        let faculty = vec![
            Faculty::new("F1", "D2"),
            Faculty::new("F2", "D1"),
            Faculty::new("F3", "D1").with_specialization("Operating"),
        ];

        let found = suitable_faculty(&faculty, &subject(SubjectKind::Theory));
        let ids: Vec<&str> = found.iter().map(|f| f.id.as_str()).collect();
        // Storage order preserved; wrong department excluded
        assert_eq!(ids, vec!["F2", "F3"]);
    }

    #[test]
    fn test_suitable_faculty_specialization_mismatch() {
        let faculty = vec![Faculty::new("F1", "D1").with_specialization("Compilers")];
        assert!(suitable_faculty(&faculty, &subject(SubjectKind::Theory)).is_empty());
    }

    #[test]
    fn test_suitable_classroom_first_match_in_storage_order() {
        let rooms = vec![
            Classroom::new("R1", RoomKind::LectureHall, 10), // too small
            Classroom::new("R2", RoomKind::LectureHall, 60),
            Classroom::new("R3", RoomKind::LectureHall, 60),
        ];
        let batch = Batch::new("B1", 5, 45);

        let room = suitable_classroom(&rooms, &subject(SubjectKind::Theory), &batch, &slot(), &[]);
        assert_eq!(room.unwrap().id, "R2");
    }

    #[test]
    fn test_suitable_classroom_practical_needs_lab() {
        let rooms = vec![
            Classroom::new("R1", RoomKind::LectureHall, 60),
            Classroom::new("R2", RoomKind::Lab, 60),
        ];
        let batch = Batch::new("B1", 5, 45);

        let room =
            suitable_classroom(&rooms, &subject(SubjectKind::Practical), &batch, &slot(), &[]);
        assert_eq!(room.unwrap().id, "R2");

        let none = suitable_classroom(
            &rooms[..1],
            &subject(SubjectKind::Practical),
            &batch,
            &slot(),
            &[],
        );
        assert!(none.is_none());
    }

    #[test]
    fn test_suitable_classroom_skips_busy_room() {
        let rooms = vec![
            Classroom::new("R1", RoomKind::LectureHall, 60),
            Classroom::new("R2", RoomKind::LectureHall, 60),
        ];
        let batch = Batch::new("B1", 5, 45);
        let entries = vec![TimetableEntry {
            id: "1".into(),
            batch_id: "B9".into(),
            subject_id: "S9".into(),
            faculty_id: "F9".into(),
            classroom_id: "R1".into(),
            time_slot: slot(),
            kind: EntryKind::Lecture,
        }];

        let room = suitable_classroom(&rooms, &subject(SubjectKind::Theory), &batch, &slot(), &entries);
        assert_eq!(room.unwrap().id, "R2");
    }
}
