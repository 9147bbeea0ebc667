//! Greedy randomized timetable generator.
//!
//! # Algorithm
//!
//! For each selected batch, for each subject of the batch's semester:
//! 1. Resolve faculty (first suitable candidate); none ⇒ conflict, skip.
//! 2. Until the subject's weekly sessions are met or 50 attempts are
//!    spent: shuffle the 30-slot grid, take the first slot that is
//!    inside working hours, batch-free, faculty-free, and (when the
//!    faculty has preferences) an exact preference match; then take
//!    the first compatible free classroom.
//! 3. No slot in a full scan ⇒ conflict and give up on the subject.
//!    No room ⇒ conflict, burn the attempt, try again.
//!
//! Scheduling is sequential by design: later subjects see earlier
//! subjects' committed entries as busy slots. A failure never aborts
//! the run — every impossibility degrades to a recorded [`Conflict`].
//!
//! The random source is injected so tests can fix a seed and assert
//! exact placements; production callers use [`TimetableGenerator::generate`].

use chrono::Utc;
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::models::{
    Batch, Classroom, Conflict, EntryKind, Faculty, Subject, TimeSlot, Timetable,
    TimetableConstraints, TimetableEntry, TimetableStatus,
};
use crate::store::RecordStore;

use super::{availability, candidates, OptimizationResult};

/// Per-subject retry budget. Exhausting it silently stops scheduling
/// that subject.
const MAX_ATTEMPTS: u32 = 50;

/// Weighting flags accepted with a request.
///
/// Currently accepted but not read by the algorithm; reserved for
/// future scoring weights.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GenerationPreferences {
    /// Prefer faculty preferred slots even when not mandatory.
    pub prioritize_faculty_preferences: bool,
    /// Spread load evenly across faculty.
    pub balance_workload: bool,
    /// Prefer back-to-back sessions per batch.
    pub minimize_gaps: bool,
    /// Prefer filling fewer rooms more densely.
    pub optimize_room_utilization: bool,
}

/// A timetable generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Academic year label (e.g., "2025-26").
    pub academic_year: String,
    /// Semester to schedule.
    pub semester: u8,
    /// IDs of the batches to include. Unknown IDs are ignored, not
    /// errors: they simply match no batch.
    pub batches: Vec<String>,
    /// Constraints for the run; each generation call adopts the
    /// constraints carried here.
    pub constraints: TimetableConstraints,
    /// Reserved weighting flags.
    pub preferences: GenerationPreferences,
}

/// Result of a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOutcome {
    /// The generated draft timetable.
    pub timetable: Timetable,
    /// Quality assessment and conflict list.
    pub optimization: OptimizationResult,
}

/// The timetable generation engine.
///
/// Holds an immutable snapshot of the reference records, taken once at
/// construction, plus the single run's entry and conflict lists. One
/// generator serves one run at a time; state is reset on each call and
/// each run adopts the constraints carried by its request.
#[derive(Debug, Clone)]
pub struct TimetableGenerator {
    batches: Vec<Batch>,
    subjects: Vec<Subject>,
    faculty: Vec<Faculty>,
    classrooms: Vec<Classroom>,
    constraints: TimetableConstraints,
    entries: Vec<TimetableEntry>,
    conflicts: Vec<Conflict>,
}

impl TimetableGenerator {
    /// Creates a generator with a snapshot of the store's records.
    ///
    /// Unavailable classrooms are excluded here for the whole run.
    /// Constraints travel with the request, not the generator.
    pub fn from_store(store: &dyn RecordStore) -> Self {
        Self {
            batches: store.batches(),
            subjects: store.subjects(),
            faculty: store.faculty(),
            classrooms: store.available_classrooms(),
            constraints: TimetableConstraints::default(),
            entries: Vec::new(),
            conflicts: Vec::new(),
        }
    }

    /// Generates a timetable with a production random source.
    pub fn generate(&mut self, request: &GenerationRequest) -> GenerationOutcome {
        let mut rng = rand::rng();
        self.generate_with_rng(request, &mut rng)
    }

    /// Generates a timetable with an injected random source.
    ///
    /// Deterministic for a given seed and snapshot. Never fails: every
    /// unsatisfiable requirement becomes a [`Conflict`] and the run
    /// returns whatever could be scheduled.
    pub fn generate_with_rng<R: Rng>(
        &mut self,
        request: &GenerationRequest,
        rng: &mut R,
    ) -> GenerationOutcome {
        info!(
            "starting timetable generation for {} semester {}",
            request.academic_year, request.semester
        );
        self.entries.clear();
        self.conflicts.clear();
        self.constraints = request.constraints.clone();

        let selected: Vec<Batch> = self
            .batches
            .iter()
            .filter(|b| request.batches.iter().any(|id| *id == b.id) && b.semester == request.semester)
            .cloned()
            .collect();
        debug!("selected {} of {} batches", selected.len(), self.batches.len());

        for batch in &selected {
            self.schedule_batch(batch, rng);
        }

        let optimization = OptimizationResult::evaluate(&self.entries, &self.conflicts);
        info!(
            "generated {} entries, {} conflicts, score {}",
            self.entries.len(),
            self.conflicts.len(),
            optimization.score
        );

        let now = Utc::now();
        let timetable = Timetable {
            id: format!("tt-{}-sem{}", request.academic_year, request.semester),
            name: format!(
                "Timetable {} - Semester {}",
                request.academic_year, request.semester
            ),
            academic_year: request.academic_year.clone(),
            semester: request.semester,
            status: TimetableStatus::Draft,
            entries: self.entries.clone(),
            constraints: self.constraints.clone(),
            created_by: "system".into(),
            created_at: now,
            updated_at: now,
        };

        GenerationOutcome {
            timetable,
            optimization,
        }
    }

    /// Schedules every subject of the batch's semester.
    fn schedule_batch<R: Rng>(&mut self, batch: &Batch, rng: &mut R) {
        let subjects: Vec<Subject> = self
            .subjects
            .iter()
            .filter(|s| s.semester == batch.semester)
            .cloned()
            .collect();
        debug!("batch {}: {} subjects", batch.name, subjects.len());

        for subject in &subjects {
            let Some(faculty) = candidates::suitable_faculty(&self.faculty, subject)
                .first()
                .map(|f| (*f).clone())
            else {
                self.conflicts.push(Conflict::no_faculty(subject));
                continue;
            };

            self.schedule_subject(batch, subject, &faculty, rng);
        }
    }

    /// Places up to `subject.credits` sessions within the retry budget.
    fn schedule_subject<R: Rng>(
        &mut self,
        batch: &Batch,
        subject: &Subject,
        faculty: &Faculty,
        rng: &mut R,
    ) {
        let required = subject.credits;
        let mut scheduled = 0u32;
        let mut attempts = 0u32;

        while scheduled < required && attempts < MAX_ATTEMPTS {
            attempts += 1;

            let Some(slot) = self.find_available_slot(batch, faculty, rng) else {
                // A full scan found nothing; more attempts cannot help
                // until other subjects free up, so give up on this one.
                self.conflicts.push(Conflict::no_slot(subject, batch));
                break;
            };

            let Some(classroom_id) = candidates::suitable_classroom(
                &self.classrooms,
                subject,
                batch,
                &slot,
                &self.entries,
            )
            .map(|room| room.id.clone()) else {
                // Slot abandoned, attempt spent, session not counted.
                self.conflicts
                    .push(Conflict::no_classroom(subject, &slot.start_time));
                continue;
            };

            debug!(
                "scheduled {} for {} at {} {}",
                subject.name, batch.name, slot.day, slot.start_time
            );
            self.entries.push(TimetableEntry {
                id: (self.entries.len() + 1).to_string(),
                batch_id: batch.id.clone(),
                subject_id: subject.id.clone(),
                faculty_id: faculty.id.clone(),
                classroom_id,
                time_slot: slot,
                kind: EntryKind::for_subject(subject.kind),
            });
            scheduled += 1;
        }
    }

    /// Scans a freshly shuffled copy of the weekly grid for a free slot.
    ///
    /// The shuffle is redone per attempt, so slots rejected earlier for
    /// a room clash may be retried; only currently-busy slots are
    /// excluded.
    fn find_available_slot<R: Rng>(
        &self,
        batch: &Batch,
        faculty: &Faculty,
        rng: &mut R,
    ) -> Option<TimeSlot> {
        let mut slots: Vec<&TimeSlot> = calendar::weekly_slots().iter().collect();
        slots.shuffle(rng);

        slots
            .into_iter()
            .find(|slot| {
                self.constraints.working_hours.allows(slot)
                    && !availability::batch_busy(&self.entries, &batch.id, slot)
                    && !availability::faculty_busy(&self.entries, &faculty.id, slot)
                    && (faculty.preferred_time_slots.is_empty()
                        || faculty
                            .preferred_time_slots
                            .iter()
                            .any(|pref| pref.matches(slot)))
            })
            .cloned()
    }
}

/// Generates a timetable in one call with a production random source.
pub fn generate_timetable(
    store: &dyn RecordStore,
    request: &GenerationRequest,
) -> GenerationOutcome {
    let mut generator = TimetableGenerator::from_store(store);
    generator.generate(request)
}
