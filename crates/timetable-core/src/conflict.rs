//! Time conflict detection between a candidate course and a draft.
//!
//! Only exact `(day, period)` matches count; there is no notion of a course
//! being partially schedulable.

use crate::models::{Course, ScheduledCourse, TimeSlot};

/// The first collision found between a candidate and an existing course.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conflict<'a> {
    pub existing: &'a ScheduledCourse,
    pub slot: TimeSlot,
}

/// Finds the first scheduled course sharing a cell with `candidate`.
///
/// Scans candidate slots in order, then existing courses in order, so the
/// reported collision is deterministic.
pub fn find_conflict<'a>(
    candidate: &Course,
    existing: &'a [ScheduledCourse],
) -> Option<Conflict<'a>> {
    candidate.time_slots.iter().find_map(|slot| {
        existing
            .iter()
            .find(|scheduled| scheduled.time_slots().contains(slot))
            .map(|scheduled| Conflict {
                existing: scheduled,
                slot: *slot,
            })
    })
}

/// Whether `candidate` overlaps any cell of `existing`.
pub fn has_conflict(candidate: &Course, existing: &[ScheduledCourse]) -> bool {
    find_conflict(candidate, existing).is_some()
}
