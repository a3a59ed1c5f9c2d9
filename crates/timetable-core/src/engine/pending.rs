//! Two-phase course addition: check, choose a color, commit.

use log::debug;

use super::Timetable;
use crate::{
    error::{Result, TimetableError},
    models::{Color, Course, ScheduledCourse},
};

/// A conflict-checked candidate waiting for its color.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAddition {
    /// Draft the candidate was checked against
    pub draft_id: u64,
    pub course: Course,
}

impl Timetable {
    /// Checks `course` against the active draft and, if it fits, holds it
    /// as the pending addition. Replaces any earlier pending addition.
    ///
    /// # Errors
    ///
    /// Returns `TimetableError::Conflict` if any slot is taken; nothing is
    /// recorded in that case.
    pub fn begin_add(&mut self, course: &Course) -> Result<&PendingAddition> {
        let draft_id = self.store.active_draft_id();
        self.store.check_addition(draft_id, course)?;

        debug!("'{}' fits draft {}; awaiting color", course.id, draft_id);
        Ok(&*self.pending.insert(PendingAddition {
            draft_id,
            course: course.clone(),
        }))
    }

    pub fn pending_addition(&self) -> Option<&PendingAddition> {
        self.pending.as_ref()
    }

    /// Commits the pending addition with `color`.
    ///
    /// The candidate is checked again against its draft because other
    /// operations may have run since [`begin_add`](Self::begin_add). The
    /// pending state is cleared whether or not the commit succeeds.
    ///
    /// # Errors
    ///
    /// Returns `TimetableError::NoPendingAddition` if nothing was begun,
    /// `TimetableError::Conflict` if the draft changed underneath, and
    /// `TimetableError::DraftNotFound` if the draft was deleted meanwhile.
    pub fn commit_add(&mut self, color: Color) -> Result<ScheduledCourse> {
        let pending = self.pending.take().ok_or(TimetableError::NoPendingAddition)?;
        self.store
            .commit_addition(pending.draft_id, pending.course, color)
            .cloned()
    }

    /// Discards the pending addition, returning it if there was one.
    pub fn cancel_add(&mut self) -> Option<PendingAddition> {
        let cancelled = self.pending.take();
        if let Some(pending) = &cancelled {
            debug!("cancelled pending addition of '{}'", pending.course.id);
        }
        cancelled
    }

    /// Runs the full protocol in one call for callers that already know the
    /// color.
    pub fn add_course(&mut self, course: &Course, color: Color) -> Result<ScheduledCourse> {
        self.begin_add(course)?;
        self.commit_add(color)
    }
}
