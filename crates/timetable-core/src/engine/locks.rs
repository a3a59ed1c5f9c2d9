//! Lock tracking across drafts.
//!
//! Storage is per cell: a [`LockKey`] names one course at one day and
//! period, matching the toggle the grid shows on every occupied cell. The
//! semantic unit is the whole course: a course counts as locked when any of
//! its own cells carries a key. Keep the two apart; carry-over must never
//! copy only the locked cells of a course.

use std::collections::BTreeSet;

use log::debug;

use crate::models::{LockKey, ScheduledCourse, TimeSlot, TimetableDraft};

/// Set of locked cells shared by every draft.
///
/// Locks do not protect a course from removal or recoloring in its current
/// draft. They only matter when a fresh draft is created, which copies every
/// locked course of the active draft.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LockTracker {
    keys: BTreeSet<LockKey>,
}

impl LockTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_keys(keys: impl IntoIterator<Item = LockKey>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Flips membership of `key`; returns whether the cell is now locked.
    pub fn toggle(&mut self, key: LockKey) -> bool {
        if self.keys.remove(&key) {
            debug!("unlocked '{}' at {}", key.course_id, key.slot());
            false
        } else {
            debug!("locked '{}' at {}", key.course_id, key.slot());
            self.keys.insert(key);
            true
        }
    }

    // -- cell granularity --

    pub fn is_cell_locked(&self, course_id: &str, slot: &TimeSlot) -> bool {
        self.keys.contains(&LockKey::new(course_id, *slot))
    }

    /// Drops every key belonging to `course_id`; returns how many went.
    pub fn release_course(&mut self, course_id: &str) -> usize {
        let before = self.keys.len();
        self.keys.retain(|key| key.course_id != course_id);
        let released = before - self.keys.len();
        if released > 0 {
            debug!("released {released} lock(s) of '{course_id}'");
        }
        released
    }

    // -- course granularity --

    /// Whether any of the course's own cells is locked.
    pub fn is_course_locked(&self, scheduled: &ScheduledCourse) -> bool {
        scheduled
            .time_slots()
            .iter()
            .any(|slot| self.is_cell_locked(scheduled.id(), slot))
    }

    /// The courses of `draft` that carry at least one locked cell, in the
    /// draft's order.
    pub fn courses_locked_in<'d>(&self, draft: &'d TimetableDraft) -> Vec<&'d ScheduledCourse> {
        draft
            .courses
            .iter()
            .filter(|scheduled| self.is_course_locked(scheduled))
            .collect()
    }

    pub fn keys(&self) -> impl Iterator<Item = &LockKey> {
        self.keys.iter()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
