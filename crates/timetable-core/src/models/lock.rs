//! Lock keys identifying single occupied cells.

use serde::{Deserialize, Serialize};

use super::{Day, Period, TimeSlot};

/// Key of one locked cell: a specific course at a specific day and period.
///
/// Keys are stored per cell because that is what the grid exposes, but
/// carry-over works on whole courses; see
/// [`LockTracker::courses_locked_in`](crate::engine::LockTracker::courses_locked_in).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LockKey {
    pub course_id: String,
    pub day: Day,
    pub period: Period,
}

impl LockKey {
    pub fn new(course_id: impl Into<String>, slot: TimeSlot) -> Self {
        Self {
            course_id: course_id.into(),
            day: slot.day,
            period: slot.period,
        }
    }

    pub fn slot(&self) -> TimeSlot {
        TimeSlot::new(self.day, self.period)
    }
}
