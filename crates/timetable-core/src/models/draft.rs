//! Draft model definitions: scheduled courses and the drafts holding them.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Color, Course, TimeSlot};

/// A catalog course placed into a draft with its display color.
///
/// Each draft owns its own copies; recoloring one never touches another
/// draft's copy of the same course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduledCourse {
    pub course: Course,
    pub color: Color,
}

impl ScheduledCourse {
    pub fn new(course: Course, color: Color) -> Self {
        Self { course, color }
    }

    pub fn id(&self) -> &str {
        &self.course.id
    }

    pub fn time_slots(&self) -> &[TimeSlot] {
        &self.course.time_slots
    }

    /// Whether this entry is the course `course_id` and meets at `slot`.
    pub fn matches(&self, course_id: &str, slot: &TimeSlot) -> bool {
        self.course.id == course_id && self.course.occupies(slot)
    }
}

/// One candidate weekly schedule.
///
/// No two entries of `courses` share a [`TimeSlot`]; additions are checked
/// before they are committed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimetableDraft {
    /// Unique identifier for the draft
    pub id: u64,

    /// Display name, also used to name exported files
    pub name: String,

    /// Scheduled courses in insertion order
    #[serde(default)]
    pub courses: Vec<ScheduledCourse>,

    /// Timestamp when the draft was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the draft was last modified (UTC)
    pub updated_at: Timestamp,
}

impl TimetableDraft {
    /// Creates a draft stamped with the current time.
    pub fn new(id: u64, name: impl Into<String>, courses: Vec<ScheduledCourse>) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            name: name.into(),
            courses,
            created_at: now,
            updated_at: now,
        }
    }

    /// The scheduled course `course_id` if it meets at `slot`.
    pub fn find_course(&self, course_id: &str, slot: &TimeSlot) -> Option<&ScheduledCourse> {
        self.courses.iter().find(|c| c.matches(course_id, slot))
    }

    /// The scheduled course occupying `slot`, if any.
    pub fn occupant(&self, slot: &TimeSlot) -> Option<&ScheduledCourse> {
        self.courses.iter().find(|c| c.course.occupies(slot))
    }

    pub fn contains_course(&self, course_id: &str) -> bool {
        self.courses.iter().any(|c| c.id() == course_id)
    }

    pub fn total_credits(&self) -> u32 {
        self.courses.iter().map(|c| c.course.credits).sum()
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
