//! Catalog course model.

use std::{collections::HashSet, str::FromStr};

use serde::{Deserialize, Serialize};

use super::TimeSlot;
use crate::error::{Result, TimetableError};

/// Type-safe enumeration of course categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CourseType {
    Core,
    Elective,
    Lab,
    Seminar,
}

impl FromStr for CourseType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "core" => Ok(CourseType::Core),
            "elective" => Ok(CourseType::Elective),
            "lab" => Ok(CourseType::Lab),
            "seminar" => Ok(CourseType::Seminar),
            _ => Err(format!("Invalid course type: {s}")),
        }
    }
}

impl CourseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseType::Core => "core",
            CourseType::Elective => "elective",
            CourseType::Lab => "lab",
            CourseType::Seminar => "seminar",
        }
    }
}

/// An offering from the course catalog.
///
/// A course meets in every one of its `time_slots` each week. The slots are
/// fixed for the lifetime of the course and never edited by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    /// Stable unique identifier
    pub id: String,

    /// Short catalog code, e.g. "CS101"
    pub code: String,

    pub name: String,

    pub professor: String,

    pub department: String,

    #[serde(rename = "type")]
    pub course_type: CourseType,

    pub credits: u32,

    /// Weekly cells occupied by this course
    pub time_slots: Vec<TimeSlot>,
}

impl Course {
    /// Whether this course meets in the given cell.
    pub fn occupies(&self, slot: &TimeSlot) -> bool {
        self.time_slots.contains(slot)
    }

    /// Check the catalog-level invariants of a single course.
    ///
    /// # Errors
    ///
    /// Returns `TimetableError::InvalidInput` when the id is blank, the
    /// course has no slots, zero credits, a slot on the lunch period, or the
    /// same slot listed twice.
    pub fn validate(&self) -> Result<()> {
        let field = |name: &str| format!("course '{}'.{name}", self.id);

        if self.id.trim().is_empty() {
            return Err(TimetableError::invalid_input("course.id").with_reason("must not be empty"));
        }
        if self.credits == 0 {
            return Err(TimetableError::invalid_input(field("credits")).with_reason("must be positive"));
        }
        if self.time_slots.is_empty() {
            return Err(
                TimetableError::invalid_input(field("time_slots")).with_reason("must not be empty")
            );
        }

        let mut seen = HashSet::new();
        for slot in &self.time_slots {
            if !slot.period.is_bookable() {
                return Err(TimetableError::invalid_input(field("time_slots"))
                    .with_reason(format!("{} cannot be booked", slot)));
            }
            if !seen.insert(*slot) {
                return Err(TimetableError::invalid_input(field("time_slots"))
                    .with_reason(format!("{} listed more than once", slot)));
            }
        }

        Ok(())
    }
}
