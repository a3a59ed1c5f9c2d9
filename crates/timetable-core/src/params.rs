//! Parameter structures for timetable operations
//!
//! These structures carry the inputs of each operation across interface
//! boundaries without framework-specific derives. Interface layers (the CLI
//! today) define their own argument types and convert into these:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │    Timetable    │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│     engine      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Keeping clap out of this crate lets the engine be embedded behind any
//! other front end with its own parsing and help text.

use serde::{Deserialize, Serialize};

use crate::models::{Color, CourseType, Day, LockKey, Period, TimeSlot};

/// Generic parameters for operations requiring just a draft ID.
///
/// Used for show, delete, and switch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the draft to operate on
    pub id: u64,
}

/// Parameters for creating a fresh draft seeded from locked courses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateDraft {
    /// Name of the new draft; defaults to "Draft N"
    pub name: Option<String>,
}

/// Parameters for cloning every course of an existing draft.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DuplicateDraft {
    pub source_id: u64,
    /// Name of the copy; defaults to "<source name> Copy"
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenameDraft {
    pub id: u64,
    pub name: String,
}

/// Parameters for exporting a draft's grid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportDraft {
    /// Draft to export; the active draft when omitted
    pub id: Option<u64>,
}

/// Parameters for the add-course protocol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCourse {
    /// Catalog ID of the course to schedule
    pub course_id: String,
    /// Palette color chosen for the course
    #[serde(default)]
    pub color: Color,
}

/// One occupied cell of the active draft, as exposed by the grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellRef {
    pub course_id: String,
    pub day: Day,
    pub period: Period,
}

impl CellRef {
    pub fn slot(&self) -> TimeSlot {
        TimeSlot::new(self.day, self.period)
    }

    pub fn lock_key(&self) -> LockKey {
        LockKey::new(self.course_id.clone(), self.slot())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecolorCourse {
    pub cell: CellRef,
    pub color: Color,
}

/// Parameters for browsing the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListCourses {
    pub department: Option<String>,
    pub course_type: Option<CourseType>,
    /// Free-text search over code, name, and professor
    pub search: Option<String>,
}
