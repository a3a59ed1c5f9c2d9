//! Logical week grid and the export boundary.
//!
//! The engine decides what sits in each cell; turning that into pixels is
//! the job of an external renderer behind [`GridExporter`]. Exporting only
//! reads committed state, so a failed export never affects any draft.

use std::path::PathBuf;

use jiff::civil::Time;
use serde::{Deserialize, Serialize};

use crate::{
    engine::LockTracker,
    error::Result,
    models::{Color, Day, Period, TimeSlot, TimetableDraft},
};

/// Contents of one occupied cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub course_id: String,
    pub code: String,
    pub name: String,
    pub color: Color,
    /// Whether this exact cell carries a lock key
    pub locked: bool,
}

/// One period row, with a cell per weekday from Monday to Friday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridRow {
    pub period: Period,
    pub cells: [Option<GridCell>; 5],
}

/// Logical rendering of a draft: every period (lunch included) by every day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub draft_id: u64,
    pub draft_name: String,
    pub rows: Vec<GridRow>,
}

impl Grid {
    pub fn for_draft(draft: &TimetableDraft, locks: &LockTracker) -> Self {
        let rows = Period::ALL
            .into_iter()
            .map(|period| GridRow {
                period,
                cells: Day::ALL.map(|day| {
                    let slot = TimeSlot::new(day, period);
                    draft.occupant(&slot).map(|scheduled| GridCell {
                        course_id: scheduled.course.id.clone(),
                        code: scheduled.course.code.clone(),
                        name: scheduled.course.name.clone(),
                        color: scheduled.color,
                        locked: locks.is_cell_locked(scheduled.id(), &slot),
                    })
                }),
            })
            .collect();

        Self {
            draft_id: draft.id,
            draft_name: draft.name.clone(),
            rows,
        }
    }

    pub fn cell(&self, slot: &TimeSlot) -> Option<&GridCell> {
        let day_index = Day::ALL.iter().position(|d| *d == slot.day)?;
        self.rows
            .iter()
            .find(|row| row.period == slot.period)
            .and_then(|row| row.cells[day_index].as_ref())
    }

    pub fn occupied_cells(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.cells.iter().flatten().count())
            .sum()
    }
}

/// Request handed to an external renderer: which draft, and what to call
/// the downloaded file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub draft_id: u64,
    pub draft_name: String,
    /// Draft name reduced to `[A-Za-z0-9_-]`, other characters become `_`
    pub file_stem: String,
}

impl ExportRequest {
    pub fn for_draft(draft: &TimetableDraft) -> Self {
        let file_stem = draft
            .name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        Self {
            draft_id: draft.id,
            draft_name: draft.name.clone(),
            file_stem,
        }
    }

    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.file_stem, extension)
    }
}

/// External renderer that turns a draft's grid into a downloadable artifact.
pub trait GridExporter {
    /// Renders `grid` for `request` and returns where the artifact went.
    fn export(&self, request: &ExportRequest, grid: &Grid) -> Result<PathBuf>;
}

/// One weekly meeting, as consumed by external calendar sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub course_id: String,
    pub code: String,
    pub name: String,
    pub day: Day,
    pub start: Time,
    pub end: Time,
}

/// Flattens a draft into weekly meetings ordered by day, then time.
pub fn calendar_entries(draft: &TimetableDraft) -> Vec<CalendarEntry> {
    let mut entries: Vec<(TimeSlot, CalendarEntry)> = draft
        .courses
        .iter()
        .flat_map(|scheduled| {
            scheduled.time_slots().iter().map(move |slot| {
                let (start, end) = slot.period.clock_range();
                (
                    *slot,
                    CalendarEntry {
                        course_id: scheduled.course.id.clone(),
                        code: scheduled.course.code.clone(),
                        name: scheduled.course.name.clone(),
                        day: slot.day,
                        start,
                        end,
                    },
                )
            })
        })
        .collect();

    entries.sort_by_key(|(slot, _)| *slot);
    entries.into_iter().map(|(_, entry)| entry).collect()
}

#[cfg(test)]
mod tests {
    use jiff::civil::time;

    use super::*;
    use crate::models::{Course, CourseType, LockKey, ScheduledCourse};

    fn draft_with_cs101() -> TimetableDraft {
        let course = Course {
            id: "CS101".to_string(),
            code: "CS101".to_string(),
            name: "Intro to Programming".to_string(),
            professor: "Dr. Smith".to_string(),
            department: "Computer Science".to_string(),
            course_type: CourseType::Core,
            credits: 3,
            time_slots: vec![
                TimeSlot::new(Day::Wednesday, Period::EarlyMorning),
                TimeSlot::new(Day::Monday, Period::EarlyMorning),
            ],
        };
        TimetableDraft::new(
            4,
            "Fall plan / v2",
            vec![ScheduledCourse::new(course, Color::Orange)],
        )
    }

    #[test]
    fn test_grid_places_course_in_every_slot() {
        let draft = draft_with_cs101();
        let mut locks = LockTracker::new();
        locks.toggle(LockKey::new(
            "CS101",
            TimeSlot::new(Day::Monday, Period::EarlyMorning),
        ));

        let grid = Grid::for_draft(&draft, &locks);
        assert_eq!(grid.rows.len(), Period::ALL.len());
        assert_eq!(grid.occupied_cells(), 2);

        let monday = grid
            .cell(&TimeSlot::new(Day::Monday, Period::EarlyMorning))
            .expect("Monday cell should be occupied");
        assert_eq!(monday.color, Color::Orange);
        assert!(monday.locked);

        let wednesday = grid
            .cell(&TimeSlot::new(Day::Wednesday, Period::EarlyMorning))
            .expect("Wednesday cell should be occupied");
        assert!(!wednesday.locked);
    }

    #[test]
    fn test_lunch_row_is_always_empty() {
        let grid = Grid::for_draft(&draft_with_cs101(), &LockTracker::new());
        let lunch = grid
            .rows
            .iter()
            .find(|row| row.period == Period::Lunch)
            .expect("grid should include the lunch row");
        assert!(lunch.cells.iter().all(Option::is_none));
    }

    #[test]
    fn test_export_request_sanitizes_file_stem() {
        let request = ExportRequest::for_draft(&draft_with_cs101());
        assert_eq!(request.draft_id, 4);
        assert_eq!(request.draft_name, "Fall plan / v2");
        assert_eq!(request.file_stem, "Fall_plan___v2");
        assert_eq!(request.file_name("png"), "Fall_plan___v2.png");
    }

    #[test]
    fn test_calendar_entries_are_ordered() {
        let entries = calendar_entries(&draft_with_cs101());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].day, Day::Monday);
        assert_eq!(entries[1].day, Day::Wednesday);
        assert_eq!(entries[0].start, time(8, 30, 0, 0));
        assert_eq!(entries[0].end, time(10, 0, 0, 0));
    }
}
