//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the data structures carry no
//! presentation logic. All output is markdown, rendered by the terminal
//! renderer or written as-is by exporters.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    grid::Grid,
    models::{Color, Course, CourseType, Day, Period, ScheduledCourse, TimeSlot, TimetableDraft},
};

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.period)
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compact meeting pattern, e.g. `Mon/Wed/Fri 8:30am-10:00am; Tue 2:00pm-3:30pm`.
///
/// Slots sharing a period are grouped so the common three-day pattern reads
/// as one entry.
struct Meetings<'a>(&'a [TimeSlot]);

impl fmt::Display for Meetings<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for period in Period::ALL {
            let days: Vec<&str> = Day::ALL
                .iter()
                .filter(|day| self.0.contains(&TimeSlot::new(**day, period)))
                .map(Day::short)
                .collect();
            if days.is_empty() {
                continue;
            }
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{} {}", days.join("/"), period)?;
            first = false;
        }
        Ok(())
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}: {}", self.code, self.name)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Type: {}", self.course_type)?;
        writeln!(f, "- Credits: {}", self.credits)?;
        writeln!(f, "- Professor: {}", self.professor)?;
        writeln!(f, "- Department: {}", self.department)?;
        writeln!(f, "- Meets: {}", Meetings(&self.time_slots))?;
        writeln!(f)
    }
}

impl fmt::Display for ScheduledCourse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** {} ({}, {} cr): {} [{}]",
            self.course.code,
            self.course.name,
            self.course.course_type,
            self.course.credits,
            Meetings(&self.course.time_slots),
            self.color
        )
    }
}

impl fmt::Display for TimetableDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        writeln!(f, "- Courses: {}", self.courses.len())?;
        writeln!(f, "- Credits: {}", self.total_credits())?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if self.courses.is_empty() {
            writeln!(f, "\nNo courses in this draft.")?;
        } else {
            writeln!(f, "\n## Courses")?;
            writeln!(f)?;
            for scheduled in &self.courses {
                write!(f, "{}", scheduled)?;
            }
        }

        Ok(())
    }
}

/// Markdown table: one row per period, one column per weekday. Locked cells
/// are marked with a padlock.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.draft_id, self.draft_name)?;
        writeln!(f)?;

        write!(f, "| Period |")?;
        for day in Day::ALL {
            write!(f, " {} |", day)?;
        }
        writeln!(f)?;
        writeln!(f, "|---|---|---|---|---|---|")?;

        for row in &self.rows {
            write!(f, "| {} |", row.period)?;
            for cell in &row.cells {
                match cell {
                    Some(cell) if cell.locked => write!(f, " {} ({}) 🔒 |", cell.code, cell.color)?,
                    Some(cell) => write!(f, " {} ({}) |", cell.code, cell.color)?,
                    None if !row.period.is_bookable() => write!(f, " - |")?,
                    None => write!(f, "  |")?,
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
