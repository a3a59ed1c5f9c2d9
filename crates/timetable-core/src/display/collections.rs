//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::{Course, TimetableDraft};

/// Draft listing with the active draft marked.
///
/// # Examples
///
/// ```rust
/// use timetable_core::{Timetable, display::Drafts};
///
/// let mut timetable = Timetable::new();
/// timetable.create_draft(Some("Backup"))?;
///
/// let listing = Drafts::new(timetable.drafts(), timetable.active_draft().id);
/// let output = listing.to_string();
/// assert!(output.contains("- 1. Draft 1 (0 courses, 0 credits)"));
/// assert!(output.contains("- **2. Backup** (0 courses, 0 credits) *active*"));
/// # Ok::<(), timetable_core::TimetableError>(())
/// ```
pub struct Drafts<'a> {
    drafts: &'a [TimetableDraft],
    active_id: u64,
}

impl<'a> Drafts<'a> {
    pub fn new(drafts: &'a [TimetableDraft], active_id: u64) -> Self {
        Self { drafts, active_id }
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'a, TimetableDraft> {
        self.drafts.iter()
    }
}

impl fmt::Display for Drafts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.drafts.is_empty() {
            return writeln!(f, "No drafts found.");
        }

        for draft in self.drafts {
            let courses = draft.courses.len();
            let noun = if courses == 1 { "course" } else { "courses" };
            if draft.id == self.active_id {
                writeln!(
                    f,
                    "- **{}. {}** ({} {}, {} credits) *active*",
                    draft.id,
                    draft.name,
                    courses,
                    noun,
                    draft.total_credits()
                )?;
            } else {
                writeln!(
                    f,
                    "- {}. {} ({} {}, {} credits)",
                    draft.id,
                    draft.name,
                    courses,
                    noun,
                    draft.total_credits()
                )?;
            }
        }
        Ok(())
    }
}

/// Newtype wrapper for catalog listings.
///
/// Prints one line per course; use the [`Course`] display for full details.
pub struct Courses<'a>(pub Vec<&'a Course>);

impl<'a> Courses<'a> {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&'a Course> {
        self.0.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Course> + '_ {
        self.0.iter().copied()
    }
}

impl<'a> Index<usize> for Courses<'a> {
    type Output = Course;

    fn index(&self, index: usize) -> &Self::Output {
        self.0[index]
    }
}

impl<'a> FromIterator<&'a Course> for Courses<'a> {
    fn from_iter<I: IntoIterator<Item = &'a Course>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Courses<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No courses found.");
        }

        for course in &self.0 {
            writeln!(
                f,
                "- **{}** {} ({}, {} cr) {}, {}",
                course.code,
                course.name,
                course.course_type,
                course.credits,
                course.professor,
                course.department
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Catalog, models::CourseFilter};

    #[test]
    fn test_empty_collections() {
        assert_eq!(Drafts::new(&[], 1).to_string(), "No drafts found.\n");
        assert_eq!(Courses(vec![]).to_string(), "No courses found.\n");
    }

    #[test]
    fn test_courses_listing() {
        let catalog = Catalog::builtin().unwrap();
        let courses: Courses<'_> = catalog
            .filter(&CourseFilter {
                text: Some("CS101".to_string()),
                ..Default::default()
            })
            .into_iter()
            .collect();

        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].id, "CS101");
        let output = courses.to_string();
        assert!(output.starts_with("- **CS101** "));
        assert!(output.contains("(core, 3 cr)"));
    }

    #[test]
    fn test_single_course_draft_uses_singular() {
        let catalog = Catalog::builtin().unwrap();
        let course = catalog.get("CS101").unwrap().clone();
        let draft = TimetableDraft::new(
            1,
            "Solo",
            vec![crate::models::ScheduledCourse::new(course, crate::models::Color::Blue)],
        );
        let drafts = [draft];
        let output = Drafts::new(&drafts, 1).to_string();
        assert!(output.contains("(1 course, 3 credits) *active*"));
    }
}
