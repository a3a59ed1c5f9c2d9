//! Filter types for browsing the course catalog.

use super::{Course, CourseType};

/// Filter options for listing catalog courses.
#[derive(Debug, Clone, Default)]
pub struct CourseFilter {
    /// Department name (case-insensitive exact match)
    pub department: Option<String>,

    pub course_type: Option<CourseType>,

    /// Case-insensitive substring of the code, name, or professor
    pub text: Option<String>,
}

impl CourseFilter {
    pub fn matches(&self, course: &Course) -> bool {
        if let Some(department) = &self.department {
            if !course.department.eq_ignore_ascii_case(department) {
                return false;
            }
        }

        if let Some(course_type) = self.course_type {
            if course.course_type != course_type {
                return false;
            }
        }

        if let Some(text) = &self.text {
            let needle = text.to_lowercase();
            let hit = [&course.code, &course.name, &course.professor]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        true
    }
}

impl From<&crate::params::ListCourses> for CourseFilter {
    fn from(params: &crate::params::ListCourses) -> Self {
        Self {
            department: params.department.clone(),
            course_type: params.course_type,
            text: params.search.clone(),
        }
    }
}
