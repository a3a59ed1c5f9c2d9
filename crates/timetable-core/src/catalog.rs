//! Read-only course catalog.
//!
//! The catalog is supplied once per session and never mutated. It is loaded
//! from a JSON array of [`Course`] records; a small sample catalog is
//! embedded for sessions that do not provide one.

use std::{
    collections::{BTreeSet, HashMap},
    fs,
    path::Path,
};

use log::debug;

use crate::{
    error::{Result, TimetableError},
    models::{Course, CourseFilter},
};

const BUILTIN_CATALOG: &str = include_str!("../assets/catalog.json");

/// Validated, immutable list of course offerings.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog, validating every course and id uniqueness.
    ///
    /// # Errors
    ///
    /// Returns `TimetableError::InvalidInput` naming the first offending
    /// course.
    pub fn from_courses(courses: Vec<Course>) -> Result<Self> {
        let mut index = HashMap::with_capacity(courses.len());
        for (position, course) in courses.iter().enumerate() {
            course.validate()?;
            if index.insert(course.id.clone(), position).is_some() {
                return Err(TimetableError::invalid_input("catalog")
                    .with_reason(format!("duplicate course ID '{}'", course.id)));
            }
        }
        Ok(Self { courses, index })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let courses: Vec<Course> = serde_json::from_str(json)?;
        Self::from_courses(courses)
    }

    /// Loads a catalog from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| TimetableError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        let catalog = Self::from_json_str(&json)?;
        debug!("loaded {} course(s) from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// The sample catalog shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    pub fn get(&self, id: &str) -> Option<&Course> {
        self.index.get(id).map(|&position| &self.courses[position])
    }

    /// Like [`get`](Self::get), but an unknown id is an error.
    pub fn require(&self, id: &str) -> Result<&Course> {
        self.get(id).ok_or_else(|| TimetableError::UnknownCourse {
            course_id: id.to_string(),
        })
    }

    /// All courses in catalog order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn filter(&self, filter: &CourseFilter) -> Vec<&Course> {
        self.courses.iter().filter(|c| filter.matches(c)).collect()
    }

    /// Distinct department names, sorted.
    pub fn departments(&self) -> Vec<&str> {
        self.courses
            .iter()
            .map(|c| c.department.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CourseType, Day, Period, TimeSlot};

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().expect("builtin catalog should parse");
        assert_eq!(catalog.len(), 10);

        let cs101 = catalog.get("CS101").expect("CS101 should exist");
        assert_eq!(cs101.time_slots.len(), 3);
        assert!(cs101.occupies(&TimeSlot::new(Day::Monday, Period::EarlyMorning)));
    }

    #[test]
    fn test_require_unknown_course() {
        let catalog = Catalog::builtin().unwrap();
        let err = catalog.require("NOPE1").unwrap_err();
        assert!(matches!(err, TimetableError::UnknownCourse { .. }));
    }

    #[test]
    fn test_filter_by_type_and_text() {
        let catalog = Catalog::builtin().unwrap();

        let labs = catalog.filter(&CourseFilter {
            course_type: Some(CourseType::Lab),
            ..Default::default()
        });
        let ids: Vec<&str> = labs.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["CS201L", "PHYS150L"]);

        let physics = catalog.filter(&CourseFilter {
            department: Some("physics".to_string()),
            text: Some("lab".to_string()),
            ..Default::default()
        });
        assert_eq!(physics.len(), 1);
        assert_eq!(physics[0].id, "PHYS150L");
    }

    #[test]
    fn test_departments_are_sorted_and_distinct() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(
            catalog.departments(),
            vec!["Computer Science", "English", "Mathematics", "Philosophy", "Physics"]
        );
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let json = r#"[
            {"id": "A1", "code": "A1", "name": "A", "professor": "P", "department": "D",
             "type": "core", "credits": 3,
             "time_slots": [{"day": "Monday", "period": "8:30am-10:00am"}]},
            {"id": "A1", "code": "A1", "name": "A again", "professor": "P", "department": "D",
             "type": "core", "credits": 3,
             "time_slots": [{"day": "Tuesday", "period": "8:30am-10:00am"}]}
        ]"#;
        let err = Catalog::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("duplicate course ID 'A1'"));
    }

    #[test]
    fn test_rejects_lunch_slot() {
        let json = r#"[
            {"id": "L1", "code": "L1", "name": "Lunch talk", "professor": "P", "department": "D",
             "type": "seminar", "credits": 1,
             "time_slots": [{"day": "Monday", "period": "LUNCH"}]}
        ]"#;
        let err = Catalog::from_json_str(json).unwrap_err();
        assert!(matches!(err, TimetableError::InvalidInput { .. }));
        assert!(err.to_string().contains("cannot be booked"));
    }

    #[test]
    fn test_rejects_empty_slots_and_zero_credits() {
        let no_slots = r#"[{"id": "E1", "code": "E1", "name": "E", "professor": "P",
            "department": "D", "type": "core", "credits": 3, "time_slots": []}]"#;
        assert!(Catalog::from_json_str(no_slots).is_err());

        let no_credits = r#"[{"id": "Z1", "code": "Z1", "name": "Z", "professor": "P",
            "department": "D", "type": "core", "credits": 0,
            "time_slots": [{"day": "Friday", "period": "3:30pm-5:00pm"}]}]"#;
        assert!(Catalog::from_json_str(no_credits).is_err());
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let err = Catalog::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, TimetableError::Serialization { .. }));
    }
}
