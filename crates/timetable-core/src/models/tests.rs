#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;

    use crate::{
        error::TimetableError,
        models::{
            Color, Course, CourseFilter, CourseType, Day, LockKey, Period, ScheduledCourse,
            TimeSlot, TimetableDraft, TimetableSnapshot,
        },
    };

    fn slot(day: Day, period: Period) -> TimeSlot {
        TimeSlot::new(day, period)
    }

    fn create_test_course(id: &str, slots: Vec<TimeSlot>) -> Course {
        Course {
            id: id.to_string(),
            code: id.to_string(),
            name: format!("{id} Title"),
            professor: "Dr. Test".to_string(),
            department: "Testing".to_string(),
            course_type: CourseType::Elective,
            credits: 3,
            time_slots: slots,
        }
    }

    #[test]
    fn test_day_parsing() {
        assert_eq!("Monday".parse::<Day>().unwrap(), Day::Monday);
        assert_eq!("thu".parse::<Day>().unwrap(), Day::Thursday);
        assert_eq!(" FRIDAY ".parse::<Day>().unwrap(), Day::Friday);
        assert!("Saturday".parse::<Day>().is_err());
        assert!("mo".parse::<Day>().is_err());
    }

    #[test]
    fn test_period_parsing() {
        assert_eq!(
            "8:30am-10:00am".parse::<Period>().unwrap(),
            Period::EarlyMorning
        );
        assert_eq!("lunch".parse::<Period>().unwrap(), Period::Lunch);
        assert_eq!("5".parse::<Period>().unwrap(), Period::EarlyAfternoon);
        assert!("0".parse::<Period>().is_err());
        assert!("7".parse::<Period>().is_err());
        assert!("9:00am-10:00am".parse::<Period>().is_err());
    }

    #[test]
    fn test_periods_are_chronological() {
        let ranges: Vec<_> = Period::ALL.iter().map(Period::clock_range).collect();
        for pair in ranges.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
        assert_eq!(Period::ALL.iter().filter(|p| !p.is_bookable()).count(), 1);
    }

    #[test]
    fn test_color_parsing_accepts_name_or_hex() {
        assert_eq!("blue".parse::<Color>().unwrap(), Color::Blue);
        assert_eq!("#ec4899".parse::<Color>().unwrap(), Color::Pink);
        assert!("#000000".parse::<Color>().is_err());
        assert_eq!(Color::default(), Color::Blue);
        assert_eq!(Color::PALETTE.len(), 8);
    }

    #[test]
    fn test_course_type_parsing() {
        assert_eq!("LAB".parse::<CourseType>().unwrap(), CourseType::Lab);
        assert!("workshop".parse::<CourseType>().is_err());
    }

    #[test]
    fn test_course_json_format() {
        let course = create_test_course("X1", vec![slot(Day::Tuesday, Period::LateAfternoon)]);
        let json = serde_json::to_value(&course).unwrap();
        assert_eq!(json["type"], "elective");
        assert_eq!(json["time_slots"][0]["day"], "Tuesday");
        assert_eq!(json["time_slots"][0]["period"], "3:30pm-5:00pm");

        let parsed: Course = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, course);
    }

    #[test]
    fn test_course_validation() {
        let valid = create_test_course("OK1", vec![slot(Day::Monday, Period::Midday)]);
        assert!(valid.validate().is_ok());

        let blank_id = create_test_course(" ", vec![slot(Day::Monday, Period::Midday)]);
        assert!(matches!(
            blank_id.validate(),
            Err(TimetableError::InvalidInput { .. })
        ));

        let repeated = create_test_course(
            "REP1",
            vec![
                slot(Day::Monday, Period::Midday),
                slot(Day::Monday, Period::Midday),
            ],
        );
        let err = repeated.validate().unwrap_err();
        assert!(err.to_string().contains("listed more than once"));
    }

    #[test]
    fn test_draft_lookups() {
        let cs101 = create_test_course(
            "CS101",
            vec![
                slot(Day::Monday, Period::EarlyMorning),
                slot(Day::Wednesday, Period::EarlyMorning),
            ],
        );
        let mut math = create_test_course("MATH201", vec![slot(Day::Tuesday, Period::EarlyMorning)]);
        math.credits = 4;

        let draft = TimetableDraft::new(
            1,
            "Draft 1",
            vec![
                ScheduledCourse::new(cs101, Color::Blue),
                ScheduledCourse::new(math, Color::Green),
            ],
        );

        assert_eq!(draft.total_credits(), 7);
        assert!(draft.contains_course("MATH201"));
        assert!(!draft.contains_course("PHYS150"));

        let wednesday = slot(Day::Wednesday, Period::EarlyMorning);
        assert_eq!(draft.occupant(&wednesday).map(|c| c.id()), Some("CS101"));
        assert!(draft.find_course("CS101", &wednesday).is_some());
        assert!(draft.find_course("MATH201", &wednesday).is_none());
        assert!(draft.occupant(&slot(Day::Friday, Period::EarlyMorning)).is_none());
    }

    #[test]
    fn test_new_draft_timestamps_match() {
        let before = Timestamp::now();
        let draft = TimetableDraft::new(9, "Fresh", vec![]);
        assert_eq!(draft.created_at, draft.updated_at);
        assert!(draft.created_at >= before);
    }

    #[test]
    fn test_lock_key_slot() {
        let cell = slot(Day::Friday, Period::LateMorning);
        let key = LockKey::new("PHYS150", cell);
        assert_eq!(key.slot(), cell);
        assert!(LockKey::new("A", cell) < LockKey::new("B", slot(Day::Monday, Period::EarlyMorning)));
    }

    #[test]
    fn test_snapshot_without_locks_field() {
        let json = r#"{
            "drafts": [{
                "id": 1,
                "name": "Draft 1",
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-01-01T00:00:00Z"
            }],
            "active_draft_id": 1
        }"#;
        let snapshot: TimetableSnapshot = serde_json::from_str(json).unwrap();
        assert!(snapshot.locked_keys.is_empty());
        assert!(snapshot.drafts[0].courses.is_empty());
    }

    #[test]
    fn test_course_filter() {
        let course = create_test_course("ENG210", vec![slot(Day::Wednesday, Period::LateAfternoon)]);

        assert!(CourseFilter::default().matches(&course));
        assert!(CourseFilter {
            department: Some("TESTING".to_string()),
            ..Default::default()
        }
        .matches(&course));
        assert!(!CourseFilter {
            course_type: Some(CourseType::Core),
            ..Default::default()
        }
        .matches(&course));
        assert!(CourseFilter {
            text: Some("dr. test".to_string()),
            ..Default::default()
        }
        .matches(&course));
    }
}
