use tempfile::NamedTempFile;
use timetable_core::{
    Catalog, Color, Database, Day, Period, TimeSlot, Timetable, TimetableDraft, TimetableError,
    TimetableSnapshot,
};

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();
    assert!(temp_file.path().exists());
    assert!(db.load_snapshot().expect("Failed to load").is_none());
}

#[test]
fn test_snapshot_survives_reopen() {
    let (temp_file, mut db) = create_test_db();
    let catalog = Catalog::builtin().unwrap();

    let mut timetable = Timetable::new();
    timetable
        .add_course(catalog.require("PHYS150").unwrap(), Color::Orange)
        .unwrap();
    timetable.duplicate_draft(1, None).unwrap();
    timetable.rename_draft(1, "Physics first").unwrap();
    db.save_snapshot(&timetable.snapshot()).unwrap();
    drop(db);

    let reopened = Database::new(temp_file.path()).unwrap();
    let snapshot = reopened.load_snapshot().unwrap().expect("Snapshot should exist");
    let restored = Timetable::from_snapshot(snapshot).unwrap();

    assert_eq!(restored.drafts().len(), 2);
    assert_eq!(restored.drafts()[0].name, "Physics first");
    assert_eq!(restored.drafts()[1].name, "Draft 1 Copy");
    assert_eq!(restored.active_draft().id, 2);
    assert_eq!(restored.active_draft().courses[0].color, Color::Orange);
}

#[test]
fn test_draft_order_is_preserved() {
    let (_temp_file, mut db) = create_test_db();

    let drafts = vec![
        TimetableDraft::new(7, "Seven", vec![]),
        TimetableDraft::new(2, "Two", vec![]),
        TimetableDraft::new(4, "Four", vec![]),
    ];
    let snapshot = TimetableSnapshot {
        drafts,
        active_draft_id: 2,
        locked_keys: vec![],
    };
    db.save_snapshot(&snapshot).unwrap();

    let loaded = db.load_snapshot().unwrap().unwrap();
    let ids: Vec<u64> = loaded.drafts.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![7, 2, 4]);

    // The next id continues after the largest one
    let mut restored = Timetable::from_snapshot(loaded).unwrap();
    assert_eq!(restored.create_draft(None).unwrap().id, 8);
}

#[test]
fn test_invalid_snapshot_is_rejected_on_restore() {
    let (_temp_file, mut db) = create_test_db();

    let snapshot = TimetableSnapshot {
        drafts: vec![TimetableDraft::new(1, "Only", vec![])],
        active_draft_id: 5,
        locked_keys: vec![],
    };
    db.save_snapshot(&snapshot).unwrap();

    let loaded = db.load_snapshot().unwrap().unwrap();
    let err = Timetable::from_snapshot(loaded).unwrap_err();
    assert!(matches!(err, TimetableError::InvalidInput { .. }));
}

#[test]
fn test_locks_round_trip_in_order() {
    let (_temp_file, mut db) = create_test_db();
    let catalog = Catalog::builtin().unwrap();

    let mut timetable = Timetable::new();
    timetable
        .add_course(catalog.require("CS101").unwrap(), Color::Blue)
        .unwrap();
    for day in [Day::Friday, Day::Monday, Day::Wednesday] {
        timetable
            .toggle_lock("CS101", &TimeSlot::new(day, Period::EarlyMorning))
            .unwrap();
    }
    let snapshot = timetable.snapshot();
    db.save_snapshot(&snapshot).unwrap();

    let loaded = db.load_snapshot().unwrap().unwrap();
    assert_eq!(loaded.locked_keys, snapshot.locked_keys);
    assert_eq!(loaded.locked_keys[0].day, Day::Monday);
}
