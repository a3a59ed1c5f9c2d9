mod common;

use common::create_test_session;
use timetable_core::{Color, Day, Period, TimeSlot, TimetableError};

fn monday_morning() -> TimeSlot {
    TimeSlot::new(Day::Monday, Period::EarlyMorning)
}

#[tokio::test]
async fn test_conflicting_add_is_not_persisted() {
    let (_temp_dir, session) = create_test_session().await;

    session
        .apply(|timetable, catalog| timetable.add_course(catalog.require("CS101")?, Color::Blue))
        .await
        .expect("CS101 should be added");

    let err = session
        .apply(|timetable, catalog| timetable.add_course(catalog.require("CS102")?, Color::Red))
        .await
        .unwrap_err();
    match err {
        TimetableError::Conflict {
            course_id,
            blocking_course_id,
            slot,
        } => {
            assert_eq!(course_id, "CS102");
            assert_eq!(blocking_course_id, "CS101");
            assert_eq!(slot, monday_morning());
        }
        other => panic!("expected conflict, got {other:?}"),
    }

    let timetable = session.load().await.unwrap();
    let ids: Vec<&str> = timetable
        .active_draft()
        .courses
        .iter()
        .map(|c| c.id())
        .collect();
    assert_eq!(ids, vec!["CS101"]);
}

#[tokio::test]
async fn test_locked_course_carries_over_across_invocations() {
    let (_temp_dir, session) = create_test_session().await;

    session
        .apply(|timetable, catalog| {
            timetable.add_course(catalog.require("CS101")?, Color::Blue)?;
            timetable.add_course(catalog.require("ENG210")?, Color::Green)
        })
        .await
        .unwrap();
    session
        .apply(|timetable, _| timetable.toggle_lock("CS101", &monday_morning()))
        .await
        .unwrap();

    let new_id = session
        .apply(|timetable, _| timetable.create_draft(Some("Draft 2")).map(|d| d.id))
        .await
        .unwrap();

    let timetable = session.load().await.unwrap();
    assert_eq!(timetable.active_draft().id, new_id);
    let carried: Vec<&str> = timetable
        .active_draft()
        .courses
        .iter()
        .map(|c| c.id())
        .collect();
    assert_eq!(carried, vec!["CS101"]);
    assert_eq!(timetable.draft(Some(1)).unwrap().courses.len(), 2);
}

#[tokio::test]
async fn test_duplicate_then_remove_keeps_original() {
    let (_temp_dir, session) = create_test_session().await;

    session
        .apply(|timetable, catalog| timetable.add_course(catalog.require("CS101")?, Color::Blue))
        .await
        .unwrap();
    session
        .apply(|timetable, _| {
            let copy = timetable.duplicate_draft(1, None)?.id;
            timetable.switch_draft(copy)?;
            timetable.remove_course("CS101", &monday_morning())
        })
        .await
        .unwrap();

    let timetable = session.load().await.unwrap();
    assert_eq!(timetable.active_draft().name, "Draft 1 Copy");
    assert!(timetable.active_draft().courses.is_empty());
    assert!(timetable.draft(Some(1)).unwrap().contains_course("CS101"));
}

#[tokio::test]
async fn test_last_draft_protection_persists_nothing() {
    let (_temp_dir, session) = create_test_session().await;

    let err = session
        .apply(|timetable, _| timetable.delete_draft(1))
        .await
        .unwrap_err();
    assert!(matches!(err, TimetableError::LastDraft { id: 1 }));

    let timetable = session.load().await.unwrap();
    assert_eq!(timetable.drafts().len(), 1);
}
