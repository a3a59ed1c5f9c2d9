use tempfile::TempDir;
use timetable_core::{Session, SessionBuilder};

/// Helper function to create a session backed by a temporary database
pub async fn create_test_session() -> (TempDir, Session) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let session = SessionBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create session");
    (temp_dir, session)
}
