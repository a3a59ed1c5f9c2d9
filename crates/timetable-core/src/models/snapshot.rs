//! Persisted form of a whole timetable session.

use serde::{Deserialize, Serialize};

use super::{LockKey, TimetableDraft};

/// Everything needed to restore a session: the drafts in list order, which
/// one is active, and the lock keys.
///
/// Loading a snapshot replaces the in-memory state wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimetableSnapshot {
    pub drafts: Vec<TimetableDraft>,
    pub active_draft_id: u64,
    #[serde(default)]
    pub locked_keys: Vec<LockKey>,
}
