use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

/// A scheduled practice. `subgroup_id = None` means the whole session roster
/// is expected.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingSession {
    pub id: Uuid,
    pub session_id: Uuid,
    pub subgroup_id: Option<Uuid>,
    pub starts_at: NaiveDateTime,
    pub ends_at: Option<NaiveDateTime>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}
