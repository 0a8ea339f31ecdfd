use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct Subgroup {
    pub id: Uuid,
    pub session_id: Uuid,
    pub name: String,
    pub coach_id: Option<Uuid>,
    pub created_at: NaiveDateTime,
}
