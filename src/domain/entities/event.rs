use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: Uuid,
    pub team_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub starts_at: NaiveDateTime,
    pub location: Option<String>,
    pub created_at: NaiveDateTime,
}
