use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub sport: Option<String>,
    pub logo_path: Option<String>,
    pub created_at: NaiveDateTime,
}
