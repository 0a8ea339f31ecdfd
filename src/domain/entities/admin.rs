use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

/// Team administrator account.
#[derive(Debug, Clone, Serialize)]
pub struct Admin {
    pub id: Uuid,
    pub team_id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}
