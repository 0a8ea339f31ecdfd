use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct Coach {
    pub id: Uuid,
    pub team_id: Uuid,
    pub name: String,
    pub email: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub photo_path: Option<String>,
    pub agreed_salary_cents: i32,
    pub created_at: NaiveDateTime,
}
