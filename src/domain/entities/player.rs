use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

/// Player record. Billing state is derived from the fee fields at read time,
/// never stored.
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub id: Uuid,
    pub team_id: Uuid,
    pub name: String,
    pub email: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub photo_path: Option<String>,
    pub monthly_fee_cents: i32,
    pub inscription_fee_cents: i32,
    pub inscription_paid_at: Option<NaiveDateTime>,
    pub last_payment_date: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
