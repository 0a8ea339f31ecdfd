use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::payment_status::PaymentStatus;

/// Who a payment record bills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "subject_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SubjectType {
    Player,
    Coach,
}

impl SubjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectType::Player => "player",
            SubjectType::Coach => "coach",
        }
    }
}

impl std::fmt::Display for SubjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SubjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "player" => Ok(SubjectType::Player),
            "coach" => Ok(SubjectType::Coach),
            _ => Err(format!("Invalid subject type: {}", s)),
        }
    }
}

/// A monthly payment record, unique per
/// (session_id, subject_type, subject_id, year, month).
#[derive(Debug, Clone, Serialize)]
pub struct Payment {
    pub id: Uuid,
    pub session_id: Uuid,
    pub subject_type: SubjectType,
    pub subject_id: Uuid,
    pub year: i32,
    pub month: i32,
    pub status: PaymentStatus,
    pub amount_cents: i32,
    pub paid_at: Option<NaiveDateTime>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
