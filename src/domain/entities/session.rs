use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use uuid::Uuid;

/// Enrollment period with a date range; payment schedules span its months.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub team_id: Uuid,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: NaiveDateTime,
}
