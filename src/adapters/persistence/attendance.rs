use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::Row;
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    application::use_cases::training::AttendanceRepo,
    domain::entities::attendance::{Attendance, AttendanceStatus},
};

fn row_to_attendance(row: sqlx::postgres::PgRow) -> Attendance {
    Attendance {
        id: row.get("id"),
        training_session_id: row.get("training_session_id"),
        player_id: row.get("player_id"),
        status: row.get("status"),
        recorded_by: row.get("recorded_by"),
        recorded_at: row.get("recorded_at"),
    }
}

const SELECT_COLS: &str =
    "id, training_session_id, player_id, status, recorded_by, recorded_at";

#[async_trait]
impl AttendanceRepo for PostgresPersistence {
    async fn upsert(
        &self,
        training_session_id: Uuid,
        player_id: Uuid,
        status: AttendanceStatus,
        recorded_by: Option<Uuid>,
        recorded_at: NaiveDateTime,
    ) -> AppResult<Attendance> {
        let row = sqlx::query(&format!(
            "INSERT INTO attendance (id, training_session_id, player_id, status, recorded_by, recorded_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (training_session_id, player_id) DO UPDATE SET
                status = EXCLUDED.status,
                recorded_by = EXCLUDED.recorded_by,
                recorded_at = EXCLUDED.recorded_at
             RETURNING {}",
            SELECT_COLS
        ))
        .bind(Uuid::new_v4())
        .bind(training_session_id)
        .bind(player_id)
        .bind(status)
        .bind(recorded_by)
        .bind(recorded_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(row_to_attendance(row))
    }

    async fn list_by_training(&self, training_session_id: Uuid) -> AppResult<Vec<Attendance>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM attendance WHERE training_session_id = $1 ORDER BY recorded_at",
            SELECT_COLS
        ))
        .bind(training_session_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(rows.into_iter().map(row_to_attendance).collect())
    }
}
