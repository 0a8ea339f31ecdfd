use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    application::use_cases::training::{CreateTrainingInput, TrainingRepo, UpdateTrainingInput},
    domain::entities::training_session::TrainingSession,
};

fn row_to_training(row: sqlx::postgres::PgRow) -> TrainingSession {
    TrainingSession {
        id: row.get("id"),
        session_id: row.get("session_id"),
        subgroup_id: row.get("subgroup_id"),
        starts_at: row.get("starts_at"),
        ends_at: row.get("ends_at"),
        location: row.get("location"),
        notes: row.get("notes"),
        created_at: row.get("created_at"),
    }
}

const SELECT_COLS: &str =
    "id, session_id, subgroup_id, starts_at, ends_at, location, notes, created_at";

#[async_trait]
impl TrainingRepo for PostgresPersistence {
    async fn create(
        &self,
        session_id: Uuid,
        input: &CreateTrainingInput,
    ) -> AppResult<TrainingSession> {
        let row = sqlx::query(&format!(
            "INSERT INTO training_sessions (id, session_id, subgroup_id, starts_at, ends_at, location, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {}",
            SELECT_COLS
        ))
        .bind(Uuid::new_v4())
        .bind(session_id)
        .bind(input.subgroup_id)
        .bind(input.starts_at)
        .bind(input.ends_at)
        .bind(&input.location)
        .bind(&input.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(row_to_training(row))
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<TrainingSession>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM training_sessions WHERE id = $1",
            SELECT_COLS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(row.map(row_to_training))
    }

    async fn list_by_session(&self, session_id: Uuid) -> AppResult<Vec<TrainingSession>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM training_sessions WHERE session_id = $1 ORDER BY starts_at",
            SELECT_COLS
        ))
        .bind(session_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(rows.into_iter().map(row_to_training).collect())
    }

    async fn update(&self, id: Uuid, input: &UpdateTrainingInput) -> AppResult<TrainingSession> {
        let row = sqlx::query(&format!(
            "UPDATE training_sessions SET
                starts_at = COALESCE($2, starts_at),
                ends_at = CASE WHEN $3 THEN $4 ELSE ends_at END,
                location = COALESCE($5, location),
                notes = COALESCE($6, notes)
             WHERE id = $1
             RETURNING {}",
            SELECT_COLS
        ))
        .bind(id)
        .bind(input.starts_at)
        .bind(input.ends_at.is_some())
        .bind(input.ends_at.flatten())
        .bind(&input.location)
        .bind(&input.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(row_to_training(row))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM training_sessions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
