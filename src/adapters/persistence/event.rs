use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    application::use_cases::event::{CreateEventInput, EventRepo, UpdateEventInput},
    domain::entities::event::Event,
};

fn row_to_event(row: sqlx::postgres::PgRow) -> Event {
    Event {
        id: row.get("id"),
        team_id: row.get("team_id"),
        title: row.get("title"),
        description: row.get("description"),
        starts_at: row.get("starts_at"),
        location: row.get("location"),
        created_at: row.get("created_at"),
    }
}

const SELECT_COLS: &str = "id, team_id, title, description, starts_at, location, created_at";

#[async_trait]
impl EventRepo for PostgresPersistence {
    async fn create(&self, team_id: Uuid, input: &CreateEventInput) -> AppResult<Event> {
        let row = sqlx::query(&format!(
            "INSERT INTO events (id, team_id, title, description, starts_at, location)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {}",
            SELECT_COLS
        ))
        .bind(Uuid::new_v4())
        .bind(team_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.starts_at)
        .bind(&input.location)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(row_to_event(row))
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<Event>> {
        let row = sqlx::query(&format!("SELECT {} FROM events WHERE id = $1", SELECT_COLS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)?;

        Ok(row.map(row_to_event))
    }

    async fn list_by_team(&self, team_id: Uuid) -> AppResult<Vec<Event>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM events WHERE team_id = $1 ORDER BY starts_at",
            SELECT_COLS
        ))
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(rows.into_iter().map(row_to_event).collect())
    }

    async fn update(&self, id: Uuid, input: &UpdateEventInput) -> AppResult<Event> {
        let row = sqlx::query(&format!(
            "UPDATE events SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                starts_at = COALESCE($4, starts_at),
                location = COALESCE($5, location)
             WHERE id = $1
             RETURNING {}",
            SELECT_COLS
        ))
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.starts_at)
        .bind(&input.location)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(row_to_event(row))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
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
