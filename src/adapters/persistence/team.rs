use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    application::use_cases::team::{TeamRepo, UpdateTeamInput},
    domain::entities::team::Team,
};

fn row_to_team(row: sqlx::postgres::PgRow) -> Team {
    Team {
        id: row.get("id"),
        name: row.get("name"),
        sport: row.get("sport"),
        logo_path: row.get("logo_path"),
        created_at: row.get("created_at"),
    }
}

const SELECT_COLS: &str = "id, name, sport, logo_path, created_at";

#[async_trait]
impl TeamRepo for PostgresPersistence {
    async fn create(&self, name: &str, sport: Option<&str>) -> AppResult<Team> {
        let row = sqlx::query(&format!(
            "INSERT INTO teams (id, name, sport) VALUES ($1, $2, $3) RETURNING {}",
            SELECT_COLS
        ))
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(sport)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(row_to_team(row))
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<Team>> {
        let row = sqlx::query(&format!("SELECT {} FROM teams WHERE id = $1", SELECT_COLS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)?;

        Ok(row.map(row_to_team))
    }

    async fn update(&self, id: Uuid, input: &UpdateTeamInput) -> AppResult<Team> {
        let row = sqlx::query(&format!(
            "UPDATE teams SET
                name = COALESCE($2, name),
                sport = COALESCE($3, sport)
             WHERE id = $1
             RETURNING {}",
            SELECT_COLS
        ))
        .bind(id)
        .bind(&input.name)
        .bind(&input.sport)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(row_to_team(row))
    }

    async fn set_logo_path(&self, id: Uuid, path: &str) -> AppResult<()> {
        sqlx::query("UPDATE teams SET logo_path = $2 WHERE id = $1")
            .bind(id)
            .bind(path)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }
}
