use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    application::use_cases::coach::{CoachRepo, CreateCoachRecord, UpdateCoachInput},
    domain::entities::coach::Coach,
};

pub(crate) fn row_to_coach(row: sqlx::postgres::PgRow) -> Coach {
    Coach {
        id: row.get("id"),
        team_id: row.get("team_id"),
        name: row.get("name"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        photo_path: row.get("photo_path"),
        agreed_salary_cents: row.get("agreed_salary_cents"),
        created_at: row.get("created_at"),
    }
}

pub(crate) const SELECT_COLS: &str =
    "id, team_id, name, email, password_hash, photo_path, agreed_salary_cents, created_at";

#[async_trait]
impl CoachRepo for PostgresPersistence {
    async fn create(&self, team_id: Uuid, record: &CreateCoachRecord) -> AppResult<Coach> {
        let row = sqlx::query(&format!(
            "INSERT INTO coaches (id, team_id, name, email, password_hash, agreed_salary_cents)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {}",
            SELECT_COLS
        ))
        .bind(Uuid::new_v4())
        .bind(team_id)
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.password_hash)
        .bind(record.agreed_salary_cents)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(row_to_coach(row))
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<Coach>> {
        let row = sqlx::query(&format!("SELECT {} FROM coaches WHERE id = $1", SELECT_COLS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)?;

        Ok(row.map(row_to_coach))
    }

    async fn list_by_team(&self, team_id: Uuid) -> AppResult<Vec<Coach>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM coaches WHERE team_id = $1 ORDER BY name",
            SELECT_COLS
        ))
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(rows.into_iter().map(row_to_coach).collect())
    }

    async fn update(&self, id: Uuid, input: &UpdateCoachInput) -> AppResult<Coach> {
        let row = sqlx::query(&format!(
            "UPDATE coaches SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                agreed_salary_cents = COALESCE($4, agreed_salary_cents)
             WHERE id = $1
             RETURNING {}",
            SELECT_COLS
        ))
        .bind(id)
        .bind(&input.name)
        .bind(&input.email)
        .bind(input.agreed_salary_cents)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(row_to_coach(row))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM coaches WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn set_photo_path(&self, id: Uuid, path: &str) -> AppResult<()> {
        sqlx::query("UPDATE coaches SET photo_path = $2 WHERE id = $1")
            .bind(id)
            .bind(path)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Coach>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM coaches WHERE lower(email) = lower($1)",
            SELECT_COLS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(row.map(row_to_coach))
    }
}
