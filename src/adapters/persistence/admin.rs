use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    application::use_cases::auth::{AdminRepo, CreateAdminRecord},
    domain::entities::admin::Admin,
};

fn row_to_admin(row: sqlx::postgres::PgRow) -> Admin {
    Admin {
        id: row.get("id"),
        team_id: row.get("team_id"),
        name: row.get("name"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        created_at: row.get("created_at"),
    }
}

const SELECT_COLS: &str = "id, team_id, name, email, password_hash, created_at";

#[async_trait]
impl AdminRepo for PostgresPersistence {
    async fn create(&self, team_id: Uuid, record: &CreateAdminRecord) -> AppResult<Admin> {
        let row = sqlx::query(&format!(
            "INSERT INTO admins (id, team_id, name, email, password_hash)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {}",
            SELECT_COLS
        ))
        .bind(Uuid::new_v4())
        .bind(team_id)
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(row_to_admin(row))
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<Admin>> {
        let row = sqlx::query(&format!("SELECT {} FROM admins WHERE id = $1", SELECT_COLS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)?;

        Ok(row.map(row_to_admin))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM admins WHERE lower(email) = lower($1)",
            SELECT_COLS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(row.map(row_to_admin))
    }
}
