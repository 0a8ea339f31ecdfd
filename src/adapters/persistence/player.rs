use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    application::use_cases::player::{CreatePlayerRecord, PlayerRepo, UpdatePlayerInput},
    domain::entities::player::Player,
};

pub(crate) fn row_to_player(row: sqlx::postgres::PgRow) -> Player {
    Player {
        id: row.get("id"),
        team_id: row.get("team_id"),
        name: row.get("name"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        photo_path: row.get("photo_path"),
        monthly_fee_cents: row.get("monthly_fee_cents"),
        inscription_fee_cents: row.get("inscription_fee_cents"),
        inscription_paid_at: row.get("inscription_paid_at"),
        last_payment_date: row.get("last_payment_date"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

pub(crate) const SELECT_COLS: &str = "id, team_id, name, email, password_hash, photo_path, \
     monthly_fee_cents, inscription_fee_cents, inscription_paid_at, last_payment_date, \
     created_at, updated_at";

#[async_trait]
impl PlayerRepo for PostgresPersistence {
    async fn create(&self, team_id: Uuid, record: &CreatePlayerRecord) -> AppResult<Player> {
        let row = sqlx::query(&format!(
            "INSERT INTO players (id, team_id, name, email, password_hash,
                                  monthly_fee_cents, inscription_fee_cents)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {}",
            SELECT_COLS
        ))
        .bind(Uuid::new_v4())
        .bind(team_id)
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.password_hash)
        .bind(record.monthly_fee_cents)
        .bind(record.inscription_fee_cents)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(row_to_player(row))
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<Player>> {
        let row = sqlx::query(&format!("SELECT {} FROM players WHERE id = $1", SELECT_COLS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)?;

        Ok(row.map(row_to_player))
    }

    async fn list_by_team(&self, team_id: Uuid) -> AppResult<Vec<Player>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM players WHERE team_id = $1 ORDER BY name",
            SELECT_COLS
        ))
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(rows.into_iter().map(row_to_player).collect())
    }

    async fn update(&self, id: Uuid, input: &UpdatePlayerInput) -> AppResult<Player> {
        let row = sqlx::query(&format!(
            "UPDATE players SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                monthly_fee_cents = COALESCE($4, monthly_fee_cents),
                inscription_fee_cents = COALESCE($5, inscription_fee_cents),
                inscription_paid_at = COALESCE($6, inscription_paid_at),
                last_payment_date = COALESCE($7, last_payment_date),
                updated_at = CURRENT_TIMESTAMP
             WHERE id = $1
             RETURNING {}",
            SELECT_COLS
        ))
        .bind(id)
        .bind(&input.name)
        .bind(&input.email)
        .bind(input.monthly_fee_cents)
        .bind(input.inscription_fee_cents)
        .bind(input.inscription_paid_at)
        .bind(input.last_payment_date)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(row_to_player(row))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM players WHERE id = $1")
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
        sqlx::query("UPDATE players SET photo_path = $2, updated_at = CURRENT_TIMESTAMP WHERE id = $1")
            .bind(id)
            .bind(path)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Player>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM players WHERE lower(email) = lower($1)",
            SELECT_COLS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(row.map(row_to_player))
    }
}
