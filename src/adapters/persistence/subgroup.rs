use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::{
    adapters::persistence::{PostgresPersistence, player},
    app_error::{AppError, AppResult},
    application::use_cases::subgroup::{CreateSubgroupInput, SubgroupRepo, UpdateSubgroupInput},
    domain::entities::{player::Player, subgroup::Subgroup},
};

fn row_to_subgroup(row: sqlx::postgres::PgRow) -> Subgroup {
    Subgroup {
        id: row.get("id"),
        session_id: row.get("session_id"),
        name: row.get("name"),
        coach_id: row.get("coach_id"),
        created_at: row.get("created_at"),
    }
}

const SELECT_COLS: &str = "id, session_id, name, coach_id, created_at";

#[async_trait]
impl SubgroupRepo for PostgresPersistence {
    async fn create(&self, session_id: Uuid, input: &CreateSubgroupInput) -> AppResult<Subgroup> {
        let row = sqlx::query(&format!(
            "INSERT INTO subgroups (id, session_id, name, coach_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {}",
            SELECT_COLS
        ))
        .bind(Uuid::new_v4())
        .bind(session_id)
        .bind(&input.name)
        .bind(input.coach_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(row_to_subgroup(row))
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<Subgroup>> {
        let row = sqlx::query(&format!("SELECT {} FROM subgroups WHERE id = $1", SELECT_COLS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)?;

        Ok(row.map(row_to_subgroup))
    }

    async fn list_by_session(&self, session_id: Uuid) -> AppResult<Vec<Subgroup>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM subgroups WHERE session_id = $1 ORDER BY name",
            SELECT_COLS
        ))
        .bind(session_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(rows.into_iter().map(row_to_subgroup).collect())
    }

    async fn update(&self, id: Uuid, input: &UpdateSubgroupInput) -> AppResult<Subgroup> {
        // coach_id uses a presence flag so the caller can clear it with
        // an explicit null.
        let row = sqlx::query(&format!(
            "UPDATE subgroups SET
                name = COALESCE($2, name),
                coach_id = CASE WHEN $3 THEN $4 ELSE coach_id END
             WHERE id = $1
             RETURNING {}",
            SELECT_COLS
        ))
        .bind(id)
        .bind(&input.name)
        .bind(input.coach_id.is_some())
        .bind(input.coach_id.flatten())
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(row_to_subgroup(row))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM subgroups WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn assign_player(
        &self,
        subgroup_id: Uuid,
        session_id: Uuid,
        player_id: Uuid,
    ) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(AppError::from)?;

        // A player holds at most one subgroup slot per session.
        sqlx::query(
            "DELETE FROM subgroup_players sp
             USING subgroups s
             WHERE sp.subgroup_id = s.id
               AND s.session_id = $1
               AND sp.player_id = $2",
        )
        .bind(session_id)
        .bind(player_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::from)?;

        sqlx::query("INSERT INTO subgroup_players (subgroup_id, player_id) VALUES ($1, $2)")
            .bind(subgroup_id)
            .bind(player_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::from)?;

        tx.commit().await.map_err(AppError::from)?;
        Ok(())
    }

    async fn unassign_player(&self, subgroup_id: Uuid, player_id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM subgroup_players WHERE subgroup_id = $1 AND player_id = $2")
            .bind(subgroup_id)
            .bind(player_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }

    async fn list_members(&self, subgroup_id: Uuid) -> AppResult<Vec<Player>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM players p
             JOIN subgroup_players sp ON sp.player_id = p.id
             WHERE sp.subgroup_id = $1
             ORDER BY p.name",
            super::session::qualified(player::SELECT_COLS, "p")
        ))
        .bind(subgroup_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(rows.into_iter().map(player::row_to_player).collect())
    }
}
