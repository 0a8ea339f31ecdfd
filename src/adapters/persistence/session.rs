use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::{
    adapters::persistence::{PostgresPersistence, coach, player},
    app_error::{AppError, AppResult},
    application::use_cases::session::{CreateSessionInput, SessionRepo, UpdateSessionInput},
    domain::entities::{coach::Coach, player::Player, session::Session},
};

fn row_to_session(row: sqlx::postgres::PgRow) -> Session {
    Session {
        id: row.get("id"),
        team_id: row.get("team_id"),
        name: row.get("name"),
        start_date: row.get("start_date"),
        end_date: row.get("end_date"),
        created_at: row.get("created_at"),
    }
}

const SELECT_COLS: &str = "id, team_id, name, start_date, end_date, created_at";

#[async_trait]
impl SessionRepo for PostgresPersistence {
    async fn create(&self, team_id: Uuid, input: &CreateSessionInput) -> AppResult<Session> {
        let row = sqlx::query(&format!(
            "INSERT INTO sessions (id, team_id, name, start_date, end_date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {}",
            SELECT_COLS
        ))
        .bind(Uuid::new_v4())
        .bind(team_id)
        .bind(&input.name)
        .bind(input.start_date)
        .bind(input.end_date)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(row_to_session(row))
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<Session>> {
        let row = sqlx::query(&format!("SELECT {} FROM sessions WHERE id = $1", SELECT_COLS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)?;

        Ok(row.map(row_to_session))
    }

    async fn list_by_team(&self, team_id: Uuid) -> AppResult<Vec<Session>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM sessions WHERE team_id = $1 ORDER BY start_date DESC",
            SELECT_COLS
        ))
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(rows.into_iter().map(row_to_session).collect())
    }

    async fn update(&self, id: Uuid, input: &UpdateSessionInput) -> AppResult<Session> {
        let row = sqlx::query(&format!(
            "UPDATE sessions SET
                name = COALESCE($2, name),
                start_date = COALESCE($3, start_date),
                end_date = COALESCE($4, end_date)
             WHERE id = $1
             RETURNING {}",
            SELECT_COLS
        ))
        .bind(id)
        .bind(&input.name)
        .bind(input.start_date)
        .bind(input.end_date)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(row_to_session(row))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn add_player(&self, session_id: Uuid, player_id: Uuid) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO session_players (session_id, player_id) VALUES ($1, $2)
             ON CONFLICT (session_id, player_id) DO NOTHING",
        )
        .bind(session_id)
        .bind(player_id)
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;
        Ok(())
    }

    async fn remove_player(&self, session_id: Uuid, player_id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM session_players WHERE session_id = $1 AND player_id = $2")
            .bind(session_id)
            .bind(player_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }

    async fn add_coach(&self, session_id: Uuid, coach_id: Uuid) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO session_coaches (session_id, coach_id) VALUES ($1, $2)
             ON CONFLICT (session_id, coach_id) DO NOTHING",
        )
        .bind(session_id)
        .bind(coach_id)
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;
        Ok(())
    }

    async fn remove_coach(&self, session_id: Uuid, coach_id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM session_coaches WHERE session_id = $1 AND coach_id = $2")
            .bind(session_id)
            .bind(coach_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }

    async fn is_player_in_roster(&self, session_id: Uuid, player_id: Uuid) -> AppResult<bool> {
        let exists: Option<i64> = sqlx::query_scalar(
            "SELECT 1 FROM session_players WHERE session_id = $1 AND player_id = $2",
        )
        .bind(session_id)
        .bind(player_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?;
        Ok(exists.is_some())
    }

    async fn list_roster_players(&self, session_id: Uuid) -> AppResult<Vec<Player>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM players p
             JOIN session_players sp ON sp.player_id = p.id
             WHERE sp.session_id = $1
             ORDER BY p.name",
            qualified(player::SELECT_COLS, "p")
        ))
        .bind(session_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(rows.into_iter().map(player::row_to_player).collect())
    }

    async fn list_roster_coaches(&self, session_id: Uuid) -> AppResult<Vec<Coach>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM coaches c
             JOIN session_coaches sc ON sc.coach_id = c.id
             WHERE sc.session_id = $1
             ORDER BY c.name",
            qualified(coach::SELECT_COLS, "c")
        ))
        .bind(session_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(rows.into_iter().map(coach::row_to_coach).collect())
    }
}

/// Prefixes every column in a comma-separated list with a table alias.
pub(crate) fn qualified(cols: &str, alias: &str) -> String {
    cols.split(',')
        .map(|c| format!("{}.{}", alias, c.trim()))
        .collect::<Vec<_>>()
        .join(", ")
}
