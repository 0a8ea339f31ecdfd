use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::{coach::CoachRepo, player::PlayerRepo},
    application::validators::is_valid_name,
    domain::entities::{coach::Coach, player::Player, role::Actor, session::Session},
};

#[derive(Debug, Clone)]
pub struct CreateSessionInput {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSessionInput {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[async_trait]
pub trait SessionRepo: Send + Sync {
    async fn create(&self, team_id: Uuid, input: &CreateSessionInput) -> AppResult<Session>;
    async fn get(&self, id: Uuid) -> AppResult<Option<Session>>;
    async fn list_by_team(&self, team_id: Uuid) -> AppResult<Vec<Session>>;
    async fn update(&self, id: Uuid, input: &UpdateSessionInput) -> AppResult<Session>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    async fn add_player(&self, session_id: Uuid, player_id: Uuid) -> AppResult<()>;
    async fn remove_player(&self, session_id: Uuid, player_id: Uuid) -> AppResult<()>;
    async fn add_coach(&self, session_id: Uuid, coach_id: Uuid) -> AppResult<()>;
    async fn remove_coach(&self, session_id: Uuid, coach_id: Uuid) -> AppResult<()>;
    async fn is_player_in_roster(&self, session_id: Uuid, player_id: Uuid) -> AppResult<bool>;
    async fn list_roster_players(&self, session_id: Uuid) -> AppResult<Vec<Player>>;
    async fn list_roster_coaches(&self, session_id: Uuid) -> AppResult<Vec<Coach>>;
}

#[derive(Clone)]
pub struct SessionUseCases {
    sessions: Arc<dyn SessionRepo>,
    players: Arc<dyn PlayerRepo>,
    coaches: Arc<dyn CoachRepo>,
}

impl SessionUseCases {
    pub fn new(
        sessions: Arc<dyn SessionRepo>,
        players: Arc<dyn PlayerRepo>,
        coaches: Arc<dyn CoachRepo>,
    ) -> Self {
        Self {
            sessions,
            players,
            coaches,
        }
    }

    pub async fn create_session(
        &self,
        actor: &Actor,
        input: CreateSessionInput,
    ) -> AppResult<Session> {
        actor.require_admin()?;
        if !is_valid_name(&input.name) {
            return Err(AppError::validation("name", "Session name must not be empty"));
        }
        if input.start_date > input.end_date {
            return Err(AppError::validation(
                "end_date",
                "End date must not precede start date",
            ));
        }
        self.sessions.create(actor.team_id(), &input).await
    }

    pub async fn list_sessions(&self, actor: &Actor) -> AppResult<Vec<Session>> {
        self.sessions.list_by_team(actor.team_id()).await
    }

    pub async fn get_session(&self, actor: &Actor, session_id: Uuid) -> AppResult<Session> {
        self.owned_session(actor, session_id).await
    }

    pub async fn update_session(
        &self,
        actor: &Actor,
        session_id: Uuid,
        input: UpdateSessionInput,
    ) -> AppResult<Session> {
        actor.require_admin()?;
        let existing = self.owned_session(actor, session_id).await?;
        if let Some(name) = &input.name
            && !is_valid_name(name)
        {
            return Err(AppError::validation("name", "Session name must not be empty"));
        }
        let start = input.start_date.unwrap_or(existing.start_date);
        let end = input.end_date.unwrap_or(existing.end_date);
        if start > end {
            return Err(AppError::validation(
                "end_date",
                "End date must not precede start date",
            ));
        }
        self.sessions.update(session_id, &input).await
    }

    pub async fn delete_session(&self, actor: &Actor, session_id: Uuid) -> AppResult<()> {
        actor.require_admin()?;
        self.owned_session(actor, session_id).await?;
        self.sessions.delete(session_id).await
    }

    pub async fn add_player(
        &self,
        actor: &Actor,
        session_id: Uuid,
        player_id: Uuid,
    ) -> AppResult<()> {
        actor.require_admin()?;
        let session = self.owned_session(actor, session_id).await?;
        let player = self
            .players
            .get(player_id)
            .await?
            .ok_or(AppError::NotFound)?;
        if player.team_id != session.team_id {
            return Err(AppError::Forbidden);
        }
        self.sessions.add_player(session_id, player_id).await
    }

    pub async fn remove_player(
        &self,
        actor: &Actor,
        session_id: Uuid,
        player_id: Uuid,
    ) -> AppResult<()> {
        actor.require_admin()?;
        self.owned_session(actor, session_id).await?;
        self.sessions.remove_player(session_id, player_id).await
    }

    pub async fn add_coach(
        &self,
        actor: &Actor,
        session_id: Uuid,
        coach_id: Uuid,
    ) -> AppResult<()> {
        actor.require_admin()?;
        let session = self.owned_session(actor, session_id).await?;
        let coach = self.coaches.get(coach_id).await?.ok_or(AppError::NotFound)?;
        if coach.team_id != session.team_id {
            return Err(AppError::Forbidden);
        }
        self.sessions.add_coach(session_id, coach_id).await
    }

    pub async fn remove_coach(
        &self,
        actor: &Actor,
        session_id: Uuid,
        coach_id: Uuid,
    ) -> AppResult<()> {
        actor.require_admin()?;
        self.owned_session(actor, session_id).await?;
        self.sessions.remove_coach(session_id, coach_id).await
    }

    pub async fn list_roster(
        &self,
        actor: &Actor,
        session_id: Uuid,
    ) -> AppResult<(Vec<Player>, Vec<Coach>)> {
        actor.require_staff()?;
        self.owned_session(actor, session_id).await?;
        let players = self.sessions.list_roster_players(session_id).await?;
        let coaches = self.sessions.list_roster_coaches(session_id).await?;
        Ok((players, coaches))
    }

    pub(crate) async fn owned_session(
        &self,
        actor: &Actor,
        session_id: Uuid,
    ) -> AppResult<Session> {
        let session = self
            .sessions
            .get(session_id)
            .await?
            .ok_or(AppError::NotFound)?;
        actor.require_team(session.team_id)?;
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        InMemoryCoachRepo, InMemoryPlayerRepo, InMemorySessionRepo, create_test_player,
        create_test_session,
    };

    fn admin(team_id: Uuid) -> Actor {
        Actor::Admin {
            id: Uuid::new_v4(),
            team_id,
        }
    }

    fn use_cases(
        sessions: Arc<InMemorySessionRepo>,
        players: Arc<InMemoryPlayerRepo>,
    ) -> SessionUseCases {
        SessionUseCases::new(sessions, players, Arc::new(InMemoryCoachRepo::new()))
    }

    #[tokio::test]
    async fn create_rejects_inverted_range() {
        let use_cases = use_cases(
            Arc::new(InMemorySessionRepo::new()),
            Arc::new(InMemoryPlayerRepo::new()),
        );
        let result = use_cases
            .create_session(
                &admin(Uuid::new_v4()),
                CreateSessionInput {
                    name: "Spring".into(),
                    start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                    end_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                },
            )
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn roster_add_rejects_player_from_another_team() {
        let team_id = Uuid::new_v4();
        let session = create_test_session(team_id, |_| {});
        let session_id = session.id;
        let foreign = create_test_player(Uuid::new_v4(), |_| {});
        let foreign_id = foreign.id;

        let use_cases = use_cases(
            Arc::new(InMemorySessionRepo::with_sessions(vec![session])),
            Arc::new(InMemoryPlayerRepo::with_players(vec![foreign])),
        );
        let result = use_cases
            .add_player(&admin(team_id), session_id, foreign_id)
            .await;
        assert!(matches!(result, Err(AppError::Forbidden)));
    }

    #[tokio::test]
    async fn roster_round_trip() {
        let team_id = Uuid::new_v4();
        let session = create_test_session(team_id, |_| {});
        let session_id = session.id;
        let player = create_test_player(team_id, |_| {});
        let player_id = player.id;

        let sessions = Arc::new(InMemorySessionRepo::with_sessions(vec![session]));
        sessions.seed_player(player.clone());
        let use_cases = use_cases(
            sessions.clone(),
            Arc::new(InMemoryPlayerRepo::with_players(vec![player])),
        );
        let actor = admin(team_id);

        use_cases.add_player(&actor, session_id, player_id).await.unwrap();
        let (players, coaches) = use_cases.list_roster(&actor, session_id).await.unwrap();
        assert_eq!(players.len(), 1);
        assert!(coaches.is_empty());

        use_cases
            .remove_player(&actor, session_id, player_id)
            .await
            .unwrap();
        let (players, _) = use_cases.list_roster(&actor, session_id).await.unwrap();
        assert!(players.is_empty());
    }
}
