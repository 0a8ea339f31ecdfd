use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::validators::is_valid_name,
    domain::entities::{role::Actor, team::Team},
};

#[derive(Debug, Clone, Default)]
pub struct UpdateTeamInput {
    pub name: Option<String>,
    pub sport: Option<String>,
}

#[async_trait]
pub trait TeamRepo: Send + Sync {
    async fn create(&self, name: &str, sport: Option<&str>) -> AppResult<Team>;
    async fn get(&self, id: Uuid) -> AppResult<Option<Team>>;
    async fn update(&self, id: Uuid, input: &UpdateTeamInput) -> AppResult<Team>;
    async fn set_logo_path(&self, id: Uuid, path: &str) -> AppResult<()>;
}

#[derive(Clone)]
pub struct TeamUseCases {
    teams: Arc<dyn TeamRepo>,
}

impl TeamUseCases {
    pub fn new(teams: Arc<dyn TeamRepo>) -> Self {
        Self { teams }
    }

    pub async fn get_team(&self, actor: &Actor) -> AppResult<Team> {
        self.teams
            .get(actor.team_id())
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn update_team(&self, actor: &Actor, input: UpdateTeamInput) -> AppResult<Team> {
        actor.require_admin()?;
        if let Some(name) = &input.name
            && !is_valid_name(name)
        {
            return Err(AppError::validation("name", "Team name must not be empty"));
        }
        self.teams.update(actor.team_id(), &input).await
    }

    pub async fn set_logo(&self, actor: &Actor, path: &str) -> AppResult<()> {
        actor.require_admin()?;
        self.teams.set_logo_path(actor.team_id(), path).await
    }
}
