use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::session::SessionRepo,
    application::validators::is_valid_name,
    domain::entities::{player::Player, role::Actor, subgroup::Subgroup},
};

#[derive(Debug, Clone)]
pub struct CreateSubgroupInput {
    pub name: String,
    pub coach_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSubgroupInput {
    pub name: Option<String>,
    pub coach_id: Option<Option<Uuid>>,
}

#[async_trait]
pub trait SubgroupRepo: Send + Sync {
    async fn create(&self, session_id: Uuid, input: &CreateSubgroupInput) -> AppResult<Subgroup>;
    async fn get(&self, id: Uuid) -> AppResult<Option<Subgroup>>;
    async fn list_by_session(&self, session_id: Uuid) -> AppResult<Vec<Subgroup>>;
    async fn update(&self, id: Uuid, input: &UpdateSubgroupInput) -> AppResult<Subgroup>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Assigns a player, replacing any previous subgroup assignment inside
    /// the same session.
    async fn assign_player(
        &self,
        subgroup_id: Uuid,
        session_id: Uuid,
        player_id: Uuid,
    ) -> AppResult<()>;
    async fn unassign_player(&self, subgroup_id: Uuid, player_id: Uuid) -> AppResult<()>;
    async fn list_members(&self, subgroup_id: Uuid) -> AppResult<Vec<Player>>;
}

#[derive(Clone)]
pub struct SubgroupUseCases {
    subgroups: Arc<dyn SubgroupRepo>,
    sessions: Arc<dyn SessionRepo>,
}

impl SubgroupUseCases {
    pub fn new(subgroups: Arc<dyn SubgroupRepo>, sessions: Arc<dyn SessionRepo>) -> Self {
        Self { subgroups, sessions }
    }

    pub async fn create_subgroup(
        &self,
        actor: &Actor,
        session_id: Uuid,
        input: CreateSubgroupInput,
    ) -> AppResult<Subgroup> {
        actor.require_admin()?;
        self.owned_session(actor, session_id).await?;
        if !is_valid_name(&input.name) {
            return Err(AppError::validation("name", "Subgroup name must not be empty"));
        }
        self.subgroups.create(session_id, &input).await
    }

    pub async fn list_subgroups(
        &self,
        actor: &Actor,
        session_id: Uuid,
    ) -> AppResult<Vec<Subgroup>> {
        actor.require_staff()?;
        self.owned_session(actor, session_id).await?;
        self.subgroups.list_by_session(session_id).await
    }

    pub async fn update_subgroup(
        &self,
        actor: &Actor,
        subgroup_id: Uuid,
        input: UpdateSubgroupInput,
    ) -> AppResult<Subgroup> {
        actor.require_admin()?;
        self.owned_subgroup(actor, subgroup_id).await?;
        if let Some(name) = &input.name
            && !is_valid_name(name)
        {
            return Err(AppError::validation("name", "Subgroup name must not be empty"));
        }
        self.subgroups.update(subgroup_id, &input).await
    }

    pub async fn delete_subgroup(&self, actor: &Actor, subgroup_id: Uuid) -> AppResult<()> {
        actor.require_admin()?;
        self.owned_subgroup(actor, subgroup_id).await?;
        self.subgroups.delete(subgroup_id).await
    }

    pub async fn assign_player(
        &self,
        actor: &Actor,
        subgroup_id: Uuid,
        player_id: Uuid,
    ) -> AppResult<()> {
        actor.require_staff()?;
        let subgroup = self.owned_subgroup(actor, subgroup_id).await?;
        // Only rostered players can be grouped.
        if !self
            .sessions
            .is_player_in_roster(subgroup.session_id, player_id)
            .await?
        {
            return Err(AppError::validation(
                "player_id",
                "Player is not on this session's roster",
            ));
        }
        self.subgroups
            .assign_player(subgroup_id, subgroup.session_id, player_id)
            .await
    }

    pub async fn unassign_player(
        &self,
        actor: &Actor,
        subgroup_id: Uuid,
        player_id: Uuid,
    ) -> AppResult<()> {
        actor.require_staff()?;
        self.owned_subgroup(actor, subgroup_id).await?;
        self.subgroups.unassign_player(subgroup_id, player_id).await
    }

    pub async fn list_members(&self, actor: &Actor, subgroup_id: Uuid) -> AppResult<Vec<Player>> {
        actor.require_staff()?;
        self.owned_subgroup(actor, subgroup_id).await?;
        self.subgroups.list_members(subgroup_id).await
    }

    async fn owned_subgroup(&self, actor: &Actor, subgroup_id: Uuid) -> AppResult<Subgroup> {
        let subgroup = self
            .subgroups
            .get(subgroup_id)
            .await?
            .ok_or(AppError::NotFound)?;
        self.owned_session(actor, subgroup.session_id).await?;
        Ok(subgroup)
    }

    async fn owned_session(&self, actor: &Actor, session_id: Uuid) -> AppResult<()> {
        let session = self
            .sessions
            .get(session_id)
            .await?
            .ok_or(AppError::NotFound)?;
        actor.require_team(session.team_id)
    }
}
