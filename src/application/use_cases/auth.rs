use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::instrument;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::password::{check_password_strength, hash_password, verify_password},
    application::use_cases::{coach::CoachRepo, player::PlayerRepo, team::TeamRepo},
    application::validators::{is_valid_email, is_valid_name},
    domain::entities::{
        admin::Admin,
        role::{Actor, Role},
        team::Team,
    },
};

#[derive(Debug, Clone)]
pub struct CreateAdminRecord {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

#[async_trait]
pub trait AdminRepo: Send + Sync {
    async fn create(&self, team_id: Uuid, record: &CreateAdminRecord) -> AppResult<Admin>;
    async fn get(&self, id: Uuid) -> AppResult<Option<Admin>>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>>;
}

#[derive(Debug, Clone)]
pub struct RegisterTeamInput {
    pub team_name: String,
    pub sport: Option<String>,
    pub admin_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisteredTeam {
    pub team: Team,
    pub admin: Admin,
}

#[derive(Clone)]
pub struct AuthUseCases {
    admins: Arc<dyn AdminRepo>,
    coaches: Arc<dyn CoachRepo>,
    players: Arc<dyn PlayerRepo>,
    teams: Arc<dyn TeamRepo>,
}

impl AuthUseCases {
    pub fn new(
        admins: Arc<dyn AdminRepo>,
        coaches: Arc<dyn CoachRepo>,
        players: Arc<dyn PlayerRepo>,
        teams: Arc<dyn TeamRepo>,
    ) -> Self {
        Self {
            admins,
            coaches,
            players,
            teams,
        }
    }

    /// Creates a team together with its first admin account.
    #[instrument(skip(self, input))]
    pub async fn register_team(&self, input: RegisterTeamInput) -> AppResult<RegisteredTeam> {
        if !is_valid_name(&input.team_name) {
            return Err(AppError::validation("team_name", "Team name must not be empty"));
        }
        if !is_valid_name(&input.admin_name) {
            return Err(AppError::validation("admin_name", "Name must not be empty"));
        }
        if !is_valid_email(&input.email) {
            return Err(AppError::validation("email", "Invalid email address"));
        }
        check_password_strength(&input.password)?;

        if self.admins.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::Duplicate);
        }

        let team = self
            .teams
            .create(input.team_name.trim(), input.sport.as_deref())
            .await?;
        let admin = self
            .admins
            .create(
                team.id,
                &CreateAdminRecord {
                    name: input.admin_name.trim().to_string(),
                    email: input.email,
                    password_hash: hash_password(&input.password),
                },
            )
            .await?;

        Ok(RegisteredTeam { team, admin })
    }

    /// Verifies credentials against the collection matching the requested
    /// role and returns the authenticated actor.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str, role: Role) -> AppResult<Actor> {
        match role {
            Role::Admin => {
                let admin = self
                    .admins
                    .find_by_email(email)
                    .await?
                    .ok_or(AppError::InvalidCredentials)?;
                if !verify_password(password, &admin.password_hash) {
                    return Err(AppError::InvalidCredentials);
                }
                Ok(Actor::Admin {
                    id: admin.id,
                    team_id: admin.team_id,
                })
            }
            Role::Coach => {
                let coach = self
                    .coaches
                    .find_by_email(email)
                    .await?
                    .ok_or(AppError::InvalidCredentials)?;
                let hash = coach
                    .password_hash
                    .as_deref()
                    .ok_or(AppError::InvalidCredentials)?;
                if !verify_password(password, hash) {
                    return Err(AppError::InvalidCredentials);
                }
                Ok(Actor::Coach {
                    id: coach.id,
                    team_id: coach.team_id,
                })
            }
            Role::Player => {
                let player = self
                    .players
                    .find_by_email(email)
                    .await?
                    .ok_or(AppError::InvalidCredentials)?;
                let hash = player
                    .password_hash
                    .as_deref()
                    .ok_or(AppError::InvalidCredentials)?;
                if !verify_password(password, hash) {
                    return Err(AppError::InvalidCredentials);
                }
                Ok(Actor::Player {
                    id: player.id,
                    team_id: player.team_id,
                })
            }
        }
    }
}
