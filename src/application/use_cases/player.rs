use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::billing::{BillingReport, billing_report},
    application::password::{check_password_strength, hash_password},
    application::validators::{is_valid_email, is_valid_name},
    domain::entities::{player::Player, role::Actor},
};

/// Repo-facing create record; the password is already hashed here.
#[derive(Debug, Clone)]
pub struct CreatePlayerRecord {
    pub name: String,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub monthly_fee_cents: i32,
    pub inscription_fee_cents: i32,
}

#[derive(Debug, Clone)]
pub struct CreatePlayerInput {
    pub name: String,
    pub email: Option<String>,
    pub password: Option<String>,
    pub monthly_fee_cents: i32,
    pub inscription_fee_cents: i32,
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePlayerInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub monthly_fee_cents: Option<i32>,
    pub inscription_fee_cents: Option<i32>,
    pub inscription_paid_at: Option<NaiveDateTime>,
    pub last_payment_date: Option<NaiveDateTime>,
}

/// Player plus the derived billing report attached by list/get endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerWithBilling {
    #[serde(flatten)]
    pub player: Player,
    pub billing: BillingReport,
}

#[async_trait]
pub trait PlayerRepo: Send + Sync {
    async fn create(&self, team_id: Uuid, record: &CreatePlayerRecord) -> AppResult<Player>;
    async fn get(&self, id: Uuid) -> AppResult<Option<Player>>;
    async fn list_by_team(&self, team_id: Uuid) -> AppResult<Vec<Player>>;
    async fn update(&self, id: Uuid, input: &UpdatePlayerInput) -> AppResult<Player>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
    async fn set_photo_path(&self, id: Uuid, path: &str) -> AppResult<()>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Player>>;
}

#[derive(Clone)]
pub struct PlayerUseCases {
    players: Arc<dyn PlayerRepo>,
}

impl PlayerUseCases {
    pub fn new(players: Arc<dyn PlayerRepo>) -> Self {
        Self { players }
    }

    pub async fn create_player(
        &self,
        actor: &Actor,
        input: CreatePlayerInput,
    ) -> AppResult<Player> {
        actor.require_admin()?;
        if !is_valid_name(&input.name) {
            return Err(AppError::validation("name", "Name must not be empty"));
        }
        if let Some(email) = &input.email
            && !is_valid_email(email)
        {
            return Err(AppError::validation("email", "Invalid email address"));
        }
        if input.monthly_fee_cents < 0 || input.inscription_fee_cents < 0 {
            return Err(AppError::validation(
                "monthly_fee_cents",
                "Fees must not be negative",
            ));
        }
        let password_hash = match &input.password {
            Some(password) => {
                if input.email.is_none() {
                    return Err(AppError::validation(
                        "email",
                        "A login password requires an email",
                    ));
                }
                check_password_strength(password)?;
                Some(hash_password(password))
            }
            None => None,
        };

        let record = CreatePlayerRecord {
            name: input.name.trim().to_string(),
            email: input.email,
            password_hash,
            monthly_fee_cents: input.monthly_fee_cents,
            inscription_fee_cents: input.inscription_fee_cents,
        };
        self.players.create(actor.team_id(), &record).await
    }

    /// Roster listing with a billing report per player. A failing report for
    /// one record degrades to the `error` sentinel instead of failing the
    /// whole request.
    pub async fn list_players(
        &self,
        actor: &Actor,
        today: NaiveDate,
    ) -> AppResult<Vec<PlayerWithBilling>> {
        actor.require_staff()?;
        let players = self.players.list_by_team(actor.team_id()).await?;
        Ok(players.into_iter().map(|p| with_billing(p, today)).collect())
    }

    pub async fn get_player(
        &self,
        actor: &Actor,
        player_id: Uuid,
        today: NaiveDate,
    ) -> AppResult<PlayerWithBilling> {
        actor.may_view_player(player_id)?;
        let player = self
            .players
            .get(player_id)
            .await?
            .ok_or(AppError::NotFound)?;
        actor.require_team(player.team_id)?;
        Ok(with_billing(player, today))
    }

    pub async fn update_player(
        &self,
        actor: &Actor,
        player_id: Uuid,
        input: UpdatePlayerInput,
    ) -> AppResult<Player> {
        actor.require_admin()?;
        self.owned_player(actor, player_id).await?;
        if let Some(name) = &input.name
            && !is_valid_name(name)
        {
            return Err(AppError::validation("name", "Name must not be empty"));
        }
        if let Some(email) = &input.email
            && !is_valid_email(email)
        {
            return Err(AppError::validation("email", "Invalid email address"));
        }
        if input.monthly_fee_cents.is_some_and(|f| f < 0)
            || input.inscription_fee_cents.is_some_and(|f| f < 0)
        {
            return Err(AppError::validation(
                "monthly_fee_cents",
                "Fees must not be negative",
            ));
        }
        self.players.update(player_id, &input).await
    }

    pub async fn delete_player(&self, actor: &Actor, player_id: Uuid) -> AppResult<()> {
        actor.require_admin()?;
        self.owned_player(actor, player_id).await?;
        self.players.delete(player_id).await
    }

    pub async fn set_photo(&self, actor: &Actor, player_id: Uuid, path: &str) -> AppResult<()> {
        actor.require_admin()?;
        self.owned_player(actor, player_id).await?;
        self.players.set_photo_path(player_id, path).await
    }

    async fn owned_player(&self, actor: &Actor, player_id: Uuid) -> AppResult<Player> {
        let player = self
            .players
            .get(player_id)
            .await?
            .ok_or(AppError::NotFound)?;
        actor.require_team(player.team_id)?;
        Ok(player)
    }
}

fn with_billing(player: Player, today: NaiveDate) -> PlayerWithBilling {
    let billing = billing_report(
        player.monthly_fee_cents,
        player.created_at,
        player.last_payment_date,
        today,
    );
    PlayerWithBilling { player, billing }
}
