use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::password::{check_password_strength, hash_password},
    application::validators::{is_valid_email, is_valid_name},
    domain::entities::{coach::Coach, role::Actor},
};

#[derive(Debug, Clone)]
pub struct CreateCoachRecord {
    pub name: String,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub agreed_salary_cents: i32,
}

#[derive(Debug, Clone)]
pub struct CreateCoachInput {
    pub name: String,
    pub email: Option<String>,
    pub password: Option<String>,
    pub agreed_salary_cents: i32,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCoachInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub agreed_salary_cents: Option<i32>,
}

#[async_trait]
pub trait CoachRepo: Send + Sync {
    async fn create(&self, team_id: Uuid, record: &CreateCoachRecord) -> AppResult<Coach>;
    async fn get(&self, id: Uuid) -> AppResult<Option<Coach>>;
    async fn list_by_team(&self, team_id: Uuid) -> AppResult<Vec<Coach>>;
    async fn update(&self, id: Uuid, input: &UpdateCoachInput) -> AppResult<Coach>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
    async fn set_photo_path(&self, id: Uuid, path: &str) -> AppResult<()>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Coach>>;
}

#[derive(Clone)]
pub struct CoachUseCases {
    coaches: Arc<dyn CoachRepo>,
}

impl CoachUseCases {
    pub fn new(coaches: Arc<dyn CoachRepo>) -> Self {
        Self { coaches }
    }

    pub async fn create_coach(&self, actor: &Actor, input: CreateCoachInput) -> AppResult<Coach> {
        actor.require_admin()?;
        if !is_valid_name(&input.name) {
            return Err(AppError::validation("name", "Name must not be empty"));
        }
        if let Some(email) = &input.email
            && !is_valid_email(email)
        {
            return Err(AppError::validation("email", "Invalid email address"));
        }
        if input.agreed_salary_cents < 0 {
            return Err(AppError::validation(
                "agreed_salary_cents",
                "Salary must not be negative",
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

        let record = CreateCoachRecord {
            name: input.name.trim().to_string(),
            email: input.email,
            password_hash,
            agreed_salary_cents: input.agreed_salary_cents,
        };
        self.coaches.create(actor.team_id(), &record).await
    }

    pub async fn list_coaches(&self, actor: &Actor) -> AppResult<Vec<Coach>> {
        actor.require_staff()?;
        self.coaches.list_by_team(actor.team_id()).await
    }

    pub async fn get_coach(&self, actor: &Actor, coach_id: Uuid) -> AppResult<Coach> {
        let coach = self.owned_coach(actor, coach_id).await?;
        // Coaches may read themselves and colleagues; players get nothing here.
        actor.require_staff()?;
        Ok(coach)
    }

    pub async fn update_coach(
        &self,
        actor: &Actor,
        coach_id: Uuid,
        input: UpdateCoachInput,
    ) -> AppResult<Coach> {
        actor.require_admin()?;
        self.owned_coach(actor, coach_id).await?;
        if let Some(name) = &input.name
            && !is_valid_name(name)
        {
            return Err(AppError::validation("name", "Name must not be empty"));
        }
        if input.agreed_salary_cents.is_some_and(|s| s < 0) {
            return Err(AppError::validation(
                "agreed_salary_cents",
                "Salary must not be negative",
            ));
        }
        self.coaches.update(coach_id, &input).await
    }

    pub async fn delete_coach(&self, actor: &Actor, coach_id: Uuid) -> AppResult<()> {
        actor.require_admin()?;
        self.owned_coach(actor, coach_id).await?;
        self.coaches.delete(coach_id).await
    }

    pub async fn set_photo(&self, actor: &Actor, coach_id: Uuid, path: &str) -> AppResult<()> {
        actor.require_admin()?;
        self.owned_coach(actor, coach_id).await?;
        self.coaches.set_photo_path(coach_id, path).await
    }

    async fn owned_coach(&self, actor: &Actor, coach_id: Uuid) -> AppResult<Coach> {
        let coach = self.coaches.get(coach_id).await?.ok_or(AppError::NotFound)?;
        actor.require_team(coach.team_id)?;
        Ok(coach)
    }
}
