use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::validators::is_valid_name,
    domain::entities::{event::Event, role::Actor},
};

#[derive(Debug, Clone)]
pub struct CreateEventInput {
    pub title: String,
    pub description: Option<String>,
    pub starts_at: NaiveDateTime,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateEventInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub starts_at: Option<NaiveDateTime>,
    pub location: Option<String>,
}

#[async_trait]
pub trait EventRepo: Send + Sync {
    async fn create(&self, team_id: Uuid, input: &CreateEventInput) -> AppResult<Event>;
    async fn get(&self, id: Uuid) -> AppResult<Option<Event>>;
    async fn list_by_team(&self, team_id: Uuid) -> AppResult<Vec<Event>>;
    async fn update(&self, id: Uuid, input: &UpdateEventInput) -> AppResult<Event>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

#[derive(Clone)]
pub struct EventUseCases {
    events: Arc<dyn EventRepo>,
}

impl EventUseCases {
    pub fn new(events: Arc<dyn EventRepo>) -> Self {
        Self { events }
    }

    pub async fn create_event(&self, actor: &Actor, input: CreateEventInput) -> AppResult<Event> {
        actor.require_staff()?;
        if !is_valid_name(&input.title) {
            return Err(AppError::validation("title", "Title must not be empty"));
        }
        self.events.create(actor.team_id(), &input).await
    }

    pub async fn list_events(&self, actor: &Actor) -> AppResult<Vec<Event>> {
        self.events.list_by_team(actor.team_id()).await
    }

    pub async fn get_event(&self, actor: &Actor, event_id: Uuid) -> AppResult<Event> {
        self.owned_event(actor, event_id).await
    }

    pub async fn update_event(
        &self,
        actor: &Actor,
        event_id: Uuid,
        input: UpdateEventInput,
    ) -> AppResult<Event> {
        actor.require_staff()?;
        self.owned_event(actor, event_id).await?;
        if let Some(title) = &input.title
            && !is_valid_name(title)
        {
            return Err(AppError::validation("title", "Title must not be empty"));
        }
        self.events.update(event_id, &input).await
    }

    pub async fn delete_event(&self, actor: &Actor, event_id: Uuid) -> AppResult<()> {
        actor.require_staff()?;
        self.owned_event(actor, event_id).await?;
        self.events.delete(event_id).await
    }

    async fn owned_event(&self, actor: &Actor, event_id: Uuid) -> AppResult<Event> {
        let event = self.events.get(event_id).await?.ok_or(AppError::NotFound)?;
        actor.require_team(event.team_id)?;
        Ok(event)
    }
}
