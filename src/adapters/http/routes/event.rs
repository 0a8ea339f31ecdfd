use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
};
use axum_extra::extract::cookie::CookieJar;
use chrono::NaiveDateTime;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    adapters::http::{app_state::AppState, response, routes::current_actor},
    app_error::AppResult,
    application::use_cases::event::{CreateEventInput, UpdateEventInput},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_events).post(create_event))
        .route(
            "/{event_id}",
            get(get_event).patch(update_event).delete(delete_event),
        )
}

#[derive(Deserialize)]
struct CreateEventPayload {
    title: String,
    description: Option<String>,
    starts_at: NaiveDateTime,
    location: Option<String>,
}

async fn create_event(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Json(payload): Json<CreateEventPayload>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let event = app_state
        .event_use_cases
        .create_event(
            &actor,
            CreateEventInput {
                title: payload.title,
                description: payload.description,
                starts_at: payload.starts_at,
                location: payload.location,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, response::ok("Event created", event)))
}

async fn list_events(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let events = app_state.event_use_cases.list_events(&actor).await?;
    Ok(response::ok("Events", events))
}

async fn get_event(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path(event_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let event = app_state.event_use_cases.get_event(&actor, event_id).await?;
    Ok(response::ok("Event", event))
}

#[derive(Deserialize)]
struct UpdateEventPayload {
    title: Option<String>,
    description: Option<String>,
    starts_at: Option<NaiveDateTime>,
    location: Option<String>,
}

async fn update_event(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path(event_id): Path<Uuid>,
    Json(payload): Json<UpdateEventPayload>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let event = app_state
        .event_use_cases
        .update_event(
            &actor,
            event_id,
            UpdateEventInput {
                title: payload.title,
                description: payload.description,
                starts_at: payload.starts_at,
                location: payload.location,
            },
        )
        .await?;
    Ok(response::ok("Event updated", event))
}

async fn delete_event(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path(event_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    app_state
        .event_use_cases
        .delete_event(&actor, event_id)
        .await?;
    Ok(response::ok_empty("Event deleted"))
}
