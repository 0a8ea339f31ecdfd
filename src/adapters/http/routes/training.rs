use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;
use chrono::{NaiveDateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    adapters::http::{app_state::AppState, response, routes::current_actor},
    app_error::AppResult,
    application::use_cases::training::{CreateTrainingInput, UpdateTrainingInput},
    domain::entities::attendance::AttendanceStatus,
};

/// Session-scoped routes, merged into the `/sessions` nest.
pub fn session_router() -> Router<AppState> {
    Router::new().route(
        "/{session_id}/trainings",
        get(list_trainings).post(create_training),
    )
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{training_id}",
            get(get_training).patch(update_training).delete(delete_training),
        )
        .route(
            "/{training_id}/attendance",
            get(list_attendance).post(record_attendance),
        )
}

#[derive(Deserialize)]
struct CreateTrainingPayload {
    subgroup_id: Option<Uuid>,
    starts_at: NaiveDateTime,
    ends_at: Option<NaiveDateTime>,
    location: Option<String>,
    notes: Option<String>,
}

async fn create_training(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<CreateTrainingPayload>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let training = app_state
        .training_use_cases
        .create_training(
            &actor,
            session_id,
            CreateTrainingInput {
                subgroup_id: payload.subgroup_id,
                starts_at: payload.starts_at,
                ends_at: payload.ends_at,
                location: payload.location,
                notes: payload.notes,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, response::ok("Training created", training)))
}

async fn list_trainings(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path(session_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let trainings = app_state
        .training_use_cases
        .list_trainings(&actor, session_id)
        .await?;
    Ok(response::ok("Trainings", trainings))
}

async fn get_training(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path(training_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let training = app_state
        .training_use_cases
        .get_training(&actor, training_id)
        .await?;
    Ok(response::ok("Training", training))
}

#[derive(Deserialize)]
struct UpdateTrainingPayload {
    starts_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "present_or_null")]
    ends_at: Option<Option<NaiveDateTime>>,
    location: Option<String>,
    notes: Option<String>,
}

fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<NaiveDateTime>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(deserializer).map(Some)
}

async fn update_training(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path(training_id): Path<Uuid>,
    Json(payload): Json<UpdateTrainingPayload>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let training = app_state
        .training_use_cases
        .update_training(
            &actor,
            training_id,
            UpdateTrainingInput {
                starts_at: payload.starts_at,
                ends_at: payload.ends_at,
                location: payload.location,
                notes: payload.notes,
            },
        )
        .await?;
    Ok(response::ok("Training updated", training))
}

async fn delete_training(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path(training_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    app_state
        .training_use_cases
        .delete_training(&actor, training_id)
        .await?;
    Ok(response::ok_empty("Training deleted"))
}

#[derive(Deserialize)]
struct RecordAttendancePayload {
    player_id: Uuid,
    status: AttendanceStatus,
}

async fn record_attendance(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path(training_id): Path<Uuid>,
    Json(payload): Json<RecordAttendancePayload>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let record = app_state
        .training_use_cases
        .record_attendance(
            &actor,
            training_id,
            payload.player_id,
            payload.status,
            Utc::now().naive_utc(),
        )
        .await?;
    Ok(response::ok("Attendance recorded", record))
}

async fn list_attendance(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path(training_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let sheet = app_state
        .training_use_cases
        .list_attendance(&actor, training_id)
        .await?;
    Ok(response::ok("Attendance", sheet))
}
