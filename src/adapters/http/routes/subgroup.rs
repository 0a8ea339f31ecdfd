use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, patch, post},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    adapters::http::{app_state::AppState, response, routes::current_actor},
    app_error::AppResult,
    application::use_cases::subgroup::{CreateSubgroupInput, UpdateSubgroupInput},
};

/// Session-scoped routes, merged into the `/sessions` nest.
pub fn session_router() -> Router<AppState> {
    Router::new().route(
        "/{session_id}/subgroups",
        get(list_subgroups).post(create_subgroup),
    )
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{subgroup_id}",
            patch(update_subgroup).delete(delete_subgroup),
        )
        .route("/{subgroup_id}/players", get(list_members))
        .route(
            "/{subgroup_id}/players/{player_id}",
            post(assign_player).delete(unassign_player),
        )
}

#[derive(Deserialize)]
struct CreateSubgroupPayload {
    name: String,
    coach_id: Option<Uuid>,
}

async fn create_subgroup(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<CreateSubgroupPayload>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let subgroup = app_state
        .subgroup_use_cases
        .create_subgroup(
            &actor,
            session_id,
            CreateSubgroupInput {
                name: payload.name,
                coach_id: payload.coach_id,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, response::ok("Subgroup created", subgroup)))
}

async fn list_subgroups(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path(session_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let subgroups = app_state
        .subgroup_use_cases
        .list_subgroups(&actor, session_id)
        .await?;
    Ok(response::ok("Subgroups", subgroups))
}

#[derive(Deserialize)]
struct UpdateSubgroupPayload {
    name: Option<String>,
    /// Present-but-null clears the coach; absent leaves it untouched.
    #[serde(default, deserialize_with = "present_or_null")]
    coach_id: Option<Option<Uuid>>,
}

fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<Uuid>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(deserializer).map(Some)
}

async fn update_subgroup(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path(subgroup_id): Path<Uuid>,
    Json(payload): Json<UpdateSubgroupPayload>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let subgroup = app_state
        .subgroup_use_cases
        .update_subgroup(
            &actor,
            subgroup_id,
            UpdateSubgroupInput {
                name: payload.name,
                coach_id: payload.coach_id,
            },
        )
        .await?;
    Ok(response::ok("Subgroup updated", subgroup))
}

async fn delete_subgroup(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path(subgroup_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    app_state
        .subgroup_use_cases
        .delete_subgroup(&actor, subgroup_id)
        .await?;
    Ok(response::ok_empty("Subgroup deleted"))
}

async fn assign_player(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path((subgroup_id, player_id)): Path<(Uuid, Uuid)>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    app_state
        .subgroup_use_cases
        .assign_player(&actor, subgroup_id, player_id)
        .await?;
    Ok(response::ok_empty("Player assigned"))
}

async fn unassign_player(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path((subgroup_id, player_id)): Path<(Uuid, Uuid)>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    app_state
        .subgroup_use_cases
        .unassign_player(&actor, subgroup_id, player_id)
        .await?;
    Ok(response::ok_empty("Player unassigned"))
}

async fn list_members(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path(subgroup_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let members = app_state
        .subgroup_use_cases
        .list_members(&actor, subgroup_id)
        .await?;
    Ok(response::ok("Members", members))
}
