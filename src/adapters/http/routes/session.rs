use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    adapters::http::{app_state::AppState, response, routes::current_actor},
    app_error::AppResult,
    application::use_cases::session::{CreateSessionInput, UpdateSessionInput},
    domain::entities::{coach::Coach, player::Player},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_sessions).post(create_session))
        .route(
            "/{session_id}",
            get(get_session).patch(update_session).delete(delete_session),
        )
        .route("/{session_id}/roster", get(list_roster))
        .route(
            "/{session_id}/players/{player_id}",
            post(add_player).delete(remove_player),
        )
        .route(
            "/{session_id}/coaches/{coach_id}",
            post(add_coach).delete(remove_coach),
        )
}

#[derive(Deserialize)]
struct CreateSessionPayload {
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

async fn create_session(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Json(payload): Json<CreateSessionPayload>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let session = app_state
        .session_use_cases
        .create_session(
            &actor,
            CreateSessionInput {
                name: payload.name,
                start_date: payload.start_date,
                end_date: payload.end_date,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, response::ok("Session created", session)))
}

async fn list_sessions(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let sessions = app_state.session_use_cases.list_sessions(&actor).await?;
    Ok(response::ok("Sessions", sessions))
}

async fn get_session(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path(session_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let session = app_state
        .session_use_cases
        .get_session(&actor, session_id)
        .await?;
    Ok(response::ok("Session", session))
}

#[derive(Deserialize)]
struct UpdateSessionPayload {
    name: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

async fn update_session(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<UpdateSessionPayload>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let session = app_state
        .session_use_cases
        .update_session(
            &actor,
            session_id,
            UpdateSessionInput {
                name: payload.name,
                start_date: payload.start_date,
                end_date: payload.end_date,
            },
        )
        .await?;
    Ok(response::ok("Session updated", session))
}

async fn delete_session(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path(session_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    app_state
        .session_use_cases
        .delete_session(&actor, session_id)
        .await?;
    Ok(response::ok_empty("Session deleted"))
}

#[derive(Serialize)]
struct RosterData {
    players: Vec<Player>,
    coaches: Vec<Coach>,
}

async fn list_roster(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path(session_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let (players, coaches) = app_state
        .session_use_cases
        .list_roster(&actor, session_id)
        .await?;
    Ok(response::ok("Roster", RosterData { players, coaches }))
}

async fn add_player(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path((session_id, player_id)): Path<(Uuid, Uuid)>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    app_state
        .session_use_cases
        .add_player(&actor, session_id, player_id)
        .await?;
    Ok(response::ok_empty("Player added to roster"))
}

async fn remove_player(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path((session_id, player_id)): Path<(Uuid, Uuid)>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    app_state
        .session_use_cases
        .remove_player(&actor, session_id, player_id)
        .await?;
    Ok(response::ok_empty("Player removed from roster"))
}

async fn add_coach(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path((session_id, coach_id)): Path<(Uuid, Uuid)>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    app_state
        .session_use_cases
        .add_coach(&actor, session_id, coach_id)
        .await?;
    Ok(response::ok_empty("Coach added to roster"))
}

async fn remove_coach(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path((session_id, coach_id)): Path<(Uuid, Uuid)>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    app_state
        .session_use_cases
        .remove_coach(&actor, session_id, coach_id)
        .await?;
    Ok(response::ok_empty("Coach removed from roster"))
}
