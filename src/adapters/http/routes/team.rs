use axum::{
    Json, Router,
    extract::{Multipart, State},
    http::HeaderMap,
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::{
    adapters::http::{app_state::AppState, response, routes::current_actor, uploads},
    app_error::AppResult,
    application::use_cases::team::UpdateTeamInput,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_team).patch(update_team))
        .route("/logo", post(upload_logo))
}

async fn get_team(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let team = app_state.team_use_cases.get_team(&actor).await?;
    Ok(response::ok("Team", team))
}

#[derive(Deserialize)]
struct UpdateTeamPayload {
    name: Option<String>,
    sport: Option<String>,
}

async fn update_team(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Json(payload): Json<UpdateTeamPayload>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let team = app_state
        .team_use_cases
        .update_team(
            &actor,
            UpdateTeamInput {
                name: payload.name,
                sport: payload.sport,
            },
        )
        .await?;
    Ok(response::ok("Team updated", team))
}

async fn upload_logo(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let path = uploads::save_image(&app_state.config.upload_dir, "team-logo", multipart).await?;
    app_state.team_use_cases.set_logo(&actor, &path).await?;
    Ok(response::ok("Logo uploaded", path))
}
