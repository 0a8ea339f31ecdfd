use axum::{
    Json, Router,
    extract::{Multipart, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    adapters::http::{app_state::AppState, response, routes::current_actor, uploads},
    app_error::AppResult,
    application::use_cases::coach::{CreateCoachInput, UpdateCoachInput},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_coaches).post(create_coach))
        .route(
            "/{coach_id}",
            get(get_coach).patch(update_coach).delete(delete_coach),
        )
        .route("/{coach_id}/photo", post(upload_photo))
}

#[derive(Deserialize)]
struct CreateCoachPayload {
    name: String,
    email: Option<String>,
    password: Option<String>,
    #[serde(default)]
    agreed_salary_cents: i32,
}

async fn create_coach(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Json(payload): Json<CreateCoachPayload>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let coach = app_state
        .coach_use_cases
        .create_coach(
            &actor,
            CreateCoachInput {
                name: payload.name,
                email: payload.email,
                password: payload.password,
                agreed_salary_cents: payload.agreed_salary_cents,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, response::ok("Coach created", coach)))
}

async fn list_coaches(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let coaches = app_state.coach_use_cases.list_coaches(&actor).await?;
    Ok(response::ok("Coaches", coaches))
}

async fn get_coach(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path(coach_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let coach = app_state.coach_use_cases.get_coach(&actor, coach_id).await?;
    Ok(response::ok("Coach", coach))
}

#[derive(Deserialize)]
struct UpdateCoachPayload {
    name: Option<String>,
    email: Option<String>,
    agreed_salary_cents: Option<i32>,
}

async fn update_coach(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path(coach_id): Path<Uuid>,
    Json(payload): Json<UpdateCoachPayload>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let coach = app_state
        .coach_use_cases
        .update_coach(
            &actor,
            coach_id,
            UpdateCoachInput {
                name: payload.name,
                email: payload.email,
                agreed_salary_cents: payload.agreed_salary_cents,
            },
        )
        .await?;
    Ok(response::ok("Coach updated", coach))
}

async fn delete_coach(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path(coach_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    app_state
        .coach_use_cases
        .delete_coach(&actor, coach_id)
        .await?;
    Ok(response::ok_empty("Coach deleted"))
}

async fn upload_photo(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path(coach_id): Path<Uuid>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let path = uploads::save_image(&app_state.config.upload_dir, "coach", multipart).await?;
    app_state
        .coach_use_cases
        .set_photo(&actor, coach_id, &path)
        .await?;
    Ok(response::ok("Photo uploaded", path))
}
