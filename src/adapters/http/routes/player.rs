use axum::{
    Json, Router,
    extract::{Multipart, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;
use chrono::{NaiveDateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    adapters::http::{app_state::AppState, response, routes::current_actor, uploads},
    app_error::AppResult,
    application::use_cases::player::{CreatePlayerInput, UpdatePlayerInput},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_players).post(create_player))
        .route(
            "/{player_id}",
            get(get_player).patch(update_player).delete(delete_player),
        )
        .route("/{player_id}/photo", post(upload_photo))
}

#[derive(Deserialize)]
struct CreatePlayerPayload {
    name: String,
    email: Option<String>,
    password: Option<String>,
    #[serde(default)]
    monthly_fee_cents: i32,
    #[serde(default)]
    inscription_fee_cents: i32,
}

async fn create_player(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Json(payload): Json<CreatePlayerPayload>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let player = app_state
        .player_use_cases
        .create_player(
            &actor,
            CreatePlayerInput {
                name: payload.name,
                email: payload.email,
                password: payload.password,
                monthly_fee_cents: payload.monthly_fee_cents,
                inscription_fee_cents: payload.inscription_fee_cents,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, response::ok("Player created", player)))
}

async fn list_players(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let players = app_state
        .player_use_cases
        .list_players(&actor, Utc::now().date_naive())
        .await?;
    Ok(response::ok("Players", players))
}

async fn get_player(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path(player_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let player = app_state
        .player_use_cases
        .get_player(&actor, player_id, Utc::now().date_naive())
        .await?;
    Ok(response::ok("Player", player))
}

#[derive(Deserialize)]
struct UpdatePlayerPayload {
    name: Option<String>,
    email: Option<String>,
    monthly_fee_cents: Option<i32>,
    inscription_fee_cents: Option<i32>,
    inscription_paid_at: Option<NaiveDateTime>,
    last_payment_date: Option<NaiveDateTime>,
}

async fn update_player(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path(player_id): Path<Uuid>,
    Json(payload): Json<UpdatePlayerPayload>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let player = app_state
        .player_use_cases
        .update_player(
            &actor,
            player_id,
            UpdatePlayerInput {
                name: payload.name,
                email: payload.email,
                monthly_fee_cents: payload.monthly_fee_cents,
                inscription_fee_cents: payload.inscription_fee_cents,
                inscription_paid_at: payload.inscription_paid_at,
                last_payment_date: payload.last_payment_date,
            },
        )
        .await?;
    Ok(response::ok("Player updated", player))
}

async fn delete_player(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path(player_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    app_state
        .player_use_cases
        .delete_player(&actor, player_id)
        .await?;
    Ok(response::ok_empty("Player deleted"))
}

async fn upload_photo(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path(player_id): Path<Uuid>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let path = uploads::save_image(&app_state.config.upload_dir, "player", multipart).await?;
    app_state
        .player_use_cases
        .set_photo(&actor, player_id, &path)
        .await?;
    Ok(response::ok("Photo uploaded", path))
}
