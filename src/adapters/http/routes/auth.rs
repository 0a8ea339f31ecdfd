use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use time;
use uuid::Uuid;

use crate::{
    adapters::http::{app_state::AppState, response, routes::current_actor},
    app_error::AppResult,
    application::jwt,
    application::use_cases::auth::RegisterTeamInput,
    domain::entities::role::Role,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me))
        .route("/logout", post(logout))
}

#[derive(Deserialize)]
struct RegisterPayload {
    team_name: String,
    sport: Option<String>,
    admin_name: String,
    email: String,
    password: String,
}

async fn register(
    State(app_state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> AppResult<impl IntoResponse> {
    let registered = app_state
        .auth_use_cases
        .register_team(RegisterTeamInput {
            team_name: payload.team_name,
            sport: payload.sport,
            admin_name: payload.admin_name,
            email: payload.email,
            password: payload.password,
        })
        .await?;
    Ok((StatusCode::CREATED, response::ok("Team registered", registered)))
}

#[derive(Deserialize)]
struct LoginPayload {
    email: String,
    password: String,
    role: Role,
}

#[derive(Serialize)]
struct LoginData {
    token: String,
    role: Role,
    user_id: Uuid,
    team_id: Uuid,
}

async fn login(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> AppResult<impl IntoResponse> {
    let actor = app_state
        .auth_use_cases
        .login(&payload.email, &payload.password, payload.role)
        .await?;

    let token = jwt::issue(
        &actor,
        &app_state.config.jwt_secret,
        app_state.config.access_token_ttl,
    )?;

    let mut headers = HeaderMap::new();
    let access_cookie = Cookie::build(("access_token", token.clone()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(app_state.config.access_token_ttl)
        .build();
    headers.append("set-cookie", access_cookie.to_string().parse().unwrap());

    Ok((
        headers,
        response::ok(
            "Logged in",
            LoginData {
                token,
                role: actor.role(),
                user_id: actor.id(),
                team_id: actor.team_id(),
            },
        ),
    ))
}

#[derive(Serialize)]
struct MeData {
    user_id: Uuid,
    team_id: Uuid,
    role: Role,
}

async fn me(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    Ok(response::ok(
        "Authenticated",
        MeData {
            user_id: actor.id(),
            team_id: actor.team_id(),
            role: actor.role(),
        },
    ))
}

async fn logout() -> impl IntoResponse {
    let mut headers = HeaderMap::new();
    let access = Cookie::build(("access_token", ""))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::seconds(0))
        .build();
    headers.append("set-cookie", access.to_string().parse().unwrap());
    (headers, response::ok_empty("Logged out"))
}
