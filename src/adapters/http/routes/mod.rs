pub mod auth;
pub mod coach;
pub mod event;
pub mod payment;
pub mod player;
pub mod session;
pub mod subgroup;
pub mod team;
pub mod training;

use axum::Router;
use axum::http::HeaderMap;
use axum_extra::extract::cookie::CookieJar;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    application::jwt,
    domain::entities::role::Actor,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/team", team::router())
        .nest("/players", player::router())
        .nest("/coaches", coach::router())
        .nest(
            "/sessions",
            session::router()
                .merge(subgroup::session_router())
                .merge(training::session_router())
                .merge(payment::session_router()),
        )
        .nest("/subgroups", subgroup::router())
        .nest("/trainings", training::router())
        .nest("/payments", payment::router())
        .nest("/events", event::router())
}

/// Resolves the caller from the `access_token` cookie, falling back to an
/// `Authorization: Bearer` header.
pub(crate) fn current_actor(
    jar: &CookieJar,
    headers: &HeaderMap,
    app_state: &AppState,
) -> AppResult<Actor> {
    if let Some(cookie) = jar.get("access_token") {
        return jwt::verify(cookie.value(), &app_state.config.jwt_secret);
    }
    let token = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or(AppError::InvalidCredentials)?;
    jwt::verify(token, &app_state.config.jwt_secret)
}
