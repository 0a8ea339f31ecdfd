use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::HeaderMap,
    response::IntoResponse,
    routing::{get, post, put},
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    adapters::http::{app_state::AppState, response, routes::current_actor},
    app_error::AppResult,
    application::use_cases::payment::SetPaymentStatusInput,
    domain::entities::{payment::SubjectType, payment_status::PaymentStatus},
};

/// Session-scoped routes, merged into the `/sessions` nest.
pub fn session_router() -> Router<AppState> {
    Router::new()
        .route("/{session_id}/payments/schedule", get(schedule))
        .route(
            "/{session_id}/payments/{subject_type}/{subject_id}",
            get(list_for_subject),
        )
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", put(set_status))
        .route("/mark-paid", post(mark_paid))
}

#[derive(Deserialize)]
struct ScheduleQuery {
    #[serde(default = "default_subject_type")]
    subject_type: SubjectType,
}

fn default_subject_type() -> SubjectType {
    SubjectType::Player
}

async fn schedule(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path(session_id): Path<Uuid>,
    Query(query): Query<ScheduleQuery>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let schedule = app_state
        .payment_use_cases
        .generate_schedule(&actor, session_id, query.subject_type, Utc::now().naive_utc())
        .await?;
    Ok(response::ok("Payment schedule", schedule))
}

async fn list_for_subject(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path((session_id, subject_type, subject_id)): Path<(Uuid, SubjectType, Uuid)>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let payments = app_state
        .payment_use_cases
        .list_for_subject(&actor, session_id, subject_type, subject_id)
        .await?;
    Ok(response::ok("Payments", payments))
}

#[derive(Deserialize)]
struct SetStatusPayload {
    session_id: Uuid,
    subject_type: SubjectType,
    subject_id: Uuid,
    year: i32,
    month: i32,
    status: PaymentStatus,
    amount_cents: Option<i32>,
    notes: Option<String>,
}

async fn set_status(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Json(payload): Json<SetStatusPayload>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let payment = app_state
        .payment_use_cases
        .set_status(
            &actor,
            SetPaymentStatusInput {
                session_id: payload.session_id,
                subject_type: payload.subject_type,
                subject_id: payload.subject_id,
                year: payload.year,
                month: payload.month,
                status: payload.status,
                amount_cents: payload.amount_cents,
                notes: payload.notes,
            },
            Utc::now().naive_utc(),
        )
        .await?;
    Ok(response::ok("Payment updated", payment))
}

#[derive(Deserialize)]
struct MarkPaidPayload {
    session_id: Uuid,
    subject_type: SubjectType,
    subject_id: Uuid,
    year: i32,
    month: i32,
}

async fn mark_paid(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Json(payload): Json<MarkPaidPayload>,
) -> AppResult<impl IntoResponse> {
    let actor = current_actor(&jar, &headers, &app_state)?;
    let payment = app_state
        .payment_use_cases
        .mark_paid(
            &actor,
            payload.session_id,
            payload.subject_type,
            payload.subject_id,
            payload.year,
            payload.month,
            Utc::now().naive_utc(),
        )
        .await?;
    Ok(response::ok("Payment marked paid", payment))
}
