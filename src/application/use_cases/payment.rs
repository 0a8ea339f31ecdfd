use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::billing::{MonthKey, default_schedule_status, months_between},
    application::use_cases::session::SessionRepo,
    application::validators::is_valid_month,
    domain::entities::{
        payment::{Payment, SubjectType},
        payment_status::PaymentStatus,
        role::Actor,
    },
};

/// Everything the repo needs to upsert one payment record. `paid_at` is
/// decided by the use case: `paid` stamps it, everything else clears it.
#[derive(Debug, Clone)]
pub struct UpsertPaymentRecord {
    pub session_id: Uuid,
    pub subject_type: SubjectType,
    pub subject_id: Uuid,
    pub year: i32,
    pub month: i32,
    pub status: PaymentStatus,
    pub amount_cents: i32,
    pub paid_at: Option<NaiveDateTime>,
    pub notes: Option<String>,
}

#[async_trait]
pub trait PaymentRepo: Send + Sync {
    /// Atomic upsert on the composite key
    /// (session_id, subject_type, subject_id, year, month).
    async fn upsert(&self, record: &UpsertPaymentRecord) -> AppResult<Payment>;
    async fn list_by_session_and_type(
        &self,
        session_id: Uuid,
        subject_type: SubjectType,
    ) -> AppResult<Vec<Payment>>;
    async fn list_for_subject(
        &self,
        session_id: Uuid,
        subject_type: SubjectType,
        subject_id: Uuid,
    ) -> AppResult<Vec<Payment>>;
}

#[derive(Debug, Clone)]
pub struct SetPaymentStatusInput {
    pub session_id: Uuid,
    pub subject_type: SubjectType,
    pub subject_id: Uuid,
    pub year: i32,
    pub month: i32,
    pub status: PaymentStatus,
    pub amount_cents: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleRow {
    pub year: i32,
    pub month: u32,
    pub status: PaymentStatus,
    pub amount_cents: i32,
    pub paid_at: Option<NaiveDateTime>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubjectSchedule {
    pub subject_id: Uuid,
    pub name: String,
    pub base_amount_cents: i32,
    pub rows: Vec<ScheduleRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentSchedule {
    pub session_id: Uuid,
    pub subject_type: SubjectType,
    pub months: Vec<MonthKey>,
    pub subjects: Vec<SubjectSchedule>,
}

#[derive(Clone)]
pub struct PaymentUseCases {
    payments: Arc<dyn PaymentRepo>,
    sessions: Arc<dyn SessionRepo>,
}

impl PaymentUseCases {
    pub fn new(payments: Arc<dyn PaymentRepo>, sessions: Arc<dyn SessionRepo>) -> Self {
        Self { payments, sessions }
    }

    /// Generates the session-wide schedule: every month between the session's
    /// start and end dates, crossed with the roster, merged with whatever
    /// payment records already exist.
    pub async fn generate_schedule(
        &self,
        actor: &Actor,
        session_id: Uuid,
        subject_type: SubjectType,
        now: NaiveDateTime,
    ) -> AppResult<PaymentSchedule> {
        actor.require_admin()?;
        let session = self
            .sessions
            .get(session_id)
            .await?
            .ok_or(AppError::NotFound)?;
        actor.require_team(session.team_id)?;

        let months = months_between(session.start_date, session.end_date);

        // (subject name, base amount) per rostered subject.
        let subjects: Vec<(Uuid, String, i32)> = match subject_type {
            SubjectType::Player => self
                .sessions
                .list_roster_players(session_id)
                .await?
                .into_iter()
                .map(|p| (p.id, p.name, p.monthly_fee_cents))
                .collect(),
            SubjectType::Coach => self
                .sessions
                .list_roster_coaches(session_id)
                .await?
                .into_iter()
                .map(|c| (c.id, c.name, c.agreed_salary_cents))
                .collect(),
        };

        let existing = self
            .payments
            .list_by_session_and_type(session_id, subject_type)
            .await?;
        let by_key: HashMap<(Uuid, i32, i32), Payment> = existing
            .into_iter()
            .map(|p| ((p.subject_id, p.year, p.month), p))
            .collect();

        let subjects = subjects
            .into_iter()
            .map(|(subject_id, name, base_amount_cents)| {
                let rows = months
                    .iter()
                    .map(|mk| match by_key.get(&(subject_id, mk.year, mk.month as i32)) {
                        Some(payment) => ScheduleRow {
                            year: mk.year,
                            month: mk.month,
                            status: payment.status,
                            amount_cents: payment.amount_cents,
                            paid_at: payment.paid_at,
                            notes: payment.notes.clone(),
                        },
                        None => ScheduleRow {
                            year: mk.year,
                            month: mk.month,
                            status: default_schedule_status(mk.year, mk.month, now),
                            amount_cents: base_amount_cents,
                            paid_at: None,
                            notes: None,
                        },
                    })
                    .collect();
                SubjectSchedule {
                    subject_id,
                    name,
                    base_amount_cents,
                    rows,
                }
            })
            .collect();

        Ok(PaymentSchedule {
            session_id,
            subject_type,
            months,
            subjects,
        })
    }

    /// Idempotent upsert on the composite key. `paid` always stamps
    /// `paid_at = now`; any other status clears it. No transition ordering is
    /// enforced.
    pub async fn set_status(
        &self,
        actor: &Actor,
        input: SetPaymentStatusInput,
        now: NaiveDateTime,
    ) -> AppResult<Payment> {
        actor.require_admin()?;
        if !is_valid_month(input.month) {
            return Err(AppError::validation("month", "Month must be between 1 and 12"));
        }
        if input.amount_cents.is_some_and(|a| a < 0) {
            return Err(AppError::validation(
                "amount_cents",
                "Amount must not be negative",
            ));
        }
        let session = self
            .sessions
            .get(input.session_id)
            .await?
            .ok_or(AppError::NotFound)?;
        actor.require_team(session.team_id)?;

        let amount_cents = match input.amount_cents {
            Some(amount) => amount,
            None => self
                .base_amount(input.session_id, input.subject_type, input.subject_id)
                .await?,
        };

        let paid_at = if input.status.is_paid() { Some(now) } else { None };

        self.payments
            .upsert(&UpsertPaymentRecord {
                session_id: input.session_id,
                subject_type: input.subject_type,
                subject_id: input.subject_id,
                year: input.year,
                month: input.month,
                status: input.status,
                amount_cents,
                paid_at,
                notes: input.notes,
            })
            .await
    }

    /// Shorthand used by the "mark paid" action.
    pub async fn mark_paid(
        &self,
        actor: &Actor,
        session_id: Uuid,
        subject_type: SubjectType,
        subject_id: Uuid,
        year: i32,
        month: i32,
        now: NaiveDateTime,
    ) -> AppResult<Payment> {
        self.set_status(
            actor,
            SetPaymentStatusInput {
                session_id,
                subject_type,
                subject_id,
                year,
                month,
                status: PaymentStatus::Paid,
                amount_cents: None,
                notes: None,
            },
            now,
        )
        .await
    }

    /// A player's own rows (or any subject's, for staff).
    pub async fn list_for_subject(
        &self,
        actor: &Actor,
        session_id: Uuid,
        subject_type: SubjectType,
        subject_id: Uuid,
    ) -> AppResult<Vec<Payment>> {
        match subject_type {
            SubjectType::Player => actor.may_view_player(subject_id)?,
            SubjectType::Coach => actor.require_staff()?,
        }
        let session = self
            .sessions
            .get(session_id)
            .await?
            .ok_or(AppError::NotFound)?;
        actor.require_team(session.team_id)?;
        self.payments
            .list_for_subject(session_id, subject_type, subject_id)
            .await
    }

    async fn base_amount(
        &self,
        session_id: Uuid,
        subject_type: SubjectType,
        subject_id: Uuid,
    ) -> AppResult<i32> {
        match subject_type {
            SubjectType::Player => self
                .sessions
                .list_roster_players(session_id)
                .await?
                .into_iter()
                .find(|p| p.id == subject_id)
                .map(|p| p.monthly_fee_cents)
                .ok_or(AppError::NotFound),
            SubjectType::Coach => self
                .sessions
                .list_roster_coaches(session_id)
                .await?
                .into_iter()
                .find(|c| c.id == subject_id)
                .map(|c| c.agreed_salary_cents)
                .ok_or(AppError::NotFound),
        }
    }
}
