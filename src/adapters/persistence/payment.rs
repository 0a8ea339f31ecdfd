use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    application::use_cases::payment::{PaymentRepo, UpsertPaymentRecord},
    domain::entities::payment::{Payment, SubjectType},
};

fn row_to_payment(row: sqlx::postgres::PgRow) -> Payment {
    Payment {
        id: row.get("id"),
        session_id: row.get("session_id"),
        subject_type: row.get("subject_type"),
        subject_id: row.get("subject_id"),
        year: row.get("year"),
        month: row.get("month"),
        status: row.get("status"),
        amount_cents: row.get("amount_cents"),
        paid_at: row.get("paid_at"),
        notes: row.get("notes"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

const SELECT_COLS: &str = "id, session_id, subject_type, subject_id, year, month, status, \
     amount_cents, paid_at, notes, created_at, updated_at";

#[async_trait]
impl PaymentRepo for PostgresPersistence {
    async fn upsert(&self, record: &UpsertPaymentRecord) -> AppResult<Payment> {
        let row = sqlx::query(&format!(
            "INSERT INTO payments
                (id, session_id, subject_type, subject_id, year, month,
                 status, amount_cents, paid_at, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             ON CONFLICT (session_id, subject_type, subject_id, year, month) DO UPDATE SET
                status = EXCLUDED.status,
                amount_cents = EXCLUDED.amount_cents,
                paid_at = EXCLUDED.paid_at,
                notes = EXCLUDED.notes,
                updated_at = CURRENT_TIMESTAMP
             RETURNING {}",
            SELECT_COLS
        ))
        .bind(Uuid::new_v4())
        .bind(record.session_id)
        .bind(record.subject_type)
        .bind(record.subject_id)
        .bind(record.year)
        .bind(record.month)
        .bind(record.status)
        .bind(record.amount_cents)
        .bind(record.paid_at)
        .bind(&record.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(row_to_payment(row))
    }

    async fn list_by_session_and_type(
        &self,
        session_id: Uuid,
        subject_type: SubjectType,
    ) -> AppResult<Vec<Payment>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM payments
             WHERE session_id = $1 AND subject_type = $2
             ORDER BY year, month",
            SELECT_COLS
        ))
        .bind(session_id)
        .bind(subject_type)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(rows.into_iter().map(row_to_payment).collect())
    }

    async fn list_for_subject(
        &self,
        session_id: Uuid,
        subject_type: SubjectType,
        subject_id: Uuid,
    ) -> AppResult<Vec<Payment>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM payments
             WHERE session_id = $1 AND subject_type = $2 AND subject_id = $3
             ORDER BY year, month",
            SELECT_COLS
        ))
        .bind(session_id)
        .bind(subject_type)
        .bind(subject_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(rows.into_iter().map(row_to_payment).collect())
    }
}
