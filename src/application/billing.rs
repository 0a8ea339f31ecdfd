//! Billing derivations: per-player monthly status and the month axis of a
//! session payment schedule. Everything here is pure date arithmetic over
//! already-fetched data; callers inject the current date/instant.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::domain::entities::payment_status::PaymentStatus;

/// Days into the month before a missing payment counts as overdue.
pub const GRACE_DAYS: i64 = 10;

/// Derived (never stored) classification of a player's payment standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingStatus {
    Na,
    NotDue,
    Paid,
    Pending,
    Overdue,
    Error,
}

impl BillingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BillingStatus::Na => "No monthly fee",
            BillingStatus::NotDue => "First month",
            BillingStatus::Paid => "Paid",
            BillingStatus::Pending => "Pending",
            BillingStatus::Overdue => "Overdue",
            BillingStatus::Error => "Error",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BillingReport {
    pub status: BillingStatus,
    pub label: &'static str,
    pub due_month: Option<String>,
    pub days_overdue: i64,
}

impl BillingReport {
    fn of(status: BillingStatus) -> Self {
        Self {
            status,
            label: status.label(),
            due_month: None,
            days_overdue: 0,
        }
    }
}

/// Monthly billing status for one player.
///
/// Never fails: any arithmetic edge case collapses to the `error` sentinel so
/// that one bad record cannot take down a roster listing.
pub fn billing_report(
    monthly_fee_cents: i32,
    created_at: NaiveDateTime,
    last_payment_date: Option<NaiveDateTime>,
    today: NaiveDate,
) -> BillingReport {
    match compute_report(monthly_fee_cents, created_at, last_payment_date, today) {
        Some(report) => report,
        None => {
            tracing::warn!(
                %created_at,
                %today,
                "Billing status computation failed, reporting error sentinel"
            );
            BillingReport::of(BillingStatus::Error)
        }
    }
}

fn compute_report(
    monthly_fee_cents: i32,
    created_at: NaiveDateTime,
    last_payment_date: Option<NaiveDateTime>,
    today: NaiveDate,
) -> Option<BillingReport> {
    if monthly_fee_cents <= 0 {
        return Some(BillingReport::of(BillingStatus::Na));
    }

    // First month free: nothing is due until one calendar month after signup.
    let free_until = created_at.date().checked_add_months(Months::new(1))?;
    if today < free_until {
        return Some(BillingReport::of(BillingStatus::NotDue));
    }

    let first_of_month = today.with_day(1)?;
    let due_month = Some(format!("{:04}-{:02}", today.year(), today.month()));

    if let Some(last_payment) = last_payment_date
        && last_payment.date() >= first_of_month
    {
        return Some(BillingReport {
            due_month,
            ..BillingReport::of(BillingStatus::Paid)
        });
    }

    let elapsed = (today - first_of_month).num_days();
    if elapsed <= GRACE_DAYS {
        Some(BillingReport {
            due_month,
            ..BillingReport::of(BillingStatus::Pending)
        })
    } else {
        Some(BillingReport {
            due_month,
            days_overdue: elapsed - GRACE_DAYS,
            ..BillingReport::of(BillingStatus::Overdue)
        })
    }
}

/// One calendar month on the schedule axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Every calendar month from the start month through the end month,
/// inclusive. Empty when the range is inverted or degenerate.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> Vec<MonthKey> {
    let mut months = Vec::new();
    let Some(mut cursor) = start.with_day(1) else {
        return months;
    };
    while cursor <= end {
        months.push(MonthKey {
            year: cursor.year(),
            month: cursor.month(),
        });
        match cursor.checked_add_months(Months::new(1)) {
            Some(next) => cursor = next,
            None => break,
        }
    }
    months
}

/// Last instant of a month (23:59:59.999); a month is not "past" until this
/// has elapsed.
pub fn month_end_instant(year: i32, month: u32) -> Option<NaiveDateTime> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last_day = first
        .checked_add_months(Months::new(1))?
        .pred_opt()?;
    let last_tick = NaiveTime::from_hms_milli_opt(23, 59, 59, 999)?;
    Some(last_day.and_time(last_tick))
}

/// Status for a schedule cell with no stored payment record.
pub fn default_schedule_status(year: i32, month: u32, now: NaiveDateTime) -> PaymentStatus {
    match month_end_instant(year, month) {
        Some(end) if end < now => PaymentStatus::Delayed,
        _ => PaymentStatus::Pending,
    }
}
