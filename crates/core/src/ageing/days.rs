//! Overdue-day calculation.

use chrono::NaiveDate;

/// Whole days `due_date` lies in the past relative to `today`, floored at zero.
///
/// Both arguments are calendar dates, so the day difference is already whole
/// and `ceil` is the identity. A document due today is 0 days overdue. Every
/// bucket assignment and every "N days overdue" badge goes through here.
#[must_use]
pub fn days_overdue(due_date: NaiveDate, today: NaiveDate) -> i64 {
    today.signed_duration_since(due_date).num_days().max(0)
}

/// [`days_overdue`] for an optional due date; no due date is never overdue.
#[must_use]
pub fn days_overdue_opt(due_date: Option<NaiveDate>, today: NaiveDate) -> i64 {
    due_date.map_or(0, |due| days_overdue(due, today))
}
