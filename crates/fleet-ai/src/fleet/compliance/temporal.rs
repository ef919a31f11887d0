//! Calendar arithmetic shared by the deadline rules.
//!
//! Everything works on whole days (`NaiveDate`), so partial days round toward
//! urgency by construction: a deadline later today is zero days away, and a
//! date becomes expired only once it is strictly in the past.

use chrono::NaiveDate;

/// Window in which an upcoming deadline is worth flagging.
pub const EXPIRY_WARNING_DAYS: i64 = 30;

pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    date.signed_duration_since(today).num_days()
}

pub fn days_since(date: NaiveDate, today: NaiveDate) -> i64 {
    today.signed_duration_since(date).num_days()
}

pub fn is_expired(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

pub fn is_expiring_within(date: NaiveDate, today: NaiveDate, window_days: i64) -> bool {
    let remaining = days_until(date, today);
    remaining > 0 && remaining <= window_days
}

/// Italian date rendering used across reports and prompts.
pub fn format_date_it(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
