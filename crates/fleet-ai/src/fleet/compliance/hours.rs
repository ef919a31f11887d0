//! Driving-hour ceilings from Regulation (CE) 561/2006.

use serde::Serialize;

use crate::fleet::domain::{Driver, DriverId};

pub const DAILY_LIMIT_HOURS: f64 = 9.0;
/// Twice a week the daily ceiling may stretch to ten hours.
pub const DAILY_EXTENDED_LIMIT_HOURS: f64 = 10.0;
pub const WEEKLY_LIMIT_HOURS: f64 = 56.0;
pub const BIWEEKLY_LIMIT_HOURS: f64 = 90.0;
pub const CONTINUOUS_LIMIT_HOURS: f64 = 4.5;
pub const MIN_BREAK_MINUTES: u32 = 45;
pub const MIN_DAILY_REST_HOURS: f64 = 11.0;
pub const MIN_WEEKLY_REST_HOURS: f64 = 45.0;

/// Share of a ceiling at which a counter starts to warn.
pub const WARNING_RATIO: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HoursStatus {
    Ok,
    Warning,
    Critical,
}

/// Compares a raw counter against a ceiling. Counters are not clamped, so
/// anything at or past the ceiling is critical even when the feed overshoots.
pub fn evaluate_hours(used: f64, limit: f64) -> HoursStatus {
    if used >= limit {
        HoursStatus::Critical
    } else if used / limit >= WARNING_RATIO {
        HoursStatus::Warning
    } else {
        HoursStatus::Ok
    }
}

/// Hours left under a ceiling, floored at zero for display.
pub fn remaining_hours(used: f64, limit: f64) -> f64 {
    (limit - used).max(0.0)
}

/// Live driving-hours picture for a single driver, as exposed on the status
/// endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct DriverStatusView {
    pub driver_id: DriverId,
    pub name: String,
    pub daily_hours_used: f64,
    pub daily_hours_remaining: f64,
    pub weekly_hours_used: f64,
    pub weekly_hours_remaining: f64,
    pub break_required: bool,
    pub can_drive: bool,
    pub alerts: Vec<String>,
}

impl DriverStatusView {
    pub fn for_driver(driver: &Driver) -> Self {
        let mut alerts = Vec::new();
        if driver.daily_hours_used >= DAILY_LIMIT_HOURS {
            alerts.push("LIMITE GIORNALIERO RAGGIUNTO — Riposo obbligatorio".to_string());
        } else if driver.daily_hours_used >= DAILY_LIMIT_HOURS * WARNING_RATIO {
            alerts.push("Avviso: 80% del limite giornaliero raggiunto".to_string());
        }
        if driver.weekly_hours_used >= WEEKLY_LIMIT_HOURS * 0.9 {
            alerts.push("Avviso: 90% del limite settimanale raggiunto".to_string());
        }

        Self {
            driver_id: driver.id.clone(),
            name: driver.full_name(),
            daily_hours_used: driver.daily_hours_used,
            daily_hours_remaining: remaining_hours(driver.daily_hours_used, DAILY_LIMIT_HOURS),
            weekly_hours_used: driver.weekly_hours_used,
            weekly_hours_remaining: remaining_hours(driver.weekly_hours_used, WEEKLY_LIMIT_HOURS),
            break_required: driver.daily_hours_used >= CONTINUOUS_LIMIT_HOURS,
            can_drive: driver.daily_hours_used < DAILY_LIMIT_HOURS
                && driver.weekly_hours_used < WEEKLY_LIMIT_HOURS,
            alerts,
        }
    }
}
