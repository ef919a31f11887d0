use chrono::NaiveDate;
use serde::Serialize;

use super::temporal::{is_expired, is_expiring_within, EXPIRY_WARNING_DAYS};

/// Lifecycle of a dated document as seen from a given evaluation day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Valid,
    ExpiringSoon,
    Expired,
    Missing,
}

impl DocumentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Valid => "Valido",
            Self::ExpiringSoon => "In scadenza",
            Self::Expired => "Scaduto",
            Self::Missing => "Mancante",
        }
    }
}

/// Classifies a deadline. A document expiring exactly today is still valid
/// under the strict predicates; it turns expired at the next day boundary.
pub fn deadline_status(deadline: Option<NaiveDate>, today: NaiveDate) -> DocumentStatus {
    match deadline {
        None => DocumentStatus::Missing,
        Some(date) if is_expired(date, today) => DocumentStatus::Expired,
        Some(date) if is_expiring_within(date, today, EXPIRY_WARNING_DAYS) => {
            DocumentStatus::ExpiringSoon
        }
        Some(_) => DocumentStatus::Valid,
    }
}
