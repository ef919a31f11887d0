//! Tachograph duties under Regulation (EU) 165/2014: the card-download
//! cadence and the Smart V2 retrofit wave for older recording units.

use chrono::NaiveDate;
use serde::Serialize;

use super::temporal::days_since;
use crate::fleet::domain::TachographType;

/// Driver card data must be downloaded at least every 28 days.
pub const DOWNLOAD_INTERVAL_DAYS: i64 = 28;
/// Age at which an upcoming download is worth chasing.
pub const DOWNLOAD_WARNING_DAYS: i64 = 21;
/// Vehicle unit data follows a longer, 90-day cadence.
pub const VEHICLE_DOWNLOAD_INTERVAL_DAYS: i64 = 90;

/// Retrofit deadline for analog and first-generation digital units, as it
/// appears in operator-facing text.
pub const RETROFIT_DEADLINE_LABEL: &str = "01/07/2026";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DownloadStatus {
    Ok,
    Warning,
    Overdue,
}

/// Whole days since the last recorded card download, if there ever was one.
pub fn download_age_days(last_download: Option<NaiveDate>, today: NaiveDate) -> Option<i64> {
    last_download.map(|date| days_since(date, today))
}

/// Classifies the download age. No recorded download evaluates as overdue.
pub fn evaluate_download_age(last_download: Option<NaiveDate>, today: NaiveDate) -> DownloadStatus {
    match download_age_days(last_download, today) {
        None => DownloadStatus::Overdue,
        Some(age) if age > DOWNLOAD_INTERVAL_DAYS => DownloadStatus::Overdue,
        Some(age) if age > DOWNLOAD_WARNING_DAYS => DownloadStatus::Warning,
        Some(_) => DownloadStatus::Ok,
    }
}

/// Analog and first-generation digital units fall under the Smart V2
/// retrofit obligation; later generations are already compliant.
pub const fn retrofit_required(tachograph: TachographType) -> bool {
    matches!(tachograph, TachographType::Analog | TachographType::DigitalV1)
}
