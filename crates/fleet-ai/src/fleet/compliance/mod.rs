//! Compliance evaluation over a fleet snapshot.
//!
//! Every rule here is a pure function of the snapshot plus an explicit
//! evaluation day, and every outcome is a finding in the report, never an
//! error. The HTTP surface in [`router`] is the only layer that reaches for
//! the wall clock.

pub mod documents;
pub mod finding;
pub mod hours;
pub mod report;
pub mod router;
pub mod rules;
pub mod tachograph;
pub mod temporal;

#[cfg(test)]
mod tests;

pub use documents::{deadline_status, DocumentStatus};
pub use finding::{EntityRef, Finding, Severity};
pub use hours::{evaluate_hours, DriverStatusView, HoursStatus};
pub use report::{ComplianceReport, CLEAN_REPORT};
pub use router::{compliance_router, ComplianceReportRequest};
pub use tachograph::{evaluate_download_age, retrofit_required, DownloadStatus};
