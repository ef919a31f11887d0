use serde::Serialize;

use crate::fleet::domain::{DriverId, TripId, VehicleId};

/// Finding categories, each mapped to the Italian prefix it carries in the
/// rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Blocking,
    Urgent,
    LimitReached,
    Warning,
    Violation,
    Obligation,
    Reminder,
}

impl Severity {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Blocking,
            Self::Urgent,
            Self::LimitReached,
            Self::Warning,
            Self::Violation,
            Self::Obligation,
            Self::Reminder,
        ]
    }

    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Blocking => "BLOCCANTE",
            Self::Urgent => "URGENTE",
            Self::LimitReached => "LIMITE",
            Self::Warning => "ATTENZIONE",
            Self::Violation => "VIOLAZIONE",
            Self::Obligation => "OBBLIGO",
            Self::Reminder => "DOCUMENTO",
        }
    }
}

/// Entity a finding refers back to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityRef {
    Driver(DriverId),
    Vehicle(VehicleId),
    Trip(TripId),
}

/// One compliance finding. Findings are report data, never errors: a fully
/// non-compliant fleet still evaluates successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Finding {
    /// Outcome of one of the evaluation rules.
    Rule {
        severity: Severity,
        subject: EntityRef,
        detail: String,
    },
    /// Upstream per-trip check result, re-emitted verbatim.
    TripIssue { trip: TripId, issue: String },
}

impl Finding {
    pub fn severity(&self) -> Option<Severity> {
        match self {
            Finding::Rule { severity, .. } => Some(*severity),
            Finding::TripIssue { .. } => None,
        }
    }

    /// Single report line in the fixed `PREFIX: detail` shape; trip issues
    /// keep their upstream categorization under the `VIAGGIO` banner.
    pub fn rendered(&self) -> String {
        match self {
            Finding::Rule {
                severity, detail, ..
            } => format!("{}: {}", severity.prefix(), detail),
            Finding::TripIssue { trip, issue } => format!("VIAGGIO {}: {}", trip.0, issue),
        }
    }
}
