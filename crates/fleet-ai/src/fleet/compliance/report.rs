use chrono::NaiveDate;
use serde::Serialize;

use super::finding::Finding;
use super::rules::{driver_findings, trip_findings, vehicle_findings};
use crate::fleet::snapshot::FleetSnapshot;

/// Fixed all-clear line. Callers branch on [`ComplianceReport::is_clean`],
/// never on string emptiness.
pub const CLEAN_REPORT: &str = "Nessun problema di compliance rilevato.";

/// Ordered result of evaluating a whole snapshot: every driver, then every
/// vehicle, then every trip, each in snapshot order. Building the same
/// snapshot for the same day yields byte-identical output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceReport {
    findings: Vec<Finding>,
}

impl ComplianceReport {
    pub fn build(snapshot: &FleetSnapshot, today: NaiveDate) -> Self {
        let mut findings = Vec::new();
        for driver in &snapshot.drivers {
            findings.extend(driver_findings(driver, today));
        }
        for vehicle in &snapshot.vehicles {
            findings.extend(vehicle_findings(vehicle, today));
        }
        for trip in &snapshot.trips {
            findings.extend(trip_findings(trip, snapshot));
        }
        Self { findings }
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Newline-joined report lines, or the all-clear sentinel.
    pub fn render(&self) -> String {
        if self.is_clean() {
            CLEAN_REPORT.to_string()
        } else {
            self.findings
                .iter()
                .map(Finding::rendered)
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}
