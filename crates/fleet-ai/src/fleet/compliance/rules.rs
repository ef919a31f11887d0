//! The per-entity rule sets. Each function folds one entity (and, for trips,
//! the surrounding snapshot) into an ordered list of findings; the report
//! assembler concatenates them without reordering.

use chrono::NaiveDate;

use super::documents::{deadline_status, DocumentStatus};
use super::finding::{EntityRef, Finding, Severity};
use super::hours::{
    evaluate_hours, HoursStatus, BIWEEKLY_LIMIT_HOURS, DAILY_LIMIT_HOURS, WEEKLY_LIMIT_HOURS,
};
use super::tachograph::{
    download_age_days, evaluate_download_age, retrofit_required, DownloadStatus,
    DOWNLOAD_INTERVAL_DAYS, RETROFIT_DEADLINE_LABEL,
};
use super::temporal::days_until;
use crate::fleet::domain::{Driver, Trip, Vehicle};
use crate::fleet::snapshot::FleetSnapshot;

/// Deadline rule shared by driver documents and vehicle documents: expired
/// documents block outright, ones inside the warning window name the exact
/// days left. `expired_word` carries the Italian gender of the document.
fn expiry_finding(
    subject: EntityRef,
    label: &str,
    expired_word: &str,
    deadline: NaiveDate,
    today: NaiveDate,
) -> Option<Finding> {
    match deadline_status(Some(deadline), today) {
        DocumentStatus::Expired => Some(Finding::Rule {
            severity: Severity::Blocking,
            subject,
            detail: format!("{label} {expired_word}"),
        }),
        DocumentStatus::ExpiringSoon => Some(Finding::Rule {
            severity: Severity::Urgent,
            subject,
            detail: format!("{label} scade tra {} giorni", days_until(deadline, today)),
        }),
        DocumentStatus::Valid | DocumentStatus::Missing => None,
    }
}

fn hours_finding(
    driver: &Driver,
    used: f64,
    limit: f64,
    window: &str,
    warning_phrase: &str,
) -> Option<Finding> {
    let who = driver.full_name();
    match evaluate_hours(used, limit) {
        HoursStatus::Critical => Some(Finding::Rule {
            severity: Severity::LimitReached,
            subject: EntityRef::Driver(driver.id.clone()),
            detail: format!("{who} ha raggiunto il limite {window} ({used}h/{limit}h)"),
        }),
        HoursStatus::Warning => Some(Finding::Rule {
            severity: Severity::Warning,
            subject: EntityRef::Driver(driver.id.clone()),
            detail: format!("{who} {warning_phrase} limite {window} ({used}h/{limit}h)"),
        }),
        HoursStatus::Ok => None,
    }
}

pub fn driver_findings(driver: &Driver, today: NaiveDate) -> Vec<Finding> {
    let mut findings = Vec::new();
    let who = driver.full_name();
    let subject = || EntityRef::Driver(driver.id.clone());

    findings.extend(expiry_finding(
        subject(),
        &format!("Patente di {who}"),
        "SCADUTA",
        driver.license_deadline,
        today,
    ));
    findings.extend(expiry_finding(
        subject(),
        &format!("CQC di {who}"),
        "SCADUTA",
        driver.cqc_deadline,
        today,
    ));
    if driver.adr_certificate {
        if let Some(deadline) = driver.adr_deadline {
            findings.extend(expiry_finding(
                subject(),
                &format!("Cert. ADR di {who}"),
                "SCADUTO",
                deadline,
                today,
            ));
        }
    }

    if evaluate_download_age(driver.last_tachograph_download, today) == DownloadStatus::Overdue {
        let detail = match download_age_days(driver.last_tachograph_download, today) {
            Some(age) => format!(
                "Scarico tachigrafo di {who} scaduto ({age} giorni, limite {DOWNLOAD_INTERVAL_DAYS})"
            ),
            None => format!(
                "Scarico tachigrafo di {who} mai effettuato (limite {DOWNLOAD_INTERVAL_DAYS} giorni)"
            ),
        };
        findings.push(Finding::Rule {
            severity: Severity::Violation,
            subject: subject(),
            detail,
        });
    }

    findings.extend(hours_finding(
        driver,
        driver.daily_hours_used,
        DAILY_LIMIT_HOURS,
        "giornaliero",
        "all'80% del",
    ));
    findings.extend(hours_finding(
        driver,
        driver.weekly_hours_used,
        WEEKLY_LIMIT_HOURS,
        "settimanale",
        "all'80% del",
    ));
    findings.extend(hours_finding(
        driver,
        driver.biweekly_hours_used,
        BIWEEKLY_LIMIT_HOURS,
        "bisettimanale",
        "vicino al",
    ));

    findings
}

pub fn vehicle_findings(vehicle: &Vehicle, today: NaiveDate) -> Vec<Finding> {
    let mut findings = Vec::new();
    let subject = || EntityRef::Vehicle(vehicle.id.clone());

    findings.extend(expiry_finding(
        subject(),
        &format!("Revisione veicolo {}", vehicle.plate),
        "SCADUTA",
        vehicle.revision_deadline,
        today,
    ));
    findings.extend(expiry_finding(
        subject(),
        &format!("Assicurazione veicolo {}", vehicle.plate),
        "SCADUTA",
        vehicle.insurance_deadline,
        today,
    ));

    // Standing obligation, re-emitted on every evaluation until the unit is
    // replaced.
    if retrofit_required(vehicle.tachograph_type) {
        findings.push(Finding::Rule {
            severity: Severity::Obligation,
            subject: subject(),
            detail: format!(
                "Veicolo {} necessita retrofit tachigrafo Smart V2 entro {RETROFIT_DEADLINE_LABEL}",
                vehicle.plate
            ),
        });
    }

    findings
}

pub fn trip_findings(trip: &Trip, snapshot: &FleetSnapshot) -> Vec<Finding> {
    let mut findings = Vec::new();

    if let Some(check) = &trip.compliance_check {
        for issue in &check.issues {
            findings.push(Finding::TripIssue {
                trip: trip.id.clone(),
                issue: issue.clone(),
            });
        }
    }

    // A dangling driver reference is skipped, not reported.
    if trip.is_adr {
        if let Some(driver) = trip
            .driver_id
            .as_ref()
            .and_then(|driver_id| snapshot.driver(driver_id))
        {
            if !driver.adr_certificate {
                findings.push(Finding::Rule {
                    severity: Severity::Blocking,
                    subject: EntityRef::Trip(trip.id.clone()),
                    detail: format!(
                        "Viaggio ADR {} assegnato ad autista senza certificato ADR ({})",
                        trip.id.0,
                        driver.full_name()
                    ),
                });
            }
        }
    }

    if trip.is_international {
        findings.push(Finding::Rule {
            severity: Severity::Reminder,
            subject: EntityRef::Trip(trip.id.clone()),
            detail: format!(
                "Viaggio internazionale {} — verificare CMR e documenti doganali",
                trip.id.0
            ),
        });
    }

    findings
}
