use chrono::{Duration, NaiveDate};
use fleet_ai::fleet::compliance::{ComplianceReport, DriverStatusView, Severity, CLEAN_REPORT};
use fleet_ai::fleet::{
    sample_fleet, Driver, DriverId, DriverStatus, FleetSnapshot, StopType, TachographType, Trip,
    TripId, TripStatus, TripStop, Vehicle, VehicleId, VehicleStatus, VehicleType,
};

fn evaluation_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid evaluation date")
}

fn fresh_driver(id: &str, name: &str, surname: &str, today: NaiveDate) -> Driver {
    Driver {
        id: DriverId(id.to_string()),
        name: name.to_string(),
        surname: surname.to_string(),
        status: DriverStatus::Available,
        daily_hours_used: 3.0,
        weekly_hours_used: 20.0,
        biweekly_hours_used: 40.0,
        adr_certificate: false,
        adr_deadline: None,
        license_deadline: today + Duration::days(365),
        cqc_deadline: today + Duration::days(300),
        last_tachograph_download: Some(today - Duration::days(5)),
        last_weekly_rest: Some(today - Duration::days(2)),
        notes: None,
    }
}

fn fresh_vehicle(id: &str, plate: &str, today: NaiveDate) -> Vehicle {
    Vehicle {
        id: VehicleId(id.to_string()),
        plate: plate.to_string(),
        brand: "Iveco".to_string(),
        model: "S-Way".to_string(),
        vehicle_type: VehicleType::Standard,
        max_capacity_kg: 24_000,
        max_capacity_m3: Some(90),
        status: VehicleStatus::Available,
        tachograph_type: TachographType::SmartV2,
        revision_deadline: today + Duration::days(200),
        insurance_deadline: today + Duration::days(250),
        notes: None,
    }
}

fn adr_trip(id: &str, driver: &str, today: NaiveDate) -> Trip {
    Trip {
        id: TripId(id.to_string()),
        status: TripStatus::Planned,
        date: today + Duration::days(1),
        cargo_type: "Prodotti chimici".to_string(),
        cargo_weight_kg: 8_000,
        total_km: 310,
        estimated_cost_eur: 950,
        is_adr: true,
        is_international: false,
        stops: vec![
            TripStop {
                city: "Bologna".to_string(),
                stop_type: StopType::Pickup,
            },
            TripStop {
                city: "Firenze".to_string(),
                stop_type: StopType::Delivery,
            },
        ],
        driver_id: Some(DriverId(driver.to_string())),
        vehicle_id: None,
        compliance_check: None,
    }
}

#[test]
fn sample_fleet_report_lists_every_finding_in_roster_order() {
    let today = evaluation_day();

    let report = ComplianceReport::build(&sample_fleet(today), today);
    let rendered = report.render();

    let expected = [
        "URGENTE: Patente di Luca Bianchi scade tra 25 giorni",
        "VIOLAZIONE: Scarico tachigrafo di Luca Bianchi scaduto (30 giorni, limite 28)",
        "ATTENZIONE: Luca Bianchi all'80% del limite giornaliero (8.5h/9h)",
        "ATTENZIONE: Luca Bianchi all'80% del limite settimanale (52h/56h)",
        "ATTENZIONE: Luca Bianchi vicino al limite bisettimanale (85h/90h)",
        "BLOCCANTE: Patente di Giuseppe Verdi SCADUTA",
        "URGENTE: CQC di Giuseppe Verdi scade tra 10 giorni",
        "LIMITE: Giuseppe Verdi ha raggiunto il limite giornaliero (9h/9h)",
        "URGENTE: Cert. ADR di Anna Ferrari scade tra 15 giorni",
        "VIOLAZIONE: Scarico tachigrafo di Anna Ferrari mai effettuato (limite 28 giorni)",
        "URGENTE: Revisione veicolo EF456GH scade tra 20 giorni",
        "OBBLIGO: Veicolo EF456GH necessita retrofit tachigrafo Smart V2 entro 01/07/2026",
        "BLOCCANTE: Assicurazione veicolo IJ789KL SCADUTA",
        "OBBLIGO: Veicolo MN012PQ necessita retrofit tachigrafo Smart V2 entro 01/07/2026",
        "DOCUMENTO: Viaggio internazionale T-001 — verificare CMR e documenti doganali",
        "BLOCCANTE: Viaggio ADR T-002 assegnato ad autista senza certificato ADR (Luca Bianchi)",
        "VIAGGIO T-003: Autista vicino al limite giornaliero",
    ];
    assert_eq!(rendered.lines().collect::<Vec<_>>(), expected);
}

#[test]
fn severity_tally_matches_the_sample_roster() {
    let today = evaluation_day();
    let report = ComplianceReport::build(&sample_fleet(today), today);

    let count = |severity: Severity| {
        report
            .findings()
            .iter()
            .filter(|finding| finding.severity() == Some(severity))
            .count()
    };

    assert_eq!(count(Severity::Blocking), 3);
    assert_eq!(count(Severity::Urgent), 4);
    assert_eq!(count(Severity::LimitReached), 1);
    assert_eq!(count(Severity::Warning), 3);
    assert_eq!(count(Severity::Violation), 2);
    assert_eq!(count(Severity::Obligation), 2);
    assert_eq!(count(Severity::Reminder), 1);

    let passthrough = report
        .findings()
        .iter()
        .filter(|finding| finding.severity().is_none())
        .count();
    assert_eq!(passthrough, 1);
    assert_eq!(report.findings().len(), 17);
}

#[test]
fn fully_compliant_roster_reports_clean() {
    let today = evaluation_day();
    let snapshot = FleetSnapshot {
        drivers: vec![fresh_driver("D-101", "Paola", "Conti", today)],
        vehicles: vec![fresh_vehicle("V-101", "ZA001BC", today)],
        trips: vec![],
    };

    let report = ComplianceReport::build(&snapshot, today);

    assert!(report.is_clean());
    assert_eq!(report.render(), CLEAN_REPORT);
}

#[test]
fn one_broken_driver_and_trip_produce_targeted_findings() {
    let today = evaluation_day();
    let mut driver = fresh_driver("D-102", "Stefano", "Moretti", today);
    driver.license_deadline = today - Duration::days(3);
    driver.daily_hours_used = 9.5;
    let snapshot = FleetSnapshot {
        drivers: vec![driver],
        vehicles: vec![fresh_vehicle("V-101", "ZA001BC", today)],
        trips: vec![adr_trip("T-201", "D-102", today)],
    };

    let report = ComplianceReport::build(&snapshot, today);
    let rendered = report.render();

    let expected = [
        "BLOCCANTE: Patente di Stefano Moretti SCADUTA",
        "LIMITE: Stefano Moretti ha raggiunto il limite giornaliero (9.5h/9h)",
        "BLOCCANTE: Viaggio ADR T-201 assegnato ad autista senza certificato ADR (Stefano Moretti)",
    ];
    assert_eq!(rendered.lines().collect::<Vec<_>>(), expected);
}

#[test]
fn evaluation_day_moves_findings_between_categories() {
    let today = evaluation_day();
    let mut driver = fresh_driver("D-103", "Chiara", "Romano", today);
    driver.license_deadline = today + Duration::days(40);

    let early = ComplianceReport::build(
        &FleetSnapshot {
            drivers: vec![driver.clone()],
            vehicles: vec![],
            trips: vec![],
        },
        today,
    );
    assert!(early.is_clean());

    let later = today + Duration::days(20);
    let closer = ComplianceReport::build(
        &FleetSnapshot {
            drivers: vec![driver],
            vehicles: vec![],
            trips: vec![],
        },
        later,
    );
    assert_eq!(
        closer.render(),
        "URGENTE: Patente di Chiara Romano scade tra 20 giorni"
    );
}

#[test]
fn driver_status_view_tracks_the_sample_roster() {
    let today = evaluation_day();
    let snapshot = sample_fleet(today);

    let exhausted = snapshot
        .driver(&DriverId("D-003".to_string()))
        .expect("D-003 in the sample roster");
    let view = DriverStatusView::for_driver(exhausted);
    assert!(!view.can_drive);
    assert!(view.break_required);
    assert_eq!(view.daily_hours_remaining, 0.0);
    assert!(view
        .alerts
        .iter()
        .any(|alert| alert.contains("LIMITE GIORNALIERO RAGGIUNTO")));

    let fresh = snapshot
        .driver(&DriverId("D-004".to_string()))
        .expect("D-004 in the sample roster");
    let view = DriverStatusView::for_driver(fresh);
    assert!(view.can_drive);
    assert!(!view.break_required);
    assert!(view.alerts.is_empty());
    assert_eq!(view.daily_hours_remaining, 7.0);
}
