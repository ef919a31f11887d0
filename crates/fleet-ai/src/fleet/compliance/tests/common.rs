use axum::response::Response;
use chrono::{Duration, NaiveDate};
use serde_json::Value;

use crate::fleet::compliance::finding::Finding;
use crate::fleet::domain::{
    Driver, DriverId, DriverStatus, StopType, TachographType, Trip, TripId, TripStatus, TripStop,
    Vehicle, VehicleId, VehicleStatus, VehicleType,
};
use crate::fleet::snapshot::FleetSnapshot;

/// Fixed evaluation day so deadline offsets stay stable across runs.
pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid date")
}

pub(super) fn day(offset: i64) -> NaiveDate {
    today() + Duration::days(offset)
}

/// A driver every rule is happy with; tests break one field at a time.
pub(super) fn compliant_driver(id: &str, name: &str, surname: &str) -> Driver {
    Driver {
        id: DriverId(id.to_string()),
        name: name.to_string(),
        surname: surname.to_string(),
        status: DriverStatus::Available,
        daily_hours_used: 2.0,
        weekly_hours_used: 10.0,
        biweekly_hours_used: 20.0,
        adr_certificate: false,
        adr_deadline: None,
        license_deadline: day(240),
        cqc_deadline: day(150),
        last_tachograph_download: Some(day(-7)),
        last_weekly_rest: Some(day(-3)),
        notes: None,
    }
}

pub(super) fn compliant_vehicle(id: &str, plate: &str) -> Vehicle {
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
        revision_deadline: day(180),
        insurance_deadline: day(200),
        notes: None,
    }
}

pub(super) fn planned_trip(id: &str) -> Trip {
    Trip {
        id: TripId(id.to_string()),
        status: TripStatus::Planned,
        date: day(2),
        cargo_type: "Collettame".to_string(),
        cargo_weight_kg: 4_000,
        total_km: 260,
        estimated_cost_eur: 520,
        is_adr: false,
        is_international: false,
        stops: vec![
            TripStop {
                city: "Torino".to_string(),
                stop_type: StopType::Pickup,
            },
            TripStop {
                city: "Genova".to_string(),
                stop_type: StopType::Delivery,
            },
        ],
        driver_id: None,
        vehicle_id: None,
        compliance_check: None,
    }
}

pub(super) fn fleet_of(
    drivers: Vec<Driver>,
    vehicles: Vec<Vehicle>,
    trips: Vec<Trip>,
) -> FleetSnapshot {
    FleetSnapshot {
        drivers,
        vehicles,
        trips,
    }
}

pub(super) fn rendered(findings: &[Finding]) -> Vec<String> {
    findings.iter().map(Finding::rendered).collect()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read response body");
    serde_json::from_slice(&body).expect("json payload")
}
