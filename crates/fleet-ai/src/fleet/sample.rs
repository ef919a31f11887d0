use chrono::{Duration, NaiveDate};

use super::domain::{
    Driver, DriverId, DriverStatus, StopType, TachographType, Trip, TripComplianceCheck, TripId,
    TripStatus, TripStop, Vehicle, VehicleId, VehicleStatus, VehicleType,
};
use super::snapshot::FleetSnapshot;

/// Canned fleet for the demo CLI and the served default snapshot. Deadlines
/// are offsets from the given day, so every finding category shows up no
/// matter when the sample is built.
pub fn sample_fleet(today: NaiveDate) -> FleetSnapshot {
    let day = |offset: i64| today + Duration::days(offset);

    FleetSnapshot {
        drivers: vec![
            Driver {
                id: DriverId("D-001".to_string()),
                name: "Marco".to_string(),
                surname: "Rossi".to_string(),
                status: DriverStatus::Available,
                daily_hours_used: 4.5,
                weekly_hours_used: 32.0,
                biweekly_hours_used: 61.0,
                adr_certificate: true,
                adr_deadline: Some(day(180)),
                license_deadline: day(240),
                cqc_deadline: day(150),
                last_tachograph_download: Some(day(-10)),
                last_weekly_rest: Some(day(-3)),
                notes: None,
            },
            Driver {
                id: DriverId("D-002".to_string()),
                name: "Luca".to_string(),
                surname: "Bianchi".to_string(),
                status: DriverStatus::OnDuty,
                daily_hours_used: 8.5,
                weekly_hours_used: 52.0,
                biweekly_hours_used: 85.0,
                adr_certificate: false,
                adr_deadline: None,
                license_deadline: day(25),
                cqc_deadline: day(90),
                last_tachograph_download: Some(day(-30)),
                last_weekly_rest: Some(day(-6)),
                notes: Some("Preferisce tratte nazionali".to_string()),
            },
            Driver {
                id: DriverId("D-003".to_string()),
                name: "Giuseppe".to_string(),
                surname: "Verdi".to_string(),
                status: DriverStatus::OnDuty,
                daily_hours_used: 9.0,
                weekly_hours_used: 41.0,
                biweekly_hours_used: 70.0,
                adr_certificate: false,
                adr_deadline: None,
                license_deadline: day(-10),
                cqc_deadline: day(10),
                last_tachograph_download: Some(day(-5)),
                last_weekly_rest: Some(day(-2)),
                notes: None,
            },
            Driver {
                id: DriverId("D-004".to_string()),
                name: "Anna".to_string(),
                surname: "Ferrari".to_string(),
                status: DriverStatus::Available,
                daily_hours_used: 2.0,
                weekly_hours_used: 18.0,
                biweekly_hours_used: 40.0,
                adr_certificate: true,
                adr_deadline: Some(day(15)),
                license_deadline: day(300),
                cqc_deadline: day(200),
                last_tachograph_download: None,
                last_weekly_rest: Some(day(-1)),
                notes: Some("Abilitata trasporti frigo".to_string()),
            },
        ],
        vehicles: vec![
            Vehicle {
                id: VehicleId("V-001".to_string()),
                plate: "AB123CD".to_string(),
                brand: "Iveco".to_string(),
                model: "Stralis".to_string(),
                vehicle_type: VehicleType::Standard,
                max_capacity_kg: 24_000,
                max_capacity_m3: Some(90),
                status: VehicleStatus::InUse,
                tachograph_type: TachographType::SmartV2,
                revision_deadline: day(180),
                insurance_deadline: day(200),
                notes: None,
            },
            Vehicle {
                id: VehicleId("V-002".to_string()),
                plate: "EF456GH".to_string(),
                brand: "Scania".to_string(),
                model: "R450".to_string(),
                vehicle_type: VehicleType::Adr,
                max_capacity_kg: 26_000,
                max_capacity_m3: None,
                status: VehicleStatus::Available,
                tachograph_type: TachographType::DigitalV1,
                revision_deadline: day(20),
                insurance_deadline: day(100),
                notes: Some("Kit ADR completo a bordo".to_string()),
            },
            Vehicle {
                id: VehicleId("V-003".to_string()),
                plate: "IJ789KL".to_string(),
                brand: "Mercedes".to_string(),
                model: "Actros".to_string(),
                vehicle_type: VehicleType::Refrigerated,
                max_capacity_kg: 22_000,
                max_capacity_m3: Some(80),
                status: VehicleStatus::InUse,
                tachograph_type: TachographType::DigitalV2,
                revision_deadline: day(90),
                insurance_deadline: day(-5),
                notes: None,
            },
            Vehicle {
                id: VehicleId("V-004".to_string()),
                plate: "MN012PQ".to_string(),
                brand: "Volvo".to_string(),
                model: "FH16".to_string(),
                vehicle_type: VehicleType::Exceptional,
                max_capacity_kg: 40_000,
                max_capacity_m3: None,
                status: VehicleStatus::Available,
                tachograph_type: TachographType::Analog,
                revision_deadline: day(45),
                insurance_deadline: day(60),
                notes: Some("Solo trasporti eccezionali autorizzati".to_string()),
            },
        ],
        trips: vec![
            Trip {
                id: TripId("T-001".to_string()),
                status: TripStatus::Planned,
                date: day(2),
                cargo_type: "Macchinari industriali".to_string(),
                cargo_weight_kg: 12_500,
                total_km: 980,
                estimated_cost_eur: 2_400,
                is_adr: false,
                is_international: true,
                stops: vec![
                    TripStop {
                        city: "Milano".to_string(),
                        stop_type: StopType::Pickup,
                    },
                    TripStop {
                        city: "Lione".to_string(),
                        stop_type: StopType::Customs,
                    },
                    TripStop {
                        city: "Parigi".to_string(),
                        stop_type: StopType::Delivery,
                    },
                ],
                driver_id: Some(DriverId("D-001".to_string())),
                vehicle_id: Some(VehicleId("V-001".to_string())),
                compliance_check: None,
            },
            Trip {
                id: TripId("T-002".to_string()),
                status: TripStatus::Planned,
                date: day(1),
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
                driver_id: Some(DriverId("D-002".to_string())),
                vehicle_id: Some(VehicleId("V-002".to_string())),
                compliance_check: None,
            },
            Trip {
                id: TripId("T-003".to_string()),
                status: TripStatus::InProgress,
                date: day(0),
                cargo_type: "Ortofrutta".to_string(),
                cargo_weight_kg: 6_500,
                total_km: 420,
                estimated_cost_eur: 780,
                is_adr: false,
                is_international: false,
                stops: vec![
                    TripStop {
                        city: "Verona".to_string(),
                        stop_type: StopType::Pickup,
                    },
                    TripStop {
                        city: "Trento".to_string(),
                        stop_type: StopType::RestStop,
                    },
                    TripStop {
                        city: "Bolzano".to_string(),
                        stop_type: StopType::Delivery,
                    },
                ],
                driver_id: Some(DriverId("D-003".to_string())),
                vehicle_id: Some(VehicleId("V-003".to_string())),
                compliance_check: Some(TripComplianceCheck {
                    overall_status: "ATTENZIONE".to_string(),
                    issues: vec!["Autista vicino al limite giornaliero".to_string()],
                }),
            },
            Trip {
                id: TripId("T-004".to_string()),
                status: TripStatus::Completed,
                date: day(-3),
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
            },
        ],
    }
}
