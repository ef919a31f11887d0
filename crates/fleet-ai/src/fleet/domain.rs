use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for drivers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DriverId(pub String);

/// Identifier wrapper for vehicles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VehicleId(pub String);

/// Identifier wrapper for planned or running trips.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TripId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverStatus {
    Available,
    OnDuty,
}

impl DriverStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "Disponibile",
            Self::OnDuty => "In servizio",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    Available,
    InUse,
}

impl VehicleStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "Disponibile",
            Self::InUse => "In uso",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Standard,
    Adr,
    Refrigerated,
    Exceptional,
}

impl VehicleType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Adr => "ADR",
            Self::Refrigerated => "Refrigerato",
            Self::Exceptional => "Eccezionale",
        }
    }
}

/// Tachograph hardware generations relevant to the Smart V2 retrofit mandate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TachographType {
    Analog,
    DigitalV1,
    DigitalV2,
    SmartV2,
}

impl TachographType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Analog => "Analogico",
            Self::DigitalV1 => "Digitale V1",
            Self::DigitalV2 => "Digitale V2",
            Self::SmartV2 => "Smart V2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    Planned,
    InProgress,
    Completed,
    Cancelled,
}

impl TripStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Planned => "Pianificato",
            Self::InProgress => "In Corso",
            Self::Completed => "Completato",
            Self::Cancelled => "Annullato",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopType {
    Pickup,
    Delivery,
    RestStop,
    Customs,
}

impl StopType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pickup => "Ritiro",
            Self::Delivery => "Consegna",
            Self::RestStop => "Sosta",
            Self::Customs => "Dogana",
        }
    }
}

/// Driver roster entry with the hour counters and document deadlines the
/// compliance rules evaluate. Hour counters come from the tachograph feed and
/// are not clamped here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: DriverId,
    pub name: String,
    pub surname: String,
    pub status: DriverStatus,
    pub daily_hours_used: f64,
    pub weekly_hours_used: f64,
    pub biweekly_hours_used: f64,
    pub adr_certificate: bool,
    pub adr_deadline: Option<NaiveDate>,
    pub license_deadline: NaiveDate,
    pub cqc_deadline: NaiveDate,
    pub last_tachograph_download: Option<NaiveDate>,
    pub last_weekly_rest: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl Driver {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

/// Vehicle roster entry carrying the document deadlines and tachograph
/// hardware generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub plate: String,
    pub brand: String,
    pub model: String,
    pub vehicle_type: VehicleType,
    pub max_capacity_kg: u32,
    pub max_capacity_m3: Option<u32>,
    pub status: VehicleStatus,
    pub tachograph_type: TachographType,
    pub revision_deadline: NaiveDate,
    pub insurance_deadline: NaiveDate,
    pub notes: Option<String>,
}

/// One stop along a trip route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripStop {
    pub city: String,
    pub stop_type: StopType,
}

/// Result of an upstream per-trip compliance check, attached to the trip as
/// opaque text and re-emitted verbatim by the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripComplianceCheck {
    pub overall_status: String,
    pub issues: Vec<String>,
}

/// Planned or running transport order. Driver and vehicle assignments are
/// weak references resolved against the snapshot at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub id: TripId,
    pub status: TripStatus,
    pub date: NaiveDate,
    pub cargo_type: String,
    pub cargo_weight_kg: u32,
    pub total_km: u32,
    pub estimated_cost_eur: u32,
    pub is_adr: bool,
    pub is_international: bool,
    pub stops: Vec<TripStop>,
    pub driver_id: Option<DriverId>,
    pub vehicle_id: Option<VehicleId>,
    pub compliance_check: Option<TripComplianceCheck>,
}
