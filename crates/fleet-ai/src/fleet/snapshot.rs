use serde::{Deserialize, Serialize};

use super::domain::{Driver, DriverId, DriverStatus, Trip, Vehicle, VehicleId, VehicleStatus};

/// Immutable view of the fleet at a point in time. Every compliance
/// evaluation and prompt is a pure function of one snapshot plus an
/// explicitly provided evaluation day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetSnapshot {
    pub drivers: Vec<Driver>,
    pub vehicles: Vec<Vehicle>,
    pub trips: Vec<Trip>,
}

impl FleetSnapshot {
    /// Resolves a driver reference. Trip assignments are weak references, so
    /// a miss is an answerable question rather than an error.
    pub fn driver(&self, id: &DriverId) -> Option<&Driver> {
        self.drivers.iter().find(|driver| &driver.id == id)
    }

    pub fn vehicle(&self, id: &VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|vehicle| &vehicle.id == id)
    }

    pub fn available_drivers(&self) -> impl Iterator<Item = &Driver> {
        self.drivers
            .iter()
            .filter(|driver| driver.status == DriverStatus::Available)
    }

    pub fn available_vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles
            .iter()
            .filter(|vehicle| vehicle.status == VehicleStatus::Available)
    }
}
