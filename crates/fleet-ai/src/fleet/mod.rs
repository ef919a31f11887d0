//! Fleet domain: roster entities, the immutable snapshot they travel in, and
//! the compliance and dispatch workflows built on top.

pub mod compliance;
pub mod dispatch;
pub mod domain;
pub mod sample;
pub mod snapshot;

pub use domain::{
    Driver, DriverId, DriverStatus, StopType, TachographType, Trip, TripComplianceCheck, TripId,
    TripStatus, TripStop, Vehicle, VehicleId, VehicleStatus, VehicleType,
};
pub use sample::sample_fleet;
pub use snapshot::FleetSnapshot;
