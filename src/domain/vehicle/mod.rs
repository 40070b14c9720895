//! Vehicle domain module

pub mod model;
pub mod repository;

pub use model::{normalize_plate, Vehicle, VehicleStatus, VehicleType};
pub use repository::{NewVehicle, VehicleRepository, VehicleUpdate};
