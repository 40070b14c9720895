//! Domain layer: core entities, status enums and repository traits

pub mod access_log;
pub mod camera;
pub mod error;
pub mod gate;
pub mod repositories;
pub mod vehicle;

pub use access_log::{AccessLogEntry, AccessMethod, EventType, NewAccessLog, MANUAL_PLATE};
pub use camera::{Camera, CameraStatus};
pub use error::{DomainError, DomainResult};
pub use gate::{Gate, GateCommand, GateStatus, GateType};
pub use repositories::RepositoryProvider;
pub use vehicle::{normalize_plate, Vehicle, VehicleStatus, VehicleType};
