//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::access_log::AccessLogRepository;
use crate::domain::camera::CameraRepository;
use crate::domain::gate::GateRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::vehicle::VehicleRepository;

use super::access_log_repository::SeaOrmAccessLogRepository;
use super::camera_repository::SeaOrmCameraRepository;
use super::gate_repository::SeaOrmGateRepository;
use super::vehicle_repository::SeaOrmVehicleRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
pub struct SeaOrmRepositoryProvider {
    vehicles: SeaOrmVehicleRepository,
    cameras: SeaOrmCameraRepository,
    gates: SeaOrmGateRepository,
    access_logs: SeaOrmAccessLogRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            vehicles: SeaOrmVehicleRepository::new(db.clone()),
            cameras: SeaOrmCameraRepository::new(db.clone()),
            gates: SeaOrmGateRepository::new(db.clone()),
            access_logs: SeaOrmAccessLogRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn vehicles(&self) -> &dyn VehicleRepository {
        &self.vehicles
    }

    fn cameras(&self) -> &dyn CameraRepository {
        &self.cameras
    }

    fn gates(&self) -> &dyn GateRepository {
        &self.gates
    }

    fn access_logs(&self) -> &dyn AccessLogRepository {
        &self.access_logs
    }
}
