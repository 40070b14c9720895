//! Vehicle repository interface

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::model::{Vehicle, VehicleStatus};
use crate::domain::DomainResult;

/// Fields accepted when registering a vehicle
#[derive(Debug, Clone)]
pub struct NewVehicle {
    pub license_plate: String,
    pub owner_name: String,
    pub vehicle_type: super::model::VehicleType,
    pub color: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub is_permanent: bool,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Partial update; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct VehicleUpdate {
    pub owner_name: Option<String>,
    pub vehicle_type: Option<super::model::VehicleType>,
    pub color: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub status: Option<VehicleStatus>,
}

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    async fn insert(&self, vehicle: NewVehicle) -> DomainResult<Vehicle>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Vehicle>>;
    async fn find_by_plate(&self, normalized_plate: &str) -> DomainResult<Option<Vehicle>>;
    async fn find_all(&self) -> DomainResult<Vec<Vehicle>>;
    async fn find_by_permanence(&self, is_permanent: bool) -> DomainResult<Vec<Vehicle>>;
    async fn update(&self, id: i32, update: VehicleUpdate) -> DomainResult<Vehicle>;
    async fn update_status(&self, id: i32, status: VehicleStatus) -> DomainResult<()>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
    async fn count(&self) -> DomainResult<u64>;
    async fn count_by_status(&self, status: VehicleStatus) -> DomainResult<u64>;
    async fn count_by_permanence(&self, is_permanent: bool) -> DomainResult<u64>;
}
