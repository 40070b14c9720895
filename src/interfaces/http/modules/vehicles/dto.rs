//! Vehicle DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::Vehicle;

#[derive(Debug, Serialize, ToSchema)]
pub struct VehicleDto {
    pub id: i32,
    pub license_plate: String,
    pub owner_name: String,
    pub vehicle_type: String,
    pub color: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub status: String,
    pub is_permanent: bool,
    pub expires_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Vehicle> for VehicleDto {
    fn from(v: Vehicle) -> Self {
        Self {
            id: v.id,
            license_plate: v.license_plate,
            owner_name: v.owner_name,
            vehicle_type: v.vehicle_type.to_string(),
            color: v.color,
            brand: v.brand,
            model: v.model,
            status: v.status.to_string(),
            is_permanent: v.is_permanent,
            expires_at: v.expires_at.map(|d| d.to_rfc3339()),
            created_at: v.created_at.to_rfc3339(),
            updated_at: v.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 20))]
    pub license_plate: String,
    #[validate(length(min = 1, max = 100))]
    pub owner_name: String,
    /// "car", "motorcycle" or "truck"
    #[serde(default = "default_vehicle_type")]
    pub vehicle_type: String,
    pub color: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    #[serde(default = "default_true")]
    pub is_permanent: bool,
    /// RFC 3339; temporary vehicles default to now + 24 h when omitted
    pub expires_at: Option<String>,
}

fn default_vehicle_type() -> String {
    "car".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub owner_name: Option<String>,
    pub vehicle_type: Option<String>,
    pub color: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    /// "active", "inactive", "pending" or "expired"
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    pub license_plate: String,
}

/// Admission decision for a plate lookup
#[derive(Debug, Serialize, ToSchema)]
pub struct AccessCheckDto {
    pub vehicle: Option<VehicleDto>,
    pub access_allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
