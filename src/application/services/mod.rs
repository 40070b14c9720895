//! Application services

pub mod access_decision;
pub mod audit;
pub mod dashboard;
pub mod device_gateway;

pub use access_decision::{AccessDecision, AccessDecisionService};
pub use audit::AuditLogger;
pub use dashboard::{
    health_bucket, health_percentage, Alert, DashboardService, HealthBucket, Overview,
    SystemStatus,
};
pub use device_gateway::{CameraProbeOutcome, DeviceGateway, GateCommandOutcome, Snapshot};
