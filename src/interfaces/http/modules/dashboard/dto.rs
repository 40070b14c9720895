//! Dashboard DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::services::dashboard::{
    AccessCounts, Alert, CameraCounts, GateCounts, Overview, SystemStatus, VehicleCounts,
};
use crate::domain::access_log::DailyAccessCount;
use crate::domain::AccessLogEntry;

#[derive(Debug, Serialize, ToSchema)]
pub struct VehicleCountsDto {
    pub total: u64,
    pub permanent: u64,
    pub temporary: u64,
    pub active: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CameraCountsDto {
    pub total: u64,
    pub online: u64,
    pub offline: u64,
    pub error: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GateCountsDto {
    pub total: u64,
    pub online: u64,
    pub open: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AccessCountsDto {
    pub entries: u64,
    pub exits: u64,
    pub manual_overrides: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OverviewDto {
    pub vehicles: VehicleCountsDto,
    pub cameras: CameraCountsDto,
    pub gates: GateCountsDto,
    pub access_logs_24h: AccessCountsDto,
}

impl From<Overview> for OverviewDto {
    fn from(o: Overview) -> Self {
        Self {
            vehicles: o.vehicles.into(),
            cameras: o.cameras.into(),
            gates: o.gates.into(),
            access_logs_24h: o.access_logs_24h.into(),
        }
    }
}

impl From<VehicleCounts> for VehicleCountsDto {
    fn from(c: VehicleCounts) -> Self {
        Self {
            total: c.total,
            permanent: c.permanent,
            temporary: c.temporary,
            active: c.active,
        }
    }
}

impl From<CameraCounts> for CameraCountsDto {
    fn from(c: CameraCounts) -> Self {
        Self {
            total: c.total,
            online: c.online,
            offline: c.offline,
            error: c.error,
        }
    }
}

impl From<GateCounts> for GateCountsDto {
    fn from(c: GateCounts) -> Self {
        Self {
            total: c.total,
            online: c.online,
            open: c.open,
        }
    }
}

impl From<AccessCounts> for AccessCountsDto {
    fn from(c: AccessCounts) -> Self {
        Self {
            entries: c.entries,
            exits: c.exits,
            manual_overrides: c.manual_overrides,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SystemStatusDto {
    /// "healthy", "warning" or "critical"
    pub overall: String,
    pub health_percentage: f64,
    pub cameras: CameraCountsDto,
    pub gates: GateCountsDto,
    pub last_updated: String,
}

impl From<SystemStatus> for SystemStatusDto {
    fn from(s: SystemStatus) -> Self {
        Self {
            overall: s.overall.to_string(),
            health_percentage: s.health_percentage,
            cameras: s.cameras.into(),
            gates: s.gates.into(),
            last_updated: s.last_updated.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AlertDto {
    pub severity: String,
    pub category: String,
    pub message: String,
    pub timestamp: Option<String>,
}

impl From<Alert> for AlertDto {
    fn from(a: Alert) -> Self {
        Self {
            severity: a.severity.to_string(),
            category: a.category.to_string(),
            message: a.message,
            timestamp: a.timestamp.map(|d| d.to_rfc3339()),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AccessLogDto {
    pub id: i32,
    pub vehicle_id: Option<i32>,
    pub camera_id: Option<i32>,
    pub gate_id: Option<i32>,
    pub license_plate: String,
    pub event_type: String,
    pub access_method: String,
    pub confidence_score: Option<f64>,
    pub image_path: Option<String>,
    pub manual_reason: Option<String>,
    pub operator_name: Option<String>,
    pub timestamp: String,
}

impl From<AccessLogEntry> for AccessLogDto {
    fn from(e: AccessLogEntry) -> Self {
        Self {
            id: e.id,
            vehicle_id: e.vehicle_id,
            camera_id: e.camera_id,
            gate_id: e.gate_id,
            license_plate: e.license_plate,
            event_type: e.event_type.to_string(),
            access_method: e.access_method.to_string(),
            confidence_score: e.confidence_score,
            image_path: e.image_path,
            manual_reason: e.manual_reason,
            operator_name: e.operator_name,
            timestamp: e.timestamp.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DailyAccessCountDto {
    /// `YYYY-MM-DD`
    pub date: String,
    pub entries: u64,
    pub exits: u64,
}

impl From<DailyAccessCount> for DailyAccessCountDto {
    fn from(c: DailyAccessCount) -> Self {
        Self {
            date: c.date,
            entries: c.entries,
            exits: c.exits,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct RecentActivityParams {
    /// Newest-first row count, default 20
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    20
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct AccessStatsParams {
    /// Trailing window in days, default 7
    #[serde(default = "default_days")]
    pub days: i64,
}

fn default_days() -> i64 {
    7
}
