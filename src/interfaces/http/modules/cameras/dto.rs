//! Camera DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::services::device_gateway::{CameraProbeOutcome, Snapshot};
use crate::domain::Camera;

#[derive(Debug, Serialize, ToSchema)]
pub struct CameraDto {
    pub id: i32,
    pub name: String,
    pub ip_address: String,
    pub port: u16,
    pub username: Option<String>,
    pub rtsp_url: Option<String>,
    pub http_url: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub last_heartbeat: Option<String>,
    pub anpr_enabled: bool,
    pub confidence_threshold: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Camera> for CameraDto {
    // password never leaves the server
    fn from(c: Camera) -> Self {
        Self {
            id: c.id,
            name: c.name,
            ip_address: c.ip_address,
            port: c.port,
            username: c.username,
            rtsp_url: c.rtsp_url,
            http_url: c.http_url,
            location: c.location,
            status: c.status.to_string(),
            last_heartbeat: c.last_heartbeat.map(|d| d.to_rfc3339()),
            anpr_enabled: c.anpr_enabled,
            confidence_threshold: c.confidence_threshold,
            created_at: c.created_at.to_rfc3339(),
            updated_at: c.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCameraRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 45))]
    pub ip_address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub rtsp_url: Option<String>,
    pub http_url: Option<String>,
    pub location: Option<String>,
    #[serde(default = "default_true")]
    pub anpr_enabled: bool,
    #[serde(default = "default_confidence")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub confidence_threshold: f64,
}

fn default_port() -> u16 {
    80
}

fn default_true() -> bool {
    true
}

fn default_confidence() -> f64 {
    0.8
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCameraRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub location: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub rtsp_url: Option<String>,
    pub http_url: Option<String>,
    pub anpr_enabled: Option<bool>,
    #[validate(range(min = 0.0, max = 1.0))]
    pub confidence_threshold: Option<f64>,
}

/// Connectivity probe result
#[derive(Debug, Serialize, ToSchema)]
pub struct CameraTestDto {
    pub status: String,
    pub snapshot_size: usize,
}

impl From<CameraProbeOutcome> for CameraTestDto {
    fn from(o: CameraProbeOutcome) -> Self {
        Self {
            status: o.status.to_string(),
            snapshot_size: o.snapshot_size,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SnapshotDto {
    /// `data:image/jpeg;base64,...`
    pub image: String,
    pub timestamp: String,
}

impl From<Snapshot> for SnapshotDto {
    fn from(s: Snapshot) -> Self {
        Self {
            image: s.image,
            timestamp: s.timestamp.to_rfc3339(),
        }
    }
}

/// Resolved stream endpoints for a camera
#[derive(Debug, Serialize, ToSchema)]
pub struct StreamInfoDto {
    pub camera_id: i32,
    pub name: String,
    pub rtsp_url: String,
    pub snapshot_url: String,
}

/// Fleet connectivity summary
#[derive(Debug, Serialize, ToSchema)]
pub struct CameraStatusSummaryDto {
    pub total: u64,
    pub online: u64,
    pub offline: u64,
    pub error: u64,
    pub cameras: Vec<CameraStatusItemDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CameraStatusItemDto {
    pub id: i32,
    pub name: String,
    pub status: String,
    pub last_heartbeat: Option<String>,
}
