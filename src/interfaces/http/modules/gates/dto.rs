//! Gate DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::services::device_gateway::GateCommandOutcome;
use crate::domain::Gate;

#[derive(Debug, Serialize, ToSchema)]
pub struct GateDto {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub gate_type: String,
    pub controller_ip: Option<String>,
    pub controller_port: u16,
    pub control_method: String,
    pub open_command: Option<String>,
    pub close_command: Option<String>,
    pub status: String,
    pub is_online: bool,
    pub last_heartbeat: Option<String>,
    pub camera_id: Option<i32>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Gate> for GateDto {
    fn from(g: Gate) -> Self {
        Self {
            id: g.id,
            name: g.name,
            location: g.location,
            gate_type: g.gate_type.to_string(),
            controller_ip: g.controller_ip,
            controller_port: g.controller_port,
            control_method: g.control_method,
            open_command: g.open_command,
            close_command: g.close_command,
            status: g.status.to_string(),
            is_online: g.is_online,
            last_heartbeat: g.last_heartbeat.map(|d| d.to_rfc3339()),
            camera_id: g.camera_id,
            created_at: g.created_at.to_rfc3339(),
            updated_at: g.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateGateRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 200))]
    pub location: String,
    /// "barrier", "sliding" or "swing"
    #[serde(default = "default_gate_type")]
    pub gate_type: String,
    /// Omit for simulated hardware
    pub controller_ip: Option<String>,
    #[serde(default = "default_port")]
    pub controller_port: u16,
    #[serde(default = "default_control_method")]
    pub control_method: String,
    pub open_command: Option<String>,
    pub close_command: Option<String>,
    pub camera_id: Option<i32>,
}

fn default_gate_type() -> String {
    "barrier".to_string()
}

fn default_port() -> u16 {
    80
}

fn default_control_method() -> String {
    "http".to_string()
}

/// For the nullable fields an omitted key leaves the stored value unchanged
/// while an explicit JSON `null` clears it; clearing `controller_ip` reverts
/// the gate to simulated mode.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateGateRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub location: Option<String>,
    pub gate_type: Option<String>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub controller_ip: Option<Option<String>>,
    pub controller_port: Option<u16>,
    pub control_method: Option<String>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub open_command: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub close_command: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<i32>)]
    pub camera_id: Option<Option<i32>>,
}

/// Wraps the value in `Some` so a present-but-null key deserializes to
/// `Some(None)` instead of collapsing into the field default.
fn present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Optional body for manual open/close commands
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct GateCommandRequest {
    pub operator_name: Option<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GateCommandDto {
    pub message: String,
    pub gate_status: String,
}

impl From<GateCommandOutcome> for GateCommandDto {
    fn from(o: GateCommandOutcome) -> Self {
        Self {
            message: o.message,
            gate_status: o.gate_status.to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GateStatusItemDto {
    pub id: i32,
    pub name: String,
    pub status: String,
    pub is_online: bool,
    pub last_heartbeat: Option<String>,
}

impl From<Gate> for GateStatusItemDto {
    fn from(g: Gate) -> Self {
        Self {
            id: g.id,
            name: g.name,
            status: g.status.to_string(),
            is_online: g.is_online,
            last_heartbeat: g.last_heartbeat.map(|d| d.to_rfc3339()),
        }
    }
}

/// Fleet state summary
#[derive(Debug, Serialize, ToSchema)]
pub struct GateStatusSummaryDto {
    pub total: u64,
    pub online: u64,
    pub open: u64,
    pub gates: Vec<GateStatusItemDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_distinguishes_null_from_omitted() {
        let req: UpdateGateRequest =
            serde_json::from_str(r#"{"name":"East","controller_ip":null}"#).unwrap();
        assert_eq!(req.name.as_deref(), Some("East"));
        assert_eq!(req.controller_ip, Some(None));
        assert_eq!(req.open_command, None);
        assert_eq!(req.camera_id, None);
    }

    #[test]
    fn update_request_accepts_replacement_values() {
        let req: UpdateGateRequest =
            serde_json::from_str(r#"{"controller_ip":"192.168.1.20","camera_id":3}"#).unwrap();
        assert_eq!(req.controller_ip, Some(Some("192.168.1.20".to_string())));
        assert_eq!(req.camera_id, Some(Some(3)));
    }
}
