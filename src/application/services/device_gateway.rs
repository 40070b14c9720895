//! Device gateway
//!
//! Dispatches open/close/probe commands to gate and camera hardware over
//! HTTP, interprets the response and books the resulting status and
//! heartbeat. One attempt per invocation; the caller decides whether to try
//! again. A gate without a controller IP is simulated hardware: commands
//! succeed locally without a network call.

use std::sync::Arc;

use base64::Engine;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::application::ports::{DeviceClient, DeviceClientError};
use crate::domain::gate::GateStateChange;
use crate::domain::{
    CameraStatus, DomainError, DomainResult, EventType, GateCommand, GateStatus, NewAccessLog,
    RepositoryProvider,
};

/// Result of a successful gate command
#[derive(Debug, Clone)]
pub struct GateCommandOutcome {
    pub message: String,
    pub gate_status: GateStatus,
}

/// Result of a successful camera probe
#[derive(Debug, Clone)]
pub struct CameraProbeOutcome {
    pub status: CameraStatus,
    pub snapshot_size: usize,
}

/// Camera snapshot encoded for web display
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// `data:image/jpeg;base64,...` URI
    pub image: String,
    pub timestamp: DateTime<Utc>,
}

pub struct DeviceGateway {
    repos: Arc<dyn RepositoryProvider>,
    client: Arc<dyn DeviceClient>,
}

impl DeviceGateway {
    pub fn new(repos: Arc<dyn RepositoryProvider>, client: Arc<dyn DeviceClient>) -> Self {
        Self { repos, client }
    }

    pub async fn open_gate(
        &self,
        gate_id: i32,
        operator_name: Option<String>,
        reason: Option<String>,
    ) -> DomainResult<GateCommandOutcome> {
        self.dispatch(gate_id, GateCommand::Open, operator_name, reason)
            .await
    }

    pub async fn close_gate(
        &self,
        gate_id: i32,
        operator_name: Option<String>,
    ) -> DomainResult<GateCommandOutcome> {
        self.dispatch(gate_id, GateCommand::Close, operator_name, None)
            .await
    }

    async fn dispatch(
        &self,
        gate_id: i32,
        command: GateCommand,
        operator_name: Option<String>,
        reason: Option<String>,
    ) -> DomainResult<GateCommandOutcome> {
        let gate = self
            .repos
            .gates()
            .find_by_id(gate_id)
            .await?
            .ok_or_else(|| DomainError::not_found("gate", gate_id))?;

        let target = command.target_status();
        let verb = match command {
            GateCommand::Open => "opened",
            GateCommand::Close => "closed",
        };
        let event_type = match command {
            GateCommand::Open => EventType::ManualOpen,
            GateCommand::Close => EventType::ManualClose,
        };
        let log = NewAccessLog::manual(gate_id, event_type, operator_name, reason);

        let Some(url) = gate.control_url(command) else {
            // Simulated hardware: update state optimistically, no network call.
            self.repos
                .gates()
                .apply_command_outcome(
                    gate_id,
                    GateStateChange {
                        status: Some(target),
                        is_online: None,
                        heartbeat: Some(Utc::now()),
                    },
                    log,
                )
                .await?;
            info!(gate_id, status = %target, "gate command simulated");
            return Ok(GateCommandOutcome {
                message: format!("Gate {} successfully (simulated)", verb),
                gate_status: target,
            });
        };

        debug!(gate_id, %url, "sending gate controller command");
        match self.client.get(&url, None).await {
            Ok(response) if response.is_success() => {
                self.repos
                    .gates()
                    .apply_command_outcome(
                        gate_id,
                        GateStateChange {
                            status: Some(target),
                            is_online: Some(true),
                            heartbeat: Some(Utc::now()),
                        },
                        log,
                    )
                    .await?;
                info!(gate_id, status = %target, "gate command succeeded");
                Ok(GateCommandOutcome {
                    message: format!("Gate {} successfully", verb),
                    gate_status: target,
                })
            }
            Ok(response) => {
                // Controller reachable but refused; leave gate state as-is.
                warn!(gate_id, http_status = response.status, "gate controller error");
                Err(DomainError::DeviceError(format!(
                    "Gate controller error: HTTP {}",
                    response.status
                )))
            }
            Err(e) => {
                self.repos
                    .gates()
                    .apply_state(
                        gate_id,
                        GateStateChange {
                            status: None,
                            is_online: Some(false),
                            heartbeat: None,
                        },
                    )
                    .await?;
                warn!(gate_id, "gate controller connection failed: {e}");
                Err(DomainError::DeviceUnreachable(format!(
                    "Gate controller connection failed: {}",
                    e
                )))
            }
        }
    }

    /// Probe a camera's snapshot endpoint and book the connectivity result.
    pub async fn test_camera(&self, camera_id: i32) -> DomainResult<CameraProbeOutcome> {
        let camera = self
            .repos
            .cameras()
            .find_by_id(camera_id)
            .await?
            .ok_or_else(|| DomainError::not_found("camera", camera_id))?;

        let url = camera.snapshot_url();
        debug!(camera_id, %url, "probing camera");
        match self.client.get(&url, camera.credentials()).await {
            Ok(response) if response.is_success() => {
                self.repos
                    .cameras()
                    .update_status(camera_id, CameraStatus::Online, Some(Utc::now()))
                    .await?;
                Ok(CameraProbeOutcome {
                    status: CameraStatus::Online,
                    snapshot_size: response.body.len(),
                })
            }
            Ok(response) => {
                self.repos
                    .cameras()
                    .update_status(camera_id, CameraStatus::Error, None)
                    .await?;
                Err(DomainError::DeviceError(format!(
                    "HTTP {}",
                    response.status
                )))
            }
            Err(e) => {
                self.repos
                    .cameras()
                    .update_status(camera_id, CameraStatus::Offline, None)
                    .await?;
                Err(DomainError::DeviceUnreachable(format!(
                    "Connection failed: {}",
                    e
                )))
            }
        }
    }

    /// Fetch one snapshot, encoded as a data URI. Does not touch camera
    /// status; `test_camera` is the status-bearing probe.
    pub async fn camera_snapshot(&self, camera_id: i32) -> DomainResult<Snapshot> {
        let camera = self
            .repos
            .cameras()
            .find_by_id(camera_id)
            .await?
            .ok_or_else(|| DomainError::not_found("camera", camera_id))?;

        let url = camera.snapshot_url();
        match self.client.get(&url, camera.credentials()).await {
            Ok(response) if response.is_success() => {
                let encoded = base64::engine::general_purpose::STANDARD.encode(&response.body);
                Ok(Snapshot {
                    image: format!("data:image/jpeg;base64,{}", encoded),
                    timestamp: Utc::now(),
                })
            }
            Ok(response) => Err(DomainError::DeviceError(format!(
                "Failed to get snapshot: HTTP {}",
                response.status
            ))),
            Err(DeviceClientError::Timeout) => Err(DomainError::DeviceUnreachable(
                "Snapshot request timed out".to_string(),
            )),
            Err(e) => Err(DomainError::DeviceUnreachable(format!(
                "Snapshot error: {}",
                e
            ))),
        }
    }
}
