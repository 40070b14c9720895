//! Gate repository interface

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::model::{Gate, GateStatus, GateType};
use crate::domain::access_log::NewAccessLog;
use crate::domain::DomainResult;

#[derive(Debug, Clone)]
pub struct NewGate {
    pub name: String,
    pub location: String,
    pub gate_type: GateType,
    pub controller_ip: Option<String>,
    pub controller_port: u16,
    pub control_method: String,
    pub open_command: Option<String>,
    pub close_command: Option<String>,
    pub camera_id: Option<i32>,
}

/// Partial update; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct GateUpdate {
    pub name: Option<String>,
    pub location: Option<String>,
    pub gate_type: Option<GateType>,
    pub controller_ip: Option<Option<String>>,
    pub controller_port: Option<u16>,
    pub control_method: Option<String>,
    pub open_command: Option<Option<String>>,
    pub close_command: Option<Option<String>>,
    pub camera_id: Option<Option<i32>>,
}

/// State change produced by a command or probe result
#[derive(Debug, Clone)]
pub struct GateStateChange {
    pub status: Option<GateStatus>,
    pub is_online: Option<bool>,
    pub heartbeat: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait GateRepository: Send + Sync {
    async fn insert(&self, gate: NewGate) -> DomainResult<Gate>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Gate>>;
    async fn find_all(&self) -> DomainResult<Vec<Gate>>;
    async fn update(&self, id: i32, update: GateUpdate) -> DomainResult<Gate>;
    /// Persist a state change alone (e.g. marking a controller offline).
    async fn apply_state(&self, id: i32, change: GateStateChange) -> DomainResult<()>;
    /// Persist a command outcome and its audit entry in one transaction, so
    /// the status never changes without a matching log row.
    async fn apply_command_outcome(
        &self,
        id: i32,
        change: GateStateChange,
        log: NewAccessLog,
    ) -> DomainResult<()>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
    async fn count(&self) -> DomainResult<u64>;
    async fn count_online(&self) -> DomainResult<u64>;
    async fn count_by_status(&self, status: GateStatus) -> DomainResult<u64>;
}
