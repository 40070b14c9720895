//! Camera repository interface

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::model::{Camera, CameraStatus};
use crate::domain::DomainResult;

#[derive(Debug, Clone)]
pub struct NewCamera {
    pub name: String,
    pub ip_address: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub rtsp_url: Option<String>,
    pub http_url: Option<String>,
    pub location: Option<String>,
    pub anpr_enabled: bool,
    pub confidence_threshold: f64,
}

/// Partial update; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct CameraUpdate {
    pub name: Option<String>,
    pub location: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub rtsp_url: Option<String>,
    pub http_url: Option<String>,
    pub anpr_enabled: Option<bool>,
    pub confidence_threshold: Option<f64>,
}

#[async_trait]
pub trait CameraRepository: Send + Sync {
    async fn insert(&self, camera: NewCamera) -> DomainResult<Camera>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Camera>>;
    async fn find_by_ip(&self, ip_address: &str) -> DomainResult<Option<Camera>>;
    async fn find_all(&self) -> DomainResult<Vec<Camera>>;
    async fn update(&self, id: i32, update: CameraUpdate) -> DomainResult<Camera>;
    /// Persist a probe outcome: new status and, on success, the heartbeat.
    async fn update_status(
        &self,
        id: i32,
        status: CameraStatus,
        heartbeat: Option<DateTime<Utc>>,
    ) -> DomainResult<()>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
    async fn count(&self) -> DomainResult<u64>;
    async fn count_by_status(&self, status: CameraStatus) -> DomainResult<u64>;
}
