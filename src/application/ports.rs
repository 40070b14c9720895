//! Outbound ports
//!
//! The device gateway talks to hardware through this trait so the HTTP
//! transport can be swapped for a mock in tests.

use async_trait::async_trait;
use thiserror::Error;

/// Response from a device HTTP endpoint
#[derive(Debug, Clone)]
pub struct DeviceResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl DeviceResponse {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Transport-level failure reaching a device
#[derive(Debug, Error)]
pub enum DeviceClientError {
    #[error("request timed out")]
    Timeout,
    #[error("connection failed: {0}")]
    Connection(String),
}

/// Single-attempt HTTP GET against camera or gate-controller hardware.
/// No retries; the configured timeout is the only bound.
#[async_trait]
pub trait DeviceClient: Send + Sync {
    async fn get(
        &self,
        url: &str,
        basic_auth: Option<(&str, &str)>,
    ) -> Result<DeviceResponse, DeviceClientError>;
}
