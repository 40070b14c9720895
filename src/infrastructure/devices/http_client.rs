//! HTTP client for gate controllers and cameras
//!
//! One shared reqwest client with a fixed request timeout. A single GET per
//! call; the gateway owns the no-retry policy.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use crate::application::ports::{DeviceClient, DeviceClientError, DeviceResponse};

pub struct ReqwestDeviceClient {
    client: reqwest::Client,
}

impl ReqwestDeviceClient {
    /// Build a client with the given per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl DeviceClient for ReqwestDeviceClient {
    async fn get(
        &self,
        url: &str,
        basic_auth: Option<(&str, &str)>,
    ) -> Result<DeviceResponse, DeviceClientError> {
        let mut request = self.client.get(url);
        if let Some((username, password)) = basic_auth {
            request = request.basic_auth(username, Some(password));
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                DeviceClientError::Timeout
            } else {
                DeviceClientError::Connection(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        debug!("Device {} responded with status {}", url, status);
        let body = response
            .bytes()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DeviceClientError::Timeout
                } else {
                    DeviceClientError::Connection(e.to_string())
                }
            })?
            .to_vec();

        Ok(DeviceResponse { status, body })
    }
}
