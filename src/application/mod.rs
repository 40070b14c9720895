//! Application layer: use cases built on the domain traits

pub mod ports;
pub mod services;

#[cfg(test)]
pub mod test_support;

pub use ports::{DeviceClient, DeviceClientError, DeviceResponse};
pub use services::{
    AccessDecision, AccessDecisionService, AuditLogger, DashboardService, DeviceGateway,
};
