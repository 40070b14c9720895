//! Audit logger
//!
//! Appends immutable access-event rows. A failed append must never fail the
//! operation that triggered it, so `record` swallows storage errors after
//! logging them for operators.

use std::sync::Arc;

use tracing::warn;

use crate::domain::{NewAccessLog, RepositoryProvider};

pub struct AuditLogger {
    repos: Arc<dyn RepositoryProvider>,
}

impl AuditLogger {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Fire-and-forget append. Failures are surfaced via diagnostics only.
    pub async fn record(&self, log: NewAccessLog) {
        let plate = log.license_plate.clone();
        let event = log.event_type;
        if let Err(e) = self.repos.access_logs().append(log).await {
            warn!(
                license_plate = %plate,
                event_type = %event,
                "failed to write access log: {e}"
            );
        }
    }
}
