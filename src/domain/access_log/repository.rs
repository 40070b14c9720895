//! Access log repository interface

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::model::{AccessLogEntry, AccessMethod, EventType, NewAccessLog};
use crate::domain::DomainResult;

/// Per-day entry/exit counts for reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyAccessCount {
    /// Day in `YYYY-MM-DD`
    pub date: String,
    pub entries: u64,
    pub exits: u64,
}

#[async_trait]
pub trait AccessLogRepository: Send + Sync {
    /// Append one row. The store is append-only: no update or delete exists.
    async fn append(&self, log: NewAccessLog) -> DomainResult<AccessLogEntry>;
    async fn find_recent(&self, limit: u64) -> DomainResult<Vec<AccessLogEntry>>;
    async fn count_events_since(
        &self,
        since: DateTime<Utc>,
        event_type: EventType,
    ) -> DomainResult<u64>;
    async fn count_method_since(
        &self,
        since: DateTime<Utc>,
        method: AccessMethod,
    ) -> DomainResult<u64>;
    async fn daily_counts_since(&self, since: DateTime<Utc>) -> DomainResult<Vec<DailyAccessCount>>;
}
