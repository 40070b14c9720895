//! Access log domain module

pub mod model;
pub mod repository;

pub use model::{AccessLogEntry, AccessMethod, EventType, NewAccessLog, MANUAL_PLATE};
pub use repository::{AccessLogRepository, DailyAccessCount};
