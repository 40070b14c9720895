//! Camera module: registration, connectivity probes, snapshots and streams

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
