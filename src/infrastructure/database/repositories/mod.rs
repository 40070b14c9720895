//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod access_log_repository;
pub mod camera_repository;
pub mod gate_repository;
pub mod repository_provider;
pub mod vehicle_repository;

pub use repository_provider::SeaOrmRepositoryProvider;
