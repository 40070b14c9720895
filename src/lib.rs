//! # Gate Access Service
//!
//! Access-control backend for a gated community: vehicle registration,
//! ANPR-driven admission decisions, camera and barrier control over HTTP,
//! and an append-only audit trail with dashboard reporting.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, status enums and repository traits
//! - **application**: Use cases (access decisions, device gateway, audit,
//!   dashboard) built on the domain traits
//! - **infrastructure**: SeaORM persistence and the reqwest device transport
//! - **interfaces**: REST API with Swagger documentation

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, ReqwestDeviceClient, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::{create_api_router, AppState};
