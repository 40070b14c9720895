//! Infrastructure layer: database and device transport

pub mod database;
pub mod devices;

pub use database::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};
pub use devices::ReqwestDeviceClient;
