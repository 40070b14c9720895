//! Database entities module

pub mod access_log;
pub mod camera;
pub mod gate;
pub mod vehicle;

pub use access_log::Entity as AccessLog;
pub use camera::Entity as Camera;
pub use gate::Entity as Gate;
pub use vehicle::Entity as Vehicle;
