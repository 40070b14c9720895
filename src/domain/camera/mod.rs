//! Camera domain module

pub mod model;
pub mod repository;

pub use model::{Camera, CameraStatus};
pub use repository::{CameraRepository, CameraUpdate, NewCamera};
