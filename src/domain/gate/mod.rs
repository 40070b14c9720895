//! Gate domain module

pub mod model;
pub mod repository;

pub use model::{Gate, GateCommand, GateStatus, GateType};
pub use repository::{GateRepository, GateStateChange, GateUpdate, NewGate};
