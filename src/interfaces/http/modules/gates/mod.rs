//! Gate module: registration and manual barrier control

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
