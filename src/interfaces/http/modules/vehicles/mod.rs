//! Vehicle module: registration, lookup and admission checks

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
