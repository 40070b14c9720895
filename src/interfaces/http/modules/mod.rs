//! Feature modules, one directory per API area

pub mod cameras;
pub mod dashboard;
pub mod gates;
pub mod health;
pub mod vehicles;
