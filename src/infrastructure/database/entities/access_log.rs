//! AccessLog entity
//!
//! Append-only. References to vehicles, cameras and gates are identifiers
//! only; deleting the referenced row does not cascade here.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "access_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(nullable)]
    pub vehicle_id: Option<i32>,

    #[sea_orm(nullable)]
    pub camera_id: Option<i32>,

    #[sea_orm(nullable)]
    pub gate_id: Option<i32>,

    /// "MANUAL" for operator-triggered events without a plate
    pub license_plate: String,

    /// Event: entry, exit, denied, manual_open, manual_close
    pub event_type: String,

    /// Method: anpr, manual, emergency
    pub access_method: String,

    #[sea_orm(nullable)]
    pub confidence_score: Option<f64>,

    #[sea_orm(nullable)]
    pub image_path: Option<String>,

    #[sea_orm(nullable)]
    pub manual_reason: Option<String>,

    #[sea_orm(nullable)]
    pub operator_name: Option<String>,

    pub timestamp: DateTimeUtc,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
