//! Vehicle entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Stored uppercase; unique
    #[sea_orm(unique)]
    pub license_plate: String,

    pub owner_name: String,

    /// Type: car, motorcycle, truck
    pub vehicle_type: String,

    #[sea_orm(nullable)]
    pub color: Option<String>,

    #[sea_orm(nullable)]
    pub brand: Option<String>,

    #[sea_orm(nullable)]
    pub model: Option<String>,

    /// Status: active, inactive, pending, expired
    pub status: String,

    pub is_permanent: bool,

    #[sea_orm(nullable)]
    pub expires_at: Option<DateTimeUtc>,

    pub created_at: DateTimeUtc,

    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
