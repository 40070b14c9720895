//! Camera entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cameras")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    /// One row per physical device; unique
    #[sea_orm(unique)]
    pub ip_address: String,

    pub port: i32,

    #[sea_orm(nullable)]
    pub username: Option<String>,

    #[sea_orm(nullable)]
    pub password: Option<String>,

    #[sea_orm(nullable)]
    pub rtsp_url: Option<String>,

    #[sea_orm(nullable)]
    pub http_url: Option<String>,

    #[sea_orm(nullable)]
    pub location: Option<String>,

    /// Status: online, offline, error
    pub status: String,

    #[sea_orm(nullable)]
    pub last_heartbeat: Option<DateTimeUtc>,

    pub anpr_enabled: bool,

    pub confidence_threshold: f64,

    pub created_at: DateTimeUtc,

    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::gate::Entity")]
    Gates,
}

impl Related<super::gate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gates.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
