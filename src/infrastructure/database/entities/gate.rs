//! Gate entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "gates")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    pub location: String,

    /// Type: barrier, sliding, swing
    pub gate_type: String,

    /// Absent means simulated hardware
    #[sea_orm(nullable)]
    pub controller_ip: Option<String>,

    pub controller_port: i32,

    pub control_method: String,

    #[sea_orm(nullable)]
    pub open_command: Option<String>,

    #[sea_orm(nullable)]
    pub close_command: Option<String>,

    /// Status: open, closed, error, maintenance
    pub status: String,

    pub is_online: bool,

    #[sea_orm(nullable)]
    pub last_heartbeat: Option<DateTimeUtc>,

    /// Weak reference; logs and gates survive camera deletion
    #[sea_orm(nullable)]
    pub camera_id: Option<i32>,

    pub created_at: DateTimeUtc,

    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::camera::Entity",
        from = "Column::CameraId",
        to = "super::camera::Column::Id"
    )]
    Camera,
}

impl Related<super::camera::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Camera.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
