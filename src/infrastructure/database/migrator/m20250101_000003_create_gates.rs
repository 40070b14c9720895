//! Create gates table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Gates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Gates::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Gates::Name).string().not_null())
                    .col(ColumnDef::new(Gates::Location).string().not_null())
                    .col(
                        ColumnDef::new(Gates::GateType)
                            .string()
                            .not_null()
                            .default("barrier"),
                    )
                    .col(ColumnDef::new(Gates::ControllerIp).string())
                    .col(
                        ColumnDef::new(Gates::ControllerPort)
                            .integer()
                            .not_null()
                            .default(80),
                    )
                    .col(
                        ColumnDef::new(Gates::ControlMethod)
                            .string()
                            .not_null()
                            .default("http"),
                    )
                    .col(ColumnDef::new(Gates::OpenCommand).string())
                    .col(ColumnDef::new(Gates::CloseCommand).string())
                    .col(
                        ColumnDef::new(Gates::Status)
                            .string()
                            .not_null()
                            .default("closed"),
                    )
                    .col(
                        ColumnDef::new(Gates::IsOnline)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Gates::LastHeartbeat).timestamp_with_time_zone())
                    // weak reference, no foreign key constraint
                    .col(ColumnDef::new(Gates::CameraId).integer())
                    .col(
                        ColumnDef::new(Gates::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Gates::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Gates::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Gates {
    Table,
    Id,
    Name,
    Location,
    GateType,
    ControllerIp,
    ControllerPort,
    ControlMethod,
    OpenCommand,
    CloseCommand,
    Status,
    IsOnline,
    LastHeartbeat,
    CameraId,
    CreatedAt,
    UpdatedAt,
}
