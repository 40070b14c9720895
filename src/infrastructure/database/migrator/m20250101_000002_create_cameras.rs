//! Create cameras table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cameras::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cameras::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Cameras::Name).string().not_null())
                    .col(
                        ColumnDef::new(Cameras::IpAddress)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Cameras::Port)
                            .integer()
                            .not_null()
                            .default(80),
                    )
                    .col(ColumnDef::new(Cameras::Username).string())
                    .col(ColumnDef::new(Cameras::Password).string())
                    .col(ColumnDef::new(Cameras::RtspUrl).string())
                    .col(ColumnDef::new(Cameras::HttpUrl).string())
                    .col(ColumnDef::new(Cameras::Location).string())
                    .col(
                        ColumnDef::new(Cameras::Status)
                            .string()
                            .not_null()
                            .default("offline"),
                    )
                    .col(ColumnDef::new(Cameras::LastHeartbeat).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Cameras::AnprEnabled)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Cameras::ConfidenceThreshold)
                            .double()
                            .not_null()
                            .default(0.8),
                    )
                    .col(
                        ColumnDef::new(Cameras::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Cameras::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cameras::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Cameras {
    Table,
    Id,
    Name,
    IpAddress,
    Port,
    Username,
    Password,
    RtspUrl,
    HttpUrl,
    Location,
    Status,
    LastHeartbeat,
    AnprEnabled,
    ConfidenceThreshold,
    CreatedAt,
    UpdatedAt,
}
