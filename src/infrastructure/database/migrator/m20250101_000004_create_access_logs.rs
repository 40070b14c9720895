//! Create access_logs table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccessLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AccessLogs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // identifier-only references; rows survive entity deletion
                    .col(ColumnDef::new(AccessLogs::VehicleId).integer())
                    .col(ColumnDef::new(AccessLogs::CameraId).integer())
                    .col(ColumnDef::new(AccessLogs::GateId).integer())
                    .col(ColumnDef::new(AccessLogs::LicensePlate).string().not_null())
                    .col(ColumnDef::new(AccessLogs::EventType).string().not_null())
                    .col(
                        ColumnDef::new(AccessLogs::AccessMethod)
                            .string()
                            .not_null()
                            .default("anpr"),
                    )
                    .col(ColumnDef::new(AccessLogs::ConfidenceScore).double())
                    .col(ColumnDef::new(AccessLogs::ImagePath).string())
                    .col(ColumnDef::new(AccessLogs::ManualReason).string())
                    .col(ColumnDef::new(AccessLogs::OperatorName).string())
                    .col(
                        ColumnDef::new(AccessLogs::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AccessLogs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_access_logs_timestamp")
                    .table(AccessLogs::Table)
                    .col(AccessLogs::Timestamp)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AccessLogs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum AccessLogs {
    Table,
    Id,
    VehicleId,
    CameraId,
    GateId,
    LicensePlate,
    EventType,
    AccessMethod,
    ConfidenceScore,
    ImagePath,
    ManualReason,
    OperatorName,
    Timestamp,
    CreatedAt,
}
