//! SeaORM implementation of AccessLogRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use std::collections::BTreeMap;

use crate::domain::access_log::{
    AccessLogEntry, AccessLogRepository, AccessMethod, DailyAccessCount, EventType, NewAccessLog,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::access_log;

pub struct SeaOrmAccessLogRepository {
    db: DatabaseConnection,
}

impl SeaOrmAccessLogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

fn entry_from_model(model: access_log::Model) -> AccessLogEntry {
    AccessLogEntry {
        id: model.id,
        vehicle_id: model.vehicle_id,
        camera_id: model.camera_id,
        gate_id: model.gate_id,
        license_plate: model.license_plate,
        // stored values come from enum Display; fall back rather than drop rows
        event_type: EventType::parse(&model.event_type).unwrap_or(EventType::Denied),
        access_method: AccessMethod::parse(&model.access_method).unwrap_or_default(),
        confidence_score: model.confidence_score,
        image_path: model.image_path,
        manual_reason: model.manual_reason,
        operator_name: model.operator_name,
        timestamp: model.timestamp,
        created_at: model.created_at,
    }
}

#[async_trait]
impl AccessLogRepository for SeaOrmAccessLogRepository {
    async fn append(&self, log: NewAccessLog) -> DomainResult<AccessLogEntry> {
        let now = Utc::now();
        let model = access_log::ActiveModel {
            id: NotSet,
            vehicle_id: Set(log.vehicle_id),
            camera_id: Set(log.camera_id),
            gate_id: Set(log.gate_id),
            license_plate: Set(log.license_plate),
            event_type: Set(log.event_type.to_string()),
            access_method: Set(log.access_method.to_string()),
            confidence_score: Set(log.confidence_score),
            image_path: Set(log.image_path),
            manual_reason: Set(log.manual_reason),
            operator_name: Set(log.operator_name),
            timestamp: Set(now),
            created_at: Set(now),
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(entry_from_model(inserted))
    }

    async fn find_recent(&self, limit: u64) -> DomainResult<Vec<AccessLogEntry>> {
        let models = access_log::Entity::find()
            .order_by_desc(access_log::Column::Timestamp)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entry_from_model).collect())
    }

    async fn count_events_since(
        &self,
        since: DateTime<Utc>,
        event_type: EventType,
    ) -> DomainResult<u64> {
        access_log::Entity::find()
            .filter(access_log::Column::Timestamp.gte(since))
            .filter(access_log::Column::EventType.eq(event_type.to_string()))
            .count(&self.db)
            .await
            .map_err(db_err)
    }

    async fn count_method_since(
        &self,
        since: DateTime<Utc>,
        method: AccessMethod,
    ) -> DomainResult<u64> {
        access_log::Entity::find()
            .filter(access_log::Column::Timestamp.gte(since))
            .filter(access_log::Column::AccessMethod.eq(method.to_string()))
            .count(&self.db)
            .await
            .map_err(db_err)
    }

    async fn daily_counts_since(&self, since: DateTime<Utc>) -> DomainResult<Vec<DailyAccessCount>> {
        // entries/exits only; bucketing done here keeps the query portable
        // across SQLite and Postgres date functions
        let models = access_log::Entity::find()
            .filter(access_log::Column::Timestamp.gte(since))
            .filter(
                access_log::Column::EventType.is_in([
                    EventType::Entry.to_string(),
                    EventType::Exit.to_string(),
                ]),
            )
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let mut by_day: BTreeMap<String, (u64, u64)> = BTreeMap::new();
        for model in models {
            let day = model.timestamp.date_naive().to_string();
            let counts = by_day.entry(day).or_default();
            match model.event_type.as_str() {
                "entry" => counts.0 += 1,
                "exit" => counts.1 += 1,
                _ => {}
            }
        }
        Ok(by_day
            .into_iter()
            .map(|(date, (entries, exits))| DailyAccessCount {
                date,
                entries,
                exits,
            })
            .collect())
    }
}
