//! SeaORM implementation of GateRepository
//!
//! Command outcomes (status change + audit row) commit in a single
//! transaction so a gate never changes state without a matching log entry.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter, Set, TransactionTrait,
};

use crate::domain::access_log::NewAccessLog;
use crate::domain::gate::{
    Gate, GateRepository, GateStateChange, GateStatus, GateType, GateUpdate, NewGate,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{access_log, gate};

pub struct SeaOrmGateRepository {
    db: DatabaseConnection,
}

impl SeaOrmGateRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

pub(crate) fn gate_from_model(model: gate::Model) -> Gate {
    Gate {
        id: model.id,
        name: model.name,
        location: model.location,
        gate_type: GateType::parse(&model.gate_type).unwrap_or_default(),
        controller_ip: model.controller_ip,
        controller_port: model.controller_port as u16,
        control_method: model.control_method,
        open_command: model.open_command,
        close_command: model.close_command,
        status: GateStatus::parse(&model.status).unwrap_or_default(),
        is_online: model.is_online,
        last_heartbeat: model.last_heartbeat,
        camera_id: model.camera_id,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

async fn apply_change<C: ConnectionTrait>(
    conn: &C,
    id: i32,
    change: GateStateChange,
) -> DomainResult<()> {
    let model = gate::Entity::find_by_id(id)
        .one(conn)
        .await
        .map_err(db_err)?
        .ok_or_else(|| DomainError::not_found("gate", id))?;

    let mut active: gate::ActiveModel = model.into();
    if let Some(status) = change.status {
        active.status = Set(status.to_string());
    }
    if let Some(is_online) = change.is_online {
        active.is_online = Set(is_online);
    }
    if let Some(heartbeat) = change.heartbeat {
        active.last_heartbeat = Set(Some(heartbeat));
    }
    active.updated_at = Set(Utc::now());
    active.update(conn).await.map_err(db_err)?;
    Ok(())
}

async fn insert_log<C: ConnectionTrait>(conn: &C, log: NewAccessLog) -> DomainResult<()> {
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
    model.insert(conn).await.map_err(db_err)?;
    Ok(())
}

#[async_trait]
impl GateRepository for SeaOrmGateRepository {
    async fn insert(&self, new: NewGate) -> DomainResult<Gate> {
        let now = Utc::now();
        let model = gate::ActiveModel {
            id: NotSet,
            name: Set(new.name),
            location: Set(new.location),
            gate_type: Set(new.gate_type.to_string()),
            controller_ip: Set(new.controller_ip),
            controller_port: Set(new.controller_port as i32),
            control_method: Set(new.control_method),
            open_command: Set(new.open_command),
            close_command: Set(new.close_command),
            status: Set(GateStatus::Closed.to_string()),
            is_online: Set(false),
            last_heartbeat: Set(None),
            camera_id: Set(new.camera_id),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(gate_from_model(inserted))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Gate>> {
        let model = gate::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(gate_from_model))
    }

    async fn find_all(&self) -> DomainResult<Vec<Gate>> {
        let models = gate::Entity::find().all(&self.db).await.map_err(db_err)?;
        Ok(models.into_iter().map(gate_from_model).collect())
    }

    async fn update(&self, id: i32, update: GateUpdate) -> DomainResult<Gate> {
        let model = gate::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("gate", id))?;

        let mut active: gate::ActiveModel = model.into();
        if let Some(name) = update.name {
            active.name = Set(name);
        }
        if let Some(location) = update.location {
            active.location = Set(location);
        }
        if let Some(gate_type) = update.gate_type {
            active.gate_type = Set(gate_type.to_string());
        }
        if let Some(controller_ip) = update.controller_ip {
            active.controller_ip = Set(controller_ip);
        }
        if let Some(controller_port) = update.controller_port {
            active.controller_port = Set(controller_port as i32);
        }
        if let Some(control_method) = update.control_method {
            active.control_method = Set(control_method);
        }
        if let Some(open_command) = update.open_command {
            active.open_command = Set(open_command);
        }
        if let Some(close_command) = update.close_command {
            active.close_command = Set(close_command);
        }
        if let Some(camera_id) = update.camera_id {
            active.camera_id = Set(camera_id);
        }
        active.updated_at = Set(Utc::now());

        let updated = active.update(&self.db).await.map_err(db_err)?;
        Ok(gate_from_model(updated))
    }

    async fn apply_state(&self, id: i32, change: GateStateChange) -> DomainResult<()> {
        apply_change(&self.db, id, change).await
    }

    async fn apply_command_outcome(
        &self,
        id: i32,
        change: GateStateChange,
        log: NewAccessLog,
    ) -> DomainResult<()> {
        let txn = self.db.begin().await.map_err(db_err)?;
        apply_change(&txn, id, change).await?;
        insert_log(&txn, log).await?;
        txn.commit().await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = gate::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("gate", id));
        }
        Ok(())
    }

    async fn count(&self) -> DomainResult<u64> {
        gate::Entity::find().count(&self.db).await.map_err(db_err)
    }

    async fn count_online(&self) -> DomainResult<u64> {
        gate::Entity::find()
            .filter(gate::Column::IsOnline.eq(true))
            .count(&self.db)
            .await
            .map_err(db_err)
    }

    async fn count_by_status(&self, status: GateStatus) -> DomainResult<u64> {
        gate::Entity::find()
            .filter(gate::Column::Status.eq(status.to_string()))
            .count(&self.db)
            .await
            .map_err(db_err)
    }
}
