//! SeaORM implementation of VehicleRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, Set,
};

use crate::domain::vehicle::{
    NewVehicle, Vehicle, VehicleRepository, VehicleStatus, VehicleType, VehicleUpdate,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::vehicle;

pub struct SeaOrmVehicleRepository {
    db: DatabaseConnection,
}

impl SeaOrmVehicleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn db_err(e: sea_orm::DbErr) -> DomainError {
    // surface unique-key violations as conflicts
    let msg = e.to_string();
    if msg.contains("UNIQUE") || msg.contains("unique") {
        DomainError::Conflict(msg)
    } else {
        DomainError::Storage(msg)
    }
}

pub(crate) fn vehicle_from_model(model: vehicle::Model) -> Vehicle {
    Vehicle {
        id: model.id,
        license_plate: model.license_plate,
        owner_name: model.owner_name,
        vehicle_type: VehicleType::parse(&model.vehicle_type).unwrap_or_default(),
        color: model.color,
        brand: model.brand,
        model: model.model,
        status: VehicleStatus::parse(&model.status).unwrap_or_default(),
        is_permanent: model.is_permanent,
        expires_at: model.expires_at,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

#[async_trait]
impl VehicleRepository for SeaOrmVehicleRepository {
    async fn insert(&self, new: NewVehicle) -> DomainResult<Vehicle> {
        let now = Utc::now();
        let model = vehicle::ActiveModel {
            id: NotSet,
            license_plate: Set(new.license_plate),
            owner_name: Set(new.owner_name),
            vehicle_type: Set(new.vehicle_type.to_string()),
            color: Set(new.color),
            brand: Set(new.brand),
            model: Set(new.model),
            status: Set(VehicleStatus::Active.to_string()),
            is_permanent: Set(new.is_permanent),
            expires_at: Set(new.expires_at),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(vehicle_from_model(inserted))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Vehicle>> {
        let model = vehicle::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(vehicle_from_model))
    }

    async fn find_by_plate(&self, normalized_plate: &str) -> DomainResult<Option<Vehicle>> {
        let model = vehicle::Entity::find()
            .filter(vehicle::Column::LicensePlate.eq(normalized_plate))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(vehicle_from_model))
    }

    async fn find_all(&self) -> DomainResult<Vec<Vehicle>> {
        let models = vehicle::Entity::find().all(&self.db).await.map_err(db_err)?;
        Ok(models.into_iter().map(vehicle_from_model).collect())
    }

    async fn find_by_permanence(&self, is_permanent: bool) -> DomainResult<Vec<Vehicle>> {
        let models = vehicle::Entity::find()
            .filter(vehicle::Column::IsPermanent.eq(is_permanent))
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(vehicle_from_model).collect())
    }

    async fn update(&self, id: i32, update: VehicleUpdate) -> DomainResult<Vehicle> {
        let model = vehicle::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("vehicle", id))?;

        let mut active: vehicle::ActiveModel = model.into();
        if let Some(owner_name) = update.owner_name {
            active.owner_name = Set(owner_name);
        }
        if let Some(vehicle_type) = update.vehicle_type {
            active.vehicle_type = Set(vehicle_type.to_string());
        }
        if let Some(color) = update.color {
            active.color = Set(Some(color));
        }
        if let Some(brand) = update.brand {
            active.brand = Set(Some(brand));
        }
        if let Some(model_name) = update.model {
            active.model = Set(Some(model_name));
        }
        if let Some(status) = update.status {
            active.status = Set(status.to_string());
        }
        active.updated_at = Set(Utc::now());

        let updated = active.update(&self.db).await.map_err(db_err)?;
        Ok(vehicle_from_model(updated))
    }

    async fn update_status(&self, id: i32, status: VehicleStatus) -> DomainResult<()> {
        let model = vehicle::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("vehicle", id))?;

        let mut active: vehicle::ActiveModel = model.into();
        active.status = Set(status.to_string());
        active.updated_at = Set(Utc::now());
        active.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = vehicle::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("vehicle", id));
        }
        Ok(())
    }

    async fn count(&self) -> DomainResult<u64> {
        vehicle::Entity::find().count(&self.db).await.map_err(db_err)
    }

    async fn count_by_status(&self, status: VehicleStatus) -> DomainResult<u64> {
        vehicle::Entity::find()
            .filter(vehicle::Column::Status.eq(status.to_string()))
            .count(&self.db)
            .await
            .map_err(db_err)
    }

    async fn count_by_permanence(&self, is_permanent: bool) -> DomainResult<u64> {
        vehicle::Entity::find()
            .filter(vehicle::Column::IsPermanent.eq(is_permanent))
            .count(&self.db)
            .await
            .map_err(db_err)
    }
}
