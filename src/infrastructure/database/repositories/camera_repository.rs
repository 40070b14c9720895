//! SeaORM implementation of CameraRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, Set,
};

use crate::domain::camera::{Camera, CameraRepository, CameraStatus, CameraUpdate, NewCamera};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::camera;

pub struct SeaOrmCameraRepository {
    db: DatabaseConnection,
}

impl SeaOrmCameraRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    let msg = e.to_string();
    if msg.contains("UNIQUE") || msg.contains("unique") {
        DomainError::Conflict(msg)
    } else {
        DomainError::Storage(msg)
    }
}

pub(crate) fn camera_from_model(model: camera::Model) -> Camera {
    Camera {
        id: model.id,
        name: model.name,
        ip_address: model.ip_address,
        port: model.port as u16,
        username: model.username,
        password: model.password,
        rtsp_url: model.rtsp_url,
        http_url: model.http_url,
        location: model.location,
        status: CameraStatus::parse(&model.status).unwrap_or_default(),
        last_heartbeat: model.last_heartbeat,
        anpr_enabled: model.anpr_enabled,
        confidence_threshold: model.confidence_threshold,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

#[async_trait]
impl CameraRepository for SeaOrmCameraRepository {
    async fn insert(&self, new: NewCamera) -> DomainResult<Camera> {
        let now = Utc::now();
        let model = camera::ActiveModel {
            id: NotSet,
            name: Set(new.name),
            ip_address: Set(new.ip_address),
            port: Set(new.port as i32),
            username: Set(new.username),
            password: Set(new.password),
            rtsp_url: Set(new.rtsp_url),
            http_url: Set(new.http_url),
            location: Set(new.location),
            status: Set(CameraStatus::Offline.to_string()),
            last_heartbeat: Set(None),
            anpr_enabled: Set(new.anpr_enabled),
            confidence_threshold: Set(new.confidence_threshold),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(camera_from_model(inserted))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Camera>> {
        let model = camera::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(camera_from_model))
    }

    async fn find_by_ip(&self, ip_address: &str) -> DomainResult<Option<Camera>> {
        let model = camera::Entity::find()
            .filter(camera::Column::IpAddress.eq(ip_address))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(camera_from_model))
    }

    async fn find_all(&self) -> DomainResult<Vec<Camera>> {
        let models = camera::Entity::find().all(&self.db).await.map_err(db_err)?;
        Ok(models.into_iter().map(camera_from_model).collect())
    }

    async fn update(&self, id: i32, update: CameraUpdate) -> DomainResult<Camera> {
        let model = camera::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("camera", id))?;

        let mut active: camera::ActiveModel = model.into();
        if let Some(name) = update.name {
            active.name = Set(name);
        }
        if let Some(location) = update.location {
            active.location = Set(Some(location));
        }
        if let Some(username) = update.username {
            active.username = Set(Some(username));
        }
        if let Some(password) = update.password {
            active.password = Set(Some(password));
        }
        if let Some(rtsp_url) = update.rtsp_url {
            active.rtsp_url = Set(Some(rtsp_url));
        }
        if let Some(http_url) = update.http_url {
            active.http_url = Set(Some(http_url));
        }
        if let Some(anpr_enabled) = update.anpr_enabled {
            active.anpr_enabled = Set(anpr_enabled);
        }
        if let Some(threshold) = update.confidence_threshold {
            active.confidence_threshold = Set(threshold);
        }
        active.updated_at = Set(Utc::now());

        let updated = active.update(&self.db).await.map_err(db_err)?;
        Ok(camera_from_model(updated))
    }

    async fn update_status(
        &self,
        id: i32,
        status: CameraStatus,
        heartbeat: Option<DateTime<Utc>>,
    ) -> DomainResult<()> {
        let model = camera::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("camera", id))?;

        let mut active: camera::ActiveModel = model.into();
        active.status = Set(status.to_string());
        if let Some(heartbeat) = heartbeat {
            active.last_heartbeat = Set(Some(heartbeat));
        }
        active.updated_at = Set(Utc::now());
        active.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = camera::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("camera", id));
        }
        Ok(())
    }

    async fn count(&self) -> DomainResult<u64> {
        camera::Entity::find().count(&self.db).await.map_err(db_err)
    }

    async fn count_by_status(&self, status: CameraStatus) -> DomainResult<u64> {
        camera::Entity::find()
            .filter(camera::Column::Status.eq(status.to_string()))
            .count(&self.db)
            .await
            .map_err(db_err)
    }
}
