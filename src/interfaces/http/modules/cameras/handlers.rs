//! Camera management and device-control handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::dto::{
    CameraDto, CameraStatusItemDto, CameraStatusSummaryDto, CameraTestDto, CreateCameraRequest,
    SnapshotDto, StreamInfoDto, UpdateCameraRequest,
};
use crate::domain::camera::{CameraUpdate, NewCamera};
use crate::domain::{CameraStatus, DomainError};
use crate::interfaces::http::common::{ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::state::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/cameras",
    tag = "Cameras",
    responses(
        (status = 200, description = "All cameras", body = ApiResponse<Vec<CameraDto>>)
    )
)]
pub async fn list_cameras(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<CameraDto>>>, ApiError> {
    let cameras = state.repos.cameras().find_all().await?;
    let items = cameras.into_iter().map(CameraDto::from).collect();
    Ok(Json(ApiResponse::success(items)))
}

#[utoipa::path(
    get,
    path = "/api/v1/cameras/status",
    tag = "Cameras",
    responses(
        (status = 200, description = "Fleet connectivity summary", body = ApiResponse<CameraStatusSummaryDto>)
    )
)]
pub async fn camera_status_summary(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CameraStatusSummaryDto>>, ApiError> {
    let cameras = state.repos.cameras().find_all().await?;
    let mut summary = CameraStatusSummaryDto {
        total: cameras.len() as u64,
        online: 0,
        offline: 0,
        error: 0,
        cameras: Vec::with_capacity(cameras.len()),
    };
    for camera in cameras {
        match camera.status {
            CameraStatus::Online => summary.online += 1,
            CameraStatus::Offline => summary.offline += 1,
            CameraStatus::Error => summary.error += 1,
        }
        summary.cameras.push(CameraStatusItemDto {
            id: camera.id,
            name: camera.name,
            status: camera.status.to_string(),
            last_heartbeat: camera.last_heartbeat.map(|d| d.to_rfc3339()),
        });
    }
    Ok(Json(ApiResponse::success(summary)))
}

#[utoipa::path(
    post,
    path = "/api/v1/cameras",
    tag = "Cameras",
    request_body = CreateCameraRequest,
    responses(
        (status = 201, description = "Registered", body = ApiResponse<CameraDto>),
        (status = 409, description = "IP address already registered"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn register_camera(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateCameraRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CameraDto>>), ApiError> {
    let camera = state
        .repos
        .cameras()
        .insert(NewCamera {
            name: request.name,
            ip_address: request.ip_address,
            port: request.port,
            username: request.username,
            password: request.password,
            rtsp_url: request.rtsp_url,
            http_url: request.http_url,
            location: request.location,
            anpr_enabled: request.anpr_enabled,
            confidence_threshold: request.confidence_threshold,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(CameraDto::from(camera))),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/cameras/{id}",
    tag = "Cameras",
    params(("id" = i32, Path, description = "Camera id")),
    responses(
        (status = 200, description = "Camera details", body = ApiResponse<CameraDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_camera(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<CameraDto>>, ApiError> {
    let camera = state
        .repos
        .cameras()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("camera", id))?;
    Ok(Json(ApiResponse::success(CameraDto::from(camera))))
}

#[utoipa::path(
    put,
    path = "/api/v1/cameras/{id}",
    tag = "Cameras",
    params(("id" = i32, Path, description = "Camera id")),
    request_body = UpdateCameraRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<CameraDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_camera(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateCameraRequest>,
) -> Result<Json<ApiResponse<CameraDto>>, ApiError> {
    let camera = state
        .repos
        .cameras()
        .update(
            id,
            CameraUpdate {
                name: request.name,
                location: request.location,
                username: request.username,
                password: request.password,
                rtsp_url: request.rtsp_url,
                http_url: request.http_url,
                anpr_enabled: request.anpr_enabled,
                confidence_threshold: request.confidence_threshold,
            },
        )
        .await?;
    Ok(Json(ApiResponse::success(CameraDto::from(camera))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/cameras/{id}",
    tag = "Cameras",
    params(("id" = i32, Path, description = "Camera id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_camera(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.repos.cameras().delete(id).await?;
    Ok(Json(ApiResponse::success(())))
}

#[utoipa::path(
    post,
    path = "/api/v1/cameras/{id}/test",
    tag = "Cameras",
    params(("id" = i32, Path, description = "Camera id")),
    responses(
        (status = 200, description = "Probe succeeded", body = ApiResponse<CameraTestDto>),
        (status = 400, description = "Camera unreachable or erroring"),
        (status = 404, description = "Not found")
    )
)]
pub async fn test_camera(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<CameraTestDto>>, ApiError> {
    let outcome = state.gateway.test_camera(id).await?;
    Ok(Json(ApiResponse::success(CameraTestDto::from(outcome))))
}

#[utoipa::path(
    get,
    path = "/api/v1/cameras/{id}/snapshot",
    tag = "Cameras",
    params(("id" = i32, Path, description = "Camera id")),
    responses(
        (status = 200, description = "Snapshot as data URI", body = ApiResponse<SnapshotDto>),
        (status = 400, description = "Snapshot fetch failed"),
        (status = 404, description = "Not found")
    )
)]
pub async fn camera_snapshot(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<SnapshotDto>>, ApiError> {
    let snapshot = state.gateway.camera_snapshot(id).await?;
    Ok(Json(ApiResponse::success(SnapshotDto::from(snapshot))))
}

#[utoipa::path(
    get,
    path = "/api/v1/cameras/{id}/stream",
    tag = "Cameras",
    params(("id" = i32, Path, description = "Camera id")),
    responses(
        (status = 200, description = "Resolved stream endpoints", body = ApiResponse<StreamInfoDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn camera_stream_info(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<StreamInfoDto>>, ApiError> {
    let camera = state
        .repos
        .cameras()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("camera", id))?;
    Ok(Json(ApiResponse::success(StreamInfoDto {
        camera_id: camera.id,
        rtsp_url: camera.rtsp_stream_url(),
        snapshot_url: camera.snapshot_url(),
        name: camera.name,
    })))
}
