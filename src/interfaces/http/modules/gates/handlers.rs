//! Gate management and manual-control handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::dto::{
    CreateGateRequest, GateCommandDto, GateCommandRequest, GateDto, GateStatusItemDto,
    GateStatusSummaryDto, UpdateGateRequest,
};
use crate::domain::gate::{GateUpdate, NewGate};
use crate::domain::{DomainError, GateStatus, GateType};
use crate::interfaces::http::common::{ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::state::AppState;

fn parse_gate_type(s: &str) -> Result<GateType, DomainError> {
    GateType::parse(s).ok_or_else(|| DomainError::Validation(format!("unknown gate type: {}", s)))
}

#[utoipa::path(
    get,
    path = "/api/v1/gates",
    tag = "Gates",
    responses(
        (status = 200, description = "All gates", body = ApiResponse<Vec<GateDto>>)
    )
)]
pub async fn list_gates(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<GateDto>>>, ApiError> {
    let gates = state.repos.gates().find_all().await?;
    let items = gates.into_iter().map(GateDto::from).collect();
    Ok(Json(ApiResponse::success(items)))
}

#[utoipa::path(
    get,
    path = "/api/v1/gates/status",
    tag = "Gates",
    responses(
        (status = 200, description = "Fleet state summary", body = ApiResponse<GateStatusSummaryDto>)
    )
)]
pub async fn gate_status_summary(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<GateStatusSummaryDto>>, ApiError> {
    let gates = state.repos.gates().find_all().await?;
    let summary = GateStatusSummaryDto {
        total: gates.len() as u64,
        online: gates.iter().filter(|g| g.is_online).count() as u64,
        open: gates
            .iter()
            .filter(|g| g.status == GateStatus::Open)
            .count() as u64,
        gates: gates.into_iter().map(GateStatusItemDto::from).collect(),
    };
    Ok(Json(ApiResponse::success(summary)))
}

#[utoipa::path(
    post,
    path = "/api/v1/gates",
    tag = "Gates",
    request_body = CreateGateRequest,
    responses(
        (status = 201, description = "Registered", body = ApiResponse<GateDto>),
        (status = 422, description = "Validation error")
    )
)]
pub async fn register_gate(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateGateRequest>,
) -> Result<(StatusCode, Json<ApiResponse<GateDto>>), ApiError> {
    let gate_type = parse_gate_type(&request.gate_type)?;
    let gate = state
        .repos
        .gates()
        .insert(NewGate {
            name: request.name,
            location: request.location,
            gate_type,
            controller_ip: request.controller_ip,
            controller_port: request.controller_port,
            control_method: request.control_method,
            open_command: request.open_command,
            close_command: request.close_command,
            camera_id: request.camera_id,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(GateDto::from(gate))),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/gates/{id}",
    tag = "Gates",
    params(("id" = i32, Path, description = "Gate id")),
    responses(
        (status = 200, description = "Gate details", body = ApiResponse<GateDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_gate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<GateDto>>, ApiError> {
    let gate = state
        .repos
        .gates()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("gate", id))?;
    Ok(Json(ApiResponse::success(GateDto::from(gate))))
}

#[utoipa::path(
    put,
    path = "/api/v1/gates/{id}",
    tag = "Gates",
    params(("id" = i32, Path, description = "Gate id")),
    request_body = UpdateGateRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<GateDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_gate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateGateRequest>,
) -> Result<Json<ApiResponse<GateDto>>, ApiError> {
    let gate_type = request
        .gate_type
        .as_deref()
        .map(parse_gate_type)
        .transpose()?;
    let gate = state
        .repos
        .gates()
        .update(
            id,
            GateUpdate {
                name: request.name,
                location: request.location,
                gate_type,
                controller_ip: request.controller_ip,
                controller_port: request.controller_port,
                control_method: request.control_method,
                open_command: request.open_command,
                close_command: request.close_command,
                camera_id: request.camera_id,
            },
        )
        .await?;
    Ok(Json(ApiResponse::success(GateDto::from(gate))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/gates/{id}",
    tag = "Gates",
    params(("id" = i32, Path, description = "Gate id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_gate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.repos.gates().delete(id).await?;
    Ok(Json(ApiResponse::success(())))
}

#[utoipa::path(
    post,
    path = "/api/v1/gates/{id}/open",
    tag = "Gates",
    params(("id" = i32, Path, description = "Gate id")),
    request_body = GateCommandRequest,
    responses(
        (status = 200, description = "Gate opened", body = ApiResponse<GateCommandDto>),
        (status = 400, description = "Controller unreachable or refused"),
        (status = 404, description = "Not found")
    )
)]
pub async fn open_gate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Option<Json<GateCommandRequest>>,
) -> Result<Json<ApiResponse<GateCommandDto>>, ApiError> {
    let request = body.map(|Json(b)| b).unwrap_or_default();
    let outcome = state
        .gateway
        .open_gate(id, request.operator_name, request.reason)
        .await?;
    Ok(Json(ApiResponse::success(GateCommandDto::from(outcome))))
}

#[utoipa::path(
    post,
    path = "/api/v1/gates/{id}/close",
    tag = "Gates",
    params(("id" = i32, Path, description = "Gate id")),
    request_body = GateCommandRequest,
    responses(
        (status = 200, description = "Gate closed", body = ApiResponse<GateCommandDto>),
        (status = 400, description = "Controller unreachable or refused"),
        (status = 404, description = "Not found")
    )
)]
pub async fn close_gate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Option<Json<GateCommandRequest>>,
) -> Result<Json<ApiResponse<GateCommandDto>>, ApiError> {
    let request = body.map(|Json(b)| b).unwrap_or_default();
    let outcome = state.gateway.close_gate(id, request.operator_name).await?;
    Ok(Json(ApiResponse::success(GateCommandDto::from(outcome))))
}

#[utoipa::path(
    get,
    path = "/api/v1/gates/{id}/status",
    tag = "Gates",
    params(("id" = i32, Path, description = "Gate id")),
    responses(
        (status = 200, description = "Current gate state", body = ApiResponse<GateStatusItemDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn gate_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<GateStatusItemDto>>, ApiError> {
    let gate = state
        .repos
        .gates()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("gate", id))?;
    Ok(Json(ApiResponse::success(GateStatusItemDto::from(gate))))
}
