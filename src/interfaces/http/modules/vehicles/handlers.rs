//! Vehicle management handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Duration, Utc};

use super::dto::{
    AccessCheckDto, CreateVehicleRequest, SearchParams, UpdateVehicleRequest, VehicleDto,
};
use crate::domain::vehicle::{NewVehicle, VehicleUpdate};
use crate::domain::{normalize_plate, AccessMethod, DomainError, VehicleStatus, VehicleType};
use crate::interfaces::http::common::{ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::state::AppState;

fn parse_vehicle_type(s: &str) -> Result<VehicleType, DomainError> {
    VehicleType::parse(s)
        .ok_or_else(|| DomainError::Validation(format!("unknown vehicle type: {}", s)))
}

fn parse_expiry(s: &str) -> Result<DateTime<Utc>, DomainError> {
    DateTime::parse_from_rfc3339(s)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|_| DomainError::Validation(format!("invalid expires_at: {}", s)))
}

#[utoipa::path(
    get,
    path = "/api/v1/vehicles",
    tag = "Vehicles",
    responses(
        (status = 200, description = "All registered vehicles", body = ApiResponse<Vec<VehicleDto>>)
    )
)]
pub async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<VehicleDto>>>, ApiError> {
    let vehicles = state.repos.vehicles().find_all().await?;
    let items = vehicles.into_iter().map(VehicleDto::from).collect();
    Ok(Json(ApiResponse::success(items)))
}

#[utoipa::path(
    get,
    path = "/api/v1/vehicles/temporary",
    tag = "Vehicles",
    responses(
        (status = 200, description = "Temporary vehicles, lapsed ones marked expired", body = ApiResponse<Vec<VehicleDto>>)
    )
)]
pub async fn list_temporary_vehicles(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<VehicleDto>>>, ApiError> {
    let mut vehicles = state.repos.vehicles().find_by_permanence(false).await?;
    // Listing is a natural expiry sweep point.
    state.access.expire_lapsed(&mut vehicles).await?;
    let items = vehicles.into_iter().map(VehicleDto::from).collect();
    Ok(Json(ApiResponse::success(items)))
}

#[utoipa::path(
    get,
    path = "/api/v1/vehicles/permanent",
    tag = "Vehicles",
    responses(
        (status = 200, description = "Permanent vehicles", body = ApiResponse<Vec<VehicleDto>>)
    )
)]
pub async fn list_permanent_vehicles(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<VehicleDto>>>, ApiError> {
    let vehicles = state.repos.vehicles().find_by_permanence(true).await?;
    let items = vehicles.into_iter().map(VehicleDto::from).collect();
    Ok(Json(ApiResponse::success(items)))
}

#[utoipa::path(
    get,
    path = "/api/v1/vehicles/search",
    tag = "Vehicles",
    params(SearchParams),
    responses(
        (status = 200, description = "Admission decision for the plate", body = ApiResponse<AccessCheckDto>)
    )
)]
pub async fn search_vehicle(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<AccessCheckDto>>, ApiError> {
    let decision = state
        .access
        .decide(&params.license_plate, AccessMethod::Anpr, None, None)
        .await?;
    Ok(Json(ApiResponse::success(AccessCheckDto {
        vehicle: decision.vehicle.map(VehicleDto::from),
        access_allowed: decision.allowed,
        reason: decision.reason.map(str::to_string),
    })))
}

#[utoipa::path(
    post,
    path = "/api/v1/vehicles",
    tag = "Vehicles",
    request_body = CreateVehicleRequest,
    responses(
        (status = 201, description = "Registered", body = ApiResponse<VehicleDto>),
        (status = 409, description = "Plate already registered"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn register_vehicle(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<VehicleDto>>), ApiError> {
    let plate = normalize_plate(&request.license_plate);
    if plate.is_empty() {
        return Err(DomainError::Validation("license plate must not be empty".to_string()).into());
    }
    let vehicle_type = parse_vehicle_type(&request.vehicle_type)?;
    let expires_at = match (&request.expires_at, request.is_permanent) {
        (Some(s), _) => Some(parse_expiry(s)?),
        (None, false) => Some(Utc::now() + Duration::hours(24)),
        (None, true) => None,
    };

    let vehicle = state
        .repos
        .vehicles()
        .insert(NewVehicle {
            license_plate: plate,
            owner_name: request.owner_name,
            vehicle_type,
            color: request.color,
            brand: request.brand,
            model: request.model,
            is_permanent: request.is_permanent,
            expires_at,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(VehicleDto::from(vehicle))),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/vehicles/{id}",
    tag = "Vehicles",
    params(("id" = i32, Path, description = "Vehicle id")),
    responses(
        (status = 200, description = "Vehicle details", body = ApiResponse<VehicleDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<VehicleDto>>, ApiError> {
    let vehicle = state
        .repos
        .vehicles()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("vehicle", id))?;
    Ok(Json(ApiResponse::success(VehicleDto::from(vehicle))))
}

#[utoipa::path(
    put,
    path = "/api/v1/vehicles/{id}",
    tag = "Vehicles",
    params(("id" = i32, Path, description = "Vehicle id")),
    request_body = UpdateVehicleRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<VehicleDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleDto>>, ApiError> {
    let vehicle_type = request
        .vehicle_type
        .as_deref()
        .map(parse_vehicle_type)
        .transpose()?;
    let status = request
        .status
        .as_deref()
        .map(|s| {
            VehicleStatus::parse(s)
                .ok_or_else(|| DomainError::Validation(format!("unknown status: {}", s)))
        })
        .transpose()?;

    let vehicle = state
        .repos
        .vehicles()
        .update(
            id,
            VehicleUpdate {
                owner_name: request.owner_name,
                vehicle_type,
                color: request.color,
                brand: request.brand,
                model: request.model,
                status,
            },
        )
        .await?;
    Ok(Json(ApiResponse::success(VehicleDto::from(vehicle))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/vehicles/{id}",
    tag = "Vehicles",
    params(("id" = i32, Path, description = "Vehicle id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.repos.vehicles().delete(id).await?;
    Ok(Json(ApiResponse::success(())))
}
