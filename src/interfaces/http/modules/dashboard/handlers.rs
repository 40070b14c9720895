//! Dashboard reporting handlers

use axum::extract::{Query, State};
use axum::Json;

use super::dto::{
    AccessLogDto, AccessStatsParams, AlertDto, DailyAccessCountDto, OverviewDto,
    RecentActivityParams, SystemStatusDto,
};
use crate::interfaces::http::common::{ApiError, ApiResponse};
use crate::interfaces::http::state::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/dashboard/overview",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Entity and trailing-24h access counts", body = ApiResponse<OverviewDto>)
    )
)]
pub async fn overview(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<OverviewDto>>, ApiError> {
    let overview = state.dashboard.overview().await?;
    Ok(Json(ApiResponse::success(OverviewDto::from(overview))))
}

#[utoipa::path(
    get,
    path = "/api/v1/dashboard/system-status",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Weighted device health", body = ApiResponse<SystemStatusDto>)
    )
)]
pub async fn system_status(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<SystemStatusDto>>, ApiError> {
    let status = state.dashboard.system_status().await?;
    Ok(Json(ApiResponse::success(SystemStatusDto::from(status))))
}

#[utoipa::path(
    get,
    path = "/api/v1/dashboard/recent-activity",
    tag = "Dashboard",
    params(RecentActivityParams),
    responses(
        (status = 200, description = "Newest-first access log rows", body = ApiResponse<Vec<AccessLogDto>>)
    )
)]
pub async fn recent_activity(
    State(state): State<AppState>,
    Query(params): Query<RecentActivityParams>,
) -> Result<Json<ApiResponse<Vec<AccessLogDto>>>, ApiError> {
    let entries = state.dashboard.recent_activity(params.limit).await?;
    let items = entries.into_iter().map(AccessLogDto::from).collect();
    Ok(Json(ApiResponse::success(items)))
}

#[utoipa::path(
    get,
    path = "/api/v1/dashboard/access-stats",
    tag = "Dashboard",
    params(AccessStatsParams),
    responses(
        (status = 200, description = "Per-day entry/exit counts", body = ApiResponse<Vec<DailyAccessCountDto>>)
    )
)]
pub async fn access_stats(
    State(state): State<AppState>,
    Query(params): Query<AccessStatsParams>,
) -> Result<Json<ApiResponse<Vec<DailyAccessCountDto>>>, ApiError> {
    let counts = state.dashboard.access_stats(params.days).await?;
    let items = counts.into_iter().map(DailyAccessCountDto::from).collect();
    Ok(Json(ApiResponse::success(items)))
}

#[utoipa::path(
    get,
    path = "/api/v1/dashboard/alerts",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Operator alerts", body = ApiResponse<Vec<AlertDto>>)
    )
)]
pub async fn alerts(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<AlertDto>>>, ApiError> {
    let alerts = state.dashboard.alerts().await?;
    let items = alerts.into_iter().map(AlertDto::from).collect();
    Ok(Json(ApiResponse::success(items)))
}
