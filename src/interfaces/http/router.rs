//! API Router with Swagger UI

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::{ApiResponse, EmptyData};
use super::modules::{cameras, dashboard, gates, health, vehicles};
use super::state::AppState;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Vehicles
        vehicles::list_vehicles,
        vehicles::list_temporary_vehicles,
        vehicles::list_permanent_vehicles,
        vehicles::search_vehicle,
        vehicles::register_vehicle,
        vehicles::get_vehicle,
        vehicles::update_vehicle,
        vehicles::delete_vehicle,
        // Cameras
        cameras::list_cameras,
        cameras::camera_status_summary,
        cameras::register_camera,
        cameras::get_camera,
        cameras::update_camera,
        cameras::delete_camera,
        cameras::test_camera,
        cameras::camera_snapshot,
        cameras::camera_stream_info,
        // Gates
        gates::list_gates,
        gates::gate_status_summary,
        gates::register_gate,
        gates::get_gate,
        gates::update_gate,
        gates::delete_gate,
        gates::open_gate,
        gates::close_gate,
        gates::gate_status,
        // Dashboard
        dashboard::overview,
        dashboard::system_status,
        dashboard::recent_activity,
        dashboard::access_stats,
        dashboard::alerts,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            EmptyData,
            // Health
            health::HealthDto,
            // Vehicles
            vehicles::VehicleDto,
            vehicles::CreateVehicleRequest,
            vehicles::UpdateVehicleRequest,
            vehicles::AccessCheckDto,
            // Cameras
            cameras::CameraDto,
            cameras::CreateCameraRequest,
            cameras::UpdateCameraRequest,
            cameras::CameraTestDto,
            cameras::SnapshotDto,
            cameras::StreamInfoDto,
            cameras::CameraStatusSummaryDto,
            cameras::CameraStatusItemDto,
            // Gates
            gates::GateDto,
            gates::CreateGateRequest,
            gates::UpdateGateRequest,
            gates::GateCommandRequest,
            gates::GateCommandDto,
            gates::GateStatusItemDto,
            gates::GateStatusSummaryDto,
            // Dashboard
            dashboard::OverviewDto,
            dashboard::VehicleCountsDto,
            dashboard::CameraCountsDto,
            dashboard::GateCountsDto,
            dashboard::AccessCountsDto,
            dashboard::SystemStatusDto,
            dashboard::AlertDto,
            dashboard::AccessLogDto,
            dashboard::DailyAccessCountDto,
        )
    ),
    tags(
        (name = "Health", description = "Server health check"),
        (name = "Vehicles", description = "Vehicle registration and admission checks"),
        (name = "Cameras", description = "ANPR camera management and device control"),
        (name = "Gates", description = "Gate management and manual barrier control"),
        (name = "Dashboard", description = "Read-only reporting and alerts"),
    ),
    info(
        title = "Gate Access Service API",
        version = "1.0.0",
        description = "REST API for a gated-community access control system",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let vehicle_routes = Router::new()
        .route(
            "/",
            get(vehicles::list_vehicles).post(vehicles::register_vehicle),
        )
        .route("/search", get(vehicles::search_vehicle))
        .route("/temporary", get(vehicles::list_temporary_vehicles))
        .route("/permanent", get(vehicles::list_permanent_vehicles))
        .route(
            "/{id}",
            get(vehicles::get_vehicle)
                .put(vehicles::update_vehicle)
                .delete(vehicles::delete_vehicle),
        );

    let camera_routes = Router::new()
        .route(
            "/",
            get(cameras::list_cameras).post(cameras::register_camera),
        )
        .route("/status", get(cameras::camera_status_summary))
        .route(
            "/{id}",
            get(cameras::get_camera)
                .put(cameras::update_camera)
                .delete(cameras::delete_camera),
        )
        .route("/{id}/test", post(cameras::test_camera))
        .route("/{id}/snapshot", get(cameras::camera_snapshot))
        .route("/{id}/stream", get(cameras::camera_stream_info));

    let gate_routes = Router::new()
        .route("/", get(gates::list_gates).post(gates::register_gate))
        .route("/status", get(gates::gate_status_summary))
        .route(
            "/{id}",
            get(gates::get_gate)
                .put(gates::update_gate)
                .delete(gates::delete_gate),
        )
        .route("/{id}/open", post(gates::open_gate))
        .route("/{id}/close", post(gates::close_gate))
        .route("/{id}/status", get(gates::gate_status));

    let dashboard_routes = Router::new()
        .route("/overview", get(dashboard::overview))
        .route("/system-status", get(dashboard::system_status))
        .route("/recent-activity", get(dashboard::recent_activity))
        .route("/access-stats", get(dashboard::access_stats))
        .route("/alerts", get(dashboard::alerts));

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health::health_check))
        .nest("/api/v1/vehicles", vehicle_routes)
        .nest("/api/v1/cameras", camera_routes)
        .nest("/api/v1/gates", gate_routes)
        .nest("/api/v1/dashboard", dashboard_routes)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
