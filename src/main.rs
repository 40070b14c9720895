//!
//! Gated-community access control backend.
//! Reads configuration from TOML file (~/.config/gate-access/config.toml).

use std::sync::Arc;
use std::time::Duration;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use gate_access::application::services::{
    AccessDecisionService, AuditLogger, DashboardService, DeviceGateway,
};
use gate_access::infrastructure::database::migrator::Migrator;
use gate_access::{
    create_api_router, default_config_path, init_database, AppConfig, AppState, DatabaseConfig,
    ReqwestDeviceClient, SeaOrmRepositoryProvider,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("GATE_ACCESS_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting Gate Access Service...");

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database.url.clone(),
    };
    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    // ── Repositories & services ────────────────────────────────
    let repos: Arc<dyn gate_access::domain::RepositoryProvider> =
        Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

    let device_client = Arc::new(ReqwestDeviceClient::new(Duration::from_secs(
        app_cfg.devices.timeout_secs,
    ))?);

    let audit = Arc::new(AuditLogger::new(repos.clone()));
    let state = AppState {
        access: Arc::new(AccessDecisionService::new(repos.clone(), audit)),
        gateway: Arc::new(DeviceGateway::new(repos.clone(), device_client)),
        dashboard: Arc::new(DashboardService::new(repos.clone())),
        repos,
    };

    // ── REST API server ────────────────────────────────────────
    let router = create_api_router(state);
    let addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("REST API server listening on http://{}", addr);
    info!("Swagger UI available at http://{}/docs/", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutdown signal received");
        })
        .await?;

    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    }

    info!("Gate Access Service shutdown complete");
    Ok(())
}
