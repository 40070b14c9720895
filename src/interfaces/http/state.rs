//! Shared handler state

use std::sync::Arc;

use crate::application::{AccessDecisionService, DashboardService, DeviceGateway};
use crate::domain::RepositoryProvider;

/// One state for every route; services are stateless so a single clone-cheap
/// struct is enough.
#[derive(Clone)]
pub struct AppState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub access: Arc<AccessDecisionService>,
    pub gateway: Arc<DeviceGateway>,
    pub dashboard: Arc<DashboardService>,
}
