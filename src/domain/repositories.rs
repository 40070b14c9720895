//! Repository provider interface
//!
//! Single access point handing out the per-entity repositories. Services
//! receive one `Arc<dyn RepositoryProvider>` instead of four separate
//! handles.

use crate::domain::access_log::AccessLogRepository;
use crate::domain::camera::CameraRepository;
use crate::domain::gate::GateRepository;
use crate::domain::vehicle::VehicleRepository;

pub trait RepositoryProvider: Send + Sync {
    fn vehicles(&self) -> &dyn VehicleRepository;
    fn cameras(&self) -> &dyn CameraRepository;
    fn gates(&self) -> &dyn GateRepository;
    fn access_logs(&self) -> &dyn AccessLogRepository;
}
