//! In-memory doubles for service unit tests.
//!
//! `InMemoryStore` backs mock implementations of every repository trait plus
//! a scripted `DeviceClient`, so services can be exercised without a
//! database or network.

use std::collections::{BTreeMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::application::ports::{DeviceClient, DeviceClientError, DeviceResponse};
use crate::domain::access_log::DailyAccessCount;
use crate::domain::camera::{CameraRepository, CameraUpdate, NewCamera};
use crate::domain::gate::{GateRepository, GateStateChange, GateUpdate, NewGate};
use crate::domain::vehicle::{NewVehicle, VehicleRepository, VehicleUpdate};
use crate::domain::{
    AccessLogEntry, AccessMethod, Camera, CameraStatus, DomainError, DomainResult, EventType, Gate,
    GateStatus, GateType, NewAccessLog, RepositoryProvider, Vehicle, VehicleStatus, VehicleType,
};
use crate::domain::access_log::AccessLogRepository;

pub struct InMemoryStore {
    pub vehicles: Mutex<Vec<Vehicle>>,
    pub cameras: Mutex<Vec<Camera>>,
    pub gates: Mutex<Vec<Gate>>,
    pub logs: Mutex<Vec<AccessLogEntry>>,
    next_id: AtomicI32,
    fail_logs: AtomicBool,
}

impl InMemoryStore {
    fn new() -> Self {
        Self {
            vehicles: Mutex::new(Vec::new()),
            cameras: Mutex::new(Vec::new()),
            gates: Mutex::new(Vec::new()),
            logs: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
            fail_logs: AtomicBool::new(false),
        }
    }

    pub fn next_id(&self) -> i32 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Make every standalone log append fail with a storage error.
    pub fn fail_log_appends(&self) {
        self.fail_logs.store(true, Ordering::SeqCst);
    }

    fn append_log(&self, log: NewAccessLog) -> AccessLogEntry {
        let now = Utc::now();
        let entry = AccessLogEntry {
            id: self.next_id(),
            vehicle_id: log.vehicle_id,
            camera_id: log.camera_id,
            gate_id: log.gate_id,
            license_plate: log.license_plate,
            event_type: log.event_type,
            access_method: log.access_method,
            confidence_score: log.confidence_score,
            image_path: log.image_path,
            manual_reason: log.manual_reason,
            operator_name: log.operator_name,
            timestamp: now,
            created_at: now,
        };
        self.logs.lock().unwrap().push(entry.clone());
        entry
    }
}

struct MockVehicleRepo(Arc<InMemoryStore>);
struct MockCameraRepo(Arc<InMemoryStore>);
struct MockGateRepo(Arc<InMemoryStore>);
struct MockLogRepo(Arc<InMemoryStore>);

#[async_trait]
impl VehicleRepository for MockVehicleRepo {
    async fn insert(&self, vehicle: NewVehicle) -> DomainResult<Vehicle> {
        let mut vehicles = self.0.vehicles.lock().unwrap();
        if vehicles
            .iter()
            .any(|v| v.license_plate == vehicle.license_plate)
        {
            return Err(DomainError::Conflict(vehicle.license_plate));
        }
        let now = Utc::now();
        let created = Vehicle {
            id: self.0.next_id(),
            license_plate: vehicle.license_plate,
            owner_name: vehicle.owner_name,
            vehicle_type: vehicle.vehicle_type,
            color: vehicle.color,
            brand: vehicle.brand,
            model: vehicle.model,
            status: VehicleStatus::Active,
            is_permanent: vehicle.is_permanent,
            expires_at: vehicle.expires_at,
            created_at: now,
            updated_at: now,
        };
        vehicles.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Vehicle>> {
        Ok(self
            .0
            .vehicles
            .lock()
            .unwrap()
            .iter()
            .find(|v| v.id == id)
            .cloned())
    }

    async fn find_by_plate(&self, normalized_plate: &str) -> DomainResult<Option<Vehicle>> {
        Ok(self
            .0
            .vehicles
            .lock()
            .unwrap()
            .iter()
            .find(|v| v.license_plate == normalized_plate)
            .cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<Vehicle>> {
        Ok(self.0.vehicles.lock().unwrap().clone())
    }

    async fn find_by_permanence(&self, is_permanent: bool) -> DomainResult<Vec<Vehicle>> {
        Ok(self
            .0
            .vehicles
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.is_permanent == is_permanent)
            .cloned()
            .collect())
    }

    async fn update(&self, id: i32, update: VehicleUpdate) -> DomainResult<Vehicle> {
        let mut vehicles = self.0.vehicles.lock().unwrap();
        let vehicle = vehicles
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| DomainError::not_found("vehicle", id))?;
        if let Some(owner_name) = update.owner_name {
            vehicle.owner_name = owner_name;
        }
        if let Some(vehicle_type) = update.vehicle_type {
            vehicle.vehicle_type = vehicle_type;
        }
        if let Some(color) = update.color {
            vehicle.color = Some(color);
        }
        if let Some(brand) = update.brand {
            vehicle.brand = Some(brand);
        }
        if let Some(model) = update.model {
            vehicle.model = Some(model);
        }
        if let Some(status) = update.status {
            vehicle.status = status;
        }
        vehicle.updated_at = Utc::now();
        Ok(vehicle.clone())
    }

    async fn update_status(&self, id: i32, status: VehicleStatus) -> DomainResult<()> {
        let mut vehicles = self.0.vehicles.lock().unwrap();
        let vehicle = vehicles
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| DomainError::not_found("vehicle", id))?;
        vehicle.status = status;
        vehicle.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let mut vehicles = self.0.vehicles.lock().unwrap();
        let before = vehicles.len();
        vehicles.retain(|v| v.id != id);
        if vehicles.len() == before {
            return Err(DomainError::not_found("vehicle", id));
        }
        Ok(())
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.0.vehicles.lock().unwrap().len() as u64)
    }

    async fn count_by_status(&self, status: VehicleStatus) -> DomainResult<u64> {
        Ok(self
            .0
            .vehicles
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.status == status)
            .count() as u64)
    }

    async fn count_by_permanence(&self, is_permanent: bool) -> DomainResult<u64> {
        Ok(self
            .0
            .vehicles
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.is_permanent == is_permanent)
            .count() as u64)
    }
}

#[async_trait]
impl CameraRepository for MockCameraRepo {
    async fn insert(&self, camera: NewCamera) -> DomainResult<Camera> {
        let mut cameras = self.0.cameras.lock().unwrap();
        if cameras.iter().any(|c| c.ip_address == camera.ip_address) {
            return Err(DomainError::Conflict(camera.ip_address));
        }
        let now = Utc::now();
        let created = Camera {
            id: self.0.next_id(),
            name: camera.name,
            ip_address: camera.ip_address,
            port: camera.port,
            username: camera.username,
            password: camera.password,
            rtsp_url: camera.rtsp_url,
            http_url: camera.http_url,
            location: camera.location,
            status: CameraStatus::Offline,
            last_heartbeat: None,
            anpr_enabled: camera.anpr_enabled,
            confidence_threshold: camera.confidence_threshold,
            created_at: now,
            updated_at: now,
        };
        cameras.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Camera>> {
        Ok(self
            .0
            .cameras
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn find_by_ip(&self, ip_address: &str) -> DomainResult<Option<Camera>> {
        Ok(self
            .0
            .cameras
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.ip_address == ip_address)
            .cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<Camera>> {
        Ok(self.0.cameras.lock().unwrap().clone())
    }

    async fn update(&self, id: i32, update: CameraUpdate) -> DomainResult<Camera> {
        let mut cameras = self.0.cameras.lock().unwrap();
        let camera = cameras
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DomainError::not_found("camera", id))?;
        if let Some(name) = update.name {
            camera.name = name;
        }
        if let Some(location) = update.location {
            camera.location = Some(location);
        }
        if let Some(username) = update.username {
            camera.username = Some(username);
        }
        if let Some(password) = update.password {
            camera.password = Some(password);
        }
        if let Some(rtsp_url) = update.rtsp_url {
            camera.rtsp_url = Some(rtsp_url);
        }
        if let Some(http_url) = update.http_url {
            camera.http_url = Some(http_url);
        }
        if let Some(anpr_enabled) = update.anpr_enabled {
            camera.anpr_enabled = anpr_enabled;
        }
        if let Some(threshold) = update.confidence_threshold {
            camera.confidence_threshold = threshold;
        }
        camera.updated_at = Utc::now();
        Ok(camera.clone())
    }

    async fn update_status(
        &self,
        id: i32,
        status: CameraStatus,
        heartbeat: Option<DateTime<Utc>>,
    ) -> DomainResult<()> {
        let mut cameras = self.0.cameras.lock().unwrap();
        let camera = cameras
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DomainError::not_found("camera", id))?;
        camera.status = status;
        if let Some(heartbeat) = heartbeat {
            camera.last_heartbeat = Some(heartbeat);
        }
        camera.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let mut cameras = self.0.cameras.lock().unwrap();
        let before = cameras.len();
        cameras.retain(|c| c.id != id);
        if cameras.len() == before {
            return Err(DomainError::not_found("camera", id));
        }
        Ok(())
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.0.cameras.lock().unwrap().len() as u64)
    }

    async fn count_by_status(&self, status: CameraStatus) -> DomainResult<u64> {
        Ok(self
            .0
            .cameras
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.status == status)
            .count() as u64)
    }
}

fn apply_gate_change(gate: &mut Gate, change: GateStateChange) {
    if let Some(status) = change.status {
        gate.status = status;
    }
    if let Some(is_online) = change.is_online {
        gate.is_online = is_online;
    }
    if let Some(heartbeat) = change.heartbeat {
        gate.last_heartbeat = Some(heartbeat);
    }
    gate.updated_at = Utc::now();
}

#[async_trait]
impl GateRepository for MockGateRepo {
    async fn insert(&self, gate: NewGate) -> DomainResult<Gate> {
        let now = Utc::now();
        let created = Gate {
            id: self.0.next_id(),
            name: gate.name,
            location: gate.location,
            gate_type: gate.gate_type,
            controller_ip: gate.controller_ip,
            controller_port: gate.controller_port,
            control_method: gate.control_method,
            open_command: gate.open_command,
            close_command: gate.close_command,
            status: GateStatus::Closed,
            is_online: false,
            last_heartbeat: None,
            camera_id: gate.camera_id,
            created_at: now,
            updated_at: now,
        };
        self.0.gates.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Gate>> {
        Ok(self
            .0
            .gates
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.id == id)
            .cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<Gate>> {
        Ok(self.0.gates.lock().unwrap().clone())
    }

    async fn update(&self, id: i32, update: GateUpdate) -> DomainResult<Gate> {
        let mut gates = self.0.gates.lock().unwrap();
        let gate = gates
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| DomainError::not_found("gate", id))?;
        if let Some(name) = update.name {
            gate.name = name;
        }
        if let Some(location) = update.location {
            gate.location = location;
        }
        if let Some(gate_type) = update.gate_type {
            gate.gate_type = gate_type;
        }
        if let Some(controller_ip) = update.controller_ip {
            gate.controller_ip = controller_ip;
        }
        if let Some(controller_port) = update.controller_port {
            gate.controller_port = controller_port;
        }
        if let Some(control_method) = update.control_method {
            gate.control_method = control_method;
        }
        if let Some(open_command) = update.open_command {
            gate.open_command = open_command;
        }
        if let Some(close_command) = update.close_command {
            gate.close_command = close_command;
        }
        if let Some(camera_id) = update.camera_id {
            gate.camera_id = camera_id;
        }
        gate.updated_at = Utc::now();
        Ok(gate.clone())
    }

    async fn apply_state(&self, id: i32, change: GateStateChange) -> DomainResult<()> {
        let mut gates = self.0.gates.lock().unwrap();
        let gate = gates
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| DomainError::not_found("gate", id))?;
        apply_gate_change(gate, change);
        Ok(())
    }

    async fn apply_command_outcome(
        &self,
        id: i32,
        change: GateStateChange,
        log: NewAccessLog,
    ) -> DomainResult<()> {
        {
            let mut gates = self.0.gates.lock().unwrap();
            let gate = gates
                .iter_mut()
                .find(|g| g.id == id)
                .ok_or_else(|| DomainError::not_found("gate", id))?;
            apply_gate_change(gate, change);
        }
        self.0.append_log(log);
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let mut gates = self.0.gates.lock().unwrap();
        let before = gates.len();
        gates.retain(|g| g.id != id);
        if gates.len() == before {
            return Err(DomainError::not_found("gate", id));
        }
        Ok(())
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.0.gates.lock().unwrap().len() as u64)
    }

    async fn count_online(&self) -> DomainResult<u64> {
        Ok(self
            .0
            .gates
            .lock()
            .unwrap()
            .iter()
            .filter(|g| g.is_online)
            .count() as u64)
    }

    async fn count_by_status(&self, status: GateStatus) -> DomainResult<u64> {
        Ok(self
            .0
            .gates
            .lock()
            .unwrap()
            .iter()
            .filter(|g| g.status == status)
            .count() as u64)
    }
}

#[async_trait]
impl AccessLogRepository for MockLogRepo {
    async fn append(&self, log: NewAccessLog) -> DomainResult<AccessLogEntry> {
        if self.0.fail_logs.load(Ordering::SeqCst) {
            return Err(DomainError::Storage("append failed".to_string()));
        }
        Ok(self.0.append_log(log))
    }

    async fn find_recent(&self, limit: u64) -> DomainResult<Vec<AccessLogEntry>> {
        let logs = self.0.logs.lock().unwrap();
        Ok(logs.iter().rev().take(limit as usize).cloned().collect())
    }

    async fn count_events_since(
        &self,
        since: DateTime<Utc>,
        event_type: EventType,
    ) -> DomainResult<u64> {
        Ok(self
            .0
            .logs
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.timestamp >= since && l.event_type == event_type)
            .count() as u64)
    }

    async fn count_method_since(
        &self,
        since: DateTime<Utc>,
        method: AccessMethod,
    ) -> DomainResult<u64> {
        Ok(self
            .0
            .logs
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.timestamp >= since && l.access_method == method)
            .count() as u64)
    }

    async fn daily_counts_since(&self, since: DateTime<Utc>) -> DomainResult<Vec<DailyAccessCount>> {
        let logs = self.0.logs.lock().unwrap();
        let mut by_day: BTreeMap<String, (u64, u64)> = BTreeMap::new();
        for log in logs.iter().filter(|l| l.timestamp >= since) {
            let day = log.timestamp.date_naive().to_string();
            let counts = by_day.entry(day).or_default();
            match log.event_type {
                EventType::Entry => counts.0 += 1,
                EventType::Exit => counts.1 += 1,
                _ => {}
            }
        }
        Ok(by_day
            .into_iter()
            .map(|(date, (entries, exits))| DailyAccessCount {
                date,
                entries,
                exits,
            })
            .collect())
    }
}

pub struct MockRepositoryProvider {
    vehicles: MockVehicleRepo,
    cameras: MockCameraRepo,
    gates: MockGateRepo,
    logs: MockLogRepo,
}

impl RepositoryProvider for MockRepositoryProvider {
    fn vehicles(&self) -> &dyn VehicleRepository {
        &self.vehicles
    }
    fn cameras(&self) -> &dyn CameraRepository {
        &self.cameras
    }
    fn gates(&self) -> &dyn GateRepository {
        &self.gates
    }
    fn access_logs(&self) -> &dyn AccessLogRepository {
        &self.logs
    }
}

/// Fresh provider plus a handle to its backing store for assertions.
pub fn mock_repos() -> (Arc<dyn RepositoryProvider>, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let provider = MockRepositoryProvider {
        vehicles: MockVehicleRepo(store.clone()),
        cameras: MockCameraRepo(store.clone()),
        gates: MockGateRepo(store.clone()),
        logs: MockLogRepo(store.clone()),
    };
    (Arc::new(provider), store)
}

pub fn seed_vehicle(
    store: &InMemoryStore,
    plate: &str,
    is_permanent: bool,
    expires_at: Option<DateTime<Utc>>,
    status: VehicleStatus,
) {
    let now = Utc::now();
    store.vehicles.lock().unwrap().push(Vehicle {
        id: store.next_id(),
        license_plate: plate.to_string(),
        owner_name: "Resident".to_string(),
        vehicle_type: VehicleType::Car,
        color: None,
        brand: None,
        model: None,
        status,
        is_permanent,
        expires_at,
        created_at: now,
        updated_at: now,
    });
}

/// Camera id 1 at 192.168.1.10 with basic-auth credentials, offline.
pub fn seed_camera(store: &InMemoryStore) {
    let now = Utc::now();
    store.cameras.lock().unwrap().push(Camera {
        id: store.next_id(),
        name: "Entrance".to_string(),
        ip_address: "192.168.1.10".to_string(),
        port: 80,
        username: Some("admin".to_string()),
        password: Some("secret".to_string()),
        rtsp_url: None,
        http_url: None,
        location: Some("North gate".to_string()),
        status: CameraStatus::Offline,
        last_heartbeat: None,
        anpr_enabled: true,
        confidence_threshold: 0.8,
        created_at: now,
        updated_at: now,
    });
}

/// Gate id 1, closed and offline; `controller_ip=None` means simulated.
pub fn seed_gate(store: &InMemoryStore, controller_ip: Option<&str>) {
    let now = Utc::now();
    store.gates.lock().unwrap().push(Gate {
        id: store.next_id(),
        name: "Main".to_string(),
        location: "North entrance".to_string(),
        gate_type: GateType::Barrier,
        controller_ip: controller_ip.map(str::to_string),
        controller_port: 8080,
        control_method: "http".to_string(),
        open_command: None,
        close_command: None,
        status: GateStatus::Closed,
        is_online: false,
        last_heartbeat: None,
        camera_id: None,
        created_at: now,
        updated_at: now,
    });
}

/// Scripted device client: queued responses, recorded requests.
pub struct MockDeviceClient {
    responses: Mutex<VecDeque<Result<DeviceResponse, DeviceClientError>>>,
    requests: Mutex<Vec<(String, Option<(String, String)>)>>,
}

impl MockDeviceClient {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn push_ok(&self, response: DeviceResponse) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    pub fn push_err(&self, error: DeviceClientError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<(String, Option<(String, String)>)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl DeviceClient for MockDeviceClient {
    async fn get(
        &self,
        url: &str,
        basic_auth: Option<(&str, &str)>,
    ) -> Result<DeviceResponse, DeviceClientError> {
        self.requests.lock().unwrap().push((
            url.to_string(),
            basic_auth.map(|(u, p)| (u.to_string(), p.to_string())),
        ));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(DeviceClientError::Connection(
                    "no scripted response".to_string(),
                ))
            })
    }
}
