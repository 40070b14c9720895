//! Dashboard reporting
//!
//! Read-only aggregates over the entity store: overview counts, system
//! health, recent activity, per-day access stats and operator alerts.
//! Nothing here mutates state.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::domain::access_log::DailyAccessCount;
use crate::domain::{
    AccessLogEntry, AccessMethod, CameraStatus, DomainResult, EventType, GateStatus,
    RepositoryProvider, VehicleStatus,
};

/// Health bucket derived from the weighted health percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthBucket {
    Healthy,
    Warning,
    Critical,
}

impl std::fmt::Display for HealthBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Healthy => write!(f, "healthy"),
            Self::Warning => write!(f, "warning"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// Weighted health: average of the online fractions of cameras and gates,
/// as a percentage rounded to one decimal. Empty populations count as fully
/// healthy.
pub fn health_percentage(
    cameras_online: u64,
    cameras_total: u64,
    gates_online: u64,
    gates_total: u64,
) -> f64 {
    let camera_pct = if cameras_total > 0 {
        cameras_online as f64 / cameras_total as f64 * 100.0
    } else {
        100.0
    };
    let gate_pct = if gates_total > 0 {
        gates_online as f64 / gates_total as f64 * 100.0
    } else {
        100.0
    };
    let overall = (camera_pct + gate_pct) / 2.0;
    (overall * 10.0).round() / 10.0
}

pub fn health_bucket(percentage: f64) -> HealthBucket {
    if percentage >= 90.0 {
        HealthBucket::Healthy
    } else if percentage >= 70.0 {
        HealthBucket::Warning
    } else {
        HealthBucket::Critical
    }
}

#[derive(Debug, Clone)]
pub struct VehicleCounts {
    pub total: u64,
    pub permanent: u64,
    pub temporary: u64,
    pub active: u64,
}

#[derive(Debug, Clone)]
pub struct CameraCounts {
    pub total: u64,
    pub online: u64,
    pub offline: u64,
    pub error: u64,
}

#[derive(Debug, Clone)]
pub struct GateCounts {
    pub total: u64,
    pub online: u64,
    pub open: u64,
}

/// Trailing-24h access event counts
#[derive(Debug, Clone)]
pub struct AccessCounts {
    pub entries: u64,
    pub exits: u64,
    pub manual_overrides: u64,
}

#[derive(Debug, Clone)]
pub struct Overview {
    pub vehicles: VehicleCounts,
    pub cameras: CameraCounts,
    pub gates: GateCounts,
    pub access_logs_24h: AccessCounts,
}

#[derive(Debug, Clone)]
pub struct SystemStatus {
    pub overall: HealthBucket,
    pub health_percentage: f64,
    pub cameras: CameraCounts,
    pub gates: GateCounts,
    pub last_updated: DateTime<Utc>,
}

/// Operator alert
#[derive(Debug, Clone)]
pub struct Alert {
    /// "warning" or "info"
    pub severity: &'static str,
    /// "camera", "gate", "vehicle" or "security"
    pub category: &'static str,
    pub message: String,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Manual overrides in one hour considered excessive
const MANUAL_OVERRIDE_ALERT_THRESHOLD: u64 = 10;

pub struct DashboardService {
    repos: Arc<dyn RepositoryProvider>,
}

impl DashboardService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn overview(&self) -> DomainResult<Overview> {
        let vehicles = self.repos.vehicles();
        let cameras = self.repos.cameras();
        let gates = self.repos.gates();
        let logs = self.repos.access_logs();
        let yesterday = Utc::now() - Duration::hours(24);

        Ok(Overview {
            vehicles: VehicleCounts {
                total: vehicles.count().await?,
                permanent: vehicles.count_by_permanence(true).await?,
                temporary: vehicles.count_by_permanence(false).await?,
                active: vehicles.count_by_status(VehicleStatus::Active).await?,
            },
            cameras: CameraCounts {
                total: cameras.count().await?,
                online: cameras.count_by_status(CameraStatus::Online).await?,
                offline: cameras.count_by_status(CameraStatus::Offline).await?,
                error: cameras.count_by_status(CameraStatus::Error).await?,
            },
            gates: GateCounts {
                total: gates.count().await?,
                online: gates.count_online().await?,
                open: gates.count_by_status(GateStatus::Open).await?,
            },
            access_logs_24h: AccessCounts {
                entries: logs.count_events_since(yesterday, EventType::Entry).await?,
                exits: logs.count_events_since(yesterday, EventType::Exit).await?,
                manual_overrides: logs
                    .count_method_since(yesterday, AccessMethod::Manual)
                    .await?,
            },
        })
    }

    pub async fn system_status(&self) -> DomainResult<SystemStatus> {
        let cameras = self.repos.cameras();
        let gates = self.repos.gates();

        let camera_counts = CameraCounts {
            total: cameras.count().await?,
            online: cameras.count_by_status(CameraStatus::Online).await?,
            offline: cameras.count_by_status(CameraStatus::Offline).await?,
            error: cameras.count_by_status(CameraStatus::Error).await?,
        };
        let gate_total = gates.count().await?;
        let gate_online = gates.count_online().await?;
        let gate_counts = GateCounts {
            total: gate_total,
            online: gate_online,
            open: gates.count_by_status(GateStatus::Open).await?,
        };

        let percentage = health_percentage(
            camera_counts.online,
            camera_counts.total,
            gate_online,
            gate_total,
        );
        Ok(SystemStatus {
            overall: health_bucket(percentage),
            health_percentage: percentage,
            cameras: camera_counts,
            gates: gate_counts,
            last_updated: Utc::now(),
        })
    }

    pub async fn recent_activity(&self, limit: u64) -> DomainResult<Vec<AccessLogEntry>> {
        self.repos.access_logs().find_recent(limit).await
    }

    pub async fn access_stats(&self, days: i64) -> DomainResult<Vec<DailyAccessCount>> {
        let since = Utc::now() - Duration::days(days);
        self.repos.access_logs().daily_counts_since(since).await
    }

    pub async fn alerts(&self) -> DomainResult<Vec<Alert>> {
        let mut alerts = Vec::new();
        let now = Utc::now();

        for camera in self.repos.cameras().find_all().await? {
            if camera.status == CameraStatus::Offline {
                alerts.push(Alert {
                    severity: "warning",
                    category: "camera",
                    message: format!("Camera \"{}\" is offline", camera.name),
                    timestamp: camera.last_heartbeat,
                });
            }
        }

        for gate in self.repos.gates().find_all().await? {
            if !gate.is_online {
                alerts.push(Alert {
                    severity: "warning",
                    category: "gate",
                    message: format!("Gate \"{}\" is offline", gate.name),
                    timestamp: gate.last_heartbeat,
                });
            }
        }

        // Lapsed but still marked active; lazy expiry has not seen them yet
        for vehicle in self.repos.vehicles().find_by_permanence(false).await? {
            if vehicle.status == VehicleStatus::Active && vehicle.is_expired_at(now) {
                alerts.push(Alert {
                    severity: "info",
                    category: "vehicle",
                    message: format!(
                        "Temporary vehicle \"{}\" has expired",
                        vehicle.license_plate
                    ),
                    timestamp: vehicle.expires_at,
                });
            }
        }

        let one_hour_ago = now - Duration::hours(1);
        let manual_count = self
            .repos
            .access_logs()
            .count_method_since(one_hour_ago, AccessMethod::Manual)
            .await?;
        if manual_count > MANUAL_OVERRIDE_ALERT_THRESHOLD {
            alerts.push(Alert {
                severity: "warning",
                category: "security",
                message: format!(
                    "High number of manual overrides in last hour: {}",
                    manual_count
                ),
                timestamp: Some(now),
            });
        }

        Ok(alerts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{mock_repos, seed_camera, seed_gate, seed_vehicle};

    #[test]
    fn health_percentage_weighted_average() {
        // 2 cameras (1 online) and 2 gates (2 online): (50 + 100) / 2
        assert_eq!(health_percentage(1, 2, 2, 2), 75.0);
        assert_eq!(health_bucket(75.0), HealthBucket::Warning);
    }

    #[test]
    fn empty_populations_are_fully_healthy() {
        assert_eq!(health_percentage(0, 0, 0, 0), 100.0);
        assert_eq!(health_bucket(100.0), HealthBucket::Healthy);
    }

    #[test]
    fn bucket_boundaries() {
        assert_eq!(health_bucket(90.0), HealthBucket::Healthy);
        assert_eq!(health_bucket(89.9), HealthBucket::Warning);
        assert_eq!(health_bucket(70.0), HealthBucket::Warning);
        assert_eq!(health_bucket(69.9), HealthBucket::Critical);
    }

    #[test]
    fn rounding_to_one_decimal() {
        // 1/3 cameras online, no gates: (33.33.. + 100) / 2 = 66.66.. -> 66.7
        assert_eq!(health_percentage(1, 3, 0, 0), 66.7);
    }

    #[tokio::test]
    async fn system_status_matches_seeded_fleet() {
        let (repos, store) = mock_repos();
        seed_camera(&store); // offline by default
        seed_gate(&store, None);
        {
            let mut gates = store.gates.lock().unwrap();
            gates[0].is_online = true;
        }
        let svc = DashboardService::new(repos);

        let status = svc.system_status().await.unwrap();
        // 0/1 cameras online, 1/1 gates online: (0 + 100) / 2
        assert_eq!(status.health_percentage, 50.0);
        assert_eq!(status.overall, HealthBucket::Critical);
        assert_eq!(status.cameras.total, 1);
        assert_eq!(status.gates.online, 1);
    }

    #[tokio::test]
    async fn alerts_flag_offline_devices_and_lapsed_vehicles() {
        let (repos, store) = mock_repos();
        seed_camera(&store); // offline
        seed_gate(&store, None); // is_online = false
        seed_vehicle(
            &store,
            "TMP001",
            false,
            Some(Utc::now() - Duration::hours(2)),
            VehicleStatus::Active,
        );
        let svc = DashboardService::new(repos);

        let alerts = svc.alerts().await.unwrap();
        let categories: Vec<&str> = alerts.iter().map(|a| a.category).collect();
        assert!(categories.contains(&"camera"));
        assert!(categories.contains(&"gate"));
        assert!(categories.contains(&"vehicle"));
        assert!(!categories.contains(&"security"));
    }
}
