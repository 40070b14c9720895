//! Access decision engine
//!
//! Decides whether a vehicle may pass, based on registration status and
//! expiry. Expiry of temporary vehicles is lazy: the lookup evaluates the
//! clock, then conditionally persists `expired` before the decision is made.
//! The target state is idempotent, so concurrent lookups racing on the same
//! vehicle are last-write-wins safe.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use super::audit::AuditLogger;
use crate::domain::{
    normalize_plate, AccessMethod, DomainError, DomainResult, EventType, NewAccessLog,
    RepositoryProvider, Vehicle, VehicleStatus,
};

/// Outcome of an admission check
#[derive(Debug, Clone)]
pub struct AccessDecision {
    pub vehicle: Option<Vehicle>,
    pub allowed: bool,
    /// Denial reason: "unregistered", "expired", "inactive" or "pending"
    pub reason: Option<&'static str>,
}

pub struct AccessDecisionService {
    repos: Arc<dyn RepositoryProvider>,
    audit: Arc<AuditLogger>,
}

impl AccessDecisionService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, audit: Arc<AuditLogger>) -> Self {
        Self { repos, audit }
    }

    /// Decide admission for a plate. Every decision appends one access-log
    /// row (fire-and-forget); the decision itself never fails on a log
    /// write.
    pub async fn decide(
        &self,
        plate: &str,
        method: AccessMethod,
        camera_id: Option<i32>,
        gate_id: Option<i32>,
    ) -> DomainResult<AccessDecision> {
        let plate = normalize_plate(plate);
        if plate.is_empty() {
            return Err(DomainError::Validation(
                "license plate must not be empty".to_string(),
            ));
        }

        let Some(mut vehicle) = self.repos.vehicles().find_by_plate(&plate).await? else {
            debug!(license_plate = %plate, "admission denied: unregistered");
            self.audit
                .record(NewAccessLog {
                    vehicle_id: None,
                    camera_id,
                    gate_id,
                    license_plate: plate,
                    event_type: EventType::Denied,
                    access_method: method,
                    confidence_score: None,
                    image_path: None,
                    manual_reason: None,
                    operator_name: None,
                })
                .await;
            return Ok(AccessDecision {
                vehicle: None,
                allowed: false,
                reason: Some("unregistered"),
            });
        };

        let now = Utc::now();

        // Evaluate, then conditionally persist. The single-row UPDATE is the
        // transaction; it must land before the decision is reported.
        if vehicle.status != VehicleStatus::Expired && vehicle.is_expired_at(now) {
            self.repos
                .vehicles()
                .update_status(vehicle.id, VehicleStatus::Expired)
                .await?;
            vehicle.status = VehicleStatus::Expired;
        }

        let allowed = vehicle.access_allowed_at(now);
        let reason = if allowed {
            None
        } else {
            Some(match vehicle.status {
                VehicleStatus::Expired => "expired",
                VehicleStatus::Inactive => "inactive",
                VehicleStatus::Pending => "pending",
                // Active but lapsed is persisted as Expired above
                VehicleStatus::Active => "expired",
            })
        };

        self.audit
            .record(NewAccessLog {
                vehicle_id: Some(vehicle.id),
                camera_id,
                gate_id,
                license_plate: vehicle.license_plate.clone(),
                event_type: if allowed {
                    EventType::Entry
                } else {
                    EventType::Denied
                },
                access_method: method,
                confidence_score: None,
                image_path: None,
                manual_reason: None,
                operator_name: None,
            })
            .await;

        Ok(AccessDecision {
            vehicle: Some(vehicle),
            allowed,
            reason,
        })
    }

    /// Persist `expired` for every lapsed temporary vehicle in the slice and
    /// patch the in-memory copies. Used by the temporary-vehicle listing.
    pub async fn expire_lapsed(&self, vehicles: &mut [Vehicle]) -> DomainResult<()> {
        let now = Utc::now();
        for vehicle in vehicles.iter_mut() {
            if vehicle.status != VehicleStatus::Expired && vehicle.is_expired_at(now) {
                self.repos
                    .vehicles()
                    .update_status(vehicle.id, VehicleStatus::Expired)
                    .await?;
                vehicle.status = VehicleStatus::Expired;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{mock_repos, seed_vehicle};
    use chrono::Duration;

    fn service(repos: Arc<dyn RepositoryProvider>) -> AccessDecisionService {
        let audit = Arc::new(AuditLogger::new(repos.clone()));
        AccessDecisionService::new(repos, audit)
    }

    #[tokio::test]
    async fn unregistered_plate_is_denied_and_logged() {
        let (repos, store) = mock_repos();
        let svc = service(repos);

        let decision = svc
            .decide("zz999", AccessMethod::Anpr, None, None)
            .await
            .unwrap();
        assert!(!decision.allowed);
        assert_eq!(decision.reason, Some("unregistered"));
        assert!(decision.vehicle.is_none());

        let logs = store.logs.lock().unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].event_type, EventType::Denied);
        assert_eq!(logs[0].license_plate, "ZZ999");
    }

    #[tokio::test]
    async fn active_permanent_vehicle_is_allowed() {
        let (repos, store) = mock_repos();
        seed_vehicle(&store, "ABC123", true, None, VehicleStatus::Active);
        let svc = service(repos);

        let decision = svc
            .decide("abc123", AccessMethod::Anpr, None, None)
            .await
            .unwrap();
        assert!(decision.allowed);
        assert_eq!(decision.reason, None);

        let logs = store.logs.lock().unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].event_type, EventType::Entry);
    }

    #[tokio::test]
    async fn lapsed_temporary_vehicle_is_expired_and_denied() {
        let (repos, store) = mock_repos();
        let expires = Utc::now() - Duration::hours(1);
        seed_vehicle(&store, "TMP001", false, Some(expires), VehicleStatus::Active);
        let svc = service(repos);

        let decision = svc
            .decide("TMP001", AccessMethod::Anpr, None, None)
            .await
            .unwrap();
        assert!(!decision.allowed);
        assert_eq!(decision.reason, Some("expired"));
        assert_eq!(
            decision.vehicle.unwrap().status,
            VehicleStatus::Expired
        );

        // status transition persisted
        let vehicles = store.vehicles.lock().unwrap();
        assert_eq!(vehicles[0].status, VehicleStatus::Expired);
    }

    #[tokio::test]
    async fn unexpired_temporary_vehicle_is_allowed_at_boundary() {
        let (repos, store) = mock_repos();
        let expires = Utc::now() + Duration::hours(12);
        seed_vehicle(&store, "TMP002", false, Some(expires), VehicleStatus::Active);
        let svc = service(repos);

        let decision = svc
            .decide("TMP002", AccessMethod::Anpr, None, None)
            .await
            .unwrap();
        assert!(decision.allowed);
    }

    #[tokio::test]
    async fn inactive_vehicle_is_denied_with_reason() {
        let (repos, store) = mock_repos();
        seed_vehicle(&store, "DEF456", true, None, VehicleStatus::Inactive);
        let svc = service(repos);

        let decision = svc
            .decide("DEF456", AccessMethod::Anpr, None, None)
            .await
            .unwrap();
        assert!(!decision.allowed);
        assert_eq!(decision.reason, Some("inactive"));
    }

    #[tokio::test]
    async fn audit_failure_does_not_fail_the_decision() {
        let (repos, store) = mock_repos();
        seed_vehicle(&store, "ABC123", true, None, VehicleStatus::Active);
        store.fail_log_appends();
        let svc = service(repos);

        let decision = svc
            .decide("ABC123", AccessMethod::Anpr, None, None)
            .await
            .unwrap();
        assert!(decision.allowed);
        assert!(store.logs.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_plate_is_a_validation_error() {
        let (repos, _store) = mock_repos();
        let svc = service(repos);
        let err = svc
            .decide("   ", AccessMethod::Anpr, None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
