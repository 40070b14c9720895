//! Vehicle domain entity

use chrono::{DateTime, Utc};

/// Registration status of a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleStatus {
    /// Registered and admitted
    Active,
    /// Registration suspended by an operator
    Inactive,
    /// Awaiting approval
    Pending,
    /// Temporary registration has lapsed
    Expired,
}

impl Default for VehicleStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
            Self::Pending => write!(f, "pending"),
            Self::Expired => write!(f, "expired"),
        }
    }
}

impl VehicleStatus {
    /// Parse a status string. Unknown values are rejected so that free-form
    /// strings never reach the store.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            "pending" => Some(Self::Pending),
            "expired" => Some(Self::Expired),
            _ => None,
        }
    }
}

/// Vehicle category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleType {
    Car,
    Motorcycle,
    Truck,
}

impl Default for VehicleType {
    fn default() -> Self {
        Self::Car
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Car => write!(f, "car"),
            Self::Motorcycle => write!(f, "motorcycle"),
            Self::Truck => write!(f, "truck"),
        }
    }
}

impl VehicleType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "car" => Some(Self::Car),
            "motorcycle" => Some(Self::Motorcycle),
            "truck" => Some(Self::Truck),
            _ => None,
        }
    }
}

/// Registered vehicle
#[derive(Debug, Clone)]
pub struct Vehicle {
    pub id: i32,
    /// License plate, stored uppercase
    pub license_plate: String,
    pub owner_name: String,
    pub vehicle_type: VehicleType,
    pub color: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub status: VehicleStatus,
    /// Permanent residents keep access indefinitely; visitors expire
    pub is_permanent: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    /// Whether a temporary registration has lapsed at `now`.
    /// The expiry instant itself is still valid (inclusive boundary).
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        if self.is_permanent {
            return false;
        }
        match self.expires_at {
            Some(expires_at) => now > expires_at,
            None => false,
        }
    }

    /// Admission rule: active status, and for temporary vehicles the
    /// expiry instant must not have passed.
    pub fn access_allowed_at(&self, now: DateTime<Utc>) -> bool {
        self.status == VehicleStatus::Active && !self.is_expired_at(now)
    }
}

/// Normalize a license plate for lookup and storage: uppercase, trimmed.
pub fn normalize_plate(plate: &str) -> String {
    plate.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn vehicle(is_permanent: bool, expires_at: Option<DateTime<Utc>>) -> Vehicle {
        let now = Utc::now();
        Vehicle {
            id: 1,
            license_plate: "ABC123".to_string(),
            owner_name: "Resident".to_string(),
            vehicle_type: VehicleType::Car,
            color: None,
            brand: None,
            model: None,
            status: VehicleStatus::Active,
            is_permanent,
            expires_at,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn permanent_vehicle_never_expires() {
        let now = Utc::now();
        let v = vehicle(true, Some(now - Duration::hours(1)));
        assert!(!v.is_expired_at(now));
        assert!(v.access_allowed_at(now));
    }

    #[test]
    fn expiry_boundary_is_inclusive() {
        let now = Utc::now();
        let v = vehicle(false, Some(now));
        assert!(!v.is_expired_at(now));
        assert!(v.access_allowed_at(now));
        assert!(v.is_expired_at(now + Duration::seconds(1)));
    }

    #[test]
    fn inactive_vehicle_is_denied_even_when_unexpired() {
        let now = Utc::now();
        let mut v = vehicle(true, None);
        v.status = VehicleStatus::Inactive;
        assert!(!v.access_allowed_at(now));
    }

    #[test]
    fn plate_normalization() {
        assert_eq!(normalize_plate("  abc123 "), "ABC123");
    }

    #[test]
    fn status_parse_rejects_unknown() {
        assert_eq!(VehicleStatus::parse("ACTIVE"), Some(VehicleStatus::Active));
        assert_eq!(VehicleStatus::parse("bogus"), None);
    }
}
