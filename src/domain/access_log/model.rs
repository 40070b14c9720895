//! Access log domain entity

use chrono::{DateTime, Utc};

/// License plate recorded for operator-triggered events without a plate
pub const MANUAL_PLATE: &str = "MANUAL";

/// Kind of access event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    Entry,
    Exit,
    Denied,
    ManualOpen,
    ManualClose,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entry => write!(f, "entry"),
            Self::Exit => write!(f, "exit"),
            Self::Denied => write!(f, "denied"),
            Self::ManualOpen => write!(f, "manual_open"),
            Self::ManualClose => write!(f, "manual_close"),
        }
    }
}

impl EventType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "entry" => Some(Self::Entry),
            "exit" => Some(Self::Exit),
            "denied" => Some(Self::Denied),
            "manual_open" => Some(Self::ManualOpen),
            "manual_close" => Some(Self::ManualClose),
            _ => None,
        }
    }
}

/// How the decision was made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMethod {
    Anpr,
    Manual,
    Emergency,
}

impl Default for AccessMethod {
    fn default() -> Self {
        Self::Anpr
    }
}

impl std::fmt::Display for AccessMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Anpr => write!(f, "anpr"),
            Self::Manual => write!(f, "manual"),
            Self::Emergency => write!(f, "emergency"),
        }
    }
}

impl AccessMethod {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "anpr" => Some(Self::Anpr),
            "manual" => Some(Self::Manual),
            "emergency" => Some(Self::Emergency),
            _ => None,
        }
    }
}

/// Immutable access event record
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    pub id: i32,
    pub vehicle_id: Option<i32>,
    pub camera_id: Option<i32>,
    pub gate_id: Option<i32>,
    pub license_plate: String,
    pub event_type: EventType,
    pub access_method: AccessMethod,
    pub confidence_score: Option<f64>,
    pub image_path: Option<String>,
    pub manual_reason: Option<String>,
    pub operator_name: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Fields for appending a log row
#[derive(Debug, Clone)]
pub struct NewAccessLog {
    pub vehicle_id: Option<i32>,
    pub camera_id: Option<i32>,
    pub gate_id: Option<i32>,
    pub license_plate: String,
    pub event_type: EventType,
    pub access_method: AccessMethod,
    pub confidence_score: Option<f64>,
    pub image_path: Option<String>,
    pub manual_reason: Option<String>,
    pub operator_name: Option<String>,
}

impl NewAccessLog {
    /// Row for an operator-triggered gate action
    pub fn manual(
        gate_id: i32,
        event_type: EventType,
        operator_name: Option<String>,
        reason: Option<String>,
    ) -> Self {
        Self {
            vehicle_id: None,
            camera_id: None,
            gate_id: Some(gate_id),
            license_plate: MANUAL_PLATE.to_string(),
            event_type,
            access_method: AccessMethod::Manual,
            confidence_score: None,
            image_path: None,
            manual_reason: Some(reason.unwrap_or_else(|| "Manual override".to_string())),
            operator_name: Some(operator_name.unwrap_or_else(|| "Unknown".to_string())),
        }
    }
}
