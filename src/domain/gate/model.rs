//! Gate domain entity

use chrono::{DateTime, Utc};

/// Physical gate state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateStatus {
    Open,
    Closed,
    Error,
    Maintenance,
}

impl Default for GateStatus {
    fn default() -> Self {
        Self::Closed
    }
}

impl std::fmt::Display for GateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
            Self::Error => write!(f, "error"),
            Self::Maintenance => write!(f, "maintenance"),
        }
    }
}

impl GateStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "open" => Some(Self::Open),
            "closed" => Some(Self::Closed),
            "error" => Some(Self::Error),
            "maintenance" => Some(Self::Maintenance),
            _ => None,
        }
    }
}

/// Barrier mechanism type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateType {
    Barrier,
    Sliding,
    Swing,
}

impl Default for GateType {
    fn default() -> Self {
        Self::Barrier
    }
}

impl std::fmt::Display for GateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Barrier => write!(f, "barrier"),
            Self::Sliding => write!(f, "sliding"),
            Self::Swing => write!(f, "swing"),
        }
    }
}

impl GateType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "barrier" => Some(Self::Barrier),
            "sliding" => Some(Self::Sliding),
            "swing" => Some(Self::Swing),
            _ => None,
        }
    }
}

/// Command issued to a gate controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateCommand {
    Open,
    Close,
}

impl GateCommand {
    /// Gate status reached when the command succeeds
    pub fn target_status(&self) -> GateStatus {
        match self {
            Self::Open => GateStatus::Open,
            Self::Close => GateStatus::Closed,
        }
    }

    /// Relay path convention used when no explicit command is configured
    pub fn default_relay_path(&self) -> &'static str {
        match self {
            Self::Open => "relay/open",
            Self::Close => "relay/close",
        }
    }
}

/// Controlled gate (barrier)
#[derive(Debug, Clone)]
pub struct Gate {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub gate_type: GateType,
    /// Absent means simulated hardware: commands always succeed locally
    pub controller_ip: Option<String>,
    pub controller_port: u16,
    pub control_method: String,
    pub open_command: Option<String>,
    pub close_command: Option<String>,
    pub status: GateStatus,
    pub is_online: bool,
    pub last_heartbeat: Option<DateTime<Utc>>,
    /// Weak reference to the camera watching this gate
    pub camera_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Gate {
    /// Control URL for a command, or `None` when no controller is
    /// configured (simulated hardware).
    pub fn control_url(&self, command: GateCommand) -> Option<String> {
        let ip = self.controller_ip.as_deref()?;
        let configured = match command {
            GateCommand::Open => self.open_command.as_deref(),
            GateCommand::Close => self.close_command.as_deref(),
        };
        let path = configured.unwrap_or_else(|| command.default_relay_path());
        Some(format!("http://{}:{}/{}", ip, self.controller_port, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate(controller_ip: Option<&str>) -> Gate {
        let now = Utc::now();
        Gate {
            id: 1,
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
        }
    }

    #[test]
    fn no_controller_means_simulated() {
        assert_eq!(gate(None).control_url(GateCommand::Open), None);
    }

    #[test]
    fn default_relay_paths() {
        let g = gate(Some("10.0.0.5"));
        assert_eq!(
            g.control_url(GateCommand::Open).unwrap(),
            "http://10.0.0.5:8080/relay/open"
        );
        assert_eq!(
            g.control_url(GateCommand::Close).unwrap(),
            "http://10.0.0.5:8080/relay/close"
        );
    }

    #[test]
    fn explicit_command_template_wins() {
        let mut g = gate(Some("10.0.0.5"));
        g.open_command = Some("cgi-bin/open?door=1".to_string());
        assert_eq!(
            g.control_url(GateCommand::Open).unwrap(),
            "http://10.0.0.5:8080/cgi-bin/open?door=1"
        );
        // close still falls back to the relay convention
        assert_eq!(
            g.control_url(GateCommand::Close).unwrap(),
            "http://10.0.0.5:8080/relay/close"
        );
    }
}
