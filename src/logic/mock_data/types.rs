use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// DEVICES
// ============================================================================

/// Hardware classes rotated across the generated fleet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceType {
    Router,
    Switch,
    Firewall,
    Server,
    Endpoint,
}

impl DeviceType {
    pub const ALL: [DeviceType; 5] = [
        DeviceType::Router,
        DeviceType::Switch,
        DeviceType::Firewall,
        DeviceType::Server,
        DeviceType::Endpoint,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Router => "router",
            DeviceType::Switch => "switch",
            DeviceType::Firewall => "firewall",
            DeviceType::Server => "server",
            DeviceType::Endpoint => "endpoint",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "router" => Some(DeviceType::Router),
            "switch" => Some(DeviceType::Switch),
            "firewall" => Some(DeviceType::Firewall),
            "server" => Some(DeviceType::Server),
            "endpoint" => Some(DeviceType::Endpoint),
            _ => None,
        }
    }
}

/// Reachability state reported for a device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceStatus {
    Online,
    Offline,
    Warning,
}

impl DeviceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceStatus::Online => "online",
            DeviceStatus::Offline => "offline",
            DeviceStatus::Warning => "warning",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "online" => Some(DeviceStatus::Online),
            "offline" => Some(DeviceStatus::Offline),
            "warning" => Some(DeviceStatus::Warning),
            _ => None,
        }
    }
}

/// Throughput in Mbps, per direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bandwidth {
    #[serde(rename = "in")]
    pub inbound: f64,
    #[serde(rename = "out")]
    pub outbound: f64,
}

/// Managed network device
///
/// Created in bulk at store initialization and mutated in place by the
/// perturbation loop; never appended or deleted. Invariants: `cpu` and
/// `memory` stay within [0, 100], bandwidth never goes negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkDevice {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    pub ip: String,
    pub status: DeviceStatus,
    pub location: String,
    pub uptime_hours: u32,
    pub cpu: f64,
    pub memory: f64,
    pub bandwidth: Bandwidth,
    pub last_seen: DateTime<Utc>,
}

// ============================================================================
// ALERTS
// ============================================================================

/// Four-level severity scale shared by alerts and incidents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "critical" => Some(Severity::Critical),
            "high" => Some(Severity::High),
            "medium" => Some(Severity::Medium),
            "low" => Some(Severity::Low),
            _ => None,
        }
    }
}

/// Detection family an alert belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertType {
    Intrusion,
    Malware,
    Ddos,
    UnauthorizedAccess,
    PolicyViolation,
    Anomaly,
}

impl AlertType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::Intrusion => "intrusion",
            AlertType::Malware => "malware",
            AlertType::Ddos => "ddos",
            AlertType::UnauthorizedAccess => "unauthorized_access",
            AlertType::PolicyViolation => "policy_violation",
            AlertType::Anomaly => "anomaly",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "intrusion" => Some(AlertType::Intrusion),
            "malware" => Some(AlertType::Malware),
            "ddos" => Some(AlertType::Ddos),
            "unauthorized_access" => Some(AlertType::UnauthorizedAccess),
            "policy_violation" => Some(AlertType::PolicyViolation),
            "anomaly" => Some(AlertType::Anomaly),
            _ => None,
        }
    }
}

/// Triage state of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertStatus {
    New,
    Investigating,
    Resolved,
    FalsePositive,
}

impl AlertStatus {
    pub const ALL: [AlertStatus; 4] = [
        AlertStatus::New,
        AlertStatus::Investigating,
        AlertStatus::Resolved,
        AlertStatus::FalsePositive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertStatus::New => "new",
            AlertStatus::Investigating => "investigating",
            AlertStatus::Resolved => "resolved",
            AlertStatus::FalsePositive => "false_positive",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "new" => Some(AlertStatus::New),
            "investigating" => Some(AlertStatus::Investigating),
            "resolved" => Some(AlertStatus::Resolved),
            "false_positive" => Some(AlertStatus::FalsePositive),
            _ => None,
        }
    }
}

/// Detection raised against the monitored estate
///
/// The feed is sorted newest-first at creation. Only `status` changes after
/// generation, via an explicit update operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityAlert {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub source: String,
    pub target: String,
    pub timestamp: DateTime<Utc>,
    pub status: AlertStatus,
}

// ============================================================================
// INCIDENTS
// ============================================================================

/// Workflow state of an incident
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncidentStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl IncidentStatus {
    pub const ALL: [IncidentStatus; 4] = [
        IncidentStatus::Open,
        IncidentStatus::InProgress,
        IncidentStatus::Resolved,
        IncidentStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentStatus::Open => "open",
            IncidentStatus::InProgress => "in_progress",
            IncidentStatus::Resolved => "resolved",
            IncidentStatus::Closed => "closed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "open" => Some(IncidentStatus::Open),
            "in_progress" => Some(IncidentStatus::InProgress),
            "resolved" => Some(IncidentStatus::Resolved),
            "closed" => Some(IncidentStatus::Closed),
            _ => None,
        }
    }
}

/// Response domain an incident is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncidentCategory {
    NetworkSecurity,
    AccessControl,
    DataBreach,
    SystemCompromise,
    PolicyViolation,
}

impl IncidentCategory {
    pub const ALL: [IncidentCategory; 5] = [
        IncidentCategory::NetworkSecurity,
        IncidentCategory::AccessControl,
        IncidentCategory::DataBreach,
        IncidentCategory::SystemCompromise,
        IncidentCategory::PolicyViolation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentCategory::NetworkSecurity => "Network Security",
            IncidentCategory::AccessControl => "Access Control",
            IncidentCategory::DataBreach => "Data Breach",
            IncidentCategory::SystemCompromise => "System Compromise",
            IncidentCategory::PolicyViolation => "Policy Violation",
        }
    }
}

/// Tracked response case, optionally assigned to an analyst
///
/// The queue is sorted newest-first by `created_at` at creation. Invariant:
/// `updated_at >= created_at` at all times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub status: IncidentStatus,
    pub assignee: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub related_alerts: Vec<String>,
    pub category: IncidentCategory,
}
