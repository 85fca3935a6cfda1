use chrono::{Duration, Utc};
use rand::Rng;

use crate::constants::{ALERT_COUNT, DEVICE_COUNT, INCIDENT_COUNT};

use super::types::{
    AlertStatus, AlertType, Bandwidth, DeviceStatus, DeviceType, Incident, IncidentCategory,
    IncidentStatus, NetworkDevice, SecurityAlert, Severity,
};

// ============================================================================
// SEED TABLES
// ============================================================================

const LOCATIONS: [&str; 6] = [
    "Data Center A",
    "Data Center B",
    "Ministry of Finance",
    "Ministry of Health",
    "Regional Office - Lusaka",
    "Regional Office - Ndola",
];

const ALERT_TEMPLATES: [(&str, AlertType, &str); 8] = [
    (
        "Brute Force Attack Detected",
        AlertType::Intrusion,
        "Multiple failed login attempts detected from external IP",
    ),
    (
        "Suspicious Malware Signature",
        AlertType::Malware,
        "Known malware signature detected in network traffic",
    ),
    (
        "DDoS Attack Mitigation",
        AlertType::Ddos,
        "Volumetric attack detected and automatically mitigated",
    ),
    (
        "Unauthorized Access Attempt",
        AlertType::UnauthorizedAccess,
        "Access attempt to restricted resource without proper credentials",
    ),
    (
        "Policy Violation",
        AlertType::PolicyViolation,
        "User attempted to access blocked category website",
    ),
    (
        "Traffic Anomaly Detected",
        AlertType::Anomaly,
        "Unusual traffic pattern detected on network segment",
    ),
    (
        "Port Scan Detected",
        AlertType::Intrusion,
        "Sequential port scanning detected from external source",
    ),
    (
        "Phishing Attempt Blocked",
        AlertType::Malware,
        "Email with phishing link intercepted and quarantined",
    ),
];

const INCIDENT_TEMPLATES: [(&str, &str); 8] = [
    (
        "Critical Server Compromise Investigation",
        "Investigation into potential compromise of production server",
    ),
    (
        "DDoS Attack Response",
        "Coordinated response to distributed denial of service attack",
    ),
    (
        "Data Exfiltration Alert",
        "Investigation of unusual data transfer patterns",
    ),
    (
        "Ransomware Containment",
        "Containment and remediation of ransomware infection",
    ),
    (
        "Insider Threat Investigation",
        "Investigation of suspicious internal user activity",
    ),
    (
        "Firewall Rule Violation",
        "Analysis of unauthorized firewall rule changes",
    ),
    (
        "Authentication System Failure",
        "Investigation of authentication service anomalies",
    ),
    (
        "Network Segmentation Breach",
        "Analysis of traffic crossing security boundaries",
    ),
];

const ASSIGNEES: [&str; 5] = [
    "John Mwale",
    "Sarah Banda",
    "David Phiri",
    "Grace Tembo",
    "Michael Zulu",
];

// ============================================================================
// GENERATORS
// ============================================================================

/// Builds the device fleet. IDs and names are positional so repeated runs
/// produce the same identifiers regardless of the RNG state.
pub fn generate_devices(rng: &mut impl Rng) -> Vec<NetworkDevice> {
    let now = Utc::now();
    (0..DEVICE_COUNT)
        .map(|i| {
            let device_type = DeviceType::ALL[i % DeviceType::ALL.len()];
            let status = if rng.gen::<f64>() > 0.15 {
                if rng.gen::<f64>() > 0.1 {
                    DeviceStatus::Online
                } else {
                    DeviceStatus::Warning
                }
            } else {
                DeviceStatus::Offline
            };
            NetworkDevice {
                id: format!("DEV-{:04}", i + 1),
                name: format!("{}-{:03}", device_type.as_str().to_uppercase(), i + 1),
                device_type,
                ip: format!("192.168.{}.{}", i / 255, i % 255 + 1),
                status,
                location: LOCATIONS[i % LOCATIONS.len()].to_string(),
                uptime_hours: rng.gen_range(24..744),
                cpu: rng.gen_range(10..90) as f64,
                memory: rng.gen_range(20..90) as f64,
                bandwidth: Bandwidth {
                    inbound: rng.gen_range(0..1000) as f64,
                    outbound: rng.gen_range(0..500) as f64,
                },
                last_seen: now - Duration::milliseconds(rng.gen_range(0..3_600_000i64)),
            }
        })
        .collect()
}

/// Builds the alert feed, newest first. Timestamps fall within the last
/// three days.
pub fn generate_alerts(rng: &mut impl Rng) -> Vec<SecurityAlert> {
    let now = Utc::now();
    let mut alerts: Vec<SecurityAlert> = (0..ALERT_COUNT)
        .map(|i| {
            let (title, alert_type, description) = ALERT_TEMPLATES[i % ALERT_TEMPLATES.len()];
            SecurityAlert {
                id: format!("ALT-{:05}", i + 1),
                title: title.to_string(),
                description: description.to_string(),
                severity: Severity::ALL[rng.gen_range(0..Severity::ALL.len())],
                alert_type,
                source: format!(
                    "{}.{}.{}.{}",
                    rng.gen_range(0..255),
                    rng.gen_range(0..255),
                    rng.gen_range(0..255),
                    rng.gen_range(0..255)
                ),
                target: format!("192.168.{}.{}", rng.gen_range(0..10), rng.gen_range(0..255)),
                timestamp: now - Duration::milliseconds(rng.gen_range(0..259_200_000i64)),
                status: AlertStatus::ALL[rng.gen_range(0..AlertStatus::ALL.len())],
            }
        })
        .collect();
    alerts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    alerts
}

/// Builds the incident queue, newest first. Created within the last week,
/// updated within a day of creation.
pub fn generate_incidents(rng: &mut impl Rng) -> Vec<Incident> {
    let now = Utc::now();
    let mut incidents: Vec<Incident> = (0..INCIDENT_COUNT)
        .map(|i| {
            let (title, description) = INCIDENT_TEMPLATES[i % INCIDENT_TEMPLATES.len()];
            let created_at = now - Duration::milliseconds(rng.gen_range(0..604_800_000i64));
            let assignee = if rng.gen::<f64>() > 0.2 {
                Some(ASSIGNEES[rng.gen_range(0..ASSIGNEES.len())].to_string())
            } else {
                None
            };
            // References follow the alert ID scheme but are not checked
            // against the generated feed.
            let related_alerts = (0..rng.gen_range(1..=5))
                .map(|j| format!("ALT-{:05}", j + 1))
                .collect();
            Incident {
                id: format!("INC-{}", 2024001 + i),
                title: title.to_string(),
                description: description.to_string(),
                severity: Severity::ALL[rng.gen_range(0..Severity::ALL.len())],
                status: IncidentStatus::ALL[rng.gen_range(0..IncidentStatus::ALL.len())],
                assignee,
                created_at,
                updated_at: created_at + Duration::milliseconds(rng.gen_range(0..86_400_000i64)),
                related_alerts,
                category: IncidentCategory::ALL[rng.gen_range(0..IncidentCategory::ALL.len())],
            }
        })
        .collect();
    incidents.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    incidents
}
