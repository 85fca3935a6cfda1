use chrono::{Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::types::{
    AlertStatus, DeviceStatus, Incident, IncidentStatus, NetworkDevice, SecurityAlert, Severity,
};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Fleet-wide health rollup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkMetrics {
    pub total_devices: usize,
    pub online_devices: usize,
    pub offline_devices: usize,
    pub warning_devices: usize,
    pub total_bandwidth: f64,
    pub average_cpu: f64,
    pub average_memory: f64,
    pub packet_loss: f64,
    pub latency: f64,
}

/// Alert-feed posture rollup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityMetrics {
    pub total_alerts: usize,
    pub critical_alerts: usize,
    pub high_alerts: usize,
    pub medium_alerts: usize,
    pub low_alerts: usize,
    pub resolved_today: usize,
    pub average_response_time: f64,
    pub threats_blocked: u64,
}

/// Headline counters for the alert queue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertStats {
    pub total: usize,
    pub new: usize,
    pub investigating: usize,
    pub critical: usize,
}

/// Headline counters for the incident queue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncidentStats {
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub critical: usize,
}

// ============================================================================
// DERIVATIONS
// ============================================================================

/// Recomputed from the device list on every read. Packet loss and latency
/// are decorative link-quality figures, not derived from device state.
pub fn network_metrics(devices: &[NetworkDevice], rng: &mut impl Rng) -> NetworkMetrics {
    let total_devices = devices.len();
    let online_devices = devices
        .iter()
        .filter(|d| d.status == DeviceStatus::Online)
        .count();
    let offline_devices = devices
        .iter()
        .filter(|d| d.status == DeviceStatus::Offline)
        .count();
    let warning_devices = devices
        .iter()
        .filter(|d| d.status == DeviceStatus::Warning)
        .count();
    let total_bandwidth = devices
        .iter()
        .fold(0.0, |acc, d| acc + d.bandwidth.inbound + d.bandwidth.outbound);
    let (average_cpu, average_memory) = if devices.is_empty() {
        (0.0, 0.0)
    } else {
        (
            devices.iter().map(|d| d.cpu).sum::<f64>() / total_devices as f64,
            devices.iter().map(|d| d.memory).sum::<f64>() / total_devices as f64,
        )
    };
    NetworkMetrics {
        total_devices,
        online_devices,
        offline_devices,
        warning_devices,
        total_bandwidth,
        average_cpu,
        average_memory,
        packet_loss: 0.02 + rng.gen::<f64>() * 0.03,
        latency: 12.0 + rng.gen::<f64>() * 8.0,
    }
}

/// Severity buckets exclude resolved alerts; `resolved_today` looks back
/// 24 hours from now.
pub fn security_metrics(alerts: &[SecurityAlert], rng: &mut impl Rng) -> SecurityMetrics {
    let day_ago = Utc::now() - Duration::hours(24);
    let unresolved = |severity: Severity| {
        alerts
            .iter()
            .filter(|a| a.severity == severity && a.status != AlertStatus::Resolved)
            .count()
    };
    SecurityMetrics {
        total_alerts: alerts.len(),
        critical_alerts: unresolved(Severity::Critical),
        high_alerts: unresolved(Severity::High),
        medium_alerts: unresolved(Severity::Medium),
        low_alerts: unresolved(Severity::Low),
        resolved_today: alerts
            .iter()
            .filter(|a| a.status == AlertStatus::Resolved && a.timestamp > day_ago)
            .count(),
        average_response_time: 15.0 + rng.gen::<f64>() * 30.0,
        threats_blocked: 1247 + rng.gen_range(0..100),
    }
}

pub fn alert_stats(alerts: &[SecurityAlert]) -> AlertStats {
    AlertStats {
        total: alerts.len(),
        new: alerts
            .iter()
            .filter(|a| a.status == AlertStatus::New)
            .count(),
        investigating: alerts
            .iter()
            .filter(|a| a.status == AlertStatus::Investigating)
            .count(),
        critical: alerts
            .iter()
            .filter(|a| a.severity == Severity::Critical && a.status == AlertStatus::New)
            .count(),
    }
}

pub fn incident_stats(incidents: &[Incident]) -> IncidentStats {
    IncidentStats {
        open: incidents
            .iter()
            .filter(|i| i.status == IncidentStatus::Open)
            .count(),
        in_progress: incidents
            .iter()
            .filter(|i| i.status == IncidentStatus::InProgress)
            .count(),
        resolved: incidents
            .iter()
            .filter(|i| i.status == IncidentStatus::Resolved)
            .count(),
        critical: incidents
            .iter()
            .filter(|i| {
                i.severity == Severity::Critical
                    && i.status != IncidentStatus::Resolved
                    && i.status != IncidentStatus::Closed
            })
            .count(),
    }
}
