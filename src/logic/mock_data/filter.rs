use serde::{Deserialize, Serialize};

use super::types::{Incident, NetworkDevice, SecurityAlert};

// ============================================================================
// FILTERS
// ============================================================================

/// Device list filter. Unset fields match everything; `query` is matched
/// case-insensitively against name and id, and as-is against the IP.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceFilter {
    pub query: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub device_type: Option<String>,
    pub location: Option<String>,
}

impl DeviceFilter {
    pub fn matches(&self, device: &NetworkDevice) -> bool {
        if let Some(q) = &self.query {
            let needle = q.to_lowercase();
            let hit = device.name.to_lowercase().contains(&needle)
                || device.ip.contains(q.as_str())
                || device.id.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        if let Some(status) = &self.status {
            if device.status.as_str() != status {
                return false;
            }
        }
        if let Some(device_type) = &self.device_type {
            if device.device_type.as_str() != device_type {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if &device.location != location {
                return false;
            }
        }
        true
    }
}

/// Alert feed filter, same matching rules as [`DeviceFilter`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertFilter {
    pub query: Option<String>,
    pub status: Option<String>,
    pub severity: Option<String>,
    #[serde(rename = "type")]
    pub alert_type: Option<String>,
}

impl AlertFilter {
    pub fn matches(&self, alert: &SecurityAlert) -> bool {
        if let Some(q) = &self.query {
            let needle = q.to_lowercase();
            let hit = alert.title.to_lowercase().contains(&needle)
                || alert.id.to_lowercase().contains(&needle)
                || alert.description.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        if let Some(status) = &self.status {
            if alert.status.as_str() != status {
                return false;
            }
        }
        if let Some(severity) = &self.severity {
            if alert.severity.as_str() != severity {
                return false;
            }
        }
        if let Some(alert_type) = &self.alert_type {
            if alert.alert_type.as_str() != alert_type {
                return false;
            }
        }
        true
    }
}

/// Incident queue filter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncidentFilter {
    pub query: Option<String>,
    pub status: Option<String>,
    pub severity: Option<String>,
}

impl IncidentFilter {
    pub fn matches(&self, incident: &Incident) -> bool {
        if let Some(q) = &self.query {
            let needle = q.to_lowercase();
            let hit = incident.title.to_lowercase().contains(&needle)
                || incident.id.to_lowercase().contains(&needle)
                || incident.description.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        if let Some(status) = &self.status {
            if incident.status.as_str() != status {
                return false;
            }
        }
        if let Some(severity) = &self.severity {
            if incident.severity.as_str() != severity {
                return false;
            }
        }
        true
    }
}

// ============================================================================
// APPLICATION
// ============================================================================

pub fn filter_devices(devices: &[NetworkDevice], filter: &DeviceFilter) -> Vec<NetworkDevice> {
    devices
        .iter()
        .filter(|d| filter.matches(d))
        .cloned()
        .collect()
}

pub fn filter_alerts(alerts: &[SecurityAlert], filter: &AlertFilter) -> Vec<SecurityAlert> {
    alerts
        .iter()
        .filter(|a| filter.matches(a))
        .cloned()
        .collect()
}

pub fn filter_incidents(incidents: &[Incident], filter: &IncidentFilter) -> Vec<Incident> {
    incidents
        .iter()
        .filter(|i| filter.matches(i))
        .cloned()
        .collect()
}
