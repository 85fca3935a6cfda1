//! Command facade consumed by the UI shell
//!
//! Every command is async and returns `Result<T, String>` so callers get a
//! uniform surface. Payloads cross as flat DTOs with string-encoded enums
//! and RFC 3339 timestamps.

use std::path::PathBuf;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::logic::directory::{self, DirectoryFilter, DirectoryStats, DirectoryUser};
use crate::logic::mock_data::{
    AlertFilter, AlertStats, AlertStatus, AlertTrendPoint, CategoryCount, DeviceFilter, Incident,
    IncidentFilter, IncidentStats, IncidentStatus, MockDataConfig, MockDataStore, NetworkDevice,
    NetworkMetrics, SecurityAlert, SecurityMetrics, TrafficPoint,
};
use crate::logic::navigation::{self, NavItem};
use crate::logic::preferences::Preferences;
use crate::logic::reports::{
    CategoryShare, MonthlyActivity, ReportEntry, UptimePoint, AVAILABLE_REPORTS, CATEGORY_SHARE,
    MONTHLY_ACTIVITY, WEEKLY_UPTIME,
};
use crate::logic::session::{SessionManager, SessionStorage, User, UserRole};

// ============================================================================
// STATE
// ============================================================================

/// Everything the command layer needs, owned by the caller. Construct one
/// per process and hand out references.
pub struct AppState {
    pub store: MockDataStore,
    pub session: SessionManager,
    preferences: RwLock<Preferences>,
    storage: SessionStorage,
}

impl AppState {
    /// `data_dir` overrides the platform data directory; tests point it at
    /// a temp directory.
    pub fn new(config: MockDataConfig, data_dir: Option<PathBuf>) -> Self {
        let storage = SessionStorage::new(data_dir);
        let preferences = match storage.load_preferences() {
            Ok(prefs) => prefs,
            Err(e) => {
                log::debug!("No stored preferences, using defaults: {}", e);
                Preferences::default()
            }
        };
        let session = SessionManager::new(storage.clone());
        session.restore();
        AppState {
            store: MockDataStore::new(config),
            session,
            preferences: RwLock::new(preferences),
            storage,
        }
    }
}

// ============================================================================
// DATA TRANSFER
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreStatus {
    pub is_loading: bool,
    pub is_refreshing: bool,
    pub device_count: usize,
    pub alert_count: usize,
    pub incident_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: String,
    pub ip: String,
    pub status: String,
    pub location: String,
    pub uptime_hours: u32,
    pub cpu: f64,
    pub memory: f64,
    pub bandwidth_in: f64,
    pub bandwidth_out: f64,
    pub last_seen: String,
}

impl From<NetworkDevice> for DeviceInfo {
    fn from(device: NetworkDevice) -> Self {
        DeviceInfo {
            id: device.id,
            name: device.name,
            device_type: device.device_type.as_str().to_string(),
            ip: device.ip,
            status: device.status.as_str().to_string(),
            location: device.location,
            uptime_hours: device.uptime_hours,
            cpu: device.cpu,
            memory: device.memory,
            bandwidth_in: device.bandwidth.inbound,
            bandwidth_out: device.bandwidth.outbound,
            last_seen: device.last_seen.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: String,
    #[serde(rename = "type")]
    pub alert_type: String,
    pub source: String,
    pub target: String,
    pub timestamp: String,
    pub status: String,
}

impl From<SecurityAlert> for AlertInfo {
    fn from(alert: SecurityAlert) -> Self {
        AlertInfo {
            id: alert.id,
            title: alert.title,
            description: alert.description,
            severity: alert.severity.as_str().to_string(),
            alert_type: alert.alert_type.as_str().to_string(),
            source: alert.source,
            target: alert.target,
            timestamp: alert.timestamp.to_rfc3339(),
            status: alert.status.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncidentInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: String,
    pub status: String,
    pub assignee: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub related_alerts: Vec<String>,
    pub category: String,
}

impl From<Incident> for IncidentInfo {
    fn from(incident: Incident) -> Self {
        IncidentInfo {
            id: incident.id,
            title: incident.title,
            description: incident.description,
            severity: incident.severity.as_str().to_string(),
            status: incident.status.as_str().to_string(),
            assignee: incident.assignee,
            created_at: incident.created_at.to_rfc3339(),
            updated_at: incident.updated_at.to_rfc3339(),
            related_alerts: incident.related_alerts,
            category: incident.category.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub role_display: String,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        UserInfo {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role.as_str().to_string(),
            role_display: user.role.display_name().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItemInfo {
    pub name: String,
    pub path: String,
}

impl From<NavItem> for NavItemInfo {
    fn from(item: NavItem) -> Self {
        NavItemInfo {
            name: item.name.to_string(),
            path: item.path.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryUserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub last_active: String,
    pub created_at: String,
}

impl From<DirectoryUser> for DirectoryUserInfo {
    fn from(user: DirectoryUser) -> Self {
        DirectoryUserInfo {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role.as_str().to_string(),
            status: user.status.as_str().to_string(),
            last_active: user.last_active.to_rfc3339(),
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEntryInfo {
    pub id: u32,
    pub name: String,
    pub kind: String,
    pub date: String,
    pub status: String,
}

impl From<ReportEntry> for ReportEntryInfo {
    fn from(entry: ReportEntry) -> Self {
        ReportEntryInfo {
            id: entry.id,
            name: entry.name.to_string(),
            kind: entry.kind.as_str().to_string(),
            date: entry.date.to_string(),
            status: entry.status.to_string(),
        }
    }
}

// ============================================================================
// STORE COMMANDS
// ============================================================================

pub async fn init_store(state: &AppState) -> Result<(), String> {
    state.store.init().await;
    Ok(())
}

pub async fn dispose_store(state: &AppState) -> Result<(), String> {
    state.store.dispose();
    Ok(())
}

pub async fn get_store_status(state: &AppState) -> Result<StoreStatus, String> {
    Ok(StoreStatus {
        is_loading: state.store.is_loading(),
        is_refreshing: state.store.is_refreshing(),
        device_count: state.store.devices().len(),
        alert_count: state.store.alerts().len(),
        incident_count: state.store.incidents().len(),
    })
}

pub async fn get_devices(
    state: &AppState,
    filter: Option<DeviceFilter>,
) -> Result<Vec<DeviceInfo>, String> {
    let devices = match &filter {
        Some(f) => state.store.devices_filtered(f),
        None => state.store.devices(),
    };
    Ok(devices.into_iter().map(DeviceInfo::from).collect())
}

pub async fn get_alerts(
    state: &AppState,
    filter: Option<AlertFilter>,
) -> Result<Vec<AlertInfo>, String> {
    let alerts = match &filter {
        Some(f) => state.store.alerts_filtered(f),
        None => state.store.alerts(),
    };
    Ok(alerts.into_iter().map(AlertInfo::from).collect())
}

pub async fn get_incidents(
    state: &AppState,
    filter: Option<IncidentFilter>,
) -> Result<Vec<IncidentInfo>, String> {
    let incidents = match &filter {
        Some(f) => state.store.incidents_filtered(f),
        None => state.store.incidents(),
    };
    Ok(incidents.into_iter().map(IncidentInfo::from).collect())
}

pub async fn get_network_metrics(state: &AppState) -> Result<NetworkMetrics, String> {
    Ok(state.store.network_metrics())
}

pub async fn get_security_metrics(state: &AppState) -> Result<SecurityMetrics, String> {
    Ok(state.store.security_metrics())
}

pub async fn get_alert_stats(state: &AppState) -> Result<AlertStats, String> {
    Ok(state.store.alert_stats())
}

pub async fn get_incident_stats(state: &AppState) -> Result<IncidentStats, String> {
    Ok(state.store.incident_stats())
}

pub async fn get_traffic_chart(state: &AppState) -> Result<Vec<TrafficPoint>, String> {
    Ok(state.store.traffic_series())
}

pub async fn get_alert_trend_chart(state: &AppState) -> Result<Vec<AlertTrendPoint>, String> {
    Ok(state.store.alert_trend_series())
}

pub async fn get_incident_category_chart(state: &AppState) -> Result<Vec<CategoryCount>, String> {
    Ok(state.store.incident_category_series())
}

pub async fn update_alert_status(state: &AppState, id: &str, status: &str) -> Result<(), String> {
    let status =
        AlertStatus::from_str(status).ok_or_else(|| format!("Unknown alert status: {}", status))?;
    state.store.update_alert_status(id, status);
    Ok(())
}

pub async fn update_incident_status(
    state: &AppState,
    id: &str,
    status: &str,
) -> Result<(), String> {
    let status = IncidentStatus::from_str(status)
        .ok_or_else(|| format!("Unknown incident status: {}", status))?;
    state.store.update_incident_status(id, status);
    Ok(())
}

// ============================================================================
// SESSION COMMANDS
// ============================================================================

pub async fn login(
    state: &AppState,
    email: &str,
    password: &str,
    role: &str,
) -> Result<UserInfo, String> {
    let role = UserRole::from_str(role).ok_or_else(|| format!("Unknown role: {}", role))?;
    let user = state.session.login(email, password, role).await;
    Ok(UserInfo::from(user))
}

pub async fn logout(state: &AppState) -> Result<(), String> {
    state.session.logout();
    Ok(())
}

pub async fn get_current_user(state: &AppState) -> Result<Option<UserInfo>, String> {
    Ok(state.session.current_user().map(UserInfo::from))
}

/// Sidebar entries for the signed-in operator. Signed out means an empty
/// menu, not an error.
pub async fn get_navigation(state: &AppState) -> Result<Vec<NavItemInfo>, String> {
    let items = match state.session.current_user() {
        Some(user) => navigation::visible_for(user.role),
        None => Vec::new(),
    };
    Ok(items.into_iter().map(NavItemInfo::from).collect())
}

// ============================================================================
// DIRECTORY AND REPORT COMMANDS
// ============================================================================

pub async fn get_directory(
    filter: Option<DirectoryFilter>,
) -> Result<Vec<DirectoryUserInfo>, String> {
    let users = directory::seed_directory();
    let users = match &filter {
        Some(f) => directory::filter_directory(&users, f),
        None => users,
    };
    Ok(users.into_iter().map(DirectoryUserInfo::from).collect())
}

pub async fn get_directory_stats() -> Result<DirectoryStats, String> {
    Ok(directory::directory_stats(&directory::seed_directory()))
}

pub async fn get_available_reports() -> Result<Vec<ReportEntryInfo>, String> {
    Ok(AVAILABLE_REPORTS
        .iter()
        .copied()
        .map(ReportEntryInfo::from)
        .collect())
}

pub async fn get_monthly_activity() -> Result<Vec<MonthlyActivity>, String> {
    Ok(MONTHLY_ACTIVITY.to_vec())
}

pub async fn get_category_share() -> Result<Vec<CategoryShare>, String> {
    Ok(CATEGORY_SHARE.to_vec())
}

pub async fn get_weekly_uptime() -> Result<Vec<UptimePoint>, String> {
    Ok(WEEKLY_UPTIME.to_vec())
}

// ============================================================================
// PREFERENCE COMMANDS
// ============================================================================

pub async fn get_preferences(state: &AppState) -> Result<Preferences, String> {
    Ok(state.preferences.read().clone())
}

/// Persists first, then commits to memory, so a failed write leaves the
/// in-memory settings untouched.
pub async fn set_preferences(state: &AppState, preferences: Preferences) -> Result<(), String> {
    state
        .storage
        .save_preferences(&preferences)
        .map_err(|e| e.to_string())?;
    *state.preferences.write() = preferences;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn test_state(seed: u64) -> (TempDir, AppState) {
        let dir = tempdir().unwrap();
        let config = MockDataConfig {
            load_delay_ms: 0,
            refresh_interval_secs: 3600,
            seed: Some(seed),
        };
        let state = AppState::new(config, Some(dir.path().to_path_buf()));
        (dir, state)
    }

    #[tokio::test]
    async fn test_store_status_tracks_lifecycle() {
        let (_dir, state) = test_state(1);
        let status = get_store_status(&state).await.unwrap();
        assert!(status.is_loading);
        assert_eq!(status.device_count, 0);

        init_store(&state).await.unwrap();
        let status = get_store_status(&state).await.unwrap();
        assert!(!status.is_loading);
        assert!(status.is_refreshing);
        assert_eq!(status.device_count, 50);
        assert_eq!(status.alert_count, 25);
        assert_eq!(status.incident_count, 15);

        dispose_store(&state).await.unwrap();
        let status = get_store_status(&state).await.unwrap();
        assert!(!status.is_refreshing);
    }

    #[tokio::test]
    async fn test_get_devices_applies_filter() {
        let (_dir, state) = test_state(2);
        init_store(&state).await.unwrap();

        let all = get_devices(&state, None).await.unwrap();
        assert_eq!(all.len(), 50);
        assert!(all[0].last_seen.contains('T'));

        let filter = DeviceFilter {
            status: Some("online".to_string()),
            ..Default::default()
        };
        let online = get_devices(&state, Some(filter)).await.unwrap();
        assert!(!online.is_empty());
        for device in &online {
            assert_eq!(device.status, "online");
        }
    }

    #[tokio::test]
    async fn test_update_alert_status_parses_input() {
        let (_dir, state) = test_state(3);
        init_store(&state).await.unwrap();

        let err = update_alert_status(&state, "ALT-00001", "escalated")
            .await
            .unwrap_err();
        assert!(err.contains("Unknown alert status"));

        update_alert_status(&state, "ALT-00001", "resolved")
            .await
            .unwrap();
        let alerts = get_alerts(&state, None).await.unwrap();
        let updated = alerts.iter().find(|a| a.id == "ALT-00001").unwrap();
        assert_eq!(updated.status, "resolved");
    }

    #[tokio::test]
    async fn test_update_incident_status_parses_input() {
        let (_dir, state) = test_state(4);
        init_store(&state).await.unwrap();

        assert!(update_incident_status(&state, "INC-2024001", "on_hold")
            .await
            .is_err());
        update_incident_status(&state, "INC-2024001", "closed")
            .await
            .unwrap();
        let incidents = get_incidents(&state, None).await.unwrap();
        let updated = incidents.iter().find(|i| i.id == "INC-2024001").unwrap();
        assert_eq!(updated.status, "closed");
    }

    #[tokio::test]
    async fn test_login_and_navigation_flow() {
        let (_dir, state) = test_state(5);

        assert!(get_current_user(&state).await.unwrap().is_none());
        assert!(get_navigation(&state).await.unwrap().is_empty());

        let user = login(&state, "admin@nita.gov", "pw", "system_admin")
            .await
            .unwrap();
        assert_eq!(user.name, "David Phiri");
        assert_eq!(user.role_display, "System Administrator");

        let nav = get_navigation(&state).await.unwrap();
        assert_eq!(nav.len(), 7);
        assert_eq!(nav[0].path, "/dashboard");

        logout(&state).await.unwrap();
        assert!(get_current_user(&state).await.unwrap().is_none());
        assert!(get_navigation(&state).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_login_rejects_unknown_role() {
        let (_dir, state) = test_state(6);
        let err = login(&state, "someone@nita.gov", "pw", "supervisor")
            .await
            .unwrap_err();
        assert!(err.contains("Unknown role"));
    }

    #[tokio::test]
    async fn test_metrics_commands() {
        let (_dir, state) = test_state(7);
        init_store(&state).await.unwrap();

        let network = get_network_metrics(&state).await.unwrap();
        assert_eq!(network.total_devices, 50);

        let security = get_security_metrics(&state).await.unwrap();
        assert_eq!(security.total_alerts, 25);

        let alerts = get_alert_stats(&state).await.unwrap();
        assert_eq!(alerts.total, 25);

        let incidents = get_incident_stats(&state).await.unwrap();
        assert!(incidents.open + incidents.in_progress + incidents.resolved <= 15);
    }

    #[tokio::test]
    async fn test_chart_commands() {
        let (_dir, state) = test_state(8);
        init_store(&state).await.unwrap();

        assert_eq!(get_traffic_chart(&state).await.unwrap().len(), 24);
        assert_eq!(get_alert_trend_chart(&state).await.unwrap().len(), 7);

        let categories = get_incident_category_chart(&state).await.unwrap();
        let total: usize = categories.iter().map(|c| c.value).sum();
        assert_eq!(total, 15);
    }

    #[tokio::test]
    async fn test_directory_and_report_commands() {
        let all = get_directory(None).await.unwrap();
        assert_eq!(all.len(), 6);

        let analysts = get_directory(Some(DirectoryFilter {
            role: Some("cybersecurity_analyst".to_string()),
            ..Default::default()
        }))
        .await
        .unwrap();
        assert_eq!(analysts.len(), 3);

        let stats = get_directory_stats().await.unwrap();
        assert_eq!(stats.total, 6);

        assert_eq!(get_available_reports().await.unwrap().len(), 4);
        assert_eq!(get_monthly_activity().await.unwrap().len(), 6);
        let share: u32 = get_category_share()
            .await
            .unwrap()
            .iter()
            .map(|c| c.value)
            .sum();
        assert_eq!(share, 100);
        assert_eq!(get_weekly_uptime().await.unwrap().len(), 7);
    }

    #[tokio::test]
    async fn test_preferences_persist_across_states() {
        let dir = tempdir().unwrap();
        let config = MockDataConfig {
            load_delay_ms: 0,
            refresh_interval_secs: 3600,
            seed: Some(9),
        };

        let state = AppState::new(config.clone(), Some(dir.path().to_path_buf()));
        let prefs = get_preferences(&state).await.unwrap();
        assert_eq!(prefs, Preferences::default());

        let updated = Preferences {
            weekly_reports: false,
            session_timeout_minutes: 120,
            ..Default::default()
        };
        set_preferences(&state, updated.clone()).await.unwrap();
        assert_eq!(get_preferences(&state).await.unwrap(), updated);

        let reloaded = AppState::new(config, Some(dir.path().to_path_buf()));
        assert_eq!(get_preferences(&reloaded).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_session_restores_across_states() {
        let dir = tempdir().unwrap();
        let config = MockDataConfig {
            load_delay_ms: 0,
            refresh_interval_secs: 3600,
            seed: Some(10),
        };

        let state = AppState::new(config.clone(), Some(dir.path().to_path_buf()));
        login(&state, "network@nita.gov", "pw", "network_admin")
            .await
            .unwrap();

        let reloaded = AppState::new(config, Some(dir.path().to_path_buf()));
        let user = get_current_user(&reloaded).await.unwrap().unwrap();
        assert_eq!(user.name, "John Mwale");
        assert_eq!(user.role, "network_admin");
    }
}
