//! In-memory data store with simulated load latency and a background
//! refresh loop that drifts device telemetry while the store is live.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use parking_lot::{Mutex, RwLock};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants;

use super::charts::{self, AlertTrendPoint, CategoryCount, TrafficPoint};
use super::filter::{self, AlertFilter, DeviceFilter, IncidentFilter};
use super::generate;
use super::metrics::{self, AlertStats, IncidentStats, NetworkMetrics, SecurityMetrics};
use super::types::{
    AlertStatus, DeviceStatus, Incident, IncidentStatus, NetworkDevice, SecurityAlert,
};

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Store tuning knobs. Defaults come from the environment overrides in
/// [`crate::constants`]; tests pass a zero delay and a fixed seed.
#[derive(Debug, Clone)]
pub struct MockDataConfig {
    pub load_delay_ms: u64,
    pub refresh_interval_secs: u64,
    pub seed: Option<u64>,
}

impl Default for MockDataConfig {
    fn default() -> Self {
        MockDataConfig {
            load_delay_ms: constants::get_load_delay_ms(),
            refresh_interval_secs: constants::get_refresh_interval(),
            seed: None,
        }
    }
}

// ============================================================================
// STATE
// ============================================================================

struct StoreInner {
    devices: RwLock<Vec<NetworkDevice>>,
    alerts: RwLock<Vec<SecurityAlert>>,
    incidents: RwLock<Vec<Incident>>,
    rng: Mutex<StdRng>,
    started: AtomicBool,
    loading: AtomicBool,
    running: AtomicBool,
    refresh_interval: Duration,
}

impl StoreInner {
    // Lock order is data before rng, everywhere.
    fn perturb(&self) {
        let now = Utc::now();
        let mut devices = self.devices.write();
        let mut rng = self.rng.lock();
        for device in devices.iter_mut() {
            device.cpu = (device.cpu + (rng.gen::<f64>() - 0.5) * 10.0).clamp(5.0, 100.0);
            device.memory = (device.memory + (rng.gen::<f64>() - 0.5) * 5.0).clamp(10.0, 100.0);
            device.bandwidth.inbound =
                (device.bandwidth.inbound + (rng.gen::<f64>() - 0.5) * 100.0).max(0.0);
            device.bandwidth.outbound =
                (device.bandwidth.outbound + (rng.gen::<f64>() - 0.5) * 50.0).max(0.0);
            if device.status == DeviceStatus::Online {
                device.last_seen = now;
            }
        }
    }
}

async fn refresh_loop(inner: Arc<StoreInner>) {
    log::info!(
        "Telemetry refresh loop started ({}s interval)",
        inner.refresh_interval.as_secs()
    );
    loop {
        tokio::time::sleep(inner.refresh_interval).await;
        if !inner.running.load(Ordering::SeqCst) {
            break;
        }
        inner.perturb();
        log::debug!("Device telemetry refreshed");
    }
    log::info!("Telemetry refresh loop stopped");
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Owning handle to the dataset. The handle is not cloneable; dropping it
/// stops the refresh loop, as does an explicit [`MockDataStore::dispose`].
pub struct MockDataStore {
    inner: Arc<StoreInner>,
    load_delay: Duration,
}

impl MockDataStore {
    /// Creates an empty store in the loading state. Call
    /// [`MockDataStore::init`] to populate it.
    pub fn new(config: MockDataConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        MockDataStore {
            inner: Arc::new(StoreInner {
                devices: RwLock::new(Vec::new()),
                alerts: RwLock::new(Vec::new()),
                incidents: RwLock::new(Vec::new()),
                rng: Mutex::new(rng),
                started: AtomicBool::new(false),
                loading: AtomicBool::new(true),
                running: AtomicBool::new(false),
                refresh_interval: Duration::from_secs(config.refresh_interval_secs),
            }),
            load_delay: Duration::from_millis(config.load_delay_ms),
        }
    }

    /// Populates the store after the configured load delay and starts the
    /// refresh loop. Subsequent calls are ignored.
    pub async fn init(&self) {
        if self.inner.started.swap(true, Ordering::SeqCst) {
            log::warn!("Mock data store already initialized, ignoring");
            return;
        }
        tokio::time::sleep(self.load_delay).await;
        let (device_count, alert_count, incident_count) = {
            let mut devices = self.inner.devices.write();
            let mut alerts = self.inner.alerts.write();
            let mut incidents = self.inner.incidents.write();
            let mut rng = self.inner.rng.lock();
            *devices = generate::generate_devices(&mut *rng);
            *alerts = generate::generate_alerts(&mut *rng);
            *incidents = generate::generate_incidents(&mut *rng);
            (devices.len(), alerts.len(), incidents.len())
        };
        self.inner.loading.store(false, Ordering::SeqCst);
        self.inner.running.store(true, Ordering::SeqCst);
        log::info!(
            "Mock data store initialized ({} devices, {} alerts, {} incidents)",
            device_count,
            alert_count,
            incident_count
        );
        tokio::spawn(refresh_loop(Arc::clone(&self.inner)));
    }

    /// Stops the refresh loop. Safe to call more than once; the data stays
    /// readable afterwards.
    pub fn dispose(&self) {
        if self.inner.running.swap(false, Ordering::SeqCst) {
            log::info!("Mock data store disposed");
        }
    }

    pub fn is_loading(&self) -> bool {
        self.inner.loading.load(Ordering::SeqCst)
    }

    pub fn is_refreshing(&self) -> bool {
        self.inner.running.load(Ordering::SeqCst)
    }

    /// Applies one perturbation tick without waiting on the loop timer.
    pub fn refresh_once(&self) {
        self.inner.perturb();
    }

    pub fn devices(&self) -> Vec<NetworkDevice> {
        self.inner.devices.read().clone()
    }

    pub fn alerts(&self) -> Vec<SecurityAlert> {
        self.inner.alerts.read().clone()
    }

    pub fn incidents(&self) -> Vec<Incident> {
        self.inner.incidents.read().clone()
    }

    pub fn devices_filtered(&self, f: &DeviceFilter) -> Vec<NetworkDevice> {
        filter::filter_devices(&self.inner.devices.read(), f)
    }

    pub fn alerts_filtered(&self, f: &AlertFilter) -> Vec<SecurityAlert> {
        filter::filter_alerts(&self.inner.alerts.read(), f)
    }

    pub fn incidents_filtered(&self, f: &IncidentFilter) -> Vec<Incident> {
        filter::filter_incidents(&self.inner.incidents.read(), f)
    }

    pub fn network_metrics(&self) -> NetworkMetrics {
        let devices = self.inner.devices.read();
        let mut rng = self.inner.rng.lock();
        metrics::network_metrics(&devices, &mut *rng)
    }

    pub fn security_metrics(&self) -> SecurityMetrics {
        let alerts = self.inner.alerts.read();
        let mut rng = self.inner.rng.lock();
        metrics::security_metrics(&alerts, &mut *rng)
    }

    pub fn alert_stats(&self) -> AlertStats {
        metrics::alert_stats(&self.inner.alerts.read())
    }

    pub fn incident_stats(&self) -> IncidentStats {
        metrics::incident_stats(&self.inner.incidents.read())
    }

    pub fn traffic_series(&self) -> Vec<TrafficPoint> {
        let mut rng = self.inner.rng.lock();
        charts::traffic_series(&mut *rng)
    }

    pub fn alert_trend_series(&self) -> Vec<AlertTrendPoint> {
        let mut rng = self.inner.rng.lock();
        charts::alert_trend_series(&mut *rng)
    }

    pub fn incident_category_series(&self) -> Vec<CategoryCount> {
        charts::incident_category_series(&self.inner.incidents.read())
    }

    /// Sets the status of a known alert. Unknown IDs are ignored.
    pub fn update_alert_status(&self, id: &str, status: AlertStatus) {
        let mut alerts = self.inner.alerts.write();
        if let Some(alert) = alerts.iter_mut().find(|a| a.id == id) {
            alert.status = status;
            log::debug!("Alert {} -> {}", id, status.as_str());
        }
    }

    /// Sets the status of a known incident and bumps its `updated_at`.
    /// Unknown IDs are ignored.
    pub fn update_incident_status(&self, id: &str, status: IncidentStatus) {
        let mut incidents = self.inner.incidents.write();
        if let Some(incident) = incidents.iter_mut().find(|i| i.id == id) {
            incident.status = status;
            incident.updated_at = Utc::now();
            log::debug!("Incident {} -> {}", id, status.as_str());
        }
    }
}

impl Drop for MockDataStore {
    fn drop(&mut self) {
        self.inner.running.store(false, Ordering::SeqCst);
    }
}
