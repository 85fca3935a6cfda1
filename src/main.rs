//! Headless preview of the core service
//!
//! Signs in a demo operator, brings the data store up, lets the telemetry
//! loop run for a couple of ticks, and logs a dashboard snapshot. Useful
//! for eyeballing the data plane without the UI shell.

use std::time::Duration;

use soc_console_core::api::commands;
use soc_console_core::api::AppState;
use soc_console_core::constants;
use soc_console_core::logic::mock_data::MockDataConfig;

#[tokio::main]
async fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!(
        "Starting {} core v{}...",
        constants::APP_NAME,
        constants::APP_VERSION
    );

    let state = AppState::new(MockDataConfig::default(), None);

    let user = match commands::get_current_user(&state).await? {
        Some(user) => {
            log::info!("Restored session for {}", user.name);
            user
        }
        None => {
            let user = commands::login(&state, "admin@nita.gov", "demo", "system_admin").await?;
            log::info!("Signed in as {} ({})", user.name, user.role_display);
            user
        }
    };
    let nav = commands::get_navigation(&state).await?;
    log::info!("{} can see {} sections", user.name, nav.len());

    commands::init_store(&state).await?;
    let status = commands::get_store_status(&state).await?;
    log::info!(
        "Store ready: {} devices, {} alerts, {} incidents",
        status.device_count,
        status.alert_count,
        status.incident_count
    );

    let interval = constants::get_refresh_interval();
    log::info!("Watching telemetry for {} seconds...", interval * 2 + 1);
    tokio::time::sleep(Duration::from_secs(interval * 2 + 1)).await;

    let network = commands::get_network_metrics(&state).await?;
    log::info!(
        "Network: {}/{} devices online, avg cpu {:.1}%, avg memory {:.1}%",
        network.online_devices,
        network.total_devices,
        network.average_cpu,
        network.average_memory
    );
    let security = commands::get_security_metrics(&state).await?;
    log::info!(
        "Security: {} alerts ({} critical), {} threats blocked",
        security.total_alerts,
        security.critical_alerts,
        security.threats_blocked
    );
    let incidents = commands::get_incident_stats(&state).await?;
    log::info!(
        "Incidents: {} open, {} in progress, {} resolved",
        incidents.open,
        incidents.in_progress,
        incidents.resolved
    );
    if let Some(latest) = commands::get_traffic_chart(&state).await?.last() {
        log::info!(
            "Traffic at {}: {} Mbps in / {} Mbps out",
            latest.time,
            latest.inbound,
            latest.outbound
        );
    }

    commands::dispose_store(&state).await?;
    log::info!("Preview complete");
    Ok(())
}
