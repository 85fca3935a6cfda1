//! Simulated security-operations dataset
//!
//! Generates a plausible fleet of network devices, an alert feed, and an
//! incident queue, then serves reads and status updates from memory while
//! a background loop drifts device telemetry to keep the data moving.
//!
//! # Architecture
//!
//! - `types.rs` - Entity structs and their enums
//! - `generate.rs` - Seed tables and bulk generators
//! - `metrics.rs` - Rollups recomputed per read
//! - `charts.rs` - Time-series and histogram builders
//! - `filter.rs` - Query/facet filters over the collections
//! - `store.rs` - Lifecycle, locking, and the refresh loop

pub mod charts;
pub mod filter;
pub mod generate;
pub mod metrics;
pub mod store;
pub mod types;


pub use charts::{AlertTrendPoint, CategoryCount, TrafficPoint};
pub use filter::{AlertFilter, DeviceFilter, IncidentFilter};
pub use metrics::{AlertStats, IncidentStats, NetworkMetrics, SecurityMetrics};
pub use store::{MockDataConfig, MockDataStore};
pub use types::{
    AlertStatus, AlertType, Bandwidth, DeviceStatus, DeviceType, Incident, IncidentCategory,
    IncidentStatus, NetworkDevice, SecurityAlert, Severity,
};
