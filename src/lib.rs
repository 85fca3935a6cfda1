//! SOC Console - Core Service
//!
//! Data plane for the NITA security operations console. Simulates a fleet
//! of monitored devices with a live alert feed and incident queue, derives
//! dashboard rollups and chart series on demand, and manages the operator
//! session with file-backed persistence.
//!
//! The library has two layers: `logic` holds the domain types and the
//! store, `api` wraps them in the async command facade the UI shell calls.

pub mod api;
pub mod constants;
pub mod logic;
