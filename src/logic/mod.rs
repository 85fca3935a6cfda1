//! Core business logic, independent of any surface
//!
//! # Architecture
//!
//! - `mock_data/` - Simulated dataset, rollups, charts, and its store
//! - `session/` - Sign-in, roles, and file persistence
//! - `navigation.rs` - Role-gated sidebar model
//! - `directory.rs` - Seeded user directory for the admin screen
//! - `reports.rs` - Report catalog and fixed reporting figures
//! - `preferences.rs` - Operator settings with serde-backed defaults

pub mod directory;
pub mod mock_data;
pub mod navigation;
pub mod preferences;
pub mod reports;
pub mod session;
