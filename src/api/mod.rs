//! Surface-facing API
//!
//! # Architecture
//!
//! - `commands.rs` - Async command facade and its DTOs

pub mod commands;

pub use commands::AppState;
