//! Operator sign-in and persistence
//!
//! Authentication is simulated: known emails resolve to fixed accounts,
//! anything else signs in as a demo user. The active session and the
//! operator preferences are mirrored to the platform data directory.
//!
//! # Architecture
//!
//! - `types.rs` - Roles, the user record, and the known-account table
//! - `storage.rs` - File-backed persistence for session and preferences
//! - `manager.rs` - Login, logout, and restore on top of the storage

pub mod manager;
pub mod storage;
pub mod types;

pub use manager::SessionManager;
pub use storage::{SessionStorage, StorageError};
pub use types::{known_user, User, UserRole, KNOWN_USERS};
