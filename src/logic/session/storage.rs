use std::fs;
use std::path::PathBuf;

use crate::logic::preferences::Preferences;

use super::types::User;

// ============================================================================
// CONSTANTS
// ============================================================================

const DATA_DIR: &str = "soc-console";
const SESSION_FILE: &str = "session.json";
const PREFERENCES_FILE: &str = "preferences.json";

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug)]
pub enum StorageError {
    /// Reading or writing a data file failed
    IoError(String),
    /// A data file exists but does not parse
    ParseError(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::IoError(e) => write!(f, "IO error: {}", e),
            StorageError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

// ============================================================================
// STORAGE
// ============================================================================

/// File-backed persistence for the session and preferences
#[derive(Debug, Clone)]
pub struct SessionStorage {
    session_path: PathBuf,
    preferences_path: PathBuf,
}

impl SessionStorage {
    /// Uses the platform data directory unless `base_dir` overrides it
    /// (tests point this at a temp directory).
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        let dir = base_dir.unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(DATA_DIR)
        });
        fs::create_dir_all(&dir).ok();
        SessionStorage {
            session_path: dir.join(SESSION_FILE),
            preferences_path: dir.join(PREFERENCES_FILE),
        }
    }

    pub fn session_exists(&self) -> bool {
        self.session_path.exists()
    }

    pub fn load_user(&self) -> Result<User, StorageError> {
        let contents = fs::read_to_string(&self.session_path)
            .map_err(|e| StorageError::IoError(e.to_string()))?;
        let user: User =
            serde_json::from_str(&contents).map_err(|e| StorageError::ParseError(e.to_string()))?;
        log::info!("Session loaded: {} ({})", user.name, user.role.as_str());
        Ok(user)
    }

    pub fn save_user(&self, user: &User) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(user)
            .map_err(|e| StorageError::ParseError(e.to_string()))?;
        fs::write(&self.session_path, json).map_err(|e| StorageError::IoError(e.to_string()))?;
        log::info!("Session saved: {}", user.email);
        Ok(())
    }

    pub fn clear_user(&self) -> Result<(), StorageError> {
        if self.session_path.exists() {
            fs::remove_file(&self.session_path)
                .map_err(|e| StorageError::IoError(e.to_string()))?;
            log::info!("Session file deleted");
        }
        Ok(())
    }

    pub fn load_preferences(&self) -> Result<Preferences, StorageError> {
        let contents = fs::read_to_string(&self.preferences_path)
            .map_err(|e| StorageError::IoError(e.to_string()))?;
        serde_json::from_str(&contents).map_err(|e| StorageError::ParseError(e.to_string()))
    }

    pub fn save_preferences(&self, preferences: &Preferences) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(preferences)
            .map_err(|e| StorageError::ParseError(e.to_string()))?;
        fs::write(&self.preferences_path, json)
            .map_err(|e| StorageError::IoError(e.to_string()))?;
        log::info!("Preferences saved");
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
