use std::time::Duration;

use parking_lot::RwLock;
use uuid::Uuid;

use crate::constants;

use super::storage::SessionStorage;
use super::types::{known_user, User, UserRole};

// ============================================================================
// SESSION MANAGER
// ============================================================================

/// Tracks the signed-in operator and mirrors it to disk
pub struct SessionManager {
    storage: SessionStorage,
    current: RwLock<Option<User>>,
}

impl SessionManager {
    pub fn new(storage: SessionStorage) -> Self {
        SessionManager {
            storage,
            current: RwLock::new(None),
        }
    }

    /// Reloads a persisted session, if any. Unreadable files leave the
    /// console signed out.
    pub fn restore(&self) {
        if !self.storage.session_exists() {
            return;
        }
        match self.storage.load_user() {
            Ok(user) => *self.current.write() = Some(user),
            Err(e) => log::warn!("Stored session unreadable, starting signed out: {}", e),
        }
    }

    /// Signs in after a simulated authentication delay. Known emails map to
    /// their fixed identity; anything else becomes a demo user with the
    /// requested role. The password is not checked.
    pub async fn login(&self, email: &str, _password: &str, role: UserRole) -> User {
        tokio::time::sleep(Duration::from_millis(constants::get_login_delay_ms())).await;
        let user = known_user(email).unwrap_or_else(|| User {
            id: Uuid::new_v4().to_string(),
            name: email.split('@').next().unwrap_or("").to_string(),
            email: email.to_string(),
            role,
        });
        if let Err(e) = self.storage.save_user(&user) {
            log::error!("Failed to persist session: {}", e);
        }
        log::info!("User logged in: {} ({})", user.name, user.role.as_str());
        *self.current.write() = Some(user.clone());
        user
    }

    pub fn logout(&self) {
        if let Some(user) = self.current.write().take() {
            log::info!("User logged out: {}", user.email);
        }
        if let Err(e) = self.storage.clear_user() {
            log::error!("Failed to clear session: {}", e);
        }
    }

    pub fn current_user(&self) -> Option<User> {
        self.current.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.read().is_some()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn manager(dir: &std::path::Path) -> SessionManager {
        SessionManager::new(SessionStorage::new(Some(dir.to_path_buf())))
    }

    #[tokio::test]
    async fn test_login_known_email_uses_fixed_identity() {
        let dir = tempdir().unwrap();
        let manager = manager(dir.path());
        let user = manager
            .login("security@nita.gov", "anything", UserRole::SystemAdmin)
            .await;
        assert_eq!(user.id, "2");
        assert_eq!(user.name, "Sarah Banda");
        // the stored role wins over the requested one
        assert_eq!(user.role, UserRole::CybersecurityAnalyst);
        assert!(manager.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_unknown_email_creates_demo_user() {
        let dir = tempdir().unwrap();
        let manager = manager(dir.path());
        let user = manager
            .login("guest@example.org", "pw", UserRole::NetworkAdmin)
            .await;
        assert_eq!(user.name, "guest");
        assert_eq!(user.email, "guest@example.org");
        assert_eq!(user.role, UserRole::NetworkAdmin);
        assert!(!user.id.is_empty());
        assert_eq!(manager.current_user(), Some(user));
    }

    #[tokio::test]
    async fn test_demo_users_get_unique_ids() {
        let dir = tempdir().unwrap();
        let manager = manager(dir.path());
        let first = manager
            .login("guest@example.org", "pw", UserRole::NetworkAdmin)
            .await;
        let second = manager
            .login("guest@example.org", "pw", UserRole::NetworkAdmin)
            .await;
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let dir = tempdir().unwrap();
        let manager = manager(dir.path());
        manager
            .login("admin@nita.gov", "pw", UserRole::SystemAdmin)
            .await;
        assert!(manager.is_authenticated());
        manager.logout();
        assert!(!manager.is_authenticated());
        assert!(manager.current_user().is_none());
    }

    #[tokio::test]
    async fn test_restore_reloads_persisted_session() {
        let dir = tempdir().unwrap();
        let first = manager(dir.path());
        let user = first
            .login("network@nita.gov", "pw", UserRole::NetworkAdmin)
            .await;

        let second = manager(dir.path());
        assert!(!second.is_authenticated());
        second.restore();
        assert_eq!(second.current_user(), Some(user));
    }

    #[tokio::test]
    async fn test_restore_ignores_corrupt_session() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("session.json"), "garbage").unwrap();
        let manager = manager(dir.path());
        manager.restore();
        assert!(!manager.is_authenticated());
    }
}
