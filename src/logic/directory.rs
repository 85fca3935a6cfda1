use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::session::UserRole;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Account standing in the user directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Suspended => "suspended",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "active" => Some(UserStatus::Active),
            "inactive" => Some(UserStatus::Inactive),
            "suspended" => Some(UserStatus::Suspended),
            _ => None,
        }
    }
}

/// Directory record for the user management screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub last_active: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Directory filter. Unset fields match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectoryFilter {
    pub query: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
}

impl DirectoryFilter {
    pub fn matches(&self, user: &DirectoryUser) -> bool {
        if let Some(q) = &self.query {
            let needle = q.to_lowercase();
            let hit = user.name.to_lowercase().contains(&needle)
                || user.email.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        if let Some(role) = &self.role {
            if user.role.as_str() != role {
                return false;
            }
        }
        if let Some(status) = &self.status {
            if user.status.as_str() != status {
                return false;
            }
        }
        true
    }
}

/// Headline counters for the user management screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryStats {
    pub total: usize,
    pub active: usize,
    pub admins: usize,
}

// ============================================================================
// SEED DATA
// ============================================================================

fn created(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

fn entry(
    id: &str,
    name: &str,
    email: &str,
    role: UserRole,
    status: UserStatus,
    last_active: DateTime<Utc>,
    created_at: DateTime<Utc>,
) -> DirectoryUser {
    DirectoryUser {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        status,
        last_active,
        created_at,
    }
}

/// Fixed roster shown on the user management screen. Activity timestamps
/// are relative to now so the list always looks current.
pub fn seed_directory() -> Vec<DirectoryUser> {
    let now = Utc::now();
    vec![
        entry(
            "1",
            "John Mwale",
            "network@nita.gov",
            UserRole::NetworkAdmin,
            UserStatus::Active,
            now,
            created(2024, 1, 15),
        ),
        entry(
            "2",
            "Sarah Banda",
            "security@nita.gov",
            UserRole::CybersecurityAnalyst,
            UserStatus::Active,
            now - Duration::hours(1),
            created(2024, 2, 1),
        ),
        entry(
            "3",
            "David Phiri",
            "admin@nita.gov",
            UserRole::SystemAdmin,
            UserStatus::Active,
            now - Duration::hours(2),
            created(2023, 12, 1),
        ),
        entry(
            "4",
            "Grace Tembo",
            "grace.tembo@nita.gov",
            UserRole::CybersecurityAnalyst,
            UserStatus::Active,
            now - Duration::days(1),
            created(2024, 3, 10),
        ),
        entry(
            "5",
            "Michael Zulu",
            "michael.zulu@nita.gov",
            UserRole::NetworkAdmin,
            UserStatus::Inactive,
            now - Duration::days(7),
            created(2024, 1, 20),
        ),
        entry(
            "6",
            "Rose Mutale",
            "rose.mutale@nita.gov",
            UserRole::CybersecurityAnalyst,
            UserStatus::Suspended,
            now - Duration::days(30),
            created(2023, 11, 15),
        ),
    ]
}

// ============================================================================
// QUERIES
// ============================================================================

pub fn filter_directory(users: &[DirectoryUser], filter: &DirectoryFilter) -> Vec<DirectoryUser> {
    users
        .iter()
        .filter(|u| filter.matches(u))
        .cloned()
        .collect()
}

pub fn directory_stats(users: &[DirectoryUser]) -> DirectoryStats {
    DirectoryStats {
        total: users.len(),
        active: users
            .iter()
            .filter(|u| u.status == UserStatus::Active)
            .count(),
        admins: users
            .iter()
            .filter(|u| u.role == UserRole::SystemAdmin)
            .count(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_roster_shape() {
        let users = seed_directory();
        assert_eq!(users.len(), 6);
        for user in &users {
            assert!(!user.id.is_empty());
            assert!(user.email.ends_with("@nita.gov"));
            assert!(user.last_active >= user.created_at);
        }
    }

    #[test]
    fn test_directory_stats() {
        let stats = directory_stats(&seed_directory());
        assert_eq!(stats.total, 6);
        assert_eq!(stats.active, 4);
        assert_eq!(stats.admins, 1);
    }

    #[test]
    fn test_filter_by_role() {
        let users = seed_directory();
        let analysts = filter_directory(
            &users,
            &DirectoryFilter {
                role: Some("cybersecurity_analyst".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(analysts.len(), 3);
    }

    #[test]
    fn test_filter_by_query() {
        let users = seed_directory();
        let hits = filter_directory(
            &users,
            &DirectoryFilter {
                query: Some("mwale".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "John Mwale");
    }

    #[test]
    fn test_filter_by_status() {
        let users = seed_directory();
        let suspended = filter_directory(
            &users,
            &DirectoryFilter {
                status: Some("suspended".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(suspended.len(), 1);
        assert_eq!(suspended[0].name, "Rose Mutale");
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let users = seed_directory();
        let all = filter_directory(&users, &DirectoryFilter::default());
        assert_eq!(all.len(), users.len());
    }
}
