use serde::{Deserialize, Serialize};

// ============================================================================
// ROLES
// ============================================================================

/// Operator roles recognised by the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    NetworkAdmin,
    CybersecurityAnalyst,
    SystemAdmin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::NetworkAdmin => "network_admin",
            UserRole::CybersecurityAnalyst => "cybersecurity_analyst",
            UserRole::SystemAdmin => "system_admin",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "network_admin" => Some(UserRole::NetworkAdmin),
            "cybersecurity_analyst" => Some(UserRole::CybersecurityAnalyst),
            "system_admin" => Some(UserRole::SystemAdmin),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::NetworkAdmin => "Network Administrator",
            UserRole::CybersecurityAnalyst => "Cybersecurity Analyst",
            UserRole::SystemAdmin => "System Administrator",
        }
    }
}

// ============================================================================
// USERS
// ============================================================================

/// Signed-in operator identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// Accounts with a fixed identity. Any other email signs in as a demo user.
pub const KNOWN_USERS: [(&str, &str, &str, UserRole); 3] = [
    ("1", "John Mwale", "network@nita.gov", UserRole::NetworkAdmin),
    (
        "2",
        "Sarah Banda",
        "security@nita.gov",
        UserRole::CybersecurityAnalyst,
    ),
    ("3", "David Phiri", "admin@nita.gov", UserRole::SystemAdmin),
];

/// Looks up a fixed account by email, case-insensitively.
pub fn known_user(email: &str) -> Option<User> {
    let needle = email.to_lowercase();
    KNOWN_USERS
        .iter()
        .find(|(_, _, known_email, _)| *known_email == needle)
        .map(|(id, name, known_email, role)| User {
            id: id.to_string(),
            name: name.to_string(),
            email: known_email.to_string(),
            role: *role,
        })
}
