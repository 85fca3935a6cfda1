use super::session::UserRole;

// ============================================================================
// NAVIGATION
// ============================================================================

/// One sidebar entry with the roles allowed to see it
#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub name: &'static str,
    pub path: &'static str,
    pub roles: &'static [UserRole],
}

impl NavItem {
    pub fn allows(&self, role: UserRole) -> bool {
        self.roles.contains(&role)
    }
}

pub const NAV_ITEMS: [NavItem; 7] = [
    NavItem {
        name: "Dashboard",
        path: "/dashboard",
        roles: &[
            UserRole::NetworkAdmin,
            UserRole::CybersecurityAnalyst,
            UserRole::SystemAdmin,
        ],
    },
    NavItem {
        name: "Incidents",
        path: "/incidents",
        roles: &[UserRole::CybersecurityAnalyst, UserRole::SystemAdmin],
    },
    NavItem {
        name: "Alerts",
        path: "/alerts",
        roles: &[
            UserRole::NetworkAdmin,
            UserRole::CybersecurityAnalyst,
            UserRole::SystemAdmin,
        ],
    },
    NavItem {
        name: "Network",
        path: "/network",
        roles: &[UserRole::NetworkAdmin, UserRole::SystemAdmin],
    },
    NavItem {
        name: "Reports",
        path: "/reports",
        roles: &[UserRole::SystemAdmin],
    },
    NavItem {
        name: "Users",
        path: "/users",
        roles: &[UserRole::SystemAdmin],
    },
    NavItem {
        name: "Settings",
        path: "/settings",
        roles: &[UserRole::SystemAdmin],
    },
];

/// Sidebar entries visible to a role, in declaration order.
pub fn visible_for(role: UserRole) -> Vec<NavItem> {
    NAV_ITEMS
        .iter()
        .filter(|item| item.allows(role))
        .copied()
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_admin_menu() {
        let items = visible_for(UserRole::NetworkAdmin);
        let names: Vec<&str> = items.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Dashboard", "Alerts", "Network"]);
    }

    #[test]
    fn test_analyst_menu() {
        let items = visible_for(UserRole::CybersecurityAnalyst);
        let names: Vec<&str> = items.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Dashboard", "Incidents", "Alerts"]);
    }

    #[test]
    fn test_system_admin_sees_everything() {
        let items = visible_for(UserRole::SystemAdmin);
        assert_eq!(items.len(), NAV_ITEMS.len());
        let names: Vec<&str> = items.iter().map(|i| i.name).collect();
        assert_eq!(
            names,
            vec![
                "Dashboard",
                "Incidents",
                "Alerts",
                "Network",
                "Reports",
                "Users",
                "Settings"
            ]
        );
    }

    #[test]
    fn test_every_item_has_a_path() {
        for item in NAV_ITEMS.iter() {
            assert!(item.path.starts_with('/'));
            assert!(!item.roles.is_empty());
        }
    }
}
