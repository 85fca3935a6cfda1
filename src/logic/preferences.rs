use serde::{Deserialize, Serialize};

// ============================================================================
// PREFERENCES
// ============================================================================

/// Minimum severity that triggers a notification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertThreshold {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl AlertThreshold {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertThreshold::Low => "low",
            AlertThreshold::Medium => "medium",
            AlertThreshold::High => "high",
            AlertThreshold::Critical => "critical",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(AlertThreshold::Low),
            "medium" => Some(AlertThreshold::Medium),
            "high" => Some(AlertThreshold::High),
            "critical" => Some(AlertThreshold::Critical),
            _ => None,
        }
    }
}

/// Operator-tunable console settings. Missing fields in a stored file fall
/// back to their defaults, so older files keep loading as fields are added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub email_notifications: bool,
    pub critical_alerts: bool,
    pub weekly_reports: bool,
    pub auto_incidents: bool,
    pub alert_threshold: AlertThreshold,
    pub session_timeout_minutes: u32,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            email_notifications: true,
            critical_alerts: true,
            weekly_reports: true,
            auto_incidents: false,
            alert_threshold: AlertThreshold::Medium,
            session_timeout_minutes: 30,
        }
    }
}

/// Session timeout choices offered by the settings screen, in minutes
pub const SESSION_TIMEOUT_OPTIONS: [u32; 4] = [15, 30, 60, 120];

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = Preferences::default();
        assert!(prefs.email_notifications);
        assert!(prefs.critical_alerts);
        assert!(prefs.weekly_reports);
        assert!(!prefs.auto_incidents);
        assert_eq!(prefs.alert_threshold, AlertThreshold::Medium);
        assert_eq!(prefs.session_timeout_minutes, 30);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let prefs: Preferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, Preferences::default());

        let prefs: Preferences =
            serde_json::from_str(r#"{"auto_incidents": true, "session_timeout_minutes": 120}"#)
                .unwrap();
        assert!(prefs.auto_incidents);
        assert_eq!(prefs.session_timeout_minutes, 120);
        assert!(prefs.email_notifications);
    }

    #[test]
    fn test_roundtrip() {
        let prefs = Preferences {
            alert_threshold: AlertThreshold::Critical,
            weekly_reports: false,
            ..Default::default()
        };
        let json = serde_json::to_string(&prefs).unwrap();
        let back: Preferences = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefs);
    }

    #[test]
    fn test_threshold_parsing() {
        assert_eq!(AlertThreshold::from_str("critical"), Some(AlertThreshold::Critical));
        assert_eq!(AlertThreshold::from_str("HIGH"), Some(AlertThreshold::High));
        assert_eq!(AlertThreshold::from_str("severe"), None);
    }
}
