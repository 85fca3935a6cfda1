use serde::Serialize;

// ============================================================================
// REPORT CATALOG
// ============================================================================

/// Report families the console can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReportKind {
    Security,
    Network,
    Incidents,
    Compliance,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Security,
        ReportKind::Network,
        ReportKind::Incidents,
        ReportKind::Compliance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Security => "security",
            ReportKind::Network => "network",
            ReportKind::Incidents => "incidents",
            ReportKind::Compliance => "compliance",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "security" => Some(ReportKind::Security),
            "network" => Some(ReportKind::Network),
            "incidents" => Some(ReportKind::Incidents),
            "compliance" => Some(ReportKind::Compliance),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::Security => "Security Summary",
            ReportKind::Network => "Network Performance",
            ReportKind::Incidents => "Incident Analysis",
            ReportKind::Compliance => "Compliance Report",
        }
    }
}

/// Time windows offered when generating a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReportPeriod {
    Week,
    Month,
    Quarter,
    Year,
}

impl ReportPeriod {
    pub const ALL: [ReportPeriod; 4] = [
        ReportPeriod::Week,
        ReportPeriod::Month,
        ReportPeriod::Quarter,
        ReportPeriod::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportPeriod::Week => "week",
            ReportPeriod::Month => "month",
            ReportPeriod::Quarter => "quarter",
            ReportPeriod::Year => "year",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "week" => Some(ReportPeriod::Week),
            "month" => Some(ReportPeriod::Month),
            "quarter" => Some(ReportPeriod::Quarter),
            "year" => Some(ReportPeriod::Year),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportPeriod::Week => "Last Week",
            ReportPeriod::Month => "Last Month",
            ReportPeriod::Quarter => "Last Quarter",
            ReportPeriod::Year => "Last Year",
        }
    }
}

/// Entry in the downloadable reports list
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReportEntry {
    pub id: u32,
    pub name: &'static str,
    pub kind: ReportKind,
    pub date: &'static str,
    pub status: &'static str,
}

pub const AVAILABLE_REPORTS: [ReportEntry; 4] = [
    ReportEntry {
        id: 1,
        name: "Monthly Security Summary",
        kind: ReportKind::Security,
        date: "January 2024",
        status: "ready",
    },
    ReportEntry {
        id: 2,
        name: "Network Performance Report",
        kind: ReportKind::Network,
        date: "January 2024",
        status: "ready",
    },
    ReportEntry {
        id: 3,
        name: "Incident Response Analysis",
        kind: ReportKind::Incidents,
        date: "Q4 2023",
        status: "ready",
    },
    ReportEntry {
        id: 4,
        name: "Compliance Audit Report",
        kind: ReportKind::Compliance,
        date: "2023 Annual",
        status: "ready",
    },
];

// ============================================================================
// REPORTING FIGURES
// ============================================================================

/// One month on the activity chart
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MonthlyActivity {
    pub month: &'static str,
    pub incidents: u32,
    pub resolved: u32,
    pub alerts: u32,
}

pub const MONTHLY_ACTIVITY: [MonthlyActivity; 6] = [
    MonthlyActivity {
        month: "Jan",
        incidents: 45,
        resolved: 42,
        alerts: 234,
    },
    MonthlyActivity {
        month: "Feb",
        incidents: 52,
        resolved: 48,
        alerts: 287,
    },
    MonthlyActivity {
        month: "Mar",
        incidents: 38,
        resolved: 35,
        alerts: 198,
    },
    MonthlyActivity {
        month: "Apr",
        incidents: 61,
        resolved: 55,
        alerts: 312,
    },
    MonthlyActivity {
        month: "May",
        incidents: 47,
        resolved: 44,
        alerts: 256,
    },
    MonthlyActivity {
        month: "Jun",
        incidents: 55,
        resolved: 51,
        alerts: 289,
    },
];

/// One slice of the threat category pie
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CategoryShare {
    pub name: &'static str,
    pub value: u32,
}

/// Percentages summing to 100
pub const CATEGORY_SHARE: [CategoryShare; 5] = [
    CategoryShare {
        name: "Network Security",
        value: 35,
    },
    CategoryShare {
        name: "Access Control",
        value: 25,
    },
    CategoryShare {
        name: "Malware",
        value: 20,
    },
    CategoryShare {
        name: "Policy Violation",
        value: 12,
    },
    CategoryShare {
        name: "Other",
        value: 8,
    },
];

/// One day on the availability chart
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UptimePoint {
    pub day: &'static str,
    pub uptime: f64,
}

pub const WEEKLY_UPTIME: [UptimePoint; 7] = [
    UptimePoint {
        day: "Mon",
        uptime: 99.9,
    },
    UptimePoint {
        day: "Tue",
        uptime: 99.8,
    },
    UptimePoint {
        day: "Wed",
        uptime: 100.0,
    },
    UptimePoint {
        day: "Thu",
        uptime: 99.7,
    },
    UptimePoint {
        day: "Fri",
        uptime: 99.9,
    },
    UptimePoint {
        day: "Sat",
        uptime: 100.0,
    },
    UptimePoint {
        day: "Sun",
        uptime: 99.95,
    },
];

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_share_sums_to_hundred() {
        let total: u32 = CATEGORY_SHARE.iter().map(|c| c.value).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_monthly_activity_is_consistent() {
        assert_eq!(MONTHLY_ACTIVITY.len(), 6);
        for month in MONTHLY_ACTIVITY.iter() {
            assert!(month.resolved <= month.incidents);
            assert!(month.alerts > month.incidents);
        }
    }

    #[test]
    fn test_weekly_uptime_stays_high() {
        assert_eq!(WEEKLY_UPTIME.len(), 7);
        for point in WEEKLY_UPTIME.iter() {
            assert!(point.uptime >= 99.0 && point.uptime <= 100.0);
        }
    }

    #[test]
    fn test_available_reports_are_ready() {
        assert_eq!(AVAILABLE_REPORTS.len(), 4);
        for report in AVAILABLE_REPORTS.iter() {
            assert_eq!(report.status, "ready");
        }
    }

    #[test]
    fn test_kind_and_period_roundtrip() {
        for kind in ReportKind::ALL.iter() {
            assert_eq!(ReportKind::from_str(kind.as_str()), Some(*kind));
            assert!(!kind.label().is_empty());
        }
        for period in ReportPeriod::ALL.iter() {
            assert_eq!(ReportPeriod::from_str(period.as_str()), Some(*period));
            assert!(!period.label().is_empty());
        }
        assert_eq!(ReportKind::from_str("weird"), None);
        assert_eq!(ReportPeriod::from_str(""), None);
    }
}
