use chrono::{Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::types::Incident;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// One sample on the 24-hour traffic chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficPoint {
    pub time: String,
    pub inbound: i64,
    pub outbound: i64,
}

/// One day on the 7-day alert trend chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertTrendPoint {
    pub day: String,
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

/// One slice of the incident category breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    pub value: usize,
}

// ============================================================================
// SERIES BUILDERS
// ============================================================================

/// 24 hourly samples ending at the current hour. Values ride a sine/cosine
/// carrier with random jitter so the chart looks like a day of real load.
pub fn traffic_series(rng: &mut impl Rng) -> Vec<TrafficPoint> {
    let now = Utc::now();
    (0..24i64)
        .map(|i| {
            let hour = now - Duration::hours(23 - i);
            let phase = i as f64 / 3.0;
            TrafficPoint {
                time: hour.format("%I:%M %p").to_string(),
                inbound: (500.0 + phase.sin() * 200.0 + rng.gen::<f64>() * 100.0).floor() as i64,
                outbound: (300.0 + phase.cos() * 150.0 + rng.gen::<f64>() * 80.0).floor() as i64,
            }
        })
        .collect()
}

/// 7 daily buckets ending today, labeled with short weekday names.
pub fn alert_trend_series(rng: &mut impl Rng) -> Vec<AlertTrendPoint> {
    let now = Utc::now();
    (0..7i64)
        .map(|i| {
            let day = now - Duration::days(6 - i);
            AlertTrendPoint {
                day: day.format("%a").to_string(),
                critical: rng.gen_range(0..5),
                high: rng.gen_range(2..12),
                medium: rng.gen_range(5..20),
                low: rng.gen_range(10..30),
            }
        })
        .collect()
}

/// Histogram of incidents by category, in first-seen order.
pub fn incident_category_series(incidents: &[Incident]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    for incident in incidents {
        let name = incident.category.as_str();
        match counts.iter_mut().find(|c| c.name == name) {
            Some(entry) => entry.value += 1,
            None => counts.push(CategoryCount {
                name: name.to_string(),
                value: 1,
            }),
        }
    }
    counts
}
