//! Aggregate metrics — a reduction over the full, unfiltered record set.
//!
//! The recency average is a string sniff: "hour" counts as 0.1 days,
//! "day" takes the leading integer, anything else counts as 0.1.
//! Imprecise, but the published seed average (2.9 days) depends on it.

use crate::record::{CustomerRecord, HealthStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeskMetrics {
    pub total_accounts: usize,
    pub percent_at_risk: f64,
    pub percent_healthy: f64,
    pub avg_days_since_interaction: f64,
}

/// Heuristic conversion of a recency string to days.
pub fn recency_days(last_interaction: &str) -> f64 {
    if last_interaction.contains("hour") {
        0.1
    } else if last_interaction.contains("day") {
        last_interaction
            .split_whitespace()
            .next()
            .and_then(|lead| lead.parse::<f64>().ok())
            .unwrap_or(0.1)
    } else {
        0.1
    }
}

pub fn compute(records: &[CustomerRecord]) -> DeskMetrics {
    let total = records.len();
    if total == 0 {
        return DeskMetrics {
            total_accounts: 0,
            percent_at_risk: 0.0,
            percent_healthy: 0.0,
            avg_days_since_interaction: 0.0,
        };
    }

    let at_risk = records
        .iter()
        .filter(|r| r.status == HealthStatus::AtRisk)
        .count();
    let healthy = records
        .iter()
        .filter(|r| r.status == HealthStatus::Healthy)
        .count();
    let total_days: f64 = records.iter().map(|r| recency_days(&r.last_interaction)).sum();

    DeskMetrics {
        total_accounts: total,
        percent_at_risk: at_risk as f64 / total as f64 * 100.0,
        percent_healthy: healthy as f64 / total as f64 * 100.0,
        avg_days_since_interaction: total_days / total as f64,
    }
}
