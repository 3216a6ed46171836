//! The derived-view engine — filter, search, and sort over the record
//! store.
//!
//! RULES:
//!   - Status and business-unit filters apply conjunctively (AND).
//!   - An empty selection set is a no-op filter, not "match nothing".
//!   - Sorting happens after filtering and is stable for ties, so the
//!     seed order is the tie-break order.

use crate::record::{CustomerRecord, HealthStatus};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    #[default]
    Status,
    Usage,
    Revenue,
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "status" => Ok(Self::Status),
            "usage" => Ok(Self::Usage),
            "revenue" => Ok(Self::Revenue),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

/// Filter selections, search text, and sort key. Owned by the desk,
/// never reset, mutated only by direct user toggles.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterState {
    pub statuses: Vec<HealthStatus>,
    pub business_units: Vec<String>,
    pub search: String,
    pub sort_key: SortKey,
}

impl FilterState {
    /// Toggle a status in the selection set. Returns whether it is
    /// selected afterwards.
    pub fn toggle_status(&mut self, status: HealthStatus) -> bool {
        if let Some(pos) = self.statuses.iter().position(|s| *s == status) {
            self.statuses.remove(pos);
            false
        } else {
            self.statuses.push(status);
            true
        }
    }

    /// Toggle a business unit in the selection set. Returns whether it
    /// is selected afterwards.
    pub fn toggle_business_unit(&mut self, business_unit: &str) -> bool {
        if let Some(pos) = self
            .business_units
            .iter()
            .position(|b| b == business_unit)
        {
            self.business_units.remove(pos);
            false
        } else {
            self.business_units.push(business_unit.to_string());
            true
        }
    }

    fn matches(&self, record: &CustomerRecord) -> bool {
        let status_ok = self.statuses.is_empty() || self.statuses.contains(&record.status);
        let bu_ok = self.business_units.is_empty()
            || self.business_units.iter().any(|b| b == &record.business_unit);

        let search_ok = if self.search.is_empty() {
            true
        } else {
            let needle = self.search.to_lowercase();
            record.name.to_lowercase().contains(&needle)
                || record.contact_name.to_lowercase().contains(&needle)
        };

        status_ok && bu_ok && search_ok
    }

    /// Compute the ordered view: filter, then stable-sort by the active
    /// key. Pure — applying the same state twice yields the same result.
    pub fn apply<'a>(&self, records: &'a [CustomerRecord]) -> Vec<&'a CustomerRecord> {
        let mut view: Vec<&CustomerRecord> =
            records.iter().filter(|r| self.matches(r)).collect();

        match self.sort_key {
            SortKey::Name => view.sort_by(|a, b| a.name.cmp(&b.name)),
            SortKey::Status => {
                view.sort_by(|a, b| b.status.priority().cmp(&a.status.priority()))
            }
            SortKey::Usage => view.sort_by(|a, b| b.usage.current.cmp(&a.usage.current)),
            SortKey::Revenue => view.sort_by(|a, b| {
                compare_revenue_desc(parse_revenue(&a.revenue), parse_revenue(&b.revenue))
            }),
        }

        view
    }
}

/// Extract the numeric value from a revenue string: strip `$` and `,`,
/// drop a trailing `/mo`. Unparseable input yields NaN.
pub fn parse_revenue(revenue: &str) -> f64 {
    let stripped = revenue
        .trim()
        .trim_end_matches("/mo")
        .replace(['$', ','], "");
    stripped.parse().unwrap_or(f64::NAN)
}

/// Descending comparison with NaN (unparseable revenue) ordered after
/// every real value; NaN ties keep seed order.
fn compare_revenue_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.total_cmp(&a),
    }
}
