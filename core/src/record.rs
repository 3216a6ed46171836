//! The account record store — a fixed, statically seeded book of business.
//!
//! RULE: records are immutable at runtime. Nothing in the desk mutates
//! them; actions, refreshes, and filters all read the same seed slice.

use crate::types::CustomerId;
use serde::{Deserialize, Serialize};

/// Health classification of an account. Assigned at seed time, never
/// recomputed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum HealthStatus {
    Healthy,
    NeedsEngagement,
    AtRisk,
    Opportunity,
}

impl HealthStatus {
    /// Fixed sort priority. Higher means "shown first" under the
    /// priority sort: at-risk accounts always surface to the top.
    pub fn priority(&self) -> u8 {
        match self {
            Self::AtRisk => 4,
            Self::NeedsEngagement => 3,
            Self::Opportunity => 2,
            Self::Healthy => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::NeedsEngagement => "Needs Engagement",
            Self::AtRisk => "At Risk",
            Self::Opportunity => "Opportunity",
        }
    }

    /// Badge glyph used by the runner's table output.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Healthy => "🟢",
            Self::NeedsEngagement => "🟡",
            Self::AtRisk => "🔴",
            Self::Opportunity => "🟠",
        }
    }
}

impl std::str::FromStr for HealthStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "healthy" => Ok(Self::Healthy),
            "needs-engagement" => Ok(Self::NeedsEngagement),
            "at-risk" => Ok(Self::AtRisk),
            "opportunity" => Ok(Self::Opportunity),
            other => Err(format!("unknown health status: {other}")),
        }
    }
}

/// Product usage at the time of the last sync.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UsageSnapshot {
    /// Percent of licensed capacity in use, 0–100.
    pub current: u8,
    /// Signed percent movement, e.g. "+12%" or "-23%".
    pub trend: String,
}

/// The model's stated grounds for the badge and the recommendation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AiReasoning {
    pub health_status: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerRecord {
    pub id: CustomerId,
    pub name: String,
    pub status: HealthStatus,
    pub usage: UsageSnapshot,
    /// Free-text recency string ("2 hours ago"), not a timestamp.
    pub last_interaction: String,
    pub recommended_action: String,
    pub avatar: String,
    /// Currency string such as "$24,500/mo". Kept as text; parsed only
    /// when sorting by revenue. See view::parse_revenue.
    pub revenue: String,
    pub contact_name: String,
    pub contact_role: String,
    pub business_unit: String,
    pub ai_reasoning: AiReasoning,
}

/// The fixed set of business units accounts are drawn from.
pub const BUSINESS_UNITS: &[&str] = &["Risk BU", "SPM", "HR", "Marketing", "Finance"];

fn record(
    id: &str,
    name: &str,
    status: HealthStatus,
    usage_current: u8,
    usage_trend: &str,
    last_interaction: &str,
    recommended_action: &str,
    avatar: &str,
    revenue: &str,
    contact_name: &str,
    contact_role: &str,
    business_unit: &str,
    reason_status: &str,
    reason_recommendation: &str,
) -> CustomerRecord {
    CustomerRecord {
        id: id.into(),
        name: name.into(),
        status,
        usage: UsageSnapshot {
            current: usage_current,
            trend: usage_trend.into(),
        },
        last_interaction: last_interaction.into(),
        recommended_action: recommended_action.into(),
        avatar: avatar.into(),
        revenue: revenue.into(),
        contact_name: contact_name.into(),
        contact_role: contact_role.into(),
        business_unit: business_unit.into(),
        ai_reasoning: AiReasoning {
            health_status: reason_status.into(),
            recommendation: reason_recommendation.into(),
        },
    }
}

/// The six seed accounts. Order matters: the seed order is the tie-break
/// order under every stable sort.
pub fn seed_accounts() -> Vec<CustomerRecord> {
    vec![
        record(
            "1",
            "Acme Corp",
            HealthStatus::Healthy,
            85,
            "+12%",
            "2 hours ago",
            "Schedule quarterly review to discuss expansion opportunities",
            "AC",
            "$24,500/mo",
            "Sarah Johnson",
            "VP of Operations",
            "Finance",
            "Consistent daily logins, growing seat count, and positive support sentiment over the last quarter.",
            "Usage grew 12% while support volume stayed flat; a quarterly review is the natural next touchpoint.",
        ),
        record(
            "2",
            "TechFlow Solutions",
            HealthStatus::NeedsEngagement,
            34,
            "-8%",
            "5 days ago",
            "Low usage detected. Send onboarding resources and schedule check-in",
            "TS",
            "$12,200/mo",
            "Mike Chen",
            "CTO",
            "Risk BU",
            "Usage dropped below 40% and the champion has not logged in this week.",
            "Accounts at this usage level respond well to guided onboarding refreshers.",
        ),
        record(
            "3",
            "Global Dynamics",
            HealthStatus::AtRisk,
            12,
            "-23%",
            "12 days ago",
            "Urgent: Customer hasn't logged in for 12 days. Schedule immediate call",
            "GD",
            "$8,900/mo",
            "Elena Rodriguez",
            "Operations Manager",
            "Risk BU",
            "No logins for 12 days combined with a 23% usage decline is a strong churn signal.",
            "Direct outreach recovers roughly half of the accounts that go quiet at this stage.",
        ),
        record(
            "4",
            "InnovateLab",
            HealthStatus::Opportunity,
            96,
            "+34%",
            "1 hour ago",
            "High engagement! Present premium features and expansion options",
            "IL",
            "$18,600/mo",
            "David Park",
            "Head of Product",
            "SPM",
            "Near-saturated usage with a steep upward trend across every workspace.",
            "Accounts above 90% usage convert to premium tiers at the highest observed rate.",
        ),
        record(
            "5",
            "StartupVenture",
            HealthStatus::Healthy,
            67,
            "+5%",
            "4 hours ago",
            "Consistent usage. Share best practices and case studies",
            "SV",
            "$5,400/mo",
            "Jessica Wu",
            "Founder",
            "Marketing",
            "Steady weekly usage with no open support issues.",
            "Healthy mid-size accounts engage well with peer case studies.",
        ),
        record(
            "6",
            "Enterprise Plus",
            HealthStatus::Opportunity,
            88,
            "+18%",
            "30 minutes ago",
            "Perfect timing for upsell conversation. Usage trending up significantly",
            "EP",
            "$45,200/mo",
            "Robert Thompson",
            "Director of IT",
            "HR",
            "Highest-revenue account with usage up 18% month over month.",
            "Momentum like this is the strongest predictor of a successful expansion conversation.",
        ),
    ]
}
