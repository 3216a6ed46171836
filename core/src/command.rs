use crate::{action::CardAction, record::HealthStatus, types::CustomerId, view::SortKey};
use serde::{Deserialize, Serialize};

/// All user-issued commands. Every interaction with the desk arrives
/// through one of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum DeskCommand {
    // ── Filter and view control ───────────────────
    ToggleStatus { status: HealthStatus },
    ToggleBusinessUnit { business_unit: String },
    SetSearch { query: String },
    SetSortKey { sort_key: SortKey },

    // ── Simulated-latency operations ──────────────
    Refresh,
    RunAction {
        customer_id: CustomerId,
        action: CardAction,
    },
    Ask { message: String },
}
