//! Desk events — every observable state change.
//!
//! RULE: the desk communicates outcomes only through events. Callers
//! render from the derived view and these; they never reach into desk
//! internals.

use crate::{
    action::{CardAction, Notification},
    record::HealthStatus,
    types::{CustomerId, MessageId, TicketId},
    view::SortKey,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeskEvent {
    // ── Filter and view changes ───────────────────
    FiltersChanged {
        statuses: Vec<HealthStatus>,
        business_units: Vec<String>,
    },
    SearchChanged {
        query: String,
    },
    SortChanged {
        sort_key: SortKey,
    },

    // ── Refresh ───────────────────────────────────
    RefreshStarted {
        ticket_id: TicketId,
    },
    ListRefreshed {
        ticket_id: TicketId,
        visible: usize,
    },

    // ── Card actions ──────────────────────────────
    ActionStarted {
        ticket_id: TicketId,
        customer_id: CustomerId,
        action: CardAction,
    },
    ActionCompleted {
        ticket_id: TicketId,
        customer_id: CustomerId,
        action: CardAction,
        notification: Notification,
    },

    // ── Assistant ─────────────────────────────────
    MessageSent {
        message_id: MessageId,
    },
    ReplyDelivered {
        message_id: MessageId,
    },
}

impl DeskEvent {
    /// JSON payload form, as handed to UI transports and logs.
    pub fn to_json(&self) -> crate::error::DeskResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
