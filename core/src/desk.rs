//! The desk engine — the heart of Customer Copilot.
//!
//! CONTROL FLOW (fixed):
//!   command → state update → derived view/metrics recompute → events out.
//!
//! RULES:
//!   - The desk is the single owner of filter state, transcript, and
//!     gates. All updates are synchronous; there is no state tearing.
//!   - The record set is immutable. Completing an action emits a
//!     notification and nothing else.
//!   - Simulated latency is modeled as tickets: `apply` hands back the
//!     pending work, the caller waits out the delay, then calls
//!     `complete`. The core never sleeps.

use crate::{
    action::{CardAction, Notification},
    assistant::{canned_reply, ChatMessage, Transcript},
    command::DeskCommand,
    error::{DeskError, DeskResult},
    event::DeskEvent,
    metrics::{self, DeskMetrics},
    pacing::{Gate, ACTION_LATENCY, REFRESH_LATENCY, REPLY_LATENCY},
    record::{seed_accounts, CustomerRecord},
    types::{CustomerId, TicketId},
    view::FilterState,
};
use std::collections::HashSet;
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct RefreshTicket {
    pub id: TicketId,
    pub latency: Duration,
}

#[derive(Debug, Clone)]
pub struct ActionTicket {
    pub id: TicketId,
    pub customer_id: CustomerId,
    pub action: CardAction,
    pub latency: Duration,
    notification: Notification,
}

#[derive(Debug, Clone)]
pub struct ReplyTicket {
    pub id: TicketId,
    pub latency: Duration,
    reply: ChatMessage,
}

/// Work the caller owes the desk after a latency-gated command.
/// Fire-and-forget: a ticket cannot be cancelled, only completed.
#[derive(Debug, Clone)]
pub enum Pending {
    Refresh(RefreshTicket),
    Action(ActionTicket),
    Reply(ReplyTicket),
}

impl Pending {
    pub fn latency(&self) -> Duration {
        match self {
            Self::Refresh(t) => t.latency,
            Self::Action(t) => t.latency,
            Self::Reply(t) => t.latency,
        }
    }
}

/// The outcome of applying a command: events emitted immediately, plus
/// any pending simulated-latency work.
#[derive(Debug)]
pub struct Applied {
    pub events: Vec<DeskEvent>,
    pub pending: Option<Pending>,
}

impl Applied {
    fn events(events: Vec<DeskEvent>) -> Self {
        Self {
            events,
            pending: None,
        }
    }
}

pub struct Desk {
    records: Vec<CustomerRecord>,
    filters: FilterState,
    transcript: Transcript,
    refresh_gate: Gate,
    reply_gate: Gate,
    actions_in_flight: HashSet<CustomerId>,
}

impl Desk {
    /// A desk over the six seed accounts.
    pub fn new() -> Self {
        Self::with_records(seed_accounts())
    }

    /// A desk over an arbitrary record set. Used by tests.
    pub fn with_records(records: Vec<CustomerRecord>) -> Self {
        Self {
            records,
            filters: FilterState::default(),
            transcript: Transcript::new(),
            refresh_gate: Gate::default(),
            reply_gate: Gate::default(),
            actions_in_flight: HashSet::new(),
        }
    }

    pub fn records(&self) -> &[CustomerRecord] {
        &self.records
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The derived, ordered view under the current filter state.
    pub fn view(&self) -> Vec<&CustomerRecord> {
        self.filters.apply(&self.records)
    }

    /// Aggregates over the full record set, independent of filters.
    pub fn metrics(&self) -> DeskMetrics {
        metrics::compute(&self.records)
    }

    /// Apply one command. Returns the events it produced and, for the
    /// latency-gated commands, the pending work to complete.
    pub fn apply(&mut self, command: DeskCommand) -> DeskResult<Applied> {
        match command {
            DeskCommand::ToggleStatus { status } => {
                let selected = self.filters.toggle_status(status);
                log::info!(
                    "filter: status {status:?} {}",
                    if selected { "selected" } else { "cleared" }
                );
                Ok(Applied::events(vec![self.filters_changed()]))
            }

            DeskCommand::ToggleBusinessUnit { business_unit } => {
                let selected = self.filters.toggle_business_unit(&business_unit);
                log::info!(
                    "filter: business unit '{business_unit}' {}",
                    if selected { "selected" } else { "cleared" }
                );
                Ok(Applied::events(vec![self.filters_changed()]))
            }

            DeskCommand::SetSearch { query } => {
                self.filters.search = query.clone();
                Ok(Applied::events(vec![DeskEvent::SearchChanged { query }]))
            }

            DeskCommand::SetSortKey { sort_key } => {
                self.filters.sort_key = sort_key;
                Ok(Applied::events(vec![DeskEvent::SortChanged { sort_key }]))
            }

            DeskCommand::Refresh => self.begin_refresh(),

            DeskCommand::RunAction {
                customer_id,
                action,
            } => self.begin_action(&customer_id, action),

            DeskCommand::Ask { message } => self.ask(&message),
        }
    }

    /// Finish pending work after its latency has elapsed.
    pub fn complete(&mut self, pending: Pending) -> DeskEvent {
        match pending {
            Pending::Refresh(ticket) => {
                self.refresh_gate.release();
                let visible = self.view().len();
                log::debug!("refresh {} complete, {visible} visible", ticket.id);
                DeskEvent::ListRefreshed {
                    ticket_id: ticket.id,
                    visible,
                }
            }
            Pending::Action(ticket) => {
                self.actions_in_flight.remove(&ticket.customer_id);
                log::info!(
                    "action {:?} complete for customer {}",
                    ticket.action,
                    ticket.customer_id
                );
                DeskEvent::ActionCompleted {
                    ticket_id: ticket.id,
                    customer_id: ticket.customer_id,
                    action: ticket.action,
                    notification: ticket.notification,
                }
            }
            Pending::Reply(ticket) => {
                let message_id = ticket.reply.id.clone();
                self.transcript.push(ticket.reply);
                self.reply_gate.release();
                DeskEvent::ReplyDelivered { message_id }
            }
        }
    }

    fn begin_refresh(&mut self) -> DeskResult<Applied> {
        if !self.refresh_gate.acquire() {
            return Err(DeskError::RefreshInFlight);
        }
        let ticket = RefreshTicket {
            id: new_ticket_id(),
            latency: REFRESH_LATENCY,
        };
        Ok(Applied {
            events: vec![DeskEvent::RefreshStarted {
                ticket_id: ticket.id.clone(),
            }],
            pending: Some(Pending::Refresh(ticket)),
        })
    }

    fn begin_action(&mut self, customer_id: &str, action: CardAction) -> DeskResult<Applied> {
        let record = self
            .records
            .iter()
            .find(|r| r.id == customer_id)
            .ok_or_else(|| DeskError::UnknownCustomer {
                id: customer_id.to_string(),
            })?;

        if !self.actions_in_flight.insert(customer_id.to_string()) {
            return Err(DeskError::ActionInFlight {
                id: customer_id.to_string(),
            });
        }

        let ticket = ActionTicket {
            id: new_ticket_id(),
            customer_id: customer_id.to_string(),
            action,
            latency: ACTION_LATENCY,
            notification: Notification::action_completed(action, &record.name),
        };
        Ok(Applied {
            events: vec![DeskEvent::ActionStarted {
                ticket_id: ticket.id.clone(),
                customer_id: ticket.customer_id.clone(),
                action,
            }],
            pending: Some(Pending::Action(ticket)),
        })
    }

    fn ask(&mut self, message: &str) -> DeskResult<Applied> {
        if message.trim().is_empty() {
            return Err(DeskError::EmptyMessage);
        }
        if !self.reply_gate.acquire() {
            return Err(DeskError::ReplyInFlight);
        }

        let user_message = ChatMessage::user(message);
        let message_id = user_message.id.clone();
        self.transcript.push(user_message);

        let ticket = ReplyTicket {
            id: new_ticket_id(),
            latency: REPLY_LATENCY,
            reply: ChatMessage::assistant(canned_reply(message)),
        };
        Ok(Applied {
            events: vec![DeskEvent::MessageSent { message_id }],
            pending: Some(Pending::Reply(ticket)),
        })
    }

    fn filters_changed(&self) -> DeskEvent {
        DeskEvent::FiltersChanged {
            statuses: self.filters.statuses.clone(),
            business_units: self.filters.business_units.clone(),
        }
    }
}

impl Default for Desk {
    fn default() -> Self {
        Self::new()
    }
}

fn new_ticket_id() -> TicketId {
    Uuid::new_v4().to_string()
}
