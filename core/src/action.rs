//! Per-card actions. All of them are simulated: a fixed delay, then a
//! notification. No action mutates a record.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CardAction {
    AcceptAndSend,
    Snooze,
    Reassign,
}

impl CardAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::AcceptAndSend => "Accept & Send",
            Self::Snooze => "Snooze",
            Self::Reassign => "Reassign",
        }
    }
}

impl std::str::FromStr for CardAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accept-and-send" | "accept" => Ok(Self::AcceptAndSend),
            "snooze" => Ok(Self::Snooze),
            "reassign" => Ok(Self::Reassign),
            other => Err(format!("unknown action: {other}")),
        }
    }
}

/// The toast shown when a simulated action completes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn action_completed(action: CardAction, customer_name: &str) -> Self {
        Self {
            title: format!("Action {}", action.label()),
            description: format!(
                "{} action completed for {}",
                action.label(),
                customer_name
            ),
        }
    }
}
