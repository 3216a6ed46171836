//! The scripted assistant — an ordered keyword table over lower-cased
//! input, plus the transcript it feeds.
//!
//! This is a static lookup, not a retrieval system. Rules are tested in
//! order and the first match wins; anything unmatched gets the fallback.

use crate::types::MessageId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Seeded as the first transcript message.
pub const GREETING: &str = "Hello! I'm your Customer Copilot AI. Ask me anything about your \
     customers, like 'Show me at-risk customers in Risk BU' or 'What's the trend for \
     Enterprise Plus?'";

const RISK_BU_REPLY: &str = "I found 3 at-risk customers in Risk BU: Global Dynamics (12 days \
     since last contact), TechFlow Solutions (declining usage), and DataCorp (missed last 2 \
     meetings). Would you like me to draft engagement emails for them?";

const ENTERPRISE_PLUS_REPLY: &str = "Enterprise Plus is showing strong growth: 88% usage \
     (↑18%), $45,200/mo revenue. They're perfect for an upsell conversation - usage trending \
     up significantly over the past month.";

const EXPANSION_REPLY: &str = "I've identified 6 expansion opportunities: Enterprise Plus \
     ($45K/mo), InnovateLab ($18K/mo), and 4 others showing 85%+ usage. Combined potential: \
     $180K+ in additional ARR.";

const FALLBACK_REPLY: &str = "I'm analyzing your customer data. Here are some insights I can \
     help with: customer health trends, revenue opportunities, engagement recommendations, \
     and business unit analysis. What specific area would you like to explore?";

/// Prompt suggestions shown next to a fresh transcript.
pub const SUGGESTIONS: &[&str] = &[
    "Show me at-risk customers in Risk BU",
    "What's the trend for Enterprise Plus?",
    "Find expansion opportunities",
    "Summarize this week's activities",
];

/// Match the input against the keyword table, first hit wins.
pub fn canned_reply(input: &str) -> &'static str {
    let query = input.to_lowercase();

    if query.contains("at-risk") && query.contains("risk bu") {
        return RISK_BU_REPLY;
    }
    if query.contains("enterprise plus") {
        return ENTERPRISE_PLUS_REPLY;
    }
    if query.contains("opportunity") || query.contains("upsell") {
        return EXPANSION_REPLY;
    }
    FALLBACK_REPLY
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }
}

/// The visible chat transcript. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// A fresh transcript, seeded with the greeting.
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(GREETING)],
        }
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}
