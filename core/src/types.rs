//! Shared primitive types used across the entire desk.

/// A stable, unique identifier for a customer account.
pub type CustomerId = String;

/// A unique identifier for a transcript message.
pub type MessageId = String;

/// A unique identifier for an in-flight latency ticket.
pub type TicketId = String;
