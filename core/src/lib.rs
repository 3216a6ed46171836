//! Customer Copilot — core desk engine.
//!
//! A customer-success desk over a fixed book of six accounts: health
//! badges, conjunctive filtering, search, stable sorts, aggregate
//! metrics, simulated-latency actions, and a scripted assistant.
//!
//! Everything is in-memory and synchronous. The `Desk` in `desk.rs`
//! owns all state and is driven through `DeskCommand`, answering with
//! `DeskEvent`s and latency tickets.

pub mod action;
pub mod assistant;
pub mod command;
pub mod desk;
pub mod error;
pub mod event;
pub mod metrics;
pub mod pacing;
pub mod record;
pub mod types;
pub mod view;
