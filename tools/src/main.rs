//! desk-runner: headless runner for the Customer Copilot desk.
//!
//! Usage:
//!   desk-runner --status at-risk --bu "Risk BU" --sort revenue
//!   desk-runner --search acme --ask "Find expansion opportunities"
//!   desk-runner --ipc-mode
//!
//! One-shot mode applies the given filters, prints the metrics bar and
//! the derived account table, then runs any requested action or
//! assistant exchange. IPC mode reads newline-delimited JSON commands
//! on stdin and answers with one JSON state per line on stdout.

use anyhow::Result;
use copilot_core::{
    assistant::ChatMessage,
    command::DeskCommand,
    desk::{Desk, Pending},
    event::DeskEvent,
    metrics::DeskMetrics,
    record::CustomerRecord,
    view::FilterState,
};
use std::env;
use std::io::{self, BufRead, Write};
use std::thread;

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    Command { command: DeskCommand },
    Quit,
}

#[derive(serde::Serialize)]
struct DeskState {
    filters: FilterState,
    metrics: DeskMetrics,
    accounts: Vec<CustomerRecord>,
    transcript: Vec<ChatMessage>,
    events: Vec<DeskEvent>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let no_latency = args.iter().any(|a| a == "--no-latency");

    let mut desk = Desk::new();

    if ipc_mode {
        return run_ipc_loop(&mut desk, no_latency);
    }

    // ── One-shot scripted mode ────────────────────────────────────────
    for status in flag_values(&args, "--status") {
        let status = status.parse().map_err(anyhow::Error::msg)?;
        apply(&mut desk, DeskCommand::ToggleStatus { status }, no_latency)?;
    }
    for bu in flag_values(&args, "--bu") {
        apply(
            &mut desk,
            DeskCommand::ToggleBusinessUnit { business_unit: bu },
            no_latency,
        )?;
    }
    if let Some(query) = flag_value(&args, "--search") {
        apply(&mut desk, DeskCommand::SetSearch { query }, no_latency)?;
    }
    if let Some(key) = flag_value(&args, "--sort") {
        let sort_key = key.parse().map_err(anyhow::Error::msg)?;
        apply(&mut desk, DeskCommand::SetSortKey { sort_key }, no_latency)?;
    }
    if args.iter().any(|a| a == "--refresh") {
        apply(&mut desk, DeskCommand::Refresh, no_latency)?;
    }

    print_dashboard(&desk);

    if let Some(spec) = flag_value(&args, "--action") {
        let (customer_id, action) = spec
            .split_once(':')
            .ok_or_else(|| anyhow::anyhow!("--action expects <customer-id>:<action>"))?;
        let action = action.parse().map_err(anyhow::Error::msg)?;
        let events = apply(
            &mut desk,
            DeskCommand::RunAction {
                customer_id: customer_id.to_string(),
                action,
            },
            no_latency,
        )?;
        for event in events {
            if let DeskEvent::ActionCompleted { notification, .. } = event {
                println!();
                println!("[{}] {}", notification.title, notification.description);
            }
        }
    }

    if let Some(message) = flag_value(&args, "--ask") {
        apply(&mut desk, DeskCommand::Ask { message }, no_latency)?;
        println!();
        println!("=== ASSISTANT ===");
        for msg in desk.transcript().messages().iter().skip(1) {
            let who = match msg.role {
                copilot_core::assistant::ChatRole::User => "you",
                copilot_core::assistant::ChatRole::Assistant => "copilot",
            };
            println!("  {who}: {}", msg.content);
        }
    }

    Ok(())
}

/// Apply a command, wait out any pending latency, and return every event
/// produced, completion included.
fn apply(desk: &mut Desk, command: DeskCommand, no_latency: bool) -> Result<Vec<DeskEvent>> {
    let mut applied = desk.apply(command)?;
    let mut events = std::mem::take(&mut applied.events);
    if let Some(pending) = applied.pending {
        wait(&pending, no_latency);
        events.push(desk.complete(pending));
    }
    for event in &events {
        log::debug!("event: {}", event.to_json()?);
    }
    Ok(events)
}

fn wait(pending: &Pending, no_latency: bool) {
    if !no_latency {
        thread::sleep(pending.latency());
    }
}

fn run_ipc_loop(desk: &mut Desk, no_latency: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("bad ipc command: {e}");
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{err_json}")?;
                stdout.flush()?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::GetState => {
                let state = build_state(desk, Vec::new());
                writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
            }
            IpcCommand::Command { command } => {
                match apply(desk, command, no_latency) {
                    Ok(events) => {
                        let state = build_state(desk, events);
                        writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
                    }
                    Err(e) => {
                        let err_json = serde_json::json!({ "error": e.to_string() });
                        writeln!(stdout, "{err_json}")?;
                    }
                }
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

fn build_state(desk: &Desk, events: Vec<DeskEvent>) -> DeskState {
    DeskState {
        filters: desk.filters().clone(),
        metrics: desk.metrics(),
        accounts: desk.view().into_iter().cloned().collect(),
        transcript: desk.transcript().messages().to_vec(),
        events,
    }
}

fn print_dashboard(desk: &Desk) {
    let m = desk.metrics();
    println!("=== CUSTOMER COPILOT ===");
    println!("  accounts:        {}", m.total_accounts);
    println!("  % at risk:       {:.1}%", m.percent_at_risk);
    println!("  % healthy:       {:.1}%", m.percent_healthy);
    println!("  avg days since:  {:.1}", m.avg_days_since_interaction);
    println!();

    let view = desk.view();
    let filters = desk.filters();
    if filters.statuses.is_empty() && filters.business_units.is_empty() {
        println!("=== ACCOUNTS ({}) — all ===", view.len());
    } else {
        println!("=== ACCOUNTS ({}) — filtered ===", view.len());
    }
    for r in &view {
        println!(
            "  {} {:<20} {:>3}% ({:>4}) {:>11}  {:<9} {}",
            r.status.icon(),
            r.name,
            r.usage.current,
            r.usage.trend,
            r.revenue,
            r.business_unit,
            r.last_interaction,
        );
    }
    if view.is_empty() {
        println!("  (no customers match the current filters)");
    }
}

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].clone())
}

fn flag_values(args: &[String], flag: &str) -> Vec<String> {
    args.windows(2)
        .filter(|w| w[0] == flag)
        .map(|w| w[1].clone())
        .collect()
}
