use copilot_core::action::CardAction;
use copilot_core::assistant::ChatRole;
use copilot_core::command::DeskCommand;
use copilot_core::desk::{Desk, Pending};
use copilot_core::error::DeskError;
use copilot_core::event::DeskEvent;
use copilot_core::pacing::{ACTION_LATENCY, REFRESH_LATENCY, REPLY_LATENCY};
use copilot_core::record::{seed_accounts, HealthStatus};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn pending(desk: &mut Desk, command: DeskCommand) -> Pending {
    desk.apply(command).unwrap().pending.expect("expected pending work")
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// Toggling a status filter shrinks the view and reports the new
/// selection in a FiltersChanged event.
#[test]
fn toggle_status_updates_view_and_emits_event() {
    let mut desk = Desk::new();

    let applied = desk
        .apply(DeskCommand::ToggleStatus {
            status: HealthStatus::AtRisk,
        })
        .unwrap();

    assert!(applied.pending.is_none(), "filter toggles have no latency");
    match &applied.events[..] {
        [DeskEvent::FiltersChanged { statuses, .. }] => {
            assert_eq!(statuses, &vec![HealthStatus::AtRisk]);
        }
        other => panic!("expected FiltersChanged, got {other:?}"),
    }
    assert_eq!(desk.view().len(), 1);
}

/// Toggling the same status twice restores the unfiltered view.
#[test]
fn toggling_a_status_twice_is_a_noop() {
    let mut desk = Desk::new();
    let cmd = DeskCommand::ToggleStatus {
        status: HealthStatus::Opportunity,
    };

    desk.apply(cmd.clone()).unwrap();
    assert_eq!(desk.view().len(), 2);

    desk.apply(cmd).unwrap();
    assert_eq!(desk.view().len(), 6);
}

/// Refresh is gated: a second refresh while one is in flight is an
/// error, and completing the first reopens the gate.
#[test]
fn refresh_gate_blocks_overlapping_refreshes() {
    let mut desk = Desk::new();

    let work = pending(&mut desk, DeskCommand::Refresh);
    assert_eq!(work.latency(), REFRESH_LATENCY);

    let err = desk.apply(DeskCommand::Refresh).unwrap_err();
    assert!(matches!(err, DeskError::RefreshInFlight), "got {err:?}");

    match desk.complete(work) {
        DeskEvent::ListRefreshed { visible, .. } => assert_eq!(visible, 6),
        other => panic!("expected ListRefreshed, got {other:?}"),
    }

    // Gate reopened.
    assert!(desk.apply(DeskCommand::Refresh).is_ok());
}

/// A card action completes with the expected toast text and a ~1s
/// latency ticket.
#[test]
fn action_completes_with_notification() {
    let mut desk = Desk::new();

    let work = pending(
        &mut desk,
        DeskCommand::RunAction {
            customer_id: "3".into(),
            action: CardAction::AcceptAndSend,
        },
    );
    assert_eq!(work.latency(), ACTION_LATENCY);

    match desk.complete(work) {
        DeskEvent::ActionCompleted {
            customer_id,
            notification,
            ..
        } => {
            assert_eq!(customer_id, "3");
            assert_eq!(notification.title, "Action Accept & Send");
            assert_eq!(
                notification.description,
                "Accept & Send action completed for Global Dynamics"
            );
        }
        other => panic!("expected ActionCompleted, got {other:?}"),
    }
}

/// The action gate is per customer: a second action on the same card is
/// rejected while one is in flight, but another card is free.
#[test]
fn action_gate_is_per_customer() {
    let mut desk = Desk::new();

    let first = pending(
        &mut desk,
        DeskCommand::RunAction {
            customer_id: "1".into(),
            action: CardAction::Snooze,
        },
    );

    let err = desk
        .apply(DeskCommand::RunAction {
            customer_id: "1".into(),
            action: CardAction::Reassign,
        })
        .unwrap_err();
    assert!(matches!(err, DeskError::ActionInFlight { .. }), "got {err:?}");

    // A different card is not gated.
    let second = pending(
        &mut desk,
        DeskCommand::RunAction {
            customer_id: "2".into(),
            action: CardAction::Reassign,
        },
    );

    desk.complete(first);
    desk.complete(second);

    // Completing reopens the per-customer gate.
    assert!(desk
        .apply(DeskCommand::RunAction {
            customer_id: "1".into(),
            action: CardAction::Reassign,
        })
        .is_ok());
}

/// Actions are simulated: completing one never mutates the record set.
#[test]
fn actions_never_mutate_records() {
    let mut desk = Desk::new();

    for (id, action) in [
        ("1", CardAction::AcceptAndSend),
        ("2", CardAction::Snooze),
        ("3", CardAction::Reassign),
    ] {
        let work = pending(
            &mut desk,
            DeskCommand::RunAction {
                customer_id: id.into(),
                action,
            },
        );
        desk.complete(work);
    }

    assert_eq!(
        desk.records(),
        seed_accounts().as_slice(),
        "record set must stay byte-for-byte the seeds"
    );
}

/// An action against an id that is not in the book fails cleanly.
#[test]
fn action_on_unknown_customer_fails() {
    let mut desk = Desk::new();
    let err = desk
        .apply(DeskCommand::RunAction {
            customer_id: "no-such-id".into(),
            action: CardAction::Snooze,
        })
        .unwrap_err();
    assert!(matches!(err, DeskError::UnknownCustomer { .. }), "got {err:?}");
}

/// Asking appends the user message immediately; the reply arrives only
/// when the ~1.5s ticket completes, and lands as the matched template.
#[test]
fn ask_appends_message_then_delivers_reply() {
    let mut desk = Desk::new();
    assert_eq!(desk.transcript().len(), 1); // greeting

    let work = pending(
        &mut desk,
        DeskCommand::Ask {
            message: "Find expansion opportunities".into(),
        },
    );
    assert_eq!(work.latency(), REPLY_LATENCY);
    assert_eq!(desk.transcript().len(), 2, "user message appended at once");

    match desk.complete(work) {
        DeskEvent::ReplyDelivered { .. } => {}
        other => panic!("expected ReplyDelivered, got {other:?}"),
    }

    let messages = desk.transcript().messages();
    assert_eq!(messages.len(), 3);
    let reply = messages.last().unwrap();
    assert_eq!(reply.role, ChatRole::Assistant);
    assert!(reply.content.contains("expansion opportunities"));
}

/// The send gate: a second ask while a reply is composing is rejected.
#[test]
fn ask_gate_blocks_overlapping_questions() {
    let mut desk = Desk::new();

    let work = pending(
        &mut desk,
        DeskCommand::Ask {
            message: "hello".into(),
        },
    );

    let err = desk
        .apply(DeskCommand::Ask {
            message: "hello again".into(),
        })
        .unwrap_err();
    assert!(matches!(err, DeskError::ReplyInFlight), "got {err:?}");

    desk.complete(work);
    assert!(desk
        .apply(DeskCommand::Ask {
            message: "hello again".into(),
        })
        .is_ok());
}

/// Blank input never reaches the transcript.
#[test]
fn blank_ask_is_rejected() {
    let mut desk = Desk::new();
    let err = desk
        .apply(DeskCommand::Ask {
            message: "   ".into(),
        })
        .unwrap_err();
    assert!(matches!(err, DeskError::EmptyMessage), "got {err:?}");
    assert_eq!(desk.transcript().len(), 1, "transcript must stay untouched");
}

/// Sort and search commands round-trip through the command surface.
#[test]
fn sort_and_search_commands_update_the_view() {
    let mut desk = Desk::new();

    desk.apply(DeskCommand::SetSearch {
        query: "global".into(),
    })
    .unwrap();
    let view = desk.view();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].name, "Global Dynamics");

    desk.apply(DeskCommand::SetSearch { query: String::new() })
        .unwrap();
    desk.apply(DeskCommand::SetSortKey {
        sort_key: copilot_core::view::SortKey::Usage,
    })
    .unwrap();
    let usages: Vec<u8> = desk.view().iter().map(|r| r.usage.current).collect();
    assert_eq!(usages, vec![96, 88, 85, 67, 34, 12]);
}
