mod common;

use std::collections::HashSet;

use agenda_core::{
    models::{EditKind, Task, Undo},
    params::UpdateEvent,
    EventId, EventPlanner, PlannerConfig, DEFAULT_POLL_INTERVAL_SECS,
};
use common::{event_params, july};
use jiff::{civil::time, SignedDuration};
use proptest::prelude::*;

fn ids(events: &[agenda_core::Event]) -> Vec<EventId> {
    events.iter().map(|event| event.id).collect()
}

/// One scheduling step: a start slot, the reminder flag and an optional
/// deletion of some earlier event. Few distinct slots so equal keys are common.
fn arb_step() -> impl Strategy<Value = (u8, u8, bool, Option<prop::sample::Index>)> {
    (
        1u8..=5,
        8u8..=10,
        any::<bool>(),
        prop::option::weighted(0.25, any::<prop::sample::Index>()),
    )
}

/// Creates one event per step and returns the ids still live afterwards.
fn schedule(
    planner: &mut EventPlanner,
    steps: &[(u8, u8, bool, Option<prop::sample::Index>)],
) -> HashSet<EventId> {
    let mut live = HashSet::new();
    for (n, (day, hour, reminder, delete)) in steps.iter().enumerate() {
        let event = planner
            .create_event(&event_params(
                &format!("Event {n}"),
                &format!("2025-07-{day:02}"),
                &format!("{hour:02}:00"),
                *reminder,
            ))
            .expect("Failed to create event");
        live.insert(event.id);

        if let Some(pick) = delete {
            let victim = 1 + pick.index(event.id as usize) as EventId;
            if planner.delete_event(victim).expect("delete failed") {
                live.remove(&victim);
            }
        }
    }
    live
}

proptest! {
    #[test]
    fn test_views_partition_live_events_in_order(
        steps in prop::collection::vec(arb_step(), 1..40),
    ) {
        let mut planner = EventPlanner::default();
        let live = schedule(&mut planner, &steps);

        let now = july(3, 9, 0);
        let past = planner.view_events(false, now).expect("view failed");
        let upcoming = planner.view_events(true, now).expect("view failed");

        prop_assert!(past.iter().all(|event| event.starts_at() < now));
        prop_assert!(upcoming.iter().all(|event| event.starts_at() >= now));

        let combined: Vec<_> = past.into_iter().chain(upcoming).collect();
        let combined_ids: HashSet<_> = ids(&combined).into_iter().collect();
        prop_assert_eq!(combined.len(), live.len());
        prop_assert_eq!(combined_ids, live);
        prop_assert!(combined
            .windows(2)
            .all(|pair| pair[0].starts_at() <= pair[1].starts_at()));
    }

    #[test]
    fn test_equal_starts_keep_creation_order(
        steps in prop::collection::vec(arb_step(), 1..30),
    ) {
        let mut planner = EventPlanner::default();
        schedule(&mut planner, &steps);

        let events = planner.all_events().expect("view failed");
        let ordered = events.windows(2).all(|pair| {
            pair[0].starts_at() < pair[1].starts_at()
                || (pair[0].starts_at() == pair[1].starts_at() && pair[0].id < pair[1].id)
        });
        prop_assert!(ordered);
    }

    #[test]
    fn test_default_polling_never_skips_due_soon(phase in 0i64..DEFAULT_POLL_INTERVAL_SECS as i64) {
        let interval = SignedDuration::from_secs(DEFAULT_POLL_INTERVAL_SECS as i64);
        let config = PlannerConfig::default();
        prop_assert!(due_soon_polls(config, interval, phase) >= 1);
    }

    #[test]
    fn test_slow_polling_widens_due_soon(
        interval_secs in 1i64..=300,
        phase in 0i64..300,
    ) {
        let interval = SignedDuration::from_secs(interval_secs);
        let mut config = PlannerConfig::default();
        config.reminders = config
            .reminders
            .covering_interval(interval)
            .expect("interval fits the lead");
        prop_assert!(due_soon_polls(config, interval, phase % interval_secs) >= 1);
    }
}

/// Polls a single 14:00 reminder every `interval`, starting `phase` seconds
/// after 13:50, and counts the polls that report it as due soon.
fn due_soon_polls(config: PlannerConfig, interval: SignedDuration, phase: i64) -> usize {
    let mut planner = EventPlanner::new(config);
    planner
        .create_event(&event_params("Standup", "2025-07-10", "14:00", true))
        .expect("Failed to create event");

    let start = july(10, 14, 0);
    let mut now = july(10, 13, 50) + SignedDuration::from_secs(phase);
    let mut reported = 0;
    while now < start {
        let scan = planner.process_reminders(now).expect("scan failed");
        reported += scan.due_soon.len();
        now += interval;
    }
    reported
}

#[test]
fn test_create_then_delete_leaves_no_trace() {
    let mut planner = EventPlanner::default();
    let event = planner
        .create_event(&event_params("Temp", "2025-07-10", "10:00", true))
        .expect("Failed to create event");
    assert!(planner.add_task(event.id, "Prepare"));

    assert!(planner.delete_event(event.id).expect("delete failed"));

    assert!(planner.get_event(event.id).is_none());
    assert!(planner.task_list(event.id).is_none());
    assert!(planner.get_tasks(event.id).is_empty());
    assert!(planner.all_events().expect("view failed").is_empty());
    assert!(planner.reminder_queue().expect("queue failed").is_empty());
    assert!(!planner.add_task(event.id, "Too late"));
    assert!(!planner.delete_event(event.id).expect("delete failed"));
}

#[test]
fn test_mark_complete_is_idempotent() {
    let mut planner = EventPlanner::default();
    let event = planner
        .create_event(&event_params("Prep", "2025-07-10", "10:00", false))
        .expect("Failed to create event");
    planner.add_task(event.id, "Print handouts");

    assert!(planner.mark_task_complete(event.id, "Print handouts"));
    let once = planner.get_tasks(event.id);
    assert!(planner.mark_task_complete(event.id, "Print handouts"));
    assert_eq!(planner.get_tasks(event.id), once);
}

#[test]
fn test_task_operations_report_missing_targets() {
    let mut planner = EventPlanner::default();
    let event = planner
        .create_event(&event_params("Prep", "2025-07-10", "10:00", false))
        .expect("Failed to create event");
    planner.add_task(event.id, "Dup");
    planner.add_task(event.id, "Dup");

    assert!(!planner.add_task(99, "Orphan"));
    assert!(!planner.remove_task(event.id, "Missing"));
    assert!(!planner.mark_task_complete(99, "Dup"));

    assert!(planner.remove_task(event.id, "Dup"));
    assert_eq!(planner.get_tasks(event.id), vec![Task::new("Dup")]);
}

#[test]
fn test_undo_update_restores_exact_fields() {
    let mut planner = EventPlanner::default();
    let original = planner
        .create_event(&agenda_core::CreateEvent {
            name: "Workshop".to_string(),
            date: "2025-07-10".to_string(),
            time: "14:00".to_string(),
            location: "Lab".to_string(),
            description: "Hands-on".to_string(),
            attendees: "Ana, Raj".to_string(),
            reminder: true,
        })
        .expect("Failed to create event");

    planner
        .update_event(
            original.id,
            &UpdateEvent {
                name: Some("Renamed".to_string()),
                date: Some("2025-08-01".to_string()),
                location: Some(String::new()),
                attendees: Some("Ana".to_string()),
                reminder: Some(false),
                ..Default::default()
            },
        )
        .expect("update failed")
        .expect("event should exist");

    let undo = planner.undo_last_edit().expect("undo failed");
    assert_eq!(undo, Some(Undo::Reverted(original.clone())));
    assert_eq!(planner.get_event(original.id), Some(&original));
    assert_eq!(ids(&planner.reminder_queue().expect("queue failed")), vec![1]);
}

#[test]
fn test_undo_create_removes_event_entirely() {
    let mut planner = EventPlanner::default();
    let event = planner
        .create_event(&event_params("Oops", "2025-07-10", "10:00", true))
        .expect("Failed to create event");

    let undo = planner.undo_last_edit().expect("undo failed");

    assert_eq!(undo, Some(Undo::Removed(event)));
    assert!(planner.is_empty());
    assert!(planner.all_events().expect("view failed").is_empty());
    assert!(planner.reminder_queue().expect("queue failed").is_empty());
    assert_eq!(planner.undo_last_edit().expect("undo failed"), None);
}

#[test]
fn test_history_keeps_ten_most_recent() {
    let mut planner = EventPlanner::default();
    planner
        .create_event(&event_params("Counter", "2025-07-10", "10:00", false))
        .expect("Failed to create event");
    for n in 1..=10 {
        planner
            .update_event(
                1,
                &UpdateEvent {
                    name: Some(format!("Counter {n}")),
                    ..Default::default()
                },
            )
            .expect("update failed");
    }

    let history = planner.edit_history();
    assert_eq!(history.len(), 10);
    assert!(history.iter().all(|snapshot| snapshot.kind == EditKind::Update));
    assert_eq!(history[0].event.name, "Counter 9");
    assert_eq!(history[9].event.name, "Counter");

    for _ in 0..10 {
        assert!(planner.undo_last_edit().expect("undo failed").is_some());
    }
    // The creation snapshot was evicted, so the event survives.
    assert_eq!(planner.undo_last_edit().expect("undo failed"), None);
    assert_eq!(
        planner.get_event(1).map(|event| event.name.as_str()),
        Some("Counter")
    );
}

#[test]
fn test_history_capacity_follows_config() {
    let config = PlannerConfig {
        history_capacity: 2,
        ..Default::default()
    };
    let mut planner = EventPlanner::new(config);
    for day in ["2025-07-10", "2025-07-11", "2025-07-12"] {
        planner
            .create_event(&event_params("Event", day, "10:00", false))
            .expect("Failed to create event");
    }
    let remaining: Vec<_> = planner
        .edit_history()
        .iter()
        .map(|snapshot| snapshot.event.id)
        .collect();
    assert_eq!(remaining, vec![3, 2]);
}

#[test]
fn test_scenario_upcoming_order() {
    let mut planner = EventPlanner::default();
    let a = planner
        .create_event(&event_params("A", "2025-07-10", "14:00", true))
        .expect("Failed to create A");
    let b = planner
        .create_event(&event_params("B", "2025-07-09", "09:00", false))
        .expect("Failed to create B");

    let upcoming = planner
        .view_events(true, july(1, 0, 0))
        .expect("view failed");
    assert_eq!(upcoming, vec![b, a]);
}

#[test]
fn test_scenario_book_room() {
    let mut planner = EventPlanner::default();
    let a = planner
        .create_event(&event_params("A", "2025-07-10", "14:00", true))
        .expect("Failed to create A");

    assert!(planner.add_task(a.id, "Book room"));
    assert!(planner.mark_task_complete(a.id, "Book room"));
    assert_eq!(
        planner.get_tasks(a.id),
        vec![Task {
            description: "Book room".to_string(),
            completed: true,
        }]
    );
}

#[test]
fn test_scenario_update_then_undo_reorders() {
    let mut planner = EventPlanner::default();
    let a = planner
        .create_event(&event_params("A", "2025-07-10", "14:00", true))
        .expect("Failed to create A");
    let c = planner
        .create_event(&event_params("C", "2025-07-10", "14:30", false))
        .expect("Failed to create C");

    planner
        .update_event(
            a.id,
            &UpdateEvent {
                time: Some("15:00".to_string()),
                ..Default::default()
            },
        )
        .expect("update failed");
    assert_eq!(ids(&planner.all_events().expect("view failed")), vec![c.id, a.id]);

    planner.undo_last_edit().expect("undo failed");

    let reverted = planner.get_event(a.id).expect("A should exist");
    assert_eq!(reverted.time, time(14, 0, 0, 0));
    assert_eq!(ids(&planner.all_events().expect("view failed")), vec![a.id, c.id]);
}

#[test]
fn test_scenario_reminders() {
    let mut planner = EventPlanner::default();
    let a = planner
        .create_event(&event_params("A", "2025-07-10", "14:00", true))
        .expect("Failed to create A");

    let early = planner
        .process_reminders(july(10, 13, 57))
        .expect("scan failed");
    assert_eq!(ids(&early.due_soon), vec![a.id]);
    assert!(early.past_due.is_empty());

    // Due soon does not dequeue, so it is reported again.
    let again = planner
        .process_reminders(july(10, 13, 57))
        .expect("scan failed");
    assert_eq!(ids(&again.due_soon), vec![a.id]);

    let late = planner
        .process_reminders(july(10, 14, 5))
        .expect("scan failed");
    assert_eq!(ids(&late.past_due), vec![a.id]);
    assert!(planner.reminder_queue().expect("queue failed").is_empty());

    let after = planner
        .process_reminders(july(10, 14, 6))
        .expect("scan failed");
    assert!(after.is_empty());
    assert!(planner.get_event(a.id).is_some());
}

#[test]
fn test_reminder_outside_window_stays_queued() {
    let mut planner = EventPlanner::default();
    planner
        .create_event(&event_params("A", "2025-07-10", "14:00", true))
        .expect("Failed to create A");

    // Ten minutes ahead and thirty seconds late are both quiet.
    for now in [july(10, 13, 50), jiff::civil::date(2025, 7, 10).at(14, 0, 30, 0)] {
        let scan = planner.process_reminders(now).expect("scan failed");
        assert!(scan.is_empty());
    }
    assert_eq!(planner.reminder_queue().expect("queue failed").len(), 1);
}

#[test]
fn test_failed_update_keeps_history_and_order() {
    let mut planner = EventPlanner::default();
    let a = planner
        .create_event(&event_params("A", "2025-07-10", "14:00", false))
        .expect("Failed to create A");

    let err = planner
        .update_event(
            a.id,
            &UpdateEvent {
                date: Some("2025-02-30".to_string()),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(planner.edit_history().len(), 1);
    assert_eq!(planner.get_event(a.id), Some(&a));
    assert_eq!(planner.update_event(42, &UpdateEvent::default()).expect("update failed"), None);
}
