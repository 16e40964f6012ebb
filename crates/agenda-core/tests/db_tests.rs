use agenda_core::{
    models::{EditKind, Snapshot, Task},
    structures::{TaskList, UndoHistory},
    Database, Event, EventPlanner, Persistence, PlannerConfig,
};
use jiff::civil::{date, time};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn sample_event(id: u64, day: i8, reminder: bool) -> Event {
    Event {
        id,
        name: format!("Event {id}"),
        date: date(2025, 7, day),
        time: time(9, 30, 0, 0),
        location: "Room 1".to_string(),
        description: "Notes".to_string(),
        attendees: "Ana, Raj".to_string(),
        reminder,
    }
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();

    assert!(temp_file.path().exists());
    assert!(db.list_events().expect("Failed to list events").is_empty());
    assert_eq!(db.next_event_id().expect("Failed to read state"), None);
}

#[test]
fn test_save_and_get_event() {
    let (_temp_file, mut db) = create_test_db();
    let event = sample_event(4, 10, true);

    db.save_event(&event).expect("Failed to save event");

    let loaded = db
        .get_event(4)
        .expect("Failed to get event")
        .expect("Event should exist");
    assert_eq!(loaded, event);
    assert_eq!(db.get_event(5).expect("Failed to get event"), None);
}

#[test]
fn test_save_event_overwrites_and_keeps_tasks() {
    let (_temp_file, mut db) = create_test_db();
    let mut event = sample_event(1, 10, false);
    db.save_event(&event).expect("Failed to save event");
    let tasks: TaskList = [Task::new("Agenda")].into_iter().collect();
    db.save_tasks_for_event(1, &tasks)
        .expect("Failed to save tasks");

    event.name = "Renamed".to_string();
    event.time = time(16, 45, 0, 0);
    db.save_event(&event).expect("Failed to overwrite event");

    let events = db.load_all_events().expect("Failed to load events");
    assert_eq!(events, vec![event]);
    assert_eq!(
        db.load_tasks_for_event(1).expect("Failed to load tasks"),
        tasks
    );
}

#[test]
fn test_list_events_in_chronological_order() {
    let (_temp_file, mut db) = create_test_db();
    for (id, day) in [(1, 12), (2, 9), (3, 10)] {
        db.save_event(&sample_event(id, day, false))
            .expect("Failed to save event");
    }

    let ids: Vec<_> = db
        .list_events()
        .expect("Failed to list events")
        .iter()
        .map(|event| event.id)
        .collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

#[test]
fn test_replace_tasks_keeps_order_and_flags() {
    let (_temp_file, mut db) = create_test_db();
    db.save_event(&sample_event(1, 10, false))
        .expect("Failed to save event");

    let mut tasks = TaskList::new();
    tasks.push(Task::new("Book room"));
    tasks.push(Task::new("Order food"));
    tasks.push(Task::new("Book room"));
    tasks.mark_complete("Order food");
    db.replace_tasks(1, &tasks).expect("Failed to save tasks");

    let mut shorter = tasks.clone();
    shorter.remove("Book room");
    db.replace_tasks(1, &shorter).expect("Failed to save tasks");

    let loaded = db.get_tasks(1).expect("Failed to load tasks");
    assert_eq!(
        loaded.to_vec(),
        vec![
            Task {
                description: "Order food".to_string(),
                completed: true,
            },
            Task::new("Book room"),
        ]
    );
    assert!(db.get_tasks(2).expect("Failed to load tasks").is_empty());
}

#[test]
fn test_delete_event_removes_tasks() {
    let (_temp_file, mut db) = create_test_db();
    db.save_event(&sample_event(1, 10, false))
        .expect("Failed to save event");
    let tasks: TaskList = [Task::new("Agenda")].into_iter().collect();
    db.replace_tasks(1, &tasks).expect("Failed to save tasks");

    assert!(db.remove_event(1).expect("Failed to delete event"));
    assert!(!db.remove_event(1).expect("Failed to delete event"));
    assert!(db.get_tasks(1).expect("Failed to load tasks").is_empty());

    // The trait method tolerates unknown ids.
    Persistence::delete_event(&mut db, 99).expect("Failed to delete unknown event");
}

#[test]
fn test_history_round_trip() {
    let (_temp_file, mut db) = create_test_db();
    let mut history = UndoHistory::with_capacity(10);
    history.push(Snapshot::created(sample_event(1, 10, true)));
    history.push(Snapshot::updated(sample_event(1, 11, false)));

    db.save_history(&history).expect("Failed to save history");
    let loaded = db.load_history().expect("Failed to load history");

    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].kind, EditKind::Create);
    assert_eq!(loaded[1].kind, EditKind::Update);
    assert_eq!(loaded[1].event, sample_event(1, 11, false));

    db.save_history(&UndoHistory::default())
        .expect("Failed to clear history");
    assert!(db.load_history().expect("Failed to load history").is_empty());
}

#[test]
fn test_next_event_id_round_trip() {
    let (_temp_file, mut db) = create_test_db();
    db.set_next_event_id(7).expect("Failed to save counter");
    db.set_next_event_id(9).expect("Failed to save counter");
    assert_eq!(db.next_event_id().expect("Failed to read counter"), Some(9));
}

#[test]
fn test_restore_planner_from_database() {
    let (_temp_file, mut db) = create_test_db();
    db.save_event(&sample_event(3, 12, true))
        .expect("Failed to save event");
    db.save_event(&sample_event(5, 11, false))
        .expect("Failed to save event");
    let tasks: TaskList = [Task::new("Slides")].into_iter().collect();
    db.save_tasks_for_event(5, &tasks)
        .expect("Failed to save tasks");

    let planner =
        EventPlanner::restore(&db, PlannerConfig::default()).expect("Failed to restore planner");

    assert_eq!(planner.len(), 2);
    assert_eq!(planner.next_id(), 6);
    assert_eq!(planner.get_tasks(5), vec![Task::new("Slides")]);
    let queued: Vec<_> = planner
        .reminder_queue()
        .expect("Failed to read queue")
        .iter()
        .map(|event| event.id)
        .collect();
    assert_eq!(queued, vec![3]);
}

#[test]
fn test_in_memory_database() {
    let mut db = Database::in_memory().expect("Failed to open database");
    db.save_event(&sample_event(1, 10, false))
        .expect("Failed to save event");
    assert_eq!(db.list_events().expect("Failed to list events").len(), 1);
}
