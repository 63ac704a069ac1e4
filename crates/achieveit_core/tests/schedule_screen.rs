use achieveit_core::ScheduleScreen;
use uuid::Uuid;

#[test]
fn add_requires_nonempty_title() {
    let mut screen = ScheduleScreen::new();

    assert!(screen.add_schedule("Dentist", "2025-01-01").is_some());
    assert!(screen.add_schedule("  ", "2025-01-01").is_none());

    assert_eq!(screen.schedules().len(), 1);
}

#[test]
fn shared_due_date_yields_single_marker_and_both_records() {
    let mut screen = ScheduleScreen::new();
    let a = screen.add_schedule("A", "2025-01-01").unwrap();
    let b = screen.add_schedule("B", "2025-01-01").unwrap();

    let marked = screen.marked_dates();
    assert_eq!(marked.len(), 1);
    let marker = marked.get("2025-01-01").expect("date should be marked");
    assert!(marker.marked);

    let selected: Vec<_> = screen
        .select_date("2025-01-01")
        .into_iter()
        .map(|schedule| schedule.id)
        .collect();
    assert_eq!(selected, vec![a, b]);
}

#[test]
fn markers_skip_empty_and_malformed_dates() {
    let mut screen = ScheduleScreen::new();
    screen.add_schedule("dateless", "").unwrap();
    screen.add_schedule("freeform", "next tuesday").unwrap();
    screen.add_schedule("real", "2025-03-14").unwrap();

    let marked = screen.marked_dates();
    assert_eq!(marked.len(), 1);
    assert!(marked.contains_key("2025-03-14"));
}

#[test]
fn marker_view_does_not_mutate_collection() {
    let mut screen = ScheduleScreen::new();
    screen.add_schedule("one", "2025-01-01").unwrap();
    screen.add_schedule("two", "2025-01-02").unwrap();

    let _ = screen.marked_dates();
    let _ = screen.marked_dates();
    assert_eq!(screen.schedules().len(), 2);
}

#[test]
fn delete_removes_from_master_and_active_display_set() {
    let mut screen = ScheduleScreen::new();
    let a = screen.add_schedule("A", "2025-01-01").unwrap();
    let b = screen.add_schedule("B", "2025-01-01").unwrap();

    screen.select_date("2025-01-01");
    assert_eq!(screen.active_schedules().len(), 2);

    assert!(screen.delete_schedule(a));
    assert_eq!(screen.schedules().len(), 1);
    let active: Vec<_> = screen
        .active_schedules()
        .into_iter()
        .map(|schedule| schedule.id)
        .collect();
    assert_eq!(active, vec![b]);
}

#[test]
fn delete_without_selection_is_plain_removal() {
    let mut screen = ScheduleScreen::new();
    let id = screen.add_schedule("standalone", "2025-02-02").unwrap();

    assert!(screen.delete_schedule(id));
    assert!(screen.schedules().is_empty());
    assert!(screen.active_schedules().is_empty());
}

#[test]
fn delete_missing_id_is_noop() {
    let mut screen = ScheduleScreen::new();
    screen.add_schedule("kept", "2025-02-02").unwrap();
    let before: Vec<_> = screen.schedules().to_vec();

    assert!(!screen.delete_schedule(Uuid::new_v4()));
    assert_eq!(screen.schedules(), before.as_slice());
}

#[test]
fn selecting_empty_day_records_date_but_keeps_display_set() {
    let mut screen = ScheduleScreen::new();
    screen.add_schedule("meeting", "2025-01-01").unwrap();

    screen.select_date("2025-01-01");
    assert_eq!(screen.active_schedules().len(), 1);

    let empty = screen.select_date("2025-06-06");
    assert!(empty.is_empty());
    assert_eq!(screen.selected_date(), Some("2025-06-06"));
    // The day sheet only opens for non-empty days; the previous set stays.
    assert_eq!(screen.active_schedules().len(), 1);
}
