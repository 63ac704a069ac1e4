use achieveit_core::{Category, EditMode, TaskScreen};
use uuid::Uuid;

#[test]
fn add_appends_only_nonempty_text() {
    let mut screen = TaskScreen::new();

    assert!(screen.add_task("Buy milk", "01/01/2025", Category::All).is_some());
    assert!(screen.add_task("", "01/01/2025", Category::All).is_none());
    assert!(screen.add_task("   ", "", Category::Work).is_none());
    assert!(screen.add_task("Call mom", "", Category::Personal).is_some());

    assert_eq!(screen.tasks().len(), 2);
}

#[test]
fn new_task_carries_defaults_and_palette_color() {
    let mut screen = TaskScreen::new();
    let id = screen
        .add_task("Write report", "02/10/2025", Category::Work)
        .expect("nonempty text should be accepted");

    let task = screen
        .tasks()
        .iter()
        .find(|task| task.id == id)
        .expect("added task should be listed");
    assert!(!task.completed);
    assert_eq!(task.category, Category::Work);
    assert_eq!(task.due_date, "02/10/2025");
    assert_eq!(task.color, "#FFFBEA");
}

#[test]
fn toggle_complete_twice_is_involution() {
    let mut screen = TaskScreen::new();
    let id = screen
        .add_task("Laundry", "", Category::All)
        .expect("add should succeed");

    assert!(screen.toggle_complete(id));
    assert!(screen.tasks()[0].completed);
    assert!(screen.toggle_complete(id));
    assert!(!screen.tasks()[0].completed);
}

#[test]
fn missing_id_mutations_leave_collection_unchanged() {
    let mut screen = TaskScreen::new();
    screen
        .add_task("Only task", "", Category::All)
        .expect("add should succeed");
    let before: Vec<_> = screen.tasks().to_vec();

    let ghost = Uuid::new_v4();
    assert!(!screen.toggle_complete(ghost));
    assert!(!screen.delete_task(ghost));
    assert!(!screen.edit_task(ghost));

    assert_eq!(screen.tasks(), before.as_slice());
    assert_eq!(screen.mode(), EditMode::Idle);
}

#[test]
fn edit_save_rewrites_text_and_due_date_only() {
    let mut screen = TaskScreen::new();
    let id = screen
        .add_task("Draft slides", "03/01/2025", Category::School)
        .expect("add should succeed");
    screen.toggle_complete(id);

    assert!(screen.edit_task(id));
    let draft = screen.current_draft().expect("edit mode should expose a draft");
    assert_eq!(draft.text, "Draft slides");
    assert_eq!(draft.due_date, "03/01/2025");

    assert!(screen.save_task("Final slides", "03/05/2025"));
    assert_eq!(screen.mode(), EditMode::Idle);

    let task = &screen.tasks()[0];
    assert_eq!(task.id, id);
    assert_eq!(task.text, "Final slides");
    assert_eq!(task.due_date, "03/05/2025");
    assert_eq!(task.category, Category::School);
    assert!(task.completed);
}

#[test]
fn save_while_idle_is_noop() {
    let mut screen = TaskScreen::new();
    screen
        .add_task("Untouched", "", Category::All)
        .expect("add should succeed");

    assert!(!screen.save_task("Changed", "12/12/2025"));
    assert_eq!(screen.tasks()[0].text, "Untouched");
}

#[test]
fn cancel_edit_returns_to_idle_without_changes() {
    let mut screen = TaskScreen::new();
    let id = screen
        .add_task("Keep me", "", Category::All)
        .expect("add should succeed");

    assert!(screen.edit_task(id));
    assert!(screen.mode().is_editing());
    screen.cancel_edit();
    assert_eq!(screen.mode(), EditMode::Idle);
    assert_eq!(screen.tasks()[0].text, "Keep me");
}

#[test]
fn category_filter_scenario() {
    let mut screen = TaskScreen::new();
    screen
        .add_task("Buy milk", "01/01/2025", Category::Personal)
        .expect("add should succeed");

    assert!(screen.filter_by_category(Category::Work).is_empty());
    assert_eq!(screen.filter_by_category(Category::Personal).len(), 1);
    assert_eq!(screen.filter_by_category(Category::All).len(), 1);
}

#[test]
fn filter_all_preserves_insertion_order_across_deletes() {
    let mut screen = TaskScreen::new();
    let first = screen.add_task("first", "", Category::Work).unwrap();
    let second = screen.add_task("second", "", Category::Personal).unwrap();
    let third = screen.add_task("third", "", Category::Work).unwrap();

    screen.delete_task(second);

    let all: Vec<_> = screen
        .filter_by_category(Category::All)
        .into_iter()
        .map(|task| task.id)
        .collect();
    assert_eq!(all, vec![first, third]);

    let work: Vec<_> = screen
        .filter_by_category(Category::Work)
        .into_iter()
        .map(|task| task.id)
        .collect();
    assert_eq!(work, vec![first, third]);
}
