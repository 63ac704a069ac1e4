//! FFI use-case API for shell-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level screen operations to the UI via FRB.
//! - Own the process-global screen state the UI event loop drives.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Declined mutations (empty input, missing id) return `ok = false`
//!   envelopes, never errors.
//! - Ids cross the boundary as UUID strings.

use achieveit_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Category, NoteScreen, ScheduleScreen, TaskScreen, TABS,
};
use std::sync::{Mutex, MutexGuard, OnceLock};
use uuid::Uuid;

struct AppScreens {
    tasks: TaskScreen,
    notes: NoteScreen,
    calendar: ScheduleScreen,
}

static APP_SCREENS: OnceLock<Mutex<AppScreens>> = OnceLock::new();

fn screens() -> MutexGuard<'static, AppScreens> {
    let mutex = APP_SCREENS.get_or_init(|| {
        Mutex::new(AppScreens {
            tasks: TaskScreen::new(),
            notes: NoteScreen::new(),
            calendar: ScheduleScreen::new(),
        })
    });
    // The UI event loop is single-threaded; the lock only satisfies the
    // soundness requirements of the boundary. A poisoned lock still holds
    // valid screen state.
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope for screen mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the mutation was applied.
    pub ok: bool,
    /// Stable id of the affected record, when one exists.
    pub record_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn applied(message: impl Into<String>, record_id: String) -> Self {
        Self {
            ok: true,
            record_id: Some(record_id),
            message: message.into(),
        }
    }

    fn declined(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            record_id: None,
            message: message.into(),
        }
    }
}

/// Task row as rendered by the task tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub category: String,
    pub due_date: String,
    pub color: String,
}

/// Note row as rendered by the note tab, expansion flag baked in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    pub id: String,
    pub title: String,
    pub text: String,
    pub expanded: bool,
}

/// Schedule row as rendered by the calendar day sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleItem {
    pub id: String,
    pub title: String,
    pub due_date: String,
}

/// One highlighted calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedDate {
    pub date: String,
    pub marked: bool,
    pub dot_color: String,
}

/// Pre-filled task form fields while the task screen is in edit mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFormDraft {
    pub text: String,
    pub due_date: String,
}

/// Pre-filled note form fields while the note screen is in edit mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFormDraft {
    pub title: String,
    pub text: String,
}

/// Bottom-bar tab descriptor for the shell's asset lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabInfo {
    pub name: String,
    pub title: String,
    pub icon: String,
}

/// Tabs in display order with their icon keys.
///
/// # FFI contract
/// - Sync call, constant data, never throws.
#[flutter_rust_bridge::frb(sync)]
pub fn tab_descriptors() -> Vec<TabInfo> {
    TABS.iter()
        .map(|tab| TabInfo {
            name: tab.name.to_string(),
            title: tab.title.to_string(),
            icon: tab.icon.to_string(),
        })
        .collect()
}

/// Adds a task from the input form.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Empty text or an unknown category label declines the mutation.
#[flutter_rust_bridge::frb(sync)]
pub fn task_add(text: String, due_date: String, category: String) -> ActionResponse {
    let Some(category) = Category::from_label(&category) else {
        return ActionResponse::declined(format!("unknown category `{category}`"));
    };
    match screens().tasks.add_task(&text, &due_date, category) {
        Some(id) => ActionResponse::applied("Task added.", id.to_string()),
        None => ActionResponse::declined("Task text is empty."),
    }
}

/// Flips the completion flag of one task.
#[flutter_rust_bridge::frb(sync)]
pub fn task_toggle_complete(id: String) -> ActionResponse {
    with_parsed_id(&id, |screens, id| {
        if screens.tasks.toggle_complete(id) {
            ActionResponse::applied("Task toggled.", id.to_string())
        } else {
            ActionResponse::declined("Task not found.")
        }
    })
}

/// Removes one task.
#[flutter_rust_bridge::frb(sync)]
pub fn task_delete(id: String) -> ActionResponse {
    with_parsed_id(&id, |screens, id| {
        if screens.tasks.delete_task(id) {
            ActionResponse::applied("Task deleted.", id.to_string())
        } else {
            ActionResponse::declined("Task not found.")
        }
    })
}

/// Enters edit mode bound to one task.
#[flutter_rust_bridge::frb(sync)]
pub fn task_edit(id: String) -> ActionResponse {
    with_parsed_id(&id, |screens, id| {
        if screens.tasks.edit_task(id) {
            ActionResponse::applied("Editing task.", id.to_string())
        } else {
            ActionResponse::declined("Task not found.")
        }
    })
}

/// Pre-filled task form fields, or `None` when idle.
#[flutter_rust_bridge::frb(sync)]
pub fn task_draft() -> Option<TaskFormDraft> {
    screens().tasks.current_draft().map(|draft| TaskFormDraft {
        text: draft.text,
        due_date: draft.due_date,
    })
}

/// Saves the edit form into the bound task and returns to idle.
#[flutter_rust_bridge::frb(sync)]
pub fn task_save(text: String, due_date: String) -> ActionResponse {
    if screens().tasks.save_task(&text, &due_date) {
        ActionResponse {
            ok: true,
            record_id: None,
            message: "Task saved.".to_string(),
        }
    } else {
        ActionResponse::declined("No task is being edited.")
    }
}

/// Abandons task edit mode.
#[flutter_rust_bridge::frb(sync)]
pub fn task_cancel_edit() {
    screens().tasks.cancel_edit();
}

/// Tasks matching the active category chip, insertion order.
///
/// # FFI contract
/// - Sync call, derived view, never mutates.
/// - An unknown label behaves like `All`.
#[flutter_rust_bridge::frb(sync)]
pub fn task_list(category: String) -> Vec<TaskItem> {
    let category = Category::from_label(&category).unwrap_or(Category::All);
    screens()
        .tasks
        .filter_by_category(category)
        .into_iter()
        .map(|task| TaskItem {
            id: task.id.to_string(),
            text: task.text.clone(),
            completed: task.completed,
            category: task.category.label().to_string(),
            due_date: task.due_date.clone(),
            color: task.color.clone(),
        })
        .collect()
}

/// Adds a note from the input form.
#[flutter_rust_bridge::frb(sync)]
pub fn note_add(title: String, text: String) -> ActionResponse {
    match screens().notes.add_note(&title, &text) {
        Some(id) => ActionResponse::applied("Note added.", id.to_string()),
        None => ActionResponse::declined("Note title or body is empty."),
    }
}

/// Enters edit mode bound to one note.
#[flutter_rust_bridge::frb(sync)]
pub fn note_edit(id: String) -> ActionResponse {
    with_parsed_id(&id, |screens, id| {
        if screens.notes.edit_note(id) {
            ActionResponse::applied("Editing note.", id.to_string())
        } else {
            ActionResponse::declined("Note not found.")
        }
    })
}

/// Pre-filled note form fields, or `None` when idle.
#[flutter_rust_bridge::frb(sync)]
pub fn note_draft() -> Option<NoteFormDraft> {
    screens().notes.current_draft().map(|draft| NoteFormDraft {
        title: draft.title,
        text: draft.text,
    })
}

/// Saves the edit form into the bound note and returns to idle.
#[flutter_rust_bridge::frb(sync)]
pub fn note_save(title: String, text: String) -> ActionResponse {
    if screens().notes.save_note(&title, &text) {
        ActionResponse {
            ok: true,
            record_id: None,
            message: "Note saved.".to_string(),
        }
    } else {
        ActionResponse::declined("No note is being edited.")
    }
}

/// Abandons note edit mode.
#[flutter_rust_bridge::frb(sync)]
pub fn note_cancel_edit() {
    screens().notes.cancel_edit();
}

/// Removes one note and its expansion state.
#[flutter_rust_bridge::frb(sync)]
pub fn note_delete(id: String) -> ActionResponse {
    with_parsed_id(&id, |screens, id| {
        if screens.notes.delete_note(id) {
            ActionResponse::applied("Note deleted.", id.to_string())
        } else {
            ActionResponse::declined("Note not found.")
        }
    })
}

/// Flips the expand/collapse flag for one note row.
#[flutter_rust_bridge::frb(sync)]
pub fn note_toggle_expand(id: String) -> ActionResponse {
    with_parsed_id(&id, |screens, id| {
        screens.notes.toggle_expand(id);
        ActionResponse::applied("Note expansion toggled.", id.to_string())
    })
}

/// All notes in insertion order with their expansion flags.
#[flutter_rust_bridge::frb(sync)]
pub fn note_list() -> Vec<NoteItem> {
    let screens = screens();
    screens
        .notes
        .notes()
        .iter()
        .map(|note| NoteItem {
            id: note.id.to_string(),
            title: note.title.clone(),
            text: note.text.clone(),
            expanded: screens.notes.is_expanded(note.id),
        })
        .collect()
}

/// Adds a schedule due on the given calendar day.
#[flutter_rust_bridge::frb(sync)]
pub fn schedule_add(title: String, due_date: String) -> ActionResponse {
    match screens().calendar.add_schedule(&title, &due_date) {
        Some(id) => ActionResponse::applied("Schedule added.", id.to_string()),
        None => ActionResponse::declined("Schedule title is empty."),
    }
}

/// Removes one schedule from the collection and the open day sheet.
#[flutter_rust_bridge::frb(sync)]
pub fn schedule_delete(id: String) -> ActionResponse {
    with_parsed_id(&id, |screens, id| {
        if screens.calendar.delete_schedule(id) {
            ActionResponse::applied("Schedule deleted.", id.to_string())
        } else {
            ActionResponse::declined("Schedule not found.")
        }
    })
}

/// Highlight payload for the calendar widget: one entry per distinct
/// due date.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_marked_dates() -> Vec<MarkedDate> {
    screens()
        .calendar
        .marked_dates()
        .into_iter()
        .map(|(date, marker)| MarkedDate {
            date,
            marked: marker.marked,
            dot_color: marker.dot_color,
        })
        .collect()
}

/// Handles a day press: records the selection and returns the schedules
/// due that day.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_select_date(date: String) -> Vec<ScheduleItem> {
    screens()
        .calendar
        .select_date(&date)
        .into_iter()
        .map(|schedule| ScheduleItem {
            id: schedule.id.to_string(),
            title: schedule.title,
            due_date: schedule.due_date,
        })
        .collect()
}

/// Schedules in the open day sheet, insertion order.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_active_schedules() -> Vec<ScheduleItem> {
    screens()
        .calendar
        .active_schedules()
        .into_iter()
        .map(|schedule| ScheduleItem {
            id: schedule.id.to_string(),
            title: schedule.title.clone(),
            due_date: schedule.due_date.clone(),
        })
        .collect()
}

fn with_parsed_id(
    id: &str,
    f: impl FnOnce(&mut AppScreens, Uuid) -> ActionResponse,
) -> ActionResponse {
    match Uuid::parse_str(id.trim()) {
        Ok(parsed) => f(&mut screens(), parsed),
        Err(_) => ActionResponse::declined(format!("invalid record id `{id}`")),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        calendar_marked_dates, calendar_select_date, core_version, init_logging, note_add,
        note_list, note_toggle_expand, ping, schedule_add, schedule_delete, tab_descriptors,
        task_add, task_delete, task_list, task_toggle_complete,
    };
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn tab_descriptors_cover_all_three_screens() {
        let tabs = tab_descriptors();
        let names: Vec<_> = tabs.iter().map(|tab| tab.name.as_str()).collect();
        assert_eq!(names, ["task", "calendar", "note"]);
    }

    #[test]
    fn task_add_toggle_delete_round_trip() {
        let token = unique_token("ffi-task");
        let created = task_add(token.clone(), "01/01/2025".to_string(), "Work".to_string());
        assert!(created.ok, "{}", created.message);
        let id = created.record_id.expect("created task should return id");

        let toggled = task_toggle_complete(id.clone());
        assert!(toggled.ok, "{}", toggled.message);
        let listed = task_list("Work".to_string());
        let item = listed
            .iter()
            .find(|item| item.id == id)
            .expect("created task should be listed");
        assert!(item.completed);
        assert_eq!(item.text, token);

        assert!(task_delete(id.clone()).ok);
        assert!(!task_list("All".to_string()).iter().any(|item| item.id == id));
    }

    #[test]
    fn task_add_declines_empty_text_and_unknown_category() {
        assert!(!task_add("   ".to_string(), String::new(), "All".to_string()).ok);
        assert!(!task_add("text".to_string(), String::new(), "Errands".to_string()).ok);
    }

    #[test]
    fn mutations_decline_malformed_ids() {
        assert!(!task_delete("not-a-uuid".to_string()).ok);
        assert!(!schedule_delete("not-a-uuid".to_string()).ok);
    }

    #[test]
    fn note_expansion_flag_appears_in_list() {
        let token = unique_token("ffi-note");
        let created = note_add(token.clone(), "body".to_string());
        assert!(created.ok, "{}", created.message);
        let id = created.record_id.expect("created note should return id");

        assert!(note_toggle_expand(id.clone()).ok);
        let item = note_list()
            .into_iter()
            .find(|item| item.id == id)
            .expect("created note should be listed");
        assert!(item.expanded);
        assert_eq!(item.title, token);
    }

    #[test]
    fn schedule_day_press_returns_created_records() {
        let date = "2031-07-19".to_string();
        let first = schedule_add(unique_token("ffi-sched"), date.clone());
        assert!(first.ok, "{}", first.message);
        let id = first.record_id.expect("created schedule should return id");

        assert!(calendar_marked_dates()
            .iter()
            .any(|marked| marked.date == date && marked.marked));

        let day = calendar_select_date(date.clone());
        assert!(day.iter().any(|item| item.id == id));

        assert!(schedule_delete(id).ok);
    }
}
