//! Task screen state machine.
//!
//! # Responsibility
//! - Provide add/toggle/edit/save/delete entry points for the task tab.
//! - Derive the category-filtered view without touching the collection.
//!
//! # Invariants
//! - A task with empty (post-trim) text is never created.
//! - `toggle_complete` is an involution; applying it twice restores the
//!   original flag.
//! - `save_task` only rewrites text and due date; id, category and
//!   completion survive an edit round-trip.

use crate::model::task::{Category, Task, TaskId};
use crate::repo::task_repo::{MemTaskRepository, TaskRepository};
use crate::screen::EditMode;
use log::debug;

/// Pre-filled form fields exposed while the screen is in edit mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub text: String,
    pub due_date: String,
}

/// Task screen facade over a task repository.
pub struct TaskScreen<R: TaskRepository = MemTaskRepository> {
    repo: R,
    mode: EditMode,
}

impl TaskScreen<MemTaskRepository> {
    /// Creates a screen over a fresh in-memory collection.
    pub fn new() -> Self {
        Self::with_repo(MemTaskRepository::new())
    }
}

impl Default for TaskScreen<MemTaskRepository> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: TaskRepository> TaskScreen<R> {
    /// Creates a screen using the provided repository implementation.
    pub fn with_repo(repo: R) -> Self {
        Self {
            repo,
            mode: EditMode::Idle,
        }
    }

    /// Adds a task from the input form.
    ///
    /// Declines (returns `None`) when `text` trims to empty. The color
    /// tag cycles the palette by the collection size at add time, and the
    /// new task carries the category chip active in the UI.
    pub fn add_task(
        &mut self,
        text: &str,
        due_date: &str,
        category: Category,
    ) -> Option<TaskId> {
        if text.trim().is_empty() {
            debug!("event=task_add_declined reason=empty_text");
            return None;
        }
        let task = Task::new(text, due_date, category, self.repo.len());
        Some(self.repo.add(task))
    }

    /// Flips the completion flag of one task. Missing ids are a no-op.
    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        match self.repo.toggle_completed(id) {
            Ok(_) => true,
            Err(err) => {
                debug!("event=task_toggle_noop id={id} reason={err}");
                false
            }
        }
    }

    /// Removes one task. Missing ids are a no-op.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        match self.repo.remove(id) {
            Ok(_) => true,
            Err(err) => {
                debug!("event=task_delete_noop id={id} reason={err}");
                false
            }
        }
    }

    /// Enters edit mode bound to one existing task.
    ///
    /// No-op (stays in the current mode) when the id is absent.
    pub fn edit_task(&mut self, id: TaskId) -> bool {
        if self.repo.get(id).is_none() {
            debug!("event=task_edit_noop id={id} reason=not_found");
            return false;
        }
        self.mode = EditMode::Editing { id };
        true
    }

    /// Form fields pre-filled from the bound task, or `None` when idle.
    pub fn current_draft(&self) -> Option<TaskDraft> {
        match self.mode {
            EditMode::Editing { id } => self.repo.get(id).map(|task| TaskDraft {
                text: task.text.clone(),
                due_date: task.due_date.clone(),
            }),
            EditMode::Idle => None,
        }
    }

    /// Saves the edit form into the bound task and returns to idle.
    ///
    /// Only text and due date are rewritten; id, category and completion
    /// stay untouched. Saving while idle is a no-op.
    pub fn save_task(&mut self, text: &str, due_date: &str) -> bool {
        let EditMode::Editing { id } = self.mode else {
            debug!("event=task_save_noop reason=no_selection");
            return false;
        };
        self.mode = EditMode::Idle;
        match self.repo.replace_content(id, text, due_date) {
            Ok(()) => true,
            Err(err) => {
                debug!("event=task_save_noop id={id} reason={err}");
                false
            }
        }
    }

    /// Abandons edit mode without touching the bound task.
    pub fn cancel_edit(&mut self) {
        self.mode = EditMode::Idle;
    }

    /// Current form mode.
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        self.repo.list()
    }

    /// Derived view of tasks matching the active category chip.
    ///
    /// `Category::All` returns the whole collection. Insertion order is
    /// preserved and the collection is never mutated.
    pub fn filter_by_category(&self, category: Category) -> Vec<&Task> {
        self.repo
            .list()
            .iter()
            .filter(|task| category == Category::All || task.category == category)
            .collect()
    }
}
