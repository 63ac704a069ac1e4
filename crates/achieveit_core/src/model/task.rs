//! Task domain model.
//!
//! # Responsibility
//! - Define the task record and its fixed category set.
//! - Own the display-color palette applied at creation time.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `completed` starts as `false` for every new task.
//! - `category` defaults to the `All` sentinel when the UI has no
//!   narrower selection active.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task record.
pub type TaskId = Uuid;

/// Background colors cycled over by creation order.
const TASK_COLOR_PALETTE: [&str; 1] = ["#FFFBEA"];

/// Fixed category set shown as filter chips on the task screen.
///
/// `All` doubles as the filter sentinel: a record created while no
/// narrower chip is active carries `All`, and filtering by `All` returns
/// the whole collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[default]
    All,
    Work,
    School,
    Birthday,
    Personal,
}

impl Category {
    /// All categories in chip display order.
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Work,
        Category::School,
        Category::Birthday,
        Category::Personal,
    ];

    /// Display label, identical to the wire form.
    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Work => "Work",
            Category::School => "School",
            Category::Birthday => "Birthday",
            Category::Personal => "Personal",
        }
    }

    /// Parses a display label back into a category.
    pub fn from_label(value: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| category.label() == value)
    }
}

/// One task record as rendered by the task screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable id used for toggle/edit/delete targeting.
    pub id: TaskId,
    /// User-entered task text.
    pub text: String,
    /// Completion flag flipped by the checkbox.
    pub completed: bool,
    /// Category chip active when the task was added.
    pub category: Category,
    /// Free-form due date text (`MM/DD/YYYY` by UI convention).
    pub due_date: String,
    /// Background color assigned from the palette at creation.
    pub color: String,
}

impl Task {
    /// Creates a task with a generated stable id.
    ///
    /// `collection_len` is the task count at the moment of creation and
    /// selects the palette color, matching the add-order cycling the UI
    /// shows.
    pub fn new(
        text: impl Into<String>,
        due_date: impl Into<String>,
        category: Category,
        collection_len: usize,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            completed: false,
            category,
            due_date: due_date.into(),
            color: color_for_index(collection_len).to_string(),
        }
    }
}

/// Returns the palette color for the record at the given add index.
pub fn color_for_index(index: usize) -> &'static str {
    TASK_COLOR_PALETTE[index % TASK_COLOR_PALETTE.len()]
}
