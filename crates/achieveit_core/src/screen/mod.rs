//! Screen state machines for the three tabs.
//!
//! # Responsibility
//! - Orchestrate repository calls into the per-screen operations the UI
//!   shell invokes on user events.
//! - Enforce the input policy: empty required fields and missing ids
//!   silently decline the mutation instead of raising errors.
//!
//! # Invariants
//! - Each screen owns exactly one repository; nothing is shared between
//!   screens.
//! - Derived views (category filter, marker map, per-date subset) never
//!   mutate the underlying collection.

use uuid::Uuid;

pub mod note_screen;
pub mod schedule_screen;
pub mod task_screen;

/// Form mode shared by the task and note screens.
///
/// Modeled as a tagged variant so "editing with no bound record" is
/// unrepresentable: entering `Editing` requires an existing id, and save
/// or cancel always returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    /// The input form targets a new record.
    Idle,
    /// The input form is bound to one existing record.
    Editing { id: Uuid },
}

impl EditMode {
    /// Whether the form is currently bound to an existing record.
    pub fn is_editing(self) -> bool {
        matches!(self, EditMode::Editing { .. })
    }
}
