//! Note domain model.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - Expansion state is not part of the record; the note screen keeps it
//!   in a side-map keyed by `NoteId`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a note record.
pub type NoteId = Uuid;

/// One note record as rendered by the note screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable id used for edit/delete/expand targeting.
    pub id: NoteId,
    /// Short header shown in the collapsed row.
    pub title: String,
    /// Body text shown when the row is expanded.
    pub text: String,
}

impl Note {
    /// Creates a note with a generated stable id.
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            text: text.into(),
        }
    }
}
