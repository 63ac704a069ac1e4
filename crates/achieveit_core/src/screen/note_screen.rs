//! Note screen state machine.
//!
//! # Responsibility
//! - Provide add/edit/save/delete entry points for the note tab.
//! - Track per-note expand/collapse display state in a side-map.
//!
//! # Invariants
//! - A note is never created with an empty (post-trim) title or body.
//! - Expansion state defaults to collapsed and flips independently of
//!   note content.
//! - Deleting a note prunes its side-map entry so the map cannot grow
//!   unboundedly.

use crate::model::note::{Note, NoteId};
use crate::repo::note_repo::{MemNoteRepository, NoteRepository};
use crate::screen::EditMode;
use log::debug;
use std::collections::HashMap;

/// Pre-filled form fields exposed while the screen is in edit mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub text: String,
}

/// Note screen facade over a note repository.
pub struct NoteScreen<R: NoteRepository = MemNoteRepository> {
    repo: R,
    mode: EditMode,
    expanded: HashMap<NoteId, bool>,
}

impl NoteScreen<MemNoteRepository> {
    /// Creates a screen over a fresh in-memory collection.
    pub fn new() -> Self {
        Self::with_repo(MemNoteRepository::new())
    }
}

impl Default for NoteScreen<MemNoteRepository> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: NoteRepository> NoteScreen<R> {
    /// Creates a screen using the provided repository implementation.
    pub fn with_repo(repo: R) -> Self {
        Self {
            repo,
            mode: EditMode::Idle,
            expanded: HashMap::new(),
        }
    }

    /// Adds a note from the input form.
    ///
    /// Declines (returns `None`) when either the title or the body trims
    /// to empty.
    pub fn add_note(&mut self, title: &str, text: &str) -> Option<NoteId> {
        if title.trim().is_empty() || text.trim().is_empty() {
            debug!("event=note_add_declined reason=empty_field");
            return None;
        }
        Some(self.repo.add(Note::new(title, text)))
    }

    /// Enters edit mode bound to one existing note.
    ///
    /// No-op (stays in the current mode) when the id is absent.
    pub fn edit_note(&mut self, id: NoteId) -> bool {
        if self.repo.get(id).is_none() {
            debug!("event=note_edit_noop id={id} reason=not_found");
            return false;
        }
        self.mode = EditMode::Editing { id };
        true
    }

    /// Form fields pre-filled from the bound note, or `None` when idle.
    pub fn current_draft(&self) -> Option<NoteDraft> {
        match self.mode {
            EditMode::Editing { id } => self.repo.get(id).map(|note| NoteDraft {
                title: note.title.clone(),
                text: note.text.clone(),
            }),
            EditMode::Idle => None,
        }
    }

    /// Saves the edit form into the bound note and returns to idle.
    ///
    /// Title and text are overwritten wholesale for the bound id only.
    /// Saving while idle is a no-op.
    pub fn save_note(&mut self, title: &str, text: &str) -> bool {
        let EditMode::Editing { id } = self.mode else {
            debug!("event=note_save_noop reason=no_selection");
            return false;
        };
        self.mode = EditMode::Idle;
        match self.repo.replace(id, title, text) {
            Ok(()) => true,
            Err(err) => {
                debug!("event=note_save_noop id={id} reason={err}");
                false
            }
        }
    }

    /// Abandons edit mode without touching the bound note.
    pub fn cancel_edit(&mut self) {
        self.mode = EditMode::Idle;
    }

    /// Removes one note and prunes its expansion entry. Missing ids are a
    /// no-op.
    pub fn delete_note(&mut self, id: NoteId) -> bool {
        match self.repo.remove(id) {
            Ok(_) => {
                self.expanded.remove(&id);
                true
            }
            Err(err) => {
                debug!("event=note_delete_noop id={id} reason={err}");
                false
            }
        }
    }

    /// Flips the expand/collapse flag for one note id.
    ///
    /// The side-map is independent of the note collection; flipping an
    /// unknown id only affects later lookups of that same id.
    pub fn toggle_expand(&mut self, id: NoteId) {
        let entry = self.expanded.entry(id).or_insert(false);
        *entry = !*entry;
    }

    /// Whether the given note row is expanded. Defaults to collapsed.
    pub fn is_expanded(&self, id: NoteId) -> bool {
        self.expanded.get(&id).copied().unwrap_or(false)
    }

    /// Current form mode.
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// All notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        self.repo.list()
    }
}
