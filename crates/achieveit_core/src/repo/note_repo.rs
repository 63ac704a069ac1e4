//! Note repository contract and in-memory implementation.
//!
//! # Invariants
//! - `list` returns notes in insertion order.
//! - `replace` overwrites title and text wholesale for one id.

use crate::model::note::{Note, NoteId};
use crate::repo::{RepoError, RepoResult};

/// Repository interface for note CRUD operations.
pub trait NoteRepository {
    /// Appends one note and returns its stable id.
    fn add(&mut self, note: Note) -> NoteId;
    /// Gets one note by id.
    fn get(&self, id: NoteId) -> Option<&Note>;
    /// All notes in insertion order.
    fn list(&self) -> &[Note];
    /// Overwrites title and text for the given id.
    fn replace(&mut self, id: NoteId, title: &str, text: &str) -> RepoResult<()>;
    /// Removes one note and returns it.
    fn remove(&mut self, id: NoteId) -> RepoResult<Note>;
}

/// Vec-backed note repository holding all note records for one screen.
#[derive(Debug, Default)]
pub struct MemNoteRepository {
    notes: Vec<Note>,
}

impl MemNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NoteRepository for MemNoteRepository {
    fn add(&mut self, note: Note) -> NoteId {
        let id = note.id;
        self.notes.push(note);
        id
    }

    fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    fn list(&self) -> &[Note] {
        &self.notes
    }

    fn replace(&mut self, id: NoteId, title: &str, text: &str) -> RepoResult<()> {
        let note = self
            .notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or(RepoError::NotFound(id))?;
        note.title = title.to_string();
        note.text = text.to_string();
        Ok(())
    }

    fn remove(&mut self, id: NoteId) -> RepoResult<Note> {
        let index = self
            .notes
            .iter()
            .position(|note| note.id == id)
            .ok_or(RepoError::NotFound(id))?;
        Ok(self.notes.remove(index))
    }
}
