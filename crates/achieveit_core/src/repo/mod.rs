//! Repository layer abstractions and in-memory implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts per collection.
//! - Keep collection bookkeeping out of screen/orchestration code.
//!
//! # Invariants
//! - All state is transient and process-local; there is no persistence
//!   backend anywhere in this layer.
//! - Listing preserves insertion order; reads never mutate.
//! - Repository APIs return semantic errors (`NotFound`) so screens can
//!   decide the no-op policy themselves.

use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub mod note_repo;
pub mod schedule_repo;
pub mod task_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error shared by the three collections.
#[derive(Debug, PartialEq, Eq)]
pub enum RepoError {
    /// No record with the given id exists in the collection.
    NotFound(Uuid),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "record not found: {id}"),
        }
    }
}

impl Error for RepoError {}
