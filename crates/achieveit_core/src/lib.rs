//! Core domain logic for AchieveIt.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod screen;
pub mod tabs;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteId};
pub use model::schedule::{DateMarker, Schedule, ScheduleId};
pub use model::task::{Category, Task, TaskId};
pub use repo::note_repo::{MemNoteRepository, NoteRepository};
pub use repo::schedule_repo::{MemScheduleRepository, ScheduleRepository};
pub use repo::task_repo::{MemTaskRepository, TaskRepository};
pub use repo::{RepoError, RepoResult};
pub use screen::note_screen::{NoteDraft, NoteScreen};
pub use screen::schedule_screen::ScheduleScreen;
pub use screen::task_screen::{TaskDraft, TaskScreen};
pub use screen::EditMode;
pub use tabs::{tab_by_name, TabDescriptor, TABS};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
