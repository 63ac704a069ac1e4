//! Task repository contract and in-memory implementation.
//!
//! # Invariants
//! - `list` returns tasks in insertion order; no sort is ever applied.
//! - Mutations target exactly one record by id and report `NotFound`
//!   instead of silently matching nothing.

use crate::model::task::{Task, TaskId};
use crate::repo::{RepoError, RepoResult};

/// Repository interface for task CRUD operations.
pub trait TaskRepository {
    /// Appends one task and returns its stable id.
    fn add(&mut self, task: Task) -> TaskId;
    /// Gets one task by id.
    fn get(&self, id: TaskId) -> Option<&Task>;
    /// All tasks in insertion order.
    fn list(&self) -> &[Task];
    /// Replaces text and due date, leaving id/category/completion intact.
    fn replace_content(&mut self, id: TaskId, text: &str, due_date: &str) -> RepoResult<()>;
    /// Flips the completion flag and returns the new value.
    fn toggle_completed(&mut self, id: TaskId) -> RepoResult<bool>;
    /// Removes one task and returns it.
    fn remove(&mut self, id: TaskId) -> RepoResult<Task>;
    /// Current collection size.
    fn len(&self) -> usize;
    /// Whether the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Vec-backed task repository holding all task state for one screen.
#[derive(Debug, Default)]
pub struct MemTaskRepository {
    tasks: Vec<Task>,
}

impl MemTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }
}

impl TaskRepository for MemTaskRepository {
    fn add(&mut self, task: Task) -> TaskId {
        let id = task.id;
        self.tasks.push(task);
        id
    }

    fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    fn list(&self) -> &[Task] {
        &self.tasks
    }

    fn replace_content(&mut self, id: TaskId, text: &str, due_date: &str) -> RepoResult<()> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(RepoError::NotFound(id))?;
        task.text = text.to_string();
        task.due_date = due_date.to_string();
        Ok(())
    }

    fn toggle_completed(&mut self, id: TaskId) -> RepoResult<bool> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(RepoError::NotFound(id))?;
        task.completed = !task.completed;
        Ok(task.completed)
    }

    fn remove(&mut self, id: TaskId) -> RepoResult<Task> {
        let index = self.position(id).ok_or(RepoError::NotFound(id))?;
        Ok(self.tasks.remove(index))
    }

    fn len(&self) -> usize {
        self.tasks.len()
    }
}
