//! Domain model for the three AchieveIt screens.
//!
//! # Responsibility
//! - Define the canonical record shapes for tasks, notes and schedules.
//! - Keep wire naming aligned with what the UI shell renders.
//!
//! # Invariants
//! - Every record carries a stable UUID identifier, unique per collection.
//! - Records never embed derived view state (filters, expansion, markers).

pub mod note;
pub mod schedule;
pub mod task;
