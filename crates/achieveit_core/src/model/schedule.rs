//! Schedule domain model and calendar-marker payload.
//!
//! # Responsibility
//! - Define the schedule record keyed by a calendar date string.
//! - Define the date-marker payload consumed by the calendar widget.
//!
//! # Invariants
//! - `id` is stable and never reused for another schedule.
//! - Multiple schedules may share one `due_date`; the marker view folds
//!   them into a single entry per distinct date.
//! - Marker keys are `YYYY-MM-DD` strings; anything else cannot be
//!   highlighted and is skipped by the view.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a schedule record.
pub type ScheduleId = Uuid;

/// Dot color used for every highlighted calendar day.
const MARKER_DOT_COLOR: &str = "#606F49";

static DATE_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date key regex"));

/// One schedule record bound to a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Stable id used for delete targeting.
    pub id: ScheduleId,
    /// User-entered schedule title.
    pub title: String,
    /// Calendar key in `YYYY-MM-DD` form, or empty when the schedule was
    /// added with no day selected.
    pub due_date: String,
}

impl Schedule {
    /// Creates a schedule with a generated stable id.
    pub fn new(title: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            due_date: due_date.into(),
        }
    }
}

/// Highlight payload for one calendar day, serialized in the camelCase
/// shape the calendar widget consumes (`{ "marked": true, "dotColor": .. }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateMarker {
    /// Whether the day carries at least one schedule.
    pub marked: bool,
    /// Dot color rendered under the day number.
    pub dot_color: String,
}

impl DateMarker {
    /// Standard marker for a day that has schedules.
    pub fn dot() -> Self {
        Self {
            marked: true,
            dot_color: MARKER_DOT_COLOR.to_string(),
        }
    }
}

/// Returns whether `value` has the `YYYY-MM-DD` shape of a calendar key.
pub fn is_date_key(value: &str) -> bool {
    DATE_KEY_RE.is_match(value)
}
