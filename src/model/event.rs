use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::task::{Priority, TaskStatus, TaskType};

/// Color category assigned to a calendar event, keyed off the task type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorCategory {
    Skyblue,
    Lavender,
    Mint,
    Neutral,
}

impl ColorCategory {
    /// Total mapping from task type; unknown types get the neutral category
    pub fn for_task_type(task_type: TaskType) -> ColorCategory {
        match task_type {
            TaskType::Project => ColorCategory::Skyblue,
            TaskType::Study => ColorCategory::Lavender,
            TaskType::Event => ColorCategory::Mint,
            TaskType::Unknown => ColorCategory::Neutral,
        }
    }

    /// CSS class the rendering layer attaches to event blocks
    pub fn css_class(self) -> &'static str {
        match self {
            ColorCategory::Skyblue => "event-skyblue",
            ColorCategory::Lavender => "event-lavender",
            ColorCategory::Mint => "event-mint",
            ColorCategory::Neutral => "event-neutral",
        }
    }
}

/// A task rendered onto the calendar grid.
///
/// Derived and ephemeral: recomputed from the task list on every pipeline
/// pass, never persisted. The normalizer guarantees `end >= start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Source task id
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub all_day: bool,
    pub color: ColorCategory,
    // Passthrough fields for badge rendering
    pub status: TaskStatus,
    pub priority: Priority,
    pub task_type: TaskType,
}

impl CalendarEvent {
    /// A spanning event occupies more than one day bucket: either it is
    /// all-day, or its bounds fall on different calendar days.
    pub fn is_multi_day(&self) -> bool {
        self.all_day || self.start.date() != self.end.date()
    }
}
