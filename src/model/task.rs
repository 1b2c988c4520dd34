use serde::{Deserialize, Serialize};

/// Workflow state of a task, as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Short human-readable label for badges
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Todo => "To do",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Done => "Done",
        }
    }

    /// CSS class the rendering layer attaches to status badges
    pub fn badge_class(self) -> &'static str {
        match self {
            TaskStatus::Todo => "badge-todo",
            TaskStatus::InProgress => "badge-in-progress",
            TaskStatus::Done => "badge-done",
        }
    }
}

/// Category of a task. Unknown wire values deserialize to `Unknown`
/// rather than failing, so a backend enum addition never breaks rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskType {
    Project,
    Study,
    Event,
    #[serde(other)]
    Unknown,
}

impl TaskType {
    pub fn label(self) -> &'static str {
        match self {
            TaskType::Project => "Project",
            TaskType::Study => "Study",
            TaskType::Event => "Event",
            TaskType::Unknown => "Task",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            TaskType::Project => "badge-project",
            TaskType::Study => "badge-study",
            TaskType::Event => "badge-event",
            TaskType::Unknown => "badge-neutral",
        }
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Priority::Low => "badge-priority-low",
            Priority::Medium => "badge-priority-medium",
            Priority::High => "badge-priority-high",
        }
    }
}

/// A task record as delivered by the backend task service.
///
/// The core only ever reads tasks; all mutation happens through the external
/// task-management collaborator. Timestamps are kept as the raw ISO-8601
/// strings from the wire because all-day detection depends on whether the
/// upstream value carried a time-of-day component, which is lost after
/// parsing (midnight and "unspecified" parse identically).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TaskStatus,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub priority: Priority,
    /// Optional start timestamp, ISO-8601
    #[serde(default, rename = "startDate")]
    pub start_date: Option<String>,
    /// Optional due timestamp, ISO-8601
    #[serde(default, rename = "dueDate")]
    pub due_date: Option<String>,
    /// Explicit all-day flag. When absent, all-day is inferred from the
    /// raw due/start string being date-only.
    #[serde(default, rename = "allDay")]
    pub all_day: Option<bool>,
    /// Creation timestamp, ISO-8601
    pub created_at: String,
    /// Parent project/topic reference
    #[serde(default, rename = "projectId")]
    pub project_id: Option<String>,
}

impl Task {
    /// Create a minimal task with no dates, for callers that build tasks
    /// programmatically (primarily tests)
    pub fn new(id: &str, name: &str, task_type: TaskType) -> Self {
        Task {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            status: TaskStatus::Todo,
            task_type,
            priority: Priority::Medium,
            start_date: None,
            due_date: None,
            all_day: None,
            created_at: String::new(),
            project_id: None,
        }
    }
}
