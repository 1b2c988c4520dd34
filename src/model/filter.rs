use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::task::{Priority, TaskStatus, TaskType};

/// The set of filters the UI applies to the task list before calendar
/// derivation.
///
/// Every field defaults to "no restriction": empty Vecs and `None`s pass
/// everything, so `FilterSet::default()` is the identity filter. Predicates
/// are conjunctive and independent, which keeps filtering order-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSet {
    /// Statuses to include (empty = all)
    #[serde(default)]
    pub status: Vec<TaskStatus>,
    /// Task types to include (empty = all)
    #[serde(default)]
    pub task_type: Vec<TaskType>,
    /// Priorities to include (empty = all)
    #[serde(default)]
    pub priority: Vec<Priority>,
    /// Restrict to one parent project/topic
    #[serde(default)]
    pub project_id: Option<String>,
    /// Case-insensitive substring match against name or description
    #[serde(default)]
    pub search: Option<String>,
    /// Inclusive lower bound on the task's effective date (due, else created)
    #[serde(default)]
    pub due_from: Option<NaiveDate>,
    /// Inclusive upper bound on the task's effective date
    #[serde(default)]
    pub due_until: Option<NaiveDate>,
    /// Keep only tasks due strictly before `now` and not yet done
    #[serde(default)]
    pub overdue: bool,
}

impl FilterSet {
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status.push(status);
        self
    }

    pub fn with_type(mut self, task_type: TaskType) -> Self {
        self.task_type.push(task_type);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority.push(priority);
        self
    }

    pub fn with_project(mut self, project_id: &str) -> Self {
        self.project_id = Some(project_id.to_string());
        self
    }

    pub fn with_search(mut self, query: &str) -> Self {
        self.search = Some(query.to_string());
        self
    }

    pub fn with_due_between(mut self, from: Option<NaiveDate>, until: Option<NaiveDate>) -> Self {
        self.due_from = from;
        self.due_until = until;
        self
    }

    pub fn overdue_only(mut self) -> Self {
        self.overdue = true;
        self
    }

    /// True when no predicate restricts anything
    pub fn is_empty(&self) -> bool {
        self == &FilterSet::default()
    }
}
