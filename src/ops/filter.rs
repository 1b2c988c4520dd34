use chrono::NaiveDateTime;
use regex::Regex;
use tracing::trace;

use crate::model::filter::FilterSet;
use crate::model::task::{Task, TaskStatus};
use crate::parse::datetime::parse_opt_stamp;

/// Apply a filter set to a task list, keeping survivors in input order.
///
/// Each predicate is a pure conjunctive test over independent fields, so the
/// surviving set does not depend on evaluation order. `now` is captured once
/// by the caller and threaded through every overdue test, which keeps one
/// filter pass internally consistent even if it straddles a clock tick.
pub fn filter_tasks<'a>(tasks: &'a [Task], filters: &FilterSet, now: NaiveDateTime) -> Vec<&'a Task> {
    // Compile the search pattern once per pass. An empty query means no
    // restriction, same as an absent one.
    let search = filters
        .search
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .and_then(compile_search);

    tasks
        .iter()
        .filter(|task| matches(task, filters, search.as_ref(), now))
        .collect()
}

/// Case-insensitive literal substring matcher
fn compile_search(query: &str) -> Option<Regex> {
    // regex::escape guarantees a valid pattern, so this only fails on
    // pathological query sizes; treat that as "no restriction".
    Regex::new(&format!("(?i){}", regex::escape(query))).ok()
}

fn matches(task: &Task, filters: &FilterSet, search: Option<&Regex>, now: NaiveDateTime) -> bool {
    let ok = matches_status(task, filters)
        && matches_type(task, filters)
        && matches_priority(task, filters)
        && matches_project(task, filters)
        && matches_search(task, search)
        && matches_date_range(task, filters)
        && matches_overdue(task, filters, now);

    trace!(task = %task.id, ok, "filter evaluation");
    ok
}

fn matches_status(task: &Task, filters: &FilterSet) -> bool {
    filters.status.is_empty() || filters.status.contains(&task.status)
}

fn matches_type(task: &Task, filters: &FilterSet) -> bool {
    filters.task_type.is_empty() || filters.task_type.contains(&task.task_type)
}

fn matches_priority(task: &Task, filters: &FilterSet) -> bool {
    filters.priority.is_empty() || filters.priority.contains(&task.priority)
}

fn matches_project(task: &Task, filters: &FilterSet) -> bool {
    match &filters.project_id {
        None => true,
        Some(wanted) => task.project_id.as_deref() == Some(wanted.as_str()),
    }
}

fn matches_search(task: &Task, search: Option<&Regex>) -> bool {
    let Some(re) = search else {
        return true;
    };
    re.is_match(&task.name)
        || task
            .description
            .as_deref()
            .is_some_and(|description| re.is_match(description))
}

/// Compare the task's effective date (due, else created) against the
/// inclusive range bounds. A task whose effective date cannot be parsed
/// passes: an unreadable date is "absent", and absent fields never exclude.
fn matches_date_range(task: &Task, filters: &FilterSet) -> bool {
    if filters.due_from.is_none() && filters.due_until.is_none() {
        return true;
    }
    let effective = parse_opt_stamp(task.due_date.as_deref())
        .or_else(|| parse_opt_stamp(Some(task.created_at.as_str())));
    let Some(stamp) = effective else {
        return true;
    };
    let date = stamp.instant().date();

    if let Some(from) = filters.due_from {
        if date < from {
            return false;
        }
    }
    if let Some(until) = filters.due_until {
        if date > until {
            return false;
        }
    }
    true
}

/// Overdue: effective due instant strictly before `now`, and not done.
/// A task with no parseable due date is never overdue.
fn matches_overdue(task: &Task, filters: &FilterSet, now: NaiveDateTime) -> bool {
    if !filters.overdue {
        return true;
    }
    if task.status == TaskStatus::Done {
        return false;
    }
    parse_opt_stamp(task.due_date.as_deref()).is_some_and(|stamp| stamp.instant() < now)
}
