use chrono::NaiveDateTime;

use crate::model::event::{CalendarEvent, ColorCategory};
use crate::model::task::Task;
use crate::parse::datetime::{Stamp, parse_opt_stamp};

/// Derive calendar events from task records.
///
/// Total and pure: every task yields exactly one event, with `now` supplied
/// by the caller so repeated passes over the same inputs are identical.
/// Callers that want dateless tasks off the calendar filter first; the
/// normalizer itself never drops records.
pub fn normalize(tasks: &[&Task], now: NaiveDateTime) -> Vec<CalendarEvent> {
    tasks.iter().map(|task| normalize_task(task, now)).collect()
}

/// Derive a single calendar event.
///
/// Bound resolution: `start = startDate ?? dueDate ?? now`,
/// `end = dueDate ?? start`, then `end` is clamped up to `start` so the
/// `end >= start` invariant always holds. A task with neither date becomes a
/// zero-duration marker at `now`.
pub fn normalize_task(task: &Task, now: NaiveDateTime) -> CalendarEvent {
    let start_stamp = parse_opt_stamp(task.start_date.as_deref());
    let due_stamp = parse_opt_stamp(task.due_date.as_deref());

    let start = start_stamp
        .or(due_stamp)
        .map(Stamp::instant)
        .unwrap_or(now);
    let end = due_stamp.map(Stamp::instant).unwrap_or(start).max(start);

    // Explicit flag from the backend wins; otherwise infer from the raw due
    // value (falling back to start) being a date-only string.
    let all_day = task.all_day.unwrap_or_else(|| {
        due_stamp
            .or(start_stamp)
            .is_some_and(Stamp::is_date_only)
    });

    CalendarEvent {
        id: task.id.clone(),
        title: task.name.clone(),
        start,
        end,
        all_day,
        color: ColorCategory::for_task_type(task.task_type),
        status: task.status,
        priority: task.priority,
        task_type: task.task_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::TaskType;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn dt(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_both_bounds_present() {
        // A timed PROJECT task: start 09:00, due 10:00
        let mut task = Task::new("t-1", "Kickoff", TaskType::Project);
        task.start_date = Some("2025-03-10T09:00:00".to_string());
        task.due_date = Some("2025-03-10T10:00:00".to_string());

        let event = normalize_task(&task, now());
        assert_eq!(event.start, dt(10, 9, 0));
        assert_eq!(event.end, dt(10, 10, 0));
        assert!(!event.all_day);
        assert_eq!(event.color, ColorCategory::Skyblue);
    }

    #[test]
    fn test_date_only_due_is_all_day() {
        // A date-only due value with no start
        let mut task = Task::new("t-2", "Hand in report", TaskType::Study);
        task.due_date = Some("2025-03-10".to_string());

        let event = normalize_task(&task, now());
        assert!(event.all_day);
        assert_eq!(event.start, dt(10, 0, 0));
        assert_eq!(event.end, dt(10, 0, 0));
    }

    #[test]
    fn test_due_only_backfills_start() {
        let mut task = Task::new("t-3", "Review", TaskType::Event);
        task.due_date = Some("2025-03-12T14:00:00".to_string());

        let event = normalize_task(&task, now());
        assert_eq!(event.start, event.end);
        assert_eq!(event.start, dt(12, 14, 0));
        assert!(!event.all_day);
    }

    #[test]
    fn test_start_only_backfills_end() {
        let mut task = Task::new("t-4", "Focus block", TaskType::Study);
        task.start_date = Some("2025-03-12T08:00:00".to_string());

        let event = normalize_task(&task, now());
        assert_eq!(event.end, event.start);
    }

    #[test]
    fn test_dateless_task_becomes_now_marker() {
        let task = Task::new("t-5", "Someday", TaskType::Unknown);
        let event = normalize_task(&task, now());
        assert_eq!(event.start, now());
        assert_eq!(event.end, now());
        assert_eq!(event.color, ColorCategory::Neutral);
    }

    #[test]
    fn test_due_before_start_clamps() {
        let mut task = Task::new("t-6", "Inverted", TaskType::Project);
        task.start_date = Some("2025-03-12T10:00:00".to_string());
        task.due_date = Some("2025-03-12T09:00:00".to_string());

        let event = normalize_task(&task, now());
        assert_eq!(event.start, dt(12, 10, 0));
        assert_eq!(event.end, dt(12, 10, 0));
    }

    #[test]
    fn test_malformed_due_treated_as_absent() {
        let mut task = Task::new("t-7", "Fuzzy", TaskType::Event);
        task.start_date = Some("2025-03-12T10:00:00".to_string());
        task.due_date = Some("whenever".to_string());

        let event = normalize_task(&task, now());
        assert_eq!(event.start, dt(12, 10, 0));
        assert_eq!(event.end, dt(12, 10, 0));
        assert!(!event.all_day);
    }

    #[test]
    fn test_explicit_all_day_flag_overrides_inference() {
        let mut task = Task::new("t-8", "Conference", TaskType::Event);
        task.due_date = Some("2025-03-12T09:00:00".to_string());
        task.all_day = Some(true);
        assert!(normalize_task(&task, now()).all_day);

        let mut task = Task::new("t-9", "Deadline", TaskType::Event);
        task.due_date = Some("2025-03-12".to_string());
        task.all_day = Some(false);
        assert!(!normalize_task(&task, now()).all_day);
    }

    #[test]
    fn test_normalize_is_total() {
        let tasks = vec![
            Task::new("a", "a", TaskType::Project),
            Task::new("b", "b", TaskType::Study),
        ];
        let refs: Vec<&Task> = tasks.iter().collect();
        let events = normalize(&refs, now());
        assert_eq!(events.len(), tasks.len());
        assert!(events.iter().all(|e| e.end >= e.start));
    }
}
