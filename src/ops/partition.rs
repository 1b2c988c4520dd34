use chrono::{Datelike, Days, Months, NaiveDate};
use indexmap::IndexMap;

use crate::model::config::CalendarConfig;
use crate::model::event::CalendarEvent;
use crate::model::view::{DateRange, ViewMode};

/// Sunday on or before the given date (fixed week-start convention)
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let back = date.weekday().num_days_from_sunday() as u64;
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

/// Compute the visible date range for a view mode and anchor date.
///
/// Month ranges are padded to whole Sunday-started weeks so the grid always
/// renders complete rows. The agenda range is the configured forward window,
/// except that an active overdue filter collapses it to the anchor day —
/// legacy behavior the UI depends on, kept visible here as an explicit
/// parameter rather than read from filter state (see DESIGN.md).
pub fn compute_range(
    mode: ViewMode,
    anchor: NaiveDate,
    config: &CalendarConfig,
    overdue_active: bool,
) -> DateRange {
    match mode {
        ViewMode::Month => month_grid_range(anchor),
        ViewMode::Week => {
            let start = week_start(anchor);
            DateRange::new(start, start.checked_add_days(Days::new(7)).unwrap_or(start))
        }
        ViewMode::Day | ViewMode::List => DateRange::single_day(anchor),
        ViewMode::Agenda => {
            if overdue_active {
                DateRange::single_day(anchor)
            } else {
                let days = u64::from(config.agenda_window_days.max(1));
                DateRange::new(
                    anchor,
                    anchor.checked_add_days(Days::new(days)).unwrap_or(anchor),
                )
            }
        }
    }
}

/// Full calendar month containing `anchor`, extended outward to complete
/// Sunday-started weeks
fn month_grid_range(anchor: NaiveDate) -> DateRange {
    let first = anchor.with_day(1).unwrap_or(anchor);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.checked_sub_days(Days::new(1)))
        .unwrap_or(first);

    let grid_start = week_start(first);
    let forward = 6 - last.weekday().num_days_from_sunday() as u64;
    let grid_end = last
        .checked_add_days(Days::new(forward + 1))
        .unwrap_or(last);
    DateRange::new(grid_start, grid_end)
}

/// Bucket events by day across the visible range.
///
/// Every date of the range is present as a key, in chronological order, so
/// grid views get a cell per day even when it is empty. A single-day event
/// lands on its start day; a spanning (multi-day or all-day) event lands on
/// every in-range day between its start and end days inclusive. Within a
/// bucket, spanning events sort before single-day events, then by start
/// ascending; the sort is stable so equal keys keep input order.
pub fn assign_to_days(
    events: &[CalendarEvent],
    range: &DateRange,
) -> IndexMap<NaiveDate, Vec<CalendarEvent>> {
    let mut buckets: IndexMap<NaiveDate, Vec<CalendarEvent>> =
        range.days().map(|day| (day, Vec::new())).collect();

    for event in events {
        // Should not survive the normalizer; skip rather than misfile
        if event.end < event.start {
            continue;
        }

        if event.is_multi_day() {
            let mut day = event.start.date();
            let last = event.end.date();
            while day <= last {
                if let Some(bucket) = buckets.get_mut(&day) {
                    bucket.push(event.clone());
                }
                let Some(next) = day.checked_add_days(Days::new(1)) else {
                    break;
                };
                day = next;
            }
        } else if let Some(bucket) = buckets.get_mut(&event.start.date()) {
            bucket.push(event.clone());
        }
    }

    for bucket in buckets.values_mut() {
        bucket.sort_by_key(|event| (!event.is_multi_day(), event.start));
    }

    buckets
}

/// Flat ordering used when the overdue filter collapses the agenda view:
/// no day grouping, start ascending, stable
pub fn flat_agenda(events: &[CalendarEvent]) -> Vec<CalendarEvent> {
    let mut out = events.to_vec();
    out.sort_by_key(|event| event.start);
    out
}

/// How many events a capped day cell hides ("+N more")
pub fn day_cell_overflow(event_count: usize, cap: usize) -> usize {
    event_count.saturating_sub(cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::event::ColorCategory;
    use crate::model::task::{Priority, TaskStatus, TaskType};
    use chrono::NaiveDateTime;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    fn dt(day: u32, h: u32, m: u32) -> NaiveDateTime {
        d(day).and_hms_opt(h, m, 0).unwrap()
    }

    fn event(id: &str, start: NaiveDateTime, end: NaiveDateTime, all_day: bool) -> CalendarEvent {
        CalendarEvent {
            id: id.to_string(),
            title: id.to_string(),
            start,
            end,
            all_day,
            color: ColorCategory::Neutral,
            status: TaskStatus::Todo,
            priority: Priority::Medium,
            task_type: TaskType::Unknown,
        }
    }

    fn config() -> CalendarConfig {
        CalendarConfig::default()
    }

    #[test]
    fn test_week_start_is_sunday_on_or_before() {
        // 2025-03-10 is a Monday; 2025-03-09 a Sunday
        assert_eq!(week_start(d(10)), d(9));
        assert_eq!(week_start(d(9)), d(9));
        assert_eq!(week_start(d(15)), d(9));
    }

    #[test]
    fn test_month_range_pads_to_full_weeks() {
        // March 2025: the 1st is a Saturday, the 31st a Monday. The grid
        // runs Sun Feb 23 .. Sat Apr 5.
        let range = compute_range(ViewMode::Month, d(15), &config(), false);
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2025, 2, 23).unwrap());
        assert_eq!(range.end, NaiveDate::from_ymd_opt(2025, 4, 6).unwrap());
        assert_eq!(range.len_days() % 7, 0);
    }

    #[test]
    fn test_week_and_day_ranges() {
        let week = compute_range(ViewMode::Week, d(12), &config(), false);
        assert_eq!(week.start, d(9));
        assert_eq!(week.len_days(), 7);

        let day = compute_range(ViewMode::Day, d(12), &config(), false);
        assert_eq!(day, DateRange::single_day(d(12)));

        let list = compute_range(ViewMode::List, d(12), &config(), false);
        assert_eq!(list, DateRange::single_day(d(12)));
    }

    #[test]
    fn test_agenda_window_and_overdue_collapse() {
        let agenda = compute_range(ViewMode::Agenda, d(10), &config(), false);
        assert_eq!(agenda.len_days(), 30);
        assert_eq!(agenda.start, d(10));

        // Active overdue filter collapses the range to the anchor day
        let collapsed = compute_range(ViewMode::Agenda, d(10), &config(), true);
        assert_eq!(collapsed, DateRange::single_day(d(10)));
    }

    #[test]
    fn test_agenda_window_is_tunable() {
        let config = CalendarConfig {
            agenda_window_days: 7,
            ..CalendarConfig::default()
        };
        let agenda = compute_range(ViewMode::Agenda, d(10), &config, false);
        assert_eq!(agenda.len_days(), 7);
    }

    #[test]
    fn test_single_day_events_bucket_on_start_day() {
        let events = vec![
            event("a", dt(10, 9, 0), dt(10, 10, 0), false),
            event("b", dt(11, 9, 0), dt(11, 10, 0), false),
        ];
        let range = DateRange::new(d(9), d(16));
        let buckets = assign_to_days(&events, &range);

        assert_eq!(buckets.len(), 7);
        assert_eq!(buckets[&d(10)].len(), 1);
        assert_eq!(buckets[&d(10)][0].id, "a");
        assert_eq!(buckets[&d(11)][0].id, "b");
        assert!(buckets[&d(9)].is_empty());
    }

    #[test]
    fn test_spanning_event_lands_on_each_day_inclusive() {
        let events = vec![event("span", dt(10, 22, 0), dt(12, 8, 0), false)];
        let range = DateRange::new(d(9), d(16));
        let buckets = assign_to_days(&events, &range);

        for day in [d(10), d(11), d(12)] {
            assert_eq!(buckets[&day].len(), 1, "missing on {day}");
        }
        assert!(buckets[&d(13)].is_empty());
    }

    #[test]
    fn test_spanning_event_clipped_to_range() {
        let events = vec![event("span", dt(8, 0, 0), dt(20, 0, 0), true)];
        let range = DateRange::new(d(9), d(12));
        let buckets = assign_to_days(&events, &range);
        assert!(buckets.values().all(|b| b.len() == 1));
    }

    #[test]
    fn test_bucket_order_spanning_first_then_start_time() {
        let events = vec![
            event("late", dt(10, 15, 0), dt(10, 16, 0), false),
            event("early", dt(10, 8, 0), dt(10, 9, 0), false),
            event("allday", dt(10, 0, 0), dt(10, 0, 0), true),
        ];
        let range = DateRange::single_day(d(10));
        let buckets = assign_to_days(&events, &range);
        let ids: Vec<_> = buckets[&d(10)].iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["allday", "early", "late"]);
    }

    #[test]
    fn test_keys_are_chronological() {
        let range = DateRange::new(d(9), d(13));
        let buckets = assign_to_days(&[], &range);
        let keys: Vec<_> = buckets.keys().copied().collect();
        assert_eq!(keys, vec![d(9), d(10), d(11), d(12)]);
    }

    #[test]
    fn test_flat_agenda_sorts_by_start() {
        let events = vec![
            event("b", dt(10, 12, 0), dt(10, 13, 0), false),
            event("a", dt(10, 9, 0), dt(10, 10, 0), false),
        ];
        let flat = flat_agenda(&events);
        assert_eq!(flat[0].id, "a");
        assert_eq!(flat[1].id, "b");
    }

    #[test]
    fn test_day_cell_overflow() {
        assert_eq!(day_cell_overflow(5, 3), 2);
        assert_eq!(day_cell_overflow(3, 3), 0);
        assert_eq!(day_cell_overflow(0, 3), 0);
    }

    #[test]
    fn test_inverted_event_excluded_defensively() {
        let events = vec![event("bad", dt(12, 10, 0), dt(12, 9, 0), false)];
        let range = DateRange::single_day(d(12));
        let buckets = assign_to_days(&events, &range);
        assert!(buckets[&d(12)].is_empty());
    }
}
