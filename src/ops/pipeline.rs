use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use tracing::debug;

use crate::model::config::CalendarConfig;
use crate::model::event::CalendarEvent;
use crate::model::filter::FilterSet;
use crate::model::task::Task;
use crate::model::view::{DateRange, ViewMode, ViewState};
use crate::ops::filter::filter_tasks;
use crate::ops::layout::{EventBlock, layout_day};
use crate::ops::navigate::title;
use crate::ops::normalize::normalize;
use crate::ops::partition::{assign_to_days, compute_range, flat_agenda};

/// How the visible events are grouped for rendering
#[derive(Debug, Clone, PartialEq)]
pub enum DayGrouping {
    /// One entry per visible day, in chronological order. Week/day entries
    /// carry resolved lanes; month/agenda/list entries are capped lists and
    /// always use lane 0 of 1.
    Bucketed(IndexMap<NaiveDate, Vec<EventBlock>>),
    /// The collapsed overdue-agenda ordering: no day grouping, start
    /// ascending
    Flat(Vec<CalendarEvent>),
}

/// Everything the rendering layer needs for one calendar frame
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarSnapshot {
    pub mode: ViewMode,
    pub range: DateRange,
    pub title: String,
    pub grouping: DayGrouping,
}

/// Run the full derivation pipeline: filter → normalize → partition →
/// lane layout.
///
/// Pure function of its arguments; the UI recomputes it on every task,
/// filter, or view change. `now` feeds both the overdue predicate and the
/// dateless-task fallback, captured once so a single frame is internally
/// consistent.
pub fn build_snapshot(
    tasks: &[Task],
    filters: &FilterSet,
    view: &ViewState,
    config: &CalendarConfig,
    now: NaiveDateTime,
) -> CalendarSnapshot {
    let surviving = filter_tasks(tasks, filters, now);
    let events = normalize(&surviving, now);
    let range = compute_range(view.mode, view.anchor, config, filters.overdue);

    let grouping = if view.mode == ViewMode::Agenda && filters.overdue {
        DayGrouping::Flat(flat_agenda(&events))
    } else {
        let needs_lanes = matches!(view.mode, ViewMode::Week | ViewMode::Day);
        let buckets = assign_to_days(&events, &range)
            .into_iter()
            .map(|(day, bucket)| {
                let blocks = if needs_lanes {
                    layout_day(&bucket)
                } else {
                    bucket
                        .into_iter()
                        .map(|event| EventBlock { event, lane: 0, lanes: 1 })
                        .collect()
                };
                (day, blocks)
            })
            .collect();
        DayGrouping::Bucketed(buckets)
    };

    debug!(
        mode = ?view.mode,
        anchor = %view.anchor,
        tasks = tasks.len(),
        visible = events.len(),
        "built calendar snapshot"
    );

    CalendarSnapshot {
        mode: view.mode,
        range,
        title: title(view.mode, view.anchor, config),
        grouping,
    }
}
