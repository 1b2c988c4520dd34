use chrono::{Datelike, Days, Months, NaiveDate};

use crate::model::config::CalendarConfig;
use crate::model::view::ViewMode;

/// Advance the anchor date by one step of the given view mode.
///
/// Month steps use chrono's month arithmetic, which clamps an overflowing
/// day-of-month to the last day of the target month (Jan 31 → Feb 28/29).
/// Week steps are 7 days, day/list steps 1 day, agenda steps the configured
/// window size.
pub fn next(mode: ViewMode, date: NaiveDate, config: &CalendarConfig) -> NaiveDate {
    match mode {
        ViewMode::Month => date.checked_add_months(Months::new(1)).unwrap_or(date),
        ViewMode::Week => date.checked_add_days(Days::new(7)).unwrap_or(date),
        ViewMode::Day | ViewMode::List => date.checked_add_days(Days::new(1)).unwrap_or(date),
        ViewMode::Agenda => date
            .checked_add_days(Days::new(u64::from(config.agenda_window_days.max(1))))
            .unwrap_or(date),
    }
}

/// Step the anchor date backward; mirror of [`next`]
pub fn previous(mode: ViewMode, date: NaiveDate, config: &CalendarConfig) -> NaiveDate {
    match mode {
        ViewMode::Month => date.checked_sub_months(Months::new(1)).unwrap_or(date),
        ViewMode::Week => date.checked_sub_days(Days::new(7)).unwrap_or(date),
        ViewMode::Day | ViewMode::List => date.checked_sub_days(Days::new(1)).unwrap_or(date),
        ViewMode::Agenda => date
            .checked_sub_days(Days::new(u64::from(config.agenda_window_days.max(1))))
            .unwrap_or(date),
    }
}

/// Human-readable heading for the visible range. Pure function of its
/// arguments; English month names (localization is the host's concern).
pub fn title(mode: ViewMode, date: NaiveDate, config: &CalendarConfig) -> String {
    match mode {
        ViewMode::Month => date.format("%B %Y").to_string(),
        ViewMode::Day | ViewMode::List => date.format("%B %-d, %Y").to_string(),
        ViewMode::Week => {
            let start = crate::ops::partition::week_start(date);
            let end = start.checked_add_days(Days::new(6)).unwrap_or(start);
            span_title(start, end)
        }
        ViewMode::Agenda => {
            let days = u64::from(config.agenda_window_days.max(1));
            let end = date
                .checked_add_days(Days::new(days.saturating_sub(1)))
                .unwrap_or(date);
            span_title(date, end)
        }
    }
}

fn span_title(start: NaiveDate, end: NaiveDate) -> String {
    if start.year() == end.year() {
        format!(
            "{} – {}",
            start.format("%b %-d"),
            end.format("%b %-d, %Y")
        )
    } else {
        format!(
            "{} – {}",
            start.format("%b %-d, %Y"),
            end.format("%b %-d, %Y")
        )
    }
}
