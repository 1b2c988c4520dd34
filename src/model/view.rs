use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Calendar view mode. `List` is the single-day list view; `Agenda` is the
/// rolling forward-looking window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Month,
    Week,
    Day,
    Agenda,
    List,
}

/// The view state the UI layer feeds into every pipeline pass: which mode is
/// active and which date anchors it. The visible range is always derived
/// from these (plus config), never stored, so the two cannot drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub mode: ViewMode,
    pub anchor: NaiveDate,
}

impl ViewState {
    pub fn new(mode: ViewMode, anchor: NaiveDate) -> Self {
        ViewState { mode, anchor }
    }
}

/// Half-open date range `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }

    /// Single-day range `[day, day + 1)`
    pub fn single_day(day: NaiveDate) -> Self {
        DateRange {
            start: day,
            end: day.checked_add_days(Days::new(1)).unwrap_or(day),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Iterate the dates of the range in chronological order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let mut current = self.start;
        let end = self.end;
        std::iter::from_fn(move || {
            if current >= end {
                return None;
            }
            let out = current;
            current = current.checked_add_days(Days::new(1))?;
            Some(out)
        })
    }

    pub fn len_days(&self) -> u64 {
        (self.end - self.start).num_days().max(0) as u64
    }
}
