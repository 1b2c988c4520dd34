pub mod filter;
pub mod layout;
pub mod navigate;
pub mod normalize;
pub mod partition;
pub mod pipeline;

pub use filter::filter_tasks;
pub use layout::{EventBlock, layout_day};
pub use navigate::{next, previous, title};
pub use normalize::{normalize, normalize_task};
pub use partition::{assign_to_days, compute_range, day_cell_overflow, flat_agenda};
pub use pipeline::{CalendarSnapshot, DayGrouping, build_snapshot};
