use serde::{Deserialize, Serialize};

/// Error type for configuration parsing
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid calendar config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Tunable calendar parameters.
///
/// The host application owns the config file; the core only parses the
/// contents. The week boundary is a fixed Sunday-start convention and is
/// deliberately not configurable here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// How many days the agenda view looks ahead from the anchor date
    #[serde(default = "default_agenda_window_days")]
    pub agenda_window_days: u32,
    /// How many events a month/agenda day cell shows before collapsing the
    /// remainder into a "+N more" affordance
    #[serde(default = "default_day_cell_cap")]
    pub day_cell_cap: usize,
}

fn default_agenda_window_days() -> u32 {
    30
}

fn default_day_cell_cap() -> usize {
    3
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            agenda_window_days: default_agenda_window_days(),
            day_cell_cap: default_day_cell_cap(),
        }
    }
}

impl CalendarConfig {
    /// Parse a config from TOML text (the host reads the file)
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }
}
