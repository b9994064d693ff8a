use log::LevelFilter;
use shared::PickerConfig;
use std::str::FromStr;

pub const DEFAULT_COSTS_ENDPOINT: &str = "http://localhost:3000/api/costs";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Settings baked in at build time (`COSTS_ENDPOINT=... trunk build`)
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub costs_endpoint: String,
    pub log_level: LevelFilter,
    pub picker: PickerConfig,
}

impl AppConfig {
    pub fn load() -> Self {
        Self::from_values(option_env!("COSTS_ENDPOINT"), option_env!("COST_TRACKER_LOG"))
    }

    /// Blank or unparseable values fall back to the defaults.
    pub fn from_values(costs_endpoint: Option<&str>, log_level: Option<&str>) -> Self {
        let costs_endpoint = costs_endpoint
            .map(str::trim)
            .filter(|endpoint| !endpoint.is_empty())
            .unwrap_or(DEFAULT_COSTS_ENDPOINT)
            .to_string();

        let log_level = log_level
            .and_then(|level| LevelFilter::from_str(level.trim()).ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            costs_endpoint,
            log_level,
            picker: PickerConfig::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}
