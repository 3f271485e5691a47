use nasa_images_fetch::{NormalizeMode, QueryOptions, DEFAULT_SEARCH_URL};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::time::Duration;

const APP_NAME: &str = "avail-search";

pub const DEFAULT_GRID_COLUMNS: usize = 3;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub normalize_mode: NormalizeMode,
    /// Leave empty parameters out of the query string instead of sending `name=`.
    pub omit_empty_params: bool,
    pub grid_columns: usize,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_SEARCH_URL.to_string(),
            normalize_mode: NormalizeMode::Records,
            omit_empty_params: false,
            grid_columns: DEFAULT_GRID_COLUMNS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load the configuration from the default location
    pub fn load() -> Result<Self, Box<dyn Error>> {
        Ok(confy::load::<Self>(APP_NAME, None)?.sanitized())
    }

    pub fn query_options(&self) -> QueryOptions {
        QueryOptions {
            omit_empty: self.omit_empty_params,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Replaces values the UI or HTTP client cannot work with.
    pub fn sanitized(mut self) -> Self {
        if self.grid_columns == 0 {
            self.grid_columns = DEFAULT_GRID_COLUMNS;
        }
        if self.request_timeout_secs == 0 {
            self.request_timeout_secs = DEFAULT_REQUEST_TIMEOUT_SECS;
        }
        if self.api_base_url.trim().is_empty() {
            self.api_base_url = DEFAULT_SEARCH_URL.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "https://images-api.nasa.gov/search");
        assert_eq!(config.normalize_mode, NormalizeMode::Records);
        assert!(!config.query_options().omit_empty);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_config_sanitized() {
        let config = Config {
            api_base_url: "  ".into(),
            grid_columns: 0,
            request_timeout_secs: 0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_partial_file_uses_defaults() {
        let config: Config = toml::from_str("omit_empty_params = true\nnormalize_mode = \"Links\"\n")
            .unwrap();
        assert!(config.omit_empty_params);
        assert_eq!(config.normalize_mode, NormalizeMode::Links);
        assert_eq!(config.grid_columns, DEFAULT_GRID_COLUMNS);
    }
}
