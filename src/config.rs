use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "https://api.spacexdata.com/v4";
pub const DEFAULT_STORAGE_KEY: &str = "auth-storage";

const API_URL_VAR: &str = "SPACEX_API_URL";
const AUTH_DELAY_VAR: &str = "SPACEX_AUTH_DELAY_MS";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Base URL of the SpaceX REST API, without trailing slash
    pub api_url: String,
    pub rockets_per_page: usize,
    pub launches_per_page: usize,
    /// Artificial delay applied to mock login & registration
    pub auth_delay: Duration,
    /// Storage key holding the persisted session subset
    pub storage_key: String,
    /// Number of related launches listed on a rocket's detail page
    pub related_launch_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            rockets_per_page: 6,
            launches_per_page: 8,
            auth_delay: Duration::from_millis(800),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            related_launch_limit: 10,
        }
    }
}

impl Config {
    /// Build configuration from process environment variables.
    ///
    /// Every variable is optional and falls back to the default value.
    ///
    /// # Returns
    /// - `Ok(Config)` - Defaults overridden by any variables present
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable is present but cannot be parsed
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(api_url) = lookup(API_URL_VAR) {
            let api_url = api_url.trim().trim_end_matches('/');
            if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
                return Err(ConfigError::InvalidEnvValue {
                    var: API_URL_VAR.to_string(),
                    reason: "expected an http:// or https:// URL".to_string(),
                });
            }
            config.api_url = api_url.to_string();
        }

        if let Some(delay) = lookup(AUTH_DELAY_VAR) {
            let millis = delay
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: AUTH_DELAY_VAR.to_string(),
                    reason: e.to_string(),
                })?;
            config.auth_delay = Duration::from_millis(millis);
        }

        Ok(config)
    }
}
