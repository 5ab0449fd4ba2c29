//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Tenant store configuration.
    #[serde(default)]
    pub store: StoreConfig,
}

/// Tenant store configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Default page size for ledger queries.
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
    /// Hard cap on the page size a caller may request.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,
}

fn default_page_size() -> u32 {
    20
}

fn default_max_page_size() -> u32 {
    100
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, in increasing precedence: `config/default`,
    /// `config/{RUN_MODE}`, then environment variables with the `TABUNG`
    /// prefix (`TABUNG_STORE__MAX_PAGE_SIZE=50`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or deserialized.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TABUNG").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
