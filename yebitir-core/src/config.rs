//! Application configuration from environment variables.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Default seed for the mock recipe generator.
pub const DEFAULT_MOCK_SEED: u64 = 42;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the persisted recipe list.
    pub data_dir: PathBuf,
    /// Browse generated sample recipes while the store is empty.
    pub seed_mock: bool,
    /// Seed for the sample recipe generator.
    pub mock_seed: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: Self::default_data_dir(),
            seed_mock: true,
            mock_seed: DEFAULT_MOCK_SEED,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `YEBITIR_DATA_DIR`: Data directory (default: "~/.yebitir")
    /// - `YEBITIR_SEED_MOCK`: Show mock recipes while empty (default: true)
    /// - `YEBITIR_MOCK_SEED`: Mock generator seed (default: 42)
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = env::var("YEBITIR_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_data_dir());

        let seed_mock = env::var("YEBITIR_SEED_MOCK")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(true);

        let mock_seed = match env::var("YEBITIR_MOCK_SEED") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                var: "YEBITIR_MOCK_SEED".to_string(),
                value,
            })?,
            Err(_) => DEFAULT_MOCK_SEED,
        };

        Ok(Self {
            data_dir,
            seed_mock,
            mock_seed,
        })
    }

    /// Get the default data directory: ~/.yebitir
    pub fn default_data_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".yebitir"))
            .unwrap_or_else(|| PathBuf::from("data"))
    }

    /// Seed to pass to [`crate::BrowseView::load`].
    pub fn mock_seed(&self) -> Option<u64> {
        self.seed_mock.then_some(self.mock_seed)
    }
}
