use crate::domain::numeric::expand_decimals;
use alloy_primitives::U256;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON history page to format.
    pub input_path: String,
    /// Output mode for the CLI.
    pub output: OutputMode,
    /// Base URL that transaction hashes are appended to for CSV links.
    pub explorer_url: String,
    /// Render timestamps as ages instead of absolute datetimes.
    pub relative_timestamps: bool,
    /// Protocol minimum collateral in whole USD, fed to the liquidation
    /// waterfall (stored 30-decimal scaled).
    pub min_collateral_usd: U256,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Table,
    Csv,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let input_path = env_map
            .get("INPUT_PATH")
            .cloned()
            .ok_or_else(|| ConfigError::MissingEnv("INPUT_PATH".to_string()))?;

        let output = match env_map.get("OUTPUT").map(|s| s.as_str()).unwrap_or("table") {
            "table" => OutputMode::Table,
            "csv" => OutputMode::Csv,
            other => {
                return Err(ConfigError::InvalidValue(
                    "OUTPUT".to_string(),
                    format!("must be table or csv, got {}", other),
                ))
            }
        };

        let explorer_url = env_map
            .get("EXPLORER_URL")
            .cloned()
            .unwrap_or_else(|| "https://arbiscan.io/tx/".to_string());

        let relative_timestamps = match env_map
            .get("RELATIVE_TIMESTAMPS")
            .map(|s| s.as_str())
            .unwrap_or("true")
        {
            "true" => true,
            "false" => false,
            other => {
                return Err(ConfigError::InvalidValue(
                    "RELATIVE_TIMESTAMPS".to_string(),
                    format!("must be true or false, got {}", other),
                ))
            }
        };

        let min_collateral_usd = env_map
            .get("MIN_COLLATERAL_USD")
            .map(|s| s.as_str())
            .unwrap_or("1")
            .parse::<u64>()
            .map(|dollars| expand_decimals(dollars, 30))
            .map_err(|_| {
                ConfigError::InvalidValue(
                    "MIN_COLLATERAL_USD".to_string(),
                    "must be a whole USD amount".to_string(),
                )
            })?;

        Ok(Config {
            input_path,
            output,
            explorer_url,
            relative_timestamps,
            min_collateral_usd,
        })
    }
}
