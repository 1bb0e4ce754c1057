use crate::error::{Result, ShopError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CURRENCY: &str = "₹";
const DEFAULT_PRECISION: usize = 1;

/// Largest accepted `total_precision`. Values read from a hand-edited file are
/// clamped to it when formatting.
pub const MAX_PRECISION: usize = 10;

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "SHOPSMART_HOME";

/// Configuration for shopsmart, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShopConfig {
    /// Symbol printed in front of prices and totals
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Decimal places used when printing prices and totals
    #[serde(default = "default_precision")]
    pub total_precision: usize,

    /// Write stored collections as indented JSON
    #[serde(default)]
    pub pretty_json: bool,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            total_precision: DEFAULT_PRECISION,
            pretty_json: false,
        }
    }
}

impl ShopConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShopError::Persistence)?;
        let config: ShopConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShopError::Persistence)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content).map_err(ShopError::Persistence)?;
        Ok(())
    }

    pub fn format_price(&self, value: f64) -> String {
        format!(
            "{}{:.*}",
            self.currency_symbol,
            self.total_precision.min(MAX_PRECISION),
            value
        )
    }

    /// Apply a `key value` pair as given on the command line.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "currency_symbol" => self.currency_symbol = value.to_string(),
            "total_precision" => {
                let precision: usize = value.parse().map_err(|_| {
                    ShopError::Store(format!("total_precision must be a number, got {}", value))
                })?;
                if precision > MAX_PRECISION {
                    return Err(ShopError::Store(format!(
                        "total_precision must be at most {}, got {}",
                        MAX_PRECISION, value
                    )));
                }
                self.total_precision = precision;
            }
            "pretty_json" => {
                self.pretty_json = value.parse().map_err(|_| {
                    ShopError::Store(format!("pretty_json must be true or false, got {}", value))
                })?
            }
            other => return Err(ShopError::Store(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}

/// Resolve the data directory: explicit path, then `SHOPSMART_HOME`, then the
/// platform data dir.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "yuvrajsinghgmx", "shopsmart")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShopError::Store("Could not determine data directory".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ShopConfig::default();
        assert_eq!(config.currency_symbol, "₹");
        assert_eq!(config.total_precision, 1);
        assert!(!config.pretty_json);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = ShopConfig::load(dir.path()).unwrap();
        assert_eq!(config, ShopConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut config = ShopConfig::default();
        config.set("currency_symbol", "$").unwrap();
        config.set("pretty_json", "true").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = ShopConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert!(loaded.pretty_json);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"total_precision": 2}"#).unwrap();
        let loaded = ShopConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.total_precision, 2);
        assert_eq!(loaded.currency_symbol, "₹");
    }

    #[test]
    fn test_set_rejects_unknown_and_bad_values() {
        let mut config = ShopConfig::default();
        assert!(config.set("colour", "red").is_err());
        assert!(config.set("total_precision", "many").is_err());
    }

    #[test]
    fn test_format_price() {
        let config = ShopConfig::default();
        assert_eq!(config.format_price(35.0), "₹35.0");
        let config = ShopConfig {
            currency_symbol: "$".to_string(),
            total_precision: 2,
            pretty_json: false,
        };
        assert_eq!(config.format_price(2.5), "$2.50");
    }

    #[test]
    fn test_set_rejects_precision_above_max() {
        let mut config = ShopConfig::default();
        assert!(config.set("total_precision", "100000").is_err());
        assert_eq!(config.total_precision, DEFAULT_PRECISION);

        config.set("total_precision", "10").unwrap();
        assert_eq!(config.total_precision, MAX_PRECISION);
    }

    #[test]
    fn test_format_price_clamps_hand_edited_precision() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"total_precision": 100000}"#,
        )
        .unwrap();
        let config = ShopConfig::load(dir.path()).unwrap();
        assert_eq!(config.format_price(1.5), "₹1.5000000000");
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let dir = PathBuf::from("/tmp/shopsmart-explicit");
        assert_eq!(resolve_data_dir(Some(dir.clone())).unwrap(), dir);
    }
}
