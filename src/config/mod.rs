use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::utils::{app_data_dir, config_dir_in, config_file_in, ensure_dir, ledger_file_in};
use crate::currency::DEFAULT_CURRENCY_SYMBOL;
use crate::errors::LedgerError;
use crate::utils::persistence::{load_json_if_exists, save_json_atomic};

const DEFAULT_RECENT_LIMIT: usize = 5;
const DEFAULT_ARCHIVE_DISPLAY_LIMIT: usize = 4;

/// Keys accepted by [`Config::set`].
pub const CONFIG_KEYS: [&str; 4] = [
    "currency_symbol",
    "recent_limit",
    "archive_display_limit",
    "data_file",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
    #[serde(default = "default_archive_display_limit")]
    pub archive_display_limit: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            recent_limit: DEFAULT_RECENT_LIMIT,
            archive_display_limit: DEFAULT_ARCHIVE_DISPLAY_LIMIT,
            data_file: None,
        }
    }
}

impl Config {
    /// Ledger document path: the configured override, or `budget.json` in `base`.
    pub fn resolve_data_file(&self, base: &Path) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| ledger_file_in(base))
    }

    /// Updates one field from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), LedgerError> {
        let value = value.trim();
        match key {
            "currency_symbol" => {
                if value.is_empty() {
                    return Err(LedgerError::Config(
                        "currency_symbol cannot be empty".into(),
                    ));
                }
                self.currency_symbol = value.to_string();
            }
            "recent_limit" => self.recent_limit = parse_limit(key, value)?,
            "archive_display_limit" => self.archive_display_limit = parse_limit(key, value)?,
            "data_file" => {
                self.data_file = if value.is_empty() || value == "default" {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            other => {
                return Err(LedgerError::Config(format!(
                    "unknown key `{}` (expected one of: {})",
                    other,
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

fn parse_limit(key: &str, value: &str) -> Result<usize, LedgerError> {
    match value.parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(LedgerError::Config(format!(
            "{} must be a positive whole number, got `{}`",
            key, value
        ))),
    }
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

fn default_archive_display_limit() -> usize {
    DEFAULT_ARCHIVE_DISPLAY_LIMIT
}

pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, LedgerError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, LedgerError> {
        ensure_dir(&base)?;
        ensure_dir(&config_dir_in(&base))?;
        Ok(Self {
            path: config_file_in(&base),
            base,
        })
    }

    pub fn load(&self) -> Result<Config, LedgerError> {
        Ok(load_json_if_exists(&self.path)?.unwrap_or_default())
    }

    pub fn save(&self, config: &Config) -> Result<(), LedgerError> {
        save_json_atomic(config, &self.path)?;
        tracing::debug!(path = %self.path.display(), "saved configuration");
        Ok(())
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
