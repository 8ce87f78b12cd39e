use dirs::home_dir;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::errors::LedgerError;

const DEFAULT_DIR_NAME: &str = ".budget_tracker";
const HOME_ENV: &str = "BUDGET_TRACKER_HOME";
const LEDGER_FILE: &str = "budget.json";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";

/// Returns the application data directory, defaulting to `~/.budget_tracker`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Default location of the ledger document inside `base`.
pub fn ledger_file_in(base: &Path) -> PathBuf {
    base.join(LEDGER_FILE)
}

pub fn config_dir_in(base: &Path) -> PathBuf {
    base.join(CONFIG_DIR)
}

pub fn config_file_in(base: &Path) -> PathBuf {
    config_dir_in(base).join(CONFIG_FILE)
}

pub fn ensure_dir(path: &Path) -> Result<(), LedgerError> {
    fs::create_dir_all(path)?;
    Ok(())
}
