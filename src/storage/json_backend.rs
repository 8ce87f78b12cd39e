use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    core::utils::{app_data_dir, ensure_dir, ledger_file_in},
    ledger::LedgerDocument,
    utils::persistence::{load_json_if_exists, save_json_atomic},
};

use super::{Result, StorageBackend};

/// Filesystem-backed JSON persistence for the ledger document.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Stores the document at `path`, creating the parent directory.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        Ok(Self { path })
    }

    /// Stores the document at the default location under [`app_data_dir`].
    pub fn at_default_location() -> Result<Self> {
        Self::new(ledger_file_in(&app_data_dir()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Result<Option<LedgerDocument>> {
        let document = load_json_if_exists(&self.path)?;
        debug!(path = %self.path.display(), found = document.is_some(), "loaded ledger document");
        Ok(document)
    }

    fn save(&self, document: &LedgerDocument) -> Result<()> {
        save_json_atomic(document, &self.path)?;
        debug!(path = %self.path.display(), "saved ledger document");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
