use std::sync::{Arc, Mutex};

use crate::{errors::LedgerError, ledger::LedgerDocument};

use super::{Result, StorageBackend};

/// In-process key-value slot holding the serialized document.
///
/// Clones share the same slot, so a test can hand one clone to a ledger and
/// inspect or reopen through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the slot with raw JSON, as if written by an earlier session.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(raw.into()))),
        }
    }

    /// The serialized document currently held, if any.
    pub fn raw(&self) -> Result<Option<String>> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>> {
        self.slot
            .lock()
            .map_err(|_| LedgerError::Persistence("memory storage lock poisoned".into()))
    }
}

impl StorageBackend for MemoryStorage {
    fn load(&self) -> Result<Option<LedgerDocument>> {
        match self.lock()?.as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, document: &LedgerDocument) -> Result<()> {
        let raw = serde_json::to_string(document)?;
        *self.lock()? = Some(raw);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".into()
    }
}
