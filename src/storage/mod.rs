//! Persistence adapters for the ledger document.

pub mod json_backend;
pub mod memory_backend;

use crate::{errors::LedgerError, ledger::LedgerDocument};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over a single-slot store holding the whole ledger document.
pub trait StorageBackend: Send + Sync {
    /// Returns the stored document, or `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<LedgerDocument>>;

    /// Replaces the stored document.
    fn save(&self, document: &LedgerDocument) -> Result<()>;

    /// Human-readable location, used in logs.
    fn describe(&self) -> String;
}

pub use json_backend::JsonStorage;
pub use memory_backend::MemoryStorage;
