use thiserror::Error;

/// Error type that captures environmental ledger failures.
///
/// Business-rule outcomes such as "no active budget" are not errors; the
/// ledger reports those through `bool`/`Option` return values.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Persistence error: {0}")]
    Persistence(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
