use serde::{Deserialize, Serialize};

use super::budget::{ArchivedBudget, Budget};

pub const CURRENT_SCHEMA_VERSION: u8 = 1;

/// The whole persisted state: the active budget plus the archive, saved as one unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LedgerDocument {
    #[serde(default = "LedgerDocument::schema_version_default")]
    pub schema_version: u8,
    #[serde(default)]
    pub active_budget: Option<Budget>,
    /// Most recently closed first.
    #[serde(default)]
    pub archive: Vec<ArchivedBudget>,
}

impl Default for LedgerDocument {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            active_budget: None,
            archive: Vec::new(),
        }
    }
}

impl LedgerDocument {
    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }

    pub fn is_empty(&self) -> bool {
        self.active_budget.is_none() && self.archive.is_empty()
    }
}
