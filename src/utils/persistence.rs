use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::LedgerError;

const TMP_SUFFIX: &str = "tmp";

/// Serializes `value` as pretty JSON and replaces `path` atomically by staging
/// to a sibling temporary file first. The original file survives a failed write.
pub fn save_json_atomic<T: Serialize>(value: &T, path: &Path) -> Result<(), LedgerError> {
    let json = serde_json::to_string_pretty(value)?;
    write_atomic(path, &json)
}

/// Reads and parses `path`, returning `None` when the file does not exist.
pub fn load_json_if_exists<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, LedgerError> {
    if !path.exists() {
        return Ok(None);
    }
    let data = fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&data)?))
}

pub fn write_atomic(path: &Path, data: &str) -> Result<(), LedgerError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

pub fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
