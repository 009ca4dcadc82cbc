//! Pack manifest and output persistence.
//!
//! All writes are whole-file: results are built in memory and serialized
//! once, so a consumer never observes a partially-written artifact.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::PackError;
use crate::models::Pack;

/// Load the pack manifest.
pub fn load_pack(path: &Path) -> Result<Pack, PackError> {
    if !path.exists() {
        return Err(PackError::NotFound(path.to_path_buf()));
    }
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Write the pack manifest back, pretty-printed.
pub fn save_pack(path: &Path, pack: &Pack) -> Result<(), PackError> {
    let raw = serde_json::to_string_pretty(pack)?;
    fs::write(path, raw)?;
    Ok(())
}

/// Write the id-to-hex color mapping, pretty-printed with sorted keys.
pub fn save_colors(path: &Path, colors: &BTreeMap<String, String>) -> Result<(), PackError> {
    let raw = serde_json::to_string_pretty(colors)?;
    fs::write(path, raw)?;
    Ok(())
}
