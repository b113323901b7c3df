//! `icons` stanza data model for WebExtension manifests
//!
//! A browser extension declares its icon set in `manifest.json` as an
//! object mapping decimal edge lengths to file paths:
//!
//! ```json
//! { "icons": { "16": "icons/icon16.png", "48": "icons/icon48.png" } }
//! ```
//!
//! This module mirrors that shape so the stanza can be pasted into a
//! manifest verbatim. Keys are kept in numeric order.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// The `icons` object of a WebExtension manifest.
///
/// Serializing integer keys through `serde_json` yields the decimal
/// string keys the manifest format requires, while the `BTreeMap`
/// keeps them sorted by size rather than lexicographically.
#[derive(Serialize, Debug, Clone, Default)]
pub struct IconsStanza {
    /// Edge length in pixels mapped to the icon's path.
    pub icons: BTreeMap<u32, String>,
}

impl IconsStanza {
    /// Creates an empty stanza.
    pub fn new() -> Self {
        Self {
            icons: BTreeMap::new(),
        }
    }

    /// Records an icon of the given edge length under `path`.
    ///
    /// Re-adding a size replaces the earlier entry.
    pub fn add_icon(&mut self, size: u32, path: String) {
        self.icons.insert(size, path);
    }
}

/// Writes the stanza to `icons.json` in the given directory.
///
/// # Returns
/// The path of the written file.
///
/// # Errors
/// Returns an error if serialization fails or the directory is not
/// writable.
pub fn write_icons_stanza(dir: &Path, stanza: &IconsStanza) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(stanza).context("Failed to serialize icons.json")?;

    let path = dir.join("icons.json");
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}
