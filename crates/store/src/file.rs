//! JSON file backend for the hotbar store.

use anyhow::{Context, Result};
use hotbar_core::HotbarManager;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::adapter::{hydrate, serialize};
use crate::document::HotbarStoreModel;

/// Reads and writes a [`HotbarStoreModel`] as a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    pretty: bool,
}

impl JsonFileStore {
    /// Create a store backed by `path`. Nothing is touched until load/save.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            pretty: true,
        }
    }

    /// Choose between pretty and compact JSON when saving.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document. A missing file is an empty document.
    pub fn load(&self) -> Result<HotbarStoreModel> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "hotbar store not found, starting empty");
                return Ok(HotbarStoreModel::default());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read {}", self.path.display()))
            }
        };
        HotbarStoreModel::from_json(&contents)
            .with_context(|| format!("failed to parse {}", self.path.display()))
    }

    /// Load and hydrate, falling back to a fresh default set when the file
    /// cannot be read or parsed.
    pub fn load_manager(&self) -> HotbarManager {
        match self.load() {
            Ok(doc) => hydrate(&doc),
            Err(err) => {
                warn!("{err:#}. Starting with a fresh hotbar set");
                HotbarManager::new()
            }
        }
    }

    /// Write the document, replacing the file atomically.
    pub fn save(&self, doc: &HotbarStoreModel) -> Result<()> {
        let json = doc.to_json(self.pretty)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create directory {}", parent.display())
                })?;
            }
        }

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)
            .with_context(|| format!("failed to write {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path)
            .with_context(|| format!("failed to replace {}", self.path.display()))?;
        Ok(())
    }

    /// Save a snapshot if the manager has pending changes, draining them
    /// once the write succeeded.
    ///
    /// A failed save leaves the changes pending so a later call retries.
    /// Returns whether the file was written.
    pub fn persist_if_dirty(&self, manager: &mut HotbarManager) -> Result<bool> {
        if !manager.is_dirty() {
            return Ok(false);
        }
        self.save(&serialize(manager))?;
        for event in manager.take_events() {
            debug!(kind = event.kind(), "persisted hotbar change");
        }
        Ok(true)
    }
}
