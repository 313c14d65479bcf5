//! JSON-file persistence for the chore list.
//!
//! The whole collection is one document, loaded at startup and rewritten
//! after every mutation. Saves go through a temporary sibling file and a
//! rename, so a crash mid-write leaves the previous document intact.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};
use crate::model::Chore;

#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// ## Summary
    /// Loads the persisted chore list. A missing file is an empty list;
    /// an unreadable or unparseable file is an error rather than silent
    /// data loss, since the next save would overwrite it.
    ///
    /// ## Errors
    /// Returns [`StoreError::Io`] when the file exists but cannot be read,
    /// and [`StoreError::Corrupt`] when it does not parse as a chore list.
    pub fn load(&self) -> StoreResult<Vec<Chore>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Store file absent, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source: err,
                });
            }
        };

        let chores: Vec<Chore> =
            serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(path = %self.path.display(), count = chores.len(), "Store loaded");
        Ok(chores)
    }

    /// ## Summary
    /// Persists the full chore list, replacing the previous document
    /// atomically.
    ///
    /// ## Errors
    /// Returns an error when serialization or any filesystem step fails.
    pub fn save(&self, chores: &[Chore]) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(chores)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(path = %self.path.display(), count = chores.len(), "Store saved");
        Ok(())
    }
}
