//! Flat-file JSON snapshot persistence.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::AppResult;

/// One JSON file holding a whole collection.
///
/// Every mutation rewrites the file from the in-memory state. The write goes
/// to a sibling temp file first and is renamed over the snapshot, so a crash
/// mid-write leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
    temp_path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let temp_path = match path.file_name() {
            Some(name) => {
                let mut tmp = name.to_os_string();
                tmp.push(".tmp");
                path.with_file_name(tmp)
            }
            None => path.with_extension("tmp"),
        };
        Self { path, temp_path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the collection, falling back to its default when the file is
    /// missing, unreadable or malformed.
    pub fn load<T>(&self) -> T
    where
        T: DeserializeOwned + Default,
    {
        if !self.path.exists() {
            return T::default();
        }
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read snapshot {}: {}", self.path.display(), e);
                return T::default();
            }
        };
        match serde_json::from_str(&content) {
            Ok(collection) => collection,
            Err(e) => {
                tracing::warn!(
                    "Malformed snapshot {}, starting empty: {}",
                    self.path.display(),
                    e
                );
                T::default()
            }
        }
    }

    /// Overwrite the snapshot with the current collection state.
    ///
    /// Output uses four-space indentation, the shape the legacy tool wrote,
    /// so snapshots stay diffable across both writers.
    pub fn save<T: Serialize>(&self, collection: &T) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        collection.serialize(&mut serializer)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.temp_path)?;
        file.write_all(&buf)?;
        file.sync_all()?;
        fs::rename(&self.temp_path, &self.path)?;

        tracing::debug!("Snapshot written to {}", self.path.display());
        Ok(())
    }
}
