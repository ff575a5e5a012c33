//! Storage layout for synchronized specifications.
//!
//! Each entry + resolved version maps to one directory:
//!
//! ```text
//! openapi/
//!   <key-segment>/<key-segment>/
//!     <version>/
//!       openapi.yaml
//!       .metadata.json     (rich entries only)
//! ```
//!
//! Saving is idempotent: re-running with the same entry + version recreates
//! nothing and simply overwrites the two files.

use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::types::TrackedEntry;

/// File name of the saved specification inside a version directory.
pub const SPEC_FILE_NAME: &str = "openapi.yaml";

/// File name of the metadata sidecar inside a version directory.
pub const METADATA_FILE_NAME: &str = ".metadata.json";

/// Default storage root, relative to the registry repository.
pub const DEFAULT_ROOT: &str = "openapi";

/// Computes storage paths and writes spec + sidecar files.
#[derive(Debug, Clone)]
pub struct SpecLayout {
    root: PathBuf,
}

impl SpecLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<root>/<key segments>/<version>/` — pure, no I/O.
    pub fn version_dir(&self, entry: &TrackedEntry, version: &str) -> PathBuf {
        let [first, second] = entry.key_segments();
        self.root.join(first).join(second).join(version)
    }

    /// Path of the spec document for `entry` at `version` — pure, no I/O.
    pub fn spec_path(&self, entry: &TrackedEntry, version: &str) -> PathBuf {
        self.version_dir(entry, version).join(SPEC_FILE_NAME)
    }

    /// Path of the metadata sidecar for `entry` at `version` — pure, no I/O.
    pub fn metadata_path(&self, entry: &TrackedEntry, version: &str) -> PathBuf {
        self.version_dir(entry, version).join(METADATA_FILE_NAME)
    }

    /// Write the spec document, creating all missing parent directories.
    ///
    /// Returns the final on-disk path.
    pub fn write_spec(
        &self,
        entry: &TrackedEntry,
        version: &str,
        content: &str,
    ) -> Result<PathBuf, StoreError> {
        let path = self.spec_path(entry, version);
        ensure_parent(&path)?;
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Write the `.metadata.json` sidecar.
    ///
    /// Returns `Ok(None)` for flat entries, which carry no presentation
    /// metadata and get no sidecar.
    pub fn write_metadata(
        &self,
        entry: &TrackedEntry,
        version: &str,
    ) -> Result<Option<PathBuf>, StoreError> {
        let Some(metadata) = entry.metadata(version) else {
            return Ok(None);
        };
        let path = self.metadata_path(entry, version);
        ensure_parent(&path)?;
        let json = serde_json::to_string_pretty(&metadata)?;
        std::fs::write(&path, format!("{json}\n"))?;
        Ok(Some(path))
    }
}

fn ensure_parent(path: &Path) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
