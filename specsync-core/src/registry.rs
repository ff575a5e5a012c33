//! Registry persistence — a JSON array of tracked entries.
//!
//! The registry is read once at the start of a pass and rewritten once at
//! the end, as a whole. Writes are atomic: serialize → `.tmp` sibling →
//! rename. Array order and every field are preserved, so a pass that changes
//! nothing (and therefore writes nothing) leaves the file byte-for-byte
//! identical.

use std::collections::HashSet;
use std::path::Path;

use crate::error::StoreError;
use crate::types::TrackedEntry;

/// Default relative path of the registry file.
pub const DEFAULT_REGISTRY_PATH: &str = "registry.json";

// ---------------------------------------------------------------------------
// Load
// ---------------------------------------------------------------------------

/// Load and validate the registry at `path`.
///
/// Returns `StoreError::RegistryNotFound` if absent,
/// `StoreError::Parse` (with path context) if malformed JSON.
pub fn load(path: &Path) -> Result<Vec<TrackedEntry>, StoreError> {
    if !path.exists() {
        return Err(StoreError::RegistryNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    let entries: Vec<TrackedEntry> =
        serde_json::from_str(&contents).map_err(|e| StoreError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
    validate(&entries)?;
    Ok(entries)
}

/// Registry invariants: identifier fields non-empty, grouping keys unique.
pub fn validate(entries: &[TrackedEntry]) -> Result<(), StoreError> {
    let mut seen: HashSet<String> = HashSet::new();
    for (index, entry) in entries.iter().enumerate() {
        let (owner, repo) = entry.upstream();
        let [first, second] = entry.key_segments();
        if owner.is_empty() || repo.is_empty() || first.is_empty() || second.is_empty() {
            return Err(StoreError::EmptyIdentifier { index });
        }
        if !seen.insert(entry.grouping_key()) {
            return Err(StoreError::DuplicateKey {
                key: entry.grouping_key(),
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Save (atomic)
// ---------------------------------------------------------------------------

/// Atomically save the registry to `path`.
///
/// Write flow: serialize → `.tmp` sibling → `rename`. The `.tmp` lives in
/// the same directory as the target (same filesystem, so the rename is
/// atomic on POSIX).
pub fn save(path: &Path, entries: &[TrackedEntry]) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(entries)?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, format!("{json}\n"))?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(StoreError::Io(e));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RepoEntry;
    use tempfile::TempDir;

    fn entry(owner: &str, repo: &str) -> TrackedEntry {
        TrackedEntry::Repo(RepoEntry {
            owner: owner.into(),
            repo: repo.into(),
            name: format!("{owner}/{repo}"),
            last_version: "v1.0.0".into(),
            spec_path: "openapi.yaml".into(),
            asset_name: "openapi.yaml".into(),
        })
    }

    #[test]
    fn save_and_load_roundtrip_preserves_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("registry.json");
        let entries = vec![entry("b", "second"), entry("a", "first")];

        save(&path, &entries).expect("save");
        let loaded = load(&path).expect("load");
        assert_eq!(loaded, entries, "array order must survive a rewrite");
    }

    #[test]
    fn rewrite_without_changes_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("registry.json");
        save(&path, &[entry("a", "x")]).expect("save");
        let first = std::fs::read(&path).unwrap();

        let loaded = load(&path).expect("load");
        save(&path, &loaded).expect("re-save");
        let second = std::fs::read(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn load_missing_registry_returns_not_found() {
        let dir = TempDir::new().unwrap();
        let err = load(&dir.path().join("registry.json")).unwrap_err();
        assert!(matches!(err, StoreError::RegistryNotFound { .. }));
    }

    #[test]
    fn load_malformed_registry_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("registry.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = load(&path).unwrap_err();
        assert!(err.to_string().contains("registry.json"));
    }

    #[test]
    fn duplicate_grouping_key_is_rejected() {
        let err = validate(&[entry("a", "x"), entry("a", "x")]).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateKey { key } if key == "a/x"));
    }

    #[test]
    fn empty_identifier_is_rejected() {
        let err = validate(&[entry("", "x")]).unwrap_err();
        assert!(matches!(err, StoreError::EmptyIdentifier { index: 0 }));
    }

    #[test]
    fn atomic_save_cleans_up_tmp() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("registry.json");
        save(&path, &[entry("a", "x")]).expect("save");
        assert!(!path.with_extension("json.tmp").exists());
    }
}
