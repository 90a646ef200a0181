//! Flat-file JSON stores — one array per file, whole-file read/modify/write.
//!
//! There is no locking: two concurrent writers to the same file race and the
//! last write wins. Reads load the entire array into memory; callers filter
//! and slice the in-memory vec.

use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Records with a numeric, monotonically assigned id.
pub trait HasId {
    fn id(&self) -> i64;
}

/// Returns one more than the maximum existing id, or 1 for an empty array.
pub fn next_id<T: HasId>(items: &[T]) -> i64 {
    items.iter().fold(0, |max, item| max.max(item.id())) + 1
}

/// A JSON array persisted as a single file on disk.
#[derive(Debug, Clone)]
pub struct JsonFile<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonFile<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Opens (and if necessary creates) `<dir>/<name>` seeded with `[]`.
    pub fn open(dir: impl AsRef<Path>, name: &str) -> Result<Self, StoreError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(name);
        if !path.exists() {
            fs::write(&path, "[]")?;
        }
        Ok(Self {
            path,
            _marker: PhantomData,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the whole array. A missing or corrupt file yields an
    /// empty vec; the parse failure is logged, never surfaced.
    pub fn read_all(&self) -> Vec<T> {
        let text = match fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(e) => {
                warn!("[store] read error on {}: {e}", self.path.display());
                return Vec::new();
            }
        };
        // Seeded files may carry a BOM when edited by hand on Windows.
        let clean = text.trim_start_matches('\u{feff}').trim();
        match serde_json::from_str(clean) {
            Ok(items) => items,
            Err(e) => {
                warn!("[store] parse error on {}: {e}", self.path.display());
                Vec::new()
            }
        }
    }

    /// Serializes and overwrites the whole file. Last writer wins.
    pub fn write_all(&self, items: &[T]) -> Result<(), StoreError> {
        debug!("[store] write {} len={}", self.path.display(), items.len());
        let bytes = serde_json::to_vec_pretty(items)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Item {
        id: i64,
        name: String,
    }

    impl HasId for Item {
        fn id(&self) -> i64 {
            self.id
        }
    }

    fn item(id: i64, name: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_open_seeds_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let store: JsonFile<Item> = JsonFile::open(dir.path(), "items.json").unwrap();
        assert!(store.path().exists());
        assert!(store.read_all().is_empty());
    }

    #[test]
    fn test_write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store: JsonFile<Item> = JsonFile::open(dir.path(), "items.json").unwrap();
        let items = vec![item(1, "a"), item(2, "b")];
        store.write_all(&items).unwrap();
        assert_eq!(store.read_all(), items);
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store: JsonFile<Item> = JsonFile::open(dir.path(), "items.json").unwrap();
        fs::write(store.path(), "{not json").unwrap();
        assert!(store.read_all().is_empty());
    }

    #[test]
    fn test_bom_is_stripped_before_parse() {
        let dir = tempfile::tempdir().unwrap();
        let store: JsonFile<Item> = JsonFile::open(dir.path(), "items.json").unwrap();
        fs::write(store.path(), "\u{feff}[{\"id\":7,\"name\":\"x\"}]").unwrap();
        assert_eq!(store.read_all(), vec![item(7, "x")]);
    }

    #[test]
    fn test_next_id_empty_is_one() {
        let items: Vec<Item> = vec![];
        assert_eq!(next_id(&items), 1);
    }

    #[test]
    fn test_next_id_is_max_plus_one() {
        let items = vec![item(3, "a"), item(10, "b"), item(4, "c")];
        assert_eq!(next_id(&items), 11);
    }
}
