// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#[cfg(test)]
use std::collections::HashMap;
use std::fs::read_to_string;
use std::io::ErrorKind;
use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use crate::error::Fallible;
use crate::error::fail;

/// A store of string blobs addressed by key.
pub trait BlobStore {
    /// Read the blob stored under `key`, if any.
    fn get(&self, key: &str) -> Fallible<Option<String>>;

    /// Overwrite the blob stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Fallible<()>;
}

/// Stores each key as `<key>.json` inside a directory.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the target, so a crash mid-write leaves the previous blob intact.
pub struct DirectoryStore {
    directory: PathBuf,
}

impl DirectoryStore {
    pub fn new(directory: PathBuf) -> Fallible<Self> {
        if !directory.is_dir() {
            return fail("directory does not exist.");
        }
        Ok(Self { directory })
    }

    fn path(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{key}.json"))
    }
}

impl BlobStore for DirectoryStore {
    fn get(&self, key: &str) -> Fallible<Option<String>> {
        let path = self.path(key);
        match read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Fallible<()> {
        let path = self.path(key);
        log::debug!("Writing {}", path.display());
        let mut file = NamedTempFile::new_in(&self.directory)?;
        file.write_all(value.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&path)?;
        Ok(())
    }
}

/// Keeps blobs in memory.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
    writes: usize,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of `set` calls made so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

#[cfg(test)]
impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Fallible<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Fallible<()> {
        self.writes += 1;
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_non_existent_directory() {
        assert!(DirectoryStore::new(PathBuf::from("./derpherp")).is_err());
    }

    #[test]
    fn test_directory_store() -> Fallible<()> {
        let dir = tempdir()?;
        let mut store = DirectoryStore::new(dir.path().to_path_buf())?;
        assert_eq!(store.get("flashcardSets")?, None);
        store.set("flashcardSets", "[]")?;
        assert_eq!(store.get("flashcardSets")?, Some("[]".to_string()));
        store.set("flashcardSets", "[1]")?;
        assert_eq!(store.get("flashcardSets")?, Some("[1]".to_string()));
        assert!(dir.path().join("flashcardSets.json").is_file());
        Ok(())
    }

    #[test]
    fn test_directory_store_leaves_no_temporaries() -> Fallible<()> {
        let dir = tempdir()?;
        let mut store = DirectoryStore::new(dir.path().to_path_buf())?;
        store.set("a", "x")?;
        store.set("b", "y")?;
        let count = dir.path().read_dir()?.count();
        assert_eq!(count, 2);
        Ok(())
    }

    #[test]
    fn test_memory_store() -> Fallible<()> {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k")?, None);
        store.set("k", "v")?;
        assert_eq!(store.get("k")?, Some("v".to_string()));
        assert_eq!(store.writes(), 1);
        Ok(())
    }
}
