//! Flat key/value storage backends for entry documents.

use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Backing storage for entry documents.
///
/// Keys are plain file names produced by [`crate::Title::key`]; backends may
/// assume they contain no path separators.
pub trait Storage: Send + Sync {
    /// All keys currently stored, in no particular order
    fn list(&self) -> io::Result<Vec<String>>;

    fn exists(&self, key: &str) -> io::Result<bool>;

    /// Stored bytes, or `None` when the key is absent
    fn read(&self, key: &str) -> io::Result<Option<Vec<u8>>>;

    fn write(&self, key: &str, bytes: &[u8]) -> io::Result<()>;

    /// Remove a key; removing an absent key is not an error
    fn delete(&self, key: &str) -> io::Result<()>;
}

/// One file per key inside a single directory
#[derive(Debug, Clone)]
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl Storage for FsStorage {
    fn list(&self) -> io::Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut keys = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            match entry.file_name().to_str() {
                Some(name) => keys.push(name.to_string()),
                None => tracing::warn!("Skipping non UTF-8 file name {:?}", entry.path()),
            }
        }
        Ok(keys)
    }

    fn exists(&self, key: &str) -> io::Result<bool> {
        Ok(self.path_for(key).is_file())
    }

    fn read(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn write(&self, key: &str, bytes: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.path_for(key), bytes)
    }

    fn delete(&self, key: &str) -> io::Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

/// In-memory storage, mostly for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn list(&self) -> io::Result<Vec<String>> {
        Ok(self.files.read().keys().cloned().collect())
    }

    fn exists(&self, key: &str) -> io::Result<bool> {
        Ok(self.files.read().contains_key(key))
    }

    fn read(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
        Ok(self.files.read().get(key).cloned())
    }

    fn write(&self, key: &str, bytes: &[u8]) -> io::Result<()> {
        self.files.write().insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> io::Result<()> {
        self.files.write().remove(key);
        Ok(())
    }
}
