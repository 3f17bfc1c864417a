// src/fs/mock.rs

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};

use super::FileSystem;

#[derive(Debug, Clone)]
enum MockEntry {
    File(Vec<u8>),
    /// Child names, in insertion order. `read_dir` preserves this order,
    /// which stands in for "whatever order the OS returns".
    Dir(Vec<String>),
}

/// In-memory [`FileSystem`] used by scanner, spawner and settings tests.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    entries: Arc<Mutex<HashMap<PathBuf, MockEntry>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut entries = self.entries.lock().unwrap();
        entries
            .entry(path.as_ref().to_path_buf())
            .or_insert_with(|| MockEntry::Dir(Vec::new()));
    }

    pub fn add_file(&self, path: impl AsRef<Path>, contents: impl Into<Vec<u8>>) {
        let path = path.as_ref().to_path_buf();
        let mut entries = self.entries.lock().unwrap();
        entries.insert(path.clone(), MockEntry::File(contents.into()));

        if let Some(parent) = path.parent() {
            let dir = entries
                .entry(parent.to_path_buf())
                .or_insert_with(|| MockEntry::Dir(Vec::new()));
            if let (MockEntry::Dir(children), Some(name)) =
                (dir, path.file_name().and_then(|n| n.to_str()))
            {
                if !children.iter().any(|c| c == name) {
                    children.push(name.to_string());
                }
            }
        }
    }

    /// Remove a file without touching its parent's child list, simulating a
    /// file that vanishes between scan and launch.
    pub fn remove_file(&self, path: impl AsRef<Path>) {
        let mut entries = self.entries.lock().unwrap();
        entries.remove(path.as_ref());
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        let entries = self.entries.lock().unwrap();
        match entries.get(path) {
            Some(MockEntry::File(contents)) => {
                String::from_utf8(contents.clone()).map_err(|e| anyhow!(e))
            }
            _ => Err(anyhow!("mock: no such file: {:?}", path)),
        }
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.add_file(path, contents.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.entries.lock().unwrap().contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.entries.lock().unwrap().get(path), Some(MockEntry::Dir(_)))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let entries = self.entries.lock().unwrap();
        match entries.get(path) {
            Some(MockEntry::Dir(children)) => {
                Ok(children.iter().map(|name| path.join(name)).collect())
            }
            _ => Err(anyhow!("mock: no such directory: {:?}", path)),
        }
    }
}
