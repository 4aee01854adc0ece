//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::navigator::fs::{EnumerationOptions, Entry, Filesystem, Volume};
use std::cell::Cell;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// In-memory tree rooted at `/`. Entries are listed in insertion order and
/// dot-names count as hidden. Clones share the enumeration counter.
#[derive(Clone, Default)]
pub struct MemoryFilesystem {
    entries: Vec<Entry>,
    volumes: Vec<Volume>,
    enumerations: Rc<Cell<usize>>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Volumes named by letter, rooted at `/<letter>:`.
    pub fn with_volumes(mut self, letters: &[char]) -> Self {
        self.volumes = letters
            .iter()
            .map(|&letter| Volume {
                letter,
                root: PathBuf::from(format!("/{letter}:")),
            })
            .collect();
        self
    }

    pub fn dir(mut self, path: &str) -> Self {
        self.entries.push(Entry::dir(path));
        self
    }

    pub fn file(mut self, path: &str) -> Self {
        self.entries.push(Entry::file(path));
        self
    }

    /// How many times a folder has been listed.
    pub fn enumerations(&self) -> usize {
        self.enumerations.get()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path == Path::new("/") || self.entries.iter().any(|e| e.is_dir && e.path == path)
    }
}

impl Filesystem for MemoryFilesystem {
    fn children(&self, dir: &Path, options: EnumerationOptions) -> io::Result<Vec<Entry>> {
        self.enumerations.set(self.enumerations.get() + 1);
        if !self.is_dir(dir) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such folder"));
        }
        Ok(self
            .entries
            .iter()
            .filter(|e| e.path.parent() == Some(dir))
            .filter(|e| options.include_hidden || !e.hidden)
            .filter(|e| !options.directories_only || e.is_dir)
            .cloned()
            .collect())
    }

    fn parent(&self, dir: &Path) -> Option<PathBuf> {
        dir.parent().map(Path::to_path_buf)
    }

    fn volumes(&self) -> Vec<Volume> {
        self.volumes.clone()
    }
}
