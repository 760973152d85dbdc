//! The in-memory file list
//!
//! Names are stored exactly as the ingestion source reported them.

use std::fmt;

use crate::errors::{Result, invalid_index_error};

/// A single listed file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// The raw file name, extension included
    pub name: String,
}

impl FileEntry {
    pub fn new(name: impl Into<String>) -> Self {
        FileEntry { name: name.into() }
    }
}

impl fmt::Display for FileEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Ordered list of ingested files
///
/// Duplicates are kept. The list is only ever replaced as a whole or
/// shortened by removing one position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileList {
    entries: Vec<FileEntry>,
}

impl FileList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileEntry> {
        self.entries.iter()
    }

    /// Raw names in list order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Removes the entry at `index`, shifting later entries down by one
    ///
    /// # Errors
    /// Returns an invalid index error and leaves the list untouched when
    /// `index` is out of range
    pub fn remove(&mut self, index: usize) -> Result<FileEntry> {
        if index >= self.entries.len() {
            return Err(invalid_index_error(index, self.entries.len()));
        }
        Ok(self.entries.remove(index))
    }
}

impl<S: Into<String>> FromIterator<S> for FileList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        FileList {
            entries: iter.into_iter().map(FileEntry::new).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FileList {
    type Item = &'a FileEntry;
    type IntoIter = std::slice::Iter<'a, FileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
