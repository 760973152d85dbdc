//! Session state
//!
//! Owns the file list and the transformation parameters for one user
//! session. Ingestion replaces the list only when it succeeds.

use log::{debug, info};

use super::file_list::{FileEntry, FileList};
use crate::errors::{Result, invalid_index_error};
use crate::export::{ExportOutcome, FileSaver, export_list};
use crate::ingestion::{DropPayload, PickedFile, ingest_drop, ingest_picked};
use crate::transform::{TransformConfig, derive_names};

#[derive(Debug, Clone, Default)]
pub struct Session {
    files: FileList,
    transform: TransformConfig,
}

impl Session {
    pub fn new(transform: TransformConfig) -> Self {
        Session {
            files: FileList::new(),
            transform,
        }
    }

    pub fn files(&self) -> &FileList {
        &self.files
    }

    pub fn transform(&self) -> &TransformConfig {
        &self.transform
    }

    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.transform.prefix = prefix.into();
    }

    pub fn set_remove_pattern(&mut self, pattern: impl Into<String>) {
        self.transform.remove_pattern = pattern.into();
    }

    /// Replaces the list with the names found in a drop
    ///
    /// Returns the new list length. On error the previous list is kept.
    pub fn ingest_drop(&mut self, payload: &DropPayload) -> Result<usize> {
        let names = ingest_drop(payload)?;
        Ok(self.replace(names))
    }

    /// Replaces the list with the names of a picker selection
    ///
    /// Returns the new list length. On error the previous list is kept.
    pub fn ingest_picked(&mut self, files: &[PickedFile]) -> Result<usize> {
        let names = ingest_picked(files)?;
        Ok(self.replace(names))
    }

    fn replace(&mut self, names: Vec<String>) -> usize {
        let previous = self.files.len();
        self.files = names.into_iter().collect();
        info!(
            "Listed {} files (replacing {} previous entries)",
            self.files.len(),
            previous
        );
        self.files.len()
    }

    /// Removes the file at `index`
    pub fn remove(&mut self, index: usize) -> Result<FileEntry> {
        let removed = self.files.remove(index)?;
        debug!("Removed '{}' from position {}", removed.name, index);
        Ok(removed)
    }

    /// Removes several files, each index referring to the list as it is now
    ///
    /// All indices are checked before anything is removed. Repeated indices
    /// count once.
    pub fn remove_many(&mut self, indices: &[usize]) -> Result<Vec<FileEntry>> {
        let len = self.files.len();
        if let Some(&index) = indices.iter().find(|&&index| index >= len) {
            return Err(invalid_index_error(index, len));
        }

        let mut ordered = indices.to_vec();
        ordered.sort_unstable_by(|a, b| b.cmp(a));
        ordered.dedup();

        let mut removed = ordered
            .into_iter()
            .map(|index| self.remove(index))
            .collect::<Result<Vec<_>>>()?;
        removed.reverse();
        Ok(removed)
    }

    /// Names as they would be exported right now
    pub fn derived_names(&self) -> Result<Vec<String>> {
        derive_names(&self.transform, self.files.entries())
    }

    /// Exports the current list, a no-op when it is empty
    pub fn export(&self, saver: &mut dyn FileSaver) -> Result<ExportOutcome> {
        export_list(&self.files, &self.transform, saver)
    }
}
