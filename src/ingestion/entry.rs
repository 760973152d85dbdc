//! Drop style ingestion
//!
//! A drop hands over a set of entries, each either a file or a directory.
//! Directories are listed through a reader that returns entries in batches
//! of unspecified size and signals the end of the listing with an empty
//! batch. Nested directories are flattened, only file names are kept.

use log::{debug, info, trace};
use rayon::prelude::*;

use super::picker::{PickedFile, ingest_picked};
use crate::errors::{Result, empty_selection_error, unsupported_payload_error};
use crate::utils::is_listable_name;

/// A file or directory handed over by a drop
pub trait DirectoryEntry: Send + Sync {
    /// Name of the entry, without any parent path
    fn name(&self) -> &str;

    fn is_file(&self) -> bool;

    fn is_directory(&self) -> bool;

    /// Opens a reader over the entries of a directory
    ///
    /// # Errors
    /// Fails when the entry is not a directory or cannot be opened
    fn create_reader(&self) -> Result<Box<dyn EntryReader + '_>>;
}

/// Batched listing of a directory
pub trait EntryReader {
    /// Returns the next batch of entries, an empty batch once exhausted
    fn read_entries(&mut self) -> Result<Vec<Box<dyn DirectoryEntry>>>;
}

/// What a drop exposes
pub enum DropPayload {
    /// Structured entries that may contain directories
    Items(Vec<Box<dyn DirectoryEntry>>),
    /// Only a flat file collection
    Files(Vec<PickedFile>),
    /// Nothing usable
    Empty,
}

impl DropPayload {
    pub fn is_empty(&self) -> bool {
        match self {
            DropPayload::Items(items) => items.is_empty(),
            DropPayload::Files(files) => files.is_empty(),
            DropPayload::Empty => true,
        }
    }
}

/// Turns a drop payload into list names
///
/// Structured items are walked recursively. A payload carrying only a flat
/// file collection is handled like a picker selection.
///
/// # Errors
/// * Returns an empty selection error when no usable name is found
/// * Returns an unsupported payload error when the payload exposes nothing
/// * Propagates the first failure raised while reading a directory
pub fn ingest_drop(payload: &DropPayload) -> Result<Vec<String>> {
    let names = match payload {
        DropPayload::Items(items) if !items.is_empty() => {
            debug!("Walking {} dropped entries", items.len());
            collect_batch(items)?
        }
        DropPayload::Files(files) => {
            debug!("Drop exposes a flat file collection, using picker rules");
            return ingest_picked(files);
        }
        DropPayload::Items(_) | DropPayload::Empty => {
            info!("Drop exposes no entries");
            return Err(unsupported_payload_error());
        }
    };

    if names.is_empty() {
        info!("No files found in the dropped entries");
        return Err(empty_selection_error());
    }
    Ok(names)
}

/// Lists every file name below a directory entry
///
/// Keeps reading until the reader returns an empty batch.
pub fn read_directory(directory: &dyn DirectoryEntry) -> Result<Vec<String>> {
    trace!("Reading directory '{}'", directory.name());

    let mut reader = directory.create_reader()?;
    let mut names = Vec::new();
    loop {
        let batch = reader.read_entries()?;
        if batch.is_empty() {
            break;
        }
        trace!(
            "Directory '{}' returned a batch of {}",
            directory.name(),
            batch.len()
        );
        names.extend(collect_batch(&batch)?);
    }
    Ok(names)
}

/// Collects names for one batch, walking sibling subtrees in parallel
///
/// Per-entry results are joined in batch order before flattening.
fn collect_batch(batch: &[Box<dyn DirectoryEntry>]) -> Result<Vec<String>> {
    let per_entry: Vec<Vec<String>> = batch
        .par_iter()
        .map(|entry| collect_entry(entry.as_ref()))
        .collect::<Result<_>>()?;

    Ok(per_entry.into_iter().flatten().collect())
}

fn collect_entry(entry: &dyn DirectoryEntry) -> Result<Vec<String>> {
    if entry.is_file() {
        let name = entry.name();
        if is_listable_name(name) {
            return Ok(vec![name.to_string()]);
        }
        trace!("Skipping hidden entry '{name}'");
        return Ok(Vec::new());
    }
    if entry.is_directory() {
        return read_directory(entry);
    }
    trace!("Skipping entry '{}' that is neither file nor directory", entry.name());
    Ok(Vec::new())
}
