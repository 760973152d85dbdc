//! Ingestion module
//!
//! This module turns a picker selection or a drop into an ordered list of
//! plain file names.

mod entry;
mod fs_entry;
mod picker;

pub use entry::{DirectoryEntry, DropPayload, EntryReader, ingest_drop, read_directory};
pub use fs_entry::{FsEntry, FsEntryReader};
pub use picker::{PickedFile, ingest_picked, read_selection_list};
