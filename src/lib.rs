//! Folder CSV
//!
//! Lists the files in a selection of files and folders, derives export names
//! (extension stripped, prefix added, pattern matches removed) and saves them
//! as a one-column CSV document.

pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod export;
pub mod ingestion;
pub mod logging;
pub mod session;
pub mod transform;
pub mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::errors::{
        Error, Result, empty_selection_error, file_operation_error, generic_error,
        invalid_filename_error, invalid_index_error, invalid_pattern_error,
        unsupported_payload_error,
    };
    pub use crate::export::{DiskSaver, ExportOutcome, FileSaver, SaveLocation, StdoutSaver};
    pub use crate::ingestion::{DirectoryEntry, DropPayload, EntryReader, FsEntry, PickedFile};
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::session::{FileEntry, FileList, Session};
    pub use crate::transform::TransformConfig;
    pub use crate::workflow::{InputSource, ProcessingOptions, process_files};
}
