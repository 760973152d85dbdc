//! Export module
//!
//! This module derives the export names, renders them as CSV and hands the
//! document to a saver.

mod csv_writer;
mod saver;

pub use csv_writer::{ExportRecord, render_csv};
pub use saver::{DiskSaver, FileSaver, SaveLocation, StdoutSaver};

use log::{debug, info};

use crate::constants::EXPORT_FILE_NAME;
use crate::errors::Result;
use crate::session::FileList;
use crate::transform::{TransformConfig, derive_names};

/// Result of an export request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The list was empty, nothing was written
    Skipped,
    /// The document was saved
    Saved { rows: usize, location: SaveLocation },
}

/// Exports the list through `saver`
///
/// Names are derived in list order. Nothing reaches the saver when the list
/// is empty or when the removal pattern is invalid.
///
/// # Errors
/// * Returns an invalid pattern error when the removal pattern does not compile
/// * Propagates CSV and saver failures
pub fn export_list(
    files: &FileList,
    transform: &TransformConfig,
    saver: &mut dyn FileSaver,
) -> Result<ExportOutcome> {
    if files.is_empty() {
        debug!("Export requested for an empty list, nothing to do");
        return Ok(ExportOutcome::Skipped);
    }

    let names = derive_names(transform, files.entries())?;
    let document = render_csv(&names)?;
    let location = saver.save(EXPORT_FILE_NAME, &document)?;

    info!("Exported {} file names to {}", names.len(), location);
    Ok(ExportOutcome::Saved {
        rows: names.len(),
        location,
    })
}
