//! Picker style ingestion
//!
//! A picker hands over a flat collection of files. When a whole folder was
//! picked every record also carries its path relative to that folder.

use std::io::BufRead;

use log::{debug, info};

use crate::errors::{Result, empty_selection_error, file_operation_error};
use crate::utils::{is_listable_name, last_path_segment};

/// A file handed over by a picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    /// The name reported for the file
    pub name: String,
    /// Path relative to the picked folder, segments joined by `/`
    pub relative_path: Option<String>,
}

impl PickedFile {
    pub fn new(name: impl Into<String>) -> Self {
        PickedFile {
            name: name.into(),
            relative_path: None,
        }
    }

    /// Creates a record from a relative path, naming it after the last segment
    pub fn from_relative_path(relative_path: impl Into<String>) -> Self {
        let relative_path = relative_path.into();
        PickedFile {
            name: last_path_segment(&relative_path).to_string(),
            relative_path: Some(relative_path),
        }
    }

    /// The name shown in the list
    pub fn display_name(&self) -> &str {
        match &self.relative_path {
            Some(path) => last_path_segment(path),
            None => &self.name,
        }
    }
}

/// Turns picked files into list names
///
/// Records whose display name is empty or hidden are skipped.
///
/// # Errors
/// Returns an empty selection error when nothing is left after filtering
pub fn ingest_picked(files: &[PickedFile]) -> Result<Vec<String>> {
    let names: Vec<String> = files
        .iter()
        .map(PickedFile::display_name)
        .filter(|name| is_listable_name(name))
        .map(str::to_string)
        .collect();

    debug!(
        "Picker selection: {} of {} records accepted",
        names.len(),
        files.len()
    );

    if names.is_empty() {
        info!("No files found in the picked selection");
        return Err(empty_selection_error());
    }
    Ok(names)
}

/// Reads picker records from newline separated relative paths
///
/// Blank lines are skipped and a trailing carriage return is dropped.
///
/// # Errors
/// Returns a file operation error when the reader fails
pub fn read_selection_list<R: BufRead>(reader: R) -> Result<Vec<PickedFile>> {
    let mut files = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| file_operation_error(e, "selection list".into(), "read"))?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        files.push(PickedFile::from_relative_path(line));
    }
    Ok(files)
}
