//! Workflow engine
//!
//! This module contains the engine that runs one non-interactive export.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use log::{debug, info};

use crate::constants::STDIO_MARKER;
use crate::errors::{Result, file_operation_error};
use crate::export::{DiskSaver, FileSaver, StdoutSaver};
use crate::ingestion::{DropPayload, read_selection_list};
use crate::session::Session;
use crate::transform::TransformConfig;
use crate::utils::expand_path;

use super::context::WorkflowContext;
use super::listing::write_listing;

/// Where the file names come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Files and folders on disk, walked like a drop
    Paths(Vec<PathBuf>),
    /// A file of relative paths (or `-` for standard input), read like a picker
    SelectionList(String),
}

/// Options for one run
#[derive(Debug, Clone)]
pub struct ProcessingOptions {
    pub input: InputSource,
    pub transform: TransformConfig,
    /// Export destination, `-` for standard output
    pub output: Option<String>,
    /// Positions removed before exporting
    pub exclude: Vec<usize>,
    /// Print the list instead of exporting
    pub list_only: bool,
    /// Entries requested per directory read
    pub batch_size: usize,
}

/// Turns an input source into a drop payload
///
/// # Errors
/// Returns an error if a path cannot be inspected or the list cannot be read
pub fn build_payload(input: &InputSource, batch_size: usize) -> Result<DropPayload> {
    match input {
        InputSource::Paths(paths) => DropPayload::from_paths(paths, batch_size),
        InputSource::SelectionList(source) if source == STDIO_MARKER => {
            debug!("Reading the selection list from standard input");
            Ok(DropPayload::Files(read_selection_list(io::stdin().lock())?))
        }
        InputSource::SelectionList(source) => {
            let path = expand_path(source);
            debug!("Reading the selection list from {}", path.display());
            let file = File::open(&path).map_err(|e| file_operation_error(e, path, "open"))?;
            Ok(DropPayload::Files(read_selection_list(BufReader::new(file))?))
        }
    }
}

/// Creates the saver for an output option
pub fn make_saver(output: Option<&str>) -> Box<dyn FileSaver> {
    match output {
        Some(STDIO_MARKER) => Box::new(StdoutSaver),
        Some(path) => Box::new(DiskSaver::new(Some(expand_path(path)))),
        None => Box::new(DiskSaver::new(None)),
    }
}

/// Runs one export
///
/// 1. Ingest the input into a fresh session
/// 2. Remove the excluded positions
/// 3. Print the list, or export it through the saver for `options.output`
///
/// # Errors
/// Returns the first error of any step. Nothing is saved when ingestion,
/// exclusion or name derivation fails.
pub fn process_files(options: &ProcessingOptions, out: &mut dyn Write) -> Result<WorkflowContext> {
    let mut saver = make_saver(options.output.as_deref());
    process_files_with_saver(options, saver.as_mut(), out)
}

/// Runs one export with an explicit saver
pub fn process_files_with_saver(
    options: &ProcessingOptions,
    saver: &mut dyn FileSaver,
    out: &mut dyn Write,
) -> Result<WorkflowContext> {
    let mut session = Session::new(options.transform.clone());

    let payload = build_payload(&options.input, options.batch_size)?;
    let listed = session.ingest_drop(&payload)?;
    let excluded = session.remove_many(&options.exclude)?.len();

    let mut context = WorkflowContext::new(session);
    context.stats.files_listed = listed;
    context.stats.files_excluded = excluded;

    if options.list_only {
        write_listing(&context.session, out)?;
        return Ok(context);
    }

    let outcome = context.session.export(saver)?;
    context.record_outcome(outcome);

    info!(
        "Finished: {} listed, {} excluded, {} exported",
        context.stats.files_listed, context.stats.files_excluded, context.stats.rows_exported
    );
    Ok(context)
}
