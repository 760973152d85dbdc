//! Workflow module
//!
//! This module contains the one-shot run and the interactive prompt.

mod context;
mod engine;
mod interactive;
mod listing;

pub use context::{WorkflowContext, WorkflowStats};
pub use engine::{
    InputSource, ProcessingOptions, build_payload, make_saver, process_files,
    process_files_with_saver,
};
pub use interactive::{Command, InteractiveOptions, run_interactive};
pub use listing::write_listing;
