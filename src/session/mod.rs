//! Session module
//!
//! This module holds the state edited by the user: the file list and the
//! transformation parameters.

mod file_list;
mod state;

pub use file_list::{FileEntry, FileList};
pub use state::Session;
