use std::fs::create_dir_all;
use std::path::PathBuf;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::errors::{Result, file_operation_error, generic_error};
use directories::ProjectDirs;
use shellexpand::tilde;

/// Whether a name follows the hidden-file convention (leading dot)
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}

/// Whether a name may enter the file list
pub fn is_listable_name(name: &str) -> bool {
    !name.is_empty() && !is_hidden_name(name)
}

/// Returns the last segment of a `/`-separated relative path
///
/// Backslashes are accepted as separators too, so listings produced on
/// Windows behave the same way.
pub fn last_path_segment(relative_path: &str) -> &str {
    relative_path
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(relative_path)
}

/// Expands a leading `~` in a user supplied path
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(tilde(path).to_string())
}

pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    let folder = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))?;

    if !folder.config_dir().exists() {
        create_dir_all(folder.config_dir()).map_err(|e| {
            file_operation_error(e, folder.config_dir().to_path_buf(), "create directory")
        })?;
    }
    Ok(folder)
}
