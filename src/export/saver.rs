//! Saving the exported document
//!
//! A saver receives the finished document and a suggested file name.

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::NamedTempFile;

use crate::errors::{Result, file_operation_error};

/// Where an export ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveLocation {
    File(PathBuf),
    Stdout,
}

impl fmt::Display for SaveLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveLocation::File(path) => write!(f, "{}", path.display()),
            SaveLocation::Stdout => f.write_str("standard output"),
        }
    }
}

/// Receives a finished export
pub trait FileSaver {
    fn save(&mut self, suggested_name: &str, contents: &[u8]) -> Result<SaveLocation>;
}

/// Saves exports to disk
///
/// Without a destination the suggested name is used in the current folder.
/// A destination that is an existing folder receives the suggested name,
/// any other destination is used as the file path. The document is written
/// to a temporary file next to the target and then moved into place, so a
/// failed save never leaves a partial file behind.
#[derive(Debug, Clone, Default)]
pub struct DiskSaver {
    destination: Option<PathBuf>,
}

impl DiskSaver {
    pub fn new(destination: Option<PathBuf>) -> Self {
        DiskSaver { destination }
    }

    /// The path a document with the suggested name would be saved to
    pub fn resolve(&self, suggested_name: &str) -> PathBuf {
        match &self.destination {
            None => PathBuf::from(suggested_name),
            Some(path) if path.is_dir() => path.join(suggested_name),
            Some(path) => path.clone(),
        }
    }
}

impl FileSaver for DiskSaver {
    fn save(&mut self, suggested_name: &str, contents: &[u8]) -> Result<SaveLocation> {
        let target = self.resolve(suggested_name);
        let folder = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut temporary = NamedTempFile::new_in(&folder)
            .map_err(|e| file_operation_error(e, folder.clone(), "create temporary"))?;
        temporary
            .write_all(contents)
            .and_then(|_| temporary.flush())
            .map_err(|e| file_operation_error(e, temporary.path().to_path_buf(), "write"))?;
        make_readable(temporary.path())?;

        temporary
            .persist(&target)
            .map_err(|e| file_operation_error(e.error, target.clone(), "save"))?;

        debug!("Saved {} bytes to {}", contents.len(), target.display());
        Ok(SaveLocation::File(target))
    }
}

/// Writes exports to standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSaver;

impl FileSaver for StdoutSaver {
    fn save(&mut self, _suggested_name: &str, contents: &[u8]) -> Result<SaveLocation> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(contents)
            .and_then(|_| stdout.flush())
            .map_err(|e| file_operation_error(e, PathBuf::from("<stdout>"), "write"))?;
        Ok(SaveLocation::Stdout)
    }
}

// Temporary files are created owner-only
#[cfg(unix)]
fn make_readable(path: &Path) -> Result<()> {
    use std::fs::{Permissions, set_permissions};
    use std::os::unix::fs::PermissionsExt;

    set_permissions(path, Permissions::from_mode(0o644))
        .map_err(|e| file_operation_error(e, path.to_path_buf(), "set permissions on"))
}

#[cfg(not(unix))]
fn make_readable(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_resolve() {
        let temp_dir = tempdir().unwrap();

        assert_eq!(
            DiskSaver::new(None).resolve("filenames.csv"),
            PathBuf::from("filenames.csv")
        );
        assert_eq!(
            DiskSaver::new(Some(temp_dir.path().to_path_buf())).resolve("filenames.csv"),
            temp_dir.path().join("filenames.csv")
        );

        let explicit = temp_dir.path().join("custom.csv");
        assert_eq!(
            DiskSaver::new(Some(explicit.clone())).resolve("filenames.csv"),
            explicit
        );
    }

    #[test]
    fn test_save_into_folder() {
        let temp_dir = tempdir().unwrap();
        let mut saver = DiskSaver::new(Some(temp_dir.path().to_path_buf()));

        let location = saver.save("filenames.csv", b"filename\r\na\r\n").unwrap();
        let expected = temp_dir.path().join("filenames.csv");

        assert_eq!(location, SaveLocation::File(expected.clone()));
        assert_eq!(fs::read(expected).unwrap(), b"filename\r\na\r\n");
        // Only the target is left behind
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_save_replaces_existing_file() {
        let temp_dir = tempdir().unwrap();
        let target = temp_dir.path().join("out.csv");
        fs::write(&target, "old").unwrap();

        DiskSaver::new(Some(target.clone()))
            .save("filenames.csv", b"new")
            .unwrap();
        assert_eq!(fs::read_to_string(target).unwrap(), "new");
    }

    #[test]
    fn test_save_into_missing_folder_fails() {
        let temp_dir = tempdir().unwrap();
        let target = temp_dir.path().join("missing").join("out.csv");

        let result = DiskSaver::new(Some(target.clone())).save("filenames.csv", b"x");
        assert!(result.is_err());
        assert!(!target.exists());
    }
}
