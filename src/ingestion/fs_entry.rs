//! Filesystem backed drop entries
//!
//! Paths given on the command line play the role of dropped items. Their
//! directories are listed with `read_dir`, handed out in fixed size batches.

use std::fs::{ReadDir, read_dir};
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::entry::{DirectoryEntry, DropPayload, EntryReader};
use crate::constants::DEFAULT_BATCH_SIZE;
use crate::errors::{Result, file_operation_error, generic_error, invalid_filename_error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Directory,
    Other,
}

/// A file or directory on disk
#[derive(Debug, Clone)]
pub struct FsEntry {
    path: PathBuf,
    name: String,
    kind: EntryKind,
    batch_size: usize,
}

impl FsEntry {
    /// Creates an entry for an existing path, following symbolic links
    ///
    /// # Errors
    /// * Returns a file operation error when the path cannot be inspected
    ///   or is neither a file nor a directory
    /// * Returns an invalid filename error when the name is not valid UTF-8
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = path
            .metadata()
            .map_err(|e| file_operation_error(e, path.to_path_buf(), "read"))?;

        let kind = if metadata.is_file() {
            EntryKind::File
        } else if metadata.is_dir() {
            EntryKind::Directory
        } else {
            return Err(file_operation_error(
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "neither a file nor a directory",
                ),
                path.to_path_buf(),
                "list",
            ));
        };

        Ok(FsEntry {
            path: path.to_path_buf(),
            name: entry_name(path)?,
            kind,
            batch_size: DEFAULT_BATCH_SIZE,
        })
    }

    /// Sets how many entries a directory reader returns per call
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn child(&self, path: PathBuf) -> Result<Self> {
        let name = entry_name(&path)?;
        let kind = match path.symlink_metadata() {
            Ok(metadata) if metadata.is_file() => EntryKind::File,
            Ok(metadata) if metadata.is_dir() => EntryKind::Directory,
            Ok(metadata) if metadata.file_type().is_symlink() => link_kind(&path),
            Ok(_) => EntryKind::Other,
            Err(e) => {
                warn!("Skipping {}: {e}", path.display());
                EntryKind::Other
            }
        };

        Ok(FsEntry {
            path,
            name,
            kind,
            batch_size: self.batch_size,
        })
    }
}

/// Links to files are listed, links to directories are not walked
fn link_kind(path: &Path) -> EntryKind {
    match path.metadata() {
        Ok(metadata) if metadata.is_file() => EntryKind::File,
        Ok(metadata) if metadata.is_dir() => {
            debug!("Not following directory link {}", path.display());
            EntryKind::Other
        }
        Ok(_) => EntryKind::Other,
        Err(e) => {
            warn!("Skipping {}: {e}", path.display());
            EntryKind::Other
        }
    }
}

impl DirectoryEntry for FsEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    fn create_reader(&self) -> Result<Box<dyn EntryReader + '_>> {
        if !self.is_directory() {
            return Err(generic_error(&format!(
                "Not a directory: {}",
                self.path.display()
            )));
        }

        let inner = read_dir(&self.path)
            .map_err(|e| file_operation_error(e, self.path.clone(), "list"))?;
        Ok(Box::new(FsEntryReader {
            parent: self,
            inner,
        }))
    }
}

/// Reads a directory `batch_size` entries at a time
pub struct FsEntryReader<'a> {
    parent: &'a FsEntry,
    inner: ReadDir,
}

impl EntryReader for FsEntryReader<'_> {
    fn read_entries(&mut self) -> Result<Vec<Box<dyn DirectoryEntry>>> {
        let mut batch: Vec<Box<dyn DirectoryEntry>> = Vec::with_capacity(self.parent.batch_size);
        while batch.len() < self.parent.batch_size {
            let Some(entry) = self.inner.next() else {
                break;
            };
            let entry =
                entry.map_err(|e| file_operation_error(e, self.parent.path.clone(), "list"))?;
            batch.push(Box::new(self.parent.child(entry.path())?));
        }
        Ok(batch)
    }
}

impl DropPayload {
    /// Builds a payload from paths on disk
    ///
    /// No paths give [`DropPayload::Empty`].
    ///
    /// # Errors
    /// Returns an error for the first path that cannot be inspected
    pub fn from_paths<P: AsRef<Path>>(paths: &[P], batch_size: usize) -> Result<Self> {
        if paths.is_empty() {
            return Ok(DropPayload::Empty);
        }

        let mut items: Vec<Box<dyn DirectoryEntry>> = Vec::with_capacity(paths.len());
        for path in paths {
            let entry = FsEntry::from_path(path.as_ref())?.with_batch_size(batch_size);
            debug!(
                "Dropped {} ({})",
                entry.path().display(),
                if entry.is_directory() { "directory" } else { "file" }
            );
            items.push(Box::new(entry));
        }
        Ok(DropPayload::Items(items))
    }
}

/// Last component of a path, or the whole path for `.`, `..` and roots
fn entry_name(path: &Path) -> Result<String> {
    match path.file_name() {
        Some(name) => name
            .to_str()
            .map(str::to_string)
            .ok_or_else(|| invalid_filename_error(path.to_path_buf())),
        None => Ok(path.display().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::ingestion::{ingest_drop, read_directory};
    use std::fs::{File, create_dir_all};
    use tempfile::tempdir;

    #[test]
    fn test_reader_returns_batches_then_empty() {
        let temp_dir = tempdir().unwrap();
        for i in 0..5 {
            File::create(temp_dir.path().join(format!("f{i}.txt"))).unwrap();
        }

        let entry = FsEntry::from_path(temp_dir.path())
            .unwrap()
            .with_batch_size(2);
        let mut reader = entry.create_reader().unwrap();

        let sizes: Vec<usize> = std::iter::from_fn(|| {
            let batch = reader.read_entries().unwrap();
            (!batch.is_empty()).then_some(batch.len())
        })
        .collect();
        assert_eq!(sizes, vec![2, 2, 1]);
        assert!(reader.read_entries().unwrap().is_empty());
    }

    #[test]
    fn test_read_directory_walks_subfolders() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        create_dir_all(&nested).unwrap();
        File::create(temp_dir.path().join("top.txt")).unwrap();
        File::create(nested.join("deep.txt")).unwrap();
        File::create(nested.join(".hidden")).unwrap();

        let entry = FsEntry::from_path(temp_dir.path()).unwrap();
        let mut names = read_directory(&entry).unwrap();
        names.sort();
        assert_eq!(names, vec!["deep.txt", "top.txt"]);
    }

    #[test]
    fn test_file_entry_cannot_be_read() {
        let temp_dir = tempdir().unwrap();
        let file = temp_dir.path().join("single.txt");
        File::create(&file).unwrap();

        let entry = FsEntry::from_path(&file).unwrap();
        assert!(entry.is_file());
        assert_eq!(entry.name(), "single.txt");
        assert!(entry.create_reader().is_err());
    }

    #[test]
    fn test_missing_path_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let result = FsEntry::from_path(&temp_dir.path().join("missing"));
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_special_file_is_rejected() {
        let result = FsEntry::from_path(Path::new("/dev/null"));
        assert!(matches!(result, Err(Error::FileOperation { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_links_are_not_walked() {
        use std::os::unix::fs::symlink;

        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().join("root");
        create_dir_all(&root).unwrap();
        File::create(root.join("a.txt")).unwrap();
        symlink(&root, root.join("loop")).unwrap();
        symlink(&root, root.join("again")).unwrap();
        symlink(root.join("a.txt"), root.join("b.txt")).unwrap();

        let entry = FsEntry::from_path(&root).unwrap().with_batch_size(1);
        let mut names = read_directory(&entry).unwrap();
        names.sort();

        // The file link is listed once, the cycles are skipped
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_from_paths() {
        let temp_dir = tempdir().unwrap();
        File::create(temp_dir.path().join("one.md")).unwrap();

        let empty: [&Path; 0] = [];
        assert!(matches!(
            DropPayload::from_paths(&empty, 10).unwrap(),
            DropPayload::Empty
        ));

        let payload = DropPayload::from_paths(&[temp_dir.path()], 10).unwrap();
        assert_eq!(ingest_drop(&payload).unwrap(), vec!["one.md"]);
    }
}
