use std::fs;
use std::path::PathBuf;

use folder_csv::errors::{Error, Result};
use folder_csv::export::{DiskSaver, ExportOutcome, FileSaver, SaveLocation};
use folder_csv::ingestion::PickedFile;
use folder_csv::session::Session;
use folder_csv::transform::TransformConfig;
use tempfile::tempdir;

/// Keeps every saved document in memory
#[derive(Default)]
struct RecordingSaver {
    saved: Vec<(String, String)>,
}

impl FileSaver for RecordingSaver {
    fn save(&mut self, suggested_name: &str, contents: &[u8]) -> Result<SaveLocation> {
        self.saved.push((
            suggested_name.to_string(),
            String::from_utf8(contents.to_vec()).expect("CSV should be UTF-8"),
        ));
        Ok(SaveLocation::File(PathBuf::from(suggested_name)))
    }
}

fn session_with(names: &[&str], transform: TransformConfig) -> Session {
    let mut session = Session::new(transform);
    let files: Vec<PickedFile> = names.iter().map(|name| PickedFile::new(*name)).collect();
    session.ingest_picked(&files).unwrap();
    session
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_file_never_reaches_the_export() {
        let session = session_with(&["a.txt", "b.txt", ".hidden"], TransformConfig::default());
        assert_eq!(session.files().len(), 2);

        let mut saver = RecordingSaver::default();
        let outcome = session.export(&mut saver).unwrap();

        assert_eq!(
            outcome,
            ExportOutcome::Saved {
                rows: 2,
                location: SaveLocation::File(PathBuf::from("filenames.csv")),
            }
        );
        assert_eq!(saver.saved.len(), 1);
        let (name, document) = &saver.saved[0];
        assert_eq!(name, "filenames.csv");
        assert_eq!(document, "filename\r\na\r\nb\r\n");
    }

    #[test]
    fn test_invalid_pattern_saves_nothing_and_keeps_list() {
        let session = session_with(&["a.txt", "b.txt"], TransformConfig::new("", "("));
        let before = session.files().clone();

        let mut saver = RecordingSaver::default();
        let result = session.export(&mut saver);

        assert!(matches!(result, Err(Error::InvalidPattern { .. })));
        assert!(saver.saved.is_empty(), "No document should be produced");
        assert_eq!(session.files(), &before);
    }

    #[test]
    fn test_empty_list_export_is_a_no_op() {
        let session = Session::default();
        let mut saver = RecordingSaver::default();

        assert_eq!(session.export(&mut saver).unwrap(), ExportOutcome::Skipped);
        assert!(saver.saved.is_empty());
    }

    #[test]
    fn test_export_follows_current_order_after_removal() {
        let mut session = session_with(
            &["IMG_001.jpg", "IMG_002.jpg", "IMG_003.jpg"],
            TransformConfig::new("trip-", "IMG_"),
        );
        session.remove(1).unwrap();

        let mut saver = RecordingSaver::default();
        session.export(&mut saver).unwrap();

        assert_eq!(saver.saved[0].1, "filename\r\ntrip-001\r\ntrip-003\r\n");
        // The stored list still holds raw names
        assert_eq!(
            session.files().names().collect::<Vec<_>>(),
            vec!["IMG_001.jpg", "IMG_003.jpg"]
        );
    }

    #[test]
    fn test_changing_parameters_between_exports() {
        let mut session = session_with(&["file123.txt"], TransformConfig::default());
        let mut saver = RecordingSaver::default();

        session.export(&mut saver).unwrap();
        session.set_remove_pattern("[0-9]+");
        session.export(&mut saver).unwrap();

        assert_eq!(saver.saved[0].1, "filename\r\nfile123\r\n");
        assert_eq!(saver.saved[1].1, "filename\r\nfile\r\n");
    }

    #[test]
    fn test_disk_export_writes_filenames_csv() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let session = session_with(&["report, final.docx"], TransformConfig::default());

        let mut saver = DiskSaver::new(Some(temp_dir.path().to_path_buf()));
        session.export(&mut saver).unwrap();

        let written = fs::read_to_string(temp_dir.path().join("filenames.csv")).unwrap();
        assert_eq!(written, "filename\r\n\"report, final\"\r\n");
    }

    #[test]
    fn test_failed_disk_export_leaves_no_file() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let session = session_with(&["a.txt"], TransformConfig::new("", "[unclosed"));

        let mut saver = DiskSaver::new(Some(temp_dir.path().to_path_buf()));
        assert!(session.export(&mut saver).is_err());
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }
}
