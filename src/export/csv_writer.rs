//! CSV rendering of derived names

use csv::{Terminator, WriterBuilder};
use serde::Serialize;

use crate::constants::CSV_COLUMN;
use crate::errors::{Result, generic_error};

/// One exported row, the field name doubles as the header
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportRecord<'a> {
    pub filename: &'a str,
}

/// Serialises names into a CSV document with a `filename` header
///
/// Records end with CRLF and fields are quoted only when needed. The last
/// record is also followed by CRLF, and an empty name is written as `""`
/// so that it still counts as a row.
pub fn render_csv<S: AsRef<str>>(names: &[S]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(true)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    for name in names {
        writer.serialize(ExportRecord {
            filename: name.as_ref(),
        })?;
    }

    // Without records serde never sees the struct, so write the header by hand
    if names.is_empty() {
        writer.write_record([CSV_COLUMN])?;
    }

    writer
        .into_inner()
        .map_err(|e| generic_error(&format!("Failed to finish CSV document: {}", e.error())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(names: &[&str]) -> String {
        String::from_utf8(render_csv(names).unwrap()).unwrap()
    }

    #[test]
    fn test_header_and_rows() {
        assert_eq!(render(&["a", "b"]), "filename\r\na\r\nb\r\n");
    }

    #[test]
    fn test_quoting() {
        assert_eq!(
            render(&["a,b", "say \"hi\"", "plain"]),
            "filename\r\n\"a,b\"\r\n\"say \"\"hi\"\"\"\r\nplain\r\n"
        );
    }

    #[test]
    fn test_header_only_for_no_names() {
        assert_eq!(render(&[]), "filename\r\n");
    }

    #[test]
    fn test_empty_name_is_quoted() {
        assert_eq!(render(&["", "b"]), "filename\r\n\"\"\r\nb\r\n");
    }

    #[test]
    fn test_unicode_names() {
        assert_eq!(render(&["사진_01"]), "filename\r\n사진_01\r\n");
    }
}
