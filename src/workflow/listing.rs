//! Printing the numbered file list

use std::io::{self, Write};

use colored::Colorize;
use log::warn;

use crate::logging::format_message;
use crate::session::Session;

/// Writes the list with positions, raw names and export names
///
/// When the removal pattern is invalid only the raw names are shown.
pub fn write_listing(session: &Session, out: &mut dyn Write) -> io::Result<()> {
    let files = session.files();
    writeln!(out, "Files ({}):", files.len())?;

    let derived = match session.derived_names() {
        Ok(names) => Some(names),
        Err(e) => {
            warn!("{e}");
            None
        }
    };

    for (index, entry) in files.iter().enumerate() {
        let position = format!("[{index}]");
        let line = match derived.as_ref().and_then(|names| names.get(index)) {
            Some(name) => format_message(
                &format!("  {position} {entry} -> {name}"),
                &format!("  {} {entry} -> {}", position.bold(), name.green()),
            ),
            None => format_message(
                &format!("  {position} {entry}"),
                &format!("  {} {entry}", position.bold()),
            ),
        };
        writeln!(out, "{line}")?;
    }
    Ok(())
}
