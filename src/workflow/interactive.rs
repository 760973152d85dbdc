//! Interactive session
//!
//! A line based prompt for editing the list and the transformation
//! parameters before exporting. Failed commands are reported and the
//! prompt keeps running.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::STDIO_MARKER;
use crate::errors::{Error, Result, generic_error};
use crate::export::{ExportOutcome, FileSaver};
use crate::session::Session;

use super::engine::{InputSource, build_payload, make_saver};
use super::listing::write_listing;

const HELP: &str = "\
Commands:
  load PATH...      list the files in these files and folders
  pick FILE         list the relative paths written in FILE
  list              show the current list
  remove INDEX      drop the file at INDEX
  prefix [TEXT]     set the prefix (empty to clear)
  pattern [REGEX]   set the removal pattern (empty to clear)
  export [PATH]     save the CSV (- for standard output)
  help              show this help
  quit              leave";

/// A parsed prompt line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Load(Vec<PathBuf>),
    Pick(String),
    List,
    Remove(usize),
    Prefix(String),
    Pattern(String),
    Export(Option<String>),
    Help,
    Quit,
}

impl Command {
    /// Parses one prompt line, `Ok(None)` for a blank line
    pub fn parse(line: &str) -> Result<Option<Command>> {
        static COMMAND_PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"^\s*(\S+)(?:\s+(.*))?$")
                .expect("Failed to compile regex pattern for COMMAND_PATTERN")
        });

        let Some(captures) = COMMAND_PATTERN.captures(line) else {
            return Ok(None);
        };
        let name = captures.get(1).map_or("", |m| m.as_str());
        let argument = captures.get(2).map_or("", |m| m.as_str());

        let command = match name.to_lowercase().as_str() {
            "load" | "open" => {
                let paths = shlex::split(argument)
                    .ok_or_else(|| generic_error("Unbalanced quotes in paths"))?;
                if paths.is_empty() {
                    return Err(generic_error("load needs at least one path"));
                }
                Command::Load(paths.into_iter().map(PathBuf::from).collect())
            }
            "pick" => match argument.trim() {
                "" => return Err(generic_error("pick needs a file")),
                file => Command::Pick(file.to_string()),
            },
            "list" | "ls" => Command::List,
            "remove" | "rm" => {
                let index = argument.trim().parse::<usize>().map_err(|_| {
                    generic_error(&format!("remove needs a position, got '{}'", argument.trim()))
                })?;
                Command::Remove(index)
            }
            "prefix" => Command::Prefix(argument.to_string()),
            "pattern" => Command::Pattern(argument.to_string()),
            "export" | "save" => match argument.trim() {
                "" => Command::Export(None),
                path => Command::Export(Some(path.to_string())),
            },
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(generic_error(&format!("Unknown command '{other}'"))),
        };
        Ok(Some(command))
    }
}

/// Settings the prompt needs besides the session
#[derive(Debug, Clone)]
pub struct InteractiveOptions {
    /// Export destination used when `export` has no argument
    pub output: Option<String>,
    pub batch_size: usize,
}

/// Runs the prompt until `quit` or end of input
///
/// Only failures writing to `out` end the loop early.
pub fn run_interactive<R: BufRead>(
    session: &mut Session,
    options: &InteractiveOptions,
    input: R,
    out: &mut dyn Write,
) -> Result<()> {
    writeln!(out, "Type 'help' for the list of commands.")?;
    prompt(out)?;

    for line in input.lines() {
        let line = line?;
        match Command::parse(line.trim_end_matches('\r')) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => return Ok(()),
            Ok(Some(command)) => {
                debug!("Running {command:?}");
                if let Err(e) = execute(session, options, command, out) {
                    report(&e, out)?;
                }
            }
            Err(e) => report(&e, out)?,
        }
        prompt(out)?;
    }
    writeln!(out)?;
    Ok(())
}

fn execute(
    session: &mut Session,
    options: &InteractiveOptions,
    command: Command,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Command::Load(paths) => {
            let payload = build_payload(&InputSource::Paths(paths), options.batch_size)?;
            let count = session.ingest_drop(&payload)?;
            writeln!(out, "Listed {count} files.")?;
        }
        Command::Pick(file) => {
            if file == STDIO_MARKER {
                return Err(generic_error("Standard input is already used by the prompt"));
            }
            let payload = build_payload(&InputSource::SelectionList(file), options.batch_size)?;
            let count = session.ingest_drop(&payload)?;
            writeln!(out, "Listed {count} files.")?;
        }
        Command::List => write_listing(session, out)?,
        Command::Remove(index) => {
            let removed = session.remove(index)?;
            writeln!(out, "Removed {removed}.")?;
        }
        Command::Prefix(prefix) => {
            session.set_prefix(prefix);
            writeln!(out, "Prefix set to '{}'.", session.transform().prefix)?;
        }
        Command::Pattern(pattern) => {
            session.set_remove_pattern(pattern);
            writeln!(
                out,
                "Removal pattern set to '{}'.",
                session.transform().remove_pattern
            )?;
        }
        Command::Export(path) => {
            let destination = path.or_else(|| options.output.clone());
            let mut saver = make_saver(destination.as_deref());
            export(session, saver.as_mut(), out)?;
        }
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => {}
    }
    Ok(())
}

fn export(session: &Session, saver: &mut dyn FileSaver, out: &mut dyn Write) -> Result<()> {
    match session.export(saver)? {
        ExportOutcome::Skipped => writeln!(out, "The list is empty, nothing to export.")?,
        ExportOutcome::Saved { rows, location } => {
            writeln!(out, "Exported {rows} names to {location}.")?
        }
    }
    Ok(())
}

fn report(error: &Error, out: &mut dyn Write) -> Result<()> {
    if error.is_empty_selection() {
        writeln!(out, "No files found. The list was left unchanged.")?;
    } else {
        writeln!(out, "Error: {error}")?;
    }
    Ok(())
}

fn prompt(out: &mut dyn Write) -> Result<()> {
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}
