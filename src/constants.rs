/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// This is the name used for the configuration and log folder.
pub const APPLICATION: &str = "folder_csv";

/// File name offered for every export
pub const EXPORT_FILE_NAME: &str = "filenames.csv";

/// Name of the single CSV column
pub const CSV_COLUMN: &str = "filename";

/// Number of entries requested from a directory per read call
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Marker used on the command line for standard input and output
pub const STDIO_MARKER: &str = "-";

/// Default path for the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Default name of the log file
pub const LOG_FILE_DEFAULT: &str = "folder_csv.log";

/// Help text for the positional paths
pub const PATHS_HELP: &str = "Files and folders to list (folders are walked recursively)";

/// Help text for the selection list option
pub const FROM_LIST_HELP: &str =
    "Read relative file paths, one per line, from a file (use - for standard input)";

/// Help text for the prefix option
pub const PREFIX_HELP: &str = "Text prepended to every exported name";

/// Help text for the removal pattern option
pub const REMOVE_PATTERN_HELP: &str =
    "Regular expression whose matches are removed from every exported name";

/// Help text for the output option
pub const OUTPUT_HELP: &str = "Where to save the CSV (file, folder, or - for standard output)";

/// Help text for the exclude option
pub const EXCLUDE_HELP: &str = "Drop the file shown at this index before exporting (repeatable)";

/// Help text for the list option
pub const LIST_HELP: &str = "Only print the numbered file list, do not export";

/// Help text for the interactive option
pub const INTERACTIVE_HELP: &str = "Edit the list and export from an interactive prompt";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read from a specific config file";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file option
pub const LOG_FILE_HELP: &str = "Name of the log file";

/// Help text for the local logging option
pub const LOCAL_LOGGING_HELP: &str =
    "Write the log file to the current folder instead of the configuration folder";

/// Help text for the wait option
pub const WAIT_HELP: &str = "Wait for Enter before closing when run in a terminal";
