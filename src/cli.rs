use std::path::Path;

use atty::Stream;
use clap::{
    Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_description, crate_name,
    crate_version, value_parser,
};

use crate::constants::{
    CONFIG_HELP, DEFAULT_CONFIG_PATH, EXCLUDE_HELP, FROM_LIST_HELP, INTERACTIVE_HELP, LIST_HELP,
    LOCAL_LOGGING_HELP, LOG_FILE_DEFAULT, LOG_FILE_HELP, OUTPUT_HELP, PATHS_HELP, PREFIX_HELP,
    REMOVE_PATTERN_HELP, VERBOSE_HELP, WAIT_HELP,
};
use crate::logging::LogLevel;
use crate::utils::find_project_folder;

/// Checks if stdout is a terminal and waits for user input if it is
///
/// This function is used to prevent the console window from closing
/// immediately after the program finishes when run from a GUI.
pub fn check_for_stdout_stream() {
    if atty::is(Stream::Stdout) {
        dont_disappear::enter_to_continue::default();
    }
}

/// Builds the command-line interface
///
/// Defines the following arguments:
/// - `paths`: Files and folders handled like a drop
/// - `from_list`: Relative paths handled like a picker selection
/// - `prefix`, `remove_pattern`: Transformation parameters
/// - `output`: Export destination
/// - `exclude`: Positions removed before exporting
/// - `list`, `interactive`: Alternative modes
/// - `config`, `verbose`, `log_file`, `log_locally`, `wait`: Housekeeping
pub fn build_command() -> Command {
    let arg_paths = Arg::new("paths")
        .help(PATHS_HELP)
        .num_args(0..)
        .action(ArgAction::Append);

    let arg_from_list = Arg::new("from_list")
        .short('L')
        .long("from-list")
        .value_name("FILE")
        .help(FROM_LIST_HELP)
        .conflicts_with("paths");

    let arg_prefix = Arg::new("prefix")
        .short('p')
        .long("prefix")
        .help(PREFIX_HELP)
        .allow_hyphen_values(true);

    let arg_remove_pattern = Arg::new("remove_pattern")
        .short('r')
        .long("remove-pattern")
        .value_name("REGEX")
        .help(REMOVE_PATTERN_HELP)
        .allow_hyphen_values(true);

    let arg_output = Arg::new("output")
        .short('o')
        .long("output")
        .value_name("PATH")
        .help(OUTPUT_HELP)
        .allow_hyphen_values(true);

    let arg_exclude = Arg::new("exclude")
        .short('x')
        .long("exclude")
        .value_name("INDEX")
        .help(EXCLUDE_HELP)
        .value_parser(value_parser!(usize))
        .action(ArgAction::Append);

    let arg_list = Arg::new("list")
        .short('l')
        .long("list")
        .help(LIST_HELP)
        .action(ArgAction::SetTrue);

    let arg_interactive = Arg::new("interactive")
        .short('i')
        .long("interactive")
        .help(INTERACTIVE_HELP)
        .action(ArgAction::SetTrue)
        .conflicts_with("list");

    // define arg for reading from a specific config file
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .help(CONFIG_HELP)
        .default_value(DEFAULT_CONFIG_PATH);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count);

    // define arg for log file
    let log_file = Arg::new("log_file")
        .long("log-file")
        .help(LOG_FILE_HELP)
        .default_value(LOG_FILE_DEFAULT);

    // define arg for local logging
    let log_locally = Arg::new("log_locally")
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .action(ArgAction::SetTrue);

    let arg_wait = Arg::new("wait")
        .short('w')
        .long("wait")
        .help(WAIT_HELP)
        .action(ArgAction::SetTrue);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_paths)
        .arg(arg_from_list)
        .arg(arg_prefix)
        .arg(arg_remove_pattern)
        .arg(arg_output)
        .arg(arg_exclude)
        .arg(arg_list)
        .arg(arg_interactive)
        .arg(arg_config)
        .arg(log_file)
        .arg(log_locally)
        .arg(arg_verbose)
        .arg(arg_wait)
}

/// Sets up and returns command-line argument matches
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the verbosity level from the command-line arguments
///
/// # Examples
/// ```
/// # use clap::ArgMatches;
/// # use folder_csv::cli::get_verbosity;
/// # use folder_csv::logging::LogLevel;
/// # fn example(matches: &ArgMatches) {
/// let verbosity = get_verbosity(matches);
///
/// match verbosity {
///     LogLevel::Info => println!("Running with normal output"),
///     LogLevel::Debug => println!("Running with debug output"),
///     _ => {}
/// }
/// # }
/// ```
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// Where the log file goes
///
/// Without `--log-locally` the file is placed in the config directory. When
/// that directory is unavailable the file name is used as given.
pub fn get_log_file(matches: &ArgMatches) -> String {
    let filename = matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string());
    if matches.get_flag("log_locally") {
        return filename;
    }
    let folder = find_project_folder().ok();
    log_file_in(filename, folder.as_ref().map(|dirs| dirs.config_dir()))
}

fn log_file_in(filename: String, config_dir: Option<&Path>) -> String {
    match config_dir {
        Some(dir) if !filename.is_empty() => dir.join(filename).to_string_lossy().into_owned(),
        _ => filename,
    }
}
