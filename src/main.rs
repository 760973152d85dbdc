use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::ArgMatches;
use human_panic::setup_panic;
use log::{debug, error, info};

use folder_csv::cli::{check_for_stdout_stream, get_log_file, get_matches, get_verbosity};
use folder_csv::config::{Config, load_or_default};
use folder_csv::logging::init_logger;
use folder_csv::session::Session;
use folder_csv::workflow::{
    InputSource, InteractiveOptions, ProcessingOptions, build_payload, process_files,
    run_interactive,
};

fn main() -> ExitCode {
    setup_panic!();

    let matches = get_matches();
    let code = match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if log::log_enabled!(log::Level::Error) {
                error!("{e:#}");
            } else {
                eprintln!("{e:#}");
            }
            ExitCode::FAILURE
        }
    };

    if matches.get_flag("wait") {
        check_for_stdout_stream();
    }
    code
}

fn run(matches: &ArgMatches) -> Result<()> {
    let log_file = get_log_file(matches);
    init_logger(get_verbosity(matches), &log_file)?;

    let config_name = matches
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or_default();
    let mut config = load_or_default(config_name)?;
    apply_overrides(&mut config, matches);
    debug!("Effective configuration: {config:?}");

    let input = match input_source(matches) {
        Some(input) if !matches.get_flag("interactive") => input,
        input => return interactive(config, input),
    };

    let options = ProcessingOptions {
        input,
        transform: config.transform,
        output: config.output,
        exclude: matches
            .get_many::<usize>("exclude")
            .map(|values| values.copied().collect())
            .unwrap_or_default(),
        list_only: matches.get_flag("list"),
        batch_size: config.batch_size,
    };

    process_files(&options, &mut io::stdout().lock())?;
    Ok(())
}

fn interactive(config: Config, input: Option<InputSource>) -> Result<()> {
    let mut session = Session::new(config.transform);
    let options = InteractiveOptions {
        output: config.output,
        batch_size: config.batch_size,
    };

    if let Some(input) = input {
        let payload = build_payload(&input, options.batch_size)?;
        match session.ingest_drop(&payload) {
            Ok(count) => info!("Listed {count} files"),
            Err(e) if e.is_empty_selection() => info!("No files found"),
            Err(e) => return Err(e.into()),
        }
    }

    run_interactive(
        &mut session,
        &options,
        io::stdin().lock(),
        &mut io::stdout().lock(),
    )?;
    Ok(())
}

/// Command-line values take precedence over the configuration file
fn apply_overrides(config: &mut Config, matches: &ArgMatches) {
    if let Some(prefix) = matches.get_one::<String>("prefix") {
        config.transform.prefix = prefix.clone();
    }
    if let Some(pattern) = matches.get_one::<String>("remove_pattern") {
        config.transform.remove_pattern = pattern.clone();
    }
    if let Some(output) = matches.get_one::<String>("output") {
        config.output = Some(output.clone());
    }
}

fn input_source(matches: &ArgMatches) -> Option<InputSource> {
    if let Some(list) = matches.get_one::<String>("from_list") {
        return Some(InputSource::SelectionList(list.clone()));
    }
    matches
        .get_many::<String>("paths")
        .map(|paths| InputSource::Paths(paths.map(PathBuf::from).collect()))
}
