use std::process::ExitCode;

use chrono::Local;
use clap::{CommandFactory, Parser};
use log::debug;

use anchor_cli::cli_args::{Args, Commands};
use anchor_cli::{commands, listing};
use anchor_core::config;
use anchor_core::database::SqliteStore;
use anchor_core::error::{Error, Result};
use anchor_core::execution::Sink;
use anchor_core::file_handling::get_settings;
use anchor_core::input::{parse, Input};
use anchor_core::transfer::ImportSource;

/// Paths resolved from the command line
struct Paths {
    config: String,
    database: String,
}

fn open_store(paths: &Paths) -> Result<SqliteStore> {
    SqliteStore::open(&paths.database)
}

fn print_help() -> Result<()> {
    Args::command()
        .print_help()
        .map_err(|e| Error::io_error("help output".to_string(), "stdout".to_string(), e))
}

/// Handles `anchor key='value'` and `anchor key [args...]`
fn execute_input(args: &Args, paths: &Paths) -> Result<()> {
    let tokens = args.input_tokens();

    if tokens.is_empty() {
        return print_help();
    }

    match parse(&tokens)? {
        Input::Assignment { key, value } => {
            let mut store = open_store(paths)?;
            commands::create(&mut store, &key, &value)?;
            println!("Anchor successfully created, key={key:?} value={value:?}.");
        }
        Input::Lookup { key, args: arguments } => {
            let value = {
                let store = open_store(paths)?;
                commands::lookup(&store, &key, &arguments)?
            };

            if args.dry_run {
                println!("{value}");
                return Ok(());
            }

            let settings = get_settings(&paths.config)?;
            let (clipboard, opener) = commands::sinks_from_settings(&settings);

            commands::deliver(
                &value,
                &clipboard,
                opener.as_ref().map(|opener| opener as &dyn Sink),
            )?;
        }
    }

    Ok(())
}

fn execute_command(command: Commands, paths: &Paths) -> Result<()> {
    match command {
        Commands::Ls { filter } => {
            let store = open_store(paths)?;
            let anchors = commands::list(&store, filter.as_deref())?;
            listing::print_table(&anchors);
        }
        Commands::Update { assignment } => {
            let mut store = open_store(paths)?;
            let anchor = commands::update(&mut store, &assignment)?;
            println!(
                "Anchor successfully updated, key={:?} value={:?}.",
                anchor.key, anchor.value
            );
        }
        Commands::Delete { key } => {
            let mut store = open_store(paths)?;
            commands::delete(&mut store, &key)?;
            println!("Anchor successfully deleted, key={key:?}.");
        }
        Commands::Reset => {
            let mut store = open_store(paths)?;
            commands::reset(&mut store)?;
            println!("Anchors have been successfully reset");
        }
        Commands::Export { path } => {
            let store = open_store(paths)?;
            let (written, count) = commands::export(&store, &path, Local::now().date_naive())?;
            println!(
                "CSV file with {count} anchors successfully created at path={:?}",
                written.display().to_string()
            );
        }
        Commands::Import { path, url } => {
            let source = ImportSource::from_options(path, url)?;
            let anchors = source.read_anchors()?;

            let mut store = open_store(paths)?;
            let inserted = commands::import(&mut store, &anchors)?;
            println!("CSV file successfully imported from {source}, {inserted} new anchors");
        }
    }

    Ok(())
}

fn execute() -> Result<()> {
    let mut args = Args::parse();

    let paths = Paths {
        config: config::get_config_path(&args.config_path),
        database: config::get_database_path(&args.database_path),
    };
    debug!("Config path: `{}`", paths.config);
    debug!("Database path: `{}`", paths.database);

    match args.command.take() {
        Some(command) => execute_command(command, &paths),
        None => execute_input(&args, &paths),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
