//! Terminal driver for the signup form validator.
//!
//! Reads field events as line commands (from stdin or a script) and prints
//! how each field's styling and error message change.

mod command;
mod config;
mod error;
mod paths;
mod session;
mod terminal;

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::Parser;
use formguard_lib::Coordinator;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::CliError;
use crate::terminal::TerminalSurface;

/// Command-line arguments for formguard
#[derive(Parser, Debug)]
#[command(name = "formguard")]
#[command(about = "Drive the signup form validator from the terminal")]
#[command(version)]
struct Args {
    /// Read commands from this file instead of stdin
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Form configuration (JSON)
    #[arg(short, long, env = "FORMGUARD_CONFIG")]
    config: Option<PathBuf>,

    /// Log file (defaults to the platform cache directory)
    #[arg(long, env = "FORMGUARD_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", value_parser = parse_level)]
    log_level: LevelFilter,
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    s.parse().map_err(|_| format!("invalid log level: {}", s))
}

fn main() {
    let args = Args::parse();
    init_logging(&args);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Install the file logger. Logging is skipped if no log file can be opened.
fn init_logging(args: &Args) {
    let Some(path) = args.log_file.clone().or_else(paths::log_file) else {
        return;
    };
    if let Some(dir) = path.parent() {
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Warning: cannot create log directory {}: {}", dir.display(), e);
        }
    }
    match File::create(&path) {
        Ok(file) => {
            if WriteLogger::init(args.log_level, Config::default(), file).is_err() {
                eprintln!("Warning: logger already initialized");
            }
        }
        Err(e) => eprintln!("Warning: cannot open log file {}: {}", path.display(), e),
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = config::load(args.config.as_deref())?;
    let mut form = Coordinator::with_config(TerminalSurface::new(io::stdout()), config);

    match args.script {
        Some(path) => {
            info!("running script {}", path.display());
            let file = File::open(&path)?;
            session::run(&mut form, BufReader::new(file))?;
        }
        None => {
            info!("reading commands from stdin");
            form.surface_mut().print(command::HELP);
            session::run(&mut form, io::stdin().lock())?;
        }
    }

    let accepted = form.surface().inner().acknowledgments().len();
    info!("{} submission(s) accepted", accepted);
    Ok(())
}
