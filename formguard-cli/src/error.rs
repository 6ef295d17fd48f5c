use std::io;
use std::path::PathBuf;

use formguard_lib::FormError;
use thiserror::Error;

/// Errors surfaced by the command-line front-end.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("unknown command: {0} (try `help`)")]
    UnknownCommand(String),
    #[error("`{0}` needs a field name")]
    MissingField(&'static str),
}
