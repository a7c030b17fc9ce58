//! CLI error type.

use std::io;
use std::path::PathBuf;

/// Everything that can stop a command. The highlighter itself never fails;
/// only reading input and serializing output can.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read standard input: {0}")]
    Stdin(#[source] io::Error),

    #[error("cannot serialize result: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Usage(String),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
