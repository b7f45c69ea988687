//! Error types for extraction runs.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by single-file and batch extraction.
///
/// Parse failures are recoverable in batch mode (the file is skipped and
/// reported); read failures and a bad `--recursive` target abort the run.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The source text is not syntactically valid Python.
    #[error("{path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// The path does not exist or could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A recursive run was pointed at something that is not a directory.
    #[error("{path} is not a directory")]
    NotADirectory { path: PathBuf },

    /// The grammar could not be loaded into the parser.
    #[error("failed to load the Python grammar: {0}")]
    Language(String),
}
