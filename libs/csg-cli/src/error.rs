//! Error type for the CSG CLI.

use thiserror::Error;

/// Errors the CLI can report.
#[derive(Debug, Error)]
pub enum CliError {
    /// File read or write failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Lex or parse failure, carrying its source position.
    #[error(transparent)]
    Parse(#[from] csg_parser::ParseError),

    /// Parse-tree JSON serialization failure.
    #[error("tree serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
