//! Error types for mipviewlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading MIP tables or writing views of them
#[derive(Error, Debug)]
pub enum MipViewError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write an output file
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A table file is not valid JSON
    #[error("failed to parse JSON in '{path}': {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// A table's JSON does not have the expected shape
    #[error("malformed table '{path}': {message}")]
    MalformedTable { path: PathBuf, message: String },

    /// No variable node to derive a GEXF attribute schema from
    #[error("graph has no variable nodes; nothing to derive GEXF attributes from")]
    EmptyGraph,

    /// XML serialization failed
    #[error("XML error: {0}")]
    Xml(String),
}
