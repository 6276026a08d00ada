//! Error types for code generation.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Device description parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] afxgen_schema::ParseError),

    /// Device description validation error.
    #[error("schema error: {0}")]
    Schema(#[from] afxgen_schema::SchemaError),

    /// Input document does not exist.
    #[error("{} doesn't exist", path.display())]
    InputNotFound {
        /// Input path.
        path: PathBuf,
    },

    /// Reading a file failed.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Offending path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Writing a generated file failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Offending path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Removing a generated file failed.
    #[error("failed to remove {}: {source}", path.display())]
    Remove {
        /// Offending path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// A block references a block type that is not in the model.
    #[error("block '{block}' references unknown block type id {type_id}")]
    UnresolvedBlockType {
        /// Block display name.
        block: String,
        /// Referenced type id.
        type_id: i32,
    },

    /// Invalid generator configuration.
    #[error("invalid configuration: {message}")]
    Config {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a configuration error with the given message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a write error for the given path.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
