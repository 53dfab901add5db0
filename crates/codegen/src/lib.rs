//! Go source generation for packed bitmaps.
//!
//! Turns a packed byte sequence and its dimensions into a Go file declaring a
//! `[]byte` literal plus width/height constants, and derives Go identifiers
//! from file names.

pub mod emit;
pub mod identifier;

use std::path::PathBuf;

// Re-exports for convenience
pub use emit::{EmitOptions, GoArray, generate_go_file, write_go_source};
pub use identifier::{identifier_from_path, is_valid_identifier, to_identifier};

/// Errors that can occur while generating source code.
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    #[error("Failed to create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Write error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0:?} is not a valid Go identifier")]
    InvalidIdentifier(String),

    #[error("{0:?} is not a valid Go package name")]
    InvalidPackage(String),

    #[error("Bytes per line must be at least 1")]
    ZeroBytesPerLine,
}

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;
