//! Error types for mdpage
//!
//! Every failure is fatal to the single conversion run; the binary turns
//! these into a categorized console message and a non-zero exit status.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Main error type for a conversion run
#[derive(Error, Debug)]
pub enum ConvertError {
    /// An option that takes a value was the last token
    #[error("missing value for '{flag}'")]
    MissingArgumentValue { flag: String },

    /// Input or output path has the wrong file extension
    #[error("invalid extension for '{path}': expected one of {}", describe_extensions(.expected))]
    InvalidExtension {
        path: PathBuf,
        expected: &'static [&'static str],
    },

    /// Input path does not exist at read time
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Any other I/O or rendering failure
    #[error(transparent)]
    GenericFailure(#[from] anyhow::Error),
}

fn describe_extensions(extensions: &[&str]) -> String {
    extensions
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(", ")
}
