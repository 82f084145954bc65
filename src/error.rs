//! The [`HubError`] `enum` definition and error messages.
//!
use std::path::PathBuf;
use thiserror::Error;

use crate::parsers::Category;

/// The [`HubError`] defines the standard set of errors that should
/// be passed to the user.
#[derive(Debug, Error)]
pub enum HubError {
    // IO related errors
    #[error("File reading error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("{} input file not found at {}", .0.title(), .1.display())]
    ListFileNotFound(Category, PathBuf),

    // Filename parsing related errors
    #[error("Could not extract identifier from filename: {0}. Skipping.")]
    UnidentifiedFilename(String),
    #[error("Could not parse {0} filename: {1}. Skipping.")]
    MalformedFilename(Category, String),
    #[error("Unknown file type for TF track: {0}. Skipping.")]
    UnknownFileType(String),

    // Category level errors
    #[error("No valid {0} data found in {}", .1.display())]
    EmptyCategory(Category, PathBuf),

    // Command line tool related errors
    #[error("Could not parse configuration file: {0}")]
    ConfigError(#[from] serde_yaml::Error),
    #[error("Command line argument error: {0}")]
    ArgumentError(#[from] clap::error::Error),
}

impl HubError {
    /// Whether this error only concerns a single list line, which is skipped
    /// while the rest of the category is still generated.
    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            HubError::UnidentifiedFilename(_)
                | HubError::MalformedFilename(..)
                | HubError::UnknownFileType(_)
        )
    }

    /// The `#` comment line this error is reported as in trackDb output.
    pub fn to_comment(&self) -> String {
        match self {
            e if e.is_skip() => format!("# Warning: {}", e),
            HubError::ListFileNotFound(..) => format!("# Error: {}", self),
            HubError::EmptyCategory(..) => format!("# {}", self),
            e => format!("# An error occurred: {}", e),
        }
    }
}
