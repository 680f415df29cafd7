// Copyright (c) 2026 the codepack contributors
// SPDX-License-Identifier: Apache-2.0

use std::error::Error as _;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to write output file {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read root directory {}: {source}", path.display())]
    Traverse {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Validation error: {message}\nSuggestion: {suggestion}")]
    Validation { message: String, suggestion: String },
}

impl PackError {
    pub fn output(path: &Path, source: std::io::Error) -> Self {
        PackError::Output {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn traverse(path: &Path, source: std::io::Error) -> Self {
        PackError::Traverse {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn invalid_extension(extension: &str) -> Self {
        PackError::Validation {
            message: format!("Invalid file extension: '{}'", extension),
            suggestion: "Pass a non-empty suffix such as '.dart' or 'rs'".to_string(),
        }
    }

    pub fn invalid_order(order: &str) -> Self {
        PackError::Validation {
            message: format!("Invalid traversal order: '{}'", order),
            suggestion: "Valid orders are: sorted, filesystem".to_string(),
        }
    }

    /// Short hint shown under the error message, if one applies.
    fn hint(&self) -> Option<&'static str> {
        match self {
            PackError::Output { .. } => {
                Some("Check that the output directory exists and is writable")
            }
            PackError::Traverse { .. } => {
                Some("Check the permissions on the root directory or pass a different root")
            }
            PackError::Config(_) => Some("Check codepack.toml and CODEPACK_* variables"),
            PackError::Validation { .. } => None,
        }
    }
}

/// Format a `PackError` for display on stderr.
///
/// In verbose mode the full `source()` chain is listed under the message.
pub fn format_error(error: &PackError, verbose: bool) -> String {
    let mut out = format!("\n\u{26a0} Error: {}", error);

    if let Some(hint) = error.hint() {
        out.push_str(&format!("\n  hint: {}", hint));
    }

    if verbose {
        let mut source = error.source();
        while let Some(cause) = source {
            out.push_str(&format!("\n  caused by: {}", cause));
            source = cause.source();
        }
    }

    out
}
