// Copyright (c) 2026 the codepack contributors
// SPDX-License-Identifier: Apache-2.0

//! # codepack
//!
//! codepack walks a project's source directory and concatenates every file with a
//! chosen extension into one plain-text document. Each file is preceded by a
//! `// FILE: <path>` header, so the snapshot can be pasted into an LLM as context.
//!
//! ## Pipeline
//!
//! 1. **Configure** - merge CLI flags, `CODEPACK_*` variables and `codepack.toml`
//!    into a [`PackConfig`]
//! 2. **Discover** - walk the root and collect candidate files
//!    ([`packer::discover_files`])
//! 3. **Write** - stream the banner and one block per file into the output
//!    ([`packer::pack`])
//! 4. **Report** - print the completion notice ([`utils::summary`])
//!
//! Unreadable files never abort a run. They get an `// Error reading file:` marker
//! in place of their content.
//!
//! ## Library usage
//!
//! ```no_run
//! use codepack::PackConfig;
//!
//! let summary = codepack::packer::pack(&PackConfig::default())?;
//! assert!(summary.files >= summary.read_errors);
//! # Ok::<(), codepack::utils::error::PackError>(())
//! ```

pub mod cli;
pub mod packer;
pub mod utils;

use anyhow::{Context, Result};
use packer::TraversalOrder;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Root directory scanned when none is configured.
pub const DEFAULT_ROOT: &str = "lib";
/// File-name suffix packed when none is configured.
pub const DEFAULT_EXTENSION: &str = ".dart";
/// Output document written when none is configured.
pub const DEFAULT_OUTPUT: &str = "full_code_dump.txt";

/// Final resolved configuration after merging CLI flags, environment and config files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackConfig {
    /// Directory to scan recursively
    pub root: PathBuf,
    /// Suffix a file name must end with, e.g. ".dart"
    pub extension: String,
    /// Document to create or truncate
    pub output: PathBuf,
    /// Order of blocks in the document
    pub order: TraversalOrder,
    /// List candidates without writing the document
    pub dry_run: bool,
    /// Verbosity level (0-3)
    pub verbose: u8,
    /// Suppress console notices
    pub quiet: bool,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            extension: DEFAULT_EXTENSION.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            order: TraversalOrder::default(),
            dry_run: false,
            verbose: 0,
            quiet: false,
        }
    }
}

/// Install the global tracing subscriber.
///
/// Logs go to stderr so stdout only carries the console notices. `RUST_LOG`
/// takes precedence over the verbosity flags.
pub fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init()
        .is_err()
    {
        tracing::debug!("Tracing subscriber already installed");
    }
}

/// Run one pack (or dry run) for the given configuration.
pub fn run(config: &PackConfig) -> Result<()> {
    tracing::info!("codepack v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::debug!(
        "Configuration: root={}, extension={}, output={}, order={}",
        config.root.display(),
        config.extension,
        config.output.display(),
        config.order
    );

    if config.dry_run {
        let entries = packer::discover_files(&config.root, &config.extension, config.order)
            .context("Failed to scan root directory")?;
        utils::dry_run::display_dry_run(config, &entries)?;
        return Ok(());
    }

    let summary = packer::pack(config)?;
    utils::summary::display_success_summary(&summary, config.verbose, config.quiet)?;

    Ok(())
}
