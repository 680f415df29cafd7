// Copyright (c) 2026 the codepack contributors
// SPDX-License-Identifier: Apache-2.0

pub mod document;
pub mod walker;

use crate::PackConfig;
use crate::utils::error::PackError;
use document::{DocumentStats, DocumentWriter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub use walker::{FileEntry, TraversalOrder, discover_files};

/// Outcome of a completed pack run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackSummary {
    /// Where the document was written
    pub output: PathBuf,
    /// Number of file blocks in the document
    pub files: usize,
    /// Blocks that carry an error marker instead of content
    pub read_errors: usize,
    /// Size of the document in bytes
    pub bytes_written: u64,
}

/// Pack every candidate file under `config.root` into `config.output`.
///
/// The output file is created (or truncated) before the walk starts. Failing to
/// create or write it, or failing to list the root directory, aborts the run.
/// Files that cannot be read are recorded inline and do not.
pub fn pack(config: &PackConfig) -> Result<PackSummary, PackError> {
    let file = File::create(&config.output).map_err(|e| PackError::output(&config.output, e))?;
    tracing::debug!("Opened {} for writing", config.output.display());

    let stats = pack_to_writer(config, BufWriter::new(file))?;

    tracing::info!(
        "Packed {} files into {} ({} unreadable)",
        stats.blocks,
        config.output.display(),
        stats.read_errors
    );

    Ok(PackSummary {
        output: config.output.clone(),
        files: stats.blocks,
        read_errors: stats.read_errors,
        bytes_written: stats.bytes_written,
    })
}

/// Write the full document for `config` into an arbitrary sink.
///
/// `config.output` is only consulted to keep the document from packing itself
/// when it lives under the root with a matching name.
pub fn pack_to_writer<W: Write>(config: &PackConfig, writer: W) -> Result<DocumentStats, PackError> {
    let output_err = |e: std::io::Error| PackError::output(&config.output, e);

    let mut document = DocumentWriter::new(writer);
    document.write_banner().map_err(output_err)?;

    let entries = discover_files(&config.root, &config.extension, config.order)?;
    let own_output = resolve_own_output(&config.output, &config.extension);

    for entry in &entries {
        if is_same_file(&entry.path, own_output.as_deref()) {
            tracing::debug!("Skipping output document {}", entry.path.display());
            continue;
        }
        document.write_block(&entry.path).map_err(output_err)?;
    }

    let (_, stats) = document.finish().map_err(output_err)?;
    Ok(stats)
}

fn resolve_own_output(output: &Path, extension: &str) -> Option<PathBuf> {
    if walker::is_candidate(output, extension) {
        std::fs::canonicalize(output).ok()
    } else {
        None
    }
}

fn is_same_file(path: &Path, own_output: Option<&Path>) -> bool {
    own_output.is_some_and(|out| std::fs::canonicalize(path).is_ok_and(|p| p == out))
}
