// Copyright (c) 2026 the codepack contributors
// SPDX-License-Identifier: Apache-2.0

//! Rendering of the output document.
//!
//! A document is a fixed banner followed by one block per candidate file:
//!
//! ```text
//! CURRENT PROJECT STATE:
//! ======================
//!
//! // FILE: lib/a.dart
//! // ==============================
//! void main() {}
//!
//! ```
//!
//! A file that cannot be read still gets its block. The content is replaced by
//! an `// Error reading file: <reason>` marker.

use std::io::{self, Write};
use std::path::Path;

/// Banner written once at the top of every document.
pub const BANNER: &str = "CURRENT PROJECT STATE:\n======================\n\n";

/// Prefix of the header line that names each file.
pub const FILE_HEADER_PREFIX: &str = "// FILE: ";

/// Prefix written in place of content when a file cannot be read.
pub const ERROR_MARKER_PREFIX: &str = "// Error reading file: ";

const SEPARATOR_WIDTH: usize = 30;

/// What ended up in a block's content slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOutcome {
    /// File content written verbatim
    Content,
    /// An error marker was written instead
    ReadError,
}

/// Running totals for a document.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DocumentStats {
    /// Number of file blocks written
    pub blocks: usize,
    /// Blocks whose content is an error marker
    pub read_errors: usize,
    /// Total bytes written, banner included
    pub bytes_written: u64,
}

/// Render one file block: header, separator, content or error marker, blank line.
pub fn render_block(path: &Path, content: Result<&str, &io::Error>) -> String {
    let body = match content {
        Ok(text) => text.to_string(),
        Err(e) => format!("{}{}", ERROR_MARKER_PREFIX, e),
    };

    format!(
        "{}{}\n// {}\n{}\n\n",
        FILE_HEADER_PREFIX,
        path.display(),
        "=".repeat(SEPARATOR_WIDTH),
        body
    )
}

/// Streams a document into any `Write` sink.
pub struct DocumentWriter<W: Write> {
    writer: W,
    stats: DocumentStats,
}

impl<W: Write> DocumentWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            stats: DocumentStats::default(),
        }
    }

    pub fn write_banner(&mut self) -> io::Result<()> {
        self.write_raw(BANNER)
    }

    /// Read `path` as UTF-8 and append its block.
    ///
    /// Only failures writing to the sink are returned as errors. A failed read
    /// becomes an error marker inside the block.
    pub fn write_block(&mut self, path: &Path) -> io::Result<BlockOutcome> {
        let content = std::fs::read_to_string(path);
        self.write_block_content(path, content)
    }

    /// Append a block for content the caller has already read (or failed to).
    pub fn write_block_content(
        &mut self,
        path: &Path,
        content: io::Result<String>,
    ) -> io::Result<BlockOutcome> {
        let outcome = match &content {
            Ok(_) => BlockOutcome::Content,
            Err(e) => {
                tracing::warn!("Error reading {}: {}", path.display(), e);
                BlockOutcome::ReadError
            }
        };

        let block = render_block(path, content.as_deref());
        self.write_raw(&block)?;

        self.stats.blocks += 1;
        if outcome == BlockOutcome::ReadError {
            self.stats.read_errors += 1;
        }

        Ok(outcome)
    }

    /// Flush the sink and hand it back together with the final totals.
    pub fn finish(mut self) -> io::Result<(W, DocumentStats)> {
        self.writer.flush()?;
        Ok((self.writer, self.stats))
    }

    fn write_raw(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.stats.bytes_written += text.len() as u64;
        Ok(())
    }
}
