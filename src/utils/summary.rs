// Copyright (c) 2026 the codepack contributors
// SPDX-License-Identifier: Apache-2.0

//! Completion notice printed after a successful pack.
//!
//! Two lines by default, naming the output file and what to do with it. With
//! `-v` a third line carries the file count, unreadable count and size.

use crate::packer::PackSummary;
use crate::utils::formatting::{format_number, format_size};
use anyhow::Result;
use console::{Term, style};
use std::io::Write;

/// Plain-text lines of the completion notice, without styling.
pub fn summary_lines(summary: &PackSummary, verbose: u8) -> Vec<String> {
    let mut lines = vec![
        format!("Project packed into '{}'", summary.output.display()),
        "Copy the contents of that file and paste it into your LLM to restore context!"
            .to_string(),
    ];

    if verbose > 0 {
        lines.push(format!(
            "{} files, {} unreadable, {}",
            format_number(summary.files as u64),
            format_number(summary.read_errors as u64),
            format_size(summary.bytes_written)
        ));
    }

    lines
}

/// Display the completion notice on stdout.
///
/// # Errors
///
/// Returns an error if writing to the terminal fails.
pub fn display_success_summary(summary: &PackSummary, verbose: u8, quiet: bool) -> Result<()> {
    if quiet {
        return Ok(());
    }

    let mut term = Term::stdout();
    let lines = summary_lines(summary, verbose);

    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            writeln!(term, "{} {}", style("\u{2713}").green().bold(), style(line).bold())?;
        } else {
            writeln!(term, "{}", line)?;
        }
    }

    if summary.read_errors > 0 {
        writeln!(
            term,
            "{} {} file(s) could not be read; see the error markers in the output",
            style("\u{26a0}").yellow(),
            summary.read_errors
        )?;
    }

    Ok(())
}
