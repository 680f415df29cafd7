// Copyright (c) 2026 the codepack contributors
// SPDX-License-Identifier: Apache-2.0

//! Dry-run preview: list what would be packed without touching the output file.

use crate::PackConfig;
use crate::packer::FileEntry;
use crate::utils::formatting::{format_number, format_size};
use anyhow::Result;
use console::Term;
use std::io::Write;

/// Render the dry-run report as plain text.
pub fn render_dry_run(config: &PackConfig, entries: &[FileEntry]) -> String {
    let mut out = String::new();
    let total: u64 = entries.iter().filter_map(|e| e.size).sum();

    out.push_str("Dry Run - nothing will be written\n");
    out.push_str("=================================\n");
    out.push_str(&format!("Root:       {}\n", config.root.display()));
    out.push_str(&format!("Extension:  {}\n", config.extension));
    out.push_str(&format!("Output:     {}\n", config.output.display()));
    out.push_str(&format!("Order:      {}\n", config.order));
    out.push('\n');

    if entries.is_empty() {
        out.push_str("No matching files found.\n");
        return out;
    }

    for entry in entries {
        let size = entry
            .size
            .map_or_else(|| "unreadable".to_string(), format_size);
        out.push_str(&format!("  {}  ({})\n", entry.path.display(), size));
    }

    out.push('\n');
    out.push_str(&format!(
        "{} files, {} total\n",
        format_number(entries.len() as u64),
        format_size(total)
    ));

    out
}

/// Print the dry-run report to stdout unless `quiet` is set.
pub fn display_dry_run(config: &PackConfig, entries: &[FileEntry]) -> Result<()> {
    if config.quiet {
        return Ok(());
    }

    let mut term = Term::stdout();
    write!(term, "{}", render_dry_run(config, entries))?;
    Ok(())
}
