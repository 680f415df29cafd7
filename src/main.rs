// Copyright (c) 2026 the codepack contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use codepack::utils::error::{PackError, format_error};
use codepack::{cli, run};

fn main() {
    // Config is not parsed yet if an early step fails, so look for -v directly.
    let verbose = std::env::args().skip(1).any(|arg| {
        arg == "--verbose"
            || (arg.starts_with("-v") && arg.trim_start_matches('-').chars().all(|c| c == 'v'))
    });

    if let Err(e) = run_main() {
        display_error(&e, verbose);
        std::process::exit(1);
    }
}

/// Display an error with contextual formatting.
///
/// Tries to downcast to `PackError` for rich formatting, falls back to
/// anyhow's error chain display for other errors.
fn display_error(error: &anyhow::Error, verbose: bool) {
    if let Some(pack_error) = error.downcast_ref::<PackError>() {
        eprintln!("{}", format_error(pack_error, verbose));
        return;
    }

    eprintln!("\n\u{26a0} Error: {}", error);

    let causes: Vec<_> = error.chain().skip(1).collect();
    if !causes.is_empty() {
        eprintln!("\nCaused by:");
        for (i, cause) in causes.iter().enumerate() {
            let prefix = if i == causes.len() - 1 {
                "\u{2514}\u{2500}"
            } else {
                "\u{251c}\u{2500}"
            };
            eprintln!("{} {}", prefix, cause);
        }
    }
}

fn run_main() -> Result<()> {
    let args = cli::args::parse();

    let config = cli::config::load(&args)?;
    let merged = cli::config::merge_config(&args, config)?;

    codepack::init_logging(merged.verbose, merged.quiet);

    run(&merged)
}
