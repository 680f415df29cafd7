// Copyright (c) 2026 the codepack contributors
// SPDX-License-Identifier: Apache-2.0

use crate::packer::TraversalOrder;
use clap::Parser;
use std::path::PathBuf;

/// Name of the config file looked up in the git root and the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "codepack.toml";

/// CLI argument parsing with environment variable support.
///
/// Environment variables follow the pattern `CODEPACK_*` and are overridden by CLI flags.
/// Options left unset fall through to the config file, then to the built-in defaults.
#[derive(Parser, Debug, Default)]
#[command(name = "codepack")]
#[command(about = "Pack a project's source files into one labelled text snapshot for LLM context")]
#[command(version)]
pub struct Args {
    /// Directory to scan recursively [default: lib]
    #[arg(env = "CODEPACK_ROOT")]
    pub root: Option<PathBuf>,

    /// File-name suffix to pack, e.g. ".dart" or "rs" [default: .dart]
    #[arg(short, long, env = "CODEPACK_EXTENSION")]
    pub extension: Option<String>,

    /// Output file path [default: full_code_dump.txt]
    #[arg(short, long, env = "CODEPACK_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Order of files in the output [default: sorted]
    #[arg(long, value_enum, env = "CODEPACK_ORDER")]
    pub order: Option<TraversalOrder>,

    /// Config file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE, env = "CODEPACK_CONFIG")]
    pub config: PathBuf,

    /// List the files that would be packed without writing anything
    #[arg(long, env = "CODEPACK_DRY_RUN")]
    pub dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress console notices
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
