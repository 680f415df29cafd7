// Copyright (c) 2026 the codepack contributors
// SPDX-License-Identifier: Apache-2.0

//! Configuration management using the `config` crate for hierarchical discovery and merging.
//!
//! ## Configuration Sources (in precedence order, highest to lowest):
//! 1. **CLI flags** and their `CODEPACK_*` env aliases (handled by clap)
//! 2. **Environment variables** of the form `CODEPACK_PACK_<KEY>` (via the `config` crate)
//! 3. **Config files**
//! 4. **Built-in defaults** (`lib`, `.dart`, `full_code_dump.txt`, sorted)
//!
//! ## Config File Discovery (in merge order, later overrides earlier):
//! 1. `~/.config/codepack/config.toml`
//! 2. `codepack.toml` in the git repository root
//! 3. `./codepack.toml` in the current directory
//! 4. Explicit `--config` path
//!
//! ```toml
//! [pack]
//! root = "lib"
//! extension = ".dart"
//! output = "full_code_dump.txt"
//! order = "sorted"
//! ```

use crate::cli::args::{Args, DEFAULT_CONFIG_FILE};
use crate::packer::TraversalOrder;
use crate::packer::walker::normalize_extension;
use crate::utils::error::PackError;
use crate::{DEFAULT_EXTENSION, DEFAULT_OUTPUT, DEFAULT_ROOT, PackConfig};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure loaded from config files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pack: PackSection,
}

/// The `[pack]` table. Every key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackSection {
    pub root: Option<PathBuf>,
    pub extension: Option<String>,
    pub output: Option<PathBuf>,
    pub order: Option<String>,
}

fn discover_config_paths(explicit_path: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    if let Some(user_config) = get_user_config_path() {
        paths.push(user_config);
    }

    if let Some(git_root) = find_git_root() {
        let git_config = git_root.join(DEFAULT_CONFIG_FILE);
        if git_config.exists() {
            paths.push(git_config);
        }
    }

    let current_dir_config = PathBuf::from(DEFAULT_CONFIG_FILE);
    if current_dir_config.exists() {
        paths.push(current_dir_config);
    }

    // A non-default --config must exist; the default name is optional.
    if explicit_path != Path::new(DEFAULT_CONFIG_FILE) {
        if !explicit_path.exists() {
            return Err(PackError::Config(format!(
                "Config file not found: {}",
                explicit_path.display()
            ))
            .into());
        }
        paths.push(explicit_path.to_path_buf());
    }

    Ok(paths)
}

fn find_git_root() -> Option<PathBuf> {
    git2::Repository::discover(".")
        .ok()
        .and_then(|repo| repo.workdir().map(Path::to_path_buf))
}

fn get_user_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|config_dir| config_dir.join("codepack").join("config.toml"))
        .filter(|path| path.exists())
}

/// Load configuration from discovered config files and environment variables.
pub fn load(args: &Args) -> Result<Config> {
    let paths = discover_config_paths(&args.config)?;
    load_from_paths(&paths)
}

/// Load and merge the given config files, then `CODEPACK_PACK_*` variables.
pub fn load_from_paths(paths: &[PathBuf]) -> Result<Config> {
    let mut builder = config::Config::builder();

    for config_path in paths {
        builder = builder.add_source(config::File::from(config_path.as_path()));
    }

    builder = builder.add_source(config::Environment::with_prefix("CODEPACK").separator("_"));

    let settings = builder.build().context("Failed to build configuration")?;

    settings
        .try_deserialize()
        .context("Failed to deserialize configuration")
}

/// Merge CLI arguments over the file configuration and fill in defaults.
pub fn merge_config(args: &Args, config: Config) -> Result<PackConfig, PackError> {
    let file = config.pack;

    let extension = args
        .extension
        .clone()
        .or(file.extension)
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

    let order = match (args.order, file.order) {
        (Some(order), _) => order,
        (None, Some(order)) => order.parse::<TraversalOrder>()?,
        (None, None) => TraversalOrder::default(),
    };

    Ok(PackConfig {
        root: args
            .root
            .clone()
            .or(file.root)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT)),
        extension: normalize_extension(&extension)?,
        output: args
            .output
            .clone()
            .or(file.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        order,
        dry_run: args.dry_run,
        verbose: args.verbose,
        quiet: args.quiet,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).expect("write config");
        path
    }

    #[test]
    fn test_defaults_without_any_source() {
        let merged = merge_config(&Args::default(), Config::default()).expect("merge");
        assert_eq!(merged, PackConfig::default());
    }

    #[test]
    fn test_file_values_fill_unset_flags() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_config(
            &dir,
            "codepack.toml",
            "[pack]\nroot = \"src\"\nextension = \"rs\"\norder = \"filesystem\"\n",
        );

        let config = load_from_paths(&[path]).expect("load");
        let merged = merge_config(&Args::default(), config).expect("merge");

        assert_eq!(merged.root, PathBuf::from("src"));
        assert_eq!(merged.extension, ".rs");
        assert_eq!(merged.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(merged.order, TraversalOrder::Filesystem);
    }

    #[test]
    fn test_cli_overrides_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_config(
            &dir,
            "codepack.toml",
            "[pack]\nroot = \"src\"\noutput = \"from_file.txt\"\n",
        );

        let args = Args {
            output: Some(PathBuf::from("from_cli.txt")),
            order: Some(TraversalOrder::Sorted),
            ..Args::default()
        };
        let config = load_from_paths(&[path]).expect("load");
        let merged = merge_config(&args, config).expect("merge");

        assert_eq!(merged.root, PathBuf::from("src"));
        assert_eq!(merged.output, PathBuf::from("from_cli.txt"));
        assert_eq!(merged.order, TraversalOrder::Sorted);
    }

    #[test]
    fn test_later_files_override_earlier() {
        let dir = tempfile::tempdir().expect("tempdir");
        let user = write_config(&dir, "user.toml", "[pack]\nroot = \"user\"\nextension = \".kt\"\n");
        let local = write_config(&dir, "local.toml", "[pack]\nroot = \"local\"\n");

        let config = load_from_paths(&[user, local]).expect("load");

        assert_eq!(config.pack.root, Some(PathBuf::from("local")));
        assert_eq!(config.pack.extension.as_deref(), Some(".kt"));
    }

    #[test]
    fn test_invalid_toml_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_config(&dir, "broken.toml", "[pack\nroot = \"src\"");
        assert!(load_from_paths(&[path]).is_err());
    }

    #[test]
    fn test_invalid_order_in_file_is_rejected() {
        let config = Config {
            pack: PackSection {
                order: Some("shuffled".to_string()),
                ..PackSection::default()
            },
        };
        let err = merge_config(&Args::default(), config).expect_err("should reject");
        assert!(matches!(err, PackError::Validation { .. }));
    }

    #[test]
    fn test_empty_extension_is_rejected() {
        let args = Args {
            extension: Some(String::new()),
            ..Args::default()
        };
        assert!(merge_config(&args, Config::default()).is_err());
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope.toml");
        assert!(discover_config_paths(&missing).is_err());
    }
}
