// Copyright (c) 2026 the codepack contributors
// SPDX-License-Identifier: Apache-2.0

use crate::utils::error::PackError;
use ignore::WalkBuilder;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Order in which discovered files are written to the output document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum TraversalOrder {
    /// Paths sorted component-wise, stable across runs and platforms
    #[default]
    Sorted,
    /// Directory order as the filesystem returns it, each directory's files
    /// before its subdirectories
    Filesystem,
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sorted => write!(f, "sorted"),
            Self::Filesystem => write!(f, "filesystem"),
        }
    }
}

impl FromStr for TraversalOrder {
    type Err = PackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sorted" => Ok(Self::Sorted),
            "filesystem" => Ok(Self::Filesystem),
            _ => Err(PackError::invalid_order(s)),
        }
    }
}

/// A candidate file discovered under the root directory.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Root joined with the relative segments, e.g. `lib/sub/b.dart`
    pub path: PathBuf,
    /// Size in bytes, `None` when metadata could not be read (dangling symlink)
    pub size: Option<u64>,
}

impl FileEntry {
    pub fn new(path: PathBuf) -> Self {
        let size = std::fs::metadata(&path).map(|m| m.len()).ok();
        Self { path, size }
    }
}

/// Normalize a user-supplied extension into the suffix that file names are matched against.
///
/// A bare word such as `dart` becomes `.dart`. Anything that already contains a
/// dot (`.dart`, `_test.dart`) is used as-is.
pub fn normalize_extension(extension: &str) -> Result<String, PackError> {
    let trimmed = extension.trim();
    if trimmed.is_empty() {
        return Err(PackError::invalid_extension(extension));
    }

    if trimmed.contains('.') {
        Ok(trimmed.to_string())
    } else {
        Ok(format!(".{}", trimmed))
    }
}

/// Whether the file name of `path` ends with `extension`. Case-sensitive.
pub fn is_candidate(path: &Path, extension: &str) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(extension))
}

/// Directories, including symlinks that resolve to one, are never candidates.
fn is_directory(entry: &ignore::DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_dir() => true,
        Some(ft) if ft.is_symlink() => std::fs::metadata(entry.path())
            .map(|m| m.is_dir())
            .unwrap_or(false),
        _ => false,
    }
}

/// Flatten the grouped walk top-down: a directory's files, then each
/// subdirectory in the order the walk reached it.
fn files_before_subdirs(
    root: &Path,
    mut files_by_dir: HashMap<PathBuf, Vec<FileEntry>>,
    mut subdirs: HashMap<PathBuf, Vec<PathBuf>>,
) -> Vec<FileEntry> {
    let mut ordered = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        ordered.extend(files_by_dir.remove(&dir).unwrap_or_default());
        if let Some(children) = subdirs.remove(&dir) {
            pending.extend(children.into_iter().rev());
        }
    }

    ordered
}

/// Walk `root` recursively and collect every file whose name ends with `extension`.
///
/// A missing root, or a root that is not a directory, yields no files. A root that
/// exists but cannot be listed is fatal. Errors deeper in the tree are logged and
/// the affected entries skipped.
pub fn discover_files(
    root: &Path,
    extension: &str,
    order: TraversalOrder,
) -> Result<Vec<FileEntry>, PackError> {
    match std::fs::metadata(root) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            tracing::warn!("{} is not a directory, nothing to pack", root.display());
            return Ok(Vec::new());
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("Root directory {} does not exist", root.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(PackError::traverse(root, e)),
    }

    // The walker only reports this as a per-entry error, so check it up front.
    std::fs::read_dir(root).map_err(|e| PackError::traverse(root, e))?;

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build();

    // Walk order grouped per directory, so each directory's own files can be
    // written before anything from its subdirectories.
    let mut files_by_dir: HashMap<PathBuf, Vec<FileEntry>> = HashMap::new();
    let mut subdirs: HashMap<PathBuf, Vec<PathBuf>> = HashMap::new();

    for result in walker {
        match result {
            Ok(entry) => {
                if entry.depth() == 0 {
                    continue;
                }

                let path = entry.path();
                let Some(parent) = path.parent() else {
                    continue;
                };

                if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                    subdirs
                        .entry(parent.to_path_buf())
                        .or_default()
                        .push(path.to_path_buf());
                    continue;
                }

                if is_directory(&entry) || !is_candidate(path, extension) {
                    continue;
                }

                tracing::trace!("Found {}", path.display());
                files_by_dir
                    .entry(parent.to_path_buf())
                    .or_default()
                    .push(FileEntry::new(path.to_path_buf()));
            }
            Err(e) => {
                tracing::warn!("Error walking directory: {}", e);
            }
        }
    }

    let entries = match order {
        TraversalOrder::Sorted => {
            let mut entries: Vec<FileEntry> = files_by_dir.into_values().flatten().collect();
            entries.sort_by(|a, b| a.path.cmp(&b.path));
            entries
        }
        TraversalOrder::Filesystem => files_before_subdirs(root, files_by_dir, subdirs),
    };

    tracing::debug!(
        "Discovered {} {} files under {}",
        entries.len(),
        extension,
        root.display()
    );
    Ok(entries)
}
