//! Common test utilities and fixtures for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temporary directory for test fixtures.
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Creates a mock project structure for testing.
pub fn create_mock_project(dir: &TempDir, files: &[(&str, &str)]) -> PathBuf {
    let root = dir.path().to_path_buf();

    for (path, content) in files {
        let file_path = root.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    root
}

/// A small Flutter project: four Dart sources under `lib/` plus files that must not be packed.
pub fn flutter_project_files() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "pubspec.yaml",
            "name: demo_app\nenvironment:\n  sdk: '>=3.0.0 <4.0.0'\n",
        ),
        (
            "lib/main.dart",
            r#"import 'package:flutter/material.dart';

void main() => runApp(const App());
"#,
        ),
        (
            "lib/app.dart",
            r#"class App extends StatelessWidget {
  const App({super.key});
}
"#,
        ),
        ("lib/screens/home.dart", "class HomeScreen {}\n"),
        ("lib/screens/settings.dart", "class SettingsScreen {}\n"),
        ("lib/l10n/intl_en.arb", "{\"hello\": \"Hello\"}\n"),
        ("lib/README.md", "# notes\n"),
        ("test/widget_test.dart", "void main() {}\n"),
    ]
}

/// Creates a `codepack.toml` in the given directory.
pub fn create_config_file(dir: &Path, content: &str) -> PathBuf {
    let config_path = dir.join("codepack.toml");
    std::fs::write(&config_path, content).expect("Failed to write config file");
    config_path
}

/// A `codepack` command running in `dir`, isolated from the user's config and env.
pub fn codepack_cmd(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(env!("CARGO_BIN_EXE_codepack"));
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("HOME", dir)
        .env_remove("RUST_LOG");
    for (key, _) in std::env::vars() {
        if key.starts_with("CODEPACK_") {
            cmd.env_remove(key);
        }
    }
    cmd
}

/// Read a file the test expects to exist.
pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).expect("Failed to read file")
}
