//! Test support utilities for envseal integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own temporary project dir and home dir.
/// No process-global state is mutated — child processes use
/// `.current_dir()` so tests can safely run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Path of a file inside the test project directory.
    pub fn path(&self, name: &str) -> std::path::PathBuf {
        self.dir.path().join(name)
    }

    /// Write a file into the test project directory.
    pub fn write(&self, name: &str, content: &str) {
        std::fs::write(self.path(name), content).expect("failed to write test file");
    }

    /// Read a file from the test project directory.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).expect("failed to read test file")
    }

    /// Write a project-local key file (`.envseal.key`).
    pub fn write_project_key(&self, key: &str) {
        self.write(".envseal.key", key);
    }

    /// Write the XDG key file (`<home>/.config/envseal/secret.key`).
    pub fn write_xdg_key(&self, key: &str) {
        let dir = self.home.path().join(".config").join("envseal");
        std::fs::create_dir_all(&dir).expect("failed to create config dir");
        std::fs::write(dir.join("secret.key"), key).expect("failed to write xdg key");
    }

    /// Write the legacy key file (`<home>/.envseal.key`).
    pub fn write_legacy_key(&self, key: &str) {
        std::fs::write(self.home.path().join(".envseal.key"), key)
            .expect("failed to write legacy key");
    }

    /// Write an executable script into the test project directory.
    ///
    /// Used to stand in for $EDITOR in non-interactive tests.
    #[cfg(unix)]
    pub fn write_script(&self, name: &str, content: &str) -> std::path::PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.path(name);
        std::fs::write(&path, content).expect("failed to write script");
        let mut perms = std::fs::metadata(&path)
            .expect("failed to stat script")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).expect("failed to chmod script");
        path
    }
}
