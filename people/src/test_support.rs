//! Test-only helpers for building roster fixtures.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::io::config::{PersonEntry, RoleKind, RosterConfig, write_roster};

/// Create a roster entry without a role.
pub fn entry(name: &str, age: i64) -> PersonEntry {
    PersonEntry {
        name: name.to_string(),
        age,
        role: None,
        language: None,
        shoes: None,
    }
}

pub fn programmer_entry(name: &str, age: i64, language: &str) -> PersonEntry {
    PersonEntry {
        role: Some(RoleKind::Programmer),
        language: Some(language.to_string()),
        ..entry(name, age)
    }
}

pub fn runner_entry(name: &str, age: i64, shoes: &str) -> PersonEntry {
    PersonEntry {
        role: Some(RoleKind::Runner),
        shoes: Some(shoes.to_string()),
        ..entry(name, age)
    }
}

/// A temp directory holding `people.toml`; removed on drop.
pub struct TestRoster {
    dir: TempDir,
    path: PathBuf,
}

impl TestRoster {
    pub fn new(cfg: &RosterConfig) -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp dir")?;
        let path = dir.path().join("people.toml");
        write_roster(&path, cfg)?;
        Ok(Self { dir, path })
    }

    /// Directory containing the roster; use as the CLI working directory.
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
