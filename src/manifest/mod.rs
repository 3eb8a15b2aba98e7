//! package.json manifest: script lookup and package-manager prefixes.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Deserialize;

use crate::error::{Error, Result};

pub const MANIFEST_FILE: &str = "package.json";

/// The `scripts` section of a package.json, read from the invocation directory.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    scripts: HashMap<String, String>,
}

impl Manifest {
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILE);
        let text = std::fs::read_to_string(&path).map_err(|e| Error::Manifest {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        let manifest = serde_json::from_str(&text)
            .map_err(|e| Error::Manifest { path, reason: e.to_string() })?;
        Ok(manifest)
    }

    /// The shell command template registered under `name`.
    pub fn script_string(&self, name: &str) -> Result<&str> {
        self.scripts
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| Error::ScriptNotFound(name.to_string()).into())
    }
}

/// Package managers the script can be run through. The prefix keeps its trailing
/// space; the composed command is `<prefix><script name>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PackageManager {
    Yarn,
    Npm,
    Pnpm,
}

impl PackageManager {
    pub const ALL: [PackageManager; 3] =
        [PackageManager::Yarn, PackageManager::Npm, PackageManager::Pnpm];

    pub fn prefix(&self) -> &'static str {
        match self {
            PackageManager::Yarn => "yarn ",
            PackageManager::Npm => "npm run ",
            PackageManager::Pnpm => "pnpm ",
        }
    }

    /// The shell line handed to the runner. The manager re-resolves the script by
    /// name, so the name is composed, not the script text itself.
    pub fn compose(&self, script_name: &str) -> String {
        format!("{}{}", self.prefix(), script_name)
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PackageManager::Yarn => "yarn",
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
        };
        f.write_str(name)
    }
}

impl FromStr for PackageManager {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yarn" => Ok(PackageManager::Yarn),
            "npm" => Ok(PackageManager::Npm),
            "pnpm" => Ok(PackageManager::Pnpm),
            other => Err(Error::Input(format!("unknown package manager '{other}'"))),
        }
    }
}
