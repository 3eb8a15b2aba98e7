//! Target environments and dotenv file writing.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Context;
use clap::ValueEnum;

use crate::error::{Error, Result};
use crate::extract::Variable;

/// Deployment environment. Picks the dotenv file name and, for production,
/// whether AWS credential files are appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    Default,
    Development,
    Production,
}

impl Environment {
    pub const ALL: [Environment; 3] =
        [Environment::Default, Environment::Development, Environment::Production];

    pub fn file_name(&self) -> &'static str {
        match self {
            Environment::Default => ".env",
            Environment::Development => ".env.local",
            Environment::Production => ".env.production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::Default => "default",
            Environment::Development => "development",
            Environment::Production => "production",
        };
        f.write_str(name)
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Environment::Default),
            "development" => Ok(Environment::Development),
            "production" => Ok(Environment::Production),
            other => Err(Error::Input(format!("unknown environment '{other}'"))),
        }
    }
}

/// Writes the variables as `KEY=value` lines, one per variable, replacing any
/// existing file. Variables land in the order given, duplicates included.
pub fn write(dir: &Path, environment: Environment, variables: &[Variable]) -> Result<PathBuf> {
    let path = dir.join(environment.file_name());
    let body = variables.iter().map(Variable::to_string).collect::<Vec<_>>().join("\n");
    std::fs::write(&path, body).with_context(|| format!("cannot write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variables_are_joined_without_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let variables = vec![
            Variable::new("API_URL", "https://x.example"),
            Variable::new("TABLE", "users"),
        ];
        let path = write(dir.path(), Environment::Default, &variables).unwrap();
        assert_eq!(path.file_name().unwrap(), ".env");
        let body = std::fs::read_to_string(path).unwrap();
        assert_eq!(body, "API_URL=https://x.example\nTABLE=users");
    }

    #[test]
    fn duplicates_are_kept_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let variables = vec![
            Variable::new("A", "1"),
            Variable::new("B", "2"),
            Variable::new("A", "3"),
        ];
        let path = write(dir.path(), Environment::Development, &variables).unwrap();
        assert_eq!(path.file_name().unwrap(), ".env.local");
        assert_eq!(std::fs::read_to_string(path).unwrap(), "A=1\nB=2\nA=3");
    }

    #[test]
    fn empty_variable_list_writes_an_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), Environment::Production, &[]).unwrap();
        assert_eq!(path.file_name().unwrap(), ".env.production");
        assert_eq!(std::fs::read_to_string(path).unwrap(), "");
    }

    #[test]
    fn existing_file_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "OLD=stale\nGONE=yes").unwrap();
        let variables = vec![Variable::new("NEW", "fresh")];
        let path = write(dir.path(), Environment::Default, &variables).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "NEW=fresh");
    }

    #[test]
    fn environment_parses_case_insensitively() {
        assert_eq!("Production".parse::<Environment>().unwrap(), Environment::Production);
        assert!("staging".parse::<Environment>().is_err());
    }
}
