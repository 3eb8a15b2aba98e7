//! Error taxonomy for the pipeline. Every variant is fatal for the run; the
//! top-level handler in `main` prints one diagnostic and exits with status 1.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Failure class, used to prefix the final diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Config,
    Execution,
    Extraction,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Config => "configuration",
            Category::Execution => "execution",
            Category::Extraction => "extraction",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot read manifest {path}: {reason}")]
    Manifest { path: PathBuf, reason: String },

    #[error("script '{0}' is not defined in package.json")]
    ScriptNotFound(String),

    #[error("no output file name follows --outputs-file in script `{0}`")]
    OutputFlagIncomplete(String),

    #[error("invalid input: {0}")]
    Input(String),

    #[error("{0}")]
    Execution(String),

    #[error("{0}")]
    Extraction(String),
}

impl Error {
    pub fn category(&self) -> Category {
        match self {
            Error::Manifest { .. }
            | Error::ScriptNotFound(_)
            | Error::OutputFlagIncomplete(_)
            | Error::Input(_) => Category::Config,
            Error::Execution(_) => Category::Execution,
            Error::Extraction(_) => Category::Extraction,
        }
    }
}

/// Crate-wide result alias. anyhow keeps `?` and `.context` ergonomics at call
/// sites while the typed variants above carry the taxonomy to the top handler.
pub type Result<T> = anyhow::Result<T>;
