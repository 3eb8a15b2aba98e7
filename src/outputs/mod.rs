//! Output mode detection: does the script declare a structured outputs file?

use crate::error::{Error, Result};

/// Flag a script passes to its deploy command to request a JSON outputs file.
pub const OUTPUTS_FILE_FLAG: &str = "--outputs-file";

/// How variables are recovered after the command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// The script writes a JSON outputs file under this name.
    File(String),
    /// No outputs file; scan the buffered command logs.
    Logs,
}

impl OutputMode {
    /// Decide the mode from the script text. Presence is a substring check; the
    /// file name is the token following the flag, or attached with `=`. A flag
    /// with no recoverable name is a configuration error.
    pub fn detect(script: &str) -> Result<Self> {
        if !script.contains(OUTPUTS_FILE_FLAG) {
            return Ok(OutputMode::Logs);
        }

        let mut tokens = script.split_whitespace();
        while let Some(token) = tokens.next() {
            if token == OUTPUTS_FILE_FLAG {
                match tokens.next() {
                    Some(name) => return Ok(OutputMode::File(name.to_string())),
                    None => break,
                }
            }
            if let Some(name) = token
                .strip_prefix(OUTPUTS_FILE_FLAG)
                .and_then(|rest| rest.strip_prefix('='))
            {
                if !name.is_empty() {
                    return Ok(OutputMode::File(name.to_string()));
                }
                break;
            }
        }

        Err(Error::OutputFlagIncomplete(script.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_script_reads_logs() {
        assert_eq!(OutputMode::detect("cdk deploy").unwrap(), OutputMode::Logs);
    }

    #[test]
    fn flag_with_separate_name() {
        let mode =
            OutputMode::detect("cdk deploy --outputs-file outputs.json --require-approval never")
                .unwrap();
        assert_eq!(mode, OutputMode::File("outputs.json".into()));
    }

    #[test]
    fn flag_with_attached_name() {
        let mode = OutputMode::detect("cdk deploy --outputs-file=dist/out.json").unwrap();
        assert_eq!(mode, OutputMode::File("dist/out.json".into()));
    }

    #[test]
    fn flag_without_name_is_fatal() {
        assert!(OutputMode::detect("cdk deploy --outputs-file").is_err());
        assert!(OutputMode::detect("cdk deploy --outputs-file=").is_err());
    }
}
