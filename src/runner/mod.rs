//! Runs the composed package-manager command and extracts variables from it,
//! either out of a declared outputs file or out of the process logs.

use std::path::Path;
use std::process::Stdio;

use anyhow::Context;
use tokio::io::AsyncReadExt;
use tokio::process::Command as AsyncCommand;

use crate::error::{Error, Result};
use crate::extract::{self, Variable};
use crate::outputs::OutputMode;
use crate::printer::Printer;

pub async fn run(
    command: &str,
    mode: &OutputMode,
    cwd: &Path,
    printer: &Printer,
) -> Result<Vec<Variable>> {
    match mode {
        OutputMode::File(file_name) => run_with_file_reader(command, file_name, cwd),
        OutputMode::Logs => run_with_logs_reader(command, cwd, printer).await,
    }
}

/// File mode blocks until the child exits with its stdio inherited, then reads
/// the outputs file next to the manifest. The file is only complete once the
/// child has exited, so there is nothing to overlap with.
fn run_with_file_reader(command: &str, file_name: &str, cwd: &Path) -> Result<Vec<Variable>> {
    let status = shell_command(command)
        .current_dir(cwd)
        .status()
        .with_context(|| format!("cannot start `{command}`"))?;
    if !status.success() {
        return Err(Error::Execution(format!("`{command}` failed with {status}")).into());
    }

    let path = cwd.join(file_name);
    let text = std::fs::read_to_string(&path).map_err(|e| {
        Error::Extraction(format!("cannot read outputs file {}: {e}", path.display()))
    })?;
    extract::variables_from_outputs(&text)
}

/// Log mode pipes both streams and appends chunks to one buffer as they arrive.
/// Interleaving across the two streams is best-effort; within a stream the order
/// is the order the child wrote.
async fn run_with_logs_reader(
    command: &str,
    cwd: &Path,
    printer: &Printer,
) -> Result<Vec<Variable>> {
    let mut child = AsyncCommand::from(shell_command(command))
        .current_dir(cwd)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("cannot start `{command}`"))?;
    let mut stdout = child.stdout.take().context("child stdout is not piped")?;
    let mut stderr = child.stderr.take().context("child stderr is not piped")?;

    let mut combined = Vec::new();
    let mut out_buf = [0u8; 4096];
    let mut err_buf = [0u8; 4096];
    let mut out_done = false;
    let mut err_done = false;
    while !(out_done && err_done) {
        tokio::select! {
            read = stdout.read(&mut out_buf), if !out_done => {
                match read.context("cannot read child stdout")? {
                    0 => out_done = true,
                    n => combined.extend_from_slice(&out_buf[..n]),
                }
            }
            read = stderr.read(&mut err_buf), if !err_done => {
                match read.context("cannot read child stderr")? {
                    0 => err_done = true,
                    n => combined.extend_from_slice(&err_buf[..n]),
                }
            }
        }
    }

    let status = child.wait().await.with_context(|| format!("cannot wait on `{command}`"))?;
    if !status.success() {
        return Err(Error::Execution(format!("`{command}` failed with {status}")).into());
    }

    let text = String::from_utf8_lossy(&combined);
    let mut variables = Vec::new();
    for line in extract::variable_lines(&text) {
        match extract::parse_log_line(line) {
            Some(variable) => variables.push(variable),
            None => printer.warning(&format!("Skipping unparseable output line: {line}")),
        }
    }
    if variables.is_empty() {
        return Err(Error::Extraction("no variables found in command output".into()).into());
    }
    Ok(variables)
}

/// Build a command that runs `cmd` through the platform shell.
///
/// On Windows: PowerShell if available (determined by PSModulePath), otherwise
/// cmd.exe, with an explicit override via SHELL_NAME. On Unix-like systems: the
/// shell named by SHELL, or /bin/sh as fallback.
fn shell_command(cmd: &str) -> std::process::Command {
    if cfg!(windows) {
        let override_shell =
            std::env::var("SHELL_NAME").unwrap_or_default().to_ascii_lowercase();
        let prefer_ps = if override_shell.contains("powershell") {
            true
        } else if override_shell.contains("cmd") {
            false
        } else {
            !std::env::var("PSModulePath").unwrap_or_default().is_empty()
        };
        if prefer_ps {
            let mut command = std::process::Command::new("powershell.exe");
            command.args(["-NoLogo", "-NoProfile", "-Command", cmd]);
            command
        } else {
            let mut command = std::process::Command::new("cmd.exe");
            command.args(["/c", cmd]);
            command
        }
    } else {
        let shell = std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".into());
        let mut command = std::process::Command::new(shell);
        command.arg("-c").arg(cmd);
        command
    }
}
