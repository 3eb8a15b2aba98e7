mod cli;
mod config;
mod credentials;
mod envfile;
mod error;
mod extract;
mod manifest;
mod outputs;
mod printer;
mod prompt;
mod runner;

use anyhow::Context;
use config::Config;
use envfile::Environment;
use error::{Error, Result};
use manifest::{Manifest, PackageManager};
use outputs::OutputMode;
use printer::Printer;

#[tokio::main]
async fn main() {
    let printer = Printer::auto();
    if let Err(err) = run(&printer).await {
        match err.downcast_ref::<Error>() {
            Some(e) => printer.error(&format!("{} error: {e}", e.category())),
            None => printer.error(&format!("error: {err:#}")),
        }
        std::process::exit(1);
    }
}

async fn run(printer: &Printer) -> Result<()> {
    let args = cli::Cli::parse();
    let cfg = Config::load();
    let cwd = std::env::current_dir().context("cannot determine the working directory")?;

    let script_name = match &args.script {
        Some(name) => name.clone(),
        None => prompt::input("What is the command?")?,
    };
    let manager = resolve_manager(&args, &cfg, printer)?;
    let environment = resolve_environment(&args, &cfg, printer)?;
    printer.log(&format!(
        "Running '{script_name}' with {manager} for the {environment} environment"
    ));

    let manifest = Manifest::load(&cwd)?;
    let script = manifest.script_string(&script_name)?;
    printer.success(&format!("Script found: {script}"));

    let mode = OutputMode::detect(script)?;
    match &mode {
        OutputMode::File(file_name) => {
            printer.success(&format!("Outputs file declared in the script: {file_name}"));
        }
        OutputMode::Logs => {
            printer.log("No outputs file declared, reading variables from the command logs");
        }
    }

    let command = manager.compose(&script_name);
    printer.log(&format!("Calling `{command}`..."));
    let mut variables = runner::run(&command, &mode, &cwd, printer).await?;

    if environment == Environment::Production {
        variables.extend(credentials::collect(&cfg, printer));
    }

    let path = envfile::write(&cwd, environment, &variables)?;
    printer.success(&format!("Wrote {} variables to {}", variables.len(), path.display()));
    Ok(())
}

/// CLI flag wins, then the configured default, then an interactive prompt.
fn resolve_manager(args: &cli::Cli, cfg: &Config, printer: &Printer) -> Result<PackageManager> {
    if let Some(manager) = args.manager {
        return Ok(manager);
    }
    if let Some(value) = cfg.get("DEFAULT_MANAGER") {
        return Ok(value.parse::<PackageManager>()?);
    }
    prompt::select(printer, "Package manager:", &PackageManager::ALL)
}

fn resolve_environment(args: &cli::Cli, cfg: &Config, printer: &Printer) -> Result<Environment> {
    if let Some(environment) = args.environment {
        return Ok(environment);
    }
    if let Some(value) = cfg.get("DEFAULT_ENVIRONMENT") {
        return Ok(value.parse::<Environment>()?);
    }
    prompt::select(printer, "Environment:", &Environment::ALL)
}
