//! AWS credential and config files appended to production environment files.

use std::path::PathBuf;

use crate::config::Config;
use crate::extract::{self, Variable};
use crate::printer::Printer;

/// Variables from the configured AWS files, in file order. A file that cannot
/// be read contributes nothing and only earns a warning; local credentials are
/// optional.
pub fn collect(cfg: &Config, printer: &Printer) -> Vec<Variable> {
    collect_from(&file_paths(cfg), printer)
}

fn file_paths(cfg: &Config) -> Vec<PathBuf> {
    ["AWS_SHARED_CREDENTIALS_FILE", "AWS_CONFIG_FILE"]
        .iter()
        .filter_map(|key| cfg.get_path(key))
        .collect()
}

fn collect_from(paths: &[PathBuf], printer: &Printer) -> Vec<Variable> {
    let mut variables = Vec::new();
    for path in paths {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let mut found = extract::credential_variables(&text);
                printer.log(&format!(
                    "Read {} variables from {}",
                    found.len(),
                    path.display()
                ));
                variables.append(&mut found);
            }
            Err(err) => printer.warning(&format!("Skipping {}: {err}", path.display())),
        }
    }
    variables
}
