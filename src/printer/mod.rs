//! Colored console output for progress and diagnostics.

use std::io::{stderr, stdout};

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

/// Four-level printer: `log`, `success` and `warning` go to stdout, `error` to
/// stderr. Colors are dropped when the target stream is not a terminal or when
/// NO_COLOR is set.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    out_color: bool,
    err_color: bool,
}

impl Printer {
    pub fn auto() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some();
        Self {
            out_color: !no_color && stdout().is_terminal(),
            err_color: !no_color && stderr().is_terminal(),
        }
    }

    #[cfg(test)]
    pub fn plain() -> Self {
        Self { out_color: false, err_color: false }
    }

    pub fn log(&self, text: &str) {
        if self.out_color {
            println!("{}", text.cyan());
        } else {
            println!("{}", text);
        }
    }

    pub fn success(&self, text: &str) {
        if self.out_color {
            println!("{}", text.green());
        } else {
            println!("{}", text);
        }
    }

    pub fn warning(&self, text: &str) {
        if self.out_color {
            println!("{}", text.yellow());
        } else {
            println!("{}", text);
        }
    }

    pub fn error(&self, text: &str) {
        if self.err_color {
            eprintln!("{}", text.red());
        } else {
            eprintln!("{}", text);
        }
    }
}
