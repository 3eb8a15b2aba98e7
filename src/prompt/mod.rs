//! Interactive stdin prompts for values the CLI and config leave unset.

use std::fmt::Display;
use std::io::{self, Write};

use crate::error::{Error, Result};
use crate::printer::Printer;

/// Asks a free-form question. The answer is trimmed and may be empty.
pub fn input(message: &str) -> Result<String> {
    print!("{message} ");
    io::stdout().flush().ok();
    let mut answer = String::new();
    let n = io::stdin().read_line(&mut answer)?;
    if n == 0 {
        return Err(Error::Input(format!("stdin closed while waiting for: {message}")).into());
    }
    Ok(answer.trim().to_string())
}

/// Numbered menu over `choices`. Accepts a 1-based number or a choice name
/// (case-insensitive); an empty answer picks the first choice. Re-asks until
/// the answer matches.
pub fn select<T: Copy + Display>(printer: &Printer, message: &str, choices: &[T]) -> Result<T> {
    println!("{message}");
    for (i, choice) in choices.iter().enumerate() {
        println!("  {}) {}", i + 1, choice);
    }
    loop {
        print!("Choice [1]: ");
        io::stdout().flush().ok();
        let mut answer = String::new();
        let n = io::stdin().read_line(&mut answer)?;
        if n == 0 {
            return Err(Error::Input(format!("stdin closed while waiting for: {message}")).into());
        }
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(choices[0]);
        }
        if let Ok(index) = answer.parse::<usize>() {
            if (1..=choices.len()).contains(&index) {
                return Ok(choices[index - 1]);
            }
        }
        if let Some(choice) = choices
            .iter()
            .find(|c| c.to_string().eq_ignore_ascii_case(answer))
        {
            return Ok(*choice);
        }
        printer.warning(&format!("'{answer}' is not one of the choices"));
    }
}
