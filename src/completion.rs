// completion.rs

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};

use crate::parser::COMMANDS;

/// Completes command words at the start of the line.
#[derive(Default)]
pub struct CommandCompleter;

impl CommandCompleter {
    pub fn new() -> Self {
        Self
    }

    pub fn candidates(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.to_ascii_lowercase();
        COMMANDS
            .iter()
            .filter(|name| name.starts_with(&prefix))
            .map(|name| name.to_string())
            .collect()
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let prefix = &line[..pos];
        let start = prefix.len() - prefix.trim_start().len();
        let word = &prefix[start..];
        // only the command word is completed; operands are numbers
        if word.contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        let completions = self
            .candidates(word)
            .into_iter()
            .map(|name| Pair {
                display: name.clone(),
                replacement: format!("{} ", name),
            })
            .collect();
        Ok((start, completions))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {
    fn validate(&self, _ctx: &mut ValidationContext) -> Result<ValidationResult, ReadlineError> {
        Ok(ValidationResult::Valid(None))
    }
}

impl Helper for CommandCompleter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_by_prefix() {
        let completer = CommandCompleter::new();
        assert_eq!(completer.candidates("h"), vec!["history", "help"]);
        assert_eq!(completer.candidates("UN"), vec!["undo"]);
        assert_eq!(completer.candidates("").len(), COMMANDS.len());
        assert!(completer.candidates("zz").is_empty());
    }
}
