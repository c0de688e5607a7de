// parser.rs

use anyhow::{anyhow, bail, Context, Result};

use crate::history::Operation;

/// Command words offered by tab completion.
pub const COMMANDS: [&str; 12] = [
    "add", "sub", "mul", "div", "undo", "total", "history", "precision", "clear", "help", "exit",
    "quit",
];

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Command {
    Apply(Operation, f64),
    Undo,
    Total,
    History(Option<usize>),
    Precision(usize),
    Clear,
    Help,
    Exit(i32),
}

pub fn split_tokens(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut cur = String::new();
    for ch in line.chars() {
        if ch.is_whitespace() {
            if !cur.is_empty() {
                tokens.push(cur.clone());
                cur.clear();
            }
        } else {
            cur.push(ch);
        }
    }
    if !cur.is_empty() {
        tokens.push(cur);
    }
    tokens
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let tokens = split_tokens(line);
    let Some((head, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match (head.to_ascii_lowercase().as_str(), args) {
        ("undo", []) => Command::Undo,
        ("total", []) => Command::Total,
        ("clear", []) => Command::Clear,
        ("help", []) => Command::Help,
        ("history", []) => Command::History(None),
        ("history", [precision]) => Command::History(Some(parse_precision(precision)?)),
        ("precision", [precision]) => Command::Precision(parse_precision(precision)?),
        ("exit" | "quit", []) => Command::Exit(0),
        ("exit" | "quit", [code]) => Command::Exit(code.parse::<i32>().unwrap_or(255)),
        ("undo" | "total" | "clear" | "help" | "history" | "precision" | "exit" | "quit", _) => {
            bail!("{}: wrong number of arguments", head)
        }
        _ => parse_operation(head, args)?,
    };
    Ok(Some(command))
}

fn parse_operation(head: &str, args: &[String]) -> Result<Command> {
    match args {
        [operand] => {
            let op = head
                .parse::<Operation>()
                .map_err(|_| anyhow!("{}: command not found", head))?;
            Ok(Command::Apply(op, parse_operand(operand)?))
        }
        // compact form: `+10`, `/7`
        [] => {
            let mut chars = head.chars();
            let op = chars
                .next()
                .and_then(|c| Operation::try_from(c).ok())
                .ok_or_else(|| anyhow!("{}: command not found", head))?;
            let rest = chars.as_str();
            if rest.is_empty() {
                bail!("{}: missing operand", head);
            }
            Ok(Command::Apply(op, parse_operand(rest)?))
        }
        _ => bail!("{}: too many arguments", head),
    }
}

fn parse_operand(token: &str) -> Result<f64> {
    token
        .parse::<f64>()
        .with_context(|| format!("{}: not a number", token))
}

fn parse_precision(token: &str) -> Result<usize> {
    token
        .parse::<usize>()
        .with_context(|| format!("{}: precision must be a non-negative integer", token))
}
