// repl.rs

use std::io;

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config as EditorConfig, Editor};
use tracing::{debug, warn};

use crate::builtins::{Flow, Session};
use crate::completion::CommandCompleter;
use crate::config::Config;
use crate::parser::parse_command;
use crate::util::writeln_ignore_broken_pipe;

/// Runs the interactive loop until `exit`, Ctrl-C or end of input and
/// returns the exit status the process should report.
pub fn start_repl(config: &Config) -> Result<i32> {
    let editor_config = EditorConfig::builder()
        .completion_type(CompletionType::List)
        .auto_add_history(false)
        .build();
    let mut rl: Editor<CommandCompleter, DefaultHistory> =
        Editor::with_config(editor_config).context("failed to create line editor")?;
    rl.set_helper(Some(CommandCompleter::new()));

    let mut session = Session::new(config.precision);
    let mut stdout = io::stdout();
    debug!(precision = config.precision, "starting repl");

    loop {
        match rl.readline(&config.prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);
                let command = match parse_command(trimmed) {
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(e) => {
                        warn!(input = trimmed, "unparsable input");
                        writeln_ignore_broken_pipe(&mut stdout, format!("error: {}", e))?;
                        continue;
                    }
                };
                if let Flow::Exit(code) = session.run(command, &mut stdout)? {
                    return Ok(code);
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(0),
            Err(err) => return Err(err).context("failed to read input"),
        }
    }
}
