// builtins.rs

use std::io::{self, Write};

use tracing::{debug, warn};

use crate::history::CalcHistory;
use crate::parser::Command;
use crate::util::{write_ignore_broken_pipe, writeln_ignore_broken_pipe};

const HELP: &str = "\
<op> <number>      apply an operation (+ - * / or add sub mul div), e.g. `+ 10`, `/7`
undo               remove the most recent operation
total              print the running total
history [digits]   print every operation, newest first
precision <digits> set the default number of decimal digits
clear              undo everything
exit [code]        leave the calculator";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Flow {
    Continue,
    Exit(i32),
}

/// A calculator plus the display settings of one interactive run.
pub struct Session {
    history: CalcHistory,
    precision: usize,
}

impl Session {
    pub fn new(precision: usize) -> Self {
        Self {
            history: CalcHistory::new(),
            precision,
        }
    }

    pub fn history(&self) -> &CalcHistory {
        &self.history
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Executes one command. Calculator errors are reported on `out` and the
    /// session carries on; only I/O failures are returned.
    pub fn run<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<Flow> {
        let precision = self.precision;
        match command {
            Command::Apply(op, operand) => match self.history.push(op, operand) {
                Ok(record) => writeln_ignore_broken_pipe(&mut *out, record.render(precision))?,
                Err(e) => writeln_ignore_broken_pipe(&mut *out, format!("error: {}", e))?,
            },
            Command::Undo => match self.history.undo() {
                Ok(record) => writeln_ignore_broken_pipe(
                    &mut *out,
                    format!("undone {}", record.render(precision)),
                )?,
                Err(e) => {
                    debug!("undo on empty history");
                    writeln_ignore_broken_pipe(&mut *out, format!("error: {}", e))?
                }
            },
            Command::Total => writeln_ignore_broken_pipe(
                &mut *out,
                format!("{:.*}", precision, self.history.total()),
            )?,
            Command::History(digits) => {
                let rendered = self.history.render(digits.unwrap_or(precision));
                write_ignore_broken_pipe(&mut *out, rendered)?
            }
            Command::Precision(digits) => {
                self.precision = digits;
                writeln_ignore_broken_pipe(&mut *out, format!("precision: {}", digits))?
            }
            Command::Clear => {
                self.history.clear();
                writeln_ignore_broken_pipe(&mut *out, "cleared")?
            }
            Command::Help => writeln_ignore_broken_pipe(&mut *out, HELP)?,
            Command::Exit(code) => {
                if code != 0 {
                    warn!(code, "exiting with non-zero status");
                }
                return Ok(Flow::Exit(code));
            }
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::Operation;
    use crate::parser::parse_command;

    fn run_script(session: &mut Session, lines: &[&str]) -> String {
        let mut out = Vec::new();
        for line in lines {
            if let Some(command) = parse_command(line).unwrap() {
                session.run(command, &mut out).unwrap();
            }
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn worked_example_session() {
        let mut session = Session::new(2);
        run_script(
            &mut session,
            &["+ 10", "* 5", "- 15", "/ 7", "undo", "- 30", "+ 5", "undo"],
        );
        assert_eq!(session.history().total(), 5.0);
        let out = run_script(&mut session, &["history"]);
        assert_eq!(
            out,
            "4: 35.00-30.00=5.00\n\
             3: 50.00-15.00=35.00\n\
             2: 10.00*5.00=50.00\n\
             1: 0.00+10.00=10.00\n"
        );
    }

    #[test]
    fn echoes_each_step() {
        let mut session = Session::new(1);
        let out = run_script(&mut session, &["add 4", "/2", "total", "undo", "total"]);
        assert_eq!(
            out,
            "1: 0.0+4.0=4.0\n2: 4.0/2.0=2.0\n2.0\nundone 2: 4.0/2.0=2.0\n4.0\n"
        );
    }

    #[test]
    fn errors_keep_session_alive() {
        let mut session = Session::new(2);
        let out = run_script(&mut session, &["undo", "+ 3", "/ 0", "total"]);
        assert_eq!(
            out,
            "error: No operations to remove.\n\
             1: 0.00+3.00=3.00\n\
             error: Division by zero is undefined.\n\
             3.00\n"
        );
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn precision_and_history_override() {
        let mut session = Session::new(2);
        let out = run_script(&mut session, &["precision 0", "+ 1.25", "history 3"]);
        assert_eq!(out, "precision: 0\n1: 0+1=1\n1: 0.000+1.250=1.250\n");
        assert_eq!(session.precision(), 0);
    }

    #[test]
    fn clear_and_empty_history() {
        let mut session = Session::new(2);
        let out = run_script(&mut session, &["+ 1", "* 3", "clear", "history", "total"]);
        assert_eq!(out, "1: 0.00+1.00=1.00\n2: 1.00*3.00=3.00\ncleared\n0.00\n");
        assert!(session.history().is_empty());
    }

    #[test]
    fn exit_flow() {
        let mut session = Session::new(2);
        let mut out = Vec::new();
        assert_eq!(
            session.run(Command::Apply(Operation::Add, 1.0), &mut out).unwrap(),
            Flow::Continue
        );
        assert_eq!(session.run(Command::Exit(0), &mut out).unwrap(), Flow::Exit(0));
        assert_eq!(session.run(Command::Exit(2), &mut out).unwrap(), Flow::Exit(2));
    }

    #[test]
    fn help_lists_commands() {
        let mut session = Session::new(2);
        let out = run_script(&mut session, &["help"]);
        for word in ["undo", "total", "history", "precision", "clear", "exit"] {
            assert!(out.contains(word), "help is missing {}", word);
        }
    }
}
