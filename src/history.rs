// history.rs

//! Running total with an undoable, append-only trail of operations.
//!
//! Every [`Record`] keeps the total before and after it was applied, so undo
//! is a pop plus a restore and never recomputes anything.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use tracing::{debug, warn};

use crate::error::{CalcError, Result};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Applies the operator with plain IEEE semantics. Callers reject a zero
    /// divisor before getting here.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operation::Add => lhs + rhs,
            Operation::Subtract => lhs - rhs,
            Operation::Multiply => lhs * rhs,
            Operation::Divide => lhs / rhs,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "sub",
            Operation::Multiply => "mul",
            Operation::Divide => "div",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Operation {
    type Error = CalcError;

    fn try_from(c: char) -> Result<Self> {
        match c {
            '+' => Ok(Operation::Add),
            '-' => Ok(Operation::Subtract),
            '*' | 'x' => Ok(Operation::Multiply),
            '/' => Ok(Operation::Divide),
            _ => Err(CalcError::invalid("Invalid operation.")),
        }
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Operation::try_from(c);
        }
        match s.to_ascii_lowercase().as_str() {
            "add" | "plus" => Ok(Operation::Add),
            "sub" | "subtract" | "minus" => Ok(Operation::Subtract),
            "mul" | "multiply" | "times" => Ok(Operation::Multiply),
            "div" | "divide" => Ok(Operation::Divide),
            _ => Err(CalcError::invalid("Invalid operation.")),
        }
    }
}

/// One applied step. Never mutated after [`CalcHistory::push`] builds it.
#[derive(Clone, PartialEq, Debug)]
pub struct Record {
    step: usize,
    total_before: f64,
    operand: f64,
    operation: Operation,
    total_after: f64,
}

impl Record {
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn total_before(&self) -> f64 {
        self.total_before
    }

    pub fn operand(&self) -> f64 {
        self.operand
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn total_after(&self) -> f64 {
        self.total_after
    }

    /// `<step>: <before><op><operand>=<after>` with every value in fixed
    /// notation and `precision` fractional digits. No line terminator.
    pub fn render(&self, precision: usize) -> String {
        format!(
            "{}: {:.*}{}{:.*}={:.*}",
            self.step,
            precision,
            self.total_before,
            self.operation.symbol(),
            precision,
            self.operand,
            precision,
            self.total_after,
        )
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}{}{}={}",
            self.step, self.total_before, self.operation, self.operand, self.total_after
        )
    }
}

#[derive(Debug, Default)]
pub struct CalcHistory {
    records: Vec<Record>,
    step_count: usize,
    current_total: f64,
}

impl CalcHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> f64 {
        self.current_total
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    /// Oldest first. Use `.rev()` for the order [`render`](Self::render) prints.
    pub fn records(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Step number the next successful push will receive.
    pub fn next_step(&self) -> usize {
        self.step_count + 1
    }

    /// Applies `op` to the running total and appends the resulting record.
    /// A zero divisor is rejected before anything changes.
    pub fn push(&mut self, op: Operation, operand: f64) -> Result<&Record> {
        if op == Operation::Divide && operand == 0.0 {
            warn!(total = self.current_total, "rejected division by zero");
            return Err(CalcError::invalid("Division by zero is undefined."));
        }

        let total_after = op.apply(self.current_total, operand);
        self.step_count += 1;
        let record = Record {
            step: self.step_count,
            total_before: self.current_total,
            operand,
            operation: op,
            total_after,
        };
        debug!(step = record.step, %record, "push");

        self.current_total = total_after;
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    /// Removes the most recent record and restores the total it started from.
    /// The step counter steps back too, so the next push reuses this step.
    pub fn undo(&mut self) -> Result<Record> {
        let record = self.records.pop().ok_or(CalcError::EmptyHistory)?;
        self.current_total = record.total_before;
        self.step_count -= 1;
        debug!(step = record.step, total = self.current_total, "undo");
        Ok(record)
    }

    /// Undoes every record, newest first.
    pub fn clear(&mut self) {
        while self.undo().is_ok() {}
    }

    /// One line per record, newest first, each ending in `\n`. Empty history
    /// renders as the empty string.
    pub fn render(&self, precision: usize) -> String {
        self.records
            .iter()
            .rev()
            .format_with("", |record, f| {
                f(&format_args!("{}\n", record.render(precision)))
            })
            .to_string()
    }
}
