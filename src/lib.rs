// lib.rs

pub mod builtins;
pub mod completion;
pub mod config;
pub mod error;
pub mod history;
pub mod logging;
pub mod parser;
pub mod repl;
pub mod util;

pub use error::CalcError;
pub use history::{CalcHistory, Operation, Record};
