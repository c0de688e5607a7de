// config.rs

use anyhow::{bail, Context, Result};

pub const DEFAULT_PRECISION: usize = 2;
pub const DEFAULT_PROMPT: &str = "> ";

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Config {
    /// Digits after the decimal point when no explicit precision is given.
    pub precision: usize,
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl Config {
    /// Defaults overridden by `CALC_PRECISION` and `CALC_PROMPT`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup("CALC_PRECISION") {
            config.precision = value
                .trim()
                .parse()
                .with_context(|| format!("CALC_PRECISION={}: not a non-negative integer", value))?;
        }
        if let Some(prompt) = lookup("CALC_PROMPT") {
            config.prompt = prompt;
        }
        Ok(config)
    }

    /// Applies `-p <n>` / `--precision <n>` from the command line.
    pub fn with_args<I>(mut self, args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-p" | "--precision" => {
                    let Some(value) = args.next() else {
                        bail!("{}: missing value", arg);
                    };
                    self.precision = value
                        .parse()
                        .with_context(|| format!("{} {}: not a non-negative integer", arg, value))?;
                }
                other => bail!("{}: unknown argument", other),
            }
        }
        Ok(self)
    }
}
