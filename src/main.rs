use anyhow::Result;

use calclist::config::Config;
use calclist::{logging, repl};

fn main() -> Result<()> {
    logging::init();

    let config = Config::from_env()?.with_args(std::env::args().skip(1))?;
    let code = repl::start_repl(&config)?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
