use std::io::{self, Write};

use flipgreet::{Config, FlipgreetError, Selector};

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), FlipgreetError> {
    let config = Config::default();
    config.validate()?;
    let mut selector = Selector::new(rand::thread_rng(), config);
    let line = selector.line();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{line}")?;
    Ok(())
}
