use anyhow::{Context, Result};
use std::{env, io, process};
use tracing::Level;

use ffi_factorial::{run, Config, Error};

fn main() -> Result<()> {
    let config = Config::new(env::args_os()).unwrap_or_else(|err| exit_with(err));
    init_tracing(config.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&config, &mut out) {
        Ok(()) => Ok(()),
        Err(Error::Io(err)) => Err(err).context("failed to write result"),
        Err(err) => exit_with(err),
    }
}

fn exit_with(err: Error) -> ! {
    match err {
        Error::Usage(err) => err.exit(),
        err => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}

fn init_tracing(verbose: u64) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}
