use std::io::Write;
use tracing::{debug, info};

mod args;
mod error;
pub mod ffi;
mod factorial;
mod format;
mod output;

pub use args::{parse_int, Config};
pub use error::Error;
pub use factorial::factorial;
pub use format::{digit_count, uint_to_string, DigitBuffer, DEFAULT_CAPACITY, MAX_CAPACITY};
pub use output::emit;

pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<(), Error> {
    let input = config.input();
    debug!("argument {:?} parsed as {}", config.number, input);

    // negative input sign-extends into a huge n
    let n = input as u64;
    let value = factorial(n);
    info!("{}! = {} (mod 2^64)", n, value);

    let mut buf = DigitBuffer::with_capacity(config.buffer_size);
    let digits = buf.format(value)?;
    emit(out, input, digits)?;
    Ok(())
}
