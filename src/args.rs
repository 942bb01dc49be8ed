use clap::Parser;
use std::ffi::OsString;

use crate::error::Error;
use crate::format::{DEFAULT_CAPACITY, MAX_CAPACITY};

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Prints the factorial of a number",
    long_about = None
)]
pub struct Config {
    /// Number whose factorial is printed; text that is not a number counts as 0.
    /// Options go after it, since anything in this position is taken as the number
    #[clap(allow_hyphen_values = true)]
    pub number: String,
    /// Capacity of the output buffer in bytes
    #[clap(
        short,
        long,
        default_value_t = DEFAULT_CAPACITY,
        parse(try_from_str = parse_buffer_size)
    )]
    pub buffer_size: usize,
    /// Log more (-v info, -vv debug, -vvv trace)
    #[clap(short, long, parse(from_occurrences))]
    pub verbose: u64,
}

impl Config {
    pub fn new<I, T>(args: I) -> Result<Config, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Ok(Config::try_parse_from(args)?)
    }

    pub fn input(&self) -> i32 {
        parse_int(&self.number)
    }
}

fn parse_buffer_size(text: &str) -> Result<usize, String> {
    let size = text.parse::<usize>().map_err(|e| e.to_string())?;
    if size > MAX_CAPACITY {
        return Err(format!("must be at most {}", MAX_CAPACITY));
    }
    Ok(size)
}

/// Lenient decimal parse: leading whitespace, an optional sign, then as many
/// digits as follow. Anything else yields 0. The value saturates at the `i64`
/// bounds and is then truncated to `i32`.
pub fn parse_int(text: &str) -> i32 {
    let text =
        text.trim_start_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r'));
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let d = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }
    value as i32
}
