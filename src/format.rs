use tracing::debug;

use crate::error::Error;

pub const DEFAULT_CAPACITY: usize = 1024;
/// Upper bound accepted for `--buffer-size`; a `u64` needs at most 21 bytes.
pub const MAX_CAPACITY: usize = 1 << 20;

pub fn digit_count(mut value: u64) -> usize {
    let mut count = 1;
    while value >= 10 {
        value /= 10;
        count += 1;
    }
    count
}

/// Writes the decimal digits of `value` to the front of `buf` and returns the
/// index one past the last digit.
///
/// A returned index below `buf.len()` is free for a terminator. When the
/// digits plus a terminator don't fit, the digit count is returned instead
/// (always `>= buf.len()`) and `buf` is left untouched.
pub fn uint_to_string(value: u64, buf: &mut [u8]) -> usize {
    let len = digit_count(value);
    if len >= buf.len() {
        return len;
    }
    // least significant digit first, filled from the back of the run
    let mut n = value;
    for slot in buf[..len].iter_mut().rev() {
        *slot = b'0' + (n % 10) as u8;
        n /= 10;
    }
    len
}

/// Fixed-capacity output buffer handed to [`uint_to_string`].
#[derive(Debug, Clone)]
pub struct DigitBuffer {
    bytes: Vec<u8>,
}

impl DigitBuffer {
    pub fn new() -> DigitBuffer {
        DigitBuffer::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> DigitBuffer {
        DigitBuffer {
            bytes: vec![0; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Formats `value`, NUL-terminates it, and returns the digits without the
    /// terminator.
    pub fn format(&mut self, value: u64) -> Result<&[u8], Error> {
        let capacity = self.capacity();
        let end = uint_to_string(value, &mut self.bytes);
        if end >= capacity {
            debug!("{} digits do not fit in a {} byte buffer", end, capacity);
            return Err(Error::FormatOverflow {
                digits: end,
                capacity,
            });
        }
        self.bytes[end] = 0;
        debug!("formatted {} into {} digits", value, end);
        Ok(&self.bytes[..end])
    }
}

impl Default for DigitBuffer {
    fn default() -> Self {
        DigitBuffer::new()
    }
}
