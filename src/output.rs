use std::io::{self, Write};

/// Prints `<input>! = <digits>` with no trailing newline.
pub fn emit<W: Write>(out: &mut W, input: i32, digits: &[u8]) -> io::Result<()> {
    write!(out, "{}! = ", input)?;
    out.write_all(digits)?;
    out.flush()
}
