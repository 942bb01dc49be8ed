//! C ABI entry points for the two numeric routines. The package also builds
//! as a static library, so a C caller can link against them the same way it
//! would link hand-written assembly.

use std::slice;

use crate::format;

#[no_mangle]
pub extern "C" fn factorial(n: u64) -> u64 {
    crate::factorial::factorial(n)
}

/// Formats `n` into `buf[..bufsize]` and returns the index one past the last
/// digit, or a value `>= bufsize` if it doesn't fit. Never writes the
/// terminator.
///
/// # Safety
///
/// `buf` must be null or valid for writes of `bufsize` bytes.
#[no_mangle]
pub unsafe extern "C" fn uint2str(n: u64, buf: *mut u8, bufsize: u64) -> u64 {
    let len = match usize::try_from(bufsize) {
        Ok(len) if !buf.is_null() && len > 0 => len,
        _ => return bufsize.max(format::digit_count(n) as u64),
    };
    let buf = slice::from_raw_parts_mut(buf, len);
    format::uint_to_string(n, buf) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    type FactorialFn = extern "C" fn(u64) -> u64;
    type Uint2StrFn = unsafe extern "C" fn(u64, *mut u8, u64) -> u64;

    const FACTORIAL: FactorialFn = factorial;
    const UINT2STR: Uint2StrFn = uint2str;

    #[test]
    fn factorial_through_c_abi() {
        assert_eq!(FACTORIAL(5), 120);
        assert_eq!(FACTORIAL(20), 2_432_902_008_176_640_000);
        assert_eq!(FACTORIAL(25), 7_034_535_277_573_963_776);
    }

    #[test]
    fn caller_terminates_buffer() {
        let mut buf = [0xff_u8; 1024];
        let last = unsafe { UINT2STR(FACTORIAL(10), buf.as_mut_ptr(), buf.len() as u64) };
        assert!(last < buf.len() as u64);
        buf[last as usize] = 0;
        assert_eq!(&buf[..=last as usize], b"3628800\0");
    }

    #[test]
    fn short_buffer_is_left_alone() {
        let mut buf = [0xff_u8; 3];
        let last = unsafe { UINT2STR(120, buf.as_mut_ptr(), buf.len() as u64) };
        assert!(last >= 3);
        assert_eq!(buf, [0xff; 3]);
    }

    #[test]
    fn null_or_empty_buffer() {
        assert!(unsafe { UINT2STR(7, ptr::null_mut(), 16) } >= 16);
        let mut buf = [0_u8; 1];
        assert!(unsafe { UINT2STR(7, buf.as_mut_ptr(), 0) } >= 1);
    }
}
