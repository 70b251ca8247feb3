//! Input decoding for strings received over the C ABI

use std::ffi::CStr;
use std::os::raw::c_char;

use crate::error::{PlannerError, PlannerResult};

/// Copy a caller-owned C string into an owned `String`
///
/// The pointer is only read during this call. The result is cut to at most
/// `max_len` bytes without splitting a character.
///
/// # Safety
///
/// `ptr` must be null or point to a null-terminated string that stays valid
/// for the duration of the call.
pub unsafe fn decode_text(ptr: *const c_char, field: &str, max_len: usize) -> PlannerResult<String> {
    if ptr.is_null() {
        return Err(PlannerError::InvalidInput(format!("{} pointer is null", field)));
    }

    let raw = CStr::from_ptr(ptr).to_string_lossy();
    Ok(truncate_to_boundary(&raw, max_len).to_string())
}

/// Longest prefix of `s` that fits in `max_len` bytes
pub fn truncate_to_boundary(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    #[test]
    fn test_decode_copies_text() {
        let input = CString::new("2025-03-01").unwrap();
        let decoded = unsafe { decode_text(input.as_ptr(), "date", 99) }.unwrap();
        assert_eq!(decoded, "2025-03-01");
    }

    #[test]
    fn test_decode_null_pointer() {
        let err = unsafe { decode_text(std::ptr::null(), "category", 99) }.unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("category"));
    }

    #[test]
    fn test_decode_invalid_utf8_is_lossy() {
        let input = CString::new(vec![b'a', 0xff, b'b']).unwrap();
        let decoded = unsafe { decode_text(input.as_ptr(), "description", 99) }.unwrap();
        assert_eq!(decoded, "a\u{fffd}b");
    }

    #[test]
    fn test_truncate_to_boundary() {
        assert_eq!(truncate_to_boundary("Lunch", 99), "Lunch");
        assert_eq!(truncate_to_boundary("Lunch", 3), "Lun");
        // "é" is two bytes; cutting inside it backs off to the previous boundary
        assert_eq!(truncate_to_boundary("café", 4), "caf");
        assert_eq!(truncate_to_boundary("café", 5), "café");
    }
}
