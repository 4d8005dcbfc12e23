// This is a part of rust-encoding.
// Copyright (c) 2013, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Structural UTF-8 validation.

use log::trace;

/**
 * Checks if given byte sequence looks like UTF-8 text.
 *
 * This is a byte pattern check after the W3C's
 * [multilingual form encoding](http://www.w3.org/International/questions/qa-forms-utf-8)
 * recipe, and is stricter than what `std::str::from_utf8` accepts:
 * besides overlong forms, surrogates and anything past U+10FFFF,
 * it also rejects every C0 control character other than tab, LF and CR, as well as DEL.
 * Such bytes hardly appear in HTML documents, so rejecting them makes a false positive
 * (a legacy-encoded document taken for UTF-8) much less likely.
 *
 * An empty sequence is valid. An absent one (`None`) is not.
 */
pub fn is_valid_utf8(input: Option<&[u8]>) -> bool {
    let input = match input {
        Some(input) => input,
        None => return false,
    };
    match valid_up_to(input) {
        Ok(()) => true,
        Err(pos) => {
            trace!("not utf-8: byte {:#04x} at offset {} starts no valid sequence", input[pos], pos);
            false
        }
    }
}

/// Scans given byte sequence with the same rules as `is_valid_utf8`.
/// Returns the offset of the first sequence that failed to match, if any.
///
/// The scan never backs up: a failed sequence makes the whole input invalid
/// even when a shorter reading of the same bytes would have matched.
pub fn valid_up_to(input: &[u8]) -> Result<(), usize> {
    let mut pos = 0;
    while pos < input.len() {
        match sequence_len(input, pos) {
            Some(len) => pos += len,
            None => return Err(pos),
        }
    }
    Ok(())
}

// 1 (09,0A,0D,20-7E): single byte
// 2 (C2-DF): two bytes, next byte unrestricted
// 3 (E0): three bytes, next byte restricted to non-overlong (A0-BF)
// 3 (E1-EC,EE-EF): three bytes, next byte unrestricted
// 3 (ED): three bytes, next byte restricted to non-surrogates (80-9F)
// 4 (F0): four bytes, next byte restricted to non-overlong (90-BF)
// 4 (F1-F3): four bytes, next byte unrestricted
// 4 (F4): four bytes, next byte restricted to 0+10FFFF (80-8F)
fn sequence_len(input: &[u8], pos: usize) -> Option<usize> {
    // bytes past the end read as zero, which is never a continuation byte
    let at = |offset: usize| input.get(pos + offset).copied().unwrap_or(0);

    let (len, lower, upper) = match at(0) {
        0x09 | 0x0a | 0x0d | 0x20..=0x7e => return Some(1),
        0xc2..=0xdf => (2, 0x80, 0xbf),
        0xe0 => (3, 0xa0, 0xbf),
        0xe1..=0xec | 0xee | 0xef => (3, 0x80, 0xbf),
        0xed => (3, 0x80, 0x9f),
        0xf0 => (4, 0x90, 0xbf),
        0xf1..=0xf3 => (4, 0x80, 0xbf),
        0xf4 => (4, 0x80, 0x8f),
        _ => return None,
    };
    if !(lower..=upper).contains(&at(1)) {
        return None;
    }
    if (2..len).all(|offset| is_continuation(at(offset))) {
        Some(len)
    } else {
        None
    }
}

#[inline]
fn is_continuation(b: u8) -> bool {
    (0x80..=0xbf).contains(&b)
}

#[cfg(test)]
mod tests {
    // portions of these tests are adopted from Markus Kuhn's UTF-8 decoder capability and
    // stress test: <http://www.cl.cam.ac.uk/~mgk25/ucs/examples/UTF-8-test.txt>.

    use super::{is_valid_utf8, valid_up_to};

    #[test]
    fn test_absent_and_empty() {
        assert!(!is_valid_utf8(None));
        assert!(is_valid_utf8(Some(b"" as &[u8])));
    }

    #[test]
    fn test_valid() {
        // one byte
        assert_valid!(0x41);
        assert_valid!(0x09, 0x0a, 0x0d, 0x20, 0x7e);

        // two bytes
        assert_valid!(0xc2, 0xa2);
        assert_valid!(0xd5, 0xa1, 0xd5, 0xb5, 0xd5, 0xa2, 0xd5, 0xb8, 0xd6, 0x82,
                      0xd5, 0xa2, 0xd5, 0xa5, 0xd5, 0xb6);

        // three bytes
        assert_valid!(0xed, 0x92, 0x89);
        assert_valid!(0xe6, 0xbc, 0xa2, 0xe5, 0xad, 0x97);

        // four bytes
        assert_valid!(0xf0, 0x90, 0x82, 0x82);

        // mixed
        assert_valid!(0x3c, 0x70, 0x3e, 0xc3, 0xa9, 0xe2, 0x82, 0xac, 0xf0, 0x9f, 0x98, 0x80,
                      0x3c, 0x2f, 0x70, 0x3e, 0x0a);
    }

    #[test]
    fn test_every_printable_ascii() {
        let mut input: Vec<u8> = (0x20u8..=0x7e).collect();
        input.extend_from_slice(b"\t\r\n");
        assert!(is_valid_utf8(Some(&input[..])));
    }

    #[test]
    fn test_valid_boundary() {
        assert_valid!(0xc2, 0x80);
        assert_valid!(0xdf, 0xbf);
        assert_valid!(0xe0, 0xa0, 0x80);
        assert_valid!(0xe0, 0xbf, 0xbf);
        assert_valid!(0xe1, 0x80, 0x80);
        assert_valid!(0xec, 0xbf, 0xbf);
        assert_valid!(0xed, 0x80, 0x80);
        assert_valid!(0xed, 0x9f, 0xbf);
        assert_valid!(0xee, 0x80, 0x80);
        assert_valid!(0xef, 0xbf, 0xbf);
        assert_valid!(0xf0, 0x90, 0x80, 0x80);
        assert_valid!(0xf0, 0xbf, 0xbf, 0xbf);
        assert_valid!(0xf1, 0x80, 0x80, 0x80);
        assert_valid!(0xf3, 0xbf, 0xbf, 0xbf);
        assert_valid!(0xf4, 0x80, 0x80, 0x80);
        assert_valid!(0xf4, 0x8f, 0xbf, 0xbf);
    }

    #[test]
    fn test_invalid_control() {
        // unlike str::from_utf8, NUL and most C0 controls are rejected
        for c in (0x00u8..0x20).filter(|&c| c != 0x09 && c != 0x0a && c != 0x0d) {
            assert_invalid!(c);
            assert_invalid!(0x41, c);
        }
        assert_invalid!(0x7f);
    }

    #[test]
    fn test_invalid_continuation() {
        for c in 0x80u8..0xc0 {
            assert_invalid!(c);
            assert_invalid!(c, c);
            assert_invalid!(0x41, c);
            assert_invalid!(0xc2, 0x80, c);
        }
    }

    #[test]
    fn test_invalid_surrogate() {
        assert_invalid!(0xed, 0xa0, 0x80);
        assert_invalid!(0xed, 0xad, 0xbf);
        assert_invalid!(0xed, 0xae, 0x80);
        assert_invalid!(0xed, 0xaf, 0xbf);
        assert_invalid!(0xed, 0xb0, 0x80);
        assert_invalid!(0xed, 0xbe, 0x80);
        assert_invalid!(0xed, 0xbf, 0xbf);
    }

    #[test]
    fn test_invalid_boundary() {
        assert_invalid!(0xf4, 0x90, 0x80, 0x80); // U+110000
        assert_invalid!(0xf4, 0xbf, 0xbf, 0xbf);
    }

    #[test]
    fn test_invalid_start() {
        for c in 0xf5u16..0x100 {
            let c = c as u8;
            assert_invalid!(c);
            assert_invalid!(c, 0x80, 0x80, 0x80);
            assert_invalid!(c, 0x20);
        }
    }

    #[test]
    fn test_invalid_overlong_minimal() {
        assert_invalid!(0xc0, 0x80);
        assert_invalid!(0xe0, 0x80, 0x80);
        assert_invalid!(0xf0, 0x80, 0x80, 0x80);
    }

    #[test]
    fn test_invalid_overlong_maximal() {
        assert_invalid!(0xc1, 0xbf);
        assert_invalid!(0xe0, 0x9f, 0xbf);
        assert_invalid!(0xf0, 0x8f, 0xbf, 0xbf);
    }

    #[test]
    fn test_invalid_truncated_at_end() {
        assert_invalid!(0xc2);
        assert_invalid!(0xe0, 0xa0);
        assert_invalid!(0xe1, 0x80);
        assert_invalid!(0xed, 0x80);
        assert_invalid!(0xf0, 0x90, 0x80);
        assert_invalid!(0xf1, 0x80, 0x80);
        assert_invalid!(0xf4, 0x80, 0x80);
        assert_invalid!(0x41, 0x42, 0xe6, 0xbc);
    }

    #[test]
    fn test_invalid_incomplete_seq_followed_by_space() {
        for b in 0xc2u8..0xf5 {
            let c = match b { 0xe0 => 0xa0, 0xf0 => 0x90, _ => 0x80 };
            assert_invalid!(b, 0x20);
            if b >= 0xe0 {
                assert_invalid!(b, c, 0x20);
            }
            if b >= 0xf0 {
                assert_invalid!(b, c, 0x80, 0x20);
            }
        }
    }

    #[test]
    fn test_invalid_five_and_six_byte_forms() {
        assert_invalid!(0xf8, 0x88, 0x80, 0x80, 0x80);
        assert_invalid!(0xfc, 0x84, 0x80, 0x80, 0x80, 0x80);
        assert_invalid!(0xfe);
        assert_invalid!(0xff);
    }

    #[test]
    fn test_valid_up_to() {
        assert_eq!(valid_up_to(b""), Ok(()));
        assert_eq!(valid_up_to(b"plain"), Ok(()));
        assert_eq!(valid_up_to(b"caf\xc3\xa9"), Ok(()));
        assert_eq!(valid_up_to(b"caf\xe9"), Err(3));
        assert_eq!(valid_up_to(b"\xc3\xa9\xc3"), Err(2));
        assert_eq!(valid_up_to(b"ab\x00"), Err(2));
    }
}
