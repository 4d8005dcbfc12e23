// This is a part of rust-encoding.
// Copyright (c) 2013, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Macros for testing.

macro_rules! assert_valid(
    ($($byte:expr),*) => ({
        let input: &[u8] = &[$($byte),*];
        assert!(crate::codec::utf_8::is_valid_utf8(Some(input)),
                "is_valid_utf8 should accept {:02X?}, but instead rejected it", input);
    })
);

macro_rules! assert_invalid(
    ($($byte:expr),*) => ({
        let input: &[u8] = &[$($byte),*];
        assert!(!crate::codec::utf_8::is_valid_utf8(Some(input)),
                "is_valid_utf8 should reject {:02X?}, but instead accepted it", input);
    })
);

macro_rules! assert_resolves(
    ($resolver:expr, $input:expr, $name:expr, $source:expr) => ({
        let input: &[u8] = $input;
        let candidate = $resolver.codec_for_html(input);
        assert!(candidate.name() == $name && candidate.source == $source,
                "codec_for_html should return {:?}, but instead returned {:?}",
                ($name, $source), (candidate.name(), candidate.source));
    })
);
