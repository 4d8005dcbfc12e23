// This is a part of rust-encoding.
// Copyright (c) 2014, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! The general-purpose HTML sniffer.
//!
//! This only understands byte order marks and the classic
//! `<meta http-equiv="Content-Type" content="text/html; charset=...">` form,
//! and only when `http-equiv` comes *before* `charset` in the tag.
//! `declaration::normalize` takes care of the latter for the resolver.

use encoding::all::{UTF_16BE, UTF_16LE, UTF_8};
use encoding::EncodingRef;
use log::trace;

use crate::types::{Candidate, CodecRegistry, Source};

/// The number of leading bytes examined by the `http-equiv` prescan.
pub const PRESCAN_LIMIT: usize = 512;

/// Determines the encoding from a byte order mark, if any.
/// Returns the encoding and the length of the mark.
pub fn encoding_from_bom(input: &[u8]) -> Option<(EncodingRef, usize)> {
    if input.starts_with(&[0xEF, 0xBB, 0xBF]) {
        Some((UTF_8 as EncodingRef, 3))
    } else if input.starts_with(&[0xFE, 0xFF]) {
        Some((UTF_16BE as EncodingRef, 2))
    } else if input.starts_with(&[0xFF, 0xFE]) {
        Some((UTF_16LE as EncodingRef, 2))
    } else {
        None
    }
}

/// Sniffs the encoding of an HTML document, or returns `fallback` when nothing was found.
/// The input should be the output of `declaration::normalize`.
pub fn sniff_html<R: CodecRegistry + ?Sized>(input: &[u8], registry: &R,
                                              fallback: EncodingRef) -> Candidate {
    if let Some((encoding, _)) = encoding_from_bom(input) {
        return Candidate::new(encoding, Source::ByteOrderMark);
    }
    if let Some(label) = prescan_http_equiv(input) {
        match registry.lookup(&label) {
            Some(encoding) => return Candidate::new(encoding, Source::MetaPrescan),
            None => trace!("prescan: unknown charset {:?}", label),
        }
    }
    Candidate::new(fallback, Source::LocaleDefault)
}

/// Extracts the `charset=` label of the first `http-equiv` meta tag
/// in the first `PRESCAN_LIMIT` bytes, if any. The label is lowercased.
pub fn prescan_http_equiv(input: &[u8]) -> Option<String> {
    let header = input[..input.len().min(PRESCAN_LIMIT)].to_ascii_lowercase();

    let http_equiv = find(&header, b"http-equiv=")?;
    rfind(&header[..http_equiv], b"meta ")?;
    let start = http_equiv + find(&header[http_equiv..], b"charset=")? + b"charset=".len();

    let value = &header[start..];
    let value = value.strip_prefix(b"\"").or_else(|| value.strip_prefix(b"'")).unwrap_or(value);
    let end = value.iter()
                   .position(|&b| matches!(b, b'"' | b'\'' | b';' | b'>' | b'/') ||
                                  b.is_ascii_whitespace())
                   .unwrap_or(value.len());
    if end == 0 {
        return None;
    }
    Some(String::from_utf8_lossy(&value[..end]).into_owned())
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn rfind(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).rposition(|w| w == needle)
}
