// This is a part of rust-encoding.
// Copyright (c) 2014, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Encoding declarations in the head section of an HTML document.
//!
//! Everything here works on raw bytes with ASCII-only, case-insensitive patterns,
//! so the document does not have to be decoded (or even be ASCII-compatible) beforehand.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::bytes::{Captures, Regex};

#[allow(clippy::expect_used)]
static HEAD_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u)</\s*head\b[^>]*>").expect("valid regex")
});

/// `<meta ... http-equiv="Content-Type" ...>`, with the attributes around `http-equiv` captured.
#[allow(clippy::expect_used)]
static META_CONTENT_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i-u)<\s*meta\b([^>]*?)http-equiv\s*=\s*["']?content-type["']?([^>]*)>"#)
        .expect("valid regex")
});

#[allow(clippy::expect_used)]
static CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i-u)charset\s*=\s*["']?([^"'\s;>/]+)"#).expect("valid regex")
});

#[allow(clippy::expect_used)]
static ENCODING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i-u)encoding\s*=\s*(?:"([^"]+)"|'([^']+)')"#).expect("valid regex")
});

/// Returns the offset right past the first `</head>` marker, if any.
pub fn head_end(input: &[u8]) -> Option<usize> {
    HEAD_END.find(input).map(|m| m.end())
}

/// Returns the head section, i.e. everything up to and including the first `</head>` marker.
/// Returns `None` if there is no such marker.
pub fn head_section(input: &[u8]) -> Option<&[u8]> {
    head_end(input).map(|end| &input[..end])
}

/// Rewrites every `<meta>` tag with `http-equiv="Content-Type"` in the head section
/// so that `http-equiv` is its first attribute.
/// The whole document counts as the head section when there is no `</head>` marker.
///
/// The remaining attributes keep their order and are separated by a single space.
/// Nothing past the head section is touched, and normalizing twice is the same as normalizing once.
pub fn normalize(input: &[u8]) -> Cow<[u8]> {
    let (head, body) = input.split_at(head_end(input).unwrap_or(input.len()));
    let rewritten = META_CONTENT_TYPE.replace_all(head, |caps: &Captures| canonical_meta(caps));
    if *rewritten == *head {
        return Cow::Borrowed(input);
    }
    let mut output = rewritten.into_owned();
    output.extend_from_slice(body);
    Cow::Owned(output)
}

fn canonical_meta(caps: &Captures) -> Vec<u8> {
    let mut tag = b"<meta http-equiv=\"Content-Type\"".to_vec();
    for attrs in [&caps[1], &caps[2]] {
        let attrs = attrs.trim_ascii();
        if !attrs.is_empty() {
            tag.push(b' ');
            tag.extend_from_slice(attrs);
        }
    }
    tag.push(b'>');
    tag
}

/// Returns the value of the first `charset=` attribute (or content parameter) in given bytes.
/// The value may be quoted or not.
pub fn charset_value(head: &[u8]) -> Option<String> {
    CHARSET.captures(head).map(|caps| String::from_utf8_lossy(&caps[1]).into_owned())
}

/// Returns the value of the first quoted `encoding=` attribute in given bytes,
/// as found in an XML declaration like `<?xml version="1.0" encoding="UTF-8"?>`.
pub fn encoding_value(head: &[u8]) -> Option<String> {
    let caps = ENCODING.captures(head)?;
    let value = caps.get(1).or_else(|| caps.get(2))?;
    Some(String::from_utf8_lossy(value.as_bytes()).into_owned())
}
