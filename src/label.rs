// This is a part of rust-encoding.
// Copyright (c) 2013-2014, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! The default named-encoding registry and canonical encoding names.

use encoding::all;
use encoding::label::encoding_from_whatwg_label;
use encoding::{Encoding, EncodingRef};

use crate::types::CodecRegistry;

/// Returns an encoding from given name, if any.
///
/// The name is matched case-insensitively after trimming ASCII whitespace, in this order:
///
/// 1. Names which the WHATWG Encoding standard deliberately remaps,
///    but which an HTML author (or a POSIX locale) means literally:
///    `iso-8859-1` and its aliases give the real ISO 8859-1 instead of windows-1252,
///    and `us-ascii` and its aliases give the strict 7-bit ASCII.
/// 2. The native name of any encoding in `encoding::all`.
/// 3. Any label known to the WHATWG Encoding standard.
///
/// Encodings which can only report errors while decoding are never returned.
pub fn encoding_from_name(name: &str) -> Option<EncodingRef> {
    let name = name.trim_matches(&[' ', '\n', '\r', '\t', '\x0C'][..]).to_ascii_lowercase();
    if name.is_empty() {
        return None;
    }
    let found = match &name[..] {
        "csisolatin1" |
        "cp819" |
        "ibm819" |
        "iso-8859-1" |
        "iso-ir-100" |
        "iso8859-1" |
        "iso88591" |
        "iso_8859-1" |
        "iso_8859-1:1987" |
        "l1" |
        "latin-1" |
        "latin1" =>
            Some(all::ISO_8859_1 as EncodingRef),
        "ansi_x3.4-1968" |
        "ascii" |
        "cp367" |
        "csascii" |
        "ibm367" |
        "iso646-us" |
        "us" |
        "us-ascii" =>
            Some(all::ASCII as EncodingRef),
        _ => all::encodings()
            .iter()
            .find(|enc| enc.name() == name)
            .cloned()
            .or_else(|| encoding_from_whatwg_label(&name)),
    };
    found.filter(|enc| !is_decode_only_errors(*enc))
}

fn is_decode_only_errors(encoding: EncodingRef) -> bool {
    matches!(encoding.name(), "error" | "encoder-only-utf-8")
}

/// The default `CodecRegistry`, backed by `encoding_from_name`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LabelRegistry;

impl CodecRegistry for LabelRegistry {
    fn lookup(&self, name: &str) -> Option<EncodingRef> {
        encoding_from_name(name)
    }
}

/// Returns the canonical name of given encoding.
///
/// This is the IANA preferred MIME name where one exists
/// (so `"UTF-8"`, `"ISO-8859-1"` and `"Shift_JIS"`),
/// and the native rust-encoding name otherwise (so `"windows-1252"`).
pub fn canonical_name(encoding: EncodingRef) -> &'static str {
    match encoding.name() {
        "utf-8" => "UTF-8",
        "utf-16le" => "UTF-16LE",
        "utf-16be" => "UTF-16BE",
        "ascii" => "US-ASCII",
        "iso-8859-1" => "ISO-8859-1",
        "iso-8859-2" => "ISO-8859-2",
        "iso-8859-3" => "ISO-8859-3",
        "iso-8859-4" => "ISO-8859-4",
        "iso-8859-5" => "ISO-8859-5",
        "iso-8859-6" => "ISO-8859-6",
        "iso-8859-7" => "ISO-8859-7",
        "iso-8859-8" => "ISO-8859-8",
        "iso-8859-8-i" => "ISO-8859-8-I",
        "iso-8859-10" => "ISO-8859-10",
        "iso-8859-13" => "ISO-8859-13",
        "iso-8859-14" => "ISO-8859-14",
        "iso-8859-15" => "ISO-8859-15",
        "iso-8859-16" => "ISO-8859-16",
        "ibm866" => "IBM866",
        "koi8-r" => "KOI8-R",
        "koi8-u" => "KOI8-U",
        "mac-roman" => "macintosh",
        "mac-cyrillic" => "x-mac-cyrillic",
        "windows-949" => "EUC-KR",
        "euc-jp" => "EUC-JP",
        "windows-31j" => "Shift_JIS",
        "iso-2022-jp" => "ISO-2022-JP",
        "gbk" => "GBK",
        "gb18030" => "GB18030",
        "hz" => "HZ-GB-2312",
        "big5-2003" => "Big5",
        name => name,
    }
}
