// This is a part of rust-encoding.
// Copyright (c) 2013-2014, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

/*!

# Encoding-html

Character encoding detection for HTML documents, built on
[rust-encoding](https://github.com/lifthrasiir/rust-encoding).

Given the raw bytes of a document, it finds the most probable encoding and decodes the document.
It looks at byte order marks, `<meta>` declarations (in whatever attribute order),
`charset=` and XML `encoding=` attributes in the head section,
then checks whether the whole document is structurally valid UTF-8,
and finally falls back to the default encoding of the locale.

## Simple Usage

To resolve and decode a document:

~~~~ {.rust}
use encoding::all::WINDOWS_1252;
use encoding_html::{EncodingResolver, LocaleDefault, Source};

let resolver = EncodingResolver::new(LocaleDefault::new(WINDOWS_1252));
let html = b"<html><head>\
             <meta content=\"text/html; charset=ISO-8859-2\" http-equiv=\"Content-Type\">\
             </head><body>\xb1</body></html>";

let detection = resolver.resolve(html);
assert_eq!(detection.name, "ISO-8859-2");
assert_eq!(detection.source, Source::MetaPrescan);
assert!(detection.text.contains("<body>\u{105}</body>"));
~~~~

Without any declaration, a document which is valid UTF-8 is taken as UTF-8,
and anything else is decoded with the locale default:

~~~~ {.rust}
use encoding::all::WINDOWS_1252;
use encoding_html::{EncodingResolver, LocaleDefault};

let resolver = EncodingResolver::new(LocaleDefault::new(WINDOWS_1252));
assert_eq!(resolver.resolve(b"<p>caf\xc3\xa9</p>").name, "UTF-8");
assert_eq!(resolver.resolve(b"<p>caf\xe9</p>").name, "windows-1252");
~~~~

The UTF-8 check is available on its own, too:

~~~~ {.rust}
use encoding_html::is_valid_utf8;

assert!(is_valid_utf8(Some(b"caf\xc3\xa9" as &[u8])));
assert!(!is_valid_utf8(Some(b"\xc0\x80" as &[u8]))); // overlong
assert!(!is_valid_utf8(Some(b"\xed\xa0\x80" as &[u8]))); // surrogate
assert!(!is_valid_utf8(None));
~~~~

## Detailed Usage

**`EncodingResolver`** is the entry point. It is built from two pieces of configuration:

* **`LocaleDefault`** is the encoding used when nothing else applies.
  `LocaleDefault::from_env()` reads it from `LC_ALL`, `LC_CTYPE` and `LANG`,
  but it is always passed to the resolver explicitly.
* **`CodecRegistry`** turns encoding names found in documents into codecs.
  `LabelRegistry` (the default) knows every encoding of rust-encoding,
  under its WHATWG labels and then some.
  Any `Fn(&str) -> Option<EncodingRef>` is a registry as well, which is handy for tests:

~~~~ {.rust}
use encoding::EncodingRef;
use encoding::all::{KOI8_R, WINDOWS_1252};
use encoding_html::{EncodingResolver, LocaleDefault};

fn only_koi8r(name: &str) -> Option<EncodingRef> {
    if name.eq_ignore_ascii_case("koi8-r") { Some(KOI8_R as EncodingRef) } else { None }
}

let resolver = EncodingResolver::with_registry(only_koi8r, LocaleDefault::new(WINDOWS_1252));
let html = b"<html><head><meta charset=\"iso-8859-5\"></head><body>\xe9</body></html>";
assert_eq!(resolver.resolve(html).name, "windows-1252");
~~~~

`EncodingResolver::codec_for_html` only picks the encoding,
and `EncodingResolver::resolve` also decodes the document.
Neither can fail: unknown names are skipped and malformed input is replaced with U+FFFD.
Line endings are left as they are; `document::read_html_file` is a convenience
that reads a file, resolves it and converts the line endings as well.

*/

pub use self::codec::utf_8::is_valid_utf8;
pub use self::error::Error;
pub use self::label::{canonical_name, encoding_from_name, LabelRegistry};
pub use self::locale::LocaleDefault;
pub use self::resolver::EncodingResolver;
pub use self::types::{Candidate, CodecRegistry, Detection, Source}; // reexport

#[cfg(test)] #[macro_use] mod testutils;

pub mod types;

/// Codec-level checks.
pub mod codec {
    pub mod utf_8;
}

pub mod declaration;
pub mod document;
pub mod error;
pub mod label;
pub mod locale;
pub mod resolver;
pub mod sniff;
