// This is a part of rust-encoding.
// Copyright (c) 2013-2014, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

/*!
 * Interface to the encoding resolver.
 *
 * # Detection stages
 *
 * A raw HTML document is run through up to six stages,
 * and the first stage that yields an encoding wins:
 *
 * 1. A byte order mark at the very beginning of the document.
 * 2. A `<meta http-equiv="Content-Type" ...>` declaration
 *    found by the general HTML prescan over the first 512 bytes.
 * 3. A `charset=` attribute anywhere in the head section.
 * 4. An `encoding="..."` attribute (typically the XML declaration) in the head section.
 * 5. A strict structural UTF-8 check over the whole document.
 * 6. The locale default encoding.
 *
 * Stages 1 and 2 are only trusted when they disagree with the locale default;
 * otherwise the resolver keeps looking as if nothing had been found.
 * Every stage that is handed an encoding *name* asks a `CodecRegistry` for it,
 * and an unknown name simply means "no candidate from this stage".
 */

use std::fmt;

use encoding::{Encoding, EncodingRef};

/// A named-encoding registry, resolving labels like `"ISO-8859-1"` to codecs.
///
/// Lookups are expected to be case-insensitive.
/// The resolver never mutates the registry, so any `Sync` registry can be shared across threads.
pub trait CodecRegistry {
    /// Returns the codec for given name, if known.
    fn lookup(&self, name: &str) -> Option<EncodingRef>;
}

impl<F> CodecRegistry for F
where
    F: Fn(&str) -> Option<EncodingRef>,
{
    fn lookup(&self, name: &str) -> Option<EncodingRef> {
        self(name)
    }
}

/// The stage which produced an encoding candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Source {
    /// A UTF-8 or UTF-16 byte order mark.
    ByteOrderMark,
    /// The `http-equiv` prescan over the beginning of the document.
    MetaPrescan,
    /// A `charset=` attribute in the head section.
    Charset,
    /// An `encoding="..."` attribute in the head section.
    XmlDeclaration,
    /// No declaration, but the whole document is structurally valid UTF-8.
    Utf8,
    /// Nothing else applied.
    LocaleDefault,
}

impl Source {
    /// True if the encoding was explicitly declared by the document.
    pub fn is_declared(&self) -> bool {
        matches!(*self, Source::MetaPrescan | Source::Charset | Source::XmlDeclaration)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Source::ByteOrderMark => "byte order mark",
            Source::MetaPrescan => "meta prescan",
            Source::Charset => "charset attribute",
            Source::XmlDeclaration => "encoding attribute",
            Source::Utf8 => "utf-8 validation",
            Source::LocaleDefault => "locale default",
        })
    }
}

/// An encoding picked by one of the detection stages.
#[derive(Clone, Copy)]
pub struct Candidate {
    /// The codec used to decode the document.
    pub encoding: EncodingRef,
    /// Where the codec came from.
    pub source: Source,
}

impl Candidate {
    /// Creates a candidate found by given stage.
    pub fn new(encoding: EncodingRef, source: Source) -> Candidate {
        Candidate { encoding, source }
    }

    /// The canonical name of the candidate encoding.
    pub fn name(&self) -> &'static str {
        crate::label::canonical_name(self.encoding)
    }
}

impl fmt::Debug for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Candidate")
            .field("encoding", &self.encoding.name())
            .field("source", &self.source)
            .finish()
    }
}

/// The result of resolving a whole document: the chosen encoding and the decoded text.
///
/// The caller owns the result; no line-ending normalization has been applied to `text`.
#[derive(Clone)]
pub struct Detection {
    /// The codec the text was decoded with.
    pub encoding: EncodingRef,
    /// The canonical name of `encoding`, e.g. `"UTF-8"` or `"windows-1252"`.
    pub name: &'static str,
    /// Where the codec came from.
    pub source: Source,
    /// The decoded document. Malformed sequences are replaced with U+FFFD.
    pub text: String,
}

impl fmt::Debug for Detection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Detection")
            .field("name", &self.name)
            .field("source", &self.source)
            .field("text", &self.text)
            .finish()
    }
}
