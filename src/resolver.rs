// This is a part of rust-encoding.
// Copyright (c) 2014, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! The encoding resolver for HTML documents.

use encoding::all::{ISO_8859_1, UTF_8};
use encoding::{DecoderTrap, Encoding, EncodingRef};
use log::{debug, trace, warn};

use crate::codec::utf_8::is_valid_utf8;
use crate::declaration;
use crate::label::{canonical_name, LabelRegistry};
use crate::locale::LocaleDefault;
use crate::sniff::{encoding_from_bom, sniff_html};
use crate::types::{Candidate, CodecRegistry, Detection, Source};

/**
 * Determines the encoding of raw HTML documents and decodes them.
 *
 * The resolver has no state besides a registry and the locale default, both read-only,
 * so a single instance can be shared by any number of threads.
 * Given the same bytes, it always picks the same encoding.
 *
 * See the `types` module for the detection stages.
 */
#[derive(Clone, Debug)]
pub struct EncodingResolver<R = LabelRegistry> {
    registry: R,
    locale: LocaleDefault,
}

impl EncodingResolver<LabelRegistry> {
    /// Creates a resolver with the default registry.
    pub fn new(locale: LocaleDefault) -> EncodingResolver<LabelRegistry> {
        EncodingResolver::with_registry(LabelRegistry, locale)
    }
}

impl<R: CodecRegistry> EncodingResolver<R> {
    /// Creates a resolver with a custom registry.
    pub fn with_registry(registry: R, locale: LocaleDefault) -> EncodingResolver<R> {
        EncodingResolver { registry, locale }
    }

    /// The registry used to look up declared names.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// The encoding used when nothing else applies.
    pub fn locale(&self) -> &LocaleDefault {
        &self.locale
    }

    /// Picks the most probable encoding of given HTML document.
    pub fn codec_for_html(&self, input: &[u8]) -> Candidate {
        let normalized = declaration::normalize(input);
        let locale = self.locale.encoding();

        let sniffed = sniff_html(&normalized, &self.registry, locale);
        if sniffed.encoding.name() != locale.name() {
            debug!("{} found {}", sniffed.source, sniffed.encoding.name());
            return sniffed;
        }

        if let Some(head) = declaration::head_section(&normalized) {
            if let Some(candidate) = self.declared(head) {
                debug!("{} found {}", candidate.source, candidate.encoding.name());
                return candidate;
            }
        } else {
            trace!("no </head>, skipping declarations");
        }

        // an empty document carries no evidence of being utf-8
        let content = if input.is_empty() { None } else { Some(input) };
        if is_valid_utf8(content) {
            debug!("no declaration, but the document is valid utf-8");
            return Candidate::new(self.registry.lookup("UTF-8").unwrap_or(UTF_8), Source::Utf8);
        }

        debug!("no declaration, falling back to the locale default {}", locale.name());
        Candidate::new(locale, Source::LocaleDefault)
    }

    /// Looks for `charset=` and then `encoding=` in the head section.
    /// Names unknown to the registry are skipped.
    fn declared(&self, head: &[u8]) -> Option<Candidate> {
        let charset = declaration::charset_value(head);
        let encoding = declaration::encoding_value(head);
        self.lookup(charset, Source::Charset)
            .or_else(|| self.lookup(encoding, Source::XmlDeclaration))
    }

    fn lookup(&self, name: Option<String>, source: Source) -> Option<Candidate> {
        let name = name?;
        match self.registry.lookup(&name) {
            Some(encoding) => Some(Candidate::new(encoding, source)),
            None => {
                trace!("{}: unknown encoding {:?}", source, name);
                None
            }
        }
    }

    /// Picks the encoding of given HTML document and decodes it.
    ///
    /// This never fails: malformed sequences are replaced with U+FFFD.
    /// A byte order mark matching the chosen encoding is not a part of the text,
    /// whichever stage chose it.
    pub fn resolve(&self, input: &[u8]) -> Detection {
        let candidate = self.codec_for_html(input);
        let body = match encoding_from_bom(input) {
            Some((bom, len)) if bom.name() == candidate.encoding.name() => &input[len..],
            _ => input,
        };
        Detection {
            encoding: candidate.encoding,
            name: canonical_name(candidate.encoding),
            source: candidate.source,
            text: decode(candidate.encoding, body),
        }
    }
}

fn decode(encoding: EncodingRef, input: &[u8]) -> String {
    match encoding.decode(input, DecoderTrap::Replace) {
        Ok(text) => text,
        Err(cause) => {
            // the replacement trap should never give up, but a registry can hand out anything
            warn!("{} failed to decode ({}), reading as iso-8859-1", encoding.name(), cause);
            ISO_8859_1.decode(input, DecoderTrap::Replace).unwrap_or_default()
        }
    }
}
