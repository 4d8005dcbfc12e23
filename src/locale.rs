// This is a part of rust-encoding.
// Copyright (c) 2014, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! The locale default encoding.

use std::env;
use std::fmt;

use encoding::all::ISO_8859_1;
use encoding::{Encoding, EncodingRef};
use log::debug;

use crate::label::{canonical_name, LabelRegistry};
use crate::types::CodecRegistry;

/// Environment variables consulted for the locale, in the order of precedence.
pub const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_CTYPE", "LANG"];

/**
 * The default text encoding of the running environment.
 *
 * This is what the resolver falls back to when a document neither declares its encoding
 * nor looks like UTF-8. It is read once (normally at start-up) and passed explicitly;
 * nothing in this crate consults the environment behind the caller's back.
 *
 * When the locale names no codeset, or names one that is not known,
 * ISO 8859-1 is used, since it can decode any byte sequence.
 */
#[derive(Clone, Copy)]
pub struct LocaleDefault {
    encoding: EncodingRef,
}

impl LocaleDefault {
    /// Uses given encoding regardless of the environment.
    pub fn new(encoding: EncodingRef) -> LocaleDefault {
        LocaleDefault { encoding }
    }

    /// Reads the locale from `LC_ALL`, `LC_CTYPE` and `LANG`.
    pub fn from_env() -> LocaleDefault {
        LocaleDefault::from_vars(&LabelRegistry, |key| env::var(key).ok())
    }

    /// Same as `from_env`, with the variables and codeset names looked up by the caller.
    pub fn from_vars<R, F>(registry: &R, var: F) -> LocaleDefault
    where
        R: CodecRegistry + ?Sized,
        F: Fn(&str) -> Option<String>,
    {
        let locale = LOCALE_VARS.iter()
                                .filter_map(|&key| var(key))
                                .find(|value| !value.is_empty());
        match locale {
            Some(locale) => LocaleDefault::from_locale_name(registry, &locale),
            None => LocaleDefault::fallback(),
        }
    }

    /// Parses a POSIX locale name like `de_DE.ISO-8859-15@euro`.
    pub fn from_locale_name<R: CodecRegistry + ?Sized>(registry: &R, locale: &str) -> LocaleDefault {
        let found = codeset(locale).and_then(|codeset| {
            let found = registry.lookup(codeset);
            if found.is_none() {
                debug!("locale {:?}: unknown codeset {:?}", locale, codeset);
            }
            found
        });
        match found {
            Some(encoding) => LocaleDefault::new(encoding),
            None => LocaleDefault::fallback(),
        }
    }

    /// The encoding used when the locale does not say anything useful.
    pub fn fallback() -> LocaleDefault {
        LocaleDefault::new(ISO_8859_1)
    }

    /// The locale encoding itself.
    pub fn encoding(&self) -> EncodingRef {
        self.encoding
    }

    /// The canonical name of the locale encoding.
    pub fn name(&self) -> &'static str {
        canonical_name(self.encoding)
    }
}

impl Default for LocaleDefault {
    fn default() -> LocaleDefault {
        LocaleDefault::from_env()
    }
}

impl fmt::Debug for LocaleDefault {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("LocaleDefault").field(&self.encoding.name()).finish()
    }
}

/// Extracts the codeset part of a POSIX locale name, if any.
fn codeset(locale: &str) -> Option<&str> {
    let (_, rest) = locale.split_once('.')?;
    let codeset = rest.split('@').next().unwrap_or(rest);
    if codeset.is_empty() { None } else { Some(codeset) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_map(vars: &[(&str, &str)]) -> LocaleDefault {
        let vars: HashMap<String, String> =
            vars.iter().map(|&(k, v)| (k.to_string(), v.to_string())).collect();
        LocaleDefault::from_vars(&LabelRegistry, |key| vars.get(key).cloned())
    }

    #[test]
    fn test_codeset() {
        assert_eq!(codeset("en_US.UTF-8"), Some("UTF-8"));
        assert_eq!(codeset("de_DE.ISO-8859-15@euro"), Some("ISO-8859-15"));
        assert_eq!(codeset("ru_RU.koi8r"), Some("koi8r"));
        assert_eq!(codeset("fr_FR@euro"), None);
        assert_eq!(codeset("C"), None);
        assert_eq!(codeset("en_US."), None);
    }

    #[test]
    fn test_precedence() {
        assert_eq!(from_map(&[("LC_ALL", "ru_RU.KOI8-R"), ("LC_CTYPE", "en_US.UTF-8"),
                              ("LANG", "de_DE.ISO-8859-15")]).name(), "KOI8-R");
        assert_eq!(from_map(&[("LC_CTYPE", "en_US.UTF-8"), ("LANG", "de_DE.ISO-8859-15")]).name(),
                   "UTF-8");
        assert_eq!(from_map(&[("LANG", "de_DE.ISO-8859-15@euro")]).name(), "ISO-8859-15");
        // empty variables are skipped
        assert_eq!(from_map(&[("LC_ALL", ""), ("LANG", "ja_JP.EUC-JP")]).name(), "EUC-JP");
    }

    #[test]
    fn test_fallback() {
        assert_eq!(from_map(&[]).name(), "ISO-8859-1");
        assert_eq!(from_map(&[("LANG", "C")]).name(), "ISO-8859-1");
        assert_eq!(from_map(&[("LANG", "POSIX")]).name(), "ISO-8859-1");
        assert_eq!(from_map(&[("LANG", "xx_XX.NO-SUCH-CODESET")]).name(), "ISO-8859-1");
    }

    #[test]
    fn test_explicit() {
        let locale = LocaleDefault::new(encoding::all::WINDOWS_1251);
        assert_eq!(locale.name(), "windows-1251");
        assert_eq!(locale.encoding().name(), "windows-1251");
        assert_eq!(format!("{:?}", locale), "LocaleDefault(\"windows-1251\")");
    }
}
