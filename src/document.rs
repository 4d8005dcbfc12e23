// This is a part of rust-encoding.
// Copyright (c) 2014, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Reading HTML documents from files.
//!
//! These are thin conveniences around `EncodingResolver::resolve`,
//! which itself never touches the file system.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::Error;
use crate::resolver::EncodingResolver;
use crate::types::CodecRegistry;

/// File extensions recognized as HTML documents, compared case-insensitively.
pub const HTML_EXTENSIONS: [&str; 3] = ["html", "htm", "xhtml"];

/// Converts CR LF and lone CR line endings to LF.
pub fn convert_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Reads an HTML file, decodes it with the resolved encoding and converts its line endings.
pub fn read_html_file<P, R>(path: P, resolver: &EncodingResolver<R>) -> Result<String, Error>
where
    P: AsRef<Path>,
    R: CodecRegistry,
{
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|err| Error::from_io(path.to_path_buf(), err))?;
    let detection = resolver.resolve(&bytes);
    debug!("{}: {} ({})", path.display(), detection.name, detection.source);
    Ok(convert_line_endings(&detection.text))
}

/// True if given path has an HTML extension.
pub fn is_html_document(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| HTML_EXTENSIONS.iter().any(|html| ext.eq_ignore_ascii_case(html)))
}

/// Returns the first HTML document in given paths,
/// or `Error::NoHtmlDocuments` if there is none.
pub fn first_html_document<'a, I>(paths: I) -> Result<&'a Path, Error>
where
    I: IntoIterator<Item = &'a Path>,
{
    paths.into_iter().find(|path| is_html_document(path)).ok_or(Error::NoHtmlDocuments)
}
