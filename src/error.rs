// This is a part of rust-encoding.
// Copyright (c) 2014, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Errors from reading documents.
//!
//! Resolving an encoding never fails; only getting the bytes in the first place can.

use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error from the `document` helpers.
#[derive(Debug)]
pub enum Error {
    /// The file does not exist.
    NotFound(PathBuf),
    /// The file exists but could not be read.
    Io { path: PathBuf, source: io::Error },
    /// A book (or any list of files) has no HTML documents at all.
    NoHtmlDocuments,
}

impl Error {
    pub(crate) fn from_io(path: PathBuf, err: io::Error) -> Error {
        if err.kind() == io::ErrorKind::NotFound {
            Error::NotFound(path)
        } else {
            Error::Io { path, source: err }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::NotFound(ref path) => write!(f, "cannot read file {}: not found", path.display()),
            Error::Io { ref path, ref source } =>
                write!(f, "cannot read file {}: {}", path.display(), source),
            Error::NoHtmlDocuments => f.write_str("no HTML documents"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Io { ref source, .. } => Some(source),
            _ => None,
        }
    }
}
