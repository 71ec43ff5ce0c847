// xcompressor
// Copyright (c) 2026 The xcompressor Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `error` module defines the crate-wide error type.

use std::fmt;
use std::result;

/// `Error` enumerates everything that can go wrong while encoding or decoding a stream.
#[derive(Debug)]
pub enum Error {
    /// An I/O error occurred while reading or writing a stream at the CLI boundary.
    Io(std::io::Error),
    /// The bit stream was malformed: it ended before a sentinel was read, a decoded rank was
    /// out of range, or a layer-container header was missing or inconsistent.
    Decode(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "io error: {}", err),
            Error::Decode(msg) => write!(f, "malformed stream: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

/// A specialized `Result` type for this crate's fallible operations.
pub type Result<T> = result::Result<T, Error>;

/// Convenience function to create a decode error.
pub fn decode_error<T>(desc: &'static str) -> Result<T> {
    Err(Error::Decode(desc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_display_messages_are_non_empty() {
        let errs: Vec<Error> = vec![
            Error::Io(std::io::Error::new(std::io::ErrorKind::Other, "boom")),
            Error::Decode("missing sentinel"),
        ];

        for err in errs {
            assert!(!err.to_string().is_empty());
        }
    }
}
