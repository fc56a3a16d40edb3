//! Unified error type.

use std::fmt;

/// The error type returned by entre's fallible operations.
///
/// Only infrastructure can fail here: binding the listen socket or accepting
/// a connection. Everything that goes wrong *inside* the pipeline, such as an
/// unmatched route, a malformed body, or a panicking handler, is expressed as
/// a [`Response`](crate::Response), because the request still deserves an
/// answer.
#[derive(Debug)]
pub struct Error(std::io::Error);

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "io: {}", self.0)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self(e)
    }
}
