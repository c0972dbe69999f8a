// Copyright 2026 the Line Format Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Error type for checked text block queries.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the offending line index and the number of
/// lines in the block at the time of the failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The line index provided by the caller.
    line: usize,

    /// The number of lines in the block at the time of failure.
    line_count: usize,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The line index provided by the caller.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The number of lines in the block at the time of the error.
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub(crate) fn invalid_line(line: usize, line_count: usize) -> Self {
        Self {
            kind: ErrorKind::InvalidLine,
            line,
            line_count,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::InvalidLine => write!(
                f,
                "line {} out of bounds for block of {} lines",
                self.line, self.line_count
            ),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The line index was not less than the number of lines in the block.
    InvalidLine,
}
