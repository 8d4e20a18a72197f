// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for bytestr-utf8.

use thiserror::Error;

/// Why a sequence was rejected.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum Utf8ErrorKind {
    /// A byte that cannot start a sequence (0x80..=0xC1 or 0xF5..=0xFF).
    #[error("invalid lead byte 0x{0:02X}")]
    InvalidLeadByte(u8),

    /// The input ends before the sequence does.
    #[error("truncated sequence")]
    Truncated,

    /// A continuation byte does not match `10xxxxxx`.
    #[error("invalid continuation byte")]
    InvalidContinuation,

    /// The codepoint fits in a shorter sequence.
    #[error("overlong encoding")]
    Overlong,

    /// The codepoint is a UTF-16 surrogate (U+D800..=U+DFFF).
    #[error("surrogate codepoint")]
    Surrogate,

    /// The codepoint is above U+10FFFF.
    #[error("codepoint above U+10FFFF")]
    OutOfRange,
}

/// First malformed sequence found by [`check()`](crate::check).
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
#[error("invalid UTF-8 at byte {valid_up_to}: {kind}")]
pub struct Utf8Error {
    valid_up_to: usize,
    kind: Utf8ErrorKind,
}

impl Utf8Error {
    pub(crate) const fn new(valid_up_to: usize, kind: Utf8ErrorKind) -> Self {
        Self { valid_up_to, kind }
    }

    /// Offset of the lead byte of the rejected sequence.
    ///
    /// Everything before it is well-formed.
    pub const fn valid_up_to(&self) -> usize {
        self.valid_up_to
    }

    /// What was wrong with the rejected sequence.
    pub const fn kind(&self) -> Utf8ErrorKind {
        self.kind
    }
}
