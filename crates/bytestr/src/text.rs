// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use bytestr_buffer::ByteBuffer;
use bytestr_utf8::Utf8Error;

/// UTF-8 validation for anything that exposes its content as bytes.
pub trait Utf8Validate {
    /// Returns `true` if the content is well-formed UTF-8.
    fn validate_utf8(&self) -> bool {
        self.check_utf8().is_ok()
    }

    /// Returns the first malformed sequence, if any.
    fn check_utf8(&self) -> Result<(), Utf8Error>;
}

impl Utf8Validate for [u8] {
    fn check_utf8(&self) -> Result<(), Utf8Error> {
        bytestr_utf8::check(self)
    }
}

impl Utf8Validate for str {
    // Already guaranteed by `str`.
    fn check_utf8(&self) -> Result<(), Utf8Error> {
        Ok(())
    }
}

impl Utf8Validate for ByteBuffer {
    fn check_utf8(&self) -> Result<(), Utf8Error> {
        bytestr_utf8::check(self.as_bytes())
    }
}
