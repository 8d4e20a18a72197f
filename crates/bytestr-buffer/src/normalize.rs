// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! In-place text normalization for [`ByteBuffer`].

use crate::byte_buffer::ByteBuffer;

/// The UTF-8 encoding of U+FEFF, as prepended by some producers.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

impl ByteBuffer {
    /// Removes a leading UTF-8 byte-order mark.
    ///
    /// Returns `true` if the mark was present and removed. Buffers shorter
    /// than three bytes, or starting with anything else, are left unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bytestr_buffer::{BufferError, ByteBuffer};
    ///
    /// fn example() -> Result<(), BufferError> {
    ///     let mut buffer = ByteBuffer::from_bytes(b"\xEF\xBB\xBFhi")?;
    ///     assert!(buffer.strip_bom());
    ///     assert_eq!(buffer.as_bytes(), b"hi");
    ///
    ///     assert!(!buffer.strip_bom());
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn strip_bom(&mut self) -> bool {
        if !self.as_bytes().starts_with(&UTF8_BOM) {
            return false;
        }

        self.remove_prefix(UTF8_BOM.len());
        tracing::debug!(len = self.len(), "stripped UTF-8 byte-order mark");

        true
    }

    /// Removes every trailing `\n` and `\r`, in any order or count.
    pub fn trim_line_endings(&mut self) {
        let kept = self
            .as_bytes()
            .iter()
            .rposition(|&b| b != b'\n' && b != b'\r')
            .map_or(0, |last| last + 1);

        self.truncate(kept);
    }
}
