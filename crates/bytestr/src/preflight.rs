// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use bytestr_buffer::ByteBuffer;

use crate::text::Utf8Validate;

/// Validates `buffer` and logs the outcome.
///
/// Emits one `tracing` event, `info` on success and `warn` with the offset
/// and kind on failure, then returns the same answer as
/// [`validate()`](crate::validate). A buffer without storage is valid.
pub fn preflight(buffer: &ByteBuffer) -> bool {
    match buffer.check_utf8() {
        Ok(()) => {
            tracing::info!(len = buffer.len(), "preflight success: valid UTF-8");
            true
        }
        Err(err) => {
            tracing::warn!(
                len = buffer.len(),
                valid_up_to = err.valid_up_to(),
                kind = %err.kind(),
                "preflight failed: not valid UTF-8"
            );
            false
        }
    }
}
