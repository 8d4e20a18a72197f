// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for bytestr-buffer.

use thiserror::Error;

/// Error type for `ByteBuffer` operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BufferError {
    /// The allocator could not provide the requested storage.
    ///
    /// The buffer that attempted the growth is left unchanged.
    #[error("Allocation failed: could not reserve {requested} bytes")]
    AllocationFailed {
        /// Total capacity (content plus terminator) that was requested.
        requested: usize,
    },

    /// Integer overflow when computing a new capacity.
    ///
    /// Only reachable with lengths approaching `usize::MAX`.
    #[error("Integer overflow: capacity would exceed usize::MAX")]
    Overflow,

    /// A growth policy that could not make room for a single byte.
    #[error("Invalid growth policy: initial={initial}, factor={factor} (both must be >= 2)")]
    InvalidGrowthPolicy {
        /// Rejected initial capacity.
        initial: usize,
        /// Rejected growth factor.
        factor: usize,
    },
}
