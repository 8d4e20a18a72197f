// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::BufferError;

/// Capacity growth configuration for [`ByteBuffer`](crate::ByteBuffer).
///
/// When a single-byte append would overflow the buffer, the new capacity is
/// `initial` for a buffer without storage and `capacity * factor` otherwise.
/// The default, [`GrowthPolicy::DOUBLING`], starts at 2 and doubles, which
/// keeps `n` sequential pushes at amortized O(1) each.
///
/// # Example
///
/// ```rust
/// use bytestr_buffer::{BufferError, GrowthPolicy};
///
/// fn example() -> Result<(), BufferError> {
///     let policy = GrowthPolicy::new(16, 4)?;
///     assert_eq!(policy.next_capacity(0)?, 16);
///     assert_eq!(policy.next_capacity(16)?, 64);
///
///     assert!(GrowthPolicy::new(1, 2).is_err());
///     Ok(())
/// }
/// # example().unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthPolicy {
    initial: usize,
    factor: usize,
}

impl GrowthPolicy {
    /// Start at 2 bytes, double on every growth.
    pub const DOUBLING: Self = Self {
        initial: 2,
        factor: 2,
    };

    /// Creates a policy, rejecting values that could not fit one byte plus
    /// the terminator after a single growth step.
    pub const fn new(initial: usize, factor: usize) -> Result<Self, BufferError> {
        if initial < 2 || factor < 2 {
            return Err(BufferError::InvalidGrowthPolicy { initial, factor });
        }

        Ok(Self { initial, factor })
    }

    /// Capacity granted when growing from zero.
    #[inline]
    pub const fn initial(&self) -> usize {
        self.initial
    }

    /// Multiplier applied to a non-zero capacity.
    #[inline]
    pub const fn factor(&self) -> usize {
        self.factor
    }

    /// Returns the capacity that follows `current`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Overflow`] if the multiplication overflows.
    pub const fn next_capacity(&self, current: usize) -> Result<usize, BufferError> {
        if current == 0 {
            return Ok(self.initial);
        }

        match current.checked_mul(self.factor) {
            Some(next) => Ok(next),
            None => Err(BufferError::Overflow),
        }
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::DOUBLING
    }
}
