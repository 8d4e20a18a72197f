// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::ffi::CStr;
use core::ops::Deref;

use crate::error::BufferError;
use crate::growth::GrowthPolicy;

/// Failure injection for exercising allocation-failure paths.
///
/// # Example
///
/// ```rust
/// // test-utils feature required in dev-dependencies
/// use bytestr_buffer::{BufferError, ByteBuffer, ByteBufferBehaviour};
///
/// fn example() -> Result<(), BufferError> {
///     let mut buffer = ByteBuffer::new();
///     buffer.change_behaviour(ByteBufferBehaviour::FailAtReserve);
///
///     assert!(buffer.push_byte(b'a').is_err());
///     assert!(!buffer.has_storage());
///
///     buffer.change_behaviour(ByteBufferBehaviour::None);
///     buffer.push_byte(b'a')?;
///     Ok(())
/// }
/// # example().unwrap();
/// ```
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ByteBufferBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every growth fails with `AllocationFailed` until the behaviour is reset.
    FailAtReserve,
}

/// Owned, growable, null-terminated byte sequence.
///
/// Storage holds the content followed by a single `0` terminator that is not
/// counted in [`len()`](Self::len). A buffer without storage has length and
/// capacity 0 and owns no allocation.
///
/// Capacity is tracked explicitly: [`reserve()`](Self::reserve) and
/// [`extend_from_slice()`](Self::extend_from_slice) grow to exactly the size
/// they need, [`push_byte()`](Self::push_byte) grows through the buffer's
/// [`GrowthPolicy`]. Capacity never shrinks until [`release()`](Self::release).
///
/// Every growth is fallible. On error the buffer is left untouched.
///
/// # Example
///
/// ```rust
/// use bytestr_buffer::{BufferError, ByteBuffer};
///
/// fn example() -> Result<(), BufferError> {
///     let mut buffer = ByteBuffer::new();
///     assert_eq!(buffer.capacity(), 0);
///
///     buffer.push_byte(b'o')?;
///     buffer.push_byte(b'k')?;
///     assert_eq!(buffer.as_bytes(), b"ok");
///     assert_eq!(buffer.as_bytes_with_nul(), b"ok\0");
///     assert_eq!(buffer.capacity(), 4);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct ByteBuffer {
    // Content plus terminator; empty iff there is no storage.
    inner: Vec<u8>,
    capacity: usize,
    growth: GrowthPolicy,
    #[cfg(any(test, feature = "test-utils"))]
    behaviour: ByteBufferBehaviour,
}

impl ByteBuffer {
    /// Creates an empty buffer without storage, using [`GrowthPolicy::DOUBLING`].
    pub const fn new() -> Self {
        Self::with_growth(GrowthPolicy::DOUBLING)
    }

    /// Creates an empty buffer without storage that grows by `growth`.
    pub const fn with_growth(growth: GrowthPolicy) -> Self {
        Self {
            inner: Vec::new(),
            capacity: 0,
            growth,
            #[cfg(any(test, feature = "test-utils"))]
            behaviour: ByteBufferBehaviour::None,
        }
    }

    /// Copies `source` into a new buffer of capacity exactly `source.len() + 1`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::AllocationFailed`] if the storage cannot be allocated.
    pub fn from_bytes(source: &[u8]) -> Result<Self, BufferError> {
        let requested = source.len().checked_add(1).ok_or(BufferError::Overflow)?;

        let mut buffer = Self::new();
        buffer.grow_to(requested)?;
        buffer.write_tail(source);

        Ok(buffer)
    }

    /// Copies a C string, content and terminator, into a new buffer.
    pub fn from_c_str(source: &CStr) -> Result<Self, BufferError> {
        Self::from_bytes(source.to_bytes())
    }

    /// Builds a new buffer holding `first` followed by `second`.
    ///
    /// Either side may be empty; the result is then a copy of the other one.
    /// When both are empty the result owns no storage. The result inherits
    /// the growth policy of `first`.
    pub fn concat(first: &Self, second: &Self) -> Result<Self, BufferError> {
        let total = first
            .len()
            .checked_add(second.len())
            .ok_or(BufferError::Overflow)?;

        let mut result = Self::with_growth(first.growth);
        if total == 0 {
            return Ok(result);
        }

        result.reserve(total.checked_add(1).ok_or(BufferError::Overflow)?)?;
        result.extend_from_slice(first.as_bytes())?;
        result.extend_from_slice(second.as_bytes())?;

        Ok(result)
    }

    /// Returns the number of content bytes, excluding the terminator.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len().saturating_sub(1)
    }

    /// Returns `true` if the buffer holds no content.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the allocated capacity in bytes, terminator slot included.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the buffer owns an allocation.
    #[inline]
    pub fn has_storage(&self) -> bool {
        self.capacity != 0
    }

    /// Returns the growth policy used by [`push_byte()`](Self::push_byte).
    #[inline]
    pub fn growth(&self) -> GrowthPolicy {
        self.growth
    }

    /// Returns the content. Empty when there is no storage.
    pub fn as_bytes(&self) -> &[u8] {
        match self.inner.split_last() {
            Some((_, content)) => content,
            None => &[],
        }
    }

    /// Returns the content followed by its terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        if self.inner.is_empty() {
            return b"\0";
        }

        &self.inner
    }

    /// Grows to at least `min_capacity` bytes. Never shrinks.
    ///
    /// Reserving on a buffer without storage allocates storage holding just
    /// the terminator.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::AllocationFailed`] if the allocator refuses.
    pub fn reserve(&mut self, min_capacity: usize) -> Result<(), BufferError> {
        if min_capacity <= self.capacity {
            return Ok(());
        }

        self.grow_to(min_capacity)
    }

    /// Appends one byte, growing through the [`GrowthPolicy`] when the byte
    /// and terminator would not fit.
    pub fn push_byte(&mut self, byte: u8) -> Result<(), BufferError> {
        if self.len() + 1 >= self.capacity {
            let next = self.growth.next_capacity(self.capacity)?;
            self.grow_to(next)?;
        }

        self.write_tail(&[byte]);
        Ok(())
    }

    /// Appends `src`, growing to exactly `len + src.len() + 1` if needed.
    ///
    /// An empty `src` leaves the buffer untouched, without allocating.
    pub fn extend_from_slice(&mut self, src: &[u8]) -> Result<(), BufferError> {
        if src.is_empty() {
            return Ok(());
        }

        let needed = self
            .len()
            .checked_add(src.len())
            .and_then(|n| n.checked_add(1))
            .ok_or(BufferError::Overflow)?;

        self.reserve(needed)?;
        self.write_tail(src);

        Ok(())
    }

    /// Appends the content of `src`. `src` is not modified.
    pub fn append(&mut self, src: &Self) -> Result<(), BufferError> {
        self.extend_from_slice(src.as_bytes())
    }

    /// Shortens the content to `new_len` bytes and re-terminates.
    ///
    /// No-op if `new_len >= len()`. Storage and capacity are kept.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len() {
            return;
        }

        self.inner.truncate(new_len);
        self.inner.push(0);
    }

    /// Removes all content, keeping storage.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Frees storage and resets length and capacity to 0.
    ///
    /// Idempotent. The growth policy is kept.
    pub fn release(&mut self) {
        if self.has_storage() {
            tracing::debug!(
                len = self.len(),
                capacity = self.capacity,
                "releasing byte buffer"
            );
        }

        self.inner = Vec::new();
        self.capacity = 0;
    }

    /// Changes the failure injection behaviour.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn change_behaviour(&mut self, behaviour: ByteBufferBehaviour) {
        self.behaviour = behaviour;
    }

    /// Removes the first `count` content bytes, shifting the rest left.
    pub(crate) fn remove_prefix(&mut self, count: usize) {
        let count = count.min(self.len());
        if count == 0 {
            return;
        }

        // The terminator shifts along with the content.
        self.inner.drain(..count);
    }

    /// Writes `bytes` after the content. Capacity must already fit them.
    fn write_tail(&mut self, bytes: &[u8]) {
        debug_assert!(self.len() + bytes.len() < self.capacity);

        self.inner.pop();
        self.inner.extend_from_slice(bytes);
        self.inner.push(0);
    }

    /// Reallocates to exactly `min_capacity`, which must exceed the current capacity.
    #[cold]
    #[inline(never)]
    fn grow_to(&mut self, min_capacity: usize) -> Result<(), BufferError> {
        debug_assert!(min_capacity > self.capacity);

        #[cfg(any(test, feature = "test-utils"))]
        if matches!(self.behaviour, ByteBufferBehaviour::FailAtReserve) {
            return Err(BufferError::AllocationFailed {
                requested: min_capacity,
            });
        }

        // inner.len() <= capacity < min_capacity
        let additional = min_capacity - self.inner.len();
        self.inner
            .try_reserve_exact(additional)
            .map_err(|_| BufferError::AllocationFailed {
                requested: min_capacity,
            })?;

        if self.inner.is_empty() {
            self.inner.push(0);
        }

        tracing::trace!(
            from = self.capacity,
            to = min_capacity,
            "byte buffer reallocated"
        );
        self.capacity = min_capacity;

        Ok(())
    }
}

impl Default for ByteBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("bytes", &format_args!("\"{}\"", self.as_bytes().escape_ascii()))
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl PartialEq for ByteBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ByteBuffer {}

impl Deref for ByteBuffer {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl TryFrom<&[u8]> for ByteBuffer {
    type Error = BufferError;

    fn try_from(source: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(source)
    }
}

impl TryFrom<&str> for ByteBuffer {
    type Error = BufferError;

    fn try_from(source: &str) -> Result<Self, Self::Error> {
        Self::from_bytes(source.as_bytes())
    }
}

impl TryFrom<&CStr> for ByteBuffer {
    type Error = BufferError;

    fn try_from(source: &CStr) -> Result<Self, Self::Error> {
        Self::from_c_str(source)
    }
}
