// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable null-terminated byte buffer with explicit capacity control.
//!
//! [`ByteBuffer`] owns a contiguous byte sequence followed by a `0`
//! terminator. Length excludes the terminator; capacity includes its slot.
//!
//! # Core Guarantees
//!
//! - **Terminated**: whenever storage exists, the byte after the content is `0`
//! - **Explicit capacity**: `from_bytes()` allocates exactly `len + 1`, `reserve()`
//!   and `extend_from_slice()` grow to exactly what they need, `push_byte()` grows
//!   through a [`GrowthPolicy`] (default: 2, then doubling)
//! - **Never shrinks**: capacity only returns to 0 through `release()`
//! - **Fallible growth**: allocation failure is reported as [`BufferError`] and
//!   leaves the buffer unchanged
//!
//! # Example
//!
//! ```rust
//! use bytestr_buffer::{BufferError, ByteBuffer};
//!
//! fn example() -> Result<(), BufferError> {
//!     let mut line = ByteBuffer::from_bytes(b"\xEF\xBB\xBFhello\r\n")?;
//!
//!     assert!(line.strip_bom());
//!     line.trim_line_endings();
//!     assert_eq!(line.as_bytes(), b"hello");
//!
//!     let suffix = ByteBuffer::from_bytes(b", world")?;
//!     line.append(&suffix)?;
//!     assert_eq!(line.as_bytes_with_nul(), b"hello, world\0");
//!
//!     line.release();
//!     assert_eq!(line.capacity(), 0);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test-utils` feature to inject allocation failures:
//!
//! ```toml
//! [dev-dependencies]
//! bytestr-buffer = { version = "*", features = ["test-utils"] }
//! ```
//!
//! Then use [`ByteBufferBehaviour`] to test error scenarios.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod byte_buffer;
mod error;
mod growth;
mod normalize;

#[cfg(test)]
mod tests;

pub use byte_buffer::ByteBuffer;
pub use error::BufferError;
pub use growth::GrowthPolicy;
pub use normalize::UTF8_BOM;

#[cfg(any(test, feature = "test-utils"))]
pub use byte_buffer::ByteBufferBehaviour;
