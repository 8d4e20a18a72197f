// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Growable null-terminated byte strings with RFC 3629 UTF-8 validation.</em></p>
//!
//! ---
//!
//! bytestr pairs an owned, explicitly-sized byte buffer with a strict UTF-8
//! validator and the usual text clean-up steps for data read from files or
//! sockets.
//!
//! # Features
//!
//! - **Null-terminated storage**: content is always followed by a `0` byte,
//!   ready for C interop
//! - **Explicit capacity**: exact allocations, configurable amortized growth,
//!   no implicit shrinking
//! - **Fallible allocation**: growth failures are errors, never silent truncation
//! - **Strict UTF-8**: overlong forms, surrogates, out-of-range codepoints and
//!   truncated sequences are rejected, with the offending offset on request
//! - **Normalization**: byte-order-mark stripping and trailing CR/LF trimming
//! - **`no_std` compatible**: needs only `alloc`
//!
//! # Quick Start
//!
//! ```rust
//! use bytestr::{ByteBuffer, Utf8Validate, preflight};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut line = ByteBuffer::from_bytes(b"\xEF\xBB\xBFgr\xC3\xBC\xC3\x9Fe\r\n")?;
//!
//!     line.strip_bom();
//!     line.trim_line_endings();
//!     assert_eq!(line.as_bytes(), "grüße".as_bytes());
//!
//!     // Plain answer
//!     assert!(line.validate_utf8());
//!
//!     // Same answer, logged through `tracing`
//!     assert!(preflight(&line));
//!
//!     // Diagnostics
//!     line.push_byte(0xC0)?;
//!     let err = line.check_utf8().unwrap_err();
//!     assert_eq!(err.valid_up_to(), 7);
//!     Ok(())
//! }
//! ```
//!
//! # Crates
//!
//! - [`buffer`]: [`ByteBuffer`], [`GrowthPolicy`], [`BufferError`]
//! - [`utf8`]: [`validate()`], [`check()`], [`Utf8Error`]

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

mod preflight;
mod text;

#[cfg(test)]
mod tests;

pub use bytestr_buffer as buffer;
pub use bytestr_utf8 as utf8;

pub use bytestr_buffer::{BufferError, ByteBuffer, GrowthPolicy, UTF8_BOM};
pub use bytestr_utf8::{Utf8Error, Utf8ErrorKind, check, validate};

pub use preflight::preflight;
pub use text::Utf8Validate;
