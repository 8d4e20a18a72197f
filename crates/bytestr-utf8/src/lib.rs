// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RFC 3629 UTF-8 validation.
//!
//! [`validate()`] answers well-formed or not. [`check()`] runs the same scan
//! and, on failure, reports where the offending sequence starts and why it
//! was rejected:
//!
//! | Lead byte   | Width | Rejected after assembly          |
//! |-------------|-------|----------------------------------|
//! | 0x00..=0x7F | 1     | -                                |
//! | 0xC2..=0xDF | 2     | < U+0080                         |
//! | 0xE0..=0xEF | 3     | < U+0800, U+D800..=U+DFFF        |
//! | 0xF0..=0xF4 | 4     | < U+10000, > U+10FFFF            |
//!
//! Any other lead byte, a missing byte, or a continuation byte outside
//! `10xxxxxx` fails the whole input.
//!
//! Both functions are pure and allocation-free.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

mod error;
mod validate;

#[cfg(test)]
mod tests;

pub use error::{Utf8Error, Utf8ErrorKind};
pub use validate::{check, validate};
