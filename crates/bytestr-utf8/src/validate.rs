// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::{Utf8Error, Utf8ErrorKind};

/// Mask of the value bits of a continuation byte.
const CONT_MASK: u8 = 0b0011_1111;
/// Value of the tag bits (tag mask is !CONT_MASK) of a continuation byte.
const CONT_TAG: u8 = 0b1000_0000;

/// Sequence width and seed value bits for a lead byte.
///
/// 0xC0 and 0xC1 only ever start overlong 2-byte forms; 0xF5..=0xFF would
/// encode past U+10FFFF. Both are rejected here, before any decoding.
#[inline]
const fn classify(lead: u8) -> Option<(usize, u32)> {
    match lead {
        0x00..=0x7F => Some((1, lead as u32)),
        0xC2..=0xDF => Some((2, (lead & 0x1F) as u32)),
        0xE0..=0xEF => Some((3, (lead & 0x0F) as u32)),
        0xF0..=0xF4 => Some((4, (lead & 0x07) as u32)),
        _ => None,
    }
}

/// Decodes the sequence at the start of `bytes`.
///
/// Returns the codepoint and the number of bytes it occupies.
pub(crate) fn decode_sequence(bytes: &[u8]) -> Result<(u32, usize), Utf8ErrorKind> {
    let Some(&lead) = bytes.first() else {
        return Err(Utf8ErrorKind::Truncated);
    };

    let (width, seed) = classify(lead).ok_or(Utf8ErrorKind::InvalidLeadByte(lead))?;

    let Some(tail) = bytes.get(1..width) else {
        return Err(Utf8ErrorKind::Truncated);
    };

    let mut codepoint = seed;
    for &byte in tail {
        if (byte & !CONT_MASK) != CONT_TAG {
            return Err(Utf8ErrorKind::InvalidContinuation);
        }
        codepoint = (codepoint << 6) | u32::from(byte & CONT_MASK);
    }

    match width {
        2 if codepoint < 0x80 => Err(Utf8ErrorKind::Overlong),
        3 if codepoint < 0x800 => Err(Utf8ErrorKind::Overlong),
        3 if (0xD800..=0xDFFF).contains(&codepoint) => Err(Utf8ErrorKind::Surrogate),
        4 if codepoint < 0x1_0000 => Err(Utf8ErrorKind::Overlong),
        4 if codepoint > 0x10_FFFF => Err(Utf8ErrorKind::OutOfRange),
        _ => Ok((codepoint, width)),
    }
}

/// Checks that `bytes` is well-formed UTF-8 and reports the first failure.
///
/// # Example
///
/// ```rust
/// use bytestr_utf8::{Utf8ErrorKind, check};
///
/// assert!(check("grüße".as_bytes()).is_ok());
///
/// let err = check(b"ok\xC0\x80").unwrap_err();
/// assert_eq!(err.valid_up_to(), 2);
/// assert_eq!(err.kind(), Utf8ErrorKind::InvalidLeadByte(0xC0));
///
/// let err = check(b"\xED\xA0\x80").unwrap_err();
/// assert_eq!(err.kind(), Utf8ErrorKind::Surrogate);
/// ```
pub fn check(bytes: &[u8]) -> Result<(), Utf8Error> {
    let mut index = 0;

    while index < bytes.len() {
        match decode_sequence(&bytes[index..]) {
            Ok((_, width)) => index += width,
            Err(kind) => return Err(Utf8Error::new(index, kind)),
        }
    }

    Ok(())
}

/// Returns `true` if `bytes` is well-formed UTF-8 per RFC 3629.
///
/// Total over any input; the empty slice is valid. Every failure mode
/// collapses to `false`; use [`check()`] for the position and kind.
///
/// ```rust
/// use bytestr_utf8::validate;
///
/// assert!(validate(b""));
/// assert!(validate("🦀".as_bytes()));
/// assert!(!validate(b"\xE0"));
/// ```
#[inline]
pub fn validate(bytes: &[u8]) -> bool {
    check(bytes).is_ok()
}
