// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{Utf8ErrorKind, check, validate};

fn kind_of(bytes: &[u8]) -> Utf8ErrorKind {
    check(bytes).expect_err("Expected invalid UTF-8").kind()
}

// =============================================================================
// Well-formed input
// =============================================================================

#[test]
fn test_empty_is_valid() {
    assert!(validate(b""));
    assert!(check(b"").is_ok());
}

#[test]
fn test_ascii_and_nul() {
    assert!(validate(b"plain ascii\tline\n"));
    assert!(validate(b"\0\0\x7F"));
}

#[test]
fn test_each_width_at_boundaries() {
    let cases: [&[u8]; 8] = [
        b"\xC2\x80",         // U+0080
        b"\xDF\xBF",         // U+07FF
        b"\xE0\xA0\x80",     // U+0800
        b"\xED\x9F\xBF",     // U+D7FF
        b"\xEE\x80\x80",     // U+E000
        b"\xEF\xBF\xBF",     // U+FFFF
        b"\xF0\x90\x80\x80", // U+10000
        b"\xF4\x8F\xBF\xBF", // U+10FFFF
    ];

    for case in cases {
        assert!(validate(case), "{case:02X?} should be valid");
    }
}

#[test]
fn test_mixed_text() {
    assert!(validate("Hello 世界 🦀 ñ".as_bytes()));
    assert!(validate(b"\xEF\xBB\xBFwith bom"));
}

// =============================================================================
// Invalid lead bytes
// =============================================================================

#[test]
fn test_overlong_two_byte_leads_rejected() {
    assert_eq!(kind_of(b"\xC0\x80"), Utf8ErrorKind::InvalidLeadByte(0xC0));
    assert_eq!(kind_of(b"\xC1\xBF"), Utf8ErrorKind::InvalidLeadByte(0xC1));
}

#[test]
fn test_lone_continuation_rejected() {
    assert_eq!(kind_of(b"\x80"), Utf8ErrorKind::InvalidLeadByte(0x80));
    assert_eq!(kind_of(b"a\xBFb"), Utf8ErrorKind::InvalidLeadByte(0xBF));
}

#[test]
fn test_high_leads_rejected() {
    for lead in 0xF5..=0xFF_u8 {
        assert_eq!(
            kind_of(&[lead, 0x80, 0x80, 0x80]),
            Utf8ErrorKind::InvalidLeadByte(lead)
        );
    }
}

// =============================================================================
// Truncated sequences
// =============================================================================

#[test]
fn test_truncated_sequences() {
    assert_eq!(kind_of(b"\xE0"), Utf8ErrorKind::Truncated);
    assert_eq!(kind_of(b"\xC2"), Utf8ErrorKind::Truncated);
    assert_eq!(kind_of(b"\xE2\x82"), Utf8ErrorKind::Truncated);
    assert_eq!(kind_of(b"\xF0\x9F\xA6"), Utf8ErrorKind::Truncated);
}

#[test]
fn test_truncation_reported_before_continuation() {
    // Too short to hold the sequence, so the bad second byte is never inspected.
    assert_eq!(kind_of(b"\xF0A"), Utf8ErrorKind::Truncated);
}

// =============================================================================
// Continuation bytes
// =============================================================================

#[test]
fn test_bad_continuation() {
    assert_eq!(kind_of(b"\xC2A"), Utf8ErrorKind::InvalidContinuation);
    assert_eq!(kind_of(b"\xE2\x82\xC0"), Utf8ErrorKind::InvalidContinuation);
    assert_eq!(kind_of(b"\xF0\x9F\x26\x80"), Utf8ErrorKind::InvalidContinuation);
}

// =============================================================================
// Range checks
// =============================================================================

#[test]
fn test_overlong_three_byte() {
    assert_eq!(kind_of(b"\xE0\x80\x80"), Utf8ErrorKind::Overlong);
    assert_eq!(kind_of(b"\xE0\x9F\xBF"), Utf8ErrorKind::Overlong);
}

#[test]
fn test_overlong_four_byte() {
    assert_eq!(kind_of(b"\xF0\x80\x80\x80"), Utf8ErrorKind::Overlong);
    assert_eq!(kind_of(b"\xF0\x8F\xBF\xBF"), Utf8ErrorKind::Overlong);
}

#[test]
fn test_surrogates_rejected() {
    assert_eq!(kind_of(b"\xED\xA0\x80"), Utf8ErrorKind::Surrogate);
    assert_eq!(kind_of(b"\xED\xBF\xBF"), Utf8ErrorKind::Surrogate);
}

#[test]
fn test_above_max_codepoint() {
    assert_eq!(kind_of(b"\xF4\x90\x80\x80"), Utf8ErrorKind::OutOfRange);
    assert_eq!(kind_of(b"\xF4\xBF\xBF\xBF"), Utf8ErrorKind::OutOfRange);
}

// =============================================================================
// Error position
// =============================================================================

#[test]
fn test_valid_up_to_points_at_lead_byte() {
    let err = check(b"a\xC3\xB1\xE2\x82\xAC\xFF").unwrap_err();
    // 'a' (1) + 'ñ' (2) + '€' (3)
    assert_eq!(err.valid_up_to(), 6);
    assert_eq!(err.kind(), Utf8ErrorKind::InvalidLeadByte(0xFF));
}

#[test]
fn test_first_failure_wins() {
    let err = check(b"ok\xED\xA0\x80\xC0").unwrap_err();
    assert_eq!(err.valid_up_to(), 2);
    assert_eq!(err.kind(), Utf8ErrorKind::Surrogate);
}

#[test]
fn test_error_display() {
    let err = check(b"ab\xE0").unwrap_err();
    assert_eq!(
        std::format!("{err}"),
        "invalid UTF-8 at byte 2: truncated sequence"
    );

    let err = check(b"\xC1\x81").unwrap_err();
    assert_eq!(
        std::format!("{err}"),
        "invalid UTF-8 at byte 0: invalid lead byte 0xC1"
    );
}
