// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Unicode and hexadecimal escape sequences.
//!
//! ```text
//! \u0041      -> U+0041 (exactly four hex digits)
//! \u{1F600}   -> U+1F600 (one to six hex digits, at most 10FFFF)
//! \x41        -> U+0041 (exactly two hex digits)
//! ```
//!
//! Both decoders start at the backslash and consume nothing when the
//! sequence is malformed.

use super::cursor::Cursor;

const MAX_CODE_POINT: u32 = 0x10_FFFF;

/// Decodes `\uXXXX` or `\u{X...}` at the cursor.
pub(crate) fn unicode_escape(cursor: &mut Cursor<'_>) -> Option<u32> {
    cursor.attempt(|cursor| {
        if !(cursor.eat('\\') && cursor.eat('u')) {
            return None;
        }
        if cursor.eat('{') {
            let mut value: u32 = 0;
            let mut digits = 0;
            while let Some(digit) = cursor.first().and_then(|ch| ch.to_digit(16)) {
                digits += 1;
                if digits > 6 {
                    return None;
                }
                value = value * 16 + digit;
                cursor.bump();
            }
            if digits == 0 || value > MAX_CODE_POINT || !cursor.eat('}') {
                return None;
            }
            Some(value)
        } else {
            hex_digits(cursor, 4)
        }
    })
}

/// Decodes `\xXX` at the cursor.
pub(crate) fn hex_escape(cursor: &mut Cursor<'_>) -> Option<u32> {
    cursor.attempt(|cursor| {
        if !(cursor.eat('\\') && cursor.eat('x')) {
            return None;
        }
        hex_digits(cursor, 2)
    })
}

fn hex_digits(cursor: &mut Cursor<'_>, count: usize) -> Option<u32> {
    let mut value = 0;
    for _ in 0..count {
        let digit = cursor.first()?.to_digit(16)?;
        value = value * 16 + digit;
        cursor.bump();
    }
    Some(value)
}
