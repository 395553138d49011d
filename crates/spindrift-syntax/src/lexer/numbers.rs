// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Numeric literal scanning.
//!
//! ## Decimal literals
//!
//! ```text
//! 42        -> whole
//! 3.14      -> whole + fraction
//! .5        -> fraction only
//! 1.5e-3    -> with exponent
//! ```
//!
//! Whole and fraction digits are kept as separate digit buffers. When they
//! hold more significant digits than the configured bound (20 by default)
//! the excess is cut off and the last kept digit is rounded half up, with
//! the carry running leftwards through the fraction and then the whole
//! part. Whole digits that are cut off scale the result by a power of ten.
//!
//! ## Radix-prefixed integers
//!
//! | Prefix | Radix | Example |
//! |--------|-------|---------|
//! | `0b` | 2 | `0b101` |
//! | `0o` | 8 | `0o17` |
//! | `0x` | 16 | `0xFF` |
//!
//! Either form is rejected when an identifier-start character follows it
//! directly (`3in`, `0x1g`).

use tracing::trace;

use super::cursor::Cursor;
use super::unicode::is_id_start;

/// Exponents beyond this magnitude already overflow or underflow an `f64`.
const EXPONENT_LIMIT: i64 = 1_000_000;

/// Scans a numeric literal at the cursor and returns its value.
pub(crate) fn scan_numeric_literal(
    cursor: &mut Cursor<'_>,
    significant_digits: usize,
) -> Option<f64> {
    let radix = match (cursor.first()?, cursor.second()) {
        ('0', Some('b' | 'B')) => 2,
        ('0', Some('o' | 'O')) => 8,
        ('0', Some('x' | 'X')) => 16,
        _ => return scan_decimal_literal(cursor, significant_digits),
    };
    scan_radix_literal(cursor, radix)
}

fn scan_radix_literal(cursor: &mut Cursor<'_>, radix: u32) -> Option<f64> {
    cursor.attempt(|cursor| {
        let start = cursor.pos();
        cursor.advance(2);

        let mut value = 0.0;
        let mut digits = 0;
        while let Some(digit) = cursor.first().and_then(|ch| ch.to_digit(radix)) {
            value = value * f64::from(radix) + f64::from(digit);
            digits += 1;
            cursor.bump();
        }

        if digits == 0 {
            trace!(offset = start, radix, "radix prefix without digits");
            return None;
        }
        if followed_by_identifier_start(cursor) {
            trace!(offset = start, "identifier character after numeric literal");
            return None;
        }
        Some(value)
    })
}

fn scan_decimal_literal(cursor: &mut Cursor<'_>, significant_digits: usize) -> Option<f64> {
    cursor.attempt(|cursor| {
        let start = cursor.pos();
        let mut whole = Vec::new();
        let mut fraction = Vec::new();

        eat_digits(cursor, &mut whole);
        if cursor.first() == Some('.') {
            if whole.is_empty() && !cursor.second().is_some_and(|ch| ch.is_ascii_digit()) {
                return None;
            }
            cursor.bump();
            eat_digits(cursor, &mut fraction);
        }
        if whole.is_empty() && fraction.is_empty() {
            return None;
        }

        let mut exponent: i64 = 0;
        if matches!(cursor.first(), Some('e' | 'E')) {
            cursor.bump();
            let negative = match cursor.first() {
                Some('-') => {
                    cursor.bump();
                    true
                }
                Some('+') => {
                    cursor.bump();
                    false
                }
                _ => false,
            };
            let mut digits = Vec::new();
            eat_digits(cursor, &mut digits);
            if digits.is_empty() {
                trace!(offset = start, "exponent without digits");
                return None;
            }
            exponent = digits.iter().fold(0i64, |acc, digit| {
                acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
            });
            if negative {
                exponent = -exponent;
            }
        }

        if followed_by_identifier_start(cursor) {
            trace!(offset = start, "identifier character after numeric literal");
            return None;
        }
        decimal_value(whole, fraction, exponent, significant_digits)
    })
}

fn eat_digits(cursor: &mut Cursor<'_>, digits: &mut Vec<u8>) {
    while let Some(ch) = cursor.first().filter(char::is_ascii_digit) {
        digits.push(ch as u8);
        cursor.bump();
    }
}

fn followed_by_identifier_start(cursor: &Cursor<'_>) -> bool {
    cursor
        .code_point()
        .is_some_and(|(code_point, _)| is_id_start(code_point))
}

/// Rounds the digit buffers to `bound` significant digits and converts the
/// result to an `f64`.
fn decimal_value(
    whole: Vec<u8>,
    mut fraction: Vec<u8>,
    exponent: i64,
    bound: usize,
) -> Option<f64> {
    let leading_zeros = whole.iter().take_while(|&&digit| digit == b'0').count();
    let mut whole = match &whole[leading_zeros..] {
        [] => vec![b'0'],
        rest => rest.to_vec(),
    };

    // A zero whole part carries no significant digits, and neither do the
    // zeros that open the fraction after it.
    let whole_significant = if whole == [b'0'] { 0 } else { whole.len() };
    let fraction_skip = if whole_significant == 0 {
        fraction.iter().take_while(|&&digit| digit == b'0').count()
    } else {
        0
    };

    let mut shift: i64 = 0;
    let mut round_up = false;
    if whole_significant > bound {
        round_up = whole[bound] >= b'5';
        shift = (whole.len() - bound) as i64;
        whole.truncate(bound);
        fraction.clear();
    } else if whole_significant + fraction.len() - fraction_skip > bound {
        let keep = fraction_skip + bound - whole_significant;
        round_up = fraction[keep] >= b'5';
        fraction.truncate(keep);
    }

    if round_up && increment(&mut fraction) && increment(&mut whole) {
        whole.insert(0, b'1');
        if whole.len() + fraction.len() > bound && fraction.pop().is_none() {
            whole.pop();
            shift += 1;
        }
    }

    let mut text: String = whole.iter().map(|&digit| char::from(digit)).collect();
    if !fraction.is_empty() {
        text.push('.');
        text.extend(fraction.iter().map(|&digit| char::from(digit)));
    }
    let exponent = exponent
        .saturating_add(shift)
        .clamp(-EXPONENT_LIMIT, EXPONENT_LIMIT);
    if exponent != 0 {
        text.push_str(&format!("e{exponent}"));
    }
    text.parse().ok()
}

/// Adds one to a digit buffer in place. Returns true if the carry runs
/// out of the most significant digit.
fn increment(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return false;
        }
    }
    true
}
