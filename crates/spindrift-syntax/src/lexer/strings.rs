// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! String literal scanning.
//!
//! | Escape | Value |
//! |--------|-------|
//! | `\0` | U+0000 |
//! | `\b` | U+0008 |
//! | `\f` | U+000C |
//! | `\n` | U+000A |
//! | `\r` | U+000D |
//! | `\t` | U+0009 |
//! | `\v` | U+000B |
//! | `\xNN` | hex escape |
//! | `\uNNNN`, `\u{N...}` | Unicode escape |
//! | `\` + line terminator | nothing (line continuation) |
//! | `\` + anything else | that unit |

use tracing::trace;

use super::cursor::Cursor;
use super::escapes::{hex_escape, unicode_escape};
use super::unicode::is_line_terminator;
use crate::syntax::{Quote, WideString};

/// A scanned string literal.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StringLiteral {
    pub(crate) value: WideString,
    pub(crate) quote: Quote,
}

/// Scans a quoted string literal at the cursor.
///
/// Fails without consuming input on a raw line terminator or end of input
/// before the closing quote.
pub(crate) fn scan_string_literal(cursor: &mut Cursor<'_>) -> Option<StringLiteral> {
    let quote = cursor.first().and_then(Quote::from_char)?;
    cursor.attempt(|cursor| {
        let start = cursor.pos();
        cursor.bump();
        let mut value = WideString::new();

        loop {
            let Some(unit) = cursor.first_unit() else {
                trace!(offset = start, "unterminated string literal at end of input");
                return None;
            };
            match unit {
                _ if cursor.first() == Some(quote.as_char()) => {
                    cursor.bump();
                    return Some(StringLiteral { value, quote });
                }
                0x5C => scan_escape(cursor, &mut value)?,
                _ if is_line_terminator(unit) => {
                    trace!(offset = start, "line terminator inside string literal");
                    return None;
                }
                _ => {
                    value.push(unit);
                    cursor.bump();
                }
            }
        }
    })
}

/// Scans one escape sequence starting at a backslash.
fn scan_escape(cursor: &mut Cursor<'_>, value: &mut WideString) -> Option<()> {
    let Some(escaped) = cursor.second() else {
        trace!(offset = cursor.pos(), "backslash at end of input");
        return None;
    };

    let decoded = match escaped {
        'u' => unicode_escape(cursor),
        'x' => hex_escape(cursor),
        _ => None,
    };
    if let Some(code_point) = decoded {
        value.push_code_point(code_point);
        return Some(());
    }
    if matches!(escaped, 'u' | 'x') {
        // Malformed; keep the backslash and rescan what follows it.
        value.push(0x5C);
        cursor.bump();
        return Some(());
    }

    let unit = cursor.nth_unit(1)?;
    cursor.advance(2);
    match escaped {
        '\r' => {
            cursor.eat('\n');
        }
        _ if is_line_terminator(unit) => {}
        '0' => value.push(0x0000),
        'b' => value.push(0x0008),
        'f' => value.push(0x000C),
        'n' => value.push(0x000A),
        'r' => value.push(0x000D),
        't' => value.push(0x0009),
        'v' => value.push(0x000B),
        _ => value.push(unit),
    }
    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str) -> (Option<StringLiteral>, usize) {
        let source: Vec<u16> = text.encode_utf16().collect();
        let mut cursor = Cursor::new(&source);
        let literal = scan_string_literal(&mut cursor);
        (literal, cursor.pos())
    }

    fn value(text: &str) -> WideString {
        scan(text).0.expect("string literal").value
    }

    #[test]
    fn test_simple_strings() {
        let (literal, end) = scan(r#""hello" rest"#);
        let literal = literal.unwrap();
        assert_eq!(literal.value, "hello");
        assert_eq!(literal.quote, Quote::Double);
        assert_eq!(end, 7);

        assert_eq!(scan("'it'").0.unwrap().quote, Quote::Single);
        assert_eq!(value(r#"'say "hi"'"#), r#"say "hi""#);
        assert_eq!(value("''"), "");
    }

    #[test]
    fn test_single_character_escapes() {
        assert_eq!(value(r#""ab\ncd""#), "ab\ncd");
        assert_eq!(value(r#""\0\b\f\r\t\v""#), "\0\u{8}\u{c}\r\t\u{b}");
        assert_eq!(value(r#""\"\'\\""#), "\"'\\");
        assert_eq!(value(r#""\q\$""#), "q$");
    }

    #[test]
    fn test_unicode_and_hex_escapes() {
        assert_eq!(value(r#""\u{48}\x49""#), "HI");
        assert_eq!(value(r#""\u{1F600}""#), "\u{1F600}");
        assert_eq!(value(r#""\u{1F600}""#).len(), 2);
    }

    #[test]
    fn test_malformed_escape_keeps_backslash() {
        assert_eq!(value(r#""\u12""#), "\\u12");
        assert_eq!(value(r#""\xZ""#), "\\xZ");
        assert_eq!(value(r#""\u{110000}""#), "\\u{110000}");
    }

    #[test]
    fn test_line_continuation() {
        assert_eq!(value("'a\\\nb'"), "ab");
        assert_eq!(value("'a\\\r\nb'"), "ab");
        assert_eq!(value("'a\\\rb'"), "ab");
        assert_eq!(value("'a\\\u{2028}b'"), "ab");
        assert_eq!(value("'a\\\u{2029}b'"), "ab");
    }

    #[test]
    fn test_unterminated_strings_rewind() {
        assert_eq!(scan("\"abc"), (None, 0));
        assert_eq!(scan("\"ab\ncd\""), (None, 0));
        assert_eq!(scan("'ab\u{2028}'"), (None, 0));
        assert_eq!(scan("'ab\\"), (None, 0));
        assert_eq!(scan("'mismatched\""), (None, 0));
    }

    #[test]
    fn test_not_a_string() {
        assert_eq!(scan("abc"), (None, 0));
        assert_eq!(scan(""), (None, 0));
    }

    #[test]
    fn test_lone_surrogate_passes_through() {
        let source = [0x27, 0xD800, 0x27];
        let mut cursor = Cursor::new(&source);
        let literal = scan_string_literal(&mut cursor).unwrap();
        assert_eq!(literal.value.as_units(), &[0xD800]);
    }
}
