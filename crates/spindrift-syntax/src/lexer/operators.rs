// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Punctuator scanning.
//!
//! Punctuators are matched longest first by looking ahead from their first
//! character.
//!
//! | Token | Method | Variants |
//! |-------|--------|----------|
//! | `+` | `scan_plus` | `+`, `++`, `+=` |
//! | `-` | `scan_minus` | `-`, `--`, `-=` |
//! | `*` | `scan_asterisk` | `*`, `*=` |
//! | `/` | `scan_slash` | `/`, `/=` |
//! | `%` | `scan_percent` | `%`, `%=` |
//! | `<` | `scan_less_than` | `<`, `<=`, `<<`, `<<=` |
//! | `>` | `scan_greater_than` | `>`, `>=`, `>>`, `>>=`, `>>>`, `>>>=` |
//! | `=` | `scan_equals` | `=`, `==`, `===`, `=>` |
//! | `!` | `scan_exclamation` | `!`, `!=`, `!==` |
//! | `&` | `scan_ampersand` | `&`, `&&`, `&=` |
//! | `\|` | `scan_bar` | `\|`, `\|\|`, `\|=` |
//! | `^` | `scan_caret` | `^`, `^=` |
//! | `.` | `scan_dot` | `.`, `...` |
//!
//! ```text
//! // For input ">>>="
//! scan_greater_than():
//!   consume '>'
//!   eat '>'  -> at least ">>"
//!   eat '>'  -> at least ">>>"
//!   eat '='  -> ">>>="
//!   return GreaterThanGreaterThanGreaterThanEqualsToken
//! ```

use super::cursor::Cursor;
use crate::syntax::SyntaxKind;

/// Scans the longest punctuator at the cursor.
pub(crate) fn scan_punctuator(cursor: &mut Cursor<'_>) -> Option<SyntaxKind> {
    let ch = cursor.first()?;
    let kind = match ch {
        '{' => SyntaxKind::OpenBraceToken,
        '}' => SyntaxKind::CloseBraceToken,
        '(' => SyntaxKind::OpenParenToken,
        ')' => SyntaxKind::CloseParenToken,
        '[' => SyntaxKind::OpenBracketToken,
        ']' => SyntaxKind::CloseBracketToken,
        ';' => SyntaxKind::SemicolonToken,
        ',' => SyntaxKind::CommaToken,
        '~' => SyntaxKind::TildeToken,
        '?' => SyntaxKind::QuestionToken,
        ':' => SyntaxKind::ColonToken,
        '.' | '+' | '-' | '*' | '/' | '%' | '<' | '>' | '=' | '!' | '&' | '|' | '^' => {
            cursor.bump();
            return Some(match ch {
                '.' => scan_dot(cursor),
                '+' => scan_plus(cursor),
                '-' => scan_minus(cursor),
                '*' => scan_asterisk(cursor),
                '/' => scan_slash(cursor),
                '%' => scan_percent(cursor),
                '<' => scan_less_than(cursor),
                '>' => scan_greater_than(cursor),
                '=' => scan_equals(cursor),
                '!' => scan_exclamation(cursor),
                '&' => scan_ampersand(cursor),
                '|' => scan_bar(cursor),
                _ => scan_caret(cursor),
            });
        }
        _ => return None,
    };
    cursor.bump();
    Some(kind)
}

fn scan_dot(cursor: &mut Cursor<'_>) -> SyntaxKind {
    if cursor.first() == Some('.') && cursor.second() == Some('.') {
        cursor.advance(2);
        SyntaxKind::DotDotDotToken
    } else {
        SyntaxKind::DotToken
    }
}

fn scan_plus(cursor: &mut Cursor<'_>) -> SyntaxKind {
    if cursor.eat('+') {
        SyntaxKind::PlusPlusToken
    } else if cursor.eat('=') {
        SyntaxKind::PlusEqualsToken
    } else {
        SyntaxKind::PlusToken
    }
}

fn scan_minus(cursor: &mut Cursor<'_>) -> SyntaxKind {
    if cursor.eat('-') {
        SyntaxKind::MinusMinusToken
    } else if cursor.eat('=') {
        SyntaxKind::MinusEqualsToken
    } else {
        SyntaxKind::MinusToken
    }
}

fn scan_asterisk(cursor: &mut Cursor<'_>) -> SyntaxKind {
    if cursor.eat('=') {
        SyntaxKind::AsteriskEqualsToken
    } else {
        SyntaxKind::AsteriskToken
    }
}

fn scan_slash(cursor: &mut Cursor<'_>) -> SyntaxKind {
    if cursor.eat('=') {
        SyntaxKind::SlashEqualsToken
    } else {
        SyntaxKind::SlashToken
    }
}

fn scan_percent(cursor: &mut Cursor<'_>) -> SyntaxKind {
    if cursor.eat('=') {
        SyntaxKind::PercentEqualsToken
    } else {
        SyntaxKind::PercentToken
    }
}

fn scan_less_than(cursor: &mut Cursor<'_>) -> SyntaxKind {
    if cursor.eat('<') {
        if cursor.eat('=') {
            SyntaxKind::LessThanLessThanEqualsToken
        } else {
            SyntaxKind::LessThanLessThanToken
        }
    } else if cursor.eat('=') {
        SyntaxKind::LessThanEqualsToken
    } else {
        SyntaxKind::LessThanToken
    }
}

fn scan_greater_than(cursor: &mut Cursor<'_>) -> SyntaxKind {
    if cursor.eat('>') {
        if cursor.eat('>') {
            if cursor.eat('=') {
                SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken
            } else {
                SyntaxKind::GreaterThanGreaterThanGreaterThanToken
            }
        } else if cursor.eat('=') {
            SyntaxKind::GreaterThanGreaterThanEqualsToken
        } else {
            SyntaxKind::GreaterThanGreaterThanToken
        }
    } else if cursor.eat('=') {
        SyntaxKind::GreaterThanEqualsToken
    } else {
        SyntaxKind::GreaterThanToken
    }
}

fn scan_equals(cursor: &mut Cursor<'_>) -> SyntaxKind {
    if cursor.eat('=') {
        if cursor.eat('=') {
            SyntaxKind::EqualsEqualsEqualsToken
        } else {
            SyntaxKind::EqualsEqualsToken
        }
    } else if cursor.eat('>') {
        SyntaxKind::EqualsGreaterThanToken
    } else {
        SyntaxKind::EqualsToken
    }
}

fn scan_exclamation(cursor: &mut Cursor<'_>) -> SyntaxKind {
    if cursor.eat('=') {
        if cursor.eat('=') {
            SyntaxKind::ExclamationEqualsEqualsToken
        } else {
            SyntaxKind::ExclamationEqualsToken
        }
    } else {
        SyntaxKind::ExclamationToken
    }
}

fn scan_ampersand(cursor: &mut Cursor<'_>) -> SyntaxKind {
    if cursor.eat('&') {
        SyntaxKind::AmpersandAmpersandToken
    } else if cursor.eat('=') {
        SyntaxKind::AmpersandEqualsToken
    } else {
        SyntaxKind::AmpersandToken
    }
}

fn scan_bar(cursor: &mut Cursor<'_>) -> SyntaxKind {
    if cursor.eat('|') {
        SyntaxKind::BarBarToken
    } else if cursor.eat('=') {
        SyntaxKind::BarEqualsToken
    } else {
        SyntaxKind::BarToken
    }
}

fn scan_caret(cursor: &mut Cursor<'_>) -> SyntaxKind {
    if cursor.eat('=') {
        SyntaxKind::CaretEqualsToken
    } else {
        SyntaxKind::CaretToken
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_single(src: &str) -> (Option<SyntaxKind>, usize) {
        let source: Vec<u16> = src.encode_utf16().collect();
        let mut cursor = Cursor::new(&source);
        let kind = scan_punctuator(&mut cursor);
        (kind, cursor.pos())
    }

    fn kind(src: &str) -> SyntaxKind {
        let (kind, len) = scan_single(src);
        assert_eq!(len, src.len(), "{src:?} was not consumed whole");
        kind.expect("punctuator")
    }

    #[test]
    fn test_every_punctuator_round_trips() {
        for text in [
            "{", "}", "(", ")", "[", "]", ".", ";", ",", "<", ">", "+", "-", "*", "%", "&", "|",
            "^", "!", "~", "?", ":", "=", "/", "...", "<=", "<<", "<<=", ">=", ">>", ">>=", ">>>",
            ">>>=", "==", "===", "=>", "!=", "!==", "+=", "++", "-=", "--", "*=", "%=", "&=",
            "&&", "|=", "||", "^=", "/=",
        ] {
            assert_eq!(kind(text).punctuator_text(), Some(text));
        }
    }

    #[test]
    fn test_maximal_munch() {
        assert_eq!(
            kind(">>>="),
            SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken
        );
        assert_eq!(scan_single("====").1, 3);
        assert_eq!(scan_single("+++").1, 2);
        assert_eq!(scan_single("<<<").1, 2);
    }

    #[test]
    fn test_two_dots_are_one_dot() {
        assert_eq!(scan_single(".."), (Some(SyntaxKind::DotToken), 1));
        assert_eq!(scan_single("...."), (Some(SyntaxKind::DotDotDotToken), 3));
    }

    #[test]
    fn test_not_a_punctuator() {
        assert_eq!(scan_single("#"), (None, 0));
        assert_eq!(scan_single("@"), (None, 0));
        assert_eq!(scan_single("`"), (None, 0));
        assert_eq!(scan_single(""), (None, 0));
    }
}
