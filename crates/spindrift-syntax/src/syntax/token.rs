// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Decoded token values.

use super::{Keyword, SyntaxKind, WideString};

/// The quote character that delimits a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quote {
    /// `"`
    Double,
    /// `'`
    Single,
}

impl Quote {
    /// Returns the quote for a delimiter character.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '"' => Some(Quote::Double),
            '\'' => Some(Quote::Single),
            _ => None,
        }
    }

    /// Returns the delimiter character.
    pub fn as_char(self) -> char {
        match self {
            Quote::Double => '"',
            Quote::Single => '\'',
        }
    }
}

/// The decoded value carried by a token.
///
/// The original source text is stored on the tree item; the value is what
/// the text means once escapes are resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// `null`
    Null,
    /// `true` or `false`
    Boolean(bool),
    /// Numeric literal value
    Numeric(f64),
    /// String literal content with escapes resolved
    String {
        /// Decoded content, quotes excluded
        value: WideString,
        /// Delimiting quote
        quote: Quote,
    },
    /// Identifier name with escapes resolved
    Identifier(WideString),
    /// Reserved keyword
    Keyword(Keyword),
    /// Future reserved word
    FutureReservedWord(WideString),
    /// Punctuator, identified by its kind
    Punctuator(SyntaxKind),
    /// Unrecognized input
    Invalid,
}

impl TokenValue {
    /// Returns the syntax kind of a token with this value.
    pub fn kind(&self) -> SyntaxKind {
        match self {
            TokenValue::Null => SyntaxKind::NullLiteralToken,
            TokenValue::Boolean(_) => SyntaxKind::BooleanLiteralToken,
            TokenValue::Numeric(_) => SyntaxKind::NumericLiteralToken,
            TokenValue::String { .. } => SyntaxKind::StringLiteralToken,
            TokenValue::Identifier(_) => SyntaxKind::IdentifierToken,
            TokenValue::Keyword(_) => SyntaxKind::KeywordToken,
            TokenValue::FutureReservedWord(_) => SyntaxKind::FutureReservedWordToken,
            TokenValue::Punctuator(kind) => *kind,
            TokenValue::Invalid => SyntaxKind::Invalid,
        }
    }

    /// Returns the numeric value of a numeric literal.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            TokenValue::Numeric(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the decoded text of a string literal, identifier or future
    /// reserved word.
    pub fn as_text(&self) -> Option<&WideString> {
        match self {
            TokenValue::String { value, .. }
            | TokenValue::Identifier(value)
            | TokenValue::FutureReservedWord(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_kind() {
        assert_eq!(TokenValue::Null.kind(), SyntaxKind::NullLiteralToken);
        assert_eq!(
            TokenValue::Punctuator(SyntaxKind::BarBarToken).kind(),
            SyntaxKind::BarBarToken
        );
        assert_eq!(
            TokenValue::Keyword(Keyword::While).kind(),
            SyntaxKind::KeywordToken
        );
    }

    #[test]
    fn test_quote_round_trip() {
        assert_eq!(Quote::from_char('\''), Some(Quote::Single));
        assert_eq!(Quote::Double.as_char(), '"');
        assert_eq!(Quote::from_char('`'), None);
    }

    #[test]
    fn test_accessors() {
        assert_eq!(TokenValue::Numeric(2.5).as_number(), Some(2.5));
        assert_eq!(TokenValue::Boolean(true).as_number(), None);
        let ident = TokenValue::Identifier(WideString::from("foo"));
        assert_eq!(ident.as_text().map(WideString::to_string_lossy), Some("foo".to_string()));
    }
}
