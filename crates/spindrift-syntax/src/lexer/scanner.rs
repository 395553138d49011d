// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! The scanner that turns source text into a syntax tree.

use tracing::{debug, debug_span, trace};

use super::comments::scan_comment;
use super::cursor::Cursor;
use super::identifiers::{IdentifierName, scan_identifier_name};
use super::numbers::scan_numeric_literal;
use super::operators::scan_punctuator;
use super::strings::scan_string_literal;
use super::trivia::{eat_line_terminator, eat_whitespace};
use crate::config::ScanOptions;
use crate::error::Result;
use crate::syntax::{Keyword, SyntaxKind, SyntaxTree, TokenValue, TreeBuilder, WideString};

/// A scanner over UTF-16 ECMAScript source text.
///
/// The scanner holds no position of its own; every call to [`scan`]
/// starts a fresh cursor, so one scanner can be scanned repeatedly.
///
/// [`scan`]: Scanner::scan
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    source: &'a [u16],
    options: ScanOptions,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner with the default options.
    pub fn new(source: &'a [u16]) -> Self {
        Self {
            source,
            options: ScanOptions::default(),
        }
    }

    /// Creates a scanner with the given options.
    pub fn with_options(source: &'a [u16], options: ScanOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { source, options })
    }

    /// Returns the scan options.
    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Scans the whole source into a compilation unit.
    ///
    /// Scanning never fails. Input that no rule accepts becomes `Invalid`
    /// tokens, one code unit each, and the tree always covers the source.
    pub fn scan(&self) -> SyntaxTree {
        let span = debug_span!(
            "scan",
            source = self.options.source_label(),
            units = self.source.len()
        );
        let _enter = span.enter();

        let mut cursor = Cursor::new(self.source);
        let mut builder = TreeBuilder::new(self.source.len() / 4);
        while !cursor.is_eof() {
            let start = cursor.pos();
            self.scan_item(&mut cursor, &mut builder);
            debug_assert!(cursor.pos() > start, "scan made no progress at {start}");
        }

        debug!(items = builder.len(), "scan complete");
        builder.finish()
    }

    /// Appends exactly one item, trying each sub-scanner in order.
    fn scan_item(&self, cursor: &mut Cursor<'a>, builder: &mut TreeBuilder) {
        let start = cursor.pos();

        if let Some(literal) = scan_string_literal(cursor) {
            let value = TokenValue::String {
                value: literal.value,
                quote: literal.quote,
            };
            builder.token(cursor.slice_from(start), value);
            return;
        }

        if let Some(name) = scan_identifier_name(cursor) {
            builder.token(cursor.slice_from(start), classify_identifier(name, start));
            return;
        }

        if let Some(value) = scan_numeric_literal(cursor, self.options.significant_digits) {
            builder.token(cursor.slice_from(start), TokenValue::Numeric(value));
            return;
        }

        if let Some(kind) = scan_comment(cursor) {
            builder.trivia(kind, cursor.slice_from(start));
            return;
        }

        if eat_line_terminator(cursor) {
            builder.trivia(SyntaxKind::EndOfLineTrivia, cursor.slice_from(start));
            return;
        }

        if eat_whitespace(cursor) {
            builder.trivia(SyntaxKind::WhitespaceTrivia, cursor.slice_from(start));
            return;
        }

        if let Some(kind) = scan_punctuator(cursor) {
            builder.token(cursor.slice_from(start), TokenValue::Punctuator(kind));
            return;
        }

        trace!(offset = start, "unrecognized code unit");
        cursor.bump();
        builder.token(cursor.slice_from(start), TokenValue::Invalid);
    }
}

/// Sorts an identifier name into literal, keyword, reserved word or plain
/// identifier. Reserved spellings written with escapes are invalid.
fn classify_identifier(name: IdentifierName, offset: usize) -> TokenValue {
    let Some(reserved) = reserved_word(name.value.as_units()) else {
        return TokenValue::Identifier(name.value);
    };
    if name.escaped {
        trace!(offset, "reserved word spelled with an escape");
        return TokenValue::Invalid;
    }
    reserved
}

fn reserved_word(units: &[u16]) -> Option<TokenValue> {
    if let Some(keyword) = Keyword::from_units(units) {
        return Some(TokenValue::Keyword(keyword));
    }
    let is = |word: &str| units.iter().copied().eq(word.encode_utf16());
    if is("null") {
        Some(TokenValue::Null)
    } else if is("true") {
        Some(TokenValue::Boolean(true))
    } else if is("false") {
        Some(TokenValue::Boolean(false))
    } else if is("enum") {
        Some(TokenValue::FutureReservedWord(WideString::from(units)))
    } else {
        None
    }
}
