// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Comment scanning.

use tracing::trace;

use super::cursor::Cursor;
use super::unicode::is_line_terminator;
use crate::syntax::SyntaxKind;

/// Scans a `//` or `/* */` comment at the cursor.
///
/// A single-line comment stops before the line terminator. An unterminated
/// multi-line comment consumes nothing.
pub(crate) fn scan_comment(cursor: &mut Cursor<'_>) -> Option<SyntaxKind> {
    if cursor.first() != Some('/') {
        return None;
    }
    match cursor.second() {
        Some('/') => {
            cursor.advance(2);
            while cursor.first_unit().is_some_and(|unit| !is_line_terminator(unit)) {
                cursor.bump();
            }
            Some(SyntaxKind::SingleLineCommentTrivia)
        }
        Some('*') => cursor.attempt(|cursor| {
            let start = cursor.pos();
            cursor.advance(2);
            loop {
                match cursor.first() {
                    None => {
                        trace!(offset = start, "unterminated multi-line comment");
                        return None;
                    }
                    Some('*') if cursor.second() == Some('/') => {
                        cursor.advance(2);
                        return Some(SyntaxKind::MultiLineCommentTrivia);
                    }
                    Some(_) => {
                        cursor.bump();
                    }
                }
            }
        }),
        _ => None,
    }
}
