// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Identifier name scanning.

use tracing::trace;

use super::cursor::Cursor;
use super::escapes::unicode_escape;
use super::unicode::{is_id_continue, is_id_start};
use crate::syntax::WideString;

/// A scanned identifier name with escapes resolved.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct IdentifierName {
    pub(crate) value: WideString,
    /// True if any character was written as a Unicode escape.
    pub(crate) escaped: bool,
}

enum Part {
    Char { code_point: u32, escaped: bool },
    End,
    Malformed,
}

/// Scans an identifier name at the cursor.
///
/// A backslash that does not begin a well-formed Unicode escape fails the
/// whole name. An escape that decodes to a character not allowed at its
/// position ends the name before the escape.
pub(crate) fn scan_identifier_name(cursor: &mut Cursor<'_>) -> Option<IdentifierName> {
    cursor.attempt(|cursor| {
        let start = cursor.pos();
        let mut value = WideString::new();
        let mut escaped = false;

        let mut accept: fn(u32) -> bool = is_id_start;
        loop {
            match next_part(cursor, accept) {
                Part::Char {
                    code_point,
                    escaped: part_escaped,
                } => {
                    value.push_code_point(code_point);
                    escaped |= part_escaped;
                    accept = is_id_continue;
                }
                Part::End => break,
                Part::Malformed => {
                    trace!(offset = start, "malformed escape in identifier name");
                    return None;
                }
            }
        }

        if value.is_empty() {
            return None;
        }
        Some(IdentifierName { value, escaped })
    })
}

fn next_part(cursor: &mut Cursor<'_>, accept: fn(u32) -> bool) -> Part {
    if cursor.first() == Some('\\') {
        let before = cursor.pos();
        return match unicode_escape(cursor) {
            Some(code_point) if accept(code_point) => Part::Char {
                code_point,
                escaped: true,
            },
            Some(_) => {
                cursor.reset(before);
                Part::End
            }
            None => Part::Malformed,
        };
    }

    match cursor.code_point() {
        Some((code_point, width)) if accept(code_point) => {
            cursor.advance(width);
            Part::Char {
                code_point,
                escaped: false,
            }
        }
        _ => Part::End,
    }
}
