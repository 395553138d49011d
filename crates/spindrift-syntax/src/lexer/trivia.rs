// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Line terminator and white space scanning.

use super::cursor::Cursor;
use super::unicode::{is_line_terminator, is_whitespace};

/// Consumes one line terminator sequence. CR LF counts as one.
pub(crate) fn eat_line_terminator(cursor: &mut Cursor<'_>) -> bool {
    match cursor.first_unit() {
        Some(0x000D) => {
            cursor.bump();
            cursor.eat('\n');
            true
        }
        Some(unit) if is_line_terminator(unit) => {
            cursor.bump();
            true
        }
        _ => false,
    }
}

/// Consumes the longest run of white space.
pub(crate) fn eat_whitespace(cursor: &mut Cursor<'_>) -> bool {
    let start = cursor.pos();
    while cursor.first_unit().is_some_and(is_whitespace) {
        cursor.bump();
    }
    cursor.pos() > start
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str, f: fn(&mut Cursor<'_>) -> bool) -> (bool, usize) {
        let source: Vec<u16> = text.encode_utf16().collect();
        let mut cursor = Cursor::new(&source);
        let eaten = f(&mut cursor);
        (eaten, cursor.pos())
    }

    #[test]
    fn test_line_terminators() {
        assert_eq!(run("\nx", eat_line_terminator), (true, 1));
        assert_eq!(run("\r\n\n", eat_line_terminator), (true, 2));
        assert_eq!(run("\r\r", eat_line_terminator), (true, 1));
        assert_eq!(run("\u{2028}", eat_line_terminator), (true, 1));
        assert_eq!(run("\u{2029}", eat_line_terminator), (true, 1));
        assert_eq!(run(" ", eat_line_terminator), (false, 0));
    }

    #[test]
    fn test_whitespace_runs() {
        assert_eq!(run(" \t\u{b}\u{c}\u{a0}\u{feff}\u{3000}x", eat_whitespace), (true, 7));
        assert_eq!(run("  \n ", eat_whitespace), (true, 2));
        assert_eq!(run("x", eat_whitespace), (false, 0));
        assert_eq!(run("", eat_whitespace), (false, 0));
    }
}
