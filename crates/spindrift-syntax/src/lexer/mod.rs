// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Lexical analysis for ECMAScript source text.
//!
//! The lexer turns UTF-16 source text into a [`SyntaxTree`] whose
//! compilation unit holds every token and every piece of trivia, so the
//! source can be rebuilt exactly from the tree.
//!
//! ## Structure
//!
//! - `scanner.rs` - `Scanner` and the dispatch loop
//! - `cursor.rs` - rewindable position over the code units
//! - `strings.rs`, `identifiers.rs`, `numbers.rs` - literal sub-scanners
//! - `comments.rs`, `trivia.rs` - comments, line terminators, white space
//! - `operators.rs` - punctuators
//! - `escapes.rs` - `\u` and `\x` escape decoding
//! - `unicode.rs` - identifier and white space character classes
//!
//! At each position the sub-scanners are tried in a fixed order: string,
//! identifier name, number, comment, line terminator, white space,
//! punctuator. A sub-scanner that fails leaves the position untouched; if
//! all of them fail, one code unit becomes an `Invalid` token.
//!
//! ## Usage
//!
//! ```rust
//! use spindrift_syntax::{SyntaxKind, scan_str};
//!
//! let tree = scan_str("let x = 42;");
//!
//! for item in tree.tokens() {
//!     println!("{:?}", item);
//! }
//! // `let` is only reserved in some contexts, so it stays an identifier.
//! let first = tree.tokens().next().map(|item| item.kind());
//! assert_eq!(first, Some(SyntaxKind::IdentifierToken));
//! assert_eq!(tree.text(), "let x = 42;");
//! ```
//!
//! [`SyntaxTree`]: crate::SyntaxTree

mod comments;
mod cursor;
mod escapes;
mod identifiers;
mod numbers;
mod operators;
mod scanner;
mod strings;
mod trivia;
mod unicode;

pub use scanner::Scanner;
pub use unicode::{is_id_continue, is_id_start, is_line_terminator, is_whitespace};

use crate::syntax::SyntaxTree;

/// Scans a Rust string, encoding it as UTF-16 first.
pub fn scan_str(source: &str) -> SyntaxTree {
    let units: Vec<u16> = source.encode_utf16().collect();
    scan_utf16(&units)
}

/// Scans UTF-16 code units with the default options.
pub fn scan_utf16(source: &[u16]) -> SyntaxTree {
    Scanner::new(source).scan()
}
