// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # spindrift-syntax
//!
//! A lossless lexical scanner for ECMAScript source text.
//!
//! ## Overview
//!
//! The scanner converts UTF-16 source text into a syntax tree with a single
//! compilation unit. Its children are, in source order:
//! - tokens: literals, identifiers, keywords, punctuators and `Invalid`
//! - trivia: comments, line terminators and white space
//!
//! Concatenating the children's texts reproduces the source exactly, and
//! every token keeps both its original text and its decoded value.
//!
//! ## Quick Start
//!
//! ```rust
//! use spindrift_syntax::{SyntaxKind, TokenValue, scan_str};
//!
//! let tree = scan_str("x = 0xFF; // max");
//! let kinds: Vec<_> = tree.tokens().map(|item| item.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         SyntaxKind::IdentifierToken,
//!         SyntaxKind::EqualsToken,
//!         SyntaxKind::NumericLiteralToken,
//!         SyntaxKind::SemicolonToken,
//!     ]
//! );
//!
//! let number = tree.tokens().nth(2).and_then(|item| item.value().cloned());
//! assert_eq!(number, Some(TokenValue::Numeric(255.0)));
//! assert_eq!(tree.text(), "x = 0xFF; // max");
//! ```
//!
//! ## Features
//!
//! - `parallel` (default): [`scan_batch`] scans many sources with rayon
//! - `serde`: (de)serialization of [`ScanOptions`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod lexer;
pub mod syntax;

#[cfg(feature = "parallel")]
mod batch;

pub use config::{DEFAULT_SIGNIFICANT_DIGITS, ScanOptions};
pub use error::{Result, SyntaxError};
pub use lexer::{Scanner, scan_str, scan_utf16};
pub use syntax::{
    ItemId, Keyword, Quote, Span, SyntaxItem, SyntaxKind, SyntaxTree, TokenValue, WideString,
};

#[cfg(feature = "parallel")]
pub use batch::scan_batch;
