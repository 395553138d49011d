// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Test-helper macros for the spindrift scanner.
//!
//! The macros expand in the caller's crate and only rely on the method
//! names of the syntax tree API, so this crate carries no dependencies.
//!
//! # Macros Overview
//!
//! - [`utf16!`] - Encode a string literal as UTF-16 code units
//! - [`assert_matches!`] - Assert that an expression matches a pattern
//! - [`assert_kinds!`] - Assert the kinds of a tree's top-level items
//! - [`assert_round_trip!`] - Assert that a tree reproduces its source
//!
//! # Examples
//!
//! ```
//! use spindrift_macros::*;
//!
//! let units = utf16!("a\u{2028}");
//! assert_eq!(units, vec![0x61, 0x2028]);
//!
//! let value: Option<u32> = Some(7);
//! assert_matches!(value, Some(n) if n > 5);
//! ```

#![warn(missing_docs)]

/// Encodes a string as a `Vec<u16>` of UTF-16 code units.
///
/// # Example
///
/// ```
/// use spindrift_macros::utf16;
///
/// assert_eq!(utf16!("ab"), vec![0x61, 0x62]);
/// ```
#[macro_export]
macro_rules! utf16 {
    ($text:expr) => {
        ($text).encode_utf16().collect::<::std::vec::Vec<u16>>()
    };
}

/// Assert that an expression matches a pattern.
///
/// # Example
///
/// ```
/// use spindrift_macros::assert_matches;
///
/// #[derive(Debug)]
/// enum Scanned { Number(f64), Word(String) }
///
/// let scanned = Scanned::Number(42.0);
/// assert_matches!(scanned, Scanned::Number(n) if n > 0.0);
/// ```
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat) => {
        match $expr {
            $pat => {}
            ref e => panic!(
                "assertion failed: `{}` does not match pattern `{}`\n  value: {:?}",
                stringify!($expr),
                stringify!($pat),
                e
            ),
        }
    };
    ($expr:expr, $pat:pat if $guard:expr) => {
        match $expr {
            $pat if $guard => {}
            ref e => panic!(
                "assertion failed: `{}` does not match pattern `{} if {}`\n  value: {:?}",
                stringify!($expr),
                stringify!($pat),
                stringify!($guard),
                e
            ),
        }
    };
}

/// Assert the kinds of every top-level item of a syntax tree, in order.
///
/// The tree expression must provide `children()` yielding items with a
/// `kind()` method.
///
/// # Example
///
/// ```ignore
/// let tree = spindrift_syntax::scan_str("a;");
/// assert_kinds!(tree, [SyntaxKind::IdentifierToken, SyntaxKind::SemicolonToken]);
/// ```
#[macro_export]
macro_rules! assert_kinds {
    ($tree:expr, [$($kind:expr),* $(,)?]) => {{
        let actual: ::std::vec::Vec<_> = $tree.children().map(|item| item.kind()).collect();
        let expected: ::std::vec::Vec<_> = ::std::vec![$($kind),*];
        assert_eq!(
            actual,
            expected,
            "kind sequence mismatch for `{}`",
            stringify!($tree)
        );
    }};
}

/// Assert that a syntax tree's reconstructed text equals the source it was
/// scanned from, and that the item widths cover it exactly.
///
/// # Example
///
/// ```ignore
/// let source = "var x = 1;";
/// let tree = spindrift_syntax::scan_str(source);
/// assert_round_trip!(tree, source);
/// ```
#[macro_export]
macro_rules! assert_round_trip {
    ($tree:expr, $source:expr) => {{
        let expected = $crate::utf16!($source);
        let rebuilt = $tree.text();
        assert_eq!(
            rebuilt.as_units(),
            expected.as_slice(),
            "reconstructed text differs from source {:?}",
            $source
        );
        let covered: usize = $tree.children().map(|item| item.width()).sum();
        assert_eq!(covered, expected.len(), "item widths do not cover the source");
    }};
}
