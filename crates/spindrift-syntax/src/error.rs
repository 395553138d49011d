// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Error types for the syntax crate.
//!
//! Scanning itself never fails: malformed input is recovered into
//! `Invalid` tokens. These errors cover the API around the tree.

use thiserror::Error;

use crate::syntax::ItemId;

/// Result type for syntax operations.
pub type Result<T> = std::result::Result<T, SyntaxError>;

/// Errors raised by the syntax tree and scanner configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A text or decoded value holds an unpaired surrogate
    #[error("unpaired UTF-16 surrogate at code unit {offset}")]
    InvalidUtf16 {
        /// Offset of the surrogate within the converted text
        offset: usize,
    },

    /// The item id does not belong to this tree
    #[error("no item {0:?} in this syntax tree")]
    UnknownItem(ItemId),

    /// The scanner options were rejected
    #[error("invalid scan options: {0}")]
    InvalidOptions(String),
}
