// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Syntax tree data model: kinds, values, text and the tree itself.

mod kind;
mod text;
mod token;
mod tree;

pub use kind::{Keyword, SyntaxKind};
pub use text::{Span, WideString};
pub use token::{Quote, TokenValue};
pub use tree::{ItemId, SyntaxItem, SyntaxTree};

pub(crate) use tree::TreeBuilder;
