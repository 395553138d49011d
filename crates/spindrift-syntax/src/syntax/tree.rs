// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Arena-backed syntax tree.
//!
//! Every item lives in one flat `Vec`. Parents own their children through
//! index lists and children point back at their parent by index, so the
//! tree needs no reference counting and is immutable once built.
//!
//! ```text
//! items[0]  CompilationUnit  children: [1, 2, 3]
//! items[1]  KeywordToken     parent: 0  rel: 0  "var"
//! items[2]  WhitespaceTrivia parent: 0  rel: 3  " "
//! items[3]  IdentifierToken  parent: 0  rel: 4  "x"
//! ```

use std::borrow::Cow;
use std::fmt;

use super::text::units_to_string;
use super::{Span, SyntaxKind, TokenValue, WideString};
use crate::error::{Result, SyntaxError};

/// A reference to an item in a [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(usize);

impl ItemId {
    fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the arena index of this item.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct ItemData {
    kind: SyntaxKind,
    parent: Option<ItemId>,
    relative_position: usize,
    payload: Payload,
}

#[derive(Debug, Clone)]
enum Payload {
    Node { children: Vec<ItemId>, width: usize },
    Leaf { text: WideString, value: Option<TokenValue> },
}

/// The output of a scan: a compilation unit and its tokens and trivia.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    items: Vec<ItemData>,
    root: ItemId,
}

impl SyntaxTree {
    /// Returns the compilation unit.
    pub fn root(&self) -> SyntaxItem<'_> {
        SyntaxItem {
            tree: self,
            id: self.root,
        }
    }

    /// Looks up an item by id.
    pub fn get(&self, id: ItemId) -> Result<SyntaxItem<'_>> {
        if id.index() < self.items.len() {
            Ok(SyntaxItem { tree: self, id })
        } else {
            Err(SyntaxError::UnknownItem(id))
        }
    }

    /// Returns the number of items, the compilation unit included.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Iterates over the compilation unit's children in source order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = SyntaxItem<'_>> + '_ {
        self.root().children()
    }

    /// Iterates over the tokens, skipping trivia.
    pub fn tokens(&self) -> impl Iterator<Item = SyntaxItem<'_>> + '_ {
        self.children().filter(|item| item.is_token())
    }

    /// Returns the total width in code units.
    pub fn width(&self) -> usize {
        self.root().width()
    }

    /// Rebuilds the source text from the leaves.
    pub fn text(&self) -> WideString {
        WideString::from(self.root().text().into_owned())
    }

    /// Returns the top-level item covering an absolute offset.
    pub fn item_at(&self, offset: usize) -> Option<SyntaxItem<'_>> {
        let children = self.child_ids(self.root);
        let index = children.partition_point(|id| self.data(*id).relative_position <= offset);
        let item = self.get(children[index.checked_sub(1)?]).ok()?;
        item.span().contains(offset).then_some(item)
    }

    fn data(&self, id: ItemId) -> &ItemData {
        &self.items[id.index()]
    }

    fn child_ids(&self, id: ItemId) -> &[ItemId] {
        match &self.data(id).payload {
            Payload::Node { children, .. } => children,
            Payload::Leaf { .. } => &[],
        }
    }
}

/// A borrowed view of one item in a [`SyntaxTree`].
#[derive(Clone, Copy)]
pub struct SyntaxItem<'a> {
    tree: &'a SyntaxTree,
    id: ItemId,
}

impl<'a> SyntaxItem<'a> {
    /// Returns the item's id.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Returns the item's kind.
    pub fn kind(&self) -> SyntaxKind {
        self.data().kind
    }

    /// Returns the containing item, if any.
    pub fn parent(&self) -> Option<SyntaxItem<'a>> {
        self.data().parent.map(|id| SyntaxItem { tree: self.tree, id })
    }

    /// Returns the offset from the start of the parent.
    pub fn relative_position(&self) -> usize {
        self.data().relative_position
    }

    /// Returns the absolute offset in the source.
    pub fn position(&self) -> usize {
        let mut position = self.relative_position();
        let mut current = self.data().parent;
        while let Some(id) = current {
            let data = self.tree.data(id);
            position += data.relative_position;
            current = data.parent;
        }
        position
    }

    /// Returns the absolute source range covered by the item.
    pub fn span(&self) -> Span {
        let start = self.position();
        Span::new(start, start + self.width())
    }

    /// Returns the width in code units.
    pub fn width(&self) -> usize {
        match &self.data().payload {
            Payload::Node { width, .. } => *width,
            Payload::Leaf { text, .. } => text.len(),
        }
    }

    /// Returns the original source text of the item.
    ///
    /// Containers concatenate their children's texts.
    pub fn text(&self) -> Cow<'a, [u16]> {
        match &self.tree.data(self.id).payload {
            Payload::Leaf { text, .. } => Cow::Borrowed(text.as_units()),
            Payload::Node { width, .. } => {
                let mut text = WideString::with_capacity(*width);
                for child in self.children() {
                    text.extend_from_units(&child.text());
                }
                Cow::Owned(text.into_units())
            }
        }
    }

    /// Returns the original source text as a `String`.
    pub fn text_string(&self) -> Result<String> {
        units_to_string(&self.text())
    }

    /// Returns the decoded value of a token.
    pub fn value(&self) -> Option<&'a TokenValue> {
        match &self.tree.data(self.id).payload {
            Payload::Leaf { value, .. } => value.as_ref(),
            Payload::Node { .. } => None,
        }
    }

    /// Iterates over the item's children in source order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = SyntaxItem<'a>> + use<'a> {
        let tree = self.tree;
        tree.child_ids(self.id)
            .iter()
            .map(move |&id| SyntaxItem { tree, id })
    }

    /// Returns true if the item is a token.
    pub fn is_token(&self) -> bool {
        self.kind().is_token()
    }

    /// Returns true if the item is trivia.
    pub fn is_trivia(&self) -> bool {
        self.kind().is_trivia()
    }

    fn data(&self) -> &'a ItemData {
        self.tree.data(self.id)
    }
}

impl fmt::Debug for SyntaxItem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let span = self.span();
        write!(f, "{}@{}..{}", self.kind(), span.start, span.end)?;
        if !self.kind().is_node() {
            write!(f, " {:?}", String::from_utf16_lossy(&self.text()))?;
        }
        Ok(())
    }
}

/// Builds a [`SyntaxTree`] one leaf at a time, in source order.
pub(crate) struct TreeBuilder {
    items: Vec<ItemData>,
    children: Vec<ItemId>,
    offset: usize,
}

impl TreeBuilder {
    const ROOT: ItemId = ItemId(0);

    pub(crate) fn new(capacity: usize) -> Self {
        let mut items = Vec::with_capacity(capacity + 1);
        items.push(ItemData {
            kind: SyntaxKind::CompilationUnit,
            parent: None,
            relative_position: 0,
            payload: Payload::Node {
                children: Vec::new(),
                width: 0,
            },
        });
        Self {
            items,
            children: Vec::with_capacity(capacity),
            offset: 0,
        }
    }

    /// Appends a token with its decoded value.
    pub(crate) fn token(&mut self, text: &[u16], value: TokenValue) {
        self.leaf(value.kind(), text, Some(value));
    }

    /// Appends a trivia item.
    pub(crate) fn trivia(&mut self, kind: SyntaxKind, text: &[u16]) {
        debug_assert!(kind.is_trivia());
        self.leaf(kind, text, None);
    }

    fn leaf(&mut self, kind: SyntaxKind, text: &[u16], value: Option<TokenValue>) {
        let id = ItemId::new(self.items.len());
        self.items.push(ItemData {
            kind,
            parent: Some(Self::ROOT),
            relative_position: self.offset,
            payload: Payload::Leaf {
                text: WideString::from(text),
                value,
            },
        });
        self.children.push(id);
        self.offset += text.len();
    }

    pub(crate) fn len(&self) -> usize {
        self.children.len()
    }

    pub(crate) fn finish(mut self) -> SyntaxTree {
        self.items[Self::ROOT.index()].payload = Payload::Node {
            children: self.children,
            width: self.offset,
        };
        SyntaxTree {
            items: self.items,
            root: Self::ROOT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(text: &str) -> Vec<u16> {
        text.encode_utf16().collect()
    }

    fn sample_tree() -> SyntaxTree {
        let mut builder = TreeBuilder::new(3);
        builder.token(&units("foo"), TokenValue::Identifier(WideString::from("foo")));
        builder.trivia(SyntaxKind::WhitespaceTrivia, &units("  "));
        builder.token(&units(";"), TokenValue::Punctuator(SyntaxKind::SemicolonToken));
        builder.finish()
    }

    #[test]
    fn test_positions_and_widths() {
        let tree = sample_tree();
        let positions: Vec<_> = tree.children().map(|item| item.position()).collect();
        assert_eq!(positions, vec![0, 3, 5]);
        assert_eq!(tree.width(), 6);
        assert_eq!(tree.root().width(), 6);
        assert_eq!(tree.item_count(), 4);
    }

    #[test]
    fn test_parent_back_reference() {
        let tree = sample_tree();
        let semicolon = tree.children().last().unwrap();
        let parent = semicolon.parent().unwrap();
        assert_eq!(parent.kind(), SyntaxKind::CompilationUnit);
        assert!(parent.parent().is_none());
    }

    #[test]
    fn test_root_text_concatenates_leaves() {
        let tree = sample_tree();
        assert_eq!(tree.text(), "foo  ;");
        assert_eq!(tree.root().text_string().unwrap(), "foo  ;");
    }

    #[test]
    fn test_tokens_skip_trivia() {
        let tree = sample_tree();
        let kinds: Vec<_> = tree.tokens().map(|item| item.kind()).collect();
        assert_eq!(
            kinds,
            vec![SyntaxKind::IdentifierToken, SyntaxKind::SemicolonToken]
        );
    }

    #[test]
    fn test_item_at() {
        let tree = sample_tree();
        assert_eq!(tree.item_at(0).map(|item| item.kind()), Some(SyntaxKind::IdentifierToken));
        assert_eq!(tree.item_at(4).map(|item| item.kind()), Some(SyntaxKind::WhitespaceTrivia));
        assert_eq!(tree.item_at(5).map(|item| item.kind()), Some(SyntaxKind::SemicolonToken));
        assert!(tree.item_at(6).is_none());
    }

    #[test]
    fn test_get_unknown_item() {
        let tree = sample_tree();
        let foreign = ItemId::new(99);
        assert!(matches!(tree.get(foreign), Err(SyntaxError::UnknownItem(id)) if id == foreign));
        assert!(tree.get(ItemId::new(1)).is_ok());
    }

    #[test]
    fn test_children_outlive_item_handle() {
        let tree = sample_tree();
        let children = tree.get(tree.root().id()).unwrap().children();
        assert_eq!(children.len(), 3);
        let texts: Vec<_> = tree
            .children()
            .map(|item| String::from_utf16_lossy(&item.text()))
            .collect();
        assert_eq!(texts, vec!["foo", "  ", ";"]);
    }

    #[test]
    fn test_item_id_keeps_wide_indices() {
        let index = u32::MAX as usize + 1;
        assert_eq!(ItemId::new(index).index(), index);
    }

    #[test]
    fn test_empty_tree() {
        let tree = TreeBuilder::new(0).finish();
        assert_eq!(tree.width(), 0);
        assert_eq!(tree.children().len(), 0);
        assert!(tree.item_at(0).is_none());
        assert!(tree.text().is_empty());
    }

    #[test]
    fn test_debug_format() {
        let tree = sample_tree();
        let first = tree.children().next().unwrap();
        assert_eq!(format!("{first:?}"), "IdentifierToken@0..3 \"foo\"");
    }
}
