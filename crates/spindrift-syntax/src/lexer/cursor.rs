// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! A rewindable position over UTF-16 source text.

/// Scan state: the source and the current offset into it.
///
/// End of input is `None` from every peek, so it can never be confused
/// with a code unit.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    units: &'a [u16],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(units: &'a [u16]) -> Self {
        Self { units, pos: 0 }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.units.len()
    }

    pub(crate) fn reset(&mut self, pos: usize) {
        self.pos = pos.min(self.units.len());
    }

    /// Peeks the code unit `n` places ahead.
    pub(crate) fn nth_unit(&self, n: usize) -> Option<u16> {
        self.units.get(self.pos + n).copied()
    }

    pub(crate) fn first_unit(&self) -> Option<u16> {
        self.nth_unit(0)
    }

    /// Peeks the code unit `n` places ahead as a `char`. Surrogates come
    /// back as U+FFFD, which no ASCII comparison will match.
    pub(crate) fn nth(&self, n: usize) -> Option<char> {
        self.nth_unit(n)
            .map(|unit| char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    pub(crate) fn first(&self) -> Option<char> {
        self.nth(0)
    }

    pub(crate) fn second(&self) -> Option<char> {
        self.nth(1)
    }

    /// Peeks the code point at the cursor and its width in code units.
    ///
    /// A well-formed surrogate pair decodes to one supplementary code
    /// point; a lone surrogate is returned as its own value.
    pub(crate) fn code_point(&self) -> Option<(u32, usize)> {
        let high = self.first_unit()?;
        if (0xD800..0xDC00).contains(&high) {
            if let Some(low @ 0xDC00..=0xDFFF) = self.nth_unit(1) {
                let code_point =
                    0x1_0000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
                return Some((code_point, 2));
            }
        }
        Some((u32::from(high), 1))
    }

    pub(crate) fn bump(&mut self) -> Option<u16> {
        let unit = self.first_unit()?;
        self.pos += 1;
        Some(unit)
    }

    pub(crate) fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.units.len());
    }

    /// Consumes `ch` if it is next.
    pub(crate) fn eat(&mut self, ch: char) -> bool {
        if self.first() == Some(ch) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn slice_from(&self, start: usize) -> &'a [u16] {
        &self.units[start..self.pos]
    }

    /// Runs a sub-scanner, rewinding to the current position if it fails.
    pub(crate) fn attempt<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let start = self.pos;
        let result = f(self);
        if result.is_none() {
            self.pos = start;
        }
        result
    }
}
