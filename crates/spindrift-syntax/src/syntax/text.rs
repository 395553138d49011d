// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! UTF-16 text and source spans.

use std::fmt;

use crate::error::{Result, SyntaxError};

/// A span in the source text, in UTF-16 code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Start offset (inclusive)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in code units.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if this span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if `offset` falls inside this span.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// An owned sequence of UTF-16 code units.
///
/// Source text is kept as code units so that unpaired surrogates survive a
/// scan unchanged. Conversion to `String` is explicit.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct WideString(Vec<u16>);

impl WideString {
    /// Creates an empty string.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates an empty string with room for `capacity` code units.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Returns the code units.
    pub fn as_units(&self) -> &[u16] {
        &self.0
    }

    /// Consumes the string and returns its code units.
    pub fn into_units(self) -> Vec<u16> {
        self.0
    }

    /// Returns the length in code units.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the string holds no code units.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends one code unit.
    pub fn push(&mut self, unit: u16) {
        self.0.push(unit);
    }

    /// Appends a slice of code units.
    pub fn extend_from_units(&mut self, units: &[u16]) {
        self.0.extend_from_slice(units);
    }

    /// Appends a code point, splitting it into a surrogate pair above the
    /// Basic Multilingual Plane.
    ///
    /// Values in the surrogate range are stored as the single unit they
    /// name; values above U+10FFFF are ignored.
    pub fn push_code_point(&mut self, code_point: u32) {
        match code_point {
            0..=0xFFFF => self.0.push(code_point as u16),
            0x1_0000..=0x10_FFFF => {
                let offset = code_point - 0x1_0000;
                self.0.push(0xD800 | (offset >> 10) as u16);
                self.0.push(0xDC00 | (offset & 0x3FF) as u16);
            }
            _ => {}
        }
    }

    /// Converts to a `String`, replacing unpaired surrogates with U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.0)
    }

    /// Converts to a `String`, failing on the first unpaired surrogate.
    pub fn try_to_string(&self) -> Result<String> {
        units_to_string(&self.0)
    }
}

/// Decodes code units into a `String`, reporting the offset of the first
/// unpaired surrogate.
pub(crate) fn units_to_string(units: &[u16]) -> Result<String> {
    let mut out = String::with_capacity(units.len());
    let mut offset = 0;
    for decoded in char::decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(ch) => {
                out.push(ch);
                offset += ch.len_utf16();
            }
            Err(_) => return Err(SyntaxError::InvalidUtf16 { offset }),
        }
    }
    Ok(out)
}

impl From<&str> for WideString {
    fn from(text: &str) -> Self {
        Self(text.encode_utf16().collect())
    }
}

impl From<Vec<u16>> for WideString {
    fn from(units: Vec<u16>) -> Self {
        Self(units)
    }
}

impl From<&[u16]> for WideString {
    fn from(units: &[u16]) -> Self {
        Self(units.to_vec())
    }
}

impl PartialEq<str> for WideString {
    fn eq(&self, other: &str) -> bool {
        self.0.iter().copied().eq(other.encode_utf16())
    }
}

impl PartialEq<&str> for WideString {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl fmt::Debug for WideString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_string_lossy(), f)
    }
}

impl fmt::Display for WideString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}
