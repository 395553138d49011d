// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Character classification for identifiers, white space and line
//! terminators.
//!
//! | Class | Derived property | Plus | Minus |
//! |-------|------------------|------|-------|
//! | start | `XID_Start` | `$` `_` Other_ID_Start, NFKC exceptions | U+1885 U+1886 |
//! | continue | `XID_Continue` | start, ZWNJ, ZWJ, Other_ID_Continue | U+30FB U+FF65 |
//!
//! Both derived properties already leave out Pattern_Syntax and
//! Pattern_White_Space. The NFKC exceptions are the letters that
//! `XID_Start` drops because their compatibility decompositions do not
//! start identifiers. The minus column holds marks and punctuation that
//! newer Unicode versions moved into the Other_ID lists.

use unicode_xid::UnicodeXID;

const OTHER_ID_START: &[u32] = &[0x2118, 0x212E, 0x309B, 0x309C];

const ZWNJ: u32 = 0x200C;
const ZWJ: u32 = 0x200D;

fn is_other_id_continue(code_point: u32) -> bool {
    matches!(code_point, 0x00B7 | 0x0387 | 0x1369..=0x1371 | 0x19DA)
}

/// Letters outside `XID_Start` that still start identifiers by category.
fn is_nfkc_start_exception(code_point: u32) -> bool {
    match code_point {
        0x037A | 0x0E33 | 0x0EB3 | 0xFC5E..=0xFC63 | 0xFDFA | 0xFDFB | 0xFF9E | 0xFF9F => true,
        0xFE70..=0xFE7E => code_point % 2 == 0,
        _ => false,
    }
}

/// Checks if a code point can start an identifier name.
pub fn is_id_start(code_point: u32) -> bool {
    if matches!(code_point, 0x1885 | 0x1886) {
        return false;
    }
    match char::from_u32(code_point) {
        Some('$' | '_') => true,
        Some(ch) => {
            ch.is_xid_start()
                || OTHER_ID_START.contains(&code_point)
                || is_nfkc_start_exception(code_point)
        }
        None => false,
    }
}

/// Checks if a code point can continue an identifier name.
pub fn is_id_continue(code_point: u32) -> bool {
    if is_id_start(code_point) {
        return true;
    }
    if code_point == ZWNJ || code_point == ZWJ || is_other_id_continue(code_point) {
        return true;
    }
    if matches!(code_point, 0x30FB | 0xFF65) {
        return false;
    }
    char::from_u32(code_point).is_some_and(UnicodeXID::is_xid_continue)
}

/// Checks if a code unit is white space other than a line terminator.
///
/// Covers TAB, VT, FF, the byte order mark and every `Zs` space.
pub fn is_whitespace(unit: u16) -> bool {
    matches!(
        unit,
        0x0009
            | 0x000B
            | 0x000C
            | 0x0020
            | 0x00A0
            | 0x1680
            | 0x2000..=0x200A
            | 0x202F
            | 0x205F
            | 0x3000
            | 0xFEFF
    )
}

/// Checks if a code unit is a line terminator (LF, CR, LS or PS).
pub fn is_line_terminator(unit: u16) -> bool {
    matches!(unit, 0x000A | 0x000D | 0x2028 | 0x2029)
}
