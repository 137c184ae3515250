// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Well-known symbols are seeded into the symbol arena at heap creation in
//! the order of this enum, so the discriminants double as stable indexes.

use super::indexes::SymbolIndex;
use crate::ecmascript::types::{PropertyKey, Symbol};

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WellKnownSymbolIndexes {
    Iterator,
    Match,
    MatchAll,
    Replace,
    Search,
    Split,
    ToPrimitive,
}

impl WellKnownSymbolIndexes {
    pub const fn to_symbol(self) -> Symbol {
        Symbol(SymbolIndex::from_u32_index(self as u32))
    }

    pub const fn to_property_key(self) -> PropertyKey {
        PropertyKey::Symbol(self.to_symbol())
    }
}

impl From<WellKnownSymbolIndexes> for SymbolIndex {
    fn from(value: WellKnownSymbolIndexes) -> Self {
        SymbolIndex::from_u32_index(value as u32)
    }
}

pub const LAST_WELL_KNOWN_SYMBOL_INDEX: u32 = WellKnownSymbolIndexes::ToPrimitive as u32;

/// Descriptions of the well-known symbols, in enum order.
pub(crate) const WELL_KNOWN_SYMBOL_DESCRIPTIONS: [&str; 7] = [
    "Symbol.iterator",
    "Symbol.match",
    "Symbol.matchAll",
    "Symbol.replace",
    "Symbol.search",
    "Symbol.split",
    "Symbol.toPrimitive",
];
