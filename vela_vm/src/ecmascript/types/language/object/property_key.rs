// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::execution::Agent;
use crate::ecmascript::types::{HeapString, String, Symbol};
use small_string::SmallString;

/// # [Property key](https://tc39.es/ecma262/#property-key)
///
/// A String or Symbol identifying a property. Strings that are canonical
/// array indexes are kept in integer form so that objects can route them
/// into their sparse indexed store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Integer(u32),
    SmallString(SmallString),
    String(HeapString),
    Symbol(Symbol),
}

impl PropertyKey {
    pub fn from_str(agent: &mut Agent, string: &str) -> PropertyKey {
        parse_string_to_integer_property_key(string)
            .unwrap_or_else(|| String::from_str(agent, string).to_property_key())
    }

    pub fn from_string(agent: &mut Agent, string: std::string::String) -> PropertyKey {
        parse_string_to_integer_property_key(&string)
            .unwrap_or_else(|| String::from_string(agent, string).to_property_key())
    }

    /// The key for a non-negative integer, falling back to its decimal
    /// string form outside the array-index range.
    pub fn from_integer(agent: &mut Agent, value: i64) -> PropertyKey {
        match u32::try_from(value) {
            Ok(index) => PropertyKey::Integer(index),
            Err(_) => PropertyKey::from_string(agent, value.to_string()),
        }
    }

    pub fn is_symbol(self) -> bool {
        matches!(self, PropertyKey::Symbol(_))
    }
}

impl From<u32> for PropertyKey {
    fn from(value: u32) -> Self {
        PropertyKey::Integer(value)
    }
}

impl From<String> for PropertyKey {
    fn from(value: String) -> Self {
        value.to_property_key()
    }
}

impl From<Symbol> for PropertyKey {
    fn from(value: Symbol) -> Self {
        PropertyKey::Symbol(value)
    }
}

/// Parse a string that is the canonical decimal form of an array index.
/// `"0"` parses; `"00"`, `"01"` and anything non-decimal do not.
pub fn parse_string_to_integer_property_key(string: &str) -> Option<PropertyKey> {
    if string.is_empty() || string.len() > 10 {
        return None;
    }
    if string == "0" {
        return Some(PropertyKey::Integer(0));
    }
    if string.starts_with('0') || !string.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    string.parse::<u32>().ok().map(PropertyKey::Integer)
}
