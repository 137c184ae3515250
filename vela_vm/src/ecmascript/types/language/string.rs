// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod data;

use super::{PropertyKey, Value};
use crate::ecmascript::execution::Agent;
use crate::heap::indexes::StringIndex;
use small_string::SmallString;

pub use data::StringHeapData;

/// Handle to a string in the heap string arena.
///
/// Heap strings are content-deduplicated at allocation, so two handles are
/// equal exactly when their text is equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct HeapString(pub(crate) StringIndex);

impl HeapString {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    pub fn as_str<'a>(&'a self, agent: &'a Agent) -> &'a str {
        agent[*self].as_str()
    }
}

/// ### [6.1.4 The String Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-string-type)
///
/// An immutable, finite sequence of code points. Strings of up to seven
/// UTF-8 bytes live on the stack; longer ones in the heap string arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum String {
    String(HeapString),
    SmallString(SmallString),
}

impl String {
    pub const EMPTY_STRING: String = String::SmallString(SmallString::EMPTY);

    pub fn from_str(agent: &mut Agent, message: &str) -> String {
        if let Ok(small) = SmallString::try_from(message) {
            String::SmallString(small)
        } else {
            String::String(agent.heap.alloc_str(message))
        }
    }

    pub fn from_string(agent: &mut Agent, message: std::string::String) -> String {
        if let Ok(small) = SmallString::try_from(message.as_str()) {
            String::SmallString(small)
        } else {
            String::String(agent.heap.alloc_string(message))
        }
    }

    pub fn from_static_str(agent: &mut Agent, message: &'static str) -> String {
        Self::from_static_str_in(&mut agent.heap.strings, message)
    }

    /// Allocation path that does not require a full `Agent`, used while the
    /// heap itself is still being seeded.
    pub(crate) fn from_static_str_in(
        strings: &mut Vec<Option<StringHeapData>>,
        message: &'static str,
    ) -> String {
        if let Ok(small) = SmallString::try_from(message) {
            return String::SmallString(small);
        }
        let existing = strings
            .iter()
            .position(|s| s.as_ref().is_some_and(|s| s.as_str() == message));
        let index = match existing {
            Some(index) => StringIndex::from_index(index),
            None => {
                strings.push(Some(StringHeapData::from_static_str(message)));
                StringIndex::from_index(strings.len() - 1)
            }
        };
        String::String(HeapString(index))
    }

    /// Build a string constant short enough to need no allocation.
    pub const fn from_small_string(message: &'static str) -> String {
        assert!(message.len() <= SmallString::MAX_LEN);
        String::SmallString(SmallString::from_str_unchecked(message))
    }

    /// A one-code-point string. Any code point fits inline.
    pub fn from_code_point(ch: char) -> String {
        String::SmallString(SmallString::from_char(ch))
    }

    pub fn into_value(self) -> Value {
        self.into()
    }

    pub fn as_str<'a>(&'a self, agent: &'a Agent) -> &'a str {
        match self {
            String::String(s) => agent[*s].as_str(),
            String::SmallString(s) => s.as_str(),
        }
    }

    /// Byte length of the UTF-8 store.
    pub fn len(self, agent: &Agent) -> usize {
        match self {
            String::String(s) => agent[s].len(),
            String::SmallString(s) => s.len(),
        }
    }

    /// Length as observed by script: the number of code points.
    pub fn code_point_length(self, agent: &Agent) -> usize {
        match self {
            String::String(s) => agent[s].code_point_length(),
            String::SmallString(s) => s.as_str().chars().count(),
        }
    }

    pub fn is_empty_string(self, agent: &Agent) -> bool {
        self.len(agent) == 0
    }

    pub fn to_property_key(self) -> PropertyKey {
        match self {
            String::String(s) => PropertyKey::String(s),
            String::SmallString(s) => PropertyKey::SmallString(s),
        }
    }

    /// 6.1.4.1 StringIndexOf, in code-point space. Returns the code-point
    /// index of the first occurrence of `search_value` at or after
    /// `from_index`, or None.
    pub fn index_of(self, agent: &Agent, search_value: Self, from_index: usize) -> Option<usize> {
        let string = self.as_str(agent);
        let search = search_value.as_str(agent);
        let from_byte = byte_index_of_code_point(string, from_index)?;
        let found = string[from_byte..].find(search)?;
        Some(string[..from_byte + found].chars().count())
    }
}

/// Byte offset of the code point at `index`, or of the end of the string
/// when `index` equals the code-point length.
pub(crate) fn byte_index_of_code_point(string: &str, index: usize) -> Option<usize> {
    if index == 0 {
        return Some(0);
    }
    let mut seen = 0;
    for (byte_index, _) in string.char_indices() {
        if seen == index {
            return Some(byte_index);
        }
        seen += 1;
    }
    if seen == index {
        Some(string.len())
    } else {
        None
    }
}

impl From<SmallString> for String {
    fn from(value: SmallString) -> Self {
        String::SmallString(value)
    }
}

impl From<HeapString> for String {
    fn from(value: HeapString) -> Self {
        String::String(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        match value {
            String::String(s) => Value::String(s),
            String::SmallString(s) => Value::SmallString(s),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(String::String(s)),
            Value::SmallString(s) => Ok(String::SmallString(s)),
            _ => Err(()),
        }
    }
}

include!(concat!(env!("OUT_DIR"), "/builtin_strings.rs"));
