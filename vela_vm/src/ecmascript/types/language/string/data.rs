// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::cell::OnceCell;

/// Heap data of a primitive string: an immutable UTF-8 buffer.
///
/// The buffer is never mutated after allocation; concatenation and slicing
/// always allocate fresh records. The script-visible length is measured in
/// code points and computed lazily, since most strings are only ever
/// compared or concatenated.
#[derive(Debug, Clone)]
pub struct StringHeapData {
    data: StringBuffer,
    code_points: OnceCell<usize>,
}

#[derive(Debug, Clone)]
enum StringBuffer {
    Owned(std::string::String),
    Static(&'static str),
}

impl StringHeapData {
    pub fn from_str(string: &str) -> Self {
        debug_assert!(string.len() > small_string::SmallString::MAX_LEN);
        Self {
            data: StringBuffer::Owned(string.to_owned()),
            code_points: OnceCell::new(),
        }
    }

    pub fn from_string(string: std::string::String) -> Self {
        debug_assert!(string.len() > small_string::SmallString::MAX_LEN);
        Self {
            data: StringBuffer::Owned(string),
            code_points: OnceCell::new(),
        }
    }

    pub fn from_static_str(string: &'static str) -> Self {
        debug_assert!(string.len() > small_string::SmallString::MAX_LEN);
        Self {
            data: StringBuffer::Static(string),
            code_points: OnceCell::new(),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        match &self.data {
            StringBuffer::Owned(s) => s,
            StringBuffer::Static(s) => s,
        }
    }

    /// Byte length of the buffer.
    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of code points in the buffer.
    pub fn code_point_length(&self) -> usize {
        *self
            .code_points
            .get_or_init(|| self.as_str().chars().count())
    }
}

impl PartialEq for StringHeapData {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for StringHeapData {}
