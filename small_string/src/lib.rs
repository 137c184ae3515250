// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Stack-allocated strings of up to seven UTF-8 bytes.
//!
//! The engine keeps short strings out of the heap entirely: a `SmallString`
//! packs the bytes into the value itself, leaving the heap string arena for
//! strings that genuinely need it. Seven bytes is the largest payload that
//! still fits beside a discriminant in a register-sized enum.

/// An inline string of at most 7 bytes of UTF-8 data.
///
/// Unused trailing bytes are zero. A string whose last byte is a NUL cannot
/// be represented, as it would be indistinguishable from its own padding.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SmallString {
    bytes: [u8; 7],
}

impl core::fmt::Debug for SmallString {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl SmallString {
    pub const MAX_LEN: usize = 7;

    pub const EMPTY: SmallString = SmallString { bytes: [0; 7] };

    /// Byte length of the string.
    pub fn len(&self) -> usize {
        // Trailing zero bytes are padding; the length is one past the last
        // non-zero byte.
        let mut len = 7;
        while len > 0 && self.bytes[len - 1] == 0 {
            len -= 1;
        }
        len
    }

    pub fn is_empty(&self) -> bool {
        self.bytes == [0; 7]
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: The constructors only accept valid UTF-8 and padding never
        // splits a code point.
        unsafe { core::str::from_utf8_unchecked(self.as_bytes()) }
    }

    /// Raw backing bytes, padding included.
    #[inline]
    pub fn data(&self) -> &[u8; 7] {
        &self.bytes
    }

    /// Build a `SmallString` from a string the caller has already checked to
    /// be short enough and not NUL-terminated.
    pub const fn from_str_unchecked(string: &str) -> Self {
        let src = string.as_bytes();
        debug_assert!(src.len() <= Self::MAX_LEN);
        debug_assert!(src.is_empty() || src[src.len() - 1] != 0);
        let mut bytes = [0u8; 7];
        let mut i = 0;
        while i < src.len() {
            bytes[i] = src[i];
            i += 1;
        }
        Self { bytes }
    }

    /// Encode a single code point. Any `char` fits: UTF-8 needs at most four
    /// bytes per scalar value.
    pub fn from_char(ch: char) -> Self {
        let mut buffer = [0u8; 4];
        Self::from_str_unchecked(ch.encode_utf8(&mut buffer))
    }
}

impl TryFrom<&str> for SmallString {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let bytes = value.as_bytes();
        if bytes.len() <= Self::MAX_LEN && (bytes.is_empty() || bytes[bytes.len() - 1] != 0) {
            Ok(Self::from_str_unchecked(value))
        } else {
            Err(())
        }
    }
}
