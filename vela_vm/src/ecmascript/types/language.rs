// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub(crate) mod object;
pub(crate) mod string;
pub(crate) mod symbol;
pub(crate) mod value;

pub use object::{
    parse_string_to_integer_property_key, IndexedEntry, IntoObject, Object, ObjectHeapData,
    OrdinaryObject, PropertyKey, PropertyValue,
};
pub(crate) use object::is_no_op_redefinition;
pub use string::{HeapString, String, StringHeapData, BUILTIN_STRINGS_LIST, BUILTIN_STRING_MEMORY};
pub(crate) use string::byte_index_of_code_point;
pub use symbol::{Symbol, SymbolHeapData};
pub use value::{IntoValue, Value};
