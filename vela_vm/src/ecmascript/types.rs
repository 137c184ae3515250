// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # [6 ECMAScript Data Types and Values](https://tc39.es/ecma262/#sec-ecmascript-data-types-and-values)

pub(crate) mod language;
pub(crate) mod spec;

pub use language::{
    parse_string_to_integer_property_key, HeapString, IndexedEntry, IntoObject, IntoValue, Object,
    ObjectHeapData, OrdinaryObject, PropertyKey, PropertyValue, String, StringHeapData, Symbol,
    SymbolHeapData, Value, BUILTIN_STRINGS_LIST, BUILTIN_STRING_MEMORY,
};
pub(crate) use language::{byte_index_of_code_point, is_no_op_redefinition};
pub use spec::PropertyDescriptor;

pub use crate::ecmascript::builtins::builtin_function::{BuiltinFunction, BuiltinFunctionHeapData};
pub use crate::ecmascript::builtins::error::{Error, ErrorHeapData};

/// The one callable kind in this engine core. A fuller engine would make
/// this an enum over the function object kinds.
pub type Function = BuiltinFunction;
