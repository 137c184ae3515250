// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub(crate) mod string_constructor;
pub mod string_iterator_objects;
pub(crate) mod string_prototype;

use self::string_constructor::StringConstructor;
use self::string_prototype::StringPrototype;
use crate::ecmascript::abstract_operations::operations_on_objects::define_property_or_throw;
use crate::ecmascript::builtins::primitive_objects::{PrimitiveObject, PrimitiveObjectHeapData};
use crate::ecmascript::builtins::BuiltinFunction;
use crate::ecmascript::execution::{Agent, RealmIdentifier};
use crate::ecmascript::types::{
    IntoValue, Object, PropertyDescriptor, String, BUILTIN_STRING_MEMORY,
};
use crate::heap::CreateHeapData;

/// Create the `String` constructor and `String.prototype` pair for a
/// realm, record them in its intrinsics, and return them.
pub fn create_string_constructor(
    agent: &mut Agent,
    realm: RealmIdentifier,
) -> (BuiltinFunction, PrimitiveObject) {
    let function_prototype = agent[realm].intrinsics.function_prototype();
    // %String.prototype% is itself a String object wrapping the empty
    // String; it starts as a bare wrapper and receives its method table
    // below.
    let prototype: PrimitiveObject = agent
        .heap
        .create(PrimitiveObjectHeapData::new_string(String::EMPTY_STRING));
    let constructor = StringConstructor::create_intrinsic(agent, function_prototype, prototype);
    StringPrototype::create_intrinsic(agent, realm, constructor, prototype);
    let realm_record = &mut agent[realm];
    realm_record.intrinsics.string = Some(constructor);
    realm_record.intrinsics.string_prototype = Some(prototype);
    (constructor, prototype)
}

/// Bind the identifier `String` on the realm's global object.
pub fn install_on_global(agent: &mut Agent, realm: RealmIdentifier, constructor: BuiltinFunction) {
    let global = agent[realm].global_object;
    define_property_or_throw(
        agent,
        Object::Object(global),
        BUILTIN_STRING_MEMORY.String.to_property_key(),
        PropertyDescriptor {
            value: Some(constructor.into_value()),
            writable: Some(true),
            get: None,
            set: None,
            enumerable: Some(false),
            configurable: Some(true),
        },
    )
    .expect("the global object rejected the String binding");
}
