// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The slice of %Object.prototype% the coercion machinery depends on:
//! `toString` and `valueOf`, so that OrdinaryToPrimitive terminates on
//! plain objects.

use crate::ecmascript::abstract_operations::type_conversion::to_object;
use crate::ecmascript::builders::ordinary_object_builder::OrdinaryObjectBuilder;
use crate::ecmascript::builtins::{ArgumentsList, Behaviour, Builtin};
use crate::ecmascript::execution::{Agent, JsResult};
use crate::ecmascript::types::{
    IntoValue, OrdinaryObject, String, Value, BUILTIN_STRING_MEMORY,
};

pub(crate) struct ObjectPrototype;

struct ObjectPrototypeToString;
impl Builtin for ObjectPrototypeToString {
    const NAME: String = BUILTIN_STRING_MEMORY.toString;
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(ObjectPrototype::to_string);
}
struct ObjectPrototypeValueOf;
impl Builtin for ObjectPrototypeValueOf {
    const NAME: String = BUILTIN_STRING_MEMORY.valueOf;
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(ObjectPrototype::value_of);
}

impl ObjectPrototype {
    /// ### [20.1.3.6 Object.prototype.toString ( )](https://tc39.es/ecma262/#sec-object.prototype.tostring)
    fn to_string(_agent: &mut Agent, _this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        Ok(BUILTIN_STRING_MEMORY._object_Object_.into_value())
    }

    /// ### [20.1.3.7 Object.prototype.valueOf ( )](https://tc39.es/ecma262/#sec-object.prototype.valueof)
    fn value_of(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        to_object(agent, this_value).map(|object| object.into_value())
    }
}

pub(crate) fn create_object_prototype(agent: &mut Agent) -> OrdinaryObject {
    OrdinaryObjectBuilder::new(agent)
        .with_property_capacity(2)
        .with_builtin_function_property::<ObjectPrototypeToString>()
        .with_builtin_function_property::<ObjectPrototypeValueOf>()
        .build()
}
