// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [7.4 Operations on Iterator Objects](https://tc39.es/ecma262/#sec-operations-on-iterator-objects)

use crate::ecmascript::builtins::ordinary::shape::PropertyAttributes;
use crate::ecmascript::builtins::ordinary::{ordinary_define_own_property, ordinary_object_create};
use crate::ecmascript::execution::Agent;
use crate::ecmascript::types::{OrdinaryObject, PropertyDescriptor, Value, BUILTIN_STRING_MEMORY};

/// ### [7.4.12 CreateIteratorResultObject ( value, done )](https://tc39.es/ecma262/#sec-createiterresultobject)
pub(crate) fn create_iter_result_object(
    agent: &mut Agent,
    value: Value,
    done: bool,
) -> OrdinaryObject {
    // 1. Let obj be OrdinaryObjectCreate(%Object.prototype%).
    let prototype = agent.intrinsics().object_prototype();
    let object = ordinary_object_create(agent, Some(prototype.into()));
    // 2. Perform ! CreateDataPropertyOrThrow(obj, "value", value).
    ordinary_define_own_property(
        agent,
        object,
        BUILTIN_STRING_MEMORY.value.to_property_key(),
        PropertyDescriptor::new_data(value, PropertyAttributes::DEFAULT),
    );
    // 3. Perform ! CreateDataPropertyOrThrow(obj, "done", done).
    ordinary_define_own_property(
        agent,
        object,
        BUILTIN_STRING_MEMORY.done.to_property_key(),
        PropertyDescriptor::new_data(Value::Boolean(done), PropertyAttributes::DEFAULT),
    );
    // 4. Return obj.
    object
}
