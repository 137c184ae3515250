// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [7.3 Operations on Objects](https://tc39.es/ecma262/#sec-operations-on-objects)

use super::testing_and_comparison::is_callable;
use super::type_conversion::{to_length, to_object};
use crate::ecmascript::builtins::array::Array;
use crate::ecmascript::builtins::{ArgumentsList, Behaviour};
use crate::ecmascript::execution::{Agent, ExceptionType, JsResult};
use crate::ecmascript::types::{
    Function, IntoObject, IntoValue, Object, PropertyDescriptor, PropertyKey, Value,
    BUILTIN_STRING_MEMORY,
};

/// ### [7.3.2 Get ( O, P )](https://tc39.es/ecma262/#sec-get-o-p)
pub fn get(agent: &mut Agent, object: Object, key: PropertyKey) -> JsResult<Value> {
    // 1. Return ? O.[[Get]](P, O).
    object.internal_get(agent, key, object.into_value())
}

/// ### [7.3.3 GetV ( V, P )](https://tc39.es/ecma262/#sec-getv)
///
/// Property lookup on an arbitrary value: non-objects are boxed into the
/// appropriate wrapper first.
pub fn get_v(agent: &mut Agent, value: Value, key: PropertyKey) -> JsResult<Value> {
    // 1. Let O be ? ToObject(V).
    let object = to_object(agent, value)?;
    // 2. Return ? O.[[Get]](P, V).
    object.internal_get(agent, key, value)
}

/// ### [7.3.4 Set ( O, P, V, Throw )](https://tc39.es/ecma262/#sec-set-o-p-v-throw)
pub fn set(
    agent: &mut Agent,
    object: Object,
    key: PropertyKey,
    value: Value,
    throw: bool,
) -> JsResult<()> {
    // 1. Let success be ? O.[[Set]](P, V, O).
    let success = object.internal_set(agent, key, value, object.into_value())?;
    // 2. If success is false and Throw is true, throw a TypeError exception.
    if !success && throw {
        return Err(agent
            .throw_exception_with_static_message(ExceptionType::TypeError, "Could not set property"));
    }
    Ok(())
}

/// ### [7.3.5 CreateDataProperty ( O, P, V )](https://tc39.es/ecma262/#sec-createdataproperty)
pub fn create_data_property(
    agent: &mut Agent,
    object: Object,
    key: PropertyKey,
    value: Value,
) -> JsResult<bool> {
    // 1. Let newDesc be the PropertyDescriptor { [[Value]]: V,
    //    [[Writable]]: true, [[Enumerable]]: true, [[Configurable]]: true }.
    let new_descriptor = PropertyDescriptor {
        value: Some(value),
        writable: Some(true),
        get: None,
        set: None,
        enumerable: Some(true),
        configurable: Some(true),
    };
    // 2. Return ? O.[[DefineOwnProperty]](P, newDesc).
    object.internal_define_own_property(agent, key, new_descriptor)
}

/// ### [7.3.7 CreateDataPropertyOrThrow ( O, P, V )](https://tc39.es/ecma262/#sec-createdatapropertyorthrow)
pub fn create_data_property_or_throw(
    agent: &mut Agent,
    object: Object,
    key: PropertyKey,
    value: Value,
) -> JsResult<()> {
    let success = create_data_property(agent, object, key, value)?;
    if !success {
        return Err(agent.throw_exception_with_static_message(
            ExceptionType::TypeError,
            "Could not create property",
        ));
    }
    Ok(())
}

/// ### [7.3.8 DefinePropertyOrThrow ( O, P, desc )](https://tc39.es/ecma262/#sec-definepropertyorthrow)
pub fn define_property_or_throw(
    agent: &mut Agent,
    object: Object,
    key: PropertyKey,
    descriptor: PropertyDescriptor,
) -> JsResult<()> {
    // 1. Let success be ? O.[[DefineOwnProperty]](P, desc).
    let success = object.internal_define_own_property(agent, key, descriptor)?;
    // 2. If success is false, throw a TypeError exception.
    if !success {
        return Err(agent.throw_exception_with_static_message(
            ExceptionType::TypeError,
            "Could not define property",
        ));
    }
    Ok(())
}

/// ### [7.3.9 DeletePropertyOrThrow ( O, P )](https://tc39.es/ecma262/#sec-deletepropertyorthrow)
pub fn delete_property_or_throw(
    agent: &mut Agent,
    object: Object,
    key: PropertyKey,
) -> JsResult<()> {
    let success = object.internal_delete(agent, key);
    if !success {
        return Err(agent.throw_exception_with_static_message(
            ExceptionType::TypeError,
            "Could not delete property",
        ));
    }
    Ok(())
}

/// ### [7.3.11 GetMethod ( V, P )](https://tc39.es/ecma262/#sec-getmethod)
pub fn get_method(
    agent: &mut Agent,
    value: Value,
    key: PropertyKey,
) -> JsResult<Option<Function>> {
    // 1. Let func be ? GetV(V, P).
    let func = get_v(agent, value, key)?;
    // 2. If func is either undefined or null, return undefined.
    if func.is_nullish() {
        return Ok(None);
    }
    // 3. If IsCallable(func) is false, throw a TypeError exception.
    if !is_callable(func) {
        return Err(agent
            .throw_exception_with_static_message(ExceptionType::TypeError, "Not a callable object"));
    }
    // 4. Return func.
    Ok(Some(Function::try_from(func).unwrap()))
}

/// ### [7.3.12 HasProperty ( O, P )](https://tc39.es/ecma262/#sec-hasproperty)
pub fn has_property(agent: &Agent, object: Object, key: PropertyKey) -> bool {
    object.internal_has_property(agent, key)
}

/// ### [7.3.13 Call ( F, V \[ , argumentsList \] )](https://tc39.es/ecma262/#sec-call)
pub fn call(
    agent: &mut Agent,
    function: Value,
    this_argument: Value,
    arguments: Option<&[Value]>,
) -> JsResult<Value> {
    // 2. If IsCallable(F) is false, throw a TypeError exception.
    if !is_callable(function) {
        return Err(agent
            .throw_exception_with_static_message(ExceptionType::TypeError, "Not a callable object"));
    }
    // 3. Return ? F.[[Call]](V, argumentsList).
    call_function(
        agent,
        Function::try_from(function).unwrap(),
        this_argument,
        arguments,
    )
}

/// The `[[Call]]` internal method of builtin function objects.
pub fn call_function(
    agent: &mut Agent,
    function: Function,
    this_argument: Value,
    arguments: Option<&[Value]>,
) -> JsResult<Value> {
    let arguments = ArgumentsList(arguments.unwrap_or(&[]));
    match agent[function].behaviour {
        Behaviour::Regular(behaviour) => behaviour(agent, this_argument, arguments),
        Behaviour::Constructor(behaviour) => behaviour(agent, this_argument, arguments, None),
    }
}

/// ### [7.3.15 Construct ( F \[ , argumentsList \[ , newTarget \] \] )](https://tc39.es/ecma262/#sec-construct)
pub fn construct(
    agent: &mut Agent,
    function: Function,
    arguments: Option<&[Value]>,
    new_target: Option<Object>,
) -> JsResult<Value> {
    // 1. If newTarget is not present, set newTarget to F.
    let new_target = new_target.unwrap_or_else(|| function.into_object());
    let arguments = ArgumentsList(arguments.unwrap_or(&[]));
    match agent[function].behaviour {
        Behaviour::Constructor(behaviour) => {
            behaviour(agent, Value::Undefined, arguments, Some(new_target))
        }
        Behaviour::Regular(_) => Err(agent
            .throw_exception_with_static_message(ExceptionType::TypeError, "Not a constructor")),
    }
}

/// ### [7.3.21 Invoke ( V, P \[ , argumentsList \] )](https://tc39.es/ecma262/#sec-invoke)
pub fn invoke(
    agent: &mut Agent,
    value: Value,
    key: PropertyKey,
    arguments: Option<&[Value]>,
) -> JsResult<Value> {
    // 1. Let func be ? GetV(V, P).
    let func = get_v(agent, value, key)?;
    // 2. Return ? Call(func, V, argumentsList).
    call(agent, func, value, arguments)
}

/// Marker types for [`set_integrity_level`] and [`test_integrity_level`].
pub mod integrity {
    #[derive(Clone, Copy)]
    pub struct Sealed;
    #[derive(Clone, Copy)]
    pub struct Frozen;
}

pub trait Level {
    const FROZEN: bool;
}

impl Level for integrity::Sealed {
    const FROZEN: bool = false;
}

impl Level for integrity::Frozen {
    const FROZEN: bool = true;
}

/// ### [7.3.16 SetIntegrityLevel ( O, level )](https://tc39.es/ecma262/#sec-setintegritylevel)
pub fn set_integrity_level<T: Level>(agent: &mut Agent, object: Object) -> JsResult<bool> {
    // 1. Let status be ? O.[[PreventExtensions]]().
    if !object.internal_prevent_extensions(agent) {
        return Ok(false);
    }
    // 3. Let keys be ? O.[[OwnPropertyKeys]]().
    let keys = object.internal_own_property_keys(agent);
    for key in keys {
        let descriptor = if T::FROZEN {
            // 5.b. Frozen: data properties additionally become non-writable.
            match object.internal_get_own_property(agent, key) {
                Some(current) if current.is_accessor_descriptor() => PropertyDescriptor {
                    configurable: Some(false),
                    ..Default::default()
                },
                Some(_) => PropertyDescriptor {
                    configurable: Some(false),
                    writable: Some(false),
                    ..Default::default()
                },
                None => continue,
            }
        } else {
            PropertyDescriptor {
                configurable: Some(false),
                ..Default::default()
            }
        };
        define_property_or_throw(agent, object, key, descriptor)?;
    }
    Ok(true)
}

/// ### [7.3.17 TestIntegrityLevel ( O, level )](https://tc39.es/ecma262/#sec-testintegritylevel)
pub fn test_integrity_level<T: Level>(agent: &mut Agent, object: Object) -> JsResult<bool> {
    // 2. If extensible, the object is neither sealed nor frozen.
    if object.internal_is_extensible(agent) {
        return Ok(false);
    }
    for key in object.internal_own_property_keys(agent) {
        if let Some(descriptor) = object.internal_get_own_property(agent, key) {
            if descriptor.configurable == Some(true) {
                return Ok(false);
            }
            if T::FROZEN && descriptor.is_data_descriptor() && descriptor.writable == Some(true) {
                return Ok(false);
            }
        }
    }
    Ok(true)
}

/// ### [7.3.18 CreateArrayFromList ( elements )](https://tc39.es/ecma262/#sec-createarrayfromlist)
pub fn create_array_from_list(agent: &mut Agent, elements: &[Value]) -> Array {
    Array::from_slice(agent, elements)
}

/// ### [7.3.19 LengthOfArrayLike ( obj )](https://tc39.es/ecma262/#sec-lengthofarraylike)
pub fn length_of_array_like(agent: &mut Agent, object: Object) -> JsResult<i64> {
    // 1. Return ℝ(? ToLength(? Get(obj, "length"))).
    let length = get(agent, object, BUILTIN_STRING_MEMORY.length.to_property_key())?;
    to_length(agent, length)
}
