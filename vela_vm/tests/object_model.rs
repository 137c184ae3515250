// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The shape-backed property store and the object operations the String
//! builtins stand on.

mod common;

use common::{agent_with_realm, as_number, as_string, string_constructor, string_value};
use vela_vm::ecmascript::abstract_operations::operations_on_objects::{
    create_data_property_or_throw, define_property_or_throw, delete_property_or_throw, get,
    get_v, has_property, integrity, set, set_integrity_level, test_integrity_level,
};
use vela_vm::ecmascript::builtins::ordinary::ordinary_object_create;
use vela_vm::ecmascript::types::{IntoObject, IntoValue, Object, PropertyDescriptor, String};
use vela_vm::{
    create_builtin_function, Agent, ArgumentsList, Behaviour, ExceptionType, JsResult,
    PropertyKey, Value,
};

fn fresh_object(agent: &mut Agent) -> Object {
    let realm = agent.current_realm_id();
    let prototype = agent[realm].intrinsics().object_prototype();
    ordinary_object_create(agent, Some(prototype.into())).into()
}

#[test]
fn data_properties_round_trip() {
    let mut agent = agent_with_realm();
    let object = fresh_object(&mut agent);
    let key = PropertyKey::from_str(&mut agent, "answer");
    create_data_property_or_throw(&mut agent, object, key, Value::Number(42.0)).unwrap();

    assert!(has_property(&agent, object, key));
    let value = get(&mut agent, object, key).unwrap();
    assert_eq!(as_number(value), 42.0);

    // Overwrite through [[Set]].
    set(&mut agent, object, key, Value::Number(43.0), true).unwrap();
    let value = get(&mut agent, object, key).unwrap();
    assert_eq!(as_number(value), 43.0);

    // Missing keys read as undefined.
    let missing = PropertyKey::from_str(&mut agent, "missing");
    assert!(get(&mut agent, object, missing).unwrap().is_undefined());
    assert!(!has_property(&agent, object, missing));
}

#[test]
fn indexed_properties_use_the_sparse_store() {
    let mut agent = agent_with_realm();
    let object = fresh_object(&mut agent);
    // Far-apart indexes must not allocate a dense backing.
    for index in [0u32, 7, 100_000] {
        let value = Value::Number(index as f64);
        create_data_property_or_throw(&mut agent, object, PropertyKey::Integer(index), value)
            .unwrap();
    }
    for index in [0u32, 7, 100_000] {
        let value = get(&mut agent, object, PropertyKey::Integer(index)).unwrap();
        assert_eq!(as_number(value), index as f64);
    }
    // Canonical numeric strings route to the same store.
    let key = PropertyKey::from_str(&mut agent, "7");
    let value = get(&mut agent, object, key).unwrap();
    assert_eq!(as_number(value), 7.0);
}

#[test]
fn prototype_chain_is_walked() {
    let mut agent = agent_with_realm();
    let parent = fresh_object(&mut agent);
    let key = PropertyKey::from_str(&mut agent, "inherited");
    create_data_property_or_throw(&mut agent, parent, key, Value::Number(1.0)).unwrap();

    let parent_ordinary = match parent {
        Object::Object(o) => o,
        _ => unreachable!(),
    };
    let child: Object = ordinary_object_create(&mut agent, Some(parent_ordinary.into())).into();
    let value = get(&mut agent, child, key).unwrap();
    assert_eq!(as_number(value), 1.0);
    assert!(has_property(&agent, child, key));

    // Assignment through the chain creates an own property on the child.
    set(&mut agent, child, key, Value::Number(2.0), true).unwrap();
    let child_value = get(&mut agent, child, key).unwrap();
    assert_eq!(as_number(child_value), 2.0);
    let parent_value = get(&mut agent, parent, key).unwrap();
    assert_eq!(as_number(parent_value), 1.0);
}

#[test]
fn non_writable_properties_reject_writes() {
    let mut agent = agent_with_realm();
    let object = fresh_object(&mut agent);
    let key = PropertyKey::from_str(&mut agent, "frozen");
    define_property_or_throw(
        &mut agent,
        object,
        key,
        PropertyDescriptor {
            value: Some(Value::Number(1.0)),
            writable: Some(false),
            enumerable: Some(true),
            configurable: Some(true),
            ..Default::default()
        },
    )
    .unwrap();

    let error = set(&mut agent, object, key, Value::Number(2.0), true).unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
    let value = get(&mut agent, object, key).unwrap();
    assert_eq!(as_number(value), 1.0);
}

#[test]
fn non_configurable_properties_reject_redefinition_and_deletion() {
    let mut agent = agent_with_realm();
    let object = fresh_object(&mut agent);
    let key = PropertyKey::from_str(&mut agent, "locked");
    define_property_or_throw(
        &mut agent,
        object,
        key,
        PropertyDescriptor {
            value: Some(Value::Number(1.0)),
            writable: Some(false),
            enumerable: Some(false),
            configurable: Some(false),
            ..Default::default()
        },
    )
    .unwrap();

    // Redefining as configurable must fail.
    let error = define_property_or_throw(
        &mut agent,
        object,
        key,
        PropertyDescriptor {
            configurable: Some(true),
            ..Default::default()
        },
    )
    .unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));

    // So must deletion.
    let error = delete_property_or_throw(&mut agent, object, key).unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));

    // A same-value redefinition is a permitted no-op.
    define_property_or_throw(
        &mut agent,
        object,
        key,
        PropertyDescriptor {
            value: Some(Value::Number(1.0)),
            ..Default::default()
        },
    )
    .unwrap();
}

#[test]
fn deletion_removes_configurable_properties() {
    let mut agent = agent_with_realm();
    let object = fresh_object(&mut agent);
    let first = PropertyKey::from_str(&mut agent, "first");
    let second = PropertyKey::from_str(&mut agent, "second");
    create_data_property_or_throw(&mut agent, object, first, Value::Number(1.0)).unwrap();
    create_data_property_or_throw(&mut agent, object, second, Value::Number(2.0)).unwrap();

    delete_property_or_throw(&mut agent, object, first).unwrap();
    assert!(!has_property(&agent, object, first));
    // The surviving property keeps its slot value.
    let value = get(&mut agent, object, second).unwrap();
    assert_eq!(as_number(value), 2.0);
}

#[test]
fn accessor_properties_invoke_getters_and_setters() {
    fn getter(agent: &mut Agent, _this: Value, _: ArgumentsList) -> JsResult<Value> {
        Ok(Value::from_str(agent, "from getter"))
    }
    fn setter(agent: &mut Agent, this: Value, args: ArgumentsList) -> JsResult<Value> {
        let this = Object::try_from(this).unwrap();
        let key = PropertyKey::from_str(agent, "stored");
        create_data_property_or_throw(agent, this, key, args.get(0))?;
        Ok(Value::Undefined)
    }

    let mut agent = agent_with_realm();
    let object = fresh_object(&mut agent);
    let name = String::from_str(&mut agent, "accessor");
    let get_fn = create_builtin_function(&mut agent, Behaviour::Regular(getter), 0, name);
    let set_fn = create_builtin_function(&mut agent, Behaviour::Regular(setter), 1, name);
    let key = PropertyKey::from_str(&mut agent, "accessor");
    define_property_or_throw(
        &mut agent,
        object,
        key,
        PropertyDescriptor {
            get: Some(get_fn),
            set: Some(set_fn),
            enumerable: Some(false),
            configurable: Some(true),
            ..Default::default()
        },
    )
    .unwrap();

    let value = get(&mut agent, object, key).unwrap();
    assert_eq!(as_string(&agent, value), "from getter");

    let written = string_value(&mut agent, "through setter");
    set(&mut agent, object, key, written, true).unwrap();
    let stored_key = PropertyKey::from_str(&mut agent, "stored");
    let stored = get(&mut agent, object, stored_key).unwrap();
    assert_eq!(as_string(&agent, stored), "through setter");
}

#[test]
fn integrity_levels() {
    let mut agent = agent_with_realm();
    let object = fresh_object(&mut agent);
    let key = PropertyKey::from_str(&mut agent, "x");
    create_data_property_or_throw(&mut agent, object, key, Value::Number(1.0)).unwrap();

    assert!(!test_integrity_level::<integrity::Sealed>(&mut agent, object).unwrap());
    assert!(set_integrity_level::<integrity::Sealed>(&mut agent, object).unwrap());
    assert!(test_integrity_level::<integrity::Sealed>(&mut agent, object).unwrap());
    // Sealed but not frozen: the data property is still writable.
    assert!(!test_integrity_level::<integrity::Frozen>(&mut agent, object).unwrap());
    set(&mut agent, object, key, Value::Number(5.0), true).unwrap();

    assert!(set_integrity_level::<integrity::Frozen>(&mut agent, object).unwrap());
    assert!(test_integrity_level::<integrity::Frozen>(&mut agent, object).unwrap());
    let error = set(&mut agent, object, key, Value::Number(9.0), true).unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));

    // New properties cannot be added once extensions are prevented.
    let new_key = PropertyKey::from_str(&mut agent, "y");
    let error =
        create_data_property_or_throw(&mut agent, object, new_key, Value::Number(1.0)).unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
}

#[test]
fn prototype_method_table_attributes() {
    let mut agent = agent_with_realm();
    let realm = agent.current_realm_id();
    let prototype: Object = agent[realm].intrinsics().string_prototype().into();

    // Prototype methods are writable and configurable but not enumerable.
    for name in ["charAt", "split", "trimStart", "fontcolor"] {
        let key = PropertyKey::from_str(&mut agent, name);
        let descriptor = prototype
            .internal_get_own_property(&agent, key)
            .unwrap_or_else(|| panic!("{name} is missing from the prototype"));
        assert_eq!(descriptor.writable, Some(true), "{name} writable");
        assert_eq!(descriptor.enumerable, Some(false), "{name} enumerable");
        assert_eq!(descriptor.configurable, Some(true), "{name} configurable");
    }

    // trimLeft and trimRight alias the very same function objects.
    let trim_start_key = PropertyKey::from_str(&mut agent, "trimStart");
    let trim_left_key = PropertyKey::from_str(&mut agent, "trimLeft");
    let trim_start = get(&mut agent, prototype, trim_start_key).unwrap();
    let trim_left = get(&mut agent, prototype, trim_left_key).unwrap();
    assert_eq!(trim_start, trim_left);
    let trim_end_key = PropertyKey::from_str(&mut agent, "trimEnd");
    let trim_right_key = PropertyKey::from_str(&mut agent, "trimRight");
    let trim_end = get(&mut agent, prototype, trim_end_key).unwrap();
    let trim_right = get(&mut agent, prototype, trim_right_key).unwrap();
    assert_eq!(trim_end, trim_right);

    // The constructor's `prototype` slot is locked down.
    let constructor: Object = string_constructor(&mut agent).into_object();
    let prototype_key = PropertyKey::from_str(&mut agent, "prototype");
    let descriptor = constructor
        .internal_get_own_property(&agent, prototype_key)
        .unwrap();
    assert_eq!(descriptor.writable, Some(false));
    assert_eq!(descriptor.configurable, Some(false));

    // Static methods are writable and configurable.
    for name in ["raw", "fromCharCode", "fromCodePoint"] {
        let key = PropertyKey::from_str(&mut agent, name);
        let descriptor = constructor
            .internal_get_own_property(&agent, key)
            .unwrap_or_else(|| panic!("{name} is missing from the constructor"));
        assert_eq!(descriptor.writable, Some(true), "{name} writable");
        assert_eq!(descriptor.configurable, Some(true), "{name} configurable");
    }
}

#[test]
fn shadowing_a_prototype_method() {
    let mut agent = agent_with_realm();
    // A boxed string can shadow a prototype method through its backing
    // object; lookups find the shadow first.
    let constructor = string_constructor(&mut agent);
    let argument = string_value(&mut agent, "abc");
    let boxed = vela_vm::ecmascript::abstract_operations::operations_on_objects::construct(
        &mut agent,
        constructor,
        Some(&[argument]),
        None,
    )
    .unwrap();
    let boxed_object = Object::try_from(boxed).unwrap();

    fn shadow(agent: &mut Agent, _this: Value, _: ArgumentsList) -> JsResult<Value> {
        Ok(Value::from_str(agent, "shadowed"))
    }
    let name = String::from_str(&mut agent, "trim");
    let function = create_builtin_function(&mut agent, Behaviour::Regular(shadow), 0, name);
    let key = PropertyKey::from_str(&mut agent, "trim");
    create_data_property_or_throw(&mut agent, boxed_object, key, function.into_value()).unwrap();

    let method = get_v(&mut agent, boxed, key).unwrap();
    let result = vela_vm::ecmascript::abstract_operations::operations_on_objects::call(
        &mut agent,
        method,
        boxed,
        None,
    )
    .unwrap();
    assert_eq!(as_string(&agent, result), "shadowed");
}
