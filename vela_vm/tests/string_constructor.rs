// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod common;

use common::{
    agent_with_realm, as_number, as_string, call_method, call_static, string_constructor,
    string_value,
};
use vela_vm::ecmascript::abstract_operations::operations_on_objects::{
    call_function, construct, create_array_from_list, create_data_property_or_throw, get_v,
};
use vela_vm::ecmascript::builtins::ordinary::ordinary_object_create;
use vela_vm::ecmascript::types::{IntoValue, String, Symbol};
use vela_vm::{ExceptionType, PropertyKey, Value};

fn fresh_symbol(agent: &mut vela_vm::Agent, description: &str) -> Value {
    let description = String::from_str(agent, description);
    Symbol::create(agent, Some(description)).into_value()
}

#[test]
fn call_form_coerces_to_string() {
    let mut agent = agent_with_realm();
    let constructor = string_constructor(&mut agent);

    let result = call_function(&mut agent, constructor, Value::Undefined, None).unwrap();
    assert_eq!(as_string(&agent, result), "");

    let result =
        call_function(&mut agent, constructor, Value::Undefined, Some(&[Value::Number(12.5)]))
            .unwrap();
    assert_eq!(as_string(&agent, result), "12.5");

    let result =
        call_function(&mut agent, constructor, Value::Undefined, Some(&[Value::Boolean(true)]))
            .unwrap();
    assert_eq!(as_string(&agent, result), "true");

    let result =
        call_function(&mut agent, constructor, Value::Undefined, Some(&[Value::Null])).unwrap();
    assert_eq!(as_string(&agent, result), "null");
}

#[test]
fn call_form_accepts_symbols_but_coercion_does_not() {
    let mut agent = agent_with_realm();
    let constructor = string_constructor(&mut agent);
    let symbol = fresh_symbol(&mut agent, "x");

    // String(Symbol("x")) prints the descriptive string.
    let result =
        call_function(&mut agent, constructor, Value::Undefined, Some(&[symbol])).unwrap();
    assert_eq!(as_string(&agent, result), "Symbol(x)");

    // Plain ToString of the same symbol throws.
    let error =
        vela_vm::ecmascript::abstract_operations::type_conversion::to_string(&mut agent, symbol)
            .unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
}

#[test]
fn construct_form_boxes_the_string() {
    let mut agent = agent_with_realm();
    let constructor = string_constructor(&mut agent);
    let argument = string_value(&mut agent, "abc");
    let boxed = construct(&mut agent, constructor, Some(&[argument]), None).unwrap();
    assert!(matches!(boxed, Value::PrimitiveObject(_)));

    // toString and valueOf unwrap the [[StringData]] slot.
    let result = call_method(&mut agent, boxed, "toString", &[]).unwrap();
    assert_eq!(as_string(&agent, result), "abc");
    let result = call_method(&mut agent, boxed, "valueOf", &[]).unwrap();
    assert_eq!(as_string(&agent, result), "abc");

    // String exotic own properties: length and indexed code points.
    let length_key = PropertyKey::from_str(&mut agent, "length");
    let length = get_v(&mut agent, boxed, length_key).unwrap();
    assert_eq!(as_number(length), 3.0);
    let char_value = get_v(&mut agent, boxed, PropertyKey::Integer(1)).unwrap();
    assert_eq!(as_string(&agent, char_value), "b");

    // Prototype methods work on the boxed receiver.
    let result = call_method(&mut agent, boxed, "toUpperCase", &[]).unwrap();
    assert_eq!(as_string(&agent, result), "ABC");
}

#[test]
fn from_char_code() {
    let mut agent = agent_with_realm();
    let args = [72.0, 101.0, 108.0, 108.0, 111.0].map(Value::Number);
    let result = call_static(&mut agent, "fromCharCode", &args).unwrap();
    assert_eq!(as_string(&agent, result), "Hello");

    // Code units are truncated to 16 bits.
    let result = call_static(&mut agent, "fromCharCode", &[Value::Number(0x10061 as f64)])
        .unwrap();
    assert_eq!(as_string(&agent, result), "a");

    let result = call_static(&mut agent, "fromCharCode", &[]).unwrap();
    assert_eq!(as_string(&agent, result), "");
}

#[test]
fn from_code_point() {
    let mut agent = agent_with_realm();
    let result = call_static(&mut agent, "fromCodePoint", &[Value::Number(0x1F600 as f64)])
        .unwrap();
    assert_eq!(as_string(&agent, result), "😀");
    // Four UTF-8 bytes, one code point.
    let string = String::try_from(result).unwrap();
    assert_eq!(string.len(&agent), 4);
    assert_eq!(string.code_point_length(&agent), 1);

    let error = call_static(&mut agent, "fromCodePoint", &[Value::Number(1.1)]).unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::RangeError));

    let error = call_static(&mut agent, "fromCodePoint", &[Value::Number(-1.0)]).unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::RangeError));

    let error = call_static(&mut agent, "fromCodePoint", &[Value::Number(0x110000 as f64)])
        .unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::RangeError));
}

#[test]
fn raw_interleaves_segments_and_substitutions() {
    let mut agent = agent_with_realm();
    // { raw: ["a", "b", "c"] } with substitutions "1" and "2".
    let realm = agent.current_realm_id();
    let object_prototype = agent[realm].intrinsics().object_prototype();
    let template = ordinary_object_create(&mut agent, Some(object_prototype.into()));
    let segments = ["a", "b", "c"].map(|text| Value::from_str(&mut agent, text));
    let raw = create_array_from_list(&mut agent, &segments);
    let raw_key = PropertyKey::from_str(&mut agent, "raw");
    create_data_property_or_throw(&mut agent, template.into(), raw_key, raw.into_value()).unwrap();

    let one = string_value(&mut agent, "1");
    let two = string_value(&mut agent, "2");
    let result = call_static(&mut agent, "raw", &[template.into_value(), one, two]).unwrap();
    assert_eq!(as_string(&agent, result), "a1b2c");

    // Excess substitutions are dropped.
    let one = string_value(&mut agent, "1");
    let two = string_value(&mut agent, "2");
    let three = string_value(&mut agent, "3");
    let result =
        call_static(&mut agent, "raw", &[template.into_value(), one, two, three]).unwrap();
    assert_eq!(as_string(&agent, result), "a1b2c");

    // Missing substitutions simply join the segments.
    let result = call_static(&mut agent, "raw", &[template.into_value()]).unwrap();
    assert_eq!(as_string(&agent, result), "abc");
}

#[test]
fn raw_over_a_boxed_string_template() {
    let mut agent = agent_with_realm();
    // ToObject("xy") exposes length 2 and indexed segments.
    let realm = agent.current_realm_id();
    let object_prototype = agent[realm].intrinsics().object_prototype();
    let template = ordinary_object_create(&mut agent, Some(object_prototype.into()));
    let raw = string_value(&mut agent, "xy");
    let raw_key = PropertyKey::from_str(&mut agent, "raw");
    create_data_property_or_throw(&mut agent, template.into(), raw_key, raw).unwrap();

    let dash = string_value(&mut agent, "-");
    let result = call_static(&mut agent, "raw", &[template.into_value(), dash]).unwrap();
    assert_eq!(as_string(&agent, result), "x-y");
}

#[test]
fn raw_with_zero_segments_is_empty() {
    let mut agent = agent_with_realm();
    let realm = agent.current_realm_id();
    let object_prototype = agent[realm].intrinsics().object_prototype();
    let template = ordinary_object_create(&mut agent, Some(object_prototype.into()));
    let raw = create_array_from_list(&mut agent, &[]);
    let raw_key = PropertyKey::from_str(&mut agent, "raw");
    create_data_property_or_throw(&mut agent, template.into(), raw_key, raw.into_value()).unwrap();

    let result = call_static(&mut agent, "raw", &[template.into_value()]).unwrap();
    assert_eq!(as_string(&agent, result), "");
}

#[test]
fn raw_with_nullish_template_throws() {
    let mut agent = agent_with_realm();
    let error = call_static(&mut agent, "raw", &[Value::Undefined]).unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
}

#[test]
fn constructor_surface() {
    let mut agent = agent_with_realm();
    let constructor = string_constructor(&mut agent);

    // length is 1 and prototype points at %String.prototype%.
    let length_key = PropertyKey::from_str(&mut agent, "length");
    let length = get_v(&mut agent, constructor.into_value(), length_key).unwrap();
    assert_eq!(as_number(length), 1.0);

    let prototype_key = PropertyKey::from_str(&mut agent, "prototype");
    let prototype = get_v(&mut agent, constructor.into_value(), prototype_key).unwrap();
    let realm = agent.current_realm_id();
    let expected = agent[realm].intrinsics().string_prototype();
    assert_eq!(prototype, Value::PrimitiveObject(expected));

    let name_key = PropertyKey::from_str(&mut agent, "name");
    let name = get_v(&mut agent, constructor.into_value(), name_key).unwrap();
    assert_eq!(as_string(&agent, name), "String");
}
