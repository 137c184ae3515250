// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod common;

use common::{agent_with_realm, string_value};
use vela_vm::ecmascript::abstract_operations::testing_and_comparison::require_object_coercible;
use vela_vm::ecmascript::abstract_operations::type_conversion::{
    to_int32, to_integer_or_infinity, to_length, to_number, to_object, to_string, to_uint32,
};
use vela_vm::ecmascript::types::Object;
use vela_vm::{ExceptionType, Value};

#[test]
fn to_string_of_primitives() {
    let mut agent = agent_with_realm();
    let cases: [(Value, &str); 5] = [
        (Value::Undefined, "undefined"),
        (Value::Null, "null"),
        (Value::Boolean(true), "true"),
        (Value::Boolean(false), "false"),
        (Value::Number(0.0), "0"),
    ];
    for (value, expected) in cases {
        let result = to_string(&mut agent, value).unwrap();
        assert_eq!(result.as_str(&agent), expected);
    }
}

#[test]
fn to_string_of_numbers() {
    let mut agent = agent_with_realm();
    let cases: [(f64, &str); 10] = [
        (5.0, "5"),
        (-5.0, "-5"),
        (-0.0, "0"),
        (0.5, "0.5"),
        (12.5, "12.5"),
        (1e21, "1e+21"),
        (1e-7, "1e-7"),
        (f64::NAN, "NaN"),
        (f64::INFINITY, "Infinity"),
        (f64::NEG_INFINITY, "-Infinity"),
    ];
    for (number, expected) in cases {
        let result = to_string(&mut agent, Value::Number(number)).unwrap();
        assert_eq!(result.as_str(&agent), expected, "formatting {number}");
    }
}

#[test]
fn to_number_of_strings() {
    let mut agent = agent_with_realm();
    let cases: [(&str, f64); 12] = [
        ("", 0.0),
        ("  42  ", 42.0),
        ("3.14", 3.14),
        ("+5", 5.0),
        ("-17", -17.0),
        ("1e3", 1000.0),
        (".5", 0.5),
        ("5.", 5.0),
        ("0x10", 16.0),
        ("0b101", 5.0),
        ("0o17", 15.0),
        ("Infinity", f64::INFINITY),
    ];
    for (text, expected) in cases {
        let value = string_value(&mut agent, text);
        let result = to_number(&mut agent, value).unwrap();
        assert_eq!(result, expected, "parsing {text:?}");
    }

    // Forms Rust's float parser accepts but the language grammar does not.
    for text in ["abc", "inf", "nan", "NaN ok", "1e", "0x", "12px"] {
        let value = string_value(&mut agent, text);
        let result = to_number(&mut agent, value).unwrap();
        assert!(result.is_nan(), "{text:?} should parse to NaN");
    }

    let value = string_value(&mut agent, "-Infinity");
    assert_eq!(to_number(&mut agent, value).unwrap(), f64::NEG_INFINITY);
}

#[test]
fn to_number_of_other_primitives() {
    let mut agent = agent_with_realm();
    assert!(to_number(&mut agent, Value::Undefined).unwrap().is_nan());
    assert_eq!(to_number(&mut agent, Value::Null).unwrap(), 0.0);
    assert_eq!(to_number(&mut agent, Value::Boolean(true)).unwrap(), 1.0);
    assert_eq!(to_number(&mut agent, Value::Boolean(false)).unwrap(), 0.0);
}

#[test]
fn to_int32_and_to_uint32_wrap_modulo() {
    let mut agent = agent_with_realm();
    assert_eq!(to_int32(&mut agent, Value::Number(-1.0)).unwrap(), -1);
    assert_eq!(to_uint32(&mut agent, Value::Number(-1.0)).unwrap(), u32::MAX);
    assert_eq!(
        to_int32(&mut agent, Value::Number(2147483648.0)).unwrap(),
        -2147483648
    );
    assert_eq!(
        to_uint32(&mut agent, Value::Number(4294967296.0)).unwrap(),
        0
    );
    assert_eq!(to_int32(&mut agent, Value::Number(3.7)).unwrap(), 3);
    assert_eq!(to_int32(&mut agent, Value::Number(-3.7)).unwrap(), -3);
    assert_eq!(to_int32(&mut agent, Value::nan()).unwrap(), 0);
    assert_eq!(
        to_int32(&mut agent, Value::Number(f64::INFINITY)).unwrap(),
        0
    );
}

#[test]
fn to_integer_or_infinity_preserves_infinities() {
    let mut agent = agent_with_realm();
    assert_eq!(to_integer_or_infinity(&mut agent, Value::nan()).unwrap(), 0.0);
    assert_eq!(
        to_integer_or_infinity(&mut agent, Value::Number(f64::INFINITY)).unwrap(),
        f64::INFINITY
    );
    assert_eq!(
        to_integer_or_infinity(&mut agent, Value::Number(-2.9)).unwrap(),
        -2.0
    );
    assert_eq!(
        to_integer_or_infinity(&mut agent, Value::Number(2.9)).unwrap(),
        2.0
    );
}

#[test]
fn to_length_clamps() {
    let mut agent = agent_with_realm();
    assert_eq!(to_length(&mut agent, Value::Number(-5.0)).unwrap(), 0);
    assert_eq!(to_length(&mut agent, Value::Number(42.9)).unwrap(), 42);
    assert_eq!(
        to_length(&mut agent, Value::Number(f64::INFINITY)).unwrap(),
        2i64.pow(53) - 1
    );
}

#[test]
fn require_object_coercible_rejects_nullish() {
    let mut agent = agent_with_realm();
    let error = require_object_coercible(&mut agent, Value::Undefined).unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
    let error = require_object_coercible(&mut agent, Value::Null).unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
    assert!(require_object_coercible(&mut agent, Value::Number(0.0)).is_ok());
}

#[test]
fn to_object_boxes_primitives() {
    let mut agent = agent_with_realm();
    let error = to_object(&mut agent, Value::Undefined).unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));

    let string = string_value(&mut agent, "boxed");
    let boxed = to_object(&mut agent, string).unwrap();
    assert!(matches!(boxed, Object::PrimitiveObject(_)));

    let number_box = to_object(&mut agent, Value::Number(3.0)).unwrap();
    assert!(matches!(number_box, Object::PrimitiveObject(_)));

    // An object passes through unchanged.
    let same = to_object(&mut agent, Value::from(boxed)).unwrap();
    assert_eq!(same, boxed);
}

#[test]
fn to_string_of_a_boxed_string_goes_through_value_of() {
    let mut agent = agent_with_realm();
    let string = string_value(&mut agent, "inner");
    let boxed = to_object(&mut agent, string).unwrap();
    let result = to_string(&mut agent, Value::from(boxed)).unwrap();
    assert_eq!(result.as_str(&agent), "inner");
}

#[test]
fn to_string_of_a_plain_object_uses_the_object_prototype() {
    let mut agent = agent_with_realm();
    let realm = agent.current_realm_id();
    let object_prototype = agent[realm].intrinsics().object_prototype();
    let object = vela_vm::ecmascript::builtins::ordinary::ordinary_object_create(
        &mut agent,
        Some(object_prototype.into()),
    );
    let result = to_string(&mut agent, Value::Object(object)).unwrap();
    assert_eq!(result.as_str(&agent), "[object Object]");
}

#[test]
fn to_primitive_honours_the_to_primitive_symbol() {
    use vela_vm::ecmascript::abstract_operations::operations_on_objects::create_data_property_or_throw;
    use vela_vm::ecmascript::builtins::ordinary::ordinary_object_create;
    use vela_vm::ecmascript::types::IntoValue;
    use vela_vm::heap::WellKnownSymbolIndexes;
    use vela_vm::{create_builtin_function, Agent, ArgumentsList, Behaviour, JsResult};

    fn exotic(agent: &mut Agent, _this: Value, args: ArgumentsList) -> JsResult<Value> {
        // The hint string arrives as the only argument.
        let hint = vela_vm::ecmascript::types::String::try_from(args.get(0)).unwrap();
        let result = format!("hint:{}", hint.as_str(agent));
        Ok(Value::from_string(agent, result))
    }

    let mut agent = agent_with_realm();
    let realm = agent.current_realm_id();
    let object_prototype = agent[realm].intrinsics().object_prototype();
    let object = ordinary_object_create(&mut agent, Some(object_prototype.into()));
    let name = vela_vm::ecmascript::types::String::from_str(&mut agent, "[Symbol.toPrimitive]");
    let hook = create_builtin_function(&mut agent, Behaviour::Regular(exotic), 1, name);
    create_data_property_or_throw(
        &mut agent,
        object.into(),
        WellKnownSymbolIndexes::ToPrimitive.to_property_key(),
        hook.into_value(),
    )
    .unwrap();

    let result = to_string(&mut agent, Value::Object(object)).unwrap();
    assert_eq!(result.as_str(&agent), "hint:string");
    let result = to_number(&mut agent, Value::Object(object)).unwrap();
    assert!(result.is_nan()); // "hint:number" does not parse as a number
}
