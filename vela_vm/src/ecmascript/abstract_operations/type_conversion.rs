// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [7.1 Type Conversion](https://tc39.es/ecma262/#sec-type-conversion)
//!
//! The ECMAScript language implicitly performs automatic type conversion
//! as needed. To clarify the semantics of certain constructs it is useful
//! to define a set of conversion abstract operations.

use super::operations_on_objects::{call_function, get, get_method};
use super::testing_and_comparison::is_callable;
use crate::ecmascript::builtins::primitive_objects::{
    PrimitiveObjectData, PrimitiveObjectHeapData,
};
use crate::ecmascript::builtins::text_processing::string_objects::string_prototype::is_trimmable_whitespace;
use crate::ecmascript::execution::{Agent, ExceptionType, JsResult};
use crate::ecmascript::types::{
    Function, IntoValue, Object, String, Value, BUILTIN_STRING_MEMORY,
};
use crate::heap::{CreateHeapData, WellKnownSymbolIndexes};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferredType {
    String = 1,
    Number,
}

/// ### [7.1.1 ToPrimitive ( input \[ , preferredType \] )](https://tc39.es/ecma262/#sec-toprimitive)
///
/// Converts its input argument to a non-Object type. If an object is
/// capable of converting to more than one primitive type, it may use the
/// optional hint preferredType to favour that type.
pub fn to_primitive(
    agent: &mut Agent,
    input: Value,
    preferred_type: Option<PreferredType>,
) -> JsResult<Value> {
    // 1. If input is an Object, then
    if let Ok(input) = Object::try_from(input) {
        // a. Let exoticToPrim be ? GetMethod(input, %Symbol.toPrimitive%).
        let exotic_to_prim = get_method(
            agent,
            input.into_value(),
            WellKnownSymbolIndexes::ToPrimitive.to_property_key(),
        )?;
        if let Some(exotic_to_prim) = exotic_to_prim {
            let hint = match preferred_type {
                // i. If preferredType is not present, let hint be "default".
                None => BUILTIN_STRING_MEMORY.default,
                // ii. Else if preferredType is STRING, let hint be "string".
                Some(PreferredType::String) => BUILTIN_STRING_MEMORY.string,
                // iii. Else, let hint be "number".
                Some(PreferredType::Number) => BUILTIN_STRING_MEMORY.number,
            };
            // iv. Let result be ? Call(exoticToPrim, input, « hint »).
            let result = call_function(
                agent,
                exotic_to_prim,
                input.into_value(),
                Some(&[hint.into_value()]),
            )?;
            // v. If result is not an Object, return result.
            if !result.is_object() {
                return Ok(result);
            }
            // vi. Throw a TypeError exception.
            return Err(agent.throw_exception_with_static_message(
                ExceptionType::TypeError,
                "%Symbol.toPrimitive% returned an object",
            ));
        }
        // c. If preferredType is not present, let preferredType be NUMBER.
        // d. Return ? OrdinaryToPrimitive(input, preferredType).
        return ordinary_to_primitive(
            agent,
            input,
            preferred_type.unwrap_or(PreferredType::Number),
        );
    }
    // 2. Return input.
    Ok(input)
}

/// ### [7.1.1.1 OrdinaryToPrimitive ( O, hint )](https://tc39.es/ecma262/#sec-ordinarytoprimitive)
pub fn ordinary_to_primitive(
    agent: &mut Agent,
    object: Object,
    hint: PreferredType,
) -> JsResult<Value> {
    let to_string_key = BUILTIN_STRING_MEMORY.toString.to_property_key();
    let value_of_key = BUILTIN_STRING_MEMORY.valueOf.to_property_key();
    // 1.-2. Order the method names by the hint.
    let method_names = match hint {
        PreferredType::String => [to_string_key, value_of_key],
        PreferredType::Number => [value_of_key, to_string_key],
    };
    // 3. For each element name of methodNames, do
    for name in method_names {
        // a. Let method be ? Get(O, name).
        let method = get(agent, object, name)?;
        // b. If IsCallable(method) is true, then
        if is_callable(method) {
            let method = Function::try_from(method).unwrap();
            // i. Let result be ? Call(method, O).
            let result = call_function(agent, method, object.into_value(), None)?;
            // ii. If result is not an Object, return result.
            if !result.is_object() {
                return Ok(result);
            }
        }
    }
    // 4. Throw a TypeError exception.
    Err(agent.throw_exception_with_static_message(
        ExceptionType::TypeError,
        "Cannot convert object to primitive value",
    ))
}

/// ### [7.1.2 ToBoolean ( argument )](https://tc39.es/ecma262/#sec-toboolean)
pub fn to_boolean(agent: &Agent, argument: Value) -> bool {
    match argument {
        Value::Undefined | Value::Null => false,
        Value::Boolean(b) => b,
        Value::Number(n) => !(n == 0.0 || n.is_nan()),
        Value::String(_) | Value::SmallString(_) => {
            !String::try_from(argument).unwrap().is_empty_string(agent)
        }
        _ => true,
    }
}

/// ### [7.1.4 ToNumber ( argument )](https://tc39.es/ecma262/#sec-tonumber)
pub fn to_number(agent: &mut Agent, argument: Value) -> JsResult<f64> {
    match argument {
        // 1. If argument is a Number, return argument.
        Value::Number(n) => Ok(n),
        // 2. If argument is either a Symbol or a BigInt, throw a TypeError.
        Value::Symbol(_) => Err(agent.throw_exception_with_static_message(
            ExceptionType::TypeError,
            "Cannot convert a Symbol to a number",
        )),
        // 3. If argument is undefined, return NaN.
        Value::Undefined => Ok(f64::NAN),
        // 4. If argument is either null or false, return +0𝔽.
        Value::Null | Value::Boolean(false) => Ok(0.0),
        // 5. If argument is true, return 1𝔽.
        Value::Boolean(true) => Ok(1.0),
        // 6. If argument is a String, return StringToNumber(argument).
        Value::String(_) | Value::SmallString(_) => {
            let string = String::try_from(argument).unwrap();
            Ok(string_to_number(string.as_str(agent)))
        }
        // 7.-9. Objects: ToPrimitive with hint Number, then ToNumber.
        _ => {
            let primitive = to_primitive(agent, argument, Some(PreferredType::Number))?;
            to_number(agent, primitive)
        }
    }
}

/// ### [7.1.4.1.1 StringToNumber ( str )](https://tc39.es/ecma262/#sec-stringtonumber)
fn string_to_number(string: &str) -> f64 {
    let text = string
        .trim_start_matches(is_trimmable_whitespace)
        .trim_end_matches(is_trimmable_whitespace);
    if text.is_empty() {
        return 0.0;
    }
    if let Some(digits) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        return parse_radix_digits(digits, 16);
    }
    if let Some(digits) = text.strip_prefix("0o").or_else(|| text.strip_prefix("0O")) {
        return parse_radix_digits(digits, 8);
    }
    if let Some(digits) = text.strip_prefix("0b").or_else(|| text.strip_prefix("0B")) {
        return parse_radix_digits(digits, 2);
    }
    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if !is_str_decimal_literal(text) {
        return f64::NAN;
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix_digits(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut result = 0.0f64;
    for ch in digits.chars() {
        let Some(digit) = ch.to_digit(radix) else {
            return f64::NAN;
        };
        result = result * radix as f64 + digit as f64;
    }
    result
}

/// Whether `text` matches the StrDecimalLiteral grammar, which is what
/// `f64::from_str` may be handed: Rust additionally accepts forms such as
/// `inf` and `nan` that the ECMAScript grammar does not.
fn is_str_decimal_literal(text: &str) -> bool {
    let text = text
        .strip_prefix(['+', '-'])
        .unwrap_or(text);
    let (mantissa, exponent) = match text.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (text, None),
    };
    let (integer, fraction) = match mantissa.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (mantissa, ""),
    };
    if integer.is_empty() && fraction.is_empty() {
        return false;
    }
    if !integer.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return false;
    }
    match exponent {
        None => true,
        Some(exponent) => {
            let exponent = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
            !exponent.is_empty() && exponent.bytes().all(|b| b.is_ascii_digit())
        }
    }
}

/// ### [7.1.5 ToIntegerOrInfinity ( argument )](https://tc39.es/ecma262/#sec-tointegerorinfinity)
pub fn to_integer_or_infinity(agent: &mut Agent, argument: Value) -> JsResult<f64> {
    // 1. Let number be ? ToNumber(argument).
    let number = to_number(agent, argument)?;
    // 2. If number is one of NaN, +0𝔽, or -0𝔽, return 0.
    if number.is_nan() || number == 0.0 {
        return Ok(0.0);
    }
    // 3.-4. Infinities are preserved.
    if number.is_infinite() {
        return Ok(number);
    }
    // 5. Return truncate(ℝ(number)).
    Ok(number.trunc())
}

/// ### [7.1.6 ToInt32 ( argument )](https://tc39.es/ecma262/#sec-toint32)
pub fn to_int32(agent: &mut Agent, argument: Value) -> JsResult<i32> {
    let number = to_number(agent, argument)?;
    Ok(f64_to_int32(number))
}

pub fn f64_to_int32(number: f64) -> i32 {
    let modulo = f64_to_uint32(number);
    // Values of 2^31 or more are taken modulo into the negative range.
    if modulo >= 0x8000_0000 {
        (modulo as i64 - 0x1_0000_0000) as i32
    } else {
        modulo as i32
    }
}

/// ### [7.1.7 ToUint32 ( argument )](https://tc39.es/ecma262/#sec-touint32)
pub fn to_uint32(agent: &mut Agent, argument: Value) -> JsResult<u32> {
    let number = to_number(agent, argument)?;
    Ok(f64_to_uint32(number))
}

pub fn f64_to_uint32(number: f64) -> u32 {
    // 2. If number is not finite or is a zero, return +0𝔽.
    if !number.is_finite() || number == 0.0 {
        return 0;
    }
    // 3.-4. Modulo 2^32 over the truncated real value.
    let int = number.trunc();
    let modulo = int % 4294967296.0;
    let modulo = if modulo < 0.0 {
        modulo + 4294967296.0
    } else {
        modulo
    };
    modulo as u32
}

/// ### [7.1.20 ToLength ( argument )](https://tc39.es/ecma262/#sec-tolength)
pub fn to_length(agent: &mut Agent, argument: Value) -> JsResult<i64> {
    // 1. Let len be ? ToIntegerOrInfinity(argument).
    let len = to_integer_or_infinity(agent, argument)?;
    // 2. If len ≤ 0, return +0𝔽.
    if len <= 0.0 {
        return Ok(0);
    }
    // 3. Return 𝔽(min(len, 2^53 - 1)).
    Ok(len.min(9007199254740991.0) as i64)
}

/// ### [7.1.17 ToString ( argument )](https://tc39.es/ecma262/#sec-tostring)
pub fn to_string(agent: &mut Agent, argument: Value) -> JsResult<String> {
    match argument {
        Value::String(s) => Ok(String::String(s)),
        Value::SmallString(s) => Ok(String::SmallString(s)),
        Value::Undefined => Ok(BUILTIN_STRING_MEMORY.undefined),
        Value::Null => Ok(BUILTIN_STRING_MEMORY.null),
        Value::Boolean(true) => Ok(BUILTIN_STRING_MEMORY.r#true),
        Value::Boolean(false) => Ok(BUILTIN_STRING_MEMORY.r#false),
        Value::Number(n) => Ok(number_to_string(agent, n)),
        Value::Symbol(_) => Err(agent.throw_exception_with_static_message(
            ExceptionType::TypeError,
            "Cannot convert a Symbol to a string",
        )),
        // Objects: ToPrimitive with hint String, then ToString.
        _ => {
            let primitive = to_primitive(agent, argument, Some(PreferredType::String))?;
            to_string(agent, primitive)
        }
    }
}

/// ### [6.1.6.1.20 Number::toString ( x, radix )](https://tc39.es/ecma262/#sec-numeric-types-number-tostring)
/// for radix 10, via the shortest round-trip algorithm.
pub fn number_to_string(agent: &mut Agent, number: f64) -> String {
    String::from_string(agent, f64_to_js_string(number))
}

pub fn f64_to_js_string(number: f64) -> std::string::String {
    if number.is_nan() {
        return "NaN".to_string();
    }
    if number == f64::INFINITY {
        return "Infinity".to_string();
    }
    if number == f64::NEG_INFINITY {
        return "-Infinity".to_string();
    }
    let mut buffer = ryu_js::Buffer::new();
    buffer.format_finite(number).to_string()
}

/// ### [7.1.18 ToObject ( argument )](https://tc39.es/ecma262/#sec-toobject)
pub fn to_object(agent: &mut Agent, argument: Value) -> JsResult<Object> {
    match argument {
        Value::Undefined | Value::Null => Err(agent.throw_exception_with_static_message(
            ExceptionType::TypeError,
            "Cannot convert undefined or null to object",
        )),
        Value::Boolean(b) => Ok(box_primitive(agent, PrimitiveObjectData::Boolean(b))),
        Value::Number(n) => Ok(box_primitive(agent, PrimitiveObjectData::Number(n))),
        Value::String(s) => Ok(box_primitive(agent, PrimitiveObjectData::String(s))),
        Value::SmallString(s) => Ok(box_primitive(agent, PrimitiveObjectData::SmallString(s))),
        Value::Symbol(s) => Ok(box_primitive(agent, PrimitiveObjectData::Symbol(s))),
        _ => Ok(Object::try_from(argument).unwrap()),
    }
}

fn box_primitive(agent: &mut Agent, data: PrimitiveObjectData) -> Object {
    Object::PrimitiveObject(agent.heap.create(PrimitiveObjectHeapData::new(data)))
}
