// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [7.2 Testing and Comparison Operations](https://tc39.es/ecma262/#sec-testing-and-comparison-operations)

use super::operations_on_objects::get_v;
use super::type_conversion::to_boolean;
use crate::ecmascript::execution::{Agent, ExceptionType, JsResult};
use crate::ecmascript::types::Value;
use crate::heap::WellKnownSymbolIndexes;

/// ### [7.2.1 RequireObjectCoercible ( argument )](https://tc39.es/ecma262/#sec-requireobjectcoercible)
pub fn require_object_coercible(agent: &mut Agent, argument: Value) -> JsResult<Value> {
    if argument.is_nullish() {
        Err(agent.throw_exception_with_static_message(
            ExceptionType::TypeError,
            "Cannot convert undefined or null to object",
        ))
    } else {
        Ok(argument)
    }
}

/// ### [7.2.3 IsCallable ( argument )](https://tc39.es/ecma262/#sec-iscallable)
pub fn is_callable(argument: Value) -> bool {
    matches!(argument, Value::BuiltinFunction(_))
}

/// ### [7.2.8 IsRegExp ( argument )](https://tc39.es/ecma262/#sec-isregexp)
pub fn is_reg_exp(agent: &mut Agent, argument: Value) -> JsResult<bool> {
    // 1. If argument is not an Object, return false.
    if !argument.is_object() {
        return Ok(false);
    }
    // 2. Let matcher be ? Get(argument, %Symbol.match%).
    let matcher = get_v(
        agent,
        argument,
        WellKnownSymbolIndexes::Match.to_property_key(),
    )?;
    // 3. If matcher is not undefined, return ToBoolean(matcher).
    if !matcher.is_undefined() {
        return Ok(to_boolean(agent, matcher));
    }
    // 4. If argument has a [[RegExpMatcher]] internal slot, return true.
    Ok(matches!(argument, Value::RegExp(_)))
}

/// ### [7.2.9 Is an integral Number](https://tc39.es/ecma262/#sec-isintegralnumber)
pub fn is_integral_number(number: f64) -> bool {
    number.is_finite() && number.trunc() == number
}

/// ### [7.2.10 SameValue ( x, y )](https://tc39.es/ecma262/#sec-samevalue)
///
/// Strings compare by handle; heap strings are content-deduplicated at
/// allocation, so handle equality is content equality.
pub fn same_value(x: Value, y: Value) -> bool {
    if let (Value::Number(x), Value::Number(y)) = (x, y) {
        if x.is_nan() && y.is_nan() {
            return true;
        }
        return x == y && x.is_sign_positive() == y.is_sign_positive();
    }
    x == y
}
