// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::abstract_operations::operations_on_objects::{get, length_of_array_like};
use crate::ecmascript::abstract_operations::testing_and_comparison::is_integral_number;
use crate::ecmascript::abstract_operations::type_conversion::{
    f64_to_int32, f64_to_js_string, to_int32, to_number, to_object, to_string,
};
use crate::ecmascript::builders::builtin_function_builder::BuiltinFunctionBuilder;
use crate::ecmascript::builtins::ordinary::get_prototype_from_constructor;
use crate::ecmascript::builtins::primitive_objects::{string_create, PrimitiveObject};
use crate::ecmascript::builtins::{ArgumentsList, Behaviour, Builtin, BuiltinFunction};
use crate::ecmascript::execution::{Agent, ExceptionType, JsResult};
use crate::ecmascript::types::{
    IntoValue, Object, OrdinaryObject, PropertyKey, String, Value, BUILTIN_STRING_MEMORY,
};

pub(crate) struct StringConstructor;

impl Builtin for StringConstructor {
    const NAME: String = BUILTIN_STRING_MEMORY.String;
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Constructor(Self::behaviour);
}

struct StringFromCharCode;
impl Builtin for StringFromCharCode {
    const NAME: String = BUILTIN_STRING_MEMORY.fromCharCode;
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringConstructor::from_char_code);
}
struct StringFromCodePoint;
impl Builtin for StringFromCodePoint {
    const NAME: String = BUILTIN_STRING_MEMORY.fromCodePoint;
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringConstructor::from_code_point);
}
struct StringRaw;
impl Builtin for StringRaw {
    const NAME: String = BUILTIN_STRING_MEMORY.raw;
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringConstructor::raw);
}

impl StringConstructor {
    /// ### [22.1.1.1 String ( value )](https://tc39.es/ecma262/#sec-string-constructor-string-value)
    fn behaviour(
        agent: &mut Agent,
        _this_value: Value,
        arguments: ArgumentsList,
        new_target: Option<Object>,
    ) -> JsResult<Value> {
        // 1. If value is not present, let s be the empty String.
        let s = if arguments.is_empty() {
            String::EMPTY_STRING
        } else {
            let value = arguments.get(0);
            // 2.a. If NewTarget is undefined and value is a Symbol, return
            //      SymbolDescriptiveString(value).
            if new_target.is_none() {
                if let Value::Symbol(symbol) = value {
                    return Ok(symbol.descriptive_string(agent).into_value());
                }
            }
            // 2.b. Let s be ? ToString(value).
            to_string(agent, value)?
        };
        // 3. If NewTarget is undefined, return s.
        let Some(new_target) = new_target else {
            return Ok(s.into_value());
        };
        // 4. Return StringCreate(s,
        //    ? GetPrototypeFromConstructor(NewTarget, "%String.prototype%")).
        let prototype = get_prototype_from_constructor(agent, new_target)?;
        Ok(string_create(agent, s, prototype).into_value())
    }

    /// ### [22.1.2.1 String.fromCharCode ( ...codeUnits )](https://tc39.es/ecma262/#sec-string.fromcharcode)
    ///
    /// Each truncated code unit is appended as an independent BMP code
    /// point; units in the surrogate range cannot be stored as UTF-8 and
    /// become U+FFFD.
    fn from_char_code(
        agent: &mut Agent,
        _this_value: Value,
        arguments: ArgumentsList,
    ) -> JsResult<Value> {
        // 1.-2. Build the result from each coerced code unit.
        let mut result = std::string::String::with_capacity(arguments.len());
        for index in 0..arguments.len() {
            // 3.a. Let nextCU be ℝ(? ToInt32(next)) modulo 2^16.
            let code_unit = (to_int32(agent, arguments.get(index))? as u32) & 0xFFFF;
            let ch = char::from_u32(code_unit).unwrap_or(char::REPLACEMENT_CHARACTER);
            result.push(ch);
        }
        // 4. Return the String value whose code units are the elements.
        Ok(Value::from_string(agent, result))
    }

    /// ### [22.1.2.2 String.fromCodePoint ( ...codePoints )](https://tc39.es/ecma262/#sec-string.fromcodepoint)
    fn from_code_point(
        agent: &mut Agent,
        _this_value: Value,
        arguments: ArgumentsList,
    ) -> JsResult<Value> {
        let mut result = std::string::String::new();
        // 2. For each element next of codePoints, do
        for index in 0..arguments.len() {
            // a. Let nextCP be ? ToNumber(next).
            let next = to_number(agent, arguments.get(index))?;
            // b. If nextCP is not an integral Number, throw a RangeError.
            if !is_integral_number(next) {
                return Err(agent.throw_exception(
                    ExceptionType::RangeError,
                    format!("{} is not a valid code point", f64_to_js_string(next)),
                ));
            }
            // c.-d. If ℝ(nextCP) < 0 or ℝ(nextCP) > 0x10FFFF, throw a
            //       RangeError.
            let code_point = f64_to_int32(next);
            if !(0..=0x10FFFF).contains(&code_point) {
                return Err(agent.throw_exception(
                    ExceptionType::RangeError,
                    format!("{} is not a valid code point", f64_to_js_string(next)),
                ));
            }
            // e. Append the code point; surrogates become U+FFFD.
            let ch = char::from_u32(code_point as u32).unwrap_or(char::REPLACEMENT_CHARACTER);
            result.push(ch);
        }
        // 3. Return the String value whose elements are the appended code
        //    points.
        Ok(Value::from_string(agent, result))
    }

    /// ### [22.1.2.4 String.raw ( template, ...substitutions )](https://tc39.es/ecma262/#sec-string.raw)
    fn raw(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        let template = arguments.get(0);
        // 1. Let substitutionCount be the number of elements in substitutions.
        let substitution_count = arguments.len().saturating_sub(1);
        // 2. Let cooked be ? ToObject(template).
        let cooked = to_object(agent, template)?;
        // 3. Let literals be ? ToObject(? Get(cooked, "raw")).
        let raw_value = get(agent, cooked, BUILTIN_STRING_MEMORY.raw.to_property_key())?;
        let literals = to_object(agent, raw_value)?;
        // 4. Let literalCount be ? LengthOfArrayLike(literals).
        let literal_count = length_of_array_like(agent, literals)?;
        // 5. If literalCount ≤ 0, return the empty String.
        if literal_count <= 0 {
            return Ok(String::EMPTY_STRING.into_value());
        }
        // 6.-7. Interleave the literal segments with the substitutions.
        let mut result = std::string::String::new();
        let mut index: i64 = 0;
        loop {
            // 7.c.-e. Append ? ToString(? Get(literals, ! ToString(𝔽(i)))).
            let key = PropertyKey::from_integer(agent, index);
            let segment = get(agent, literals, key)?;
            let segment = to_string(agent, segment)?;
            result.push_str(segment.as_str(agent));
            // 7.f. If i + 1 = literalCount, return R.
            if index + 1 == literal_count {
                break;
            }
            // 7.g.-j. If i < substitutionCount, append ? ToString(next).
            if (index as usize) < substitution_count {
                let substitution = arguments.get(index as usize + 1);
                let substitution = to_string(agent, substitution)?;
                result.push_str(substitution.as_str(agent));
            }
            index += 1;
        }
        Ok(Value::from_string(agent, result))
    }

    pub(crate) fn create_intrinsic(
        agent: &mut Agent,
        function_prototype: OrdinaryObject,
        string_prototype: PrimitiveObject,
    ) -> BuiltinFunction {
        BuiltinFunctionBuilder::new::<StringConstructor>(agent)
            .with_prototype(function_prototype.into())
            .with_property_capacity(4)
            .with_prototype_property(string_prototype.into())
            .with_builtin_function_property::<StringFromCharCode>()
            .with_builtin_function_property::<StringFromCodePoint>()
            .with_builtin_function_property::<StringRaw>()
            .build()
    }
}
