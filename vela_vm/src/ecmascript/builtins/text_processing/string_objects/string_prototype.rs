// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [22.1.3 Properties of the String Prototype Object](https://tc39.es/ecma262/#sec-properties-of-the-string-prototype-object)
//!
//! Positions and lengths are code points over the UTF-8 store; the
//! internal scan loops work on byte offsets but only ever stop at code
//! point boundaries.

use crate::ecmascript::abstract_operations::operations_on_objects::{
    call_function, get_v, invoke,
};
use crate::ecmascript::abstract_operations::testing_and_comparison::{
    is_callable, is_reg_exp, require_object_coercible,
};
use crate::ecmascript::abstract_operations::type_conversion::{
    to_integer_or_infinity, to_length, to_number, to_string, to_uint32,
};
use crate::ecmascript::builders::builtin_function_builder::BuiltinFunctionBuilder;
use crate::ecmascript::builders::ordinary_object_builder::OrdinaryObjectBuilder;
use crate::ecmascript::builtins::array::Array;
use crate::ecmascript::builtins::primitive_objects::PrimitiveObject;
use crate::ecmascript::builtins::regexp::reg_exp_create;
use crate::ecmascript::builtins::text_processing::string_objects::string_iterator_objects::StringIterator;
use crate::ecmascript::builtins::{ArgumentsList, Behaviour, Builtin, BuiltinFunction};
use crate::ecmascript::execution::{Agent, ExceptionType, JsResult, RealmIdentifier};
use crate::ecmascript::types::{
    byte_index_of_code_point, Function, IntoValue, PropertyKey, String, Value,
    BUILTIN_STRING_MEMORY,
};
use crate::heap::WellKnownSymbolIndexes;

pub(crate) struct StringPrototype;

struct StringPrototypeAt;
impl Builtin for StringPrototypeAt {
    const NAME: String = BUILTIN_STRING_MEMORY.at;
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::at);
}
struct StringPrototypeCharAt;
impl Builtin for StringPrototypeCharAt {
    const NAME: String = BUILTIN_STRING_MEMORY.charAt;
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::char_at);
}
struct StringPrototypeCharCodeAt;
impl Builtin for StringPrototypeCharCodeAt {
    const NAME: String = BUILTIN_STRING_MEMORY.charCodeAt;
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::char_code_at);
}
struct StringPrototypeCodePointAt;
impl Builtin for StringPrototypeCodePointAt {
    const NAME: String = BUILTIN_STRING_MEMORY.codePointAt;
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::code_point_at);
}
struct StringPrototypeConcat;
impl Builtin for StringPrototypeConcat {
    const NAME: String = BUILTIN_STRING_MEMORY.concat;
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::concat);
}
struct StringPrototypeEndsWith;
impl Builtin for StringPrototypeEndsWith {
    const NAME: String = BUILTIN_STRING_MEMORY.endsWith;
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::ends_with);
}
struct StringPrototypeIncludes;
impl Builtin for StringPrototypeIncludes {
    const NAME: String = BUILTIN_STRING_MEMORY.includes;
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::includes);
}
struct StringPrototypeIndexOf;
impl Builtin for StringPrototypeIndexOf {
    const NAME: String = BUILTIN_STRING_MEMORY.indexOf;
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::index_of);
}
struct StringPrototypeLastIndexOf;
impl Builtin for StringPrototypeLastIndexOf {
    const NAME: String = BUILTIN_STRING_MEMORY.lastIndexOf;
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::last_index_of);
}
struct StringPrototypeMatch;
impl Builtin for StringPrototypeMatch {
    const NAME: String = BUILTIN_STRING_MEMORY.r#match;
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::r#match);
}
struct StringPrototypeMatchAll;
impl Builtin for StringPrototypeMatchAll {
    const NAME: String = BUILTIN_STRING_MEMORY.matchAll;
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::match_all);
}
struct StringPrototypePadEnd;
impl Builtin for StringPrototypePadEnd {
    const NAME: String = BUILTIN_STRING_MEMORY.padEnd;
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::pad_end);
}
struct StringPrototypePadStart;
impl Builtin for StringPrototypePadStart {
    const NAME: String = BUILTIN_STRING_MEMORY.padStart;
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::pad_start);
}
struct StringPrototypeRepeat;
impl Builtin for StringPrototypeRepeat {
    const NAME: String = BUILTIN_STRING_MEMORY.repeat;
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::repeat);
}
struct StringPrototypeReplace;
impl Builtin for StringPrototypeReplace {
    const NAME: String = BUILTIN_STRING_MEMORY.replace;
    const LENGTH: u8 = 2;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::replace);
}
struct StringPrototypeSearch;
impl Builtin for StringPrototypeSearch {
    const NAME: String = BUILTIN_STRING_MEMORY.search;
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::search);
}
struct StringPrototypeSlice;
impl Builtin for StringPrototypeSlice {
    const NAME: String = BUILTIN_STRING_MEMORY.slice;
    const LENGTH: u8 = 2;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::slice);
}
struct StringPrototypeSplit;
impl Builtin for StringPrototypeSplit {
    const NAME: String = BUILTIN_STRING_MEMORY.split;
    const LENGTH: u8 = 2;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::split);
}
struct StringPrototypeStartsWith;
impl Builtin for StringPrototypeStartsWith {
    const NAME: String = BUILTIN_STRING_MEMORY.startsWith;
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::starts_with);
}
struct StringPrototypeSubstr;
impl Builtin for StringPrototypeSubstr {
    const NAME: String = BUILTIN_STRING_MEMORY.substr;
    const LENGTH: u8 = 2;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::substr);
}
struct StringPrototypeSubstring;
impl Builtin for StringPrototypeSubstring {
    const NAME: String = BUILTIN_STRING_MEMORY.substring;
    const LENGTH: u8 = 2;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::substring);
}
struct StringPrototypeToLowerCase;
impl Builtin for StringPrototypeToLowerCase {
    const NAME: String = BUILTIN_STRING_MEMORY.toLowerCase;
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::to_lower_case);
}
struct StringPrototypeToString;
impl Builtin for StringPrototypeToString {
    const NAME: String = BUILTIN_STRING_MEMORY.toString;
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::to_string);
}
struct StringPrototypeToUpperCase;
impl Builtin for StringPrototypeToUpperCase {
    const NAME: String = BUILTIN_STRING_MEMORY.toUpperCase;
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::to_upper_case);
}
struct StringPrototypeTrim;
impl Builtin for StringPrototypeTrim {
    const NAME: String = BUILTIN_STRING_MEMORY.trim;
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::trim);
}
struct StringPrototypeTrimEnd;
impl Builtin for StringPrototypeTrimEnd {
    const NAME: String = BUILTIN_STRING_MEMORY.trimEnd;
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::trim_end);
}
struct StringPrototypeTrimStart;
impl Builtin for StringPrototypeTrimStart {
    const NAME: String = BUILTIN_STRING_MEMORY.trimStart;
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::trim_start);
}
struct StringPrototypeValueOf;
impl Builtin for StringPrototypeValueOf {
    const NAME: String = BUILTIN_STRING_MEMORY.valueOf;
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::value_of);
}
struct StringPrototypeIterator;
impl Builtin for StringPrototypeIterator {
    const NAME: String = BUILTIN_STRING_MEMORY._Symbol_iterator_;
    const KEY: Option<PropertyKey> = Some(WellKnownSymbolIndexes::Iterator.to_property_key());
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::iterator);
}
struct StringPrototypeAnchor;
impl Builtin for StringPrototypeAnchor {
    const NAME: String = BUILTIN_STRING_MEMORY.anchor;
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::anchor);
}
struct StringPrototypeBig;
impl Builtin for StringPrototypeBig {
    const NAME: String = BUILTIN_STRING_MEMORY.big;
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::big);
}
struct StringPrototypeBlink;
impl Builtin for StringPrototypeBlink {
    const NAME: String = BUILTIN_STRING_MEMORY.blink;
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::blink);
}
struct StringPrototypeBold;
impl Builtin for StringPrototypeBold {
    const NAME: String = BUILTIN_STRING_MEMORY.bold;
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::bold);
}
struct StringPrototypeFixed;
impl Builtin for StringPrototypeFixed {
    const NAME: String = BUILTIN_STRING_MEMORY.fixed;
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::fixed);
}
struct StringPrototypeFontcolor;
impl Builtin for StringPrototypeFontcolor {
    const NAME: String = BUILTIN_STRING_MEMORY.fontcolor;
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::fontcolor);
}
struct StringPrototypeFontsize;
impl Builtin for StringPrototypeFontsize {
    const NAME: String = BUILTIN_STRING_MEMORY.fontsize;
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::fontsize);
}
struct StringPrototypeItalics;
impl Builtin for StringPrototypeItalics {
    const NAME: String = BUILTIN_STRING_MEMORY.italics;
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::italics);
}
struct StringPrototypeLink;
impl Builtin for StringPrototypeLink {
    const NAME: String = BUILTIN_STRING_MEMORY.link;
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::link);
}
struct StringPrototypeSmall;
impl Builtin for StringPrototypeSmall {
    const NAME: String = BUILTIN_STRING_MEMORY.small;
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::small);
}
struct StringPrototypeStrike;
impl Builtin for StringPrototypeStrike {
    const NAME: String = BUILTIN_STRING_MEMORY.strike;
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::strike);
}
struct StringPrototypeSub;
impl Builtin for StringPrototypeSub {
    const NAME: String = BUILTIN_STRING_MEMORY.sub;
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::sub);
}
struct StringPrototypeSup;
impl Builtin for StringPrototypeSup {
    const NAME: String = BUILTIN_STRING_MEMORY.sup;
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::sup);
}

impl StringPrototype {
    /// ### [22.1.3.1 String.prototype.at ( index )](https://tc39.es/ecma262/#sec-string.prototype.at)
    fn at(agent: &mut Agent, this_value: Value, args: ArgumentsList) -> JsResult<Value> {
        // 1. Let O be ? RequireObjectCoercible(this value).
        let o = require_object_coercible(agent, this_value)?;
        // 2. Let S be ? ToString(O).
        let s = to_string(agent, o)?;
        // 3. Let len be the length of S.
        let len = s.code_point_length(agent) as f64;
        // 4. Let relativeIndex be ? ToIntegerOrInfinity(index).
        let relative_index = to_integer_or_infinity(agent, args.get(0))?;
        if relative_index.is_infinite() {
            return Ok(Value::Undefined);
        }
        // 5.-6. Let k be relativeIndex, or len + relativeIndex if negative.
        let k = if relative_index >= 0.0 {
            relative_index
        } else {
            len + relative_index
        };
        // 7. If k < 0 or k ≥ len, return undefined.
        if k < 0.0 || k >= len {
            return Ok(Value::Undefined);
        }
        // 8. Return the substring of S from k to k + 1.
        let ch = s.as_str(agent).chars().nth(k as usize).unwrap();
        Ok(String::from_code_point(ch).into_value())
    }

    /// ### [22.1.3.2 String.prototype.charAt ( pos )](https://tc39.es/ecma262/#sec-string.prototype.charat)
    fn char_at(agent: &mut Agent, this_value: Value, args: ArgumentsList) -> JsResult<Value> {
        // 1. Let O be ? RequireObjectCoercible(this value).
        let o = require_object_coercible(agent, this_value)?;
        // 2. Let S be ? ToString(O).
        let s = to_string(agent, o)?;
        // 3. Let position be ? ToIntegerOrInfinity(pos).
        let position = to_integer_or_infinity(agent, args.get(0))?;
        // 4. Let size be the length of S.
        let size = s.code_point_length(agent) as f64;
        // 5. If position < 0 or position ≥ size, return the empty String.
        if position < 0.0 || position >= size {
            return Ok(String::EMPTY_STRING.into_value());
        }
        // 6. Return the substring of S from position to position + 1.
        let ch = s.as_str(agent).chars().nth(position as usize).unwrap();
        Ok(String::from_code_point(ch).into_value())
    }

    /// ### [22.1.3.3 String.prototype.charCodeAt ( pos )](https://tc39.es/ecma262/#sec-string.prototype.charcodeat)
    fn char_code_at(agent: &mut Agent, this_value: Value, args: ArgumentsList) -> JsResult<Value> {
        // 1. Let O be ? RequireObjectCoercible(this value).
        let o = require_object_coercible(agent, this_value)?;
        // 2. Let S be ? ToString(O).
        let s = to_string(agent, o)?;
        // 3. Let position be ? ToIntegerOrInfinity(pos).
        let position = to_integer_or_infinity(agent, args.get(0))?;
        // 4. Let size be the length of S.
        let size = s.code_point_length(agent) as f64;
        // 5. If position < 0 or position ≥ size, return NaN.
        if position < 0.0 || position >= size {
            return Ok(Value::nan());
        }
        // 6. Return the numeric value of the code point at that position.
        let ch = s.as_str(agent).chars().nth(position as usize).unwrap();
        Ok(Value::from(ch as u32))
    }

    /// ### [22.1.3.4 String.prototype.codePointAt ( pos )](https://tc39.es/ecma262/#sec-string.prototype.codepointat)
    fn code_point_at(agent: &mut Agent, this_value: Value, args: ArgumentsList) -> JsResult<Value> {
        // 1. Let O be ? RequireObjectCoercible(this value).
        let o = require_object_coercible(agent, this_value)?;
        // 2. Let S be ? ToString(O).
        let s = to_string(agent, o)?;
        // 3. Let position be ? ToIntegerOrInfinity(pos).
        let position = to_integer_or_infinity(agent, args.get(0))?;
        // 4. Let size be the length of S.
        let size = s.code_point_length(agent) as f64;
        // 5. If position < 0 or position ≥ size, return undefined.
        if position < 0.0 || position >= size {
            return Ok(Value::Undefined);
        }
        // 6.-7. Let cp be the code point at that position.
        let ch = s.as_str(agent).chars().nth(position as usize).unwrap();
        Ok(Value::from(ch as u32))
    }

    /// ### [22.1.3.5 String.prototype.concat ( ...args )](https://tc39.es/ecma262/#sec-string.prototype.concat)
    fn concat(agent: &mut Agent, this_value: Value, args: ArgumentsList) -> JsResult<Value> {
        // 1. Let O be ? RequireObjectCoercible(this value).
        let o = require_object_coercible(agent, this_value)?;
        // 2. Let S be ? ToString(O).
        let s = to_string(agent, o)?;
        // 3.-5. Append ? ToString(next) for each argument.
        let mut result = s.as_str(agent).to_owned();
        for index in 0..args.len() {
            let part = to_string(agent, args.get(index))?;
            result.push_str(part.as_str(agent));
        }
        Ok(Value::from_string(agent, result))
    }

    /// ### [22.1.3.7 String.prototype.endsWith ( searchString \[ , endPosition \] )](https://tc39.es/ecma262/#sec-string.prototype.endswith)
    fn ends_with(agent: &mut Agent, this_value: Value, args: ArgumentsList) -> JsResult<Value> {
        // 1. Let O be ? RequireObjectCoercible(this value).
        let o = require_object_coercible(agent, this_value)?;
        // 2. Let S be ? ToString(O).
        let s = to_string(agent, o)?;
        let search_value = args.get(0);
        // 3.-4. If searchString is a RegExp, throw a TypeError exception.
        if is_reg_exp(agent, search_value)? {
            return Err(agent.throw_exception_with_static_message(
                ExceptionType::TypeError,
                "searchString cannot be a RegExp",
            ));
        }
        // 5. Let searchStr be ? ToString(searchString).
        let search = to_string(agent, search_value)?;
        // 6. Let len be the length of S.
        let len = s.code_point_length(agent);
        // 7.-8. Let pos be len, or the clamped end position.
        let end_position = args.get(1);
        let pos = if end_position.is_undefined() {
            len
        } else {
            let position = to_integer_or_infinity(agent, end_position)?;
            clamp_position(position, len)
        };
        let search_len = search.code_point_length(agent);
        // 10. If searchLength = 0, return true.
        if search_len == 0 {
            return Ok(Value::Boolean(true));
        }
        // 11. If start < 0, return false.
        if pos < search_len {
            return Ok(Value::Boolean(false));
        }
        // 12. Return whether the substring ending at pos is searchStr.
        let start = pos - search_len;
        let text = s.as_str(agent);
        let byte_start = byte_index_of_code_point(text, start).unwrap();
        Ok(Value::Boolean(
            text[byte_start..].starts_with(search.as_str(agent)),
        ))
    }

    /// ### [22.1.3.8 String.prototype.includes ( searchString \[ , position \] )](https://tc39.es/ecma262/#sec-string.prototype.includes)
    fn includes(agent: &mut Agent, this_value: Value, args: ArgumentsList) -> JsResult<Value> {
        // 1. Let O be ? RequireObjectCoercible(this value).
        let o = require_object_coercible(agent, this_value)?;
        // 2. Let S be ? ToString(O).
        let s = to_string(agent, o)?;
        let search_value = args.get(0);
        // 3.-4. If searchString is a RegExp, throw a TypeError exception.
        if is_reg_exp(agent, search_value)? {
            return Err(agent.throw_exception_with_static_message(
                ExceptionType::TypeError,
                "searchString cannot be a RegExp",
            ));
        }
        // 5. Let searchStr be ? ToString(searchString).
        let search = to_string(agent, search_value)?;
        // 6.-8. Let start be the clamped position.
        let len = s.code_point_length(agent);
        let position = args.get(1);
        let start = if position.is_undefined() {
            0
        } else {
            let position = to_integer_or_infinity(agent, position)?;
            clamp_position(position, len)
        };
        // 9.-10. Return whether searchStr occurs at or after start.
        let text = s.as_str(agent);
        let byte_start = byte_index_of_code_point(text, start).unwrap();
        Ok(Value::Boolean(
            text[byte_start..].contains(search.as_str(agent)),
        ))
    }

    /// ### [22.1.3.9 String.prototype.indexOf ( searchString \[ , position \] )](https://tc39.es/ecma262/#sec-string.prototype.indexof)
    fn index_of(agent: &mut Agent, this_value: Value, args: ArgumentsList) -> JsResult<Value> {
        // 1. Let O be ? RequireObjectCoercible(this value).
        let o = require_object_coercible(agent, this_value)?;
        // 2. Let S be ? ToString(O).
        let s = to_string(agent, o)?;
        // 3. Let searchStr be ? ToString(searchString).
        let search = to_string(agent, args.get(0))?;
        // 4. Let pos be ? ToIntegerOrInfinity(position).
        let position = args.get(1);
        let pos = if position.is_undefined() {
            0.0
        } else {
            to_integer_or_infinity(agent, position)?
        };
        // 5.-6. Clamp pos between 0 and the length of S.
        let len = s.code_point_length(agent);
        let start = clamp_position(pos, len);
        // 7. Return 𝔽(StringIndexOf(S, searchStr, start)).
        match s.index_of(agent, search, start) {
            Some(index) => Ok(Value::from(index as u32)),
            None => Ok(Value::Number(-1.0)),
        }
    }

    /// ### [22.1.3.10 String.prototype.lastIndexOf ( searchString \[ , position \] )](https://tc39.es/ecma262/#sec-string.prototype.lastindexof)
    fn last_index_of(agent: &mut Agent, this_value: Value, args: ArgumentsList) -> JsResult<Value> {
        // 1. Let O be ? RequireObjectCoercible(this value).
        let o = require_object_coercible(agent, this_value)?;
        // 2. Let S be ? ToString(O).
        let s = to_string(agent, o)?;
        // 3. Let searchStr be ? ToString(searchString).
        let search = to_string(agent, args.get(0))?;
        // 4. Let numPos be ? ToNumber(position).
        let num_pos = to_number(agent, args.get(1))?;
        let len = s.code_point_length(agent);
        let search_len = search.code_point_length(agent);
        if search_len > len {
            return Ok(Value::Number(-1.0));
        }
        let max_index = len - search_len;
        // 5. If numPos is NaN, let pos be +∞; clamp into [0, maxIndex].
        let from_index = if num_pos.is_nan() {
            max_index
        } else {
            let pos = if num_pos.is_infinite() {
                num_pos
            } else {
                num_pos.trunc()
            };
            clamp_position(pos, max_index)
        };
        // 8.-9. Scan downward from fromIndex for the last occurrence.
        let text = s.as_str(agent);
        let needle = search.as_str(agent);
        let mut boundaries: Vec<usize> = text.char_indices().map(|(byte, _)| byte).collect();
        boundaries.push(text.len());
        for index in (0..=from_index).rev() {
            if text[boundaries[index]..].starts_with(needle) {
                return Ok(Value::from(index as u32));
            }
        }
        Ok(Value::Number(-1.0))
    }

    /// ### [22.1.3.12 String.prototype.match ( regexp )](https://tc39.es/ecma262/#sec-string.prototype.match)
    fn r#match(agent: &mut Agent, this_value: Value, args: ArgumentsList) -> JsResult<Value> {
        // 1. Let O be ? RequireObjectCoercible(this value).
        let o = require_object_coercible(agent, this_value)?;
        let regexp = args.get(0);
        // 2. If regexp is neither undefined nor null, then
        if !regexp.is_nullish() {
            // a. Let matcher be ? GetMethod(regexp, %Symbol.match%).
            let matcher = get_method_for_value(agent, regexp, WellKnownSymbolIndexes::Match)?;
            // b. If matcher is not undefined, return ? Call(matcher, regexp, « O »).
            if let Some(matcher) = matcher {
                return call_function(agent, matcher, regexp, Some(&[o]));
            }
        }
        // 3. Let S be ? ToString(O).
        let s = to_string(agent, o)?;
        // 4. Let rx be ? RegExpCreate(regexp, undefined).
        let rx = reg_exp_create(agent, regexp, None)?;
        // 5. Return ? Invoke(rx, %Symbol.match%, « S »).
        invoke(
            agent,
            rx.into_value(),
            WellKnownSymbolIndexes::Match.to_property_key(),
            Some(&[s.into_value()]),
        )
    }

    /// ### [22.1.3.13 String.prototype.matchAll ( regexp )](https://tc39.es/ecma262/#sec-string.prototype.matchall)
    fn match_all(agent: &mut Agent, this_value: Value, args: ArgumentsList) -> JsResult<Value> {
        // 1. Let O be ? RequireObjectCoercible(this value).
        let o = require_object_coercible(agent, this_value)?;
        let regexp = args.get(0);
        // 2. If regexp is neither undefined nor null, then
        if !regexp.is_nullish() {
            // a. If IsRegExp(regexp), its flags must contain "g".
            if is_reg_exp(agent, regexp)? {
                let flags = get_v(agent, regexp, BUILTIN_STRING_MEMORY.flags.to_property_key())?;
                require_object_coercible(agent, flags)?;
                let flags = to_string(agent, flags)?;
                if !flags.as_str(agent).contains('g') {
                    return Err(agent.throw_exception_with_static_message(
                        ExceptionType::TypeError,
                        "matchAll must be called with a global RegExp",
                    ));
                }
            }
            // c. Let matcher be ? GetMethod(regexp, %Symbol.matchAll%).
            let matcher = get_method_for_value(agent, regexp, WellKnownSymbolIndexes::MatchAll)?;
            // d. If matcher is not undefined, return ? Call(matcher, regexp, « O »).
            if let Some(matcher) = matcher {
                return call_function(agent, matcher, regexp, Some(&[o]));
            }
        }
        // 3. Let S be ? ToString(O).
        let s = to_string(agent, o)?;
        // 4. Let rx be ? RegExpCreate(regexp, "g").
        let rx = reg_exp_create(agent, regexp, Some(String::from_small_string("g")))?;
        // 5. Return ? Invoke(rx, %Symbol.matchAll%, « S »).
        invoke(
            agent,
            rx.into_value(),
            WellKnownSymbolIndexes::MatchAll.to_property_key(),
            Some(&[s.into_value()]),
        )
    }

    /// ### [22.1.3.15 String.prototype.padEnd ( maxLength \[ , fillString \] )](https://tc39.es/ecma262/#sec-string.prototype.padend)
    fn pad_end(agent: &mut Agent, this_value: Value, args: ArgumentsList) -> JsResult<Value> {
        // 1. Let O be ? RequireObjectCoercible(this value).
        let o = require_object_coercible(agent, this_value)?;
        // 2. Return ? StringPad(O, maxLength, fillString, end).
        string_pad(agent, o, args.get(0), args.get(1), PadPlacement::End)
    }

    /// ### [22.1.3.16 String.prototype.padStart ( maxLength \[ , fillString \] )](https://tc39.es/ecma262/#sec-string.prototype.padstart)
    fn pad_start(agent: &mut Agent, this_value: Value, args: ArgumentsList) -> JsResult<Value> {
        // 1. Let O be ? RequireObjectCoercible(this value).
        let o = require_object_coercible(agent, this_value)?;
        // 2. Return ? StringPad(O, maxLength, fillString, start).
        string_pad(agent, o, args.get(0), args.get(1), PadPlacement::Start)
    }

    /// ### [22.1.3.17 String.prototype.repeat ( count )](https://tc39.es/ecma262/#sec-string.prototype.repeat)
    fn repeat(agent: &mut Agent, this_value: Value, args: ArgumentsList) -> JsResult<Value> {
        // 1. Let O be ? RequireObjectCoercible(this value).
        let o = require_object_coercible(agent, this_value)?;
        // 2. Let S be ? ToString(O).
        let s = to_string(agent, o)?;
        // 3. Let n be ? ToIntegerOrInfinity(count).
        let n = to_integer_or_infinity(agent, args.get(0))?;
        // 4. If n < 0 or n = +∞, throw a RangeError exception.
        if n < 0.0 {
            return Err(agent.throw_exception_with_static_message(
                ExceptionType::RangeError,
                "repeat count must be positive",
            ));
        }
        if n == f64::INFINITY {
            return Err(agent.throw_exception_with_static_message(
                ExceptionType::RangeError,
                "repeat count must be finite",
            ));
        }
        // 5. If n = 0, return the empty String.
        if n == 0.0 || s.is_empty_string(agent) {
            return Ok(String::EMPTY_STRING.into_value());
        }
        // 6. Return the String value made from n copies of S.
        let result = s.as_str(agent).repeat(n as usize);
        Ok(Value::from_string(agent, result))
    }

    /// ### [22.1.3.18 String.prototype.replace ( searchValue, replaceValue )](https://tc39.es/ecma262/#sec-string.prototype.replace)
    ///
    /// Substitution patterns in the replacement string are not
    /// interpreted; the replacement is used literally.
    fn replace(agent: &mut Agent, this_value: Value, args: ArgumentsList) -> JsResult<Value> {
        // 1. Let O be ? RequireObjectCoercible(this value).
        let o = require_object_coercible(agent, this_value)?;
        let search_value = args.get(0);
        let replace_value = args.get(1);
        // 2. If searchValue is neither undefined nor null, then
        if !search_value.is_nullish() {
            // a. Let replacer be ? GetMethod(searchValue, %Symbol.replace%).
            let replacer = get_method_for_value(agent, search_value, WellKnownSymbolIndexes::Replace)?;
            // b. If replacer is not undefined, return
            //    ? Call(replacer, searchValue, « O, replaceValue »).
            if let Some(replacer) = replacer {
                return call_function(agent, replacer, search_value, Some(&[o, replace_value]));
            }
        }
        // 3. Let string be ? ToString(O).
        let s = to_string(agent, o)?;
        // 4. Let searchString be ? ToString(searchValue).
        let search = to_string(agent, search_value)?;
        // 6. Let position be StringIndexOf(string, searchString, 0).
        let byte_position = {
            let text = s.as_str(agent);
            text.find(search.as_str(agent))
        };
        // 7. If position is not-found, return string.
        let Some(byte_position) = byte_position else {
            return Ok(s.into_value());
        };
        // 5. Let functionalReplace be IsCallable(replaceValue).
        let replacement = if is_callable(replace_value) {
            // Let replacement be ? ToString(? Call(replaceValue, undefined,
            // « searchString, 𝔽(position), string »)).
            let position = s.as_str(agent)[..byte_position].chars().count();
            let result = call_function(
                agent,
                Function::try_from(replace_value).unwrap(),
                Value::Undefined,
                Some(&[
                    search.into_value(),
                    Value::from(position as u32),
                    s.into_value(),
                ]),
            )?;
            to_string(agent, result)?
        } else {
            // If functionalReplace is false, set replaceValue to
            // ? ToString(replaceValue).
            to_string(agent, replace_value)?
        };
        // 10.-11. Assemble preceding ++ replacement ++ following.
        let result = {
            let text = s.as_str(agent);
            let search_text = search.as_str(agent);
            format!(
                "{}{}{}",
                &text[..byte_position],
                replacement.as_str(agent),
                &text[byte_position + search_text.len()..]
            )
        };
        Ok(Value::from_string(agent, result))
    }

    /// ### [22.1.3.20 String.prototype.search ( regexp )](https://tc39.es/ecma262/#sec-string.prototype.search)
    fn search(agent: &mut Agent, this_value: Value, args: ArgumentsList) -> JsResult<Value> {
        // 1. Let O be ? RequireObjectCoercible(this value).
        let o = require_object_coercible(agent, this_value)?;
        let regexp = args.get(0);
        // 2. If regexp is neither undefined nor null, then
        if !regexp.is_nullish() {
            // a. Let searcher be ? GetMethod(regexp, %Symbol.search%).
            let searcher = get_method_for_value(agent, regexp, WellKnownSymbolIndexes::Search)?;
            // b. If searcher is not undefined, return ? Call(searcher, regexp, « O »).
            if let Some(searcher) = searcher {
                return call_function(agent, searcher, regexp, Some(&[o]));
            }
        }
        // 3. Let string be ? ToString(O).
        let s = to_string(agent, o)?;
        // 4. Let rx be ? RegExpCreate(regexp, undefined).
        let rx = reg_exp_create(agent, regexp, None)?;
        // 5. Return ? Invoke(rx, %Symbol.search%, « string »).
        invoke(
            agent,
            rx.into_value(),
            WellKnownSymbolIndexes::Search.to_property_key(),
            Some(&[s.into_value()]),
        )
    }

    /// ### [22.1.3.21 String.prototype.slice ( start, end )](https://tc39.es/ecma262/#sec-string.prototype.slice)
    fn slice(agent: &mut Agent, this_value: Value, args: ArgumentsList) -> JsResult<Value> {
        // 1. Let O be ? RequireObjectCoercible(this value).
        let o = require_object_coercible(agent, this_value)?;
        // 2. Let S be ? ToString(O).
        let s = to_string(agent, o)?;
        // 3. Let len be the length of S.
        let len = s.code_point_length(agent) as f64;
        // 4. Let intStart be ? ToIntegerOrInfinity(start).
        let int_start = to_integer_or_infinity(agent, args.get(0))?;
        // 5.-7. Resolve the start index against len.
        let from = if int_start == f64::NEG_INFINITY {
            0.0
        } else if int_start < 0.0 {
            (len + int_start).max(0.0)
        } else {
            int_start.min(len)
        };
        // 8. If end is undefined, let intEnd be len.
        let end = args.get(1);
        let int_end = if end.is_undefined() {
            len
        } else {
            to_integer_or_infinity(agent, end)?
        };
        // 9.-11. Resolve the end index against len.
        let to = if int_end == f64::NEG_INFINITY {
            0.0
        } else if int_end < 0.0 {
            (len + int_end).max(0.0)
        } else {
            int_end.min(len)
        };
        // 12. If from ≥ to, return the empty String.
        if from >= to {
            return Ok(String::EMPTY_STRING.into_value());
        }
        // 13. Return the substring of S from from to to.
        let result = {
            let text = s.as_str(agent);
            code_point_slice(text, from as usize, to as usize).to_owned()
        };
        Ok(Value::from_string(agent, result))
    }

    /// ### [22.1.3.22 String.prototype.split ( separator, limit )](https://tc39.es/ecma262/#sec-string.prototype.split)
    fn split(agent: &mut Agent, this_value: Value, args: ArgumentsList) -> JsResult<Value> {
        // 1. Let O be ? RequireObjectCoercible(this value).
        let o = require_object_coercible(agent, this_value)?;
        let separator = args.get(0);
        let limit = args.get(1);
        // 2. If separator is neither undefined nor null, then
        if !separator.is_nullish() {
            // a. Let splitter be ? GetMethod(separator, %Symbol.split%).
            let splitter = get_method_for_value(agent, separator, WellKnownSymbolIndexes::Split)?;
            // b. If splitter is not undefined, return
            //    ? Call(splitter, separator, « O, limit »).
            if let Some(splitter) = splitter {
                return call_function(agent, splitter, separator, Some(&[o, limit]));
            }
        }
        // 3. Let S be ? ToString(O).
        let s = to_string(agent, o)?;
        // 4. Let A be ! ArrayCreate(0).
        let array = Array::create(agent, 0);
        // 5.-6. Let lim be 2^32 - 1 if limit is undefined; else ℝ(? ToUint32(limit)).
        let lim = if limit.is_undefined() {
            u32::MAX
        } else {
            to_uint32(agent, limit)?
        };
        // 7. Let R be ? ToString(separator).
        let r = to_string(agent, separator)?;
        // 8. If lim = 0, return A.
        if lim == 0 {
            return Ok(array.into_value());
        }
        // 9. If separator is undefined, return an array holding S alone.
        if separator.is_undefined() {
            array.define_indexed(agent, 0, s.into_value());
            return Ok(array.into_value());
        }
        let s_len = s.len(agent);
        let r_len = r.len(agent);
        // 10. If S is empty: an array holding S, unless R is also empty.
        if s_len == 0 {
            if r_len > 0 {
                array.define_indexed(agent, 0, s.into_value());
            }
            return Ok(array.into_value());
        }
        // 11. If R is empty, split into one-code-point strings up to lim.
        if r_len == 0 {
            let pieces: Vec<char> = s.as_str(agent).chars().take(lim as usize).collect();
            for (index, ch) in pieces.into_iter().enumerate() {
                array.define_indexed(agent, index, String::from_code_point(ch).into_value());
            }
            return Ok(array.into_value());
        }
        // 12.-16. Scan with SplitMatch, advancing one code point on a miss
        // and restarting after the match on a hit.
        let mut segments: Vec<(usize, usize)> = Vec::new();
        {
            let text = s.as_str(agent);
            let needle = r.as_str(agent);
            let mut start = 0usize;
            let mut position = 0usize;
            let mut reached_limit = false;
            while position != text.len() {
                match split_match(text, position, needle) {
                    None => {
                        position += text[position..].chars().next().unwrap().len_utf8();
                    }
                    Some(match_end) => {
                        segments.push((start, position));
                        if segments.len() == lim as usize {
                            reached_limit = true;
                            break;
                        }
                        start = match_end;
                        position = start;
                    }
                }
            }
            // 17. Push the tail from the last match to the end of S.
            if !reached_limit {
                segments.push((start, text.len()));
            }
        }
        for (index, (from, to)) in segments.into_iter().enumerate() {
            let piece = s.as_str(agent)[from..to].to_owned();
            let piece = Value::from_string(agent, piece);
            array.define_indexed(agent, index, piece);
        }
        Ok(array.into_value())
    }

    /// ### [22.1.3.23 String.prototype.startsWith ( searchString \[ , position \] )](https://tc39.es/ecma262/#sec-string.prototype.startswith)
    fn starts_with(agent: &mut Agent, this_value: Value, args: ArgumentsList) -> JsResult<Value> {
        // 1. Let O be ? RequireObjectCoercible(this value).
        let o = require_object_coercible(agent, this_value)?;
        // 2. Let S be ? ToString(O).
        let s = to_string(agent, o)?;
        let search_value = args.get(0);
        // 3.-4. If searchString is a RegExp, throw a TypeError exception.
        if is_reg_exp(agent, search_value)? {
            return Err(agent.throw_exception_with_static_message(
                ExceptionType::TypeError,
                "searchString cannot be a RegExp",
            ));
        }
        // 5. Let searchStr be ? ToString(searchString).
        let search = to_string(agent, search_value)?;
        // 6.-8. Let start be the clamped position.
        let len = s.code_point_length(agent);
        let position = args.get(1);
        let start = if position.is_undefined() {
            0
        } else {
            let position = to_integer_or_infinity(agent, position)?;
            clamp_position(position, len)
        };
        let search_len = search.code_point_length(agent);
        // 10. If the search would run past the end of S, return false.
        if start + search_len > len {
            return Ok(Value::Boolean(false));
        }
        // 11. A zero-length search matches anywhere.
        if search_len == 0 {
            return Ok(Value::Boolean(true));
        }
        // 12. Return whether the substring at start begins with searchStr.
        let text = s.as_str(agent);
        let byte_start = byte_index_of_code_point(text, start).unwrap();
        Ok(Value::Boolean(
            text[byte_start..].starts_with(search.as_str(agent)),
        ))
    }

    /// ### [B.2.2.1 String.prototype.substr ( start, length )](https://tc39.es/ecma262/#sec-string.prototype.substr)
    fn substr(agent: &mut Agent, this_value: Value, args: ArgumentsList) -> JsResult<Value> {
        // 1. Let O be ? RequireObjectCoercible(this value).
        let o = require_object_coercible(agent, this_value)?;
        // 2. Let S be ? ToString(O).
        let s = to_string(agent, o)?;
        let size = s.code_point_length(agent) as f64;
        // 3. Let intStart be ? ToIntegerOrInfinity(start).
        let mut int_start = to_integer_or_infinity(agent, args.get(0))?;
        // 4.-5. -∞ becomes 0; negative counts back from the end.
        if int_start == f64::NEG_INFINITY {
            int_start = 0.0;
        } else if int_start < 0.0 {
            int_start = (size + int_start).max(0.0);
        }
        // 6.-7. Let intLength be size, or ? ToIntegerOrInfinity(length).
        let length = args.get(1);
        let int_length = if length.is_undefined() {
            size
        } else {
            to_integer_or_infinity(agent, length)?
        };
        // 8. If intStart = +∞, intLength ≤ 0, or intLength = +∞, return "".
        if int_start == f64::INFINITY || int_length <= 0.0 || int_length == f64::INFINITY {
            return Ok(String::EMPTY_STRING.into_value());
        }
        // 9. Let intEnd be min(intStart + intLength, size).
        let int_end = (int_start + int_length).min(size);
        // 10. If intStart ≥ intEnd, return the empty String.
        if int_start >= int_end {
            return Ok(String::EMPTY_STRING.into_value());
        }
        // 11. Return the substring of S from intStart to intEnd.
        let result = {
            let text = s.as_str(agent);
            code_point_slice(text, int_start as usize, int_end as usize).to_owned()
        };
        Ok(Value::from_string(agent, result))
    }

    /// ### [22.1.3.24 String.prototype.substring ( start, end )](https://tc39.es/ecma262/#sec-string.prototype.substring)
    fn substring(agent: &mut Agent, this_value: Value, args: ArgumentsList) -> JsResult<Value> {
        // 1. Let O be ? RequireObjectCoercible(this value).
        let o = require_object_coercible(agent, this_value)?;
        // 2. Let S be ? ToString(O).
        let s = to_string(agent, o)?;
        // 3. Let len be the length of S.
        let len = s.code_point_length(agent) as f64;
        // 4. Let intStart be ? ToIntegerOrInfinity(start).
        let int_start = to_integer_or_infinity(agent, args.get(0))?;
        // 5. If end is undefined, let intEnd be len.
        let end = args.get(1);
        let int_end = if end.is_undefined() {
            len
        } else {
            to_integer_or_infinity(agent, end)?
        };
        // 6.-7. Clamp both into [0, len].
        let final_start = int_start.clamp(0.0, len);
        let final_end = int_end.clamp(0.0, len);
        // 8.-9. The bounds are used in order, swapping if necessary.
        let from = final_start.min(final_end) as usize;
        let to = final_start.max(final_end) as usize;
        if from == to {
            return Ok(String::EMPTY_STRING.into_value());
        }
        // 10. Return the substring of S from from to to.
        let result = {
            let text = s.as_str(agent);
            code_point_slice(text, from, to).to_owned()
        };
        Ok(Value::from_string(agent, result))
    }

    /// ### [22.1.3.27 String.prototype.toLowerCase ( )](https://tc39.es/ecma262/#sec-string.prototype.tolowercase)
    fn to_lower_case(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Let O be ? RequireObjectCoercible(this value).
        let o = require_object_coercible(agent, this_value)?;
        // 2. Let S be ? ToString(O).
        let s = to_string(agent, o)?;
        // 3.-4. Locale-independent per-code-point mapping.
        let result = s.as_str(agent).to_lowercase();
        Ok(Value::from_string(agent, result))
    }

    /// ### [22.1.3.29 String.prototype.toUpperCase ( )](https://tc39.es/ecma262/#sec-string.prototype.touppercase)
    fn to_upper_case(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Let O be ? RequireObjectCoercible(this value).
        let o = require_object_coercible(agent, this_value)?;
        // 2. Let S be ? ToString(O).
        let s = to_string(agent, o)?;
        let result = s.as_str(agent).to_uppercase();
        Ok(Value::from_string(agent, result))
    }

    /// ### [22.1.3.28 String.prototype.toString ( )](https://tc39.es/ecma262/#sec-string.prototype.tostring)
    fn to_string(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Return ? ThisStringValue(this value).
        this_string_value(agent, this_value).map(String::into_value)
    }

    /// ### [22.1.3.30 String.prototype.trim ( )](https://tc39.es/ecma262/#sec-string.prototype.trim)
    fn trim(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Let S be the this value.
        // 2. Return ? TrimString(S, start+end).
        trim_string(agent, this_value, TrimWhere::StartAndEnd)
    }

    /// ### [22.1.3.31 String.prototype.trimEnd ( )](https://tc39.es/ecma262/#sec-string.prototype.trimend)
    fn trim_end(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Let S be the this value.
        // 2. Return ? TrimString(S, end).
        trim_string(agent, this_value, TrimWhere::End)
    }

    /// ### [22.1.3.32 String.prototype.trimStart ( )](https://tc39.es/ecma262/#sec-string.prototype.trimstart)
    fn trim_start(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Let S be the this value.
        // 2. Return ? TrimString(S, start).
        trim_string(agent, this_value, TrimWhere::Start)
    }

    /// ### [22.1.3.33 String.prototype.valueOf ( )](https://tc39.es/ecma262/#sec-string.prototype.valueof)
    fn value_of(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Return ? ThisStringValue(this value).
        this_string_value(agent, this_value).map(String::into_value)
    }

    /// ### [22.1.3.35 String.prototype \[ %Symbol.iterator% \] ( )](https://tc39.es/ecma262/#sec-string.prototype-%symbol.iterator%)
    fn iterator(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Let O be ? RequireObjectCoercible(this value).
        let o = require_object_coercible(agent, this_value)?;
        // 2. Let s be ? ToString(O).
        let s = to_string(agent, o)?;
        // 3. Return CreateStringIterator(s).
        Ok(StringIterator::create(agent, s).into_value())
    }

    /// ### [B.2.2.2 String.prototype.anchor ( name )](https://tc39.es/ecma262/#sec-string.prototype.anchor)
    fn anchor(agent: &mut Agent, this_value: Value, args: ArgumentsList) -> JsResult<Value> {
        // 1. Let S be the this value.
        // 2. Return ? CreateHTML(S, "a", "name", name).
        create_html(agent, this_value, "a", Some(("name", args.get(0))))
    }

    /// ### [B.2.2.3 String.prototype.big ( )](https://tc39.es/ecma262/#sec-string.prototype.big)
    fn big(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 2. Return ? CreateHTML(S, "big", "", "").
        create_html(agent, this_value, "big", None)
    }

    /// ### [B.2.2.4 String.prototype.blink ( )](https://tc39.es/ecma262/#sec-string.prototype.blink)
    fn blink(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 2. Return ? CreateHTML(S, "blink", "", "").
        create_html(agent, this_value, "blink", None)
    }

    /// ### [B.2.2.5 String.prototype.bold ( )](https://tc39.es/ecma262/#sec-string.prototype.bold)
    fn bold(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 2. Return ? CreateHTML(S, "b", "", "").
        create_html(agent, this_value, "b", None)
    }

    /// ### [B.2.2.6 String.prototype.fixed ( )](https://tc39.es/ecma262/#sec-string.prototype.fixed)
    fn fixed(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 2. Return ? CreateHTML(S, "tt", "", "").
        create_html(agent, this_value, "tt", None)
    }

    /// ### [B.2.2.7 String.prototype.fontcolor ( color )](https://tc39.es/ecma262/#sec-string.prototype.fontcolor)
    fn fontcolor(agent: &mut Agent, this_value: Value, args: ArgumentsList) -> JsResult<Value> {
        // 2. Return ? CreateHTML(S, "font", "color", color).
        create_html(agent, this_value, "font", Some(("color", args.get(0))))
    }

    /// ### [B.2.2.8 String.prototype.fontsize ( size )](https://tc39.es/ecma262/#sec-string.prototype.fontsize)
    fn fontsize(agent: &mut Agent, this_value: Value, args: ArgumentsList) -> JsResult<Value> {
        // 2. Return ? CreateHTML(S, "font", "size", size).
        create_html(agent, this_value, "font", Some(("size", args.get(0))))
    }

    /// ### [B.2.2.9 String.prototype.italics ( )](https://tc39.es/ecma262/#sec-string.prototype.italics)
    fn italics(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 2. Return ? CreateHTML(S, "i", "", "").
        create_html(agent, this_value, "i", None)
    }

    /// ### [B.2.2.10 String.prototype.link ( url )](https://tc39.es/ecma262/#sec-string.prototype.link)
    fn link(agent: &mut Agent, this_value: Value, args: ArgumentsList) -> JsResult<Value> {
        // 2. Return ? CreateHTML(S, "a", "href", url).
        create_html(agent, this_value, "a", Some(("href", args.get(0))))
    }

    /// ### [B.2.2.11 String.prototype.small ( )](https://tc39.es/ecma262/#sec-string.prototype.small)
    fn small(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 2. Return ? CreateHTML(S, "small", "", "").
        create_html(agent, this_value, "small", None)
    }

    /// ### [B.2.2.12 String.prototype.strike ( )](https://tc39.es/ecma262/#sec-string.prototype.strike)
    fn strike(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 2. Return ? CreateHTML(S, "strike", "", "").
        create_html(agent, this_value, "strike", None)
    }

    /// ### [B.2.2.13 String.prototype.sub ( )](https://tc39.es/ecma262/#sec-string.prototype.sub)
    fn sub(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 2. Return ? CreateHTML(S, "sub", "", "").
        create_html(agent, this_value, "sub", None)
    }

    /// ### [B.2.2.14 String.prototype.sup ( )](https://tc39.es/ecma262/#sec-string.prototype.sup)
    fn sup(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 2. Return ? CreateHTML(S, "sup", "", "").
        create_html(agent, this_value, "sup", None)
    }

    pub(crate) fn create_intrinsic(
        agent: &mut Agent,
        realm: RealmIdentifier,
        constructor: BuiltinFunction,
        this: PrimitiveObject,
    ) {
        let object_prototype = agent[realm].intrinsics.object_prototype();
        // trimLeft and trimRight alias the trimStart and trimEnd function
        // objects installed here.
        let trim_start_function = BuiltinFunctionBuilder::new::<StringPrototypeTrimStart>(agent).build();
        let trim_end_function = BuiltinFunctionBuilder::new::<StringPrototypeTrimEnd>(agent).build();

        let backing = OrdinaryObjectBuilder::new(agent)
            .with_prototype(object_prototype.into())
            .with_property_capacity(45)
            .with_builtin_function_property::<StringPrototypeAt>()
            .with_builtin_function_property::<StringPrototypeCharAt>()
            .with_builtin_function_property::<StringPrototypeCharCodeAt>()
            .with_builtin_function_property::<StringPrototypeCodePointAt>()
            .with_builtin_function_property::<StringPrototypeConcat>()
            .with_constructor_property(constructor)
            .with_builtin_function_property::<StringPrototypeEndsWith>()
            .with_builtin_function_property::<StringPrototypeIncludes>()
            .with_builtin_function_property::<StringPrototypeIndexOf>()
            .with_builtin_function_property::<StringPrototypeLastIndexOf>()
            .with_builtin_function_property::<StringPrototypeMatch>()
            .with_builtin_function_property::<StringPrototypeMatchAll>()
            .with_builtin_function_property::<StringPrototypePadEnd>()
            .with_builtin_function_property::<StringPrototypePadStart>()
            .with_builtin_function_property::<StringPrototypeRepeat>()
            .with_builtin_function_property::<StringPrototypeReplace>()
            .with_builtin_function_property::<StringPrototypeSearch>()
            .with_builtin_function_property::<StringPrototypeSlice>()
            .with_builtin_function_property::<StringPrototypeSplit>()
            .with_builtin_function_property::<StringPrototypeStartsWith>()
            .with_builtin_function_property::<StringPrototypeSubstr>()
            .with_builtin_function_property::<StringPrototypeSubstring>()
            .with_builtin_function_property::<StringPrototypeToLowerCase>()
            .with_builtin_function_property::<StringPrototypeToString>()
            .with_builtin_function_property::<StringPrototypeToUpperCase>()
            .with_builtin_function_property::<StringPrototypeTrim>()
            .with_property(|builder| {
                builder
                    .with_key(BUILTIN_STRING_MEMORY.trimStart.to_property_key())
                    .with_value(trim_start_function.into_value())
                    .with_enumerable(false)
                    .with_configurable(true)
                    .build()
            })
            .with_property(|builder| {
                builder
                    .with_key(BUILTIN_STRING_MEMORY.trimEnd.to_property_key())
                    .with_value(trim_end_function.into_value())
                    .with_enumerable(false)
                    .with_configurable(true)
                    .build()
            })
            .with_property(|builder| {
                builder
                    .with_key(BUILTIN_STRING_MEMORY.trimLeft.to_property_key())
                    .with_value(trim_start_function.into_value())
                    .with_enumerable(false)
                    .with_configurable(true)
                    .build()
            })
            .with_property(|builder| {
                builder
                    .with_key(BUILTIN_STRING_MEMORY.trimRight.to_property_key())
                    .with_value(trim_end_function.into_value())
                    .with_enumerable(false)
                    .with_configurable(true)
                    .build()
            })
            .with_builtin_function_property::<StringPrototypeValueOf>()
            .with_builtin_function_property::<StringPrototypeIterator>()
            .with_builtin_function_property::<StringPrototypeAnchor>()
            .with_builtin_function_property::<StringPrototypeBig>()
            .with_builtin_function_property::<StringPrototypeBlink>()
            .with_builtin_function_property::<StringPrototypeBold>()
            .with_builtin_function_property::<StringPrototypeFixed>()
            .with_builtin_function_property::<StringPrototypeFontcolor>()
            .with_builtin_function_property::<StringPrototypeFontsize>()
            .with_builtin_function_property::<StringPrototypeItalics>()
            .with_builtin_function_property::<StringPrototypeLink>()
            .with_builtin_function_property::<StringPrototypeSmall>()
            .with_builtin_function_property::<StringPrototypeStrike>()
            .with_builtin_function_property::<StringPrototypeSub>()
            .with_builtin_function_property::<StringPrototypeSup>()
            .build();

        // %String.prototype% is itself a String object wrapping the empty
        // String; point its ordinary-object half at the methods built above.
        agent[this].object_index = Some(backing);
    }
}

/// The `thisStringValue` abstract operation of `toString` and `valueOf`.
fn this_string_value(agent: &mut Agent, value: Value) -> JsResult<String> {
    match value {
        Value::String(s) => Ok(String::String(s)),
        Value::SmallString(s) => Ok(String::SmallString(s)),
        Value::PrimitiveObject(object) => {
            if let Some(string) = object.string_data(agent) {
                Ok(string)
            } else {
                Err(agent.throw_exception_with_static_message(
                    ExceptionType::TypeError,
                    "Not a String object",
                ))
            }
        }
        _ => Err(agent.throw_exception_with_static_message(
            ExceptionType::TypeError,
            "Not a String object",
        )),
    }
}

/// GetMethod over an arbitrary value, resolving well-known symbol keyed
/// protocol hooks before any other observation of the argument.
fn get_method_for_value(
    agent: &mut Agent,
    value: Value,
    symbol: WellKnownSymbolIndexes,
) -> JsResult<Option<Function>> {
    crate::ecmascript::abstract_operations::operations_on_objects::get_method(
        agent,
        value,
        symbol.to_property_key(),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PadPlacement {
    Start,
    End,
}

/// ### [22.1.3.16.1 StringPad ( O, maxLength, fillString, placement )](https://tc39.es/ecma262/#sec-stringpad)
fn string_pad(
    agent: &mut Agent,
    o: Value,
    max_length: Value,
    fill_string: Value,
    placement: PadPlacement,
) -> JsResult<Value> {
    // 1. Let S be ? ToString(O).
    let s = to_string(agent, o)?;
    // 2. Let intMaxLength be ℝ(? ToLength(maxLength)).
    let int_max_length = to_length(agent, max_length)? as usize;
    // 3. Let stringLength be the length of S.
    let string_length = s.code_point_length(agent);
    // 4. If intMaxLength ≤ stringLength, return S.
    if int_max_length <= string_length {
        return Ok(s.into_value());
    }
    // 5.-6. Let filler be " ", or ? ToString(fillString).
    let filler = if fill_string.is_undefined() {
        String::from_small_string(" ")
    } else {
        to_string(agent, fill_string)?
    };
    // 7. If filler is the empty String, return S.
    if filler.is_empty_string(agent) {
        return Ok(s.into_value());
    }
    // 8. Let fillLen be intMaxLength - stringLength.
    let fill_len = int_max_length - string_length;
    // 9. Tile filler to exactly fillLen code points.
    let tiled: std::string::String = filler.as_str(agent).chars().cycle().take(fill_len).collect();
    let result = {
        let text = s.as_str(agent);
        match placement {
            PadPlacement::Start => format!("{}{}", tiled, text),
            PadPlacement::End => format!("{}{}", text, tiled),
        }
    };
    Ok(Value::from_string(agent, result))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrimWhere {
    Start,
    End,
    StartAndEnd,
}

/// ### [22.1.3.30.1 TrimString ( string, where )](https://tc39.es/ecma262/#sec-trimstring)
fn trim_string(agent: &mut Agent, value: Value, trim_where: TrimWhere) -> JsResult<Value> {
    // 1. Let str be ? RequireObjectCoercible(string).
    let value = require_object_coercible(agent, value)?;
    // 2. Let S be ? ToString(str).
    let s = to_string(agent, value)?;
    let text = s.as_str(agent);
    let trimmed = match trim_where {
        // 3. If where is start, remove leading white space.
        TrimWhere::Start => text.trim_start_matches(is_trimmable_whitespace),
        // 4. If where is end, remove trailing white space.
        TrimWhere::End => text.trim_end_matches(is_trimmable_whitespace),
        // 5. Otherwise remove both.
        TrimWhere::StartAndEnd => text
            .trim_start_matches(is_trimmable_whitespace)
            .trim_end_matches(is_trimmable_whitespace),
    };
    if trimmed.len() == text.len() {
        return Ok(s.into_value());
    }
    let trimmed = trimmed.to_owned();
    Ok(Value::from_string(agent, trimmed))
}

/// The WhiteSpace and LineTerminator productions, over code points.
pub(crate) fn is_trimmable_whitespace(ch: char) -> bool {
    matches!(
        ch,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// ### [22.1.3.22.1 SplitMatch ( S, q, R )](https://tc39.es/ecma262/#sec-splitmatch)
///
/// If `needle` occurs in `haystack` at byte position `start`, the byte
/// position one past the match; otherwise not-matched.
fn split_match(haystack: &str, start: usize, needle: &str) -> Option<usize> {
    if start + needle.len() > haystack.len() {
        return None;
    }
    if !haystack[start..].starts_with(needle) {
        return None;
    }
    Some(start + needle.len())
}

/// The substring between code point positions `start` and `end`.
fn code_point_slice(text: &str, start: usize, end: usize) -> &str {
    let byte_start = byte_index_of_code_point(text, start).unwrap_or(text.len());
    let byte_end = byte_index_of_code_point(text, end).unwrap_or(text.len());
    &text[byte_start..byte_end]
}

/// Clamp a position between 0 and `length`, in code points.
fn clamp_position(position: f64, length: usize) -> usize {
    position.clamp(0.0, length as f64) as usize
}

/// ### [B.2.2.2.1 CreateHTML ( string, tag, attribute, value )](https://tc39.es/ecma262/#sec-createhtml)
fn create_html(
    agent: &mut Agent,
    string: Value,
    tag: &str,
    attribute_and_value: Option<(&str, Value)>,
) -> JsResult<Value> {
    // 1. Let str be ? RequireObjectCoercible(string).
    let string = require_object_coercible(agent, string)?;
    // 2. Let S be ? ToString(str).
    let s = to_string(agent, string)?;
    // 3.-4. Open the tag, quoting the attribute value with "&quot;".
    let mut opening = format!("<{}", tag);
    if let Some((attribute, value)) = attribute_and_value {
        let value = to_string(agent, value)?;
        let escaped = value.as_str(agent).replace('"', "&quot;");
        opening.push(' ');
        opening.push_str(attribute);
        opening.push_str("=\"");
        opening.push_str(&escaped);
        opening.push('"');
    }
    // 5.-9. Append the content and the closing tag.
    let result = format!("{}>{}</{}>", opening, s.as_str(agent), tag);
    Ok(Value::from_string(agent, result))
}
