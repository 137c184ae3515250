// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod common;

use common::{
    agent_with_realm, as_bool, as_number, as_string, call_method, run_method, string_value,
};
use vela_vm::ecmascript::abstract_operations::operations_on_objects::{call, get, get_v};
use vela_vm::ecmascript::builtins::array::Array;
use vela_vm::ecmascript::types::{IntoValue, String};
use vela_vm::heap::WellKnownSymbolIndexes;
use vela_vm::{ExceptionType, PropertyKey, Value};

#[test]
fn char_at_and_char_code_at() {
    let mut agent = agent_with_realm();
    let result = run_method(&mut agent, "abc", "charAt", &[Value::Number(1.0)]);
    assert_eq!(as_string(&agent, result), "b");

    // Out-of-range positions give the empty string and NaN respectively.
    let result = run_method(&mut agent, "abc", "charAt", &[Value::Number(5.0)]);
    assert_eq!(as_string(&agent, result), "");
    let result = run_method(&mut agent, "abc", "charAt", &[Value::Number(-1.0)]);
    assert_eq!(as_string(&agent, result), "");
    let result = run_method(&mut agent, "abc", "charCodeAt", &[Value::Number(0.0)]);
    assert_eq!(as_number(result), 'a' as u32 as f64);
    let result = run_method(&mut agent, "abc", "charCodeAt", &[Value::Number(9.0)]);
    assert!(as_number(result).is_nan());

    // Every in-range position agrees with the one-code-point substring.
    for (index, ch) in "vela".chars().enumerate() {
        let result = run_method(&mut agent, "vela", "charAt", &[Value::Number(index as f64)]);
        assert_eq!(as_string(&agent, result), ch.to_string());
        let result = run_method(
            &mut agent,
            "vela",
            "charCodeAt",
            &[Value::Number(index as f64)],
        );
        assert_eq!(as_number(result), ch as u32 as f64);
    }
}

#[test]
fn code_point_at_and_non_ascii() {
    let mut agent = agent_with_realm();
    let result = run_method(&mut agent, "a😀b", "codePointAt", &[Value::Number(1.0)]);
    assert_eq!(as_number(result), 0x1F600 as f64);
    let result = run_method(&mut agent, "a😀b", "charAt", &[Value::Number(2.0)]);
    assert_eq!(as_string(&agent, result), "b");
    let result = run_method(&mut agent, "ab", "codePointAt", &[Value::Number(2.0)]);
    assert!(result.is_undefined());
}

#[test]
fn at_agrees_with_char_at() {
    let mut agent = agent_with_realm();
    for index in 0..4 {
        let via_at = run_method(&mut agent, "vela", "at", &[Value::Number(index as f64)]);
        let via_char_at = run_method(&mut agent, "vela", "charAt", &[Value::Number(index as f64)]);
        assert_eq!(
            as_string(&agent, via_at),
            as_string(&agent, via_char_at),
            "mismatch at index {index}"
        );
    }
    // Negative indexes count from the end.
    let result = run_method(&mut agent, "vela", "at", &[Value::Number(-1.0)]);
    assert_eq!(as_string(&agent, result), "a");
    let result = run_method(&mut agent, "vela", "at", &[Value::Number(-5.0)]);
    assert!(result.is_undefined());
    let result = run_method(&mut agent, "vela", "at", &[Value::Number(4.0)]);
    assert!(result.is_undefined());
    let result = run_method(&mut agent, "vela", "at", &[Value::Number(f64::INFINITY)]);
    assert!(result.is_undefined());
}

#[test]
fn index_of_and_last_index_of() {
    let mut agent = agent_with_realm();
    let needle = string_value(&mut agent, "l");
    let result = run_method(&mut agent, "hello", "indexOf", &[needle]);
    assert_eq!(as_number(result), 2.0);

    let needle = string_value(&mut agent, "l");
    let result = run_method(&mut agent, "hello", "indexOf", &[needle, Value::Number(3.0)]);
    assert_eq!(as_number(result), 3.0);

    let needle = string_value(&mut agent, "x");
    let result = run_method(&mut agent, "hello", "indexOf", &[needle]);
    assert_eq!(as_number(result), -1.0);

    let needle = string_value(&mut agent, "l");
    let result = run_method(&mut agent, "hello", "lastIndexOf", &[needle]);
    assert_eq!(as_number(result), 3.0);

    // A NaN position defaults to the maximum index.
    let needle = string_value(&mut agent, "l");
    let result = run_method(&mut agent, "hello", "lastIndexOf", &[needle, Value::nan()]);
    assert_eq!(as_number(result), 3.0);

    let needle = string_value(&mut agent, "l");
    let result = run_method(
        &mut agent,
        "hello",
        "lastIndexOf",
        &[needle, Value::Number(2.0)],
    );
    assert_eq!(as_number(result), 2.0);

    // A search string longer than the receiver cannot match.
    let needle = string_value(&mut agent, "too long to match");
    let result = run_method(&mut agent, "hi", "lastIndexOf", &[needle]);
    assert_eq!(as_number(result), -1.0);
}

#[test]
fn includes_starts_with_ends_with() {
    let mut agent = agent_with_realm();
    let needle = string_value(&mut agent, "ell");
    let result = run_method(&mut agent, "hello", "includes", &[needle]);
    assert!(as_bool(result));

    let needle = string_value(&mut agent, "ell");
    let result = run_method(&mut agent, "hello", "includes", &[needle, Value::Number(2.0)]);
    assert!(!as_bool(result));

    let needle = string_value(&mut agent, "he");
    let result = run_method(&mut agent, "hello", "startsWith", &[needle]);
    assert!(as_bool(result));

    let needle = string_value(&mut agent, "lo");
    let result = run_method(&mut agent, "hello", "endsWith", &[needle]);
    assert!(as_bool(result));

    let needle = string_value(&mut agent, "he");
    let result = run_method(
        &mut agent,
        "hello",
        "endsWith",
        &[needle, Value::Number(2.0)],
    );
    assert!(as_bool(result));

    // Zero-length searches always match.
    let needle = string_value(&mut agent, "");
    let result = run_method(&mut agent, "hello", "startsWith", &[needle]);
    assert!(as_bool(result));
    let needle = string_value(&mut agent, "");
    let result = run_method(&mut agent, "hello", "endsWith", &[needle]);
    assert!(as_bool(result));
}

#[test]
fn starts_with_agrees_with_slice() {
    let mut agent = agent_with_realm();
    for prefix in ["", "v", "ve", "vela", "velaX"] {
        let needle = string_value(&mut agent, prefix);
        let starts = run_method(&mut agent, "vela", "startsWith", &[needle]);
        let sliced = run_method(
            &mut agent,
            "vela",
            "slice",
            &[Value::Number(0.0), Value::Number(prefix.len() as f64)],
        );
        assert_eq!(
            as_bool(starts),
            as_string(&agent, sliced) == prefix,
            "mismatch for prefix {prefix:?}"
        );
    }
}

#[test]
fn slice_substring_substr() {
    let mut agent = agent_with_realm();
    let result = run_method(&mut agent, "abcdef", "slice", &[Value::Number(-2.0)]);
    assert_eq!(as_string(&agent, result), "ef");

    let result = run_method(
        &mut agent,
        "abcdef",
        "slice",
        &[Value::Number(1.0), Value::Number(-1.0)],
    );
    assert_eq!(as_string(&agent, result), "bcde");

    let result = run_method(
        &mut agent,
        "abcdef",
        "slice",
        &[Value::Number(f64::NEG_INFINITY), Value::Number(f64::INFINITY)],
    );
    assert_eq!(as_string(&agent, result), "abcdef");

    // substring swaps its bounds when start > end.
    let result = run_method(
        &mut agent,
        "abcdef",
        "substring",
        &[Value::Number(4.0), Value::Number(1.0)],
    );
    assert_eq!(as_string(&agent, result), "bcd");

    let result = run_method(
        &mut agent,
        "abcdef",
        "substring",
        &[Value::nan(), Value::Number(3.0)],
    );
    assert_eq!(as_string(&agent, result), "abc");

    let result = run_method(
        &mut agent,
        "abcdef",
        "substr",
        &[Value::Number(-2.0), Value::Number(1.0)],
    );
    assert_eq!(as_string(&agent, result), "e");

    let result = run_method(&mut agent, "abcdef", "substr", &[Value::Number(2.0)]);
    assert_eq!(as_string(&agent, result), "cdef");

    let result = run_method(
        &mut agent,
        "abcdef",
        "substr",
        &[Value::Number(1.0), Value::Number(f64::INFINITY)],
    );
    assert_eq!(as_string(&agent, result), "");
}

#[test]
fn concat_appends_coerced_arguments() {
    let mut agent = agent_with_realm();
    let part = string_value(&mut agent, " bar");
    let result = run_method(&mut agent, "foo", "concat", &[part, Value::Number(7.0)]);
    assert_eq!(as_string(&agent, result), "foo bar7");
}

#[test]
fn repeat() {
    let mut agent = agent_with_realm();
    let result = run_method(&mut agent, "ab", "repeat", &[Value::Number(3.0)]);
    assert_eq!(as_string(&agent, result), "ababab");

    let result = run_method(&mut agent, "abc", "repeat", &[Value::Number(0.0)]);
    assert_eq!(as_string(&agent, result), "");

    // s.repeat(n).length == s.length * n for a few n.
    for n in 0..5 {
        let result = run_method(&mut agent, "xyz", "repeat", &[Value::Number(n as f64)]);
        let repeated = String::try_from(result).unwrap();
        assert_eq!(repeated.code_point_length(&agent), 3 * n);
    }

    let receiver = string_value(&mut agent, "abc");
    let error = call_method(&mut agent, receiver, "repeat", &[Value::Number(-1.0)]).unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::RangeError));

    let error = call_method(
        &mut agent,
        receiver,
        "repeat",
        &[Value::Number(f64::INFINITY)],
    )
    .unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::RangeError));
}

#[test]
fn trim_family() {
    let mut agent = agent_with_realm();
    let result = run_method(&mut agent, "  hi  ", "trim", &[]);
    assert_eq!(as_string(&agent, result), "hi");
    let result = run_method(&mut agent, "  hi  ", "trimStart", &[]);
    assert_eq!(as_string(&agent, result), "hi  ");
    let result = run_method(&mut agent, "  hi  ", "trimEnd", &[]);
    assert_eq!(as_string(&agent, result), "  hi");

    // The annex B aliases are the same functions.
    let result = run_method(&mut agent, "  hi  ", "trimLeft", &[]);
    assert_eq!(as_string(&agent, result), "hi  ");
    let result = run_method(&mut agent, "  hi  ", "trimRight", &[]);
    assert_eq!(as_string(&agent, result), "  hi");

    // The full whitespace set, including NBSP, BOM and the line separators.
    let result = run_method(&mut agent, "\u{A0}\u{FEFF}\u{2028}x\u{3000}\t\n", "trim", &[]);
    assert_eq!(as_string(&agent, result), "x");

    // Idempotence.
    let once = run_method(&mut agent, " a b ", "trim", &[]);
    let twice = call_method(&mut agent, once, "trim", &[]).unwrap();
    assert_eq!(as_string(&agent, once), as_string(&agent, twice));
}

#[test]
fn pad_start_and_pad_end() {
    let mut agent = agent_with_realm();
    let fill = string_value(&mut agent, "12");
    let result = run_method(&mut agent, "abc", "padStart", &[Value::Number(6.0), fill]);
    assert_eq!(as_string(&agent, result), "121abc");

    let fill = string_value(&mut agent, "12");
    let result = run_method(&mut agent, "abc", "padEnd", &[Value::Number(6.0), fill]);
    assert_eq!(as_string(&agent, result), "abc121");

    // Default filler is a space.
    let result = run_method(&mut agent, "abc", "padStart", &[Value::Number(5.0)]);
    assert_eq!(as_string(&agent, result), "  abc");

    // Too-small targets and empty fillers return the string unchanged.
    let result = run_method(&mut agent, "abc", "padStart", &[Value::Number(2.0)]);
    assert_eq!(as_string(&agent, result), "abc");
    let fill = string_value(&mut agent, "");
    let result = run_method(&mut agent, "abc", "padStart", &[Value::Number(6.0), fill]);
    assert_eq!(as_string(&agent, result), "abc");
}

#[test]
fn case_mapping() {
    let mut agent = agent_with_realm();
    let result = run_method(&mut agent, "AbC", "toLowerCase", &[]);
    assert_eq!(as_string(&agent, result), "abc");
    let result = run_method(&mut agent, "AbC", "toUpperCase", &[]);
    assert_eq!(as_string(&agent, result), "ABC");

    // Idempotence.
    let once = run_method(&mut agent, "MiXeD", "toLowerCase", &[]);
    let twice = call_method(&mut agent, once, "toLowerCase", &[]).unwrap();
    assert_eq!(as_string(&agent, once), as_string(&agent, twice));
}

fn split_parts(agent: &mut vela_vm::Agent, receiver: &str, args: &[Value]) -> Vec<std::string::String> {
    let result = run_method(agent, receiver, "split", args);
    let array = Array::try_from(result).unwrap();
    (0..array.len(agent))
        .map(|index| {
            let element = array.get_element(agent, index as usize).unwrap();
            as_string(agent, element)
        })
        .collect()
}

#[test]
fn split() {
    let mut agent = agent_with_realm();
    let comma = string_value(&mut agent, ",");
    assert_eq!(split_parts(&mut agent, "a,b,,c", &[comma]), ["a", "b", "", "c"]);

    let empty = string_value(&mut agent, "");
    assert_eq!(split_parts(&mut agent, "abc", &[empty]), ["a", "b", "c"]);

    let comma = string_value(&mut agent, ",");
    assert_eq!(split_parts(&mut agent, "abc", &[comma]), ["abc"]);

    let comma = string_value(&mut agent, ",");
    assert_eq!(split_parts(&mut agent, "", &[comma]), [""]);

    let empty = string_value(&mut agent, "");
    assert!(split_parts(&mut agent, "", &[empty]).is_empty());

    // No separator: the array holds the whole string.
    assert_eq!(split_parts(&mut agent, "a,b", &[]), ["a,b"]);

    // Limit truncates the result.
    let comma = string_value(&mut agent, ",");
    assert_eq!(
        split_parts(&mut agent, "a,b,c", &[comma, Value::Number(2.0)]),
        ["a", "b"]
    );
    let comma = string_value(&mut agent, ",");
    assert!(split_parts(&mut agent, "a,b", &[comma, Value::Number(0.0)]).is_empty());

    // Reassembling the code point split restores the string.
    let empty = string_value(&mut agent, "");
    let parts = split_parts(&mut agent, "vela vm", &[empty]);
    assert_eq!(parts.concat(), "vela vm");
}

#[test]
fn replace() {
    let mut agent = agent_with_realm();
    let search = string_value(&mut agent, "bar");
    let replacement = string_value(&mut agent, "baz");
    let result = run_method(&mut agent, "foo bar bar", "replace", &[search, replacement]);
    // Only the first occurrence is replaced.
    assert_eq!(as_string(&agent, result), "foo baz bar");

    // No occurrence leaves the string untouched.
    let search = string_value(&mut agent, "nope");
    let replacement = string_value(&mut agent, "x");
    let result = run_method(&mut agent, "foo", "replace", &[search, replacement]);
    assert_eq!(as_string(&agent, result), "foo");
}

#[test]
fn replace_with_functional_replacer() {
    use vela_vm::{create_builtin_function, Agent, ArgumentsList, Behaviour, JsResult};

    fn upper(agent: &mut Agent, _this: Value, args: ArgumentsList) -> JsResult<Value> {
        // The replacer receives (matched, position, string).
        assert_eq!(as_number(args.get(1)), 4.0);
        call_method(agent, args.get(0), "toUpperCase", &[])
    }

    let mut agent = agent_with_realm();
    let name = String::from_str(&mut agent, "upper");
    let replacer = create_builtin_function(&mut agent, Behaviour::Regular(upper), 2, name);
    let search = string_value(&mut agent, "bar");
    let result = run_method(
        &mut agent,
        "foo bar",
        "replace",
        &[search, replacer.into_value()],
    );
    assert_eq!(as_string(&agent, result), "foo BAR");
}

#[test]
fn html_wrappers() {
    let mut agent = agent_with_realm();
    let name = string_value(&mut agent, "x");
    let result = run_method(&mut agent, "ab", "anchor", &[name]);
    assert_eq!(as_string(&agent, result), "<a name=\"x\">ab</a>");

    // Double quotes in the attribute value are escaped, globally.
    let color = string_value(&mut agent, "\"");
    let result = run_method(&mut agent, "a\"b", "fontcolor", &[color]);
    assert_eq!(as_string(&agent, result), "<font color=\"&quot;\">a\"b</font>");

    let result = run_method(&mut agent, "hi", "big", &[]);
    assert_eq!(as_string(&agent, result), "<big>hi</big>");
    let result = run_method(&mut agent, "hi", "bold", &[]);
    assert_eq!(as_string(&agent, result), "<b>hi</b>");
    let result = run_method(&mut agent, "hi", "fixed", &[]);
    assert_eq!(as_string(&agent, result), "<tt>hi</tt>");
    let url = string_value(&mut agent, "https://example.com");
    let result = run_method(&mut agent, "hi", "link", &[url]);
    assert_eq!(
        as_string(&agent, result),
        "<a href=\"https://example.com\">hi</a>"
    );
    let size = Value::Number(7.0);
    let result = run_method(&mut agent, "hi", "fontsize", &[size]);
    assert_eq!(as_string(&agent, result), "<font size=\"7\">hi</font>");
    let result = run_method(&mut agent, "hi", "sub", &[]);
    assert_eq!(as_string(&agent, result), "<sub>hi</sub>");
    let result = run_method(&mut agent, "hi", "sup", &[]);
    assert_eq!(as_string(&agent, result), "<sup>hi</sup>");
    let result = run_method(&mut agent, "hi", "strike", &[]);
    assert_eq!(as_string(&agent, result), "<strike>hi</strike>");
    let result = run_method(&mut agent, "hi", "italics", &[]);
    assert_eq!(as_string(&agent, result), "<i>hi</i>");
    let result = run_method(&mut agent, "hi", "blink", &[]);
    assert_eq!(as_string(&agent, result), "<blink>hi</blink>");
    let result = run_method(&mut agent, "hi", "small", &[]);
    assert_eq!(as_string(&agent, result), "<small>hi</small>");
}

#[test]
fn nullish_receivers_are_rejected() {
    let mut agent = agent_with_realm();
    // The method must be fetched from the prototype directly, since GetV
    // on a nullish receiver already throws.
    let realm = agent.current_realm_id();
    let prototype = agent[realm].intrinsics().string_prototype();
    let key = PropertyKey::from_str(&mut agent, "trim");
    let method = get(&mut agent, prototype.into(), key).unwrap();
    let error = call(&mut agent, method, Value::Undefined, None).unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));

    let error = call(&mut agent, method, Value::Null, None).unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
}

#[test]
fn to_string_and_value_of_require_string_receivers() {
    let mut agent = agent_with_realm();
    let result = run_method(&mut agent, "plain", "toString", &[]);
    assert_eq!(as_string(&agent, result), "plain");
    let result = run_method(&mut agent, "plain", "valueOf", &[]);
    assert_eq!(as_string(&agent, result), "plain");

    let receiver = Value::Number(5.0);
    let error = call_method(&mut agent, receiver, "toString", &[]).unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
}

#[test]
fn string_iterator_walks_code_points() {
    let mut agent = agent_with_realm();
    let receiver = string_value(&mut agent, "a😀b");
    let key = WellKnownSymbolIndexes::Iterator.to_property_key();
    let method = get_v(&mut agent, receiver, key).unwrap();
    let iterator = call(&mut agent, method, receiver, None).unwrap();

    let mut seen = Vec::new();
    loop {
        let result = call_method(&mut agent, iterator, "next", &[]).unwrap();
        let done_key = PropertyKey::from_str(&mut agent, "done");
        let done = get_v(&mut agent, result, done_key).unwrap();
        if as_bool(done) {
            break;
        }
        let value_key = PropertyKey::from_str(&mut agent, "value");
        let value = get_v(&mut agent, result, value_key).unwrap();
        seen.push(as_string(&agent, value));
    }
    assert_eq!(seen, ["a", "😀", "b"]);
}

#[test]
fn symbol_receiver_coercion_throws() {
    let mut agent = agent_with_realm();
    // A symbol passes RequireObjectCoercible but fails the ToString step of
    // the method preamble.
    let realm = agent.current_realm_id();
    let prototype = agent[realm].intrinsics().string_prototype();
    let key = PropertyKey::from_str(&mut agent, "trim");
    let method = get(&mut agent, prototype.into(), key).unwrap();
    let symbol = WellKnownSymbolIndexes::Iterator.to_symbol().into_value();
    let error = call(&mut agent, method, symbol, None).unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
}
