// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Generates `BUILTIN_STRINGS_LIST` and `BUILTIN_STRING_MEMORY` from the
//! `src/builtin_strings` list. Strings short enough to live inline become
//! `SmallString` constants; the rest are assigned stable indexes into the
//! heap string arena, which `Heap::new` seeds in the same order.

use small_string::SmallString;
use std::env;
use std::fs;
use std::path::Path;

fn field_name(string: &str) -> String {
    let mut name = string.to_owned();
    if let Some(first) = name.chars().next() {
        if first.is_numeric() || first == '-' {
            name = format!("_{}", name);
        }
    }
    name.replace(['[', ']', '(', ')', ' ', '.', '-', '*'], "_")
}

fn generate() -> String {
    let data = fs::read_to_string("src/builtin_strings").unwrap();
    let strings: Vec<&str> = data.lines().filter(|line| !line.is_empty()).collect();
    for (i, string) in strings.iter().enumerate() {
        if strings[..i].contains(string) {
            panic!("duplicate builtin string {:?}", string);
        }
    }

    let heap_count = strings
        .iter()
        .filter(|s| SmallString::try_from(**s).is_err())
        .count();

    let mut out = String::with_capacity(8192);
    out.push_str(&format!(
        "pub const BUILTIN_STRINGS_LIST: [&str; {}] = [\n",
        heap_count
    ));
    for string in &strings {
        if SmallString::try_from(*string).is_err() {
            out.push_str(&format!("    {:?},\n", string));
        }
    }
    out.push_str("];\n\n#[allow(non_snake_case)]\npub struct BuiltinStrings {\n");
    for string in &strings {
        out.push_str(&format!(
            "    /// ```js\n    /// \"{}\"\n    /// ```\n    pub r#{}: String,\n",
            string,
            field_name(string)
        ));
    }
    out.push_str("}\n\npub const BUILTIN_STRING_MEMORY: BuiltinStrings = BuiltinStrings {\n");
    let mut heap_index: u32 = 0;
    for string in &strings {
        if SmallString::try_from(*string).is_ok() {
            out.push_str(&format!(
                "    r#{}: String::SmallString(SmallString::from_str_unchecked({:?})),\n",
                field_name(string),
                string
            ));
        } else {
            out.push_str(&format!(
                "    r#{}: String::String(HeapString(StringIndex::from_u32_index({}))),\n",
                field_name(string),
                heap_index
            ));
            heap_index += 1;
        }
    }
    out.push_str("};\n");
    out
}

fn main() {
    println!("cargo:rerun-if-changed=src/builtin_strings");
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("builtin_strings.rs");
    fs::write(dest_path, generate()).unwrap();
}
