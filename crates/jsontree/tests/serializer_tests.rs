use jsontree::{literal, parse, to_text, OrderedMap, Value};

fn assert_text(value: &Value, expected: &str) {
    let text = value.to_text().unwrap();
    assert_eq!(
        text, expected,
        "Serialize mismatch:\n  got:      {text}\n  expected: {expected}"
    );
}

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn serialize_scalars() {
    assert_text(&Value::Null, "null");
    assert_text(&Value::Boolean(true), "true");
    assert_text(&Value::Boolean(false), "false");
    assert_text(&Value::Integer(-42), "-42");
    assert_text(&Value::Integer(i64::MAX), "9223372036854775807");
    assert_text(&Value::from("hi"), r#""hi""#);
}

#[test]
fn serialize_doubles_shortest_form() {
    assert_text(&Value::Double(1.2), "1.2");
    assert_text(&Value::Double(67.12), "67.12");
    assert_text(&Value::Double(0.1 + 0.2), "0.30000000000000004");
    assert_text(&Value::Double(-2.5), "-2.5");
}

#[test]
fn whole_doubles_keep_fraction_marker() {
    assert_text(&Value::Double(12.0), "12.0");
    assert_text(&Value::Double(0.0), "0.0");
    assert_text(&Value::Double(-0.0), "-0.0");
}

#[test]
fn extreme_doubles_use_exponent_form() {
    assert_text(&Value::Double(1.16e22), "1.16e22");
    assert_text(&Value::Double(1e16), "1.0e16");
    assert_text(&Value::Double(1e-7), "1.0e-7");
    assert_text(&Value::Double(2.5e-8), "2.5e-8");
}

#[test]
fn non_finite_doubles_render_null() {
    assert_text(&Value::Double(f64::NAN), "null");
    assert_text(&Value::Double(f64::INFINITY), "null");
    assert_text(&Value::Double(f64::NEG_INFINITY), "null");
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn strings_escape_quote_and_backslash() {
    assert_text(&Value::from("say \"hi\""), r#""say \"hi\"""#);
    assert_text(&Value::from("path\\to\\file"), r#""path\\to\\file""#);
}

#[test]
fn strings_escape_short_control_characters() {
    assert_text(
        &Value::from("a\u{8}b\u{c}c\nd\re\tf"),
        r#""a\bb\fc\nd\re\tf""#,
    );
}

#[test]
fn slash_is_not_escaped() {
    let value = parse(r#""a\/b""#).unwrap();
    assert_text(&value, r#""a/b""#);
}

#[test]
fn keys_are_escaped_like_strings() {
    let mut map = OrderedMap::new();
    map.insert("we\"ird", Value::Integer(1));
    assert_text(&Value::Object(map), r#"{"we\"ird":1}"#);
}

// ============================================================================
// Containers
// ============================================================================

#[test]
fn serialize_empty_containers() {
    assert_text(&Value::object(), "{}");
    assert_text(&Value::array(), "[]");
}

#[test]
fn serialize_object_in_insertion_order() {
    let value = literal![["zeta", 1], ["alpha", 2], ["mid", 3]];
    assert_text(&value, r#"{"zeta":1,"alpha":2,"mid":3}"#);
}

#[test]
fn serialize_nested_structure() {
    let value = literal![
        ["name", "Alicia"],
        ["tags", ["a", "b", "c"]],
        ["address", [["city", "Oslo"], ["zip", null]]]
    ];
    assert_text(
        &value,
        r#"{"name":"Alicia","tags":["a","b","c"],"address":{"city":"Oslo","zip":null}}"#,
    );
}

#[test]
fn free_function_matches_method() {
    let value = literal![1, 2.5, "x"];
    assert_eq!(to_text(&value).unwrap(), value.to_text().unwrap());
}

#[test]
fn write_text_appends() {
    let mut out = String::from("prefix:");
    Value::Integer(7).write_text(&mut out).unwrap();
    assert_eq!(out, "prefix:7");
}

// ============================================================================
// Unset nodes
// ============================================================================

#[test]
fn unset_root_fails() {
    let err = Value::Unset.to_text().unwrap_err();
    assert!(err.is_type());
    assert!(err.to_string().contains("indeterminate"));
}

#[test]
fn unset_anywhere_in_tree_fails() {
    let mut value = parse(r#"{"a":{"b":[1,2]}}"#).unwrap();
    value["a"]["b"][4] = Value::from(5);
    assert!(value.to_text().unwrap_err().is_type());

    value["a"]["b"][2] = Value::Null;
    assert!(value.to_text().unwrap_err().is_type());

    value["a"]["b"][3] = Value::Boolean(true);
    assert_text(&value, r#"{"a":{"b":[1,2,null,true,5]}}"#);
}

#[test]
fn serializing_does_not_mutate() {
    let value = parse(r#"{"k":[1,{"n":null}]}"#).unwrap();
    let before = value.clone();
    let _ = value.to_text().unwrap();
    assert_eq!(value, before);
}
