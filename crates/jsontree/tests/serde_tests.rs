use jsontree::{literal, parse, Value};
use serde_json::json;

#[test]
fn from_serde_json_keeps_order_and_types() {
    let source = json!({"z": 1, "a": [true, null, 2.5, "s"], "big": 18446744073709551615u64});
    let value = Value::from(source);
    assert_eq!(
        value.to_text().unwrap(),
        r#"{"z":1,"a":[true,null,2.5,"s"],"big":1.8446744073709552e19}"#
    );
}

#[test]
fn into_serde_json() {
    let value = parse(r#"{"b":[1,2.5,"x"],"a":{"n":null}}"#).unwrap();
    let converted = serde_json::Value::try_from(value).unwrap();
    assert_eq!(converted, json!({"b": [1, 2.5, "x"], "a": {"n": null}}));
    // preserve_order: key order survives
    assert_eq!(
        serde_json::to_string(&converted).unwrap(),
        r#"{"b":[1,2.5,"x"],"a":{"n":null}}"#
    );
}

#[test]
fn into_serde_json_rejects_unset() {
    let mut value = Value::object();
    value["pending"] = Value::Unset;
    let err = serde_json::Value::try_from(value).unwrap_err();
    assert!(err.is_type());
}

#[test]
fn serialize_matches_canonical_text() {
    let value = literal![["name", "Alicia"], ["tags", ["a", "b"]], ["score", 9.5], ["n", null]];
    assert_eq!(serde_json::to_string(&value).unwrap(), value.to_text().unwrap());
}

#[test]
fn serialize_unset_fails() {
    let mut value = literal![1, 2];
    value[4] = Value::from(5);
    let err = serde_json::to_string(&value).unwrap_err();
    assert!(err.to_string().contains("indeterminate"), "{err}");
}

#[test]
fn deserialize_through_serde_json() {
    let value: Value = serde_json::from_str(r#"{"b":1,"a":[1.5,"x",false,null]}"#).unwrap();
    assert_eq!(value, parse(r#"{"b":1,"a":[1.5,"x",false,null]}"#).unwrap());
}

#[test]
fn deserialize_unsigned_beyond_i64_as_double() {
    let value: Value = serde_json::from_str("18446744073709551615").unwrap();
    assert_eq!(value.get_double().unwrap(), 18_446_744_073_709_551_615u64 as f64);
}

#[test]
fn agrees_with_serde_json_on_valid_documents() {
    let documents = [
        r#"{"a":[1,2,{"b":null}],"c":"d"}"#,
        r#"[true,false,null,"x\ny",-3,0.25]"#,
        r#"  {"nested" : {"deeper" : [ [ ], { } ] } }  "#,
    ];
    for doc in documents {
        let ours = serde_json::Value::try_from(parse(doc).unwrap()).unwrap();
        let theirs: serde_json::Value = serde_json::from_str(doc).unwrap();
        assert_eq!(ours, theirs, "disagreement on {doc}");
    }
}
