/// Property-Based Roundtrip Tests
///
/// Uses the `proptest` crate to generate random value trees and verify that
/// `parse(to_text(tree)) == tree` holds, that canonical text is stable under
/// a second pass, and that the output is JSON `serde_json` reads identically.
///
/// Strategies generate:
/// - Random strings (including escapes, unicode and raw control characters)
/// - Random integers across the full `i64` range
/// - Random finite doubles, including whole values and extreme exponents
/// - Random booleans and null
/// - Random nested arrays and objects (up to 4 levels deep)
///
/// The `serde_json` comparison excludes raw control characters other than the
/// five the serializer escapes, which strict JSON parsers reject, and limits
/// doubles to short decimals that `serde_json` reads back exactly without its
/// `float_roundtrip` feature.
use jsontree::{parse, OrderedMap, Value};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating value trees
// ============================================================================

fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_]{0,10}").unwrap(),
        Just(String::new()),
        Just("with space".to_string()),
        Just("quote\"d".to_string()),
        Just("caf\u{e9}".to_string()),
    ]
}

/// Any text at all, control characters included.
fn arb_any_string() -> impl Strategy<Value = String> {
    any::<String>()
}

/// Trees that only `jsontree` has to read back.
fn arb_any_tree() -> impl Strategy<Value = Value> {
    arb_tree(arb_any_string(), arb_double())
}

/// Trees whose text `serde_json` reads back identically.
fn arb_strict_tree() -> impl Strategy<Value = Value> {
    arb_tree(arb_strict_string(), arb_short_double())
}

/// Text `serde_json` also accepts once serialized.
fn arb_strict_string() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,20}",
        prop::string::string_regex("[a-z\"\\\\/\n\t\r\u{8}\u{c}]{0,12}").unwrap(),
        Just("\u{4f60}\u{597d}".to_string()),
        Just("\u{1f600}".to_string()),
        Just(String::new()),
    ]
}

fn arb_double() -> impl Strategy<Value = f64> {
    prop_oneof![
        any::<f64>().prop_filter("must be finite", |d| d.is_finite()),
        arb_short_double(),
        Just(f64::MAX),
        Just(f64::MIN_POSITIVE),
    ]
}

fn arb_short_double() -> impl Strategy<Value = f64> {
    prop_oneof![
        (-1_000_000i64..1_000_000i64).prop_map(|n| n as f64),
        (-100_000_000i64..100_000_000i64, 1u32..5u32)
            .prop_map(|(mantissa, decimals)| mantissa as f64 / 10f64.powi(decimals as i32)),
        Just(0.0),
        Just(-0.0),
        Just(1e16),
        Just(1.16e22),
    ]
}

fn arb_primitive<S, D>(strings: S, doubles: D) -> impl Strategy<Value = Value>
where
    S: Strategy<Value = String> + 'static,
    D: Strategy<Value = f64> + 'static,
{
    prop_oneof![
        strings.prop_map(Value::String),
        any::<i64>().prop_map(Value::Integer),
        doubles.prop_map(Value::Double),
        any::<bool>().prop_map(Value::Boolean),
        Just(Value::Null),
    ]
}

fn arb_tree<S, D>(strings: S, doubles: D) -> impl Strategy<Value = Value>
where
    S: Strategy<Value = String> + 'static,
    D: Strategy<Value = f64> + 'static,
{
    arb_primitive(strings, doubles).prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec((arb_key(), inner), 0..6).prop_map(|pairs| {
                Value::Object(pairs.into_iter().collect::<OrderedMap<Value>>())
            }),
        ]
    })
}

/// Text built from JSON punctuation, digits and keywords: mostly invalid,
/// occasionally valid.
fn arb_json_like_text() -> impl Strategy<Value = String> {
    prop::string::string_regex(r#"[\[\]{}:,"0-9a-z .eE+\-\\]{0,40}"#).unwrap()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn parse_of_text_reproduces_tree(tree in arb_any_tree()) {
        let text = tree.to_text().unwrap();
        let reparsed = parse(&text).unwrap();
        prop_assert_eq!(&reparsed, &tree, "text: {}", text);
    }

    #[test]
    fn canonical_text_is_idempotent(tree in arb_any_tree()) {
        let first = tree.to_text().unwrap();
        let second = parse(&first).unwrap().to_text().unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn output_agrees_with_serde_json(tree in arb_strict_tree()) {
        let text = tree.to_text().unwrap();
        let theirs: serde_json::Value = serde_json::from_str(&text).unwrap();
        let ours = serde_json::Value::try_from(tree).unwrap();
        prop_assert_eq!(ours, theirs, "text: {}", text);
    }

    #[test]
    fn clone_is_equal_and_independent(tree in arb_strict_tree()) {
        let mut copy = tree.clone();
        prop_assert_eq!(&copy, &tree);
        copy.set("changed");
        prop_assert_eq!(tree.to_text().unwrap() == copy.to_text().unwrap(), tree == copy);
    }

    #[test]
    fn parse_never_panics(text in "\\PC{0,64}") {
        let _ = parse(&text);
    }

    #[test]
    fn accepted_json_like_text_is_stable(text in arb_json_like_text()) {
        if let Ok(value) = parse(&text) {
            let first = value.to_text().unwrap();
            let second = parse(&first).unwrap().to_text().unwrap();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn integers_roundtrip_exactly(n in any::<i64>()) {
        let value = parse(&n.to_string()).unwrap();
        prop_assert_eq!(value.get_integer().unwrap(), n);
    }

    #[test]
    fn doubles_roundtrip_bit_exact(d in arb_double()) {
        let text = Value::Double(d).to_text().unwrap();
        let back = parse(&text).unwrap().get_double().unwrap();
        prop_assert_eq!(back.to_bits(), d.to_bits(), "text: {}", text);
    }
}
