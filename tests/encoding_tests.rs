use chrono::{DateTime, FixedOffset};
use numeric_fixtures::{
    ansi, to_string, to_value, EncodeOptions, Encoder, Error, Line, Table, Value,
};
use serde::Serialize;
use serde_json::json;

fn plain(text: &str) -> String {
    ansi::strip(text).into_owned()
}

fn table(pairs: &[(&str, Value)]) -> Table {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

#[test]
fn test_bare_and_quoted_keys() {
    let encoder = Encoder::default();
    assert_eq!(plain(&encoder.key("exponent-radix")), "exponent-radix");
    assert_eq!(plain(&encoder.key("TEST_0")), "TEST_0");
    assert_eq!(plain(&encoder.key("a.b")), "\"a.b\"");
    assert_eq!(plain(&encoder.key("ñ")), "\"ñ\"");
}

#[test]
fn test_single_line_table_with_multi_line_member_is_rejected() {
    let encoder = Encoder::default();
    let value = table(&[
        ("ok", Value::from("fine")),
        ("text", Value::from("a\nb")),
    ]);
    let err = encoder.table(&value, Line::Single).unwrap_err();
    assert!(matches!(err, Error::InvalidTable(_)));
    assert!(err.to_string().contains("text"));
}

#[test]
fn test_tables_refuse_guessing() {
    let encoder = Encoder::default();
    let err = encoder.table(&Table::new(), Line::Guess).unwrap_err();
    assert!(matches!(err, Error::InvalidTable(_)));
}

#[test]
fn test_single_line_table() {
    let encoder = Encoder::default();
    let value = table(&[("radix", Value::from(10)), ("literal", Value::from(true))]);
    assert_eq!(
        plain(&encoder.table(&value, Line::Single).unwrap()),
        "{ radix = 10, literal = true }"
    );
    assert_eq!(plain(&encoder.table(&Table::new(), Line::Single).unwrap()), "{}");
}

#[test]
fn test_multi_line_table_keeps_insertion_order() {
    let encoder = Encoder::default();
    let value = table(&[
        ("value", Value::from("1_1")),
        ("title", Value::from("Integer internal digit separator.")),
        ("outcome", Value::from("pass")),
    ]);
    assert_eq!(
        plain(&encoder.table(&value, Line::Multi).unwrap()),
        "value = \"1_1\"\ntitle = \"Integer internal digit separator.\"\noutcome = \"pass\""
    );
}

#[test]
fn test_multi_line_string_in_multi_line_table() {
    let encoder = Encoder::default();
    let value = table(&[("text", Value::from("a\nb"))]);
    assert_eq!(
        plain(&encoder.table(&value, Line::Multi).unwrap()),
        "text = \"\"\"\na\nb\"\"\""
    );
}

#[test]
fn test_array_width_policy() {
    let encoder = Encoder::default();

    // 8 elements of 8 characters plus separators: 80 columns, still inline
    let fits: Vec<Value> = (0..8).map(|_| Value::from("abcdef")).collect();
    let text = plain(&encoder.array(&fits, Line::Guess, 0).unwrap());
    assert!(!text.contains('\n'));

    let wide: Vec<Value> = (0..9).map(|_| Value::from("abcdef")).collect();
    let text = plain(&encoder.array(&wide, Line::Guess, 0).unwrap());
    assert!(text.starts_with("[\n  \"abcdef\",\n"));
    assert!(text.ends_with("\"abcdef\"\n]"));
}

#[test]
fn test_nested_arrays_indent_per_level() {
    let encoder = Encoder::default();
    let inner = Value::from(vec![Value::from(1), Value::from(2)]);
    let outer = vec![inner];
    assert_eq!(
        plain(&encoder.array(&outer, Line::Multi, 0).unwrap()),
        "[\n  [\n    1,\n    2\n  ]\n]"
    );
}

#[test]
fn test_custom_indent() {
    let encoder = Encoder::new(EncodeOptions::new().with_indent(4));
    let values = vec![Value::from(1)];
    assert_eq!(
        plain(&encoder.array(&values, Line::Multi, 0).unwrap()),
        "[\n    1\n]"
    );
}

#[test]
fn test_scalars() {
    let encoder = Encoder::default();
    assert_eq!(plain(&encoder.value(&Value::from(false), Line::Guess, 0).unwrap()), "false");
    assert_eq!(plain(&encoder.value(&Value::from(-3), Line::Guess, 0).unwrap()), "-3");
    assert_eq!(plain(&encoder.value(&Value::from(2.0), Line::Guess, 0).unwrap()), "2.0");

    let dt: DateTime<FixedOffset> = DateTime::parse_from_rfc3339("1979-05-27T07:32:00-08:00").unwrap();
    assert_eq!(
        plain(&encoder.value(&Value::from(dt), Line::Guess, 0).unwrap()),
        "1979-05-27T07:32:00-08:00"
    );
}

#[test]
fn test_comments_prefix_every_line() {
    let encoder = Encoder::default();
    assert_eq!(plain(&encoder.comment("TEST 3")), "# TEST 3");
    assert_eq!(plain(&encoder.comment("a\nb")), "# a\n# b");
}

#[test]
fn test_foreign_serde_values() {
    let value = to_value(&json!({"radix": 10, "names": ["NaN", "inf"], "ok": true})).unwrap();
    let table = value.as_table().unwrap();
    assert_eq!(table.get("radix"), Some(&Value::Integer(10)));
    assert_eq!(
        table.get("names"),
        Some(&Value::from(vec![Value::from("NaN"), Value::from("inf")]))
    );
    assert!(matches!(to_value(&json!(null)), Err(Error::UnsupportedType(_))));
}

#[test]
fn test_to_string_of_derived_struct() {
    #[derive(Serialize)]
    struct Case {
        value: Vec<&'static str>,
        outcome: &'static str,
    }

    let case = Case {
        value: vec!["N_aN", "Na_N"],
        outcome: "pass",
    };
    assert_eq!(
        to_string(&case).unwrap(),
        "value = [\"N_aN\", \"Na_N\"]\noutcome = \"pass\""
    );
}

#[test]
fn test_display_uses_guessed_layout() {
    let value = Value::from(vec![Value::from(1), Value::from(2)]);
    assert_eq!(value.to_string(), "[1, 2]");
}
