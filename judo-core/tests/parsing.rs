//! End-to-end document parsing tests.

use indexmap::IndexMap;
use judo_core::{parse, Grammar, ParseError, Value};
use pretty_assertions::assert_eq;

fn object(pairs: &[(&str, Value)]) -> Value {
    Value::Object(
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect::<IndexMap<_, _>>(),
    )
}

fn string(text: &str) -> Value {
    Value::String(text.to_string())
}

#[test]
fn test_string_document() {
    assert_eq!(parse("\"hello\""), Ok(string("hello")));
}

#[test]
fn test_number_document() {
    assert_eq!(parse("123"), Ok(Value::Number(123)));
    assert_eq!(parse("0"), Ok(Value::Number(0)));
    // The digit run is taken as one decimal integer, leading zeros and all.
    assert_eq!(parse("007"), Ok(Value::Number(7)));
}

#[test]
fn test_flat_object() {
    assert_eq!(
        parse("{\"a\": 1, \"b\": 2}"),
        Ok(object(&[("a", Value::Number(1)), ("b", Value::Number(2))])),
    );
}

#[test]
fn test_flat_array() {
    assert_eq!(
        parse("[1, 2, 3]"),
        Ok(Value::Array(vec![
            Value::Number(1),
            Value::Number(2),
            Value::Number(3),
        ])),
    );
}

#[test]
fn test_nested_object_array_object() {
    let expected = object(&[(
        "a",
        Value::Array(vec![Value::Number(1), object(&[("b", string("c"))])]),
    )]);
    assert_eq!(parse("{\"a\": [1, {\"b\": \"c\"}]}"), Ok(expected));
}

#[test]
fn test_empty_containers() {
    assert_eq!(parse("{}"), Ok(object(&[])));
    assert_eq!(parse("[]"), Ok(Value::Array(vec![])));
    assert_eq!(parse("{ }"), Ok(object(&[])));
    assert_eq!(parse("[ \n ]"), Ok(Value::Array(vec![])));
}

#[test]
fn test_object_key_order_is_parse_order() {
    let value = parse("{\"z\": 1, \"a\": 2, \"m\": 3}").unwrap();
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn test_duplicate_keys_last_write_wins() {
    let value = parse("{\"a\": 1, \"a\": 2}").unwrap();
    assert_eq!(value.len(), Some(1));
    assert_eq!(value.get("a"), Some(&Value::Number(2)));
}

#[test]
fn test_whitespace_between_tokens() {
    let input = "{ \"a\":\n[1,\n 2],\n\"b\": \"x y\" }";
    let expected = object(&[
        ("a", Value::Array(vec![Value::Number(1), Value::Number(2)])),
        ("b", string("x y")),
    ]);
    assert_eq!(parse(input), Ok(expected));
}

#[test]
fn test_whitespace_is_not_skipped_after_numbers() {
    // Only char and string matches skip trailing whitespace, so a space
    // between a number and the closing bracket is not absorbed.
    assert_eq!(parse("[1, 2, 3 ]"), Err(ParseError::Unmatched));
    // After a string it is.
    assert_eq!(parse("[\"a\" ]"), Ok(Value::Array(vec![string("a")])));
}

#[test]
fn test_tab_is_not_whitespace() {
    assert_eq!(parse("{\t}"), Err(ParseError::Unmatched));
    assert_eq!(parse("[\t1]"), Err(ParseError::Unmatched));
}

#[test]
fn test_surrounding_whitespace() {
    assert_eq!(parse("  \n{\"a\": 1}\n  "), Ok(object(&[("a", Value::Number(1))])));
}

#[test]
fn test_string_with_embedded_newline() {
    // No escapes exist; the literal runs to the next quote, newline included.
    assert_eq!(parse("\"a\nb\""), Ok(string("a\nb")));
}

#[test]
fn test_malformed_documents_are_rejected() {
    let malformed = [
        "",
        ",",
        "{",
        "}",
        "[1,",
        "\"unterminated",
        "{\"a\": }",
        "{\"a\" 1}",
        "{a: 1}",
        "[1 2]",
        "{\"a\": 1,}",
        "[1, ]",
    ];
    for input in malformed {
        assert_eq!(parse(input), Err(ParseError::Unmatched), "input: {input:?}");
    }
}

#[test]
fn test_trailing_input_is_an_error() {
    assert_eq!(parse("123abc"), Err(ParseError::TrailingInput));
    assert_eq!(parse("{} {}"), Err(ParseError::TrailingInput));
}

#[test]
fn test_one_grammar_many_documents() {
    let grammar = Grammar::new();
    let documents = ["1", "\"a\"", "[[], {}]", "{\"k\": [0]}"];
    for input in documents {
        assert!(grammar.parse(input).is_ok(), "input: {input:?}");
    }
}

#[test]
fn test_agrees_with_reference_parser() {
    // Every valid JUDO document is also valid JSON; the reference parser
    // must agree on the result.
    let documents = [
        "\"hello\"",
        "123",
        "{\"a\": 1, \"b\": 2}",
        "[1, 2, 3]",
        "{\"a\": [1, {\"b\": \"c\"}]}",
        "{}",
        "[]",
    ];
    for input in documents {
        let ours = parse(input).unwrap();
        let reference: serde_json::Value = serde_json::from_str(input).unwrap();
        let re_read: serde_json::Value = serde_json::from_str(&ours.to_string()).unwrap();
        assert_eq!(re_read, reference, "input: {input:?}");
    }
}
