use alloc::{string::String, vec::Vec};

use rstest::rstest;

use crate::{SerializerOptions, StreamingSerializer};

fn serializer() -> StreamingSerializer {
    StreamingSerializer::new(SerializerOptions::default())
}

fn output(ser: &StreamingSerializer) -> &str {
    core::str::from_utf8(ser.as_bytes()).expect("output must be valid UTF-8")
}

#[rstest]
#[case(0, "0")]
#[case(42, "42")]
#[case(-7, "-7")]
#[case(i64::MAX, "9223372036854775807")]
#[case(i64::MIN, "-9223372036854775808")]
fn root_integer(#[case] value: i64, #[case] expected: &str) {
    let mut ser = serializer();
    ser.write_integer(value);
    assert_eq!(output(&ser), expected);
}

#[rstest]
#[case(true, "true")]
#[case(false, "false")]
fn root_boolean(#[case] value: bool, #[case] expected: &str) {
    let mut ser = serializer();
    ser.write_bool(value);
    assert_eq!(output(&ser), expected);
}

#[test]
fn root_null() {
    let mut ser = serializer();
    ser.write_null();
    assert_eq!(output(&ser), "null");
}

#[rstest]
#[case(3.5, "3.5")]
#[case(-0.25, "-0.25")]
#[case(100.0, "100")]
fn root_float(#[case] value: f64, #[case] expected: &str) {
    let mut ser = serializer();
    ser.write_float(value);
    assert_eq!(output(&ser), expected);
}

#[test]
fn root_big_integer_passes_through() {
    let mut ser = serializer();
    ser.write_big_integer("123456789012345678901234567890");
    assert_eq!(output(&ser), "123456789012345678901234567890");
}

#[test]
fn string_escaping_round_trips() {
    let mut ser = serializer();
    ser.write_string("a\"b\\c\nd");
    assert_eq!(output(&ser), r#""a\"b\\c\nd""#);

    let decoded: String = serde_json::from_str(output(&ser)).unwrap();
    assert_eq!(decoded, "a\"b\\c\nd");
}

#[test]
fn non_ascii_string_is_utf8_encoded() {
    let mut ser = serializer();
    ser.write_string("é");
    assert_eq!(ser.as_bytes(), &[b'"', 0xC3, 0xA9, b'"']);
}

#[test]
fn char_slice_matches_str_form() {
    let text = "é \"quoted\"\n😀";
    let chars: Vec<char> = text.chars().collect();

    let mut from_str = serializer();
    from_str.write_string(text);
    let mut from_chars = serializer();
    from_chars.write_string_chars(&chars);

    assert_eq!(from_str.as_bytes(), from_chars.as_bytes());
}

#[test]
fn flat_array() {
    let mut ser = serializer();
    ser.begin_array();
    ser.write_integer(1);
    ser.write_integer(2);
    ser.write_integer(3);
    ser.end_array().unwrap();
    assert_eq!(output(&ser), "[1,2,3]");
}

#[test]
fn flat_object() {
    let mut ser = serializer();
    ser.begin_object();
    ser.write_key("a").unwrap();
    ser.write_integer(1);
    ser.write_key("b").unwrap();
    ser.write_integer(2);
    ser.end_object().unwrap();
    assert_eq!(output(&ser), r#"{"a":1,"b":2}"#);
}

#[test]
fn mixed_nesting() {
    let mut ser = serializer();
    ser.begin_object();
    ser.write_key("x").unwrap();
    ser.begin_array();
    ser.write_integer(1);
    ser.begin_object();
    ser.write_key("y").unwrap();
    ser.write_bool(false);
    ser.end_object().unwrap();
    ser.end_array().unwrap();
    ser.end_object().unwrap();
    assert_eq!(output(&ser), r#"{"x":[1,{"y":false}]}"#);
}

#[test]
fn empty_containers() {
    let mut ser = serializer();
    ser.begin_object();
    ser.write_key("a").unwrap();
    ser.begin_array();
    ser.end_array().unwrap();
    ser.write_key("b").unwrap();
    ser.begin_object();
    ser.end_object().unwrap();
    ser.end_object().unwrap();
    assert_eq!(output(&ser), r#"{"a":[],"b":{}}"#);
}

#[test]
fn keys_are_escaped() {
    let mut ser = serializer();
    ser.begin_object();
    ser.write_key("line\nbreak \"q\"").unwrap();
    ser.write_null();
    ser.end_object().unwrap();
    assert_eq!(output(&ser), r#"{"line\nbreak \"q\"":null}"#);
}

#[test]
fn root_fragments_concatenate() {
    // Fragment-per-call usage: no separator is inserted at the root.
    let mut ser = serializer();
    ser.write_integer(1);
    ser.write_integer(2);
    ser.write_bool(true);
    assert_eq!(output(&ser), "12true");
}

#[test]
fn reset_is_idempotent_across_documents() {
    let mut ser = serializer();

    let emit = |ser: &mut StreamingSerializer| {
        ser.begin_object();
        ser.write_key("k").unwrap();
        ser.begin_array();
        ser.write_string("v");
        ser.write_float(1.5);
        ser.end_array().unwrap();
        ser.end_object().unwrap();
    };

    emit(&mut ser);
    let first = ser.to_bytes();
    ser.reset().unwrap();
    emit(&mut ser);
    assert_eq!(ser.as_bytes(), first.as_slice());
}

#[test]
fn growth_preserves_earlier_output() {
    // Start far below the payload size so the buffer must double repeatedly.
    let mut ser = StreamingSerializer::new(SerializerOptions {
        initial_buffer_capacity: 16,
        initial_nesting_depth: 1,
    });

    let long: String = core::iter::repeat_n('x', 10_000).collect();
    ser.begin_object();
    ser.write_key("head").unwrap();
    ser.write_integer(7);
    ser.write_key("body").unwrap();
    ser.write_string(&long);
    ser.end_object().unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(ser.as_bytes()).unwrap();
    assert_eq!(parsed["head"], 7);
    assert_eq!(parsed["body"], serde_json::Value::String(long));
}

#[test]
fn snapshot_does_not_disturb_in_progress_state() {
    let mut ser = serializer();
    ser.begin_array();
    ser.write_integer(1);
    let partial = ser.to_bytes();
    assert_eq!(partial, b"[1");

    ser.write_integer(2);
    ser.end_array().unwrap();
    assert_eq!(output(&ser), "[1,2]");
}

#[test]
fn deep_nesting_grows_the_frame_stack() {
    let mut ser = StreamingSerializer::new(SerializerOptions {
        initial_nesting_depth: 2,
        ..SerializerOptions::default()
    });

    let depth = 100;
    for _ in 0..depth {
        ser.begin_array();
    }
    assert_eq!(ser.depth(), depth);
    ser.write_integer(0);
    for _ in 0..depth {
        ser.end_array().unwrap();
    }
    assert_eq!(ser.depth(), 0);

    assert!(serde_json::from_slice::<serde_json::Value>(ser.as_bytes()).is_ok());
}

#[test]
fn supplementary_plane_is_single_utf8_sequence() {
    let mut ser = serializer();
    ser.write_string("😀");
    assert_eq!(ser.as_bytes(), &[b'"', 0xF0, 0x9F, 0x98, 0x80, b'"']);

    let decoded: String = serde_json::from_slice(ser.as_bytes()).unwrap();
    assert_eq!(decoded, "😀");
}
