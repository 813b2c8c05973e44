#![no_main]
use arbitrary::Arbitrary;
use jsonemit::{ContainerKind, SerializerOptions, StreamingSerializer};
use libfuzzer_sys::fuzz_target;

/// One raw construction step, before well-formedness filtering.
#[derive(Arbitrary, Debug)]
enum Op<'a> {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(&'a str),
    Key(&'a str),
    BeginObject,
    EndObject,
    BeginArray,
    EndArray,
}

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    buffer_capacity: u16,
    nesting_depth: u8,
    ops: Vec<Op<'a>>,
}

/// Drives an arbitrary op sequence through the serializer, filtering it into
/// a well-formed event stream with a shadow stack (the serializer itself
/// trusts the caller on ordering, so the harness supplies the discipline).
/// Invalid ops are still issued and must be rejected without corrupting
/// state. At the end the output must be valid UTF-8, and if exactly one root
/// value was produced it must parse under serde_json.
fuzz_target!(|input: Input<'_>| {
    let mut ser = StreamingSerializer::new(SerializerOptions {
        initial_buffer_capacity: input.buffer_capacity as usize,
        initial_nesting_depth: input.nesting_depth as usize,
    });

    // Shadow of the serializer's frame stack plus whether a key is pending.
    let mut shadow: Vec<ContainerKind> = Vec::new();
    let mut key_pending = false;
    let mut root_values = 0usize;

    fn note_value(shadow: &[ContainerKind], key_pending: &mut bool, root: &mut usize) {
        if shadow.is_empty() {
            *root += 1;
        }
        *key_pending = false;
    }

    for op in &input.ops {
        // Inside an object a value must follow a key; skip value ops that
        // would break that, since the serializer does not police it.
        let value_position =
            key_pending || shadow.last() != Some(&ContainerKind::Object);

        match op {
            Op::Null => {
                if value_position {
                    ser.write_null();
                    note_value(&shadow, &mut key_pending, &mut root_values);
                }
            }
            Op::Bool(v) => {
                if value_position {
                    ser.write_bool(*v);
                    note_value(&shadow, &mut key_pending, &mut root_values);
                }
            }
            Op::Integer(v) => {
                if value_position {
                    ser.write_integer(*v);
                    note_value(&shadow, &mut key_pending, &mut root_values);
                }
            }
            Op::Float(v) => {
                if value_position && v.is_finite() {
                    ser.write_float(*v);
                    note_value(&shadow, &mut key_pending, &mut root_values);
                }
            }
            Op::String(s) => {
                if value_position {
                    ser.write_string(s);
                    note_value(&shadow, &mut key_pending, &mut root_values);
                }
            }
            Op::Key(k) => {
                // A second key before a value is a violation the serializer
                // does not detect; never issue it.
                if key_pending {
                    continue;
                }
                let valid = shadow.last() == Some(&ContainerKind::Object);
                let result = ser.write_key(k);
                assert_eq!(result.is_ok(), valid);
                if valid {
                    key_pending = true;
                }
            }
            Op::BeginObject => {
                if value_position {
                    ser.begin_object();
                    shadow.push(ContainerKind::Object);
                    key_pending = false;
                    // The container itself is the value.
                }
            }
            Op::EndObject => {
                // Closing with a dangling key would produce `{"k":}`; the
                // serializer trusts the caller here, so don't issue it.
                if key_pending {
                    continue;
                }
                let valid = shadow.last() == Some(&ContainerKind::Object);
                let result = ser.end_object();
                assert_eq!(result.is_ok(), valid);
                if valid {
                    shadow.pop();
                    if shadow.is_empty() {
                        root_values += 1;
                    }
                }
            }
            Op::BeginArray => {
                if value_position {
                    ser.begin_array();
                    shadow.push(ContainerKind::Array);
                    key_pending = false;
                }
            }
            Op::EndArray => {
                // With a key pending the top frame is an object, so the
                // serializer rejects this itself.
                let valid = shadow.last() == Some(&ContainerKind::Array);
                let result = ser.end_array();
                assert_eq!(result.is_ok(), valid);
                if valid {
                    shadow.pop();
                    if shadow.is_empty() {
                        root_values += 1;
                    }
                }
            }
        }
    }

    // Close everything still open so the document is complete.
    while let Some(kind) = shadow.pop() {
        if key_pending {
            ser.write_null();
            key_pending = false;
        }
        match kind {
            ContainerKind::Object => ser.end_object().unwrap(),
            ContainerKind::Array => ser.end_array().unwrap(),
        }
        if shadow.is_empty() {
            root_values += 1;
        }
    }
    assert_eq!(ser.depth(), 0);

    let bytes = ser.to_bytes();
    let text = std::str::from_utf8(&bytes).expect("serializer output must be valid UTF-8");

    if root_values == 1 {
        serde_json::from_str::<serde_json::Value>(text).expect("single document must parse");
    }

    // Reset must rewind and allow byte-identical reuse.
    ser.reset().unwrap();
    assert_eq!(ser.len(), 0);
});
