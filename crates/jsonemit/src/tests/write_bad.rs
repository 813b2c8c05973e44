use crate::{ContainerKind, SerializerError, SerializerOptions, StreamingSerializer};

fn serializer() -> StreamingSerializer {
    StreamingSerializer::new(SerializerOptions::default())
}

#[test]
fn end_object_at_root() {
    let mut ser = serializer();
    assert_eq!(
        ser.end_object(),
        Err(SerializerError::EndAtRoot {
            attempted: ContainerKind::Object
        })
    );
    assert!(ser.as_bytes().is_empty());
}

#[test]
fn end_array_at_root() {
    let mut ser = serializer();
    assert_eq!(
        ser.end_array(),
        Err(SerializerError::EndAtRoot {
            attempted: ContainerKind::Array
        })
    );
}

#[test]
fn mismatched_close_leaves_state_untouched() {
    let mut ser = serializer();
    ser.begin_array();
    ser.write_integer(1);
    let before = ser.to_bytes();

    assert_eq!(
        ser.end_object(),
        Err(SerializerError::ContainerMismatch {
            open: ContainerKind::Array,
            attempted: ContainerKind::Object
        })
    );
    assert_eq!(ser.as_bytes(), before.as_slice());
    assert_eq!(ser.depth(), 1);

    // The matching close still works afterwards.
    ser.end_array().unwrap();
    assert_eq!(ser.as_bytes(), b"[1]");
}

#[test]
fn close_array_inside_object() {
    let mut ser = serializer();
    ser.begin_object();
    assert_eq!(
        ser.end_array(),
        Err(SerializerError::ContainerMismatch {
            open: ContainerKind::Object,
            attempted: ContainerKind::Array
        })
    );
}

#[test]
fn key_at_root() {
    let mut ser = serializer();
    assert_eq!(ser.write_key("a"), Err(SerializerError::KeyOutsideObject));
    assert!(ser.as_bytes().is_empty());
}

#[test]
fn key_inside_array() {
    let mut ser = serializer();
    ser.begin_array();
    assert_eq!(ser.write_key("a"), Err(SerializerError::KeyOutsideObject));
    assert_eq!(ser.as_bytes(), b"[");

    // The array is still usable after the rejected key.
    ser.write_integer(1);
    ser.end_array().unwrap();
    assert_eq!(ser.as_bytes(), b"[1]");
}

#[test]
fn reset_with_open_container() {
    let mut ser = serializer();
    ser.begin_object();
    ser.write_key("k").unwrap();
    ser.begin_array();

    assert_eq!(
        ser.reset(),
        Err(SerializerError::ResetInsideDocument { depth: 2 })
    );

    // Closing everything makes reset valid again.
    ser.end_array().unwrap();
    ser.end_object().unwrap();
    ser.reset().unwrap();
    assert!(ser.is_empty());
}

#[test]
fn errors_format_for_diagnostics() {
    use alloc::string::ToString;

    let err = SerializerError::ContainerMismatch {
        open: ContainerKind::Array,
        attempted: ContainerKind::Object,
    };
    assert_eq!(
        err.to_string(),
        "attempted to close an object but the open container is an array"
    );

    let err = SerializerError::ResetInsideDocument { depth: 3 };
    assert_eq!(err.to_string(), "reset with 3 open container(s)");
}
