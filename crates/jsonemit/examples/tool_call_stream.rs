//! Emits an LLM-style tool-call response as newline-delimited JSON records,
//! one per simulated progress update, reusing a single serializer across
//! documents.
//!
//! Each record carries the fragment of generated code produced "so far" plus
//! a moderation verdict, the mirror image of consuming such a stream with an
//! incremental parser. The serializer is reset between records so the buffer
//! allocation is reused for the whole stream.
//!
//! Run with
//!
//! ```bash
//! cargo run -p jsonemit --example tool_call_stream
//! ```

use jsonemit::{SerializerOptions, StreamingSerializer};

fn main() {
    let fragments = [
        "fn main() {",
        "\n    println!(\"héllo\");",
        "\n}",
    ];

    let mut ser = StreamingSerializer::new(SerializerOptions {
        initial_buffer_capacity: 256,
        ..SerializerOptions::default()
    });

    for (seq, fragment) in fragments.iter().enumerate() {
        ser.begin_object();
        ser.write_key("seq").unwrap();
        ser.write_integer(seq as i64);
        ser.write_key("moderation").unwrap();
        ser.begin_object();
        ser.write_key("decision").unwrap();
        ser.write_string("allow");
        ser.write_key("reason").unwrap();
        ser.write_null();
        ser.end_object().unwrap();
        ser.write_key("code_fragment").unwrap();
        ser.write_string(fragment);
        ser.write_key("final").unwrap();
        ser.write_bool(seq + 1 == fragments.len());
        ser.end_object().unwrap();

        let line = ser.to_bytes();
        println!("{}", String::from_utf8(line).expect("output is UTF-8"));
        ser.reset().unwrap();
    }
}
