//! The streaming JSON serializer implementation.
//!
//! This module provides the `StreamingSerializer`, which appends UTF-8 bytes
//! to an internal buffer as construction events arrive, tracking open
//! containers on a frame stack to place commas correctly.
//!
//! # Examples
//!
//! ```rust
//! use jsonemit::{SerializerOptions, StreamingSerializer};
//!
//! let mut ser = StreamingSerializer::new(SerializerOptions::default());
//! ser.begin_array();
//! ser.write_integer(1);
//! ser.write_string("two");
//! ser.write_null();
//! ser.end_array().unwrap();
//! assert_eq!(ser.as_bytes(), br#"[1,"two",null]"#);
//! ```

use alloc::{string::ToString, vec::Vec};

use crate::{
    byte_buffer::ByteBuffer,
    error::SerializerError,
    escape::{self, MAX_BYTES_PER_CHAR},
    event::WriteEvent,
    frame::{ContainerKind, FrameStack},
    options::SerializerOptions,
};

/// A streaming, event-driven JSON serializer.
///
/// One method per event kind; each appends bytes to the output buffer and
/// updates the nesting state. The caller is trusted to issue a structurally
/// valid event sequence; the operations that *can* detect a violation
/// (closing containers, keys, reset) validate it and return a
/// [`SerializerError`] instead of producing malformed output.
///
/// Multiple values emitted at the document root concatenate with no
/// separator, supporting fragment-per-call usage; producing one document per
/// serializer (with [`reset`] in between) is the caller's discipline.
///
/// A serializer instance is exclusively owned by one thread for the lifetime
/// of a document; there is no shared state to coordinate.
///
/// [`reset`]: StreamingSerializer::reset
#[derive(Debug)]
pub struct StreamingSerializer {
    buf: ByteBuffer,
    stack: FrameStack,
}

impl StreamingSerializer {
    /// Creates an empty serializer with the allocations `options` requests.
    #[must_use]
    pub fn new(options: SerializerOptions) -> Self {
        Self {
            buf: ByteBuffer::with_capacity(options.initial_buffer_capacity),
            stack: FrameStack::with_capacity(options.initial_nesting_depth),
        }
    }

    /// Writes a quoted, escaped, UTF-8-encoded string value.
    pub fn write_string(&mut self, text: &str) {
        self.buf.ensure(text.len() * MAX_BYTES_PER_CHAR + 3);
        self.value_separator();
        self.buf.push(b'"');
        escape::write_escaped(&mut self.buf, text);
        self.buf.push(b'"');
    }

    /// Writes a string value supplied as a character slice.
    ///
    /// Produces exactly the same bytes as [`write_string`] on the equivalent
    /// `&str`, escaping included.
    ///
    /// [`write_string`]: StreamingSerializer::write_string
    pub fn write_string_chars(&mut self, chars: &[char]) {
        self.buf.ensure(chars.len() * MAX_BYTES_PER_CHAR + 3);
        self.value_separator();
        self.buf.push(b'"');
        for &ch in chars {
            escape::write_char(&mut self.buf, ch);
        }
        self.buf.push(b'"');
    }

    /// Writes an integral value in decimal.
    pub fn write_integer(&mut self, value: i64) {
        self.write_number_text(&value.to_string());
    }

    /// Writes a pre-formatted arbitrary-precision integer.
    ///
    /// The text is the producer's decimal rendering (e.g. from a bignum
    /// library); it is written as-is, with no escaping or validation.
    pub fn write_big_integer(&mut self, value: &str) {
        self.write_number_text(value);
    }

    /// Writes a floating-point value in its standard text form.
    ///
    /// Uses `f64`'s `Display`, the shortest decimal form that round-trips.
    /// Non-finite values render as `NaN`/`inf`, which are not JSON; keeping
    /// them out of the stream is the producer's concern.
    pub fn write_float(&mut self, value: f64) {
        self.write_number_text(&value.to_string());
    }

    fn write_number_text(&mut self, text: &str) {
        self.buf.ensure(text.len() + 1);
        self.value_separator();
        self.buf.push_slice(text.as_bytes());
    }

    /// Writes the literal `true` or `false`.
    pub fn write_bool(&mut self, value: bool) {
        self.buf.ensure(6);
        self.value_separator();
        let literal: &[u8] = if value { b"true" } else { b"false" };
        self.buf.push_slice(literal);
    }

    /// Writes the literal `null`.
    pub fn write_null(&mut self) {
        self.buf.ensure(5);
        self.value_separator();
        self.buf.push_slice(b"null");
    }

    /// Opens an object and pushes its nesting frame.
    pub fn begin_object(&mut self) {
        self.buf.ensure(2);
        self.value_separator();
        self.buf.push(b'{');
        self.stack.push(ContainerKind::Object);
    }

    /// Writes an object key: a comma if needed, the escaped quoted key, `:`.
    ///
    /// # Errors
    ///
    /// [`SerializerError::KeyOutsideObject`] if no container is open or the
    /// innermost one is an array. Nothing is written in that case.
    pub fn write_key(&mut self, key: &str) -> Result<(), SerializerError> {
        let Some(frame) = self.stack.top_mut() else {
            return Err(SerializerError::KeyOutsideObject);
        };
        if frame.kind != ContainerKind::Object {
            return Err(SerializerError::KeyOutsideObject);
        }
        let first = frame.first;
        frame.first = false;

        self.buf.ensure(key.len() * MAX_BYTES_PER_CHAR + 4);
        if !first {
            self.buf.push(b',');
        }
        self.buf.push(b'"');
        escape::write_escaped(&mut self.buf, key);
        self.buf.push(b'"');
        self.buf.push(b':');
        Ok(())
    }

    /// Closes the innermost object and pops its frame.
    ///
    /// # Errors
    ///
    /// [`SerializerError::EndAtRoot`] if no container is open,
    /// [`SerializerError::ContainerMismatch`] if the innermost container is
    /// an array. Buffer and stack are untouched on error.
    pub fn end_object(&mut self) -> Result<(), SerializerError> {
        self.end_container(ContainerKind::Object, b'}')
    }

    /// Opens an array and pushes its nesting frame.
    pub fn begin_array(&mut self) {
        self.buf.ensure(2);
        self.value_separator();
        self.buf.push(b'[');
        self.stack.push(ContainerKind::Array);
    }

    /// Closes the innermost array and pops its frame.
    ///
    /// # Errors
    ///
    /// [`SerializerError::EndAtRoot`] if no container is open,
    /// [`SerializerError::ContainerMismatch`] if the innermost container is
    /// an object. Buffer and stack are untouched on error.
    pub fn end_array(&mut self) -> Result<(), SerializerError> {
        self.end_container(ContainerKind::Array, b']')
    }

    fn end_container(
        &mut self,
        attempted: ContainerKind,
        close: u8,
    ) -> Result<(), SerializerError> {
        let Some(frame) = self.stack.top() else {
            return Err(SerializerError::EndAtRoot { attempted });
        };
        if frame.kind != attempted {
            return Err(SerializerError::ContainerMismatch {
                open: frame.kind,
                attempted,
            });
        }
        self.stack.pop();
        self.buf.ensure(1);
        self.buf.push(close);
        Ok(())
    }

    /// Applies one [`WriteEvent`], dispatching to the matching method.
    ///
    /// # Errors
    ///
    /// Whatever the dispatched method returns; the scalar and `begin` events
    /// are infallible.
    pub fn write_event(&mut self, event: WriteEvent<'_>) -> Result<(), SerializerError> {
        match event {
            WriteEvent::Null => self.write_null(),
            WriteEvent::Boolean(value) => self.write_bool(value),
            WriteEvent::Integer(value) => self.write_integer(value),
            WriteEvent::BigInteger(value) => self.write_big_integer(value),
            WriteEvent::Float(value) => self.write_float(value),
            WriteEvent::String(text) => self.write_string(text),
            WriteEvent::Key(key) => return self.write_key(key),
            WriteEvent::ObjectBegin => self.begin_object(),
            WriteEvent::ObjectEnd => return self.end_object(),
            WriteEvent::ArrayBegin => self.begin_array(),
            WriteEvent::ArrayEnd => return self.end_array(),
        }
        Ok(())
    }

    /// The bytes written since construction or the last reset.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_bytes()
    }

    /// Returns an independent copy of everything written so far.
    ///
    /// The serializer is not consumed or reset; it may keep accepting events.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.buf.to_bytes()
    }

    /// Number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been written since construction or the last reset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.len() == 0
    }

    /// Current nesting depth (number of open containers).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Rewinds the write cursor for a fresh document, keeping the buffer
    /// allocation.
    ///
    /// # Errors
    ///
    /// [`SerializerError::ResetInsideDocument`] if containers are still open,
    /// so a new document can never inherit stale nesting state.
    pub fn reset(&mut self) -> Result<(), SerializerError> {
        if !self.stack.is_empty() {
            return Err(SerializerError::ResetInsideDocument {
                depth: self.stack.depth(),
            });
        }
        self.buf.clear();
        Ok(())
    }

    /// Applied before every value: inside an array, a comma separates all but
    /// the first element; inside an object the comma belongs to the key, so
    /// only the first flag is cleared. At the root nothing is written.
    fn value_separator(&mut self) {
        if let Some(frame) = self.stack.top_mut() {
            if frame.kind == ContainerKind::Array && !frame.first {
                self.buf.push(b',');
            } else {
                frame.first = false;
            }
        }
    }
}

impl Default for StreamingSerializer {
    fn default() -> Self {
        Self::new(SerializerOptions::default())
    }
}
