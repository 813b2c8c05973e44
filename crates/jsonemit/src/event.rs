//! Events accepted by the streaming serializer.
//!
//! Each variant corresponds to one serializer method, so producers that walk
//! a document tree or relay a parsed stream can drive the serializer through
//! a single dispatch point instead of matching on their own representation.
//!
//! # Examples
//!
//! ```rust
//! use jsonemit::{SerializerOptions, StreamingSerializer, WriteEvent};
//!
//! let events = [
//!     WriteEvent::ArrayBegin,
//!     WriteEvent::Integer(1),
//!     WriteEvent::String("two"),
//!     WriteEvent::ArrayEnd,
//! ];
//!
//! let mut ser = StreamingSerializer::new(SerializerOptions::default());
//! for event in events {
//!     ser.write_event(event).unwrap();
//! }
//! assert_eq!(ser.as_bytes(), br#"[1,"two"]"#);
//! ```

/// A single piece of a JSON document under construction.
///
/// Borrowed text lives only for the duration of the call; the serializer
/// copies everything into its own buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WriteEvent<'a> {
    /// The literal `null`.
    Null,
    /// The literal `true` or `false`.
    Boolean(bool),
    /// An integral value, written in decimal.
    Integer(i64),
    /// A pre-formatted decimal integer too large for `i64`.
    BigInteger(&'a str),
    /// A floating-point value, written in its standard text form.
    Float(f64),
    /// A string value, quoted and escaped.
    String(&'a str),
    /// An object key followed by `:`. Valid only inside an object.
    Key(&'a str),
    /// Opens an object (`{`).
    ObjectBegin,
    /// Closes the innermost object (`}`).
    ObjectEnd,
    /// Opens an array (`[`).
    ArrayBegin,
    /// Closes the innermost array (`]`).
    ArrayEnd,
}
