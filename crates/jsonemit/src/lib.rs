//! A streaming, event-driven JSON serializer.
//!
//! [`StreamingSerializer`] converts a sequence of construction events —
//! scalar values, object/array boundaries, keys — directly into a growable
//! buffer of UTF-8 bytes. No intermediate document object or textual
//! representation is ever built: each event appends its bytes as it arrives,
//! with a nesting-frame stack deciding comma placement.
//!
//! ```rust
//! use jsonemit::{SerializerOptions, StreamingSerializer};
//!
//! let mut ser = StreamingSerializer::new(SerializerOptions::default());
//! ser.begin_object();
//! ser.write_key("answer").unwrap();
//! ser.write_integer(42);
//! ser.end_object().unwrap();
//! assert_eq!(ser.as_bytes(), br#"{"answer":42}"#);
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod byte_buffer;
mod escape;
mod frame;

mod error;
mod event;
mod options;
mod serializer;

#[cfg(test)]
mod tests;

pub use error::SerializerError;
pub use event::WriteEvent;
pub use frame::ContainerKind;
pub use options::SerializerOptions;
pub use serializer::StreamingSerializer;
