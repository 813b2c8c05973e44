//! JSON string escaping and UTF-8 encoding.
//!
//! String content is written character by character: `"` and `\` get a
//! backslash escape, control characters get their short forms (`\n`, `\r`,
//! `\b`, `\t`, `\f`) or a `\u00XX` escape with uppercase hex digits, printable
//! ASCII passes through as a single byte, and everything else is encoded as a
//! 2-, 3-, or 4-byte UTF-8 sequence with the standard `10xxxxxx` continuation
//! bytes. Supplementary-plane characters always produce one 4-byte sequence,
//! never a pair of 3-byte surrogate encodings, so the output is valid UTF-8
//! for every input.

use crate::byte_buffer::ByteBuffer;

/// Worst case a single character can expand to: a `\u00XX` escape.
///
/// UTF-8 tops out at 4 bytes and the short escapes at 2, so reserving
/// `len * MAX_BYTES_PER_CHAR` lets a whole string be written after one
/// capacity check.
pub(crate) const MAX_BYTES_PER_CHAR: usize = 6;

/// Writes `text` with JSON escaping. Capacity must already be ensured for
/// `text.len() * MAX_BYTES_PER_CHAR` bytes.
pub(crate) fn write_escaped(buf: &mut ByteBuffer, text: &str) {
    for ch in text.chars() {
        write_char(buf, ch);
    }
}

/// Writes one character with JSON escaping. Capacity for
/// [`MAX_BYTES_PER_CHAR`] bytes must already be ensured.
pub(crate) fn write_char(buf: &mut ByteBuffer, ch: char) {
    match ch {
        '"' | '\\' => {
            buf.push(b'\\');
            buf.push(ch as u8);
        }
        '\u{00}'..='\u{1F}' => write_control(buf, ch as u8),
        '\u{20}'..='\u{7F}' => buf.push(ch as u8),
        _ => write_encoded(buf, ch as u32),
    }
}

// 0x00 - 0x1F
fn write_control(buf: &mut ByteBuffer, byte: u8) {
    buf.push(b'\\');
    match byte {
        0x0A => buf.push(b'n'),
        0x0D => buf.push(b'r'),
        0x08 => buf.push(b'b'),
        0x09 => buf.push(b't'),
        0x0C => buf.push(b'f'),
        _ => {
            buf.push(b'u');
            buf.push(b'0');
            buf.push(b'0');
            buf.push(hex_digit(byte >> 4));
            buf.push(hex_digit(byte & 0x0F));
        }
    }
}

fn write_encoded(buf: &mut ByteBuffer, code: u32) {
    if code < 0x800 {
        // 110xxxxx 10xxxxxx
        buf.push(0xC0 | (code >> 6) as u8);
        buf.push(0x80 | (code & 0x3F) as u8);
    } else if code < 0x1_0000 {
        // 1110xxxx 10xxxxxx 10xxxxxx
        buf.push(0xE0 | (code >> 12) as u8);
        buf.push(0x80 | ((code >> 6) & 0x3F) as u8);
        buf.push(0x80 | (code & 0x3F) as u8);
    } else {
        // 11110xxx 10xxxxxx 10xxxxxx 10xxxxxx
        buf.push(0xF0 | (code >> 18) as u8);
        buf.push(0x80 | ((code >> 12) & 0x3F) as u8);
        buf.push(0x80 | ((code >> 6) & 0x3F) as u8);
        buf.push(0x80 | (code & 0x3F) as u8);
    }
}

fn hex_digit(nibble: u8) -> u8 {
    if nibble < 10 {
        b'0' + nibble
    } else {
        b'A' + (nibble - 10)
    }
}
