//! Byte-escape codec: raw bytes to and from C-style escape text.
//!
//! This is the bottom layer of the Variant encoding. The fcfg format embeds
//! arbitrary binary data in ordinary text lines by rendering each byte as
//! either itself (printable ASCII) or a C-style escape sequence. The encoder
//! follows a fixed, empirically derived policy so that output matches what
//! existing fcfg files contain; the decoder accepts the standard escape
//! repertoire.
//!
//! ## Encoding policy
//!
//! Evaluated per byte, in order:
//!
//! 1. `0x00` becomes `\0`
//! 2. `0x0C` becomes `\f`
//! 3. bytes in [`ALWAYS_ESCAPED`] become `\xHH` even though they are
//!    printable
//! 4. everything else: `\t`, `\n`, `\r`, `\\` for those bytes, printable
//!    ASCII passes through, and the rest becomes lowercase `\xHH`
//!
//! Byte `0x33` (`'3'`) is always left unescaped. Externally authored files
//! occasionally escape it, so byte-exact textual round-tripping of foreign
//! Variant text is not guaranteed for that one byte value; decoded-value
//! equality is.
//!
//! ## Examples
//!
//! ```rust
//! use fcfg::escape;
//!
//! let text = escape::encode(&[0x00, 0x00, 0x00, 0x87]);
//! assert_eq!(text, r"\0\0\0\x87");
//! assert_eq!(escape::decode(&text).unwrap(), vec![0x00, 0x00, 0x00, 0x87]);
//! ```

use crate::{Error, Result};

/// Printable bytes that are nevertheless always written as `\xHH`.
///
/// Derived from existing fcfg files: `'4'`, `'A'`, `'B'`, `'C'`, `'E'`,
/// `'F'`, `'f'`.
pub const ALWAYS_ESCAPED: [u8; 7] = [0x34, 0x41, 0x42, 0x43, 0x45, 0x46, 0x66];

/// Encodes raw bytes as C-style escape text under the fixed policy above.
///
/// The output contains only ASCII and always round-trips through [`decode`].
///
/// # Examples
///
/// ```rust
/// use fcfg::escape::encode;
///
/// assert_eq!(encode(b"hi"), "hi");
/// assert_eq!(encode(&[0x0C]), r"\f");
/// assert_eq!(encode(&[0x41]), r"\x41"); // 'A' is in the always-escaped set
/// assert_eq!(encode(&[0xFF]), r"\xff");
/// ```
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        match b {
            0x00 => out.push_str("\\0"),
            0x0C => out.push_str("\\f"),
            _ if ALWAYS_ESCAPED.contains(&b) => {
                out.push_str(&format!("\\x{:02x}", b));
            }
            0x09 => out.push_str("\\t"),
            0x0A => out.push_str("\\n"),
            0x0D => out.push_str("\\r"),
            0x5C => out.push_str("\\\\"),
            0x20..=0x7E => out.push(b as char),
            _ => out.push_str(&format!("\\x{:02x}", b)),
        }
    }
    out
}

/// Decodes C-style escape text into the corresponding byte sequence.
///
/// Recognized escapes: `\0`, `\a`, `\b`, `\t`, `\n`, `\v`, `\f`, `\r`,
/// `\\`, `\'`, `\"`, `\xHH`, and `\uXXXX`. Each decoded code point must lie
/// in 0–255 and maps to exactly one output byte; this also applies to
/// literal (unescaped) characters.
///
/// # Errors
///
/// Returns [`Error::InvalidEscapeSequence`] when an escape is truncated,
/// uses an unrecognized escape letter, has malformed hex digits, or decodes
/// to a code point above 255. Literal characters above U+00FF are rejected
/// the same way.
///
/// # Examples
///
/// ```rust
/// use fcfg::escape::decode;
///
/// assert_eq!(decode(r"\0\x87?").unwrap(), vec![0x00, 0x87, b'?']);
/// assert!(decode(r"\q").is_err());
/// assert!(decode(r"\x8").is_err());
/// ```
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(text.len());
    let mut chars = text.char_indices();

    while let Some((pos, ch)) = chars.next() {
        if ch != '\\' {
            let code = ch as u32;
            if code > 0xFF {
                return Err(Error::invalid_escape(
                    pos,
                    &format!("character {:?} is outside byte range", ch),
                ));
            }
            out.push(code as u8);
            continue;
        }

        let (_, esc) = chars
            .next()
            .ok_or_else(|| Error::invalid_escape(pos, "truncated escape at end of input"))?;

        match esc {
            '0' => out.push(0x00),
            'a' => out.push(0x07),
            'b' => out.push(0x08),
            't' => out.push(0x09),
            'n' => out.push(0x0A),
            'v' => out.push(0x0B),
            'f' => out.push(0x0C),
            'r' => out.push(0x0D),
            '\\' => out.push(0x5C),
            '\'' => out.push(0x27),
            '"' => out.push(0x22),
            'x' => out.push(read_hex(&mut chars, pos, 2)? as u8),
            'u' => {
                let code = read_hex(&mut chars, pos, 4)?;
                if code > 0xFF {
                    return Err(Error::invalid_escape(
                        pos,
                        &format!("\\u{:04x} is outside byte range", code),
                    ));
                }
                out.push(code as u8);
            }
            other => {
                return Err(Error::invalid_escape(
                    pos,
                    &format!("unrecognized escape '\\{}'", other),
                ));
            }
        }
    }

    Ok(out)
}

/// Reads exactly `digits` hex digits from the stream, for `\xHH` / `\uXXXX`.
fn read_hex<I>(chars: &mut I, pos: usize, digits: usize) -> Result<u32>
where
    I: Iterator<Item = (usize, char)>,
{
    let mut value = 0u32;
    for _ in 0..digits {
        let (_, ch) = chars.next().ok_or_else(|| {
            Error::invalid_escape(pos, &format!("truncated hex escape (expected {} digits)", digits))
        })?;
        let digit = ch
            .to_digit(16)
            .ok_or_else(|| Error::invalid_escape(pos, &format!("invalid hex digit {:?}", ch)))?;
        value = value * 16 + digit;
    }
    Ok(value)
}
