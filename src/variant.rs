//! Variant codec: the 8-byte binary-tagged float blob.
//!
//! The fcfg format stores floats as `@Variant(...)` expressions whose inner
//! text is the byte-escape encoding (see [`crate::escape`]) of an 8-byte
//! blob: a fixed 4-byte big-endian magic constant identifying the payload
//! kind, followed by the value as a big-endian IEEE-754 single-precision
//! float. The only payload kind this crate supports is the f32 one,
//! [`MAGIC`]; any other magic value is rejected as corrupt.
//!
//! ## Round trip
//!
//! `decode(&encode(f))` is bit-exact for every representable `f32`,
//! including NaN bit patterns, because the float travels as its raw bytes.
//!
//! ## Examples
//!
//! ```rust
//! use fcfg::variant;
//!
//! let inner = variant::encode(1.0);
//! assert_eq!(inner, r"\0\0\0\x87?\x80\0\0");
//! assert_eq!(variant::decode(&inner).unwrap(), 1.0);
//! ```

use crate::{escape, Error, Result};
use tracing::trace;

/// The 4-byte big-endian magic prefix for the float payload kind,
/// `0x00000087`.
pub const MAGIC: [u8; 4] = [0x00, 0x00, 0x00, 0x87];

/// Total size of a Variant blob: magic plus big-endian f32.
const BLOB_LEN: usize = 8;

/// Encodes a float as Variant inner text, the part that belongs inside
/// `@Variant(...)`.
///
/// # Examples
///
/// ```rust
/// use fcfg::variant::encode;
///
/// // 0x3F800000 is 1.0f32; 0x3F is printable '?'.
/// assert_eq!(encode(1.0), r"\0\0\0\x87?\x80\0\0");
/// ```
#[must_use]
pub fn encode(value: f32) -> String {
    let mut blob = [0u8; BLOB_LEN];
    blob[..4].copy_from_slice(&MAGIC);
    blob[4..].copy_from_slice(&value.to_be_bytes());
    escape::encode(&blob)
}

/// Decodes Variant inner text back into the float it carries.
///
/// # Errors
///
/// Returns [`Error::InvalidEscapeSequence`] if the escape text itself is
/// malformed, and [`Error::CorruptVariant`] if the decoded blob is not
/// exactly 8 bytes or does not start with [`MAGIC`].
///
/// # Examples
///
/// ```rust
/// use fcfg::variant::decode;
///
/// assert_eq!(decode(r"\0\0\0\x87?\x80\0\0").unwrap(), 1.0);
/// assert!(decode(r"\0\0\0\x88?\x80\0\0").is_err());
/// ```
pub fn decode(text: &str) -> Result<f32> {
    let blob = escape::decode(text)?;
    trace!(len = blob.len(), "decoded Variant blob");

    if blob.len() != BLOB_LEN {
        return Err(Error::corrupt_variant(format!(
            "blob is {} bytes, expected {}",
            blob.len(),
            BLOB_LEN
        )));
    }
    if blob[..4] != MAGIC {
        return Err(Error::corrupt_variant(format!(
            "magic prefix {:02x}{:02x}{:02x}{:02x} does not match 00000087",
            blob[0], blob[1], blob[2], blob[3]
        )));
    }

    let mut payload = [0u8; 4];
    payload.copy_from_slice(&blob[4..]);
    Ok(f32::from_be_bytes(payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_values() {
        assert_eq!(encode(1.0), "\\0\\0\\0\\x87?\\x80\\0\\0");
        assert_eq!(encode(0.0), "\\0\\0\\0\\x87\\0\\0\\0\\0");
        // 0.1f32 is 0x3DCCCCCD; 0x3D is '=' and stays literal here.
        assert_eq!(encode(0.1), "\\0\\0\\0\\x87=\\xcc\\xcc\\xcd");
    }

    #[test]
    fn test_round_trip_is_bit_exact() {
        for f in [0.0f32, -0.0, 1.0, -1.5, 0.1, 1e-38, 3.4e38, f32::INFINITY] {
            let decoded = decode(&encode(f)).unwrap();
            assert_eq!(decoded.to_bits(), f.to_bits());
        }
        // NaN bit patterns survive too.
        let quiet_nan = f32::from_bits(0x7FC0_1234);
        assert_eq!(decode(&encode(quiet_nan)).unwrap().to_bits(), 0x7FC0_1234);
    }

    #[test]
    fn test_wrong_magic_is_corrupt() {
        let err = decode("\\0\\0\\0\\x88?\\x80\\0\\0").unwrap_err();
        assert!(matches!(err, Error::CorruptVariant(_)));
    }

    #[test]
    fn test_wrong_length_is_corrupt() {
        let err = decode("\\0\\0\\0\\x87?\\x80").unwrap_err();
        assert!(matches!(err, Error::CorruptVariant(_)));
        let err = decode("\\0\\0\\0\\x87?\\x80\\0\\0\\0").unwrap_err();
        assert!(matches!(err, Error::CorruptVariant(_)));
    }

    #[test]
    fn test_malformed_escape_text_propagates() {
        let err = decode("\\0\\0\\0\\x8").unwrap_err();
        assert!(matches!(err, Error::InvalidEscapeSequence { .. }));
    }
}
