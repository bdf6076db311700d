//! Property-based tests covering the codec round-trip guarantees.
//!
//! These complement the integration tests by exercising the byte-escape and
//! Variant codecs across generated inputs rather than hand-picked vectors.

use fcfg::{de::parse_rhs, escape, ser::value_to_rhs, variant, Value};
use proptest::prelude::*;

proptest! {
    // Every f32 bit pattern survives encode/decode exactly, NaNs included.
    #[test]
    fn prop_variant_bit_exact(bits in any::<u32>()) {
        let f = f32::from_bits(bits);
        let decoded = variant::decode(&variant::encode(f)).unwrap();
        prop_assert_eq!(decoded.to_bits(), bits);
    }

    // Anything our own escape encoder produces decodes back to the input.
    #[test]
    fn prop_escape_round_trip(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let text = escape::encode(&bytes);
        prop_assert_eq!(escape::decode(&text).unwrap(), bytes);
    }

    // Escape output is pure ASCII, so it always fits on a config line.
    #[test]
    fn prop_escape_output_is_ascii(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assert!(escape::encode(&bytes).is_ascii());
    }

    #[test]
    fn prop_integer_literal_round_trip(n in any::<i64>()) {
        let value = Value::Integer(n);
        prop_assert_eq!(parse_rhs(&value_to_rhs(&value)).unwrap(), value);
    }

    // Flat integer lists render and re-parse to the same value.
    #[test]
    fn prop_integer_list_round_trip(items in prop::collection::vec(any::<i64>(), 0..16)) {
        let value = Value::List(items.into_iter().map(Value::Integer).collect());
        prop_assert_eq!(parse_rhs(&value_to_rhs(&value)).unwrap(), value);
    }

    // Word-shaped strings with inner spaces never collide with a literal.
    #[test]
    fn prop_plain_string_round_trip(s in "[a-z]{1,8} [a-z]{1,8}") {
        let value = Value::String(s);
        prop_assert_eq!(parse_rhs(&value_to_rhs(&value)).unwrap(), value);
    }
}
