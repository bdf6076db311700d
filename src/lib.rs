//! # fcfg
//!
//! Convert between the stanza-based fcfg configuration format and JSON.
//!
//! ## What is fcfg?
//!
//! fcfg files group `key=value` lines under `[name]` headers. Values cover
//! six kinds: absent, boolean, integer, string, nested integer lists, and a
//! binary-tagged 32-bit float stored as `@Variant(...)` escape text. This
//! crate parses fcfg into an ordered [`Document`], serializes documents back
//! to fcfg text, and converts documents to and from JSON — round-tripping
//! values (including Variant floats, bit-exactly) in both directions.
//!
//! ## Key Features
//!
//! - **Variant codec**: the 8-byte magic-plus-big-endian-f32 blob and its
//!   C-style byte-escape text form, faithful to existing fcfg files
//! - **Order preserving**: stanzas and keys keep insertion order end to end
//! - **All-or-nothing**: any malformed input aborts the whole conversion
//!   with a located error; no partial output
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use fcfg::{from_str, to_json_string, from_json_str, to_string};
//!
//! let text = "[General]\nenabled=true\ncount=3\npoints=[[1,1,20],[2,4,90]]\n";
//!
//! // fcfg -> document -> JSON
//! let doc = from_str(text).unwrap();
//! let json = to_json_string(&doc).unwrap();
//!
//! // JSON -> document -> fcfg
//! let doc_back = from_json_str(&json).unwrap();
//! assert_eq!(doc, doc_back);
//! let text_back = to_string(&doc_back);
//! assert_eq!(from_str(&text_back).unwrap(), doc);
//! ```
//!
//! ## Working with Values
//!
//! ```rust
//! use fcfg::{fcfg, Document, Stanza, Value, to_string};
//!
//! let mut stanza = Stanza::new();
//! stanza.insert("scale".to_string(), Value::Float(1.0));
//! stanza.insert("points".to_string(), fcfg!([[1, 2], [3, 4]]));
//!
//! let mut doc = Document::new();
//! doc.insert("General".to_string(), stanza);
//!
//! let text = to_string(&doc);
//! assert!(text.contains("scale=@Variant("));
//! ```
//!
//! ## Format Specification
//!
//! See the [`spec`] module for the full format description, and [`escape`] /
//! [`variant`] for the byte-level encoding.

pub mod de;
pub mod error;
pub mod escape;
pub mod json;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod spec;
pub mod value;
pub mod variant;

pub use error::{Error, Result};
pub use map::{Document, Stanza};
pub use options::FcfgOptions;
pub use value::Value;

use std::io;

/// Parses fcfg text into a [`Document`].
///
/// # Examples
///
/// ```rust
/// use fcfg::{from_str, Value};
///
/// let doc = from_str("[General]\ncount=3\n").unwrap();
/// assert_eq!(doc.get("General").unwrap().get("count"), Some(&Value::Integer(3)));
/// ```
///
/// # Errors
///
/// Returns an error if any line fails the stanza/pair grammar or any value
/// fails to decode; nothing is returned for partially valid input.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(input: &str) -> Result<Document> {
    de::from_str(input)
}

/// Parses fcfg text from an I/O stream into a [`Document`].
///
/// # Errors
///
/// Returns an error if reading fails or the input is not valid fcfg.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Document> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&input)
}

/// Serializes a [`Document`] as fcfg text with default options.
///
/// Writing is infallible: every [`Value`] kind has a textual rendering.
///
/// # Examples
///
/// ```rust
/// use fcfg::{Document, Stanza, Value, to_string};
///
/// let mut stanza = Stanza::new();
/// stanza.insert("enabled".to_string(), Value::Bool(true));
/// let mut doc = Document::new();
/// doc.insert("General".to_string(), stanza);
///
/// assert_eq!(to_string(&doc), "[General]\nenabled=true\n\n");
/// ```
#[must_use]
pub fn to_string(doc: &Document) -> String {
    ser::to_string_with_options(doc, &FcfgOptions::default())
}

/// Serializes a [`Document`] as fcfg text with custom options.
#[must_use]
pub fn to_string_with_options(doc: &Document, options: &FcfgOptions) -> String {
    ser::to_string_with_options(doc, options)
}

/// Writes a [`Document`] as fcfg text to a writer.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W: io::Write>(mut writer: W, doc: &Document) -> Result<()> {
    writer
        .write_all(to_string(doc).as_bytes())
        .map_err(|e| Error::io(&e.to_string()))
}

/// Encodes a [`Document`] as JSON text with default options (two-space
/// pretty print).
///
/// # Errors
///
/// Returns an error if the document contains a non-finite float (JSON has
/// no rendering for it) or JSON serialization fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_json_string(doc: &Document) -> Result<String> {
    json::encode(doc, &FcfgOptions::default())
}

/// Encodes a [`Document`] as JSON text with custom options.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_json_string_with_options(doc: &Document, options: &FcfgOptions) -> Result<String> {
    json::encode(doc, options)
}

/// Decodes JSON text into a [`Document`].
///
/// # Errors
///
/// Returns an error on malformed JSON, a non-object top level, or shapes
/// fcfg cannot express: nested objects, integers outside i64, and names,
/// keys, or strings whose fcfg rendering could not be parsed back (see
/// [`json::decode`]).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_json_str(input: &str) -> Result<Document> {
    json::decode(input)
}

/// Decodes JSON from an I/O stream into a [`Document`].
///
/// # Errors
///
/// Returns an error if reading fails or the JSON is not convertible.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_json_reader<R: io::Read>(mut reader: R) -> Result<Document> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_json_str(&input)
}

/// Converts fcfg text straight to JSON text.
///
/// # Examples
///
/// ```rust
/// use fcfg::{fcfg_to_json, FcfgOptions};
///
/// let json = fcfg_to_json("[G]\nx=1\n", &FcfgOptions::new().with_pretty_json(false)).unwrap();
/// assert_eq!(json, r#"{"G":{"x":1}}"#);
/// ```
///
/// # Errors
///
/// Returns an error if the fcfg input fails to parse.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn fcfg_to_json(input: &str, options: &FcfgOptions) -> Result<String> {
    let doc = from_str(input)?;
    json::encode(&doc, options)
}

/// Converts JSON text straight to fcfg text.
///
/// # Errors
///
/// Returns an error if the JSON fails to parse or is not representable.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn json_to_fcfg(input: &str, options: &FcfgOptions) -> Result<String> {
    let doc = from_json_str(input)?;
    Ok(to_string_with_options(&doc, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_fcfg() {
        let text = "[General]\nenabled=true\ncount=3\npoints=[[1,1,20],[2,4,90]]\n";
        let doc = from_str(text).unwrap();
        let text_back = to_string(&doc);
        assert_eq!(from_str(&text_back).unwrap(), doc);
    }

    #[test]
    fn test_round_trip_through_json() {
        let text = "[General]\nenabled=true\nnote=\nname=Alice\n";
        let doc = from_str(text).unwrap();
        let json = to_json_string(&doc).unwrap();
        assert_eq!(from_json_str(&json).unwrap(), doc);
    }

    #[test]
    fn test_from_reader() {
        let cursor = std::io::Cursor::new(b"[G]\nx=1\n");
        let doc = from_reader(cursor).unwrap();
        assert_eq!(doc.get("G").unwrap().get("x"), Some(&Value::Integer(1)));
    }

    #[test]
    fn test_to_writer() {
        let doc = from_str("[G]\nx=1\n").unwrap();
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &doc).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "[G]\nx=1\n\n");
    }

    #[test]
    fn test_variant_survives_both_directions() {
        let doc = from_str("[G]\nscale=@Variant(\\0\\0\\0\\x87?\\x80\\0\\0)\n").unwrap();
        assert_eq!(doc.get("G").unwrap().get("scale"), Some(&Value::Float(1.0)));

        let json = to_json_string(&doc).unwrap();
        let doc_back = from_json_str(&json).unwrap();
        let text = to_string(&doc_back);
        assert!(text.contains("scale=@Variant(\\0\\0\\0\\x87?\\x80\\0\\0)"));
    }
}
