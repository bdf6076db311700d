//! JSON transcoding: convert between fcfg documents and JSON text.
//!
//! Mapping from fcfg to JSON:
//!   - Value::Absent       -> null
//!   - Value::Bool         -> JSON boolean
//!   - Value::Integer      -> JSON number (integer)
//!   - Value::Float        -> JSON number (the Variant payload as a float)
//!   - Value::String       -> JSON string
//!   - Value::List         -> JSON array, recursively
//!
//! Mapping from JSON to fcfg:
//!   - null                -> Value::Absent
//!   - boolean             -> Value::Bool
//!   - integer number      -> Value::Integer (must fit in i64)
//!   - float number        -> Value::Float (narrowed to f32)
//!   - string              -> Value::String
//!   - array               -> Value::List (integers and nested arrays only)
//!   - object below the stanza level -> error (fcfg has no nested maps)
//!
//! The top level must be an object of objects: stanza name to key/value
//! map. Stanza and key order is preserved in both directions.
//!
//! Lossy edges:
//!   - JSON floats are f64; they narrow to the nearest f32 on the way in,
//!     matching the 32-bit Variant payload.
//!   - Integers outside i64 are rejected rather than silently truncated.
//!
//! Both directions reject rather than emit output the other side cannot
//! read back: encoding rejects non-finite floats (JSON has no NaN or
//! infinity literal; serde_json would print `null` and the value would
//! come back as Absent), and decoding rejects JSON shapes whose fcfg
//! rendering could not re-parse (stanza names containing brackets or line
//! breaks, keys that are not fcfg identifiers, strings containing line
//! breaks, list elements other than integers and nested lists).

use crate::de;
use crate::{Document, Error, FcfgOptions, Result, Stanza, Value};
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::debug;

/// Encodes a document as JSON text with the given options.
///
/// # Errors
///
/// Returns [`Error::UnsupportedValueKind`] (naming the key path) if the
/// document contains a non-finite float, and [`Error::Json`] if
/// serialization fails (not expected for any well-formed [`Document`]).
pub fn encode(doc: &Document, options: &FcfgOptions) -> Result<String> {
    check_encodable(doc)?;

    if !options.pretty_json {
        return serde_json::to_string(doc).map_err(Error::from);
    }

    let indent = vec![b' '; options.json_indent];
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
    let mut out = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    doc.serialize(&mut ser)?;
    String::from_utf8(out).map_err(|e| Error::json(e.to_string()))
}

/// JSON has no NaN or infinity literal; serde_json prints such floats as
/// `null`, which would read back as Absent. Reject them up front instead.
fn check_encodable(doc: &Document) -> Result<()> {
    for (name, stanza) in doc.iter() {
        for (key, value) in stanza.iter() {
            check_finite(value, name, key)?;
        }
    }
    Ok(())
}

fn check_finite(value: &Value, stanza: &str, key: &str) -> Result<()> {
    match value {
        Value::Float(f) if !f.is_finite() => Err(Error::unsupported_kind(format!(
            "{}.{}: non-finite float {} has no JSON representation",
            stanza, key, f
        ))),
        Value::List(items) => items
            .iter()
            .try_for_each(|item| check_finite(item, stanza, key)),
        _ => Ok(()),
    }
}

/// Decodes JSON text into a document.
///
/// # Errors
///
/// Returns [`Error::Json`] on malformed JSON and
/// [`Error::UnsupportedValueKind`] (naming the key path) when the tree
/// contains a shape fcfg cannot express: a non-object top level, non-object
/// stanzas, nested objects inside values, integers outside i64, or any
/// name, key, or string whose fcfg rendering could not be parsed back
/// (see the module docs for the exact set).
pub fn decode(input: &str) -> Result<Document> {
    let root: JsonValue = serde_json::from_str(input)?;

    let JsonValue::Object(stanzas) = root else {
        return Err(Error::unsupported_kind(
            "top level must be an object of stanzas",
        ));
    };

    let mut doc = Document::new();
    for (name, entries) in stanzas {
        if name.contains(|c| matches!(c, '[' | ']' | '\n' | '\r')) {
            return Err(Error::unsupported_kind(format!(
                "stanza {:?} cannot be written as a [name] header",
                name
            )));
        }
        let JsonValue::Object(entries) = entries else {
            return Err(Error::unsupported_kind(format!(
                "stanza {:?} must be an object",
                name
            )));
        };
        let mut stanza = Stanza::with_capacity(entries.len());
        for (key, value) in entries {
            let path = format!("{}.{}", name, key);
            if !de::is_valid_key(&key) {
                return Err(Error::unsupported_kind(format!(
                    "{}: key is not a valid fcfg identifier",
                    path
                )));
            }
            stanza.insert(key, json_to_value(value, &path)?);
        }
        doc.insert(name, stanza);
    }

    debug!(stanzas = doc.len(), "decoded JSON document");
    Ok(doc)
}

fn json_to_value(value: JsonValue, path: &str) -> Result<Value> {
    match value {
        JsonValue::Null => Ok(Value::Absent),
        JsonValue::Bool(b) => Ok(Value::Bool(b)),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Integer(i))
            } else if n.is_u64() {
                Err(Error::unsupported_kind(format!(
                    "{}: integer {} does not fit in i64",
                    path, n
                )))
            } else {
                // serde_json guarantees a finite f64 here.
                Ok(Value::Float(n.as_f64().unwrap_or_default() as f32))
            }
        }
        JsonValue::String(s) => {
            // Values live on a single key=value line and the format has no
            // escape for line breaks inside bare strings.
            if s.contains(|c| c == '\n' || c == '\r') {
                return Err(Error::unsupported_kind(format!(
                    "{}: string contains a line break, which fcfg cannot express",
                    path
                )));
            }
            Ok(Value::String(s))
        }
        JsonValue::Array(items) => {
            let list: Result<Vec<Value>> = items
                .into_iter()
                .map(|item| json_to_list_element(item, path))
                .collect();
            Ok(Value::List(list?))
        }
        JsonValue::Object(_) => Err(Error::unsupported_kind(format!(
            "{}: nested objects are not representable in fcfg",
            path
        ))),
    }
}

/// The list-literal grammar holds only integers and nested lists, so any
/// other element kind would serialize to text the parser rejects.
fn json_to_list_element(value: JsonValue, path: &str) -> Result<Value> {
    match value {
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => Ok(Value::Integer(i)),
            None => Err(Error::unsupported_kind(format!(
                "{}: list elements must be integers that fit in i64, got {}",
                path, n
            ))),
        },
        JsonValue::Array(items) => {
            let list: Result<Vec<Value>> = items
                .into_iter()
                .map(|item| json_to_list_element(item, path))
                .collect();
            Ok(Value::List(list?))
        }
        other => Err(Error::unsupported_kind(format!(
            "{}: list elements must be integers or nested lists, got {}",
            path,
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
