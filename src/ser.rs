//! fcfg writing: a [`Document`] back into stanza text.
//!
//! ## Overview
//!
//! The writer walks the document in insertion order and emits one `[name]`
//! header per stanza followed by its `key=value` lines, with a blank line
//! separating stanzas. Each value renders through [`value_to_rhs`], the
//! inverse of the right-hand-side parser:
//!
//! - absent values render as an empty right-hand side
//! - booleans as `true` / `false`
//! - integers as decimal text
//! - floats as `@Variant(...)`, double-quoted when the escaped payload
//!   happens to contain an `=` character
//! - lists recursively, with no inter-element spaces
//! - strings verbatim, quoted by the writer when bare text would lose
//!   emptiness or surrounding whitespace on the way back
//!
//! ## Usage
//!
//! Most users should use [`crate::to_string`]:
//!
//! ```rust
//! use fcfg::{Document, Stanza, Value, to_string};
//!
//! let mut stanza = Stanza::new();
//! stanza.insert("enabled".to_string(), Value::Bool(true));
//! let mut doc = Document::new();
//! doc.insert("General".to_string(), stanza);
//!
//! assert_eq!(to_string(&doc), "[General]\nenabled=true\n\n");
//! ```

use crate::{variant, Document, FcfgOptions, Value};
use tracing::debug;

/// Renders one value as fcfg right-hand-side text.
///
/// This is the raw per-value mapping; it does not apply the writer's string
/// quoting (see [`rhs_for_line`]). Rendering is infallible: the [`Value`]
/// enum is closed and every kind has a textual form.
///
/// # Examples
///
/// ```rust
/// use fcfg::{ser::value_to_rhs, Value};
///
/// assert_eq!(value_to_rhs(&Value::Absent), "");
/// assert_eq!(value_to_rhs(&Value::Integer(-7)), "-7");
/// assert_eq!(
///     value_to_rhs(&Value::List(vec![Value::Integer(1), Value::Integer(2)])),
///     "[1,2]"
/// );
/// ```
#[must_use]
pub fn value_to_rhs(value: &Value) -> String {
    match value {
        Value::Absent => String::new(),
        Value::Bool(true) => "true".to_string(),
        Value::Bool(false) => "false".to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => {
            let inner = variant::encode(*f);
            // An '=' inside the payload would read as a nested key=value
            // pair downstream; quoting the whole expression prevents that.
            if inner.contains('=') {
                format!("\"@Variant({})\"", inner)
            } else {
                format!("@Variant({})", inner)
            }
        }
        Value::List(list) => {
            let elements: Vec<String> = list.iter().map(value_to_rhs).collect();
            format!("[{}]", elements.join(","))
        }
        Value::String(s) => s.clone(),
    }
}

/// Renders a value for a `key=` line, quoting strings that would otherwise
/// re-parse as a different value kind or lose surrounding whitespace.
#[must_use]
pub fn rhs_for_line(value: &Value) -> String {
    match value {
        Value::String(s) if string_needs_quotes(s) => format!("\"{}\"", s),
        other => value_to_rhs(other),
    }
}

/// Whether a bare string on a `key=` line would be misread on the way back.
///
/// Quoting preserves emptiness and surrounding whitespace. Note that the
/// right-hand-side parser strips one outer quote pair *before* literal
/// detection, so quoting cannot protect text like `true` or `42` from being
/// re-read as a literal; value round-tripping of such strings is inherently
/// lossy in this format.
fn string_needs_quotes(s: &str) -> bool {
    s.is_empty()
        || s.starts_with(' ')
        || s.ends_with(' ')
        || (s.starts_with('"') && s.ends_with('"'))
        || (s.starts_with('\'') && s.ends_with('\''))
}

/// Writes a whole document as fcfg text with the given options.
#[must_use]
pub fn to_string_with_options(doc: &Document, options: &FcfgOptions) -> String {
    let mut out = String::new();
    for (name, stanza) in doc.iter() {
        debug!(stanza = name.as_str(), entries = stanza.len(), "writing stanza");
        out.push('[');
        out.push_str(name);
        out.push_str("]\n");
        for (key, value) in stanza.iter() {
            out.push_str(key);
            out.push('=');
            out.push_str(&rhs_for_line(value));
            out.push('\n');
        }
        if options.trailing_blank_line {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Stanza;

    #[test]
    fn test_scalar_rhs() {
        assert_eq!(value_to_rhs(&Value::Absent), "");
        assert_eq!(value_to_rhs(&Value::Bool(true)), "true");
        assert_eq!(value_to_rhs(&Value::Bool(false)), "false");
        assert_eq!(value_to_rhs(&Value::Integer(0)), "0");
        assert_eq!(value_to_rhs(&Value::Integer(-42)), "-42");
        assert_eq!(
            value_to_rhs(&Value::String("plain text".to_string())),
            "plain text"
        );
    }

    #[test]
    fn test_nested_list_renders_without_spaces() {
        let list = Value::List(vec![
            Value::List(vec![
                Value::Integer(1),
                Value::Integer(1),
                Value::Integer(20),
            ]),
            Value::List(vec![
                Value::Integer(2),
                Value::Integer(4),
                Value::Integer(90),
            ]),
        ]);
        assert_eq!(value_to_rhs(&list), "[[1,1,20],[2,4,90]]");
    }

    #[test]
    fn test_float_renders_as_variant() {
        assert_eq!(
            value_to_rhs(&Value::Float(1.0)),
            "@Variant(\\0\\0\\0\\x87?\\x80\\0\\0)"
        );
    }

    #[test]
    fn test_variant_with_equals_byte_gets_quoted() {
        // 0.1f32 is 0x3DCCCCCD and 0x3D is '='.
        assert_eq!(
            value_to_rhs(&Value::Float(0.1)),
            "\"@Variant(\\0\\0\\0\\x87=\\xcc\\xcc\\xcd)\""
        );
    }

    #[test]
    fn test_string_quoting_on_lines() {
        assert_eq!(rhs_for_line(&Value::String(String::new())), "\"\"");
        assert_eq!(rhs_for_line(&Value::String(" x ".to_string())), "\" x \"");
        assert_eq!(
            rhs_for_line(&Value::String("'quoted'".to_string())),
            "\"'quoted'\""
        );
        assert_eq!(
            rhs_for_line(&Value::String("plain".to_string())),
            "plain"
        );
    }

    #[test]
    fn test_document_layout() {
        let mut stanza = Stanza::new();
        stanza.insert("a".to_string(), Value::Integer(1));
        stanza.insert("b".to_string(), Value::Absent);
        let mut doc = Document::new();
        doc.insert("First".to_string(), stanza);
        doc.insert("Second".to_string(), Stanza::new());

        let text = to_string_with_options(&doc, &FcfgOptions::default());
        assert_eq!(text, "[First]\na=1\nb=\n\n[Second]\n\n");
    }

    #[test]
    fn test_no_trailing_blank_lines() {
        let mut doc = Document::new();
        doc.insert("Only".to_string(), Stanza::new());
        let options = FcfgOptions::new().with_trailing_blank_line(false);
        assert_eq!(to_string_with_options(&doc, &options), "[Only]\n");
    }
}
