//! fcfg parsing: text lines into a [`Document`].
//!
//! ## Overview
//!
//! An fcfg file is a sequence of stanza blocks. A header line is `[` + name +
//! `]` with nothing else on the line; the lines that follow, until the next
//! header or end of input, are `key=value` pairs. Blank lines are separators
//! and carry no meaning. Stanzas do not nest.
//!
//! Parsing is a single sequential pass over the input lines. Each right-hand
//! side goes through [`parse_rhs`], which decides among the six value kinds:
//!
//! 1. one matching outer pair of `"` or `'` is stripped (once)
//! 2. `@Variant(...)` decodes through the Variant codec to a float
//! 3. `[...]` parses as a recursive list literal
//! 4. exactly `true` or `false` is a boolean
//! 5. an optional `-` followed by digits is an integer
//! 6. anything else is a string, kept verbatim
//!
//! Any error aborts the whole conversion; there is no partial document.
//!
//! ## Usage
//!
//! Most users should use [`crate::from_str`]:
//!
//! ```rust
//! use fcfg::{from_str, Value};
//!
//! let doc = from_str("[General]\nenabled=true\ncount=3\n").unwrap();
//! let general = doc.get("General").unwrap();
//! assert_eq!(general.get("enabled"), Some(&Value::Bool(true)));
//! assert_eq!(general.get("count"), Some(&Value::Integer(3)));
//! ```

use crate::{variant, Document, Error, Result, Value};
use tracing::debug;

/// Parses a complete fcfg document from text.
///
/// Re-opening an already-seen `[name]` header merges the following keys into
/// the existing stanza. A `key=value` line before any header is rejected as
/// malformed, as is any non-blank line that is neither a header nor a valid
/// pair.
pub fn from_str(input: &str) -> Result<Document> {
    let mut doc = Document::new();
    let mut current: Option<String> = None;

    for (idx, raw_line) in input.lines().enumerate() {
        let lineno = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(name) = header_name(line) {
            debug!(stanza = name, line = lineno, "entering stanza");
            doc.entry_or_default(name);
            current = Some(name.to_string());
            continue;
        }

        let (key, rhs) = split_pair(line).ok_or_else(|| Error::malformed_line(lineno, line))?;

        let stanza_name = current
            .as_deref()
            .ok_or_else(|| Error::malformed_line(lineno, line))?;

        let value = match rhs {
            None => Value::Absent,
            Some(text) => parse_rhs(text).map_err(|e| attach_line(e, lineno))?,
        };

        doc.entry_or_default(stanza_name)
            .insert(key.to_string(), value);
    }

    debug!(stanzas = doc.len(), "parsed fcfg document");
    Ok(doc)
}

/// Folds the line number into value-level errors so callers can locate the
/// offending input.
fn attach_line(err: Error, lineno: usize) -> Error {
    match err {
        Error::InvalidListLiteral { context, msg } => Error::InvalidListLiteral {
            context,
            msg: format!("{} (line {})", msg, lineno),
        },
        Error::CorruptVariant(msg) => {
            Error::CorruptVariant(format!("{} (line {})", msg, lineno))
        }
        Error::InvalidEscapeSequence { pos, msg } => Error::InvalidEscapeSequence {
            pos,
            msg: format!("{} (line {})", msg, lineno),
        },
        other => other,
    }
}

/// Returns the stanza name if `line` is a `[name]` header.
fn header_name(line: &str) -> Option<&str> {
    line.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        // A bracketed line containing further brackets is a list value, not
        // a header; those can only appear on the right of `=`, so any
        // remaining bracket here means the line is malformed. Let the pair
        // grammar reject it.
        .filter(|name| !name.contains('[') && !name.contains(']'))
}

/// Splits a `key=value` line into its key and optional right-hand side.
///
/// Returns `None` when the line has no `=` or the key does not match the
/// identifier rule (letters, digits, underscore, not starting with a digit).
/// The right-hand side is `None` for a trailing `=` with nothing after it.
fn split_pair(line: &str) -> Option<(&str, Option<&str>)> {
    let eq = line.find('=')?;
    let key = line[..eq].trim_end();
    if !is_valid_key(key) {
        return None;
    }
    let rhs = line[eq + 1..].trim_start();
    if rhs.is_empty() {
        Some((key, None))
    } else {
        Some((key, Some(rhs)))
    }
}

pub(crate) fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Parses one right-hand side into a typed [`Value`].
///
/// # Errors
///
/// Propagates [`Error::CorruptVariant`] / [`Error::InvalidEscapeSequence`]
/// from `@Variant(...)` contents and [`Error::InvalidListLiteral`] from
/// bracketed text. Text that matches no other rule is a string, never an
/// error.
///
/// # Examples
///
/// ```rust
/// use fcfg::{de::parse_rhs, Value};
///
/// assert_eq!(parse_rhs("true").unwrap(), Value::Bool(true));
/// assert_eq!(parse_rhs("-42").unwrap(), Value::Integer(-42));
/// assert_eq!(parse_rhs("\"hello\"").unwrap(), Value::String("hello".into()));
/// assert_eq!(parse_rhs("[1,2]").unwrap(),
///            Value::List(vec![Value::Integer(1), Value::Integer(2)]));
/// ```
pub fn parse_rhs(text: &str) -> Result<Value> {
    let text = strip_outer_quotes(text);

    if let Some(inner) = text
        .strip_prefix("@Variant(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return Ok(Value::Float(variant::decode(inner)?));
    }

    if text.starts_with('[') && text.ends_with(']') {
        return parse_list(text);
    }

    match text {
        "true" => return Ok(Value::Bool(true)),
        "false" => return Ok(Value::Bool(false)),
        _ => {}
    }

    if is_integer_literal(text) {
        if let Ok(i) = text.parse::<i64>() {
            return Ok(Value::Integer(i));
        }
        // Matches the digit shape but overflows i64; keep it verbatim.
    }

    Ok(Value::String(text.to_string()))
}

/// Strips exactly one matching outer pair of double or single quotes.
fn strip_outer_quotes(text: &str) -> &str {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return &text[1..text.len() - 1];
        }
    }
    text
}

fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a bracketed list literal: comma-separated integers and nested
/// lists, with optional whitespace between tokens.
///
/// Restricted by design to integers and brackets; nothing else evaluates,
/// so the accepted grammar stays auditable.
pub(crate) fn parse_list(text: &str) -> Result<Value> {
    let mut parser = ListParser {
        literal: text,
        bytes: text.as_bytes(),
        pos: 0,
    };
    let value = parser.parse_list()?;
    parser.skip_whitespace();
    if parser.pos != parser.bytes.len() {
        return Err(parser.error("trailing characters after closing bracket"));
    }
    Ok(value)
}

/// Recursive-descent parser over the bytes of one list literal.
struct ListParser<'a> {
    literal: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ListParser<'a> {
    fn error(&self, msg: &str) -> Error {
        Error::invalid_list(self.literal, &format!("{} at offset {}", msg, self.pos))
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn parse_list(&mut self) -> Result<Value> {
        self.skip_whitespace();
        if self.bump() != Some(b'[') {
            return Err(self.error("expected '['"));
        }
        let mut elements = Vec::new();

        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.pos += 1;
            return Ok(Value::List(elements));
        }

        loop {
            elements.push(self.parse_element()?);
            self.skip_whitespace();
            match self.bump() {
                Some(b',') => self.skip_whitespace(),
                Some(b']') => return Ok(Value::List(elements)),
                Some(_) => return Err(self.error("expected ',' or ']'")),
                None => return Err(self.error("missing closing bracket")),
            }
        }
    }

    fn parse_element(&mut self) -> Result<Value> {
        self.skip_whitespace();
        match self.peek() {
            Some(b'[') => self.parse_list(),
            Some(b'-') | Some(b'0'..=b'9') => self.parse_integer(),
            Some(_) => Err(self.error("expected integer or nested list")),
            None => Err(self.error("unexpected end of list literal")),
        }
    }

    fn parse_integer(&mut self) -> Result<Value> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        let digits_start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        if self.pos == digits_start {
            return Err(self.error("expected digits"));
        }
        self.literal[start..self.pos]
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| self.error("integer out of range"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_detection() {
        assert_eq!(header_name("[General]"), Some("General"));
        assert_eq!(header_name("[a b]"), Some("a b"));
        assert_eq!(header_name("key=[1,2]"), None);
        assert_eq!(header_name("[[1,2],[3,4]]"), None);
    }

    #[test]
    fn test_split_pair() {
        assert_eq!(split_pair("key=value"), Some(("key", Some("value"))));
        assert_eq!(split_pair("key ="), Some(("key", None)));
        assert_eq!(split_pair("key = value"), Some(("key", Some("value"))));
        assert_eq!(split_pair("no_equals_here"), None);
        assert_eq!(split_pair("2bad=1"), None);
        assert_eq!(split_pair("=1"), None);
    }

    #[test]
    fn test_rhs_literals() {
        assert_eq!(parse_rhs("true").unwrap(), Value::Bool(true));
        assert_eq!(parse_rhs("false").unwrap(), Value::Bool(false));
        assert_eq!(parse_rhs("-42").unwrap(), Value::Integer(-42));
        assert_eq!(parse_rhs("0").unwrap(), Value::Integer(0));
        assert_eq!(parse_rhs("-").unwrap(), Value::String("-".to_string()));
        assert_eq!(
            parse_rhs("hello world").unwrap(),
            Value::String("hello world".to_string())
        );
    }

    #[test]
    fn test_rhs_quote_stripping() {
        assert_eq!(
            parse_rhs("\"hello\"").unwrap(),
            Value::String("hello".to_string())
        );
        assert_eq!(parse_rhs("'x'").unwrap(), Value::String("x".to_string()));
        // Only one outer pair comes off.
        assert_eq!(
            parse_rhs("\"\"two\"\"").unwrap(),
            Value::String("\"two\"".to_string())
        );
        // Dispatch continues on the unwrapped text.
        assert_eq!(parse_rhs("\"[1]\"").unwrap(), Value::List(vec![Value::Integer(1)]));
    }

    #[test]
    fn test_rhs_integer_overflow_stays_string() {
        let big = "99999999999999999999999";
        assert_eq!(parse_rhs(big).unwrap(), Value::String(big.to_string()));
    }

    #[test]
    fn test_list_literals() {
        assert_eq!(parse_rhs("[]").unwrap(), Value::List(vec![]));
        assert_eq!(
            parse_rhs("[1,4]").unwrap(),
            Value::List(vec![Value::Integer(1), Value::Integer(4)])
        );
        assert_eq!(
            parse_rhs("[[1,1,20],[2,4,90]]").unwrap(),
            Value::List(vec![
                Value::List(vec![
                    Value::Integer(1),
                    Value::Integer(1),
                    Value::Integer(20)
                ]),
                Value::List(vec![
                    Value::Integer(2),
                    Value::Integer(4),
                    Value::Integer(90)
                ]),
            ])
        );
        // Whitespace between tokens is tolerated.
        assert_eq!(
            parse_rhs("[ 1 , [ 2 ] ]").unwrap(),
            Value::List(vec![
                Value::Integer(1),
                Value::List(vec![Value::Integer(2)])
            ])
        );
    }

    #[test]
    fn test_malformed_lists() {
        for bad in ["[1,]", "[1", "[1]]", "[a]", "[1;2]", "[1,2,[3]"] {
            let err = parse_rhs(bad).unwrap_err();
            assert!(
                matches!(err, Error::InvalidListLiteral { .. }),
                "expected InvalidListLiteral for {:?}, got {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn test_variant_rhs() {
        assert_eq!(
            parse_rhs("@Variant(\\0\\0\\0\\x87?\\x80\\0\\0)").unwrap(),
            Value::Float(1.0)
        );
        // A quoted Variant (the writer quotes when the inner text holds '=').
        assert_eq!(
            parse_rhs("\"@Variant(\\0\\0\\0\\x87=\\xcc\\xcc\\xcd)\"").unwrap(),
            Value::Float(0.1)
        );
        assert!(matches!(
            parse_rhs("@Variant(\\0\\0\\0\\x99\\0\\0\\0\\0)"),
            Err(Error::CorruptVariant(_))
        ));
    }

    #[test]
    fn test_key_before_header_is_malformed() {
        let err = from_str("orphan=1\n").unwrap_err();
        assert!(matches!(err, Error::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn test_reopened_stanza_merges() {
        let doc = from_str("[A]\nx=1\n[B]\ny=2\n[A]\nz=3\n").unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.get("A").unwrap().len(), 2);
        assert_eq!(doc.get("A").unwrap().get("z"), Some(&Value::Integer(3)));
    }
}
