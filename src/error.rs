//! Error types for fcfg parsing, writing, and JSON conversion.
//!
//! Every failure aborts the whole conversion: there is no partial-output or
//! best-effort mode. Errors carry enough context (a line number on the fcfg
//! side, a key path on the JSON side) to locate the offending input.
//!
//! ## Error Categories
//!
//! - **Line errors**: a non-blank, non-header line does not match the
//!   `key=value` grammar
//! - **Value errors**: a right-hand side fails to decode as a list literal,
//!   escape sequence, or Variant blob
//! - **Document errors**: the JSON side contains a shape fcfg cannot express
//! - **I/O errors**: reading or writing the underlying streams failed
//!
//! ## Examples
//!
//! ```rust
//! use fcfg::{from_str, Error};
//!
//! let result = from_str("[General]\nnot_a_valid_line_without_equals\n");
//! match result {
//!     Err(Error::MalformedLine { line, .. }) => assert_eq!(line, 2),
//!     other => panic!("expected MalformedLine, got {:?}", other),
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while converting between
/// fcfg text and the JSON document form.
///
/// Each variant includes contextual information to aid debugging.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A non-blank, non-header line does not match the `key=value` grammar.
    #[error("malformed line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },

    /// Bracketed text failed to parse as a list of integers and nested lists.
    #[error("invalid list literal {context:?}: {msg}")]
    InvalidListLiteral { context: String, msg: String },

    /// A decoded Variant blob is not 8 bytes or its magic prefix is wrong.
    #[error("corrupt Variant: {0}")]
    CorruptVariant(String),

    /// The byte-escape decoder hit an unrecognized or truncated escape.
    #[error("invalid escape sequence at offset {pos}: {msg}")]
    InvalidEscapeSequence { pos: usize, msg: String },

    /// A value kind exists on the document side that fcfg cannot render
    /// (nested objects, non-finite or out-of-range numbers).
    #[error("unsupported value kind: {0}")]
    UnsupportedValueKind(String),

    /// IO error during reading or writing.
    #[error("IO error: {0}")]
    Io(String),

    /// The JSON document itself failed to parse or serialize.
    #[error("JSON error: {0}")]
    Json(String),

    /// Custom error raised through serde's error traits.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a malformed-line error carrying the 1-based line number and
    /// the offending line text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fcfg::Error;
    ///
    /// let err = Error::malformed_line(7, "no equals here");
    /// assert!(err.to_string().contains("line 7"));
    /// ```
    pub fn malformed_line(line: usize, content: &str) -> Self {
        Error::MalformedLine {
            line,
            content: content.to_string(),
        }
    }

    /// Creates an invalid-list-literal error; `context` is the literal text
    /// that failed, `msg` describes what went wrong.
    pub fn invalid_list(context: &str, msg: &str) -> Self {
        Error::InvalidListLiteral {
            context: context.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates a corrupt-Variant error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fcfg::Error;
    ///
    /// let err = Error::corrupt_variant("blob is 6 bytes, expected 8");
    /// assert!(err.to_string().contains("corrupt Variant"));
    /// ```
    pub fn corrupt_variant<T: fmt::Display>(msg: T) -> Self {
        Error::CorruptVariant(msg.to_string())
    }

    /// Creates an invalid-escape error at a byte offset within the escape
    /// text being decoded.
    pub fn invalid_escape(pos: usize, msg: &str) -> Self {
        Error::InvalidEscapeSequence {
            pos,
            msg: msg.to_string(),
        }
    }

    /// Creates an unsupported-value-kind error; `path` should name the key
    /// path of the offending document entry.
    pub fn unsupported_kind<T: fmt::Display>(path: T) -> Self {
        Error::UnsupportedValueKind(path.to_string())
    }

    /// Creates an I/O error for stream reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a JSON-side error.
    pub fn json<T: fmt::Display>(msg: T) -> Self {
        Error::Json(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
