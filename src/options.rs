//! Configuration options for fcfg and JSON output.
//!
//! [`FcfgOptions`] controls formatting on both sides of the conversion:
//! stanza separation in fcfg text and indentation of the JSON document.
//! Value semantics are never affected; two outputs produced with different
//! options always parse back to equal documents.
//!
//! ## Examples
//!
//! ```rust
//! use fcfg::{from_str, to_json_string_with_options, FcfgOptions};
//!
//! let doc = from_str("[General]\ncount=3\n").unwrap();
//!
//! // Compact JSON instead of the default two-space pretty print.
//! let options = FcfgOptions::new().with_pretty_json(false);
//! let json = to_json_string_with_options(&doc, &options).unwrap();
//! assert_eq!(json, r#"{"General":{"count":3}}"#);
//! ```

/// Formatting options for writing fcfg text and JSON documents.
///
/// # Examples
///
/// ```rust
/// use fcfg::FcfgOptions;
///
/// // Defaults: pretty JSON with 2-space indent, blank line between stanzas.
/// let options = FcfgOptions::new();
/// assert_eq!(options.json_indent, 2);
/// assert!(options.pretty_json);
/// assert!(options.trailing_blank_line);
///
/// let options = FcfgOptions::new()
///     .with_json_indent(4)
///     .with_trailing_blank_line(false);
/// ```
#[derive(Clone, Debug)]
pub struct FcfgOptions {
    /// Number of spaces per JSON indentation level when pretty-printing.
    pub json_indent: usize,
    /// Pretty-print the JSON document output. Compact when false.
    pub pretty_json: bool,
    /// Emit a blank separator line after each stanza in fcfg output.
    pub trailing_blank_line: bool,
}

impl Default for FcfgOptions {
    fn default() -> Self {
        FcfgOptions {
            json_indent: 2,
            pretty_json: true,
            trailing_blank_line: true,
        }
    }
}

impl FcfgOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the JSON indentation width.
    #[must_use]
    pub fn with_json_indent(mut self, indent: usize) -> Self {
        self.json_indent = indent;
        self
    }

    /// Enables or disables JSON pretty-printing.
    #[must_use]
    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty_json = pretty;
        self
    }

    /// Enables or disables the blank line after each stanza.
    #[must_use]
    pub fn with_trailing_blank_line(mut self, blank: bool) -> Self {
        self.trailing_blank_line = blank;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let options = FcfgOptions::new()
            .with_json_indent(4)
            .with_pretty_json(false)
            .with_trailing_blank_line(false);
        assert_eq!(options.json_indent, 4);
        assert!(!options.pretty_json);
        assert!(!options.trailing_blank_line);
    }
}
