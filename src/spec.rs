//! fcfg Format Specification
//!
//! This module documents the fcfg stanza format as implemented by this
//! library.
//!
//! # Overview
//!
//! fcfg is a line-oriented configuration format: named stanzas, each a flat
//! list of `key=value` pairs. What sets it apart from an ordinary INI-style
//! file is the value layer, which round-trips a binary-tagged float type
//! (`@Variant(...)`) alongside booleans, integers, strings, and nested
//! integer lists.
//!
//! # Core Syntax
//!
//! ## Stanzas
//!
//! ```text
//! [General]
//! enabled=true
//! count=3
//! points=[[1,1,20],[2,4,90]]
//!
//! [Advanced]
//! scale=@Variant(\0\0\0\x87?\x80\0\0)
//! label="literally true"
//! ```
//!
//! **Rules**:
//! - A header line is `[` + name + `]` with no other characters; stanzas do
//!   not nest
//! - Keys match `/^[A-Za-z_][A-Za-z0-9_]*$/` and are unique per stanza
//!   (a repeated key replaces the earlier value)
//! - Blank lines are separators and carry no meaning
//! - Re-opening a header merges into the existing stanza
//!
//! ## Values
//!
//! | Kind | Syntax | Example |
//! |------|--------|---------|
//! | Absent | nothing after `=` | `note=` |
//! | Boolean | `true` or `false` | `enabled=true` |
//! | Integer | decimal digits, optional `-` | `count=-42` |
//! | Float | `@Variant(...)` escape text | `scale=@Variant(\0\0\0\x87?\x80\0\0)` |
//! | List | `[...]` of integers/lists | `points=[[1,1,20],[2,4,90]]` |
//! | String | anything else, optionally quoted | `name=Alice` |
//!
//! A right-hand side wrapped in one matching pair of double or single
//! quotes has that pair stripped before anything else; literal detection
//! then runs on the unwrapped text. Floats never appear as bare numeric
//! literals.
//!
//! ## The Variant encoding
//!
//! A Variant is exactly 8 raw bytes rendered as C-style escape text: the
//! big-endian magic constant `0x00000087` selecting the float payload kind,
//! then the value as a big-endian IEEE-754 single-precision float. The
//! escape policy is fixed (see [`crate::escape`]); notably a handful of
//! printable bytes are always written as `\xHH` because that is what
//! existing fcfg files do. If the escaped payload contains an `=` byte, the
//! whole `@Variant(...)` expression is double-quoted.
//!
//! # JSON mapping
//!
//! The document form is a JSON object of stanza names to key/value objects.
//! Absent maps to `null`, floats to JSON numbers, lists to arrays; stanza
//! and key order survives the round trip. Conversion is all-or-nothing:
//! any malformed line or corrupt value aborts with an error naming the
//! location, and no output is produced.

// Doc-only module.
