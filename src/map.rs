//! Ordered map types for fcfg documents.
//!
//! This module provides [`Stanza`] and [`Document`], thin wrappers around
//! [`IndexMap`] that keep insertion order. Order preservation matters for
//! deterministic round-tripping: stanzas and keys come back out in the order
//! they went in, both through fcfg text and through JSON.
//!
//! ## Why IndexMap?
//!
//! A `HashMap` would shuffle stanza and key order on every run. `IndexMap`
//! gives:
//!
//! - **Deterministic output**: entries serialize in a consistent order
//! - **Iteration order**: entries iterate in insertion order
//! - **Stable replacement**: re-inserting a key replaces the value but keeps
//!   the original position, matching how re-parsed duplicate keys behave
//!
//! ## Examples
//!
//! ```rust
//! use fcfg::{Document, Stanza, Value};
//!
//! let mut stanza = Stanza::new();
//! stanza.insert("enabled".to_string(), Value::Bool(true));
//! stanza.insert("count".to_string(), Value::Integer(3));
//!
//! let mut doc = Document::new();
//! doc.insert("General".to_string(), stanza);
//!
//! assert_eq!(doc.len(), 1);
//! assert_eq!(
//!     doc.get("General").and_then(|s| s.get("count")).and_then(|v| v.as_i64()),
//!     Some(3)
//! );
//! ```

use crate::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ordered map of keys to values within one `[name]` stanza.
///
/// Keys are unique; inserting an existing key replaces its value in place.
///
/// # Examples
///
/// ```rust
/// use fcfg::{Stanza, Value};
///
/// let mut stanza = Stanza::new();
/// stanza.insert("first".to_string(), Value::Integer(1));
/// stanza.insert("second".to_string(), Value::Integer(2));
///
/// let keys: Vec<_> = stanza.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stanza(IndexMap<String, Value>);

impl Stanza {
    /// Creates an empty `Stanza`.
    #[must_use]
    pub fn new() -> Self {
        Stanza(IndexMap::new())
    }

    /// Creates an empty `Stanza` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Stanza(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair, returning the previous value if the key was
    /// already present. The key keeps its original position on replacement.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the number of entries in the stanza.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the stanza contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl IntoIterator for Stanza {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Value)> for Stanza {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Stanza(IndexMap::from_iter(iter))
    }
}

/// A whole fcfg document: an ordered map of stanza names to [`Stanza`]s.
///
/// Stanza names are unique. Re-opening a `[name]` header that was already
/// seen merges the following keys into the existing stanza, keeping its
/// original position (see [`Document::entry_or_default`]).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(IndexMap<String, Stanza>);

impl Document {
    /// Creates an empty `Document`.
    #[must_use]
    pub fn new() -> Self {
        Document(IndexMap::new())
    }

    /// Inserts a stanza, returning the previous one if the name was already
    /// present.
    pub fn insert(&mut self, name: String, stanza: Stanza) -> Option<Stanza> {
        self.0.insert(name, stanza)
    }

    /// Returns the stanza for `name`, inserting an empty one if missing.
    ///
    /// This is the merge behavior the parser relies on for repeated headers.
    pub fn entry_or_default(&mut self, name: &str) -> &mut Stanza {
        self.0.entry(name.to_string()).or_default()
    }

    /// Returns a reference to the stanza with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Stanza> {
        self.0.get(name)
    }

    /// Returns the number of stanzas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the document contains no stanzas.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the stanza names, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Stanza> {
        self.0.keys()
    }

    /// Returns an iterator over the name-stanza pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Stanza> {
        self.0.iter()
    }
}

impl IntoIterator for Document {
    type Item = (String, Stanza);
    type IntoIter = indexmap::map::IntoIter<String, Stanza>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Stanza)> for Document {
    fn from_iter<T: IntoIterator<Item = (String, Stanza)>>(iter: T) -> Self {
        Document(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stanza_preserves_insertion_order() {
        let mut stanza = Stanza::new();
        stanza.insert("zebra".to_string(), Value::Integer(1));
        stanza.insert("apple".to_string(), Value::Integer(2));
        stanza.insert("mango".to_string(), Value::Integer(3));

        let keys: Vec<_> = stanza.keys().cloned().collect();
        assert_eq!(keys, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_replacement_keeps_position() {
        let mut stanza = Stanza::new();
        stanza.insert("a".to_string(), Value::Integer(1));
        stanza.insert("b".to_string(), Value::Integer(2));
        stanza.insert("a".to_string(), Value::Integer(9));

        let entries: Vec<_> = stanza.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        assert_eq!(
            entries,
            vec![
                ("a".to_string(), Value::Integer(9)),
                ("b".to_string(), Value::Integer(2)),
            ]
        );
    }

    #[test]
    fn test_document_entry_or_default_merges() {
        let mut doc = Document::new();
        doc.entry_or_default("General")
            .insert("x".to_string(), Value::Integer(1));
        doc.entry_or_default("Other")
            .insert("y".to_string(), Value::Integer(2));
        doc.entry_or_default("General")
            .insert("z".to_string(), Value::Integer(3));

        assert_eq!(doc.len(), 2);
        let names: Vec<_> = doc.keys().cloned().collect();
        assert_eq!(names, vec!["General", "Other"]);
        assert_eq!(doc.get("General").unwrap().len(), 2);
    }
}
