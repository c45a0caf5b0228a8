//! Side registries accumulated during body-slide conversion.
//!
//! Both registries are append-only while body slides are built and are read
//! back by the assembler afterwards, once all writes have completed.

use crate::model::Block;
use std::collections::BTreeMap;
use std::collections::HashMap;

/// Footnote bodies keyed by ordinal, in assignment order.
///
/// Ordinals form a strictly increasing, gap-free sequence starting at 1,
/// assigned in document-encounter order.
#[derive(Debug, Clone, Default)]
pub struct FootnoteRegistry {
    notes: BTreeMap<usize, Vec<Block>>,
}

impl FootnoteRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a footnote body and return its assigned ordinal.
    pub fn register(&mut self, content: Vec<Block>) -> usize {
        let ordinal = self.notes.keys().next_back().copied().unwrap_or(0) + 1;
        self.notes.insert(ordinal, content);
        ordinal
    }

    /// Iterate over registered footnotes in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Vec<Block>)> {
        self.notes.iter().map(|(k, v)| (*k, v))
    }

    /// Get the number of registered footnotes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Check if no footnotes were registered.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

/// Heading identifiers mapped to the slide number they appear on.
#[derive(Debug, Clone, Default)]
pub struct AnchorRegistry {
    anchors: HashMap<String, usize>,
}

impl AnchorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a heading identifier on the given slide number.
    ///
    /// Empty identifiers are never registered.
    pub fn register(&mut self, id: &str, slide_number: usize) {
        if !id.is_empty() {
            self.anchors.insert(id.to_string(), slide_number);
        }
    }

    /// Look up the slide number a heading identifier resolves to.
    pub fn resolve(&self, id: &str) -> Option<usize> {
        self.anchors.get(id).copied()
    }

    /// Check whether an identifier is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.anchors.contains_key(id)
    }

    /// Get the number of registered anchors.
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Check if no anchors were registered.
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }
}
