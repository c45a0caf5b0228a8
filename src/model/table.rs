//! Input table structures.

use super::{Block, Inline};
use serde::{Deserialize, Serialize};

/// A table cell holding block content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cell {
    /// Cell content
    #[serde(default)]
    pub content: Vec<Block>,
}

impl Cell {
    /// Create an empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cell with a single plain-text paragraph.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Block::text(text)],
        }
    }

    /// Check if this cell has no content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// A table: optional caption, one header row, and body rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    /// Caption content (empty when the table has no caption)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub caption: Vec<Inline>,

    /// Header row cells (empty when the table declares no header)
    #[serde(default)]
    pub header: Vec<Cell>,

    /// Body rows
    #[serde(default)]
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether any header cell carries content.
    ///
    /// A header row of entirely empty cells counts as no header.
    pub fn has_header(&self) -> bool {
        !self.header.is_empty() && self.header.iter().any(|c| !c.is_empty())
    }

    /// Get the number of columns (from the widest row).
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.len())
            .chain(std::iter::once(self.header.len()))
            .max()
            .unwrap_or(0)
    }
}
