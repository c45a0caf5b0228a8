//! Document, metadata, and block-level node structures.

use super::{Inline, Table};
use serde::{Deserialize, Serialize};

/// Generic attributes attached to a node: identifier, classes, key-value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attr {
    /// Element identifier (anchor target for headings)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Class names
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,

    /// Arbitrary key-value attributes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<(String, String)>,
}

impl Attr {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an attribute set with only an identifier.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Create an attribute set with only class names.
    pub fn with_classes(classes: Vec<String>) -> Self {
        Self {
            classes,
            ..Default::default()
        }
    }

    /// Check whether a class is present.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Numbering style for ordered lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListNumberStyle {
    #[default]
    Decimal,
    LowerRoman,
    UpperRoman,
    LowerAlpha,
    UpperAlpha,
    Example,
}

/// Delimiter style for ordered-list markers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListNumberDelim {
    #[default]
    Period,
    OneParen,
    TwoParens,
}

/// Numbering attributes of an ordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAttributes {
    /// Starting number
    pub start: u32,

    /// Numbering style
    #[serde(default)]
    pub style: ListNumberStyle,

    /// Marker delimiter
    #[serde(default)]
    pub delim: ListNumberDelim,
}

impl Default for ListAttributes {
    fn default() -> Self {
        Self {
            start: 1,
            style: ListNumberStyle::Decimal,
            delim: ListNumberDelim::Period,
        }
    }
}

/// One term with its definitions in a definition list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Definition {
    /// The defined term
    pub term: Vec<Inline>,

    /// One or more definition bodies
    #[serde(default)]
    pub definitions: Vec<Vec<Block>>,
}

/// A block-level node in the document tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Block {
    /// A regular paragraph
    Paragraph { content: Vec<Inline> },

    /// Paragraph content without paragraph semantics (e.g. tight list items)
    Plain { content: Vec<Inline> },

    /// A sequence of lines with preserved breaks
    LineBlock { lines: Vec<Vec<Inline>> },

    /// A literal code block
    CodeBlock { attr: Attr, text: String },

    /// A block quotation
    BlockQuote { content: Vec<Block> },

    /// A heading with depth 1 (shallowest) and up
    Heading {
        level: u8,
        attr: Attr,
        content: Vec<Inline>,
    },

    /// An unordered list; each item is a block sequence
    BulletList { items: Vec<Vec<Block>> },

    /// An ordered list with numbering attributes
    OrderedList {
        attrs: ListAttributes,
        items: Vec<Vec<Block>>,
    },

    /// A definition list
    DefinitionList { items: Vec<Definition> },

    /// A table
    Table(Table),

    /// A horizontal rule
    HorizontalRule,

    /// A generic container with attributes
    Div { attr: Attr, content: Vec<Block> },

    /// Raw content in some source format, opaque to conversion
    RawBlock { format: String, text: String },
}

impl Block {
    /// Create a paragraph block from inline content.
    pub fn paragraph(content: Vec<Inline>) -> Self {
        Block::Paragraph { content }
    }

    /// Create a paragraph block with plain text.
    pub fn text(text: impl Into<String>) -> Self {
        Block::Paragraph {
            content: vec![Inline::str(text)],
        }
    }

    /// Create a heading block with plain text and an identifier.
    pub fn heading(level: u8, id: impl Into<String>, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            attr: Attr::with_id(id),
            content: vec![Inline::str(text)],
        }
    }

    /// Check if this block is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading { .. })
    }

    /// Short description of the block kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Paragraph { .. } => "paragraph",
            Block::Plain { .. } => "plain",
            Block::LineBlock { .. } => "line block",
            Block::CodeBlock { .. } => "code block",
            Block::BlockQuote { .. } => "block quote",
            Block::Heading { .. } => "heading",
            Block::BulletList { .. } => "bullet list",
            Block::OrderedList { .. } => "ordered list",
            Block::DefinitionList { .. } => "definition list",
            Block::Table(_) => "table",
            Block::HorizontalRule => "horizontal rule",
            Block::Div { .. } => "div",
            Block::RawBlock { .. } => "raw block",
        }
    }
}

/// Document metadata, each field already expressed as inline content.
///
/// Empty vectors mean the field is absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub title: Vec<Inline>,

    /// Document subtitle
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subtitle: Vec<Inline>,

    /// Document authors
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<Vec<Inline>>,

    /// Document date
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub date: Vec<Inline>,
}

impl Metadata {
    /// Check whether every metadata field is absent.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.subtitle.is_empty()
            && self.authors.is_empty()
            && self.date.is_empty()
    }
}

/// A fully built document tree: metadata plus an ordered block sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata
    #[serde(default)]
    pub meta: Metadata,

    /// Top-level content blocks
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from a block sequence with empty metadata.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self {
            meta: Metadata::default(),
            blocks,
        }
    }

    /// Check if the document has no content blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
