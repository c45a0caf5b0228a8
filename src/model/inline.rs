//! Inline-level node structures.

use super::{Attr, Block};
use serde::{Deserialize, Serialize};

/// A link or image target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Destination URL
    pub url: String,

    /// Title text (tooltip)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
}

impl Target {
    /// Create a target with a URL and no title.
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: String::new(),
        }
    }
}

/// Math content kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MathKind {
    /// Inline math, set within the text flow
    Inline,
    /// Display math, set on its own line
    Display,
}

/// An inline-level node in the document tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Inline {
    /// Literal text
    Str { text: String },

    /// An inter-word space
    Space,

    /// A soft line break (reflowable)
    SoftBreak,

    /// A hard line break
    LineBreak,

    /// Emphasized (italic) content
    Emph { content: Vec<Inline> },

    /// Strong (bold) content
    Strong { content: Vec<Inline> },

    /// Struck-out content
    Strikeout { content: Vec<Inline> },

    /// Superscripted content
    Superscript { content: Vec<Inline> },

    /// Subscripted content
    Subscript { content: Vec<Inline> },

    /// Small-caps content
    SmallCaps { content: Vec<Inline> },

    /// A hyperlink around inline content
    Link {
        attr: Attr,
        content: Vec<Inline>,
        target: Target,
    },

    /// An image with alt content
    Image {
        attr: Attr,
        alt: Vec<Inline>,
        target: Target,
    },

    /// An inline code span
    Code { attr: Attr, text: String },

    /// Math content with raw TeX source
    Math { kind: MathKind, tex: String },

    /// A footnote whose body is a block sequence
    Note { content: Vec<Block> },

    /// A generic inline container
    Span { attr: Attr, content: Vec<Inline> },

    /// Raw content in some source format, opaque to conversion
    RawInline { format: String, text: String },
}

impl Inline {
    /// Create a literal text node.
    pub fn str(text: impl Into<String>) -> Self {
        Inline::Str { text: text.into() }
    }

    /// Create an emphasized node around plain text.
    pub fn emph(text: impl Into<String>) -> Self {
        Inline::Emph {
            content: vec![Inline::str(text)],
        }
    }

    /// Create a strong node around plain text.
    pub fn strong(text: impl Into<String>) -> Self {
        Inline::Strong {
            content: vec![Inline::str(text)],
        }
    }

    /// Create a link around plain text.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Inline::Link {
            attr: Attr::new(),
            content: vec![Inline::str(text)],
            target: Target::url(url),
        }
    }

    /// Create an image with plain-text alt content.
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Inline::Image {
            attr: Attr::new(),
            alt: vec![Inline::str(alt)],
            target: Target::url(url),
        }
    }

    /// Create a footnote node.
    pub fn note(content: Vec<Block>) -> Self {
        Inline::Note { content }
    }

    /// Build an inline sequence of space-separated words from a string.
    pub fn words(text: &str) -> Vec<Inline> {
        let mut out = Vec::new();
        for word in text.split_whitespace() {
            if !out.is_empty() {
                out.push(Inline::Space);
            }
            out.push(Inline::str(word));
        }
        out
    }
}
