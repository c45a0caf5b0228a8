//! Styled paragraph and text-run structures for slides.

use crate::model::{ListAttributes, MathKind};
use serde::{Deserialize, Serialize};

/// Baseline shift applied to superscript runs.
pub const SUPERSCRIPT_BASELINE: i32 = 30_000;

/// Baseline shift applied to subscript runs.
pub const SUBSCRIPT_BASELINE: i32 = -25_000;

/// Strikethrough kind for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strikethrough {
    Single,
    Double,
}

/// Capitalization kind for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capitals {
    Small,
    All,
}

/// A hyperlink attached to a run or picture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hyperlink {
    /// Destination URL; cross-slide links use the form `#slide-N`
    pub url: String,

    /// Title text (tooltip)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
}

impl Hyperlink {
    /// Create an internal link to the slide with the given 1-based number.
    pub fn to_slide(number: usize) -> Self {
        Self {
            url: format!("#slide-{}", number),
            title: String::new(),
        }
    }
}

/// Character formatting active on a text run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunProps {
    /// Bold text
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,

    /// Italic text
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub italic: bool,

    /// Strikethrough kind
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<Strikethrough>,

    /// Baseline shift; positive for superscript, negative for subscript
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline: Option<i32>,

    /// Capitalization kind
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capitals: Option<Capitals>,

    /// Hyperlink target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyperlink: Option<Hyperlink>,

    /// Monospace code rendering
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub code: bool,

    /// Run occurs inside a block quotation
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub block_quote: bool,

    /// Forced font size in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_size: Option<u32>,
}

impl RunProps {
    /// Create default run properties.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Bullet kind for a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum BulletType {
    /// Plain bullet marker
    Bullet,
    /// Automatic numbering with the list's numbering attributes
    AutoNumbering { attrs: ListAttributes },
}

/// Horizontal alignment of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Paragraph formatting active on a slide paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParaProps {
    /// Left margin in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<u32>,

    /// Right margin in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<u32>,

    /// List nesting level (0 = not nested)
    #[serde(default, skip_serializing_if = "is_zero")]
    pub level: u8,

    /// Bullet kind, absent for plain paragraphs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet: Option<BulletType>,

    /// Alignment override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,

    /// Space before the paragraph in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_before: Option<u32>,
}

fn is_zero(n: &u8) -> bool {
    *n == 0
}

impl ParaProps {
    /// Create default paragraph properties.
    pub fn new() -> Self {
        Self::default()
    }
}

/// An element within a slide paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ParaElem {
    /// A hard line break
    Break,

    /// A styled text run
    Run { props: RunProps, text: String },

    /// Math content carried verbatim for the renderer
    Math { kind: MathKind, tex: String },
}

impl ParaElem {
    /// Create a run with the given properties.
    pub fn run(props: RunProps, text: impl Into<String>) -> Self {
        ParaElem::Run {
            props,
            text: text.into(),
        }
    }

    /// Create a run with default properties.
    pub fn plain(text: impl Into<String>) -> Self {
        ParaElem::Run {
            props: RunProps::default(),
            text: text.into(),
        }
    }

    /// Get the text carried by this element, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            ParaElem::Run { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Coalesce adjacent runs whose full style properties are identical.
///
/// Texts are concatenated; elements other than runs are kept as-is. This is
/// a pure normalization with no visible effect beyond reducing run count.
pub fn coalesce_runs(elems: Vec<ParaElem>) -> Vec<ParaElem> {
    let mut merged: Vec<ParaElem> = Vec::with_capacity(elems.len());

    for elem in elems {
        let joined = match (merged.last_mut(), &elem) {
            (
                Some(ParaElem::Run {
                    props: last_props,
                    text: last_text,
                }),
                ParaElem::Run { props, text },
            ) if last_props == props => {
                last_text.push_str(text);
                true
            }
            _ => false,
        };

        if !joined {
            merged.push(elem);
        }
    }

    merged
}

/// A paragraph on a slide: formatting plus an ordered element sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph formatting
    #[serde(default)]
    pub props: ParaProps,

    /// Paragraph content
    #[serde(default)]
    pub elems: Vec<ParaElem>,
}

impl Paragraph {
    /// Create a paragraph from properties and elements.
    pub fn new(props: ParaProps, elems: Vec<ParaElem>) -> Self {
        Self { props, elems }
    }

    /// Create an unstyled paragraph with plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            props: ParaProps::default(),
            elems: vec![ParaElem::plain(text)],
        }
    }

    /// Get the plain text content.
    pub fn plain_text(&self) -> String {
        self.elems.iter().filter_map(|e| e.text()).collect()
    }

    /// Check if this paragraph carries no content.
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }
}
