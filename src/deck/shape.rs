//! Shape and graphic structures for slides.

use super::{Hyperlink, ParaElem, Paragraph};
use crate::model::Attr;
use serde::{Deserialize, Serialize};

/// Visual properties of a picture shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PicProps {
    /// Hyperlink target when the source image was wrapped in a link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyperlink: Option<Hyperlink>,
}

/// Table-level presentation flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableProps {
    /// The first row renders as a header row
    pub has_header_row: bool,

    /// Body rows render with alternating banding
    pub has_banded_rows: bool,
}

/// A cell in a table graphic: a sequence of slide paragraphs.
pub type TableCell = Vec<Paragraph>;

/// A graphic hosted by a graphic frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Graphic {
    /// A table
    Table {
        props: TableProps,
        header: Vec<TableCell>,
        rows: Vec<Vec<TableCell>>,
    },
}

/// A visual region on a slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    /// An image with an optional caption
    Picture {
        props: PicProps,
        /// Source path or URL of the image
        path: String,
        /// Attributes carried over from the source image node
        attr: Attr,
        /// Caption content
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        caption: Vec<ParaElem>,
    },

    /// A frame hosting one or more graphics
    GraphicFrame {
        graphics: Vec<Graphic>,
        /// Caption content
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        caption: Vec<ParaElem>,
    },

    /// A text box holding a paragraph sequence
    TextBox { paragraphs: Vec<Paragraph> },
}

impl Shape {
    /// Create a text box shape.
    pub fn text_box(paragraphs: Vec<Paragraph>) -> Self {
        Shape::TextBox { paragraphs }
    }

    /// Check whether this is a text box with no paragraphs.
    pub fn is_empty_text_box(&self) -> bool {
        matches!(self, Shape::TextBox { paragraphs } if paragraphs.is_empty())
    }
}

/// Collapse runs of adjacent text boxes into one and drop empty text boxes.
///
/// Pictures and graphic frames are never merged; they act as separators
/// between textual regions. Running this on an already merged sequence
/// yields an identical sequence.
pub fn merge_adjacent_text_boxes(shapes: Vec<Shape>) -> Vec<Shape> {
    let mut merged: Vec<Shape> = Vec::with_capacity(shapes.len());

    for shape in shapes {
        match shape {
            Shape::TextBox { paragraphs } => {
                if paragraphs.is_empty() {
                    continue;
                }
                match merged.last_mut() {
                    Some(Shape::TextBox {
                        paragraphs: previous,
                    }) => previous.extend(paragraphs),
                    _ => merged.push(Shape::TextBox { paragraphs }),
                }
            }
            other => merged.push(other),
        }
    }

    merged
}
