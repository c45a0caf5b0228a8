//! Slide and presentation structures.

use super::{ParaElem, Shape};
use serde::{Deserialize, Serialize};

/// A single slide.
///
/// Header fields that are absent are represented as empty element
/// sequences, never as a missing-value marker, so downstream renderers
/// need no special casing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Slide {
    /// The title/metadata slide built from document metadata
    Metadata {
        title: Vec<ParaElem>,
        subtitle: Vec<ParaElem>,
        authors: Vec<Vec<ParaElem>>,
        date: Vec<ParaElem>,
    },

    /// A section-divider slide carrying only a heading
    Title { header: Vec<ParaElem> },

    /// A regular content slide
    Content {
        header: Vec<ParaElem>,
        shapes: Vec<Shape>,
    },

    /// A slide with two side-by-side shape regions
    TwoColumn {
        header: Vec<ParaElem>,
        left: Vec<Shape>,
        right: Vec<Shape>,
    },
}

impl Slide {
    /// Create an empty content slide.
    pub fn empty_content() -> Self {
        Slide::Content {
            header: Vec::new(),
            shapes: Vec::new(),
        }
    }

    /// Get the header element sequence, if this slide kind has one.
    pub fn header(&self) -> Option<&[ParaElem]> {
        match self {
            Slide::Title { header }
            | Slide::Content { header, .. }
            | Slide::TwoColumn { header, .. } => Some(header),
            Slide::Metadata { .. } => None,
        }
    }
}

/// An ordered sequence of slides, produced once and immutable thereafter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    /// Slides in presentation order
    #[serde(default)]
    pub slides: Vec<Slide>,
}

impl Presentation {
    /// Create an empty presentation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Check if the presentation has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Get a slide by its 1-based slide number.
    ///
    /// Slide numbers are positional: slide 1 is the first slide.
    pub fn slide(&self, number: usize) -> Option<&Slide> {
        number.checked_sub(1).and_then(|i| self.slides.get(i))
    }

    /// Convert to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Convert to JSON string (compact).
    pub fn to_json_compact(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
