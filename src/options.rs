//! Conversion options configuration.

use crate::error::{Error, Result};
use crate::model::Inline;

/// Options for converting a document into a presentation.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Heading depth at which a new slide begins.
    ///
    /// `None` infers the level from the document's heading structure: the
    /// shallowest heading immediately followed by non-heading content.
    pub slide_level: Option<u8>,

    /// Build a table-of-contents slide after the metadata slide.
    pub include_toc: bool,

    /// Maximum heading depth listed on the table-of-contents slide.
    pub toc_depth: u8,

    /// Header content for the table-of-contents slide
    /// (default: "Table of Contents").
    pub toc_title: Option<Vec<Inline>>,

    /// Header content for the footnotes slide (default: "Notes").
    pub notes_title: Option<Vec<Inline>>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            slide_level: None,
            include_toc: false,
            toc_depth: 3,
            toc_title: None,
            notes_title: None,
        }
    }
}

impl ConvertOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an explicit slide split level (1-6).
    pub fn with_slide_level(mut self, level: u8) -> Self {
        self.slide_level = Some(level);
        self
    }

    /// Enable the table-of-contents slide.
    pub fn with_toc(mut self, include: bool) -> Self {
        self.include_toc = include;
        self
    }

    /// Set the table-of-contents heading depth.
    pub fn with_toc_depth(mut self, depth: u8) -> Self {
        self.toc_depth = depth;
        self
    }

    /// Override the table-of-contents slide title.
    pub fn with_toc_title(mut self, title: Vec<Inline>) -> Self {
        self.toc_title = Some(title);
        self
    }

    /// Override the footnotes slide title.
    pub fn with_notes_title(mut self, title: Vec<Inline>) -> Self {
        self.notes_title = Some(title);
        self
    }

    /// Validate option values.
    pub fn validate(&self) -> Result<()> {
        if let Some(level) = self.slide_level {
            if !(1..=6).contains(&level) {
                return Err(Error::InvalidOptions(format!(
                    "slide_level must be between 1 and 6, got {}",
                    level
                )));
            }
        }
        if self.toc_depth == 0 {
            return Err(Error::InvalidOptions(
                "toc_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
