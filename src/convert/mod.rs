//! Document-to-presentation conversion pipeline.
//!
//! Control flow runs assembler → segmenter → block converter → inline
//! converter. Two side registries (footnotes, heading anchors) are filled
//! while body slides are built and read back by the assembler afterwards
//! to synthesize the table-of-contents and footnotes slides.

mod assemble;
mod block;
mod context;
mod inline;
mod registry;
mod segment;

pub use assemble::infer_slide_level;
pub use context::{
    Context, BLOCK_INDENT, BLOCK_QUOTE_SIZE, HEADING_SPACE_BEFORE, NOTES_SIZE,
};
pub use registry::{AnchorRegistry, FootnoteRegistry};

use crate::deck::Presentation;
use crate::error::Result;
use crate::model::{Block, Document};
use crate::options::ConvertOptions;
use serde::Serialize;

/// A non-fatal event surfaced to the embedding caller.
///
/// Diagnostics never unwind the pipeline; unsupported input degrades to
/// "contributes nothing to the output".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Diagnostic {
    /// A block the converter does not know how to render was dropped.
    BlockNotRendered { kind: String },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::BlockNotRendered { kind } => {
                write!(f, "block not rendered: {}", kind)
            }
        }
    }
}

/// Mutable conversion state: the side registries plus collected diagnostics.
///
/// Owned by the assembler and threaded by mutable reference through the
/// conversion calls. Registries are append-only during body conversion and
/// read-only afterwards.
#[derive(Debug, Default)]
pub struct ConvertState {
    /// Footnote bodies in encounter order
    pub footnotes: FootnoteRegistry,

    /// Heading identifier → slide number
    pub anchors: AnchorRegistry,

    /// Collected non-fatal diagnostics
    pub diagnostics: Vec<Diagnostic>,
}

impl ConvertState {
    /// Record a block-not-rendered diagnostic for the given block.
    pub fn block_not_rendered(&mut self, block: &Block) {
        let kind = block.kind().to_string();
        log::warn!("block not rendered: {}", kind);
        self.diagnostics.push(Diagnostic::BlockNotRendered { kind });
    }
}

/// Result of a conversion: the presentation plus any diagnostics raised.
#[derive(Debug)]
pub struct Conversion {
    /// The finished slide sequence
    pub presentation: Presentation,

    /// Non-fatal diagnostics in emission order
    pub diagnostics: Vec<Diagnostic>,
}

/// Convert a document into a presentation, returning diagnostics alongside.
pub fn convert(doc: &Document, options: &ConvertOptions) -> Result<Conversion> {
    options.validate()?;
    Ok(assemble::assemble(doc, options))
}

/// Convert a document into a presentation, discarding diagnostics.
///
/// Diagnostics are still emitted through the `log` facade.
pub fn to_presentation(doc: &Document, options: &ConvertOptions) -> Result<Presentation> {
    convert(doc, options).map(|c| c.presentation)
}
