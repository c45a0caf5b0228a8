//! # endeck
//!
//! Conversion of a generic structured-document tree into an intermediate
//! presentation-deck model.
//!
//! The input is a fully built tree of typed block and inline nodes (headings,
//! paragraphs, lists, tables, block quotes, images, footnotes, styled spans)
//! plus a metadata record. The output is a [`Presentation`]: an ordered
//! sequence of slides composed of styled shapes, ready for a format-specific
//! serializer. endeck owns no file, network, or persisted state.
//!
//! ## Quick Start
//!
//! ```
//! use endeck::{to_presentation, Block, ConvertOptions, Document};
//!
//! let doc = Document::from_blocks(vec![
//!     Block::heading(1, "intro", "Intro"),
//!     Block::text("hello"),
//! ]);
//!
//! let options = ConvertOptions::new().with_slide_level(2);
//! let presentation = to_presentation(&doc, &options)?;
//! assert_eq!(presentation.len(), 2);
//! # Ok::<(), endeck::Error>(())
//! ```
//!
//! ## Diagnostics
//!
//! Conversion never fails on unsupported input; blocks the converter cannot
//! render contribute nothing to the output and raise a non-fatal
//! [`Diagnostic`]. Use [`convert`] to receive them alongside the
//! presentation:
//!
//! ```
//! use endeck::{convert, Block, ConvertOptions, Document};
//!
//! let doc = Document::from_blocks(vec![Block::RawBlock {
//!     format: "html".to_string(),
//!     text: "<marquee/>".to_string(),
//! }]);
//!
//! let conversion = convert(&doc, &ConvertOptions::default())?;
//! assert_eq!(conversion.diagnostics.len(), 1);
//! # Ok::<(), endeck::Error>(())
//! ```

pub mod convert;
pub mod deck;
pub mod error;
pub mod model;
pub mod options;

// Re-exports
pub use convert::{convert, to_presentation, Conversion, Diagnostic};
pub use deck::{
    Align, BulletType, Capitals, Graphic, Hyperlink, ParaElem, ParaProps, Paragraph, PicProps,
    Presentation, RunProps, Shape, Slide, Strikethrough, TableProps,
};
pub use error::{Error, Result};
pub use model::{
    Attr, Block, Cell, Definition, Document, Inline, ListAttributes, ListNumberDelim,
    ListNumberStyle, MathKind, Metadata, Table, Target,
};
pub use options::ConvertOptions;
