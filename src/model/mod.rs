//! Input document model.
//!
//! This module defines the structured-document tree that conversion consumes:
//! typed block and inline nodes plus a metadata record. The tree is expected
//! to arrive fully built from an upstream parser; endeck never parses source
//! text itself.

mod document;
mod inline;
mod table;

pub use document::*;
pub use inline::*;
pub use table::*;
