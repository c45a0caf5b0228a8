//! Output presentation-deck model.
//!
//! This module defines the intermediate slide model that conversion produces:
//! an ordered sequence of slides, each composed of styled shapes (text boxes,
//! pictures, table frames). A downstream serializer turns this model into an
//! on-disk presentation format; endeck never writes files itself.

mod paragraph;
mod shape;
mod slide;

pub use paragraph::*;
pub use shape::*;
pub use slide::*;
