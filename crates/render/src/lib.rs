//! Rendering mapper: location records in, styled chart marks out.
//!
//! The output is library-agnostic; a chart layer turns each [`MarkGroup`] into
//! one legend series and each [`ZoneLabel`] into a text annotation.

pub mod marks;
pub mod style;

pub use marks::{MarkGroup, MarkSet, StyledMark, ZoneLabel, build_marks_2d, build_marks_3d};
pub use style::{
    EMPTY_COLOR, HighlightConfig, OVERSTOCK_COLOR, UNDERSTOCK_COLOR, hover_text, mark_size_3d,
    resolve_color,
};
