//! Card geometry primitives and pip patterns

pub mod canvas;
pub mod pattern;

pub use canvas::{round_px, Canvas, Rect};
pub use pattern::{Offset, Pattern, PatternCollection};
