pub mod defaults;
pub mod geometry;
pub mod settings;

pub use geometry::Geometry;
pub use settings::{ImageBox, Settings};
