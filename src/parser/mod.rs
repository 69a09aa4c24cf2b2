pub mod png;

pub use png::{parse_png_header, read_image_size, ImageSize};
