use std::fmt;
use std::path::Path;

/// Round half up to the nearest whole pixel
pub fn round_px(v: f32) -> i32 {
    (v + 0.5).floor() as i32
}

/// Pixel size of the card being drawn
///
/// `border_px` is extra bleed around the card on every side; drawing
/// coordinates are shifted by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width_px: i32,
    pub height_px: i32,
    pub border_px: i32,
}

impl Canvas {
    pub fn new(width_px: i32, height_px: i32, border_px: i32) -> Self {
        Self {
            width_px,
            height_px,
            border_px,
        }
    }

    /// Convert a percentage of the card width to pixels
    pub fn x_px(&self, percent: f32) -> f32 {
        percent * self.width_px as f32 / 100.0
    }

    /// Convert a percentage of the card height to pixels
    pub fn y_px(&self, percent: f32) -> f32 {
        percent * self.height_px as f32 / 100.0
    }

    /// Size of the whole image including the border on both sides
    pub fn full_size(&self) -> (i32, i32) {
        (
            self.width_px + 2 * self.border_px,
            self.height_px + 2 * self.border_px,
        )
    }
}

/// A placed image in absolute pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// `convert` directive compositing `path` into this rectangle
    pub fn directive(&self, path: &Path) -> String {
        format!(
            "\t-draw \"image over {},{} {},{} '{}'\" \\\n",
            self.x,
            self.y,
            self.w,
            self.h,
            path.display()
        )
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{} {}x{}", self.x, self.y, self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_px(2.5), 3);
        assert_eq!(round_px(2.49), 2);
        assert_eq!(round_px(-2.5), -2);
        assert_eq!(round_px(-2.6), -3);
        assert_eq!(round_px(0.0), 0);
    }

    #[test]
    fn test_percent_conversion() {
        let canvas = Canvas::new(380, 532, 0);
        assert_eq!(canvas.x_px(50.0), 190.0);
        assert_eq!(canvas.y_px(25.0), 133.0);
    }

    #[test]
    fn test_full_size_includes_border() {
        assert_eq!(Canvas::new(750, 1050, 36).full_size(), (822, 1122));
    }

    #[test]
    fn test_directive_text() {
        let rect = Rect::new(10, 20, 30, 40);
        assert_eq!(
            rect.directive(Path::new("pips/1/C.png")),
            "\t-draw \"image over 10,20 30,40 'pips/1/C.png'\" \\\n"
        );
    }
}
