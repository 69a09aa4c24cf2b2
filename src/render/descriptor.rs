//! Placement of a single image on the card
//!
//! A descriptor ties an artwork file to a position given in card
//! percentages. The height comes from configuration and the width follows
//! from the artwork's natural aspect ratio.

use std::path::{Path, PathBuf};

use crate::layout::{round_px, Canvas, Rect};
use crate::model::PercentagePosition;
use crate::parser::{read_image_size, ImageSize};

#[derive(Debug, Clone, PartialEq)]
pub struct ImageDescriptor {
    canvas: Canvas,
    path: PathBuf,
    image: Option<ImageSize>,

    centre_x_px: f32,
    centre_y_px: f32,
    height_px: f32,
    width_px: f32,
    origin_x_px: i32,
    origin_y_px: i32,

    draw: String,
    mirrored: String,
}

impl ImageDescriptor {
    /// Place `path` with its centre at (`centre_x`, `centre_y`) percent and a
    /// height of `height` percent of the card height.
    pub fn new(
        canvas: Canvas,
        height: f32,
        centre_x: f32,
        centre_y: f32,
        path: impl Into<PathBuf>,
    ) -> Self {
        let path = path.into();
        let image = read_image_size(&path);
        let height_px = canvas.y_px(height);

        let mut desc = Self {
            canvas,
            path,
            image,
            centre_x_px: 0.0,
            centre_y_px: 0.0,
            height_px,
            width_px: height_px * aspect_ratio(image),
            origin_x_px: 0,
            origin_y_px: 0,
            draw: String::new(),
            mirrored: String::new(),
        };
        desc.reposition(centre_x, centre_y);
        desc
    }

    pub fn from_position(
        canvas: Canvas,
        position: &PercentagePosition,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self::new(
            canvas,
            position.height(),
            position.centre_x(),
            position.centre_y(),
            path,
        )
    }

    /// Move the image to a new centre, keeping file and size
    pub fn reposition(&mut self, centre_x: f32, centre_y: f32) {
        self.centre_x_px = self.canvas.x_px(centre_x);
        self.centre_y_px = self.canvas.y_px(centre_y);
        self.origin_x_px = round_px(self.centre_x_px - self.width_px / 2.0);
        self.origin_y_px = round_px(self.centre_y_px - self.height_px / 2.0);
        self.generate_directives();
    }

    /// Swap in another artwork file, keeping the height and centre
    pub fn set_file_name(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
        self.image = read_image_size(&self.path);
        self.width_px = self.height_px * aspect_ratio(self.image);
        self.origin_x_px = round_px(self.centre_x_px - self.width_px / 2.0);
        self.generate_directives();
    }

    fn generate_directives(&mut self) {
        if self.height_px <= 0.0 || self.width_px <= 0.0 {
            self.draw.clear();
            self.mirrored.clear();
            return;
        }

        let rect = self.rect();
        self.draw = rect.directive(&self.path);

        let mirrored = Rect {
            x: self.canvas.width_px - self.origin_x_px - rect.w + self.canvas.border_px,
            ..rect
        };
        self.mirrored = mirrored.directive(&self.path);
    }

    /// Absolute rectangle the image is drawn into
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.origin_x_px + self.canvas.border_px,
            self.origin_y_px + self.canvas.border_px,
            round_px(self.width_px),
            round_px(self.height_px),
        )
    }

    /// Directive drawing the image at its position; empty for a slot with no area
    pub fn draw(&self) -> &str {
        &self.draw
    }

    /// Directive drawing the image mirrored about the vertical centre line
    pub fn draw_mirrored(&self) -> &str {
        &self.mirrored
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_file_found(&self) -> bool {
        self.image.is_some()
    }

    /// Without artwork the card falls back to standard pips
    pub fn use_standard_pips(&self) -> bool {
        !self.is_file_found()
    }

    pub fn is_landscape(&self) -> bool {
        self.image.is_some_and(|size| size.is_landscape())
    }

    pub fn image_width_px(&self) -> u32 {
        self.image.map_or(1, |size| size.width)
    }

    pub fn image_height_px(&self) -> u32 {
        self.image.map_or(1, |size| size.height)
    }

    pub fn aspect_ratio(&self) -> f32 {
        aspect_ratio(self.image)
    }

    pub fn centre_px(&self) -> (f32, f32) {
        (self.centre_x_px, self.centre_y_px)
    }

    pub fn origin_px(&self) -> (i32, i32) {
        (self.origin_x_px, self.origin_y_px)
    }

    pub fn width_px(&self) -> f32 {
        self.width_px
    }

    pub fn height_px(&self) -> f32 {
        self.height_px
    }
}

fn aspect_ratio(image: Option<ImageSize>) -> f32 {
    image.map_or(1.0, |size| size.aspect_ratio())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::png::png_header;
    use std::fs;

    fn canvas() -> Canvas {
        Canvas::new(380, 532, 0)
    }

    #[test]
    fn test_missing_file_is_square() {
        let desc = ImageDescriptor::new(canvas(), 10.0, 50.0, 50.0, "/no/such/file.png");
        assert!(!desc.is_file_found());
        assert!(desc.use_standard_pips());
        assert_eq!(desc.aspect_ratio(), 1.0);
        assert_eq!(desc.image_width_px(), 1);
        assert_eq!(desc.height_px(), 53.2);
        assert_eq!(desc.width_px(), 53.2);
        // 190 - 26.6 = 163.4, 266 - 26.6 = 239.4
        assert_eq!(desc.origin_px(), (163, 239));
        assert_eq!(
            desc.draw(),
            "\t-draw \"image over 163,239 53,53 '/no/such/file.png'\" \\\n"
        );
        // 380 - 163 - 53
        assert!(desc.draw_mirrored().contains("image over 164,239 53,53"));
    }

    #[test]
    fn test_width_follows_aspect_ratio() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.png");
        fs::write(&path, png_header(200, 100)).unwrap();

        let desc = ImageDescriptor::new(canvas(), 25.0, 50.0, 25.0, &path);
        assert!(desc.is_file_found());
        assert!(desc.is_landscape());
        assert_eq!(desc.height_px(), 133.0);
        assert_eq!(desc.width_px(), 266.0);
        assert_eq!(desc.rect(), Rect::new(57, 67, 266, 133));
    }

    #[test]
    fn test_border_shifts_directives() {
        let desc = ImageDescriptor::new(Canvas::new(380, 532, 36), 10.0, 50.0, 50.0, "x.png");
        assert_eq!(desc.rect(), Rect::new(199, 275, 53, 53));
        assert!(desc.draw_mirrored().contains("image over 200,275"));
    }

    #[test]
    fn test_zero_height_draws_nothing() {
        let desc = ImageDescriptor::new(canvas(), 0.0, 50.0, 50.0, "x.png");
        assert_eq!(desc.draw(), "");
        assert_eq!(desc.draw_mirrored(), "");
    }

    #[test]
    fn test_negative_height_draws_nothing() {
        let desc = ImageDescriptor::new(canvas(), -5.0, 50.0, 50.0, "x.png");
        assert_eq!(desc.draw(), "");
        assert_eq!(desc.draw_mirrored(), "");
    }

    #[test]
    fn test_reposition_round_trip() {
        let mut desc = ImageDescriptor::new(canvas(), 18.0, 25.7, 18.65, "pip.png");
        let original = desc.clone();

        desc.reposition(74.3, 81.35);
        assert_ne!(desc.draw(), original.draw());

        desc.reposition(25.7, 18.65);
        assert_eq!(desc, original);
    }

    #[test]
    fn test_set_file_name_keeps_height_and_centre() {
        let dir = tempfile::tempdir().unwrap();
        let tall = dir.path().join("tall.png");
        fs::write(&tall, png_header(50, 100)).unwrap();

        let mut desc = ImageDescriptor::new(canvas(), 20.0, 50.0, 50.0, dir.path().join("none.png"));
        assert!(!desc.is_file_found());
        let centre = desc.centre_px();
        let origin_y = desc.origin_px().1;

        desc.set_file_name(&tall);
        assert!(desc.is_file_found());
        assert_eq!(desc.path(), tall.as_path());
        assert_eq!(desc.centre_px(), centre);
        assert_eq!(desc.origin_px().1, origin_y);
        assert_eq!(desc.height_px(), 106.4);
        assert_eq!(desc.width_px(), 53.2);
        assert!(desc.draw().contains(&tall.display().to_string()));
    }
}
