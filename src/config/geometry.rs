use std::fmt;

use crate::error::ConfigError;
use crate::layout::{round_px, Canvas, PatternCollection};

use super::defaults::{MPC_BORDER_PX, MPC_HEIGHT_PX, MPC_WIDTH_PX};
use super::settings::{ImageBox, Settings};

/// Pixel geometry derived from [`Settings`]
///
/// Immutable; a new value is produced for every settings change.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    /// Effective card size, after MPC mode is applied
    pub canvas: Canvas,

    // Card outline
    pub radius_px: i32,
    pub outline_width_px: i32,
    pub outline_height_px: i32,

    /// Card area inside the standard pip margins (percentages)
    pub viewport_window_x: f32,
    pub viewport_window_y: f32,

    /// Face image box in percentages; height is for one half of the card
    pub image_width: f32,
    pub image_height: f32,
    pub image_width_px: i32,
    pub image_height_px: i32,
    pub image_offset_x_px: i32,
    pub image_offset_y_px: i32,

    pub image_pip_scale: f32,

    /// Default face image centre (percentages)
    pub image_x: f32,
    pub image_y: f32,

    pub output_directory: String,

    pub patterns: PatternCollection,
}

impl Geometry {
    pub(super) fn calculate(settings: &Settings) -> Result<Self, ConfigError> {
        let (canvas, corner_radius) = if settings.mpc {
            (Canvas::new(MPC_WIDTH_PX, MPC_HEIGHT_PX, MPC_BORDER_PX), 0.0)
        } else {
            (
                Canvas::new(settings.card_width_px, settings.card_height_px, 0),
                settings.corner_radius,
            )
        };

        let radius_px = round_px(canvas.y_px(corner_radius));
        let outline_width_px = canvas.width_px - settings.border_offset - 1;
        let outline_height_px = canvas.height_px - settings.border_offset - 1;

        let viewport_window_x = 100.0 - (2.0 * settings.standard_pip.centre_x());
        let viewport_window_y = 100.0 - (2.0 * settings.standard_pip.centre_y());

        let ImageBox {
            width: image_width,
            height: image_height,
        } = ImageBox::from_borders(settings.image_border_x, settings.image_border_y);
        let image_width_px = round_px(canvas.x_px(image_width));
        let image_height_px = round_px(canvas.y_px(image_height));
        let image_offset_x_px = round_px(canvas.x_px(settings.image_border_x));
        let image_offset_y_px = round_px(canvas.y_px(settings.image_border_y));

        let original = settings.original_image;
        let scale_x = image_width / original.width;
        let scale_y = image_height / original.height;
        let image_pip_scale = scale_x.min(scale_y);

        let image_x = 50.0;
        let image_y = settings.image_border_y + (image_height / 2.0);

        let output_directory = settings
            .output_directory
            .clone()
            .unwrap_or_else(|| settings.face_directory.clone());

        let patterns = PatternCollection::calibrate(viewport_window_x, viewport_window_y)?;

        Ok(Self {
            canvas,
            radius_px,
            outline_width_px,
            outline_height_px,
            viewport_window_x,
            viewport_window_y,
            image_width,
            image_height,
            image_width_px,
            image_height_px,
            image_offset_x_px,
            image_offset_y_px,
            image_pip_scale,
            image_x,
            image_y,
            output_directory,
            patterns,
        })
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cardWidthPx\t{}", self.canvas.width_px)?;
        writeln!(f, "cardHeightPx\t{}", self.canvas.height_px)?;
        writeln!(f, "cardBorderPx\t{}", self.canvas.border_px)?;
        writeln!(f)?;
        writeln!(f, "radius\t\t{}", self.radius_px)?;
        writeln!(f, "outlineWidth\t{}", self.outline_width_px)?;
        writeln!(f, "outlineHeight\t{}", self.outline_height_px)?;
        writeln!(f)?;
        writeln!(f, "viewportWindowX\t{}", self.viewport_window_x)?;
        writeln!(f, "viewportWindowY\t{}", self.viewport_window_y)?;
        writeln!(f)?;
        writeln!(f, "imageWidth\t{}", self.image_width)?;
        writeln!(f, "imageHeight\t{}", self.image_height)?;
        writeln!(f, "imageWidthPx\t{}", self.image_width_px)?;
        writeln!(f, "imageHeightPx\t{}", self.image_height_px)?;
        writeln!(f, "imageOffsetXPx\t{}", self.image_offset_x_px)?;
        writeln!(f, "imageOffsetYPx\t{}", self.image_offset_y_px)?;
        writeln!(f)?;
        writeln!(f, "imagePipScale\t{}", self.image_pip_scale)?;
        writeln!(f, "imageX\t\t{}", self.image_x)?;
        writeln!(f, "imageY\t\t{}", self.image_y)?;
        writeln!(f)?;
        writeln!(f, "outputDirectory\t{}", self.output_directory)
    }
}
