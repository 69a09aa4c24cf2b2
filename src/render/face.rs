//! Face and court card artwork
//!
//! Face images come in whatever resolution the deck's artist used. They
//! are fitted into the configured image box so a directory of arbitrary
//! artwork lays out consistently without per-image tuning.

use std::path::Path;

use crate::config::{Geometry, Settings};
use crate::layout::{round_px, Canvas, Rect};
use crate::model::PercentagePosition;

use super::descriptor::ImageDescriptor;
use super::ROTATE;

/// Renderer for face artwork and the image pips drawn over it
pub struct FaceRenderer<'a> {
    geometry: &'a Geometry,
    keep_aspect_ratio: bool,
    image_pip: PercentagePosition,
}

impl<'a> FaceRenderer<'a> {
    pub fn new(settings: &Settings, geometry: &'a Geometry) -> Self {
        Self {
            geometry,
            keep_aspect_ratio: settings.keep_aspect_ratio,
            image_pip: settings.image_pip,
        }
    }

    /// Set whether the face image keeps its aspect ratio
    pub fn keep_aspect_ratio(mut self, keep: bool) -> Self {
        self.keep_aspect_ratio = keep;
        self
    }

    /// Rectangle the face image is drawn into.
    ///
    /// Landscape images fill one half of the card and are drawn on both
    /// passes; portrait and square images span both halves and are drawn
    /// once. Without aspect ratio preservation the image is stretched to
    /// the box.
    pub fn fit(&self, face: &ImageDescriptor) -> Rect {
        let g = self.geometry;
        let canvas = g.canvas;
        let box_w = g.image_width_px;
        let box_h = g.image_height_px;
        let src_w = face.image_width_px() as f32;
        let src_h = face.image_height_px() as f32;

        let mut rect = Rect::new(
            g.image_offset_x_px + canvas.border_px,
            g.image_offset_y_px + canvas.border_px,
            box_w,
            box_h,
        );

        if face.is_landscape() {
            if self.keep_aspect_ratio {
                let box_ratio = box_w as f32 / box_h as f32;
                if face.aspect_ratio() < box_ratio {
                    let scale = box_h as f32 / src_h;
                    rect.w = round_px(scale * src_w) + 1;
                    rect.x = centred(canvas.width_px, rect.w, canvas);
                } else {
                    // Anchor to the bottom of the top half
                    let scale = box_w as f32 / src_w;
                    rect.h = round_px(scale * src_h);
                    rect.y = (canvas.height_px / 2) - rect.h + canvas.border_px;
                }
            }
        } else {
            rect.h = 2 * box_h;
            if self.keep_aspect_ratio {
                let box_ratio = box_w as f32 / (2 * box_h) as f32;
                if face.aspect_ratio() < box_ratio {
                    let scale = box_h as f32 / src_h;
                    rect.w = round_px(scale * 2.0 * src_w);
                    rect.x = centred(canvas.width_px, rect.w, canvas);
                } else {
                    let scale = box_w as f32 / src_w;
                    rect.h = round_px(scale * src_h);
                    rect.y = centred(canvas.height_px, rect.h, canvas);
                }
            }
        }

        rect
    }

    /// Directives for the face image, plus the image pip for court cards.
    ///
    /// `pip` is only given for court cards. Nothing is drawn when the image
    /// box has no area.
    pub fn draw(&self, face: &ImageDescriptor, pip: Option<&Path>) -> String {
        if self.geometry.image_width_px <= 0 || self.geometry.image_height_px <= 0 {
            log::debug!("Image box is empty, skipping {}", face.path().display());
            return String::new();
        }

        let rect = self.fit(face);
        let mut out = rect.directive(face.path());

        if let Some(path) = pip {
            if let Some(pip_rect) = self.image_pip(rect, path) {
                let directive = pip_rect.directive(path);
                out.push_str(&directive);
                out.push_str(ROTATE);
                out.push_str(&directive);
                out.push_str(ROTATE);
            }
        }

        out
    }

    /// Rectangle of the image pip, relative to the face image origin.
    ///
    /// Fields left at their defaults are scaled with the image box so the
    /// pip keeps its proportions when the borders change.
    fn image_pip(&self, face: Rect, path: &Path) -> Option<Rect> {
        if self.image_pip.height() == 0.0 {
            return None;
        }

        let scaled = self.image_pip.scaled(self.geometry.image_pip_scale);
        let pip = ImageDescriptor::from_position(self.geometry.canvas, &scaled, path);
        if !pip.is_file_found() {
            log::debug!("No image pip at {}", path.display());
            return None;
        }

        let (x, y) = pip.origin_px();
        Some(Rect::new(
            x + face.x,
            y + face.y,
            round_px(pip.width_px()),
            round_px(pip.height_px()),
        ))
    }
}

fn centred(extent: i32, size: i32, canvas: Canvas) -> i32 {
    ((extent - size) / 2) + canvas.border_px
}
