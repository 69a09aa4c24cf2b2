//! Joker stanzas
//!
//! Jokers use their own settings (see [`Settings::for_jokers`]) with a
//! larger face box and index. When a suit has no joker artwork a stand-in
//! is drawn from the images in `boneyard/`.

use std::fmt::{self, Write};
use std::path::PathBuf;

use crate::config::{Geometry, Settings};
use crate::model::Suit;

use super::card::CardRenderer;
use super::descriptor::ImageDescriptor;
use super::ROTATE;

/// Placement of the joker face image (height, centre x, centre y)
const JOKER_FACE: (f32, f32, f32) = (95.0, 50.0, 50.0);
const IMAGEMAGICK_HEADER: (f32, f32, f32) = (4.0, 50.0, 10.0);
const IMAGEMAGICK_FOOTER: (f32, f32, f32) = (3.0, 50.0, 90.0);

const IMAGEMAGICK_LOGO: &str = "ImageMagick_logo.svg.png";
const IMAGEMAGICK_USAGE: &str = "ImageMagickUsage.png";
const IMAGEMAGICK_URL: &str = "ImageMagickURL.png";
const CARD_BACK: &str = "Back.png";

/// How a joker was drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JokerStyle {
    /// From the suit's own joker index and/or face artwork
    Artwork,
    /// Stand-in built from the ImageMagick logo
    ImageMagick,
    /// Stand-in built from the card back
    Default,
}

impl JokerStyle {
    /// Stand-in used after `fails` jokers have already fallen back
    pub fn fallback(fails: usize) -> Self {
        match fails {
            0 | 2 => JokerStyle::ImageMagick,
            _ => JokerStyle::Default,
        }
    }

    pub fn is_fallback(&self) -> bool {
        *self != JokerStyle::Artwork
    }
}

pub struct JokerRenderer<'a> {
    cards: CardRenderer<'a>,
    geometry: &'a Geometry,
}

impl<'a> JokerRenderer<'a> {
    /// `settings` and `geometry` should be the joker variants
    pub fn new(settings: &'a Settings, geometry: &'a Geometry) -> Self {
        Self {
            cards: CardRenderer::new(settings, geometry),
            geometry,
        }
    }

    fn descriptor(&self, placement: (f32, f32, f32), path: impl Into<PathBuf>) -> ImageDescriptor {
        let (height, x, y) = placement;
        ImageDescriptor::new(self.geometry.canvas, height, x, y, path)
    }

    /// Write the joker of `suit`, given the number of jokers that have
    /// already fallen back to a stand-in.
    pub fn render(
        &self,
        out: &mut String,
        suit: Suit,
        fails: usize,
    ) -> Result<JokerStyle, fmt::Error> {
        let stem = format!("{}Joker", suit.letter());
        writeln!(out, "# Draw the {} Joker as file {}.png", suit, stem)?;

        let artwork = self.cards.artwork();
        let face = self.descriptor(JOKER_FACE, artwork.face(&stem));
        let index = self.cards.index_at(artwork.index(&stem));

        if index.is_file_found() || face.is_file_found() {
            out.push_str(&self.cards.start());
            if index.is_file_found() {
                push_both_halves(out, &index);
            }
            if face.is_file_found() {
                out.push_str(&self.cards.face_renderer().draw(&face, None));
            }
            self.cards.end(out, &stem)?;
            return Ok(JokerStyle::Artwork);
        }

        let style = JokerStyle::fallback(fails);
        log::info!("No joker artwork for {}, drawing {:?} joker", suit, style);
        match style {
            JokerStyle::ImageMagick => self.imagemagick(out, &stem)?,
            _ => self.default_joker(out, &stem, &index)?,
        }
        Ok(style)
    }

    fn imagemagick(&self, out: &mut String, stem: &str) -> fmt::Result {
        let artwork = self.cards.artwork();
        let face = self.descriptor(JOKER_FACE, artwork.boneyard(IMAGEMAGICK_LOGO));
        let header = self.descriptor(IMAGEMAGICK_HEADER, artwork.boneyard(IMAGEMAGICK_USAGE));
        let footer = self.descriptor(IMAGEMAGICK_FOOTER, artwork.boneyard(IMAGEMAGICK_URL));

        out.push_str(&self.cards.start());
        out.push_str(&self.cards.face_renderer().draw(&face, None));
        out.push_str(header.draw());
        out.push_str(footer.draw());
        self.cards.end(out, stem)
    }

    fn default_joker(&self, out: &mut String, stem: &str, index: &ImageDescriptor) -> fmt::Result {
        let face = self.descriptor(JOKER_FACE, self.cards.artwork().boneyard(CARD_BACK));

        out.push_str(&self.cards.start());
        if index.is_file_found() {
            push_both_halves(out, index);
        }
        out.push_str(&self.cards.face_renderer().draw(&face, None));
        self.cards.end(out, stem)
    }
}

fn push_both_halves(out: &mut String, desc: &ImageDescriptor) {
    out.push_str(desc.draw());
    out.push_str(ROTATE);
    out.push_str(desc.draw());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::png::png_header;
    use std::fs;
    use std::path::Path;

    fn write_png(root: &Path, relative: &str, width: u32, height: u32) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, png_header(width, height)).unwrap();
    }

    fn jokers_in(root: &Path) -> Settings {
        Settings {
            asset_root: root.to_path_buf(),
            ..Default::default()
        }
        .for_jokers()
    }

    #[test]
    fn test_fallback_order() {
        let styles: Vec<JokerStyle> = (0..4).map(JokerStyle::fallback).collect();
        assert_eq!(
            styles,
            [
                JokerStyle::ImageMagick,
                JokerStyle::Default,
                JokerStyle::ImageMagick,
                JokerStyle::Default
            ]
        );
        assert!(!JokerStyle::Artwork.is_fallback());
    }

    #[test]
    fn test_joker_artwork() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "faces/1/HJoker.png", 200, 300);
        write_png(dir.path(), "indices/1/HJoker.png", 50, 150);
        let settings = jokers_in(dir.path());
        let geometry = settings.recalculate().unwrap();
        let renderer = JokerRenderer::new(&settings, &geometry);

        let mut out = String::new();
        let style = renderer.render(&mut out, Suit::Hearts, 0).unwrap();
        assert_eq!(style, JokerStyle::Artwork);

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "# Draw the Hearts Joker as file HJoker.png");
        let index = dir.path().join("indices/1/HJoker.png").display().to_string();
        assert_eq!(out.matches(&index).count(), 2);
        assert!(out.contains(&dir.path().join("faces/1/HJoker.png").display().to_string()));
        assert!(out.ends_with("\tcards/1/HJoker.png\n\n"));
    }

    #[test]
    fn test_index_only_joker() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "indices/1/CJoker.png", 50, 150);
        let settings = jokers_in(dir.path());
        let geometry = settings.recalculate().unwrap();

        let mut out = String::new();
        let style = JokerRenderer::new(&settings, &geometry)
            .render(&mut out, Suit::Clubs, 3)
            .unwrap();
        assert_eq!(style, JokerStyle::Artwork);
        // Index on both halves, no face
        assert_eq!(out.matches("image over").count(), 2);
    }

    #[test]
    fn test_imagemagick_joker() {
        let dir = tempfile::tempdir().unwrap();
        let settings = jokers_in(dir.path());
        let geometry = settings.recalculate().unwrap();

        let mut out = String::new();
        let style = JokerRenderer::new(&settings, &geometry)
            .render(&mut out, Suit::Spades, 0)
            .unwrap();
        assert_eq!(style, JokerStyle::ImageMagick);
        assert!(out.contains("boneyard/ImageMagick_logo.svg.png"));
        assert!(out.contains("boneyard/ImageMagickUsage.png"));
        assert!(out.contains("boneyard/ImageMagickURL.png"));
        assert!(!out.contains("Back.png"));
    }

    #[test]
    fn test_default_joker_uses_card_back() {
        let dir = tempfile::tempdir().unwrap();
        let settings = jokers_in(dir.path());
        let geometry = settings.recalculate().unwrap();
        let renderer = JokerRenderer::new(&settings, &geometry);

        let mut out = String::new();
        let style = renderer.render(&mut out, Suit::Diamonds, 1).unwrap();
        assert_eq!(style, JokerStyle::Default);
        assert!(out.contains("boneyard/Back.png"));
        assert!(!out.contains(ROTATE));
    }

    #[test]
    fn test_joker_face_fills_the_wider_box() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "faces/1/SJoker.png", 100, 200);
        let settings = jokers_in(dir.path());
        let geometry = settings.recalculate().unwrap();

        let mut out = String::new();
        JokerRenderer::new(&settings, &geometry)
            .render(&mut out, Suit::Spades, 0)
            .unwrap();
        // 7% of 380 = 26.6, 5% of 532 = 26.6; box 86% x 45%
        assert!(out.contains("image over 27,27 327,478"));
    }
}
