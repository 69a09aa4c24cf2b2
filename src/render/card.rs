//! Script stanzas for the 52 ranked cards

use std::fmt::{self, Write};
use std::path::PathBuf;

use crate::config::{Geometry, Settings};
use crate::model::{Card, Rank, Suit};

use super::artwork::Artwork;
use super::descriptor::ImageDescriptor;
use super::face::FaceRenderer;
use super::pips::draw_standard_pips;
use super::ROTATE;

/// Writes one `convert` command per card
pub struct CardRenderer<'a> {
    settings: &'a Settings,
    geometry: &'a Geometry,
    artwork: Artwork,
    face: FaceRenderer<'a>,
}

impl<'a> CardRenderer<'a> {
    pub fn new(settings: &'a Settings, geometry: &'a Geometry) -> Self {
        Self {
            settings,
            geometry,
            artwork: Artwork::new(settings),
            face: FaceRenderer::new(settings, geometry),
        }
    }

    pub fn artwork(&self) -> &Artwork {
        &self.artwork
    }

    pub fn face_renderer(&self) -> &FaceRenderer<'a> {
        &self.face
    }

    /// Opening of every card command: a transparent canvas with the card
    /// outline filled in the card colour
    pub fn start(&self) -> String {
        let g = self.geometry;
        let canvas = g.canvas;
        let bo = self.settings.border_offset;
        let (w, h) = canvas.full_size();

        let shape = if self.settings.mpc {
            format!(
                "-draw 'rectangle {},{} {},{}'",
                bo,
                bo,
                g.outline_width_px + 2 * canvas.border_px,
                g.outline_height_px + 2 * canvas.border_px
            )
        } else if g.radius_px > 0 {
            format!(
                "-stroke black -strokewidth {} -draw 'roundRectangle {},{} {},{} {},{}'",
                self.settings.stroke_width,
                bo,
                bo,
                g.outline_width_px,
                g.outline_height_px,
                g.radius_px,
                g.radius_px
            )
        } else {
            format!(
                "-stroke black -strokewidth {} -draw 'rectangle {},{} {},{}'",
                self.settings.stroke_width, bo, bo, g.outline_width_px, g.outline_height_px
            )
        };

        format!(
            "convert -size {}x{} xc:transparent  \\\n\t-fill '{}' {} \\\n",
            w, h, self.settings.card_colour, shape
        )
    }

    /// Close a card command, writing `cards/<out>/<stem>.png`
    pub fn end(&self, out: &mut String, stem: &str) -> fmt::Result {
        writeln!(out, "\t+dither -colors 256 \\")?;
        writeln!(out, "\tcards/{}/{}.png", self.geometry.output_directory, stem)?;
        writeln!(out)
    }

    /// Corner pip for a suit, preferring the small `<S>S.png` artwork
    pub fn corner_pip(&self, suit: Suit) -> ImageDescriptor {
        let letter = suit.letter().to_string();
        let mut pip = ImageDescriptor::from_position(
            self.geometry.canvas,
            &self.settings.corner_pip,
            self.artwork.pip(&format!("{}S", letter)),
        );
        if !pip.is_file_found() {
            log::debug!(
                "No small pip at {}, using the standard pip",
                pip.path().display()
            );
            pip.set_file_name(self.artwork.pip(&letter));
        }
        pip
    }

    pub fn standard_pip(&self, suit: Suit) -> ImageDescriptor {
        ImageDescriptor::from_position(
            self.geometry.canvas,
            &self.settings.standard_pip,
            self.artwork.pip(&suit.letter().to_string()),
        )
    }

    /// Index artwork at the configured index position
    pub fn index_at(&self, path: impl Into<PathBuf>) -> ImageDescriptor {
        ImageDescriptor::from_position(self.geometry.canvas, &self.settings.index, path)
    }

    /// Index for a card, borrowing the alternate suit's artwork when missing
    pub fn index(&self, card: Card) -> ImageDescriptor {
        let mut index = self.index_at(self.artwork.index(&card.file_stem()));
        if !index.is_file_found() {
            log::debug!(
                "No index at {}, trying {}",
                index.path().display(),
                card.alternate_file_stem()
            );
            index.set_file_name(self.artwork.index(&card.alternate_file_stem()));
        }
        index
    }

    pub fn face(&self, card: Card) -> ImageDescriptor {
        let g = self.geometry;
        ImageDescriptor::new(
            g.canvas,
            g.image_height,
            g.image_x,
            g.image_y,
            self.artwork.face(&card.file_stem()),
        )
    }

    /// Write the thirteen cards of a suit
    pub fn render_suit(&self, out: &mut String, suit: Suit) -> fmt::Result {
        let corner_pip = self.corner_pip(suit);
        let mut standard_pip = self.standard_pip(suit);

        for rank in Rank::all() {
            self.render_card(out, Card::new(suit, rank), &corner_pip, &mut standard_pip)?;
        }
        Ok(())
    }

    /// Write a single card.
    ///
    /// The card is drawn in two halves. The first half ends up upside down
    /// in the lower part of the card once the canvas is rotated, after
    /// which the upper half is drawn. Cards without face artwork are laid
    /// out with standard pips.
    pub fn render_card(
        &self,
        out: &mut String,
        card: Card,
        corner_pip: &ImageDescriptor,
        standard_pip: &mut ImageDescriptor,
    ) -> fmt::Result {
        let stem = card.file_stem();
        let index = self.index(card);
        let face = self.face(card);
        let pattern = self.geometry.patterns.for_rank(card.rank);

        let face_text = if face.use_standard_pips() {
            String::new()
        } else {
            let court_pip = card.rank.is_court().then(|| standard_pip.path().to_path_buf());
            self.face.draw(&face, court_pip.as_deref())
        };

        writeln!(out, "# Draw the {} as file {}.png.", card, stem)?;
        out.push_str(&self.start());

        if face.use_standard_pips() {
            out.push_str(&draw_standard_pips(
                pattern,
                true,
                &self.settings.standard_pip,
                standard_pip,
            ));
        } else if face.is_landscape() {
            out.push_str(&face_text);
        }
        self.corners(out, corner_pip, &index);

        out.push_str(ROTATE);

        if face.use_standard_pips() {
            out.push_str(&draw_standard_pips(
                pattern,
                false,
                &self.settings.standard_pip,
                standard_pip,
            ));
        } else {
            out.push_str(&face_text);
        }
        self.corners(out, corner_pip, &index);

        self.end(out, &stem)
    }

    fn corners(&self, out: &mut String, corner_pip: &ImageDescriptor, index: &ImageDescriptor) {
        out.push_str(corner_pip.draw());
        out.push_str(index.draw());
        if self.settings.quad {
            out.push_str(corner_pip.draw_mirrored());
            out.push_str(index.draw_mirrored());
        }
    }
}
