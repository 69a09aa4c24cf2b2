use std::fmt;
use std::path::PathBuf;

use crate::cli::Args;
use crate::error::ConfigError;
use crate::model::PercentagePosition;

use super::defaults::*;
use super::geometry::Geometry;

/// Face image box as card percentages: full width, height of one half
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageBox {
    pub width: f32,
    pub height: f32,
}

impl ImageBox {
    pub fn from_borders(border_x: f32, border_y: f32) -> Self {
        Self {
            width: 100.0 - (2.0 * border_x),
            height: 50.0 - border_y,
        }
    }
}

/// Primary inputs for script generation
///
/// Everything the layout needs that isn't derived. Derived pixel values
/// live in [`Geometry`], produced by [`Settings::recalculate`]; a changed
/// `Settings` must be recalculated before its geometry is used.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    // Card
    pub card_width_px: i32,
    pub card_height_px: i32,
    pub card_colour: String,

    // Element placement (percentages)
    pub index: PercentagePosition,
    pub corner_pip: PercentagePosition,
    pub standard_pip: PercentagePosition,
    pub image_pip: PercentagePosition,

    // Artwork subdirectories
    pub index_directory: String,
    pub pip_directory: String,
    pub face_directory: String,

    /// Directory the artwork tree is resolved against (empty = current directory)
    pub asset_root: PathBuf,

    // Output
    pub script_filename: PathBuf,
    pub refresh_filename: String,
    pub output_directory: Option<String>,

    // Modes
    pub keep_aspect_ratio: bool,
    pub mpc: bool,
    pub quad: bool,
    pub debug: bool,

    // Outline
    pub corner_radius: f32,
    pub stroke_width: i32,
    pub border_offset: i32,

    // Face image borders (percentages)
    pub image_border_x: f32,
    pub image_border_y: f32,

    /// Face image box at the default borders, the reference for image
    /// pip scaling. Border overrides and [`Settings::for_jokers`] leave it
    /// unchanged.
    pub original_image: ImageBox,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            card_width_px: DEFAULT_CARD_WIDTH_PX,
            card_height_px: DEFAULT_CARD_HEIGHT_PX,
            card_colour: DEFAULT_CARD_COLOUR.to_string(),

            index: DEFAULT_INDEX,
            corner_pip: DEFAULT_CORNER_PIP,
            standard_pip: DEFAULT_STANDARD_PIP,
            image_pip: DEFAULT_IMAGE_PIP,

            index_directory: DEFAULT_INDEX_DIRECTORY.to_string(),
            pip_directory: DEFAULT_PIP_DIRECTORY.to_string(),
            face_directory: DEFAULT_FACE_DIRECTORY.to_string(),
            asset_root: PathBuf::new(),

            script_filename: PathBuf::from(DEFAULT_SCRIPT_FILENAME),
            refresh_filename: DEFAULT_REFRESH_FILENAME.to_string(),
            output_directory: None,

            keep_aspect_ratio: false,
            mpc: false,
            quad: false,
            debug: false,

            corner_radius: DEFAULT_CORNER_RADIUS,
            stroke_width: DEFAULT_STROKE_WIDTH,
            border_offset: DEFAULT_BORDER_OFFSET,

            image_border_x: DEFAULT_IMAGE_BORDER_X,
            image_border_y: DEFAULT_IMAGE_BORDER_Y,

            original_image: ImageBox::from_borders(
                DEFAULT_IMAGE_BORDER_X,
                DEFAULT_IMAGE_BORDER_Y,
            ),
        }
    }
}

impl Settings {
    /// Create settings from CLI arguments
    pub fn from_args(args: &Args) -> Self {
        let mut settings = Self {
            card_width_px: args.width,
            card_height_px: args.height,
            card_colour: args.colour.clone(),
            index_directory: args.index_directory(),
            pip_directory: args.pip_directory(),
            face_directory: args.face_directory(),
            asset_root: args.asset_root.clone().unwrap_or_default(),
            script_filename: args.script.clone(),
            output_directory: args.output.clone(),
            keep_aspect_ratio: args.keep_aspect_ratio,
            mpc: args.mpc,
            quad: args.quad,
            debug: args.debug,
            ..Default::default()
        };

        let overrides = [
            (&mut settings.index, args.index_height, args.index_centre_x(), args.index_centre_y),
            (
                &mut settings.corner_pip,
                args.corner_pip_height,
                args.corner_pip_centre_x(),
                args.corner_pip_centre_y,
            ),
            (
                &mut settings.standard_pip,
                args.standard_pip_height,
                args.standard_pip_centre_x,
                args.standard_pip_centre_y,
            ),
            (
                &mut settings.image_pip,
                args.image_pip_height(),
                args.image_pip_centre_x,
                args.image_pip_centre_y,
            ),
        ];
        for (position, height, centre_x, centre_y) in overrides {
            if let Some(v) = height {
                position.set_height(v);
            }
            if let Some(v) = centre_x {
                position.set_centre_x(v);
            }
            if let Some(v) = centre_y {
                position.set_centre_y(v);
            }
        }

        if let Some(v) = args.image_border_x {
            settings.image_border_x = v;
        }
        if let Some(v) = args.image_border_y {
            settings.image_border_y = v;
        }

        settings
    }

    /// Settings for the jokers: narrower image borders and a larger index.
    ///
    /// The original image box is carried over unchanged, so image pips on
    /// jokers are scaled relative to the regular court card layout.
    pub fn for_jokers(&self) -> Self {
        let mut jokers = self.clone();
        jokers.image_border_x = JOKER_IMAGE_BORDER_X;
        jokers.image_border_y = JOKER_IMAGE_BORDER_Y;
        jokers.index.set_height(JOKER_INDEX_HEIGHT);
        jokers.index.set_centre_y(JOKER_INDEX_CENTRE_Y);
        jokers
    }

    /// Reject values the geometry can't be computed from
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.mpc && (self.card_width_px <= 0 || self.card_height_px <= 0) {
            return Err(ConfigError::InvalidCardSize {
                width: self.card_width_px,
                height: self.card_height_px,
            });
        }

        let positions = [
            ("index", &self.index),
            ("corner pip", &self.corner_pip),
            ("standard pip", &self.standard_pip),
            ("image pip", &self.image_pip),
        ];
        for (element, position) in positions {
            for (field, value) in position.fields() {
                if !value.is_finite() {
                    log::warn!("{} {} is not a number: {}", element, field, value);
                    return Err(ConfigError::InvalidPercentage {
                        name: element,
                        value,
                    });
                }
            }
            if position.height() < 0.0 {
                log::warn!("{} height is negative: {}", element, position.height());
                return Err(ConfigError::InvalidPercentage {
                    name: element,
                    value: position.height(),
                });
            }
        }

        for (name, value) in [
            ("image border x", self.image_border_x),
            ("image border y", self.image_border_y),
            ("corner radius", self.corner_radius),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidPercentage { name, value });
            }
        }

        // Past the centre line the face image box turns inside out
        for (name, value) in [
            ("image border x", self.image_border_x),
            ("image border y", self.image_border_y),
        ] {
            if value > 50.0 {
                return Err(ConfigError::InvalidPercentage { name, value });
            }
        }

        Ok(())
    }

    /// Derive the pixel geometry from the current settings
    pub fn recalculate(&self) -> Result<Geometry, ConfigError> {
        self.validate()?;
        Geometry::calculate(self)
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cardWidthPx\t{}", self.card_width_px)?;
        writeln!(f, "cardHeightPx\t{}", self.card_height_px)?;
        writeln!(f, "cardColour\t{}", self.card_colour)?;
        writeln!(f)?;
        writeln!(f, "index\t\t{}", self.index)?;
        writeln!(f, "cornerPip\t{}", self.corner_pip)?;
        writeln!(f, "standardPip\t{}", self.standard_pip)?;
        writeln!(f, "imagePip\t{}", self.image_pip)?;
        writeln!(f)?;
        writeln!(f, "indexDirectory\t{}", self.index_directory)?;
        writeln!(f, "pipDirectory\t{}", self.pip_directory)?;
        writeln!(f, "faceDirectory\t{}", self.face_directory)?;
        writeln!(f)?;
        writeln!(f, "scriptFilename\t{}", self.script_filename.display())?;
        writeln!(f, "refreshFilename\t{}", self.refresh_filename)?;
        writeln!(f)?;
        writeln!(f, "keepAspectRatio\t{}", self.keep_aspect_ratio)?;
        writeln!(f, "MPC\t\t{}", self.mpc)?;
        writeln!(f, "quad\t\t{}", self.quad)?;
        writeln!(f)?;
        writeln!(f, "cornerRadius\t{}", self.corner_radius)?;
        writeln!(f, "strokeWidth\t{}", self.stroke_width)?;
        writeln!(f, "borderOffset\t{}", self.border_offset)?;
        writeln!(f)?;
        writeln!(f, "imageBorderX\t{}", self.image_border_x)?;
        writeln!(f, "imageBorderY\t{}", self.image_border_y)?;
        writeln!(f, "originalImageWidth\t{}", self.original_image.width)?;
        writeln!(f, "originalImageHeight\t{}", self.original_image.height)
    }
}
