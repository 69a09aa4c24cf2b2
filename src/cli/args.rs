use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::config::defaults::*;

#[derive(Parser, Debug)]
#[command(name = "cardgen")]
#[command(
    author,
    version,
    about = "Generate a shell script which uses ImageMagick 'convert' to draw a deck of playing cards",
    disable_help_flag = true
)]
pub struct Args {
    /// Print help (-h is the card height)
    #[arg(short = 'H', long, action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Subdirectory of indices to use [default: 1]
    #[arg(short, long, value_name = "DIRECTORY")]
    pub index: Option<String>,

    /// Subdirectory of pips to use [default: 1]
    #[arg(short, long, value_name = "DIRECTORY")]
    pub pip: Option<String>,

    /// Subdirectory of faces to use [default: 1]
    #[arg(short, long, value_name = "DIRECTORY")]
    pub face: Option<String>,

    /// Shortcut for: -f DIRECTORY -p DIRECTORY -i DIRECTORY
    #[arg(short = 'I', long, value_name = "DIRECTORY")]
    pub inputs: Option<String>,

    /// Script filename
    #[arg(short, long, value_name = "FILENAME", default_value = DEFAULT_SCRIPT_FILENAME)]
    pub script: PathBuf,

    /// Output directory (defaults to the face directory name)
    #[arg(short, long, value_name = "DIRECTORY")]
    pub output: Option<String>,

    /// Card width in pixels
    #[arg(short, long, default_value_t = DEFAULT_CARD_WIDTH_PX)]
    pub width: i32,

    /// Card height in pixels
    #[arg(short, long, default_value_t = DEFAULT_CARD_HEIGHT_PX)]
    pub height: i32,

    /// Background colour name (see http://www.imagemagick.org/script/color.php)
    #[arg(short, long, value_name = "NAME", default_value = DEFAULT_CARD_COLOUR)]
    pub colour: String,

    /// Keep the aspect ratio of face images
    #[arg(short = 'a', long)]
    pub keep_aspect_ratio: bool,

    /// Generate MakePlayingCards images (fixed size, bleed border, square corners)
    #[arg(short, long)]
    pub mpc: bool,

    /// Draw pips and indices in all 4 corners
    #[arg(short, long)]
    pub quad: bool,

    /// Height of index as a % of card height
    #[arg(long, value_name = "VALUE")]
    pub index_height: Option<f32>,

    /// X value of centre of index as a % of card width
    #[arg(long, value_name = "VALUE")]
    pub index_centre_x: Option<f32>,

    /// Y value of centre of index as a % of card height
    #[arg(long, value_name = "VALUE")]
    pub index_centre_y: Option<f32>,

    /// Height of corner pip as a % of card height
    #[arg(long, value_name = "VALUE")]
    pub corner_pip_height: Option<f32>,

    /// X value of centre of corner pip as a % of card width
    #[arg(long, value_name = "VALUE")]
    pub corner_pip_centre_x: Option<f32>,

    /// Y value of centre of corner pip as a % of card height
    #[arg(long, value_name = "VALUE")]
    pub corner_pip_centre_y: Option<f32>,

    /// Height of standard pip as a % of card height
    #[arg(long, value_name = "VALUE")]
    pub standard_pip_height: Option<f32>,

    /// X value of centre of the top left standard pip as a % of card width
    #[arg(long, value_name = "VALUE")]
    pub standard_pip_centre_x: Option<f32>,

    /// Y value of centre of the top left standard pip as a % of card height
    #[arg(long, value_name = "VALUE")]
    pub standard_pip_centre_y: Option<f32>,

    /// Image border in X direction as a % of card width
    #[arg(long, value_name = "VALUE")]
    pub image_border_x: Option<f32>,

    /// Image border in Y direction as a % of card height
    #[arg(long, value_name = "VALUE")]
    pub image_border_y: Option<f32>,

    /// Don't display the image pip on the court cards
    #[arg(long, conflicts_with = "image_pip_height")]
    pub image_pip_off: bool,

    /// Height of image pip as a % of card height
    #[arg(long, value_name = "VALUE")]
    pub image_pip_height: Option<f32>,

    /// X value of centre of image pip as a % of card width, relative to the image border
    #[arg(long, value_name = "VALUE")]
    pub image_pip_centre_x: Option<f32>,

    /// Y value of centre of image pip as a % of card height, relative to the image border
    #[arg(long, value_name = "VALUE")]
    pub image_pip_centre_y: Option<f32>,

    /// Shortcut for: --index-centre-x VALUE --corner-pip-centre-x VALUE
    #[arg(short = 'C', long, value_name = "VALUE")]
    pub centre_x: Option<f32>,

    /// Directory the artwork directories (indices/, pips/, faces/, boneyard/) live in
    #[arg(long, value_name = "DIRECTORY")]
    pub asset_root: Option<PathBuf>,

    /// Print the derived card geometry
    #[arg(short = 'x', long)]
    pub debug: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Index directory; an explicit -i wins over -I
    pub fn index_directory(&self) -> String {
        self.directory(&self.index, DEFAULT_INDEX_DIRECTORY)
    }

    pub fn pip_directory(&self) -> String {
        self.directory(&self.pip, DEFAULT_PIP_DIRECTORY)
    }

    pub fn face_directory(&self) -> String {
        self.directory(&self.face, DEFAULT_FACE_DIRECTORY)
    }

    fn directory(&self, explicit: &Option<String>, default: &str) -> String {
        explicit
            .clone()
            .or_else(|| self.inputs.clone())
            .unwrap_or_else(|| default.to_string())
    }

    /// Index centre X; an explicit --index-centre-x wins over -C
    pub fn index_centre_x(&self) -> Option<f32> {
        self.index_centre_x.or(self.centre_x)
    }

    pub fn corner_pip_centre_x(&self) -> Option<f32> {
        self.corner_pip_centre_x.or(self.centre_x)
    }

    /// Image pip height; --image-pip-off forces it to zero
    pub fn image_pip_height(&self) -> Option<f32> {
        if self.image_pip_off {
            Some(0.0)
        } else {
            self.image_pip_height
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("cardgen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert_eq!(args.width, 380);
        assert_eq!(args.height, 532);
        assert_eq!(args.colour, "white");
        assert_eq!(args.script, PathBuf::from("draw.sh"));
        assert_eq!(args.index_directory(), "1");
        assert!(args.output.is_none());
        assert!(!args.keep_aspect_ratio);
    }

    #[test]
    fn test_short_height_is_not_help() {
        let args = parse(&["-h", "600", "-w", "400"]);
        assert_eq!(args.height, 600);
        assert_eq!(args.width, 400);
    }

    #[test]
    fn test_inputs_shortcut() {
        let args = parse(&["-I", "fancy", "-p", "plain"]);
        assert_eq!(args.index_directory(), "fancy");
        assert_eq!(args.face_directory(), "fancy");
        assert_eq!(args.pip_directory(), "plain");
    }

    #[test]
    fn test_centre_x_shortcut() {
        let args = parse(&["-C", "9.5", "--corner-pip-centre-x", "7"]);
        assert_eq!(args.index_centre_x(), Some(9.5));
        assert_eq!(args.corner_pip_centre_x(), Some(7.0));
    }

    #[test]
    fn test_image_pip_off() {
        let args = parse(&["--image-pip-off"]);
        assert_eq!(args.image_pip_height(), Some(0.0));
        assert!(Args::try_parse_from(["cardgen", "--image-pip-off", "--image-pip-height", "5"]).is_err());
    }

    #[test]
    fn test_flags() {
        let args = parse(&["-a", "-m", "-q", "-x", "-vv"]);
        assert!(args.keep_aspect_ratio);
        assert!(args.mpc);
        assert!(args.quad);
        assert!(args.debug);
        assert_eq!(args.verbose, 2);
    }
}
