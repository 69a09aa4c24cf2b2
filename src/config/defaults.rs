use crate::model::PercentagePosition;

/// Default card width in pixels
pub const DEFAULT_CARD_WIDTH_PX: i32 = 380;

/// Default card height in pixels
pub const DEFAULT_CARD_HEIGHT_PX: i32 = 532;

/// Default background colour (ImageMagick colour name)
pub const DEFAULT_CARD_COLOUR: &str = "white";

pub const DEFAULT_INDEX: PercentagePosition = PercentagePosition::new(10.5, 8.07, 9.84);
pub const DEFAULT_CORNER_PIP: PercentagePosition = PercentagePosition::new(7.5, 8.07, 20.41);
pub const DEFAULT_STANDARD_PIP: PercentagePosition = PercentagePosition::new(18.0, 25.7, 18.65);

/// Image pip X/Y are relative to the face image box, not the card
pub const DEFAULT_IMAGE_PIP: PercentagePosition = PercentagePosition::new(14.29, 12.63, 9.77);

pub const DEFAULT_INDEX_DIRECTORY: &str = "1";
pub const DEFAULT_PIP_DIRECTORY: &str = "1";
pub const DEFAULT_FACE_DIRECTORY: &str = "1";

pub const DEFAULT_SCRIPT_FILENAME: &str = "draw.sh";
pub const DEFAULT_REFRESH_FILENAME: &str = "x_refresh.sh";

/// Fixed card geometry required by MakePlayingCards.com
pub const MPC_WIDTH_PX: i32 = 750;
pub const MPC_HEIGHT_PX: i32 = 1050;
pub const MPC_BORDER_PX: i32 = 36;

/// Corner radius as a percentage of card height
pub const DEFAULT_CORNER_RADIUS: f32 = 3.76;

/// Outline stroke width in pixels
pub const DEFAULT_STROKE_WIDTH: i32 = 2;

/// Inset of the card outline in pixels
pub const DEFAULT_BORDER_OFFSET: i32 = 1;

/// Face image borders as percentages of card width/height
pub const DEFAULT_IMAGE_BORDER_X: f32 = 14.54;
pub const DEFAULT_IMAGE_BORDER_Y: f32 = 10.14;

/// Narrower borders used for the jokers
pub const JOKER_IMAGE_BORDER_X: f32 = 7.0;
pub const JOKER_IMAGE_BORDER_Y: f32 = 5.0;
pub const JOKER_INDEX_HEIGHT: f32 = 30.0;
pub const JOKER_INDEX_CENTRE_Y: f32 = 20.0;
