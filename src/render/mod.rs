//! Script rendering: draw directives for every card slot

pub mod artwork;
pub mod card;
pub mod descriptor;
pub mod face;
pub mod joker;
pub mod pips;
pub mod script;

pub use artwork::Artwork;
pub use card::CardRenderer;
pub use descriptor::ImageDescriptor;
pub use face::FaceRenderer;
pub use joker::{JokerRenderer, JokerStyle};
pub use pips::draw_standard_pips;
pub use script::{ScriptGenerator, ScriptStats};

/// Turns the canvas so the second half of a card is drawn upright
pub const ROTATE: &str = "\t-rotate 180 \\\n";
