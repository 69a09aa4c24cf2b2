pub mod card;
pub mod position;

pub use card::{Card, Rank, Suit};
pub use position::{PercentagePosition, Setting};
