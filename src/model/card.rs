use std::fmt;

/// Suits in the order the deck is generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// Single letter used in artwork file names
    pub fn letter(&self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }

    /// Suit whose index artwork is borrowed when this suit has none.
    ///
    /// Pairs suits of the same colour: clubs/spades and diamonds/hearts.
    pub fn alternate(&self) -> Suit {
        match self {
            Suit::Clubs => Suit::Spades,
            Suit::Diamonds => Suit::Hearts,
            Suit::Hearts => Suit::Diamonds,
            Suit::Spades => Suit::Clubs,
        }
    }

    pub fn all() -> [Suit; 4] {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// Position of the rank in the deck, 1 (ace) to 13 (king).
    ///
    /// Doubles as the index of the rank's pip pattern.
    pub fn number(&self) -> usize {
        *self as usize + 1
    }

    /// Rank part of artwork file names ("A", "2" ... "10", "J", "Q", "K")
    pub fn code(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            _ => self.code(),
        }
    }

    /// Jack, queen and king carry an image pip over their artwork
    pub fn is_court(&self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King)
    }

    pub fn all() -> [Rank; 13] {
        [
            Rank::Ace,
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
        ]
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// File stem shared by the card's artwork and its output image, e.g. "H10"
    pub fn file_stem(&self) -> String {
        format!("{}{}", self.suit.letter(), self.rank.code())
    }

    /// File stem of the index artwork borrowed from the alternate suit
    pub fn alternate_file_stem(&self) -> String {
        format!("{}{}", self.suit.alternate().letter(), self.rank.code())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suit_letters() {
        let letters: String = Suit::all().iter().map(|s| s.letter()).collect();
        assert_eq!(letters, "CDHS");
        assert_eq!(Suit::Diamonds.to_string(), "Diamonds");
    }

    #[test]
    fn test_alternate_suits_keep_colour() {
        assert_eq!(Suit::Clubs.alternate(), Suit::Spades);
        assert_eq!(Suit::Hearts.alternate(), Suit::Diamonds);
        for suit in Suit::all() {
            let alt = suit.alternate();
            assert_ne!(alt, suit);
            assert_eq!(alt.alternate(), suit);
        }
    }

    #[test]
    fn test_rank_numbers() {
        assert_eq!(Rank::Ace.number(), 1);
        assert_eq!(Rank::Ten.number(), 10);
        assert_eq!(Rank::King.number(), 13);
        assert_eq!(Rank::Ace.to_string(), "Ace");
        assert_eq!(Rank::Seven.to_string(), "7");
    }

    #[test]
    fn test_court_cards() {
        let courts: Vec<Rank> = Rank::all().into_iter().filter(Rank::is_court).collect();
        assert_eq!(courts, vec![Rank::Jack, Rank::Queen, Rank::King]);
    }

    #[test]
    fn test_file_stems() {
        let card = Card::new(Suit::Hearts, Rank::Ten);
        assert_eq!(card.file_stem(), "H10");
        assert_eq!(card.alternate_file_stem(), "D10");
        assert_eq!(card.to_string(), "10 of Hearts");
        assert_eq!(Card::new(Suit::Clubs, Rank::Queen).file_stem(), "CQ");
    }
}
