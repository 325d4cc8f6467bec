//! Card types and deck constants.

use core::fmt;

use crate::error::RankError;

/// Card suit.
///
/// [`Suit::Joker`] is a fifth pseudo-suit used only by jokers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Joker.
    Joker,
}

impl Suit {
    /// Returns the glyph used when rendering a card of this suit.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Spades => "♠",
            Self::Diamonds => "♦",
            Self::Clubs => "♣",
            Self::Hearts => "♥",
            Self::Joker => "Joker",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Card rank, from two up to ace.
///
/// The discriminant is the rank's ordinal (2 = Two, 14 = Ace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    /// Two.
    Two = 2,
    /// Three.
    Three = 3,
    /// Four.
    Four = 4,
    /// Five.
    Five = 5,
    /// Six.
    Six = 6,
    /// Seven.
    Seven = 7,
    /// Eight.
    Eight = 8,
    /// Nine.
    Nine = 9,
    /// Ten.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
    /// Ace.
    Ace = 14,
}

impl Rank {
    /// Returns the rank's ordinal (2..=14).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the glyph used when rendering a card of this rank.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = RankError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        RANKS
            .iter()
            .copied()
            .find(|rank| rank.value() == value)
            .ok_or(RankError::OutOfRange(value))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// A playing card.
///
/// Jokers carry no rank: [`Card::new`] drops the rank when the suit is
/// [`Suit::Joker`], so every joker compares equal to every other joker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: Option<Rank>,
}

impl Card {
    /// Creates a new card.
    ///
    /// ```
    /// use deckrs::{Card, Rank, Suit};
    ///
    /// assert_eq!(Card::new(Suit::Hearts, Rank::Ace).to_string(), "A♥");
    /// assert_eq!(Card::new(Suit::Joker, Rank::Two), Card::joker());
    /// ```
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        match suit {
            Suit::Joker => Self::joker(),
            _ => Self {
                suit,
                rank: Some(rank),
            },
        }
    }

    /// Creates a joker.
    #[must_use]
    pub const fn joker() -> Self {
        Self {
            suit: Suit::Joker,
            rank: None,
        }
    }

    /// The suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// The rank of the card, `None` for jokers.
    #[must_use]
    pub const fn rank(&self) -> Option<Rank> {
        self.rank
    }

    /// The rank ordinal of the card, 0 for jokers.
    #[must_use]
    pub const fn rank_value(&self) -> u8 {
        match self.rank {
            Some(rank) => rank.value(),
            None => 0,
        }
    }

    /// Returns whether the card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self.suit, Suit::Joker)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            Some(rank) => write!(f, "{rank}{}", self.suit),
            None => f.write_str("Joker"),
        }
    }
}

/// The four natural suits, in the order a deck is built.
pub const SUITS: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Clubs, Suit::Hearts];

/// All thirteen ranks, lowest first.
pub const RANKS: [Rank; 13] = [
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
    Rank::Ace,
];

/// Number of cards per deck, jokers excluded.
pub const DECK_SIZE: usize = SUITS.len() * RANKS.len();
