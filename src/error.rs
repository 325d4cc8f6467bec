//! Error types for deck operations.

use thiserror::Error;

/// Errors that can occur while drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Every card in the draw order has been dealt.
    #[error("deck is exhausted")]
    Exhausted,
    /// Fewer cards remain than were requested.
    #[error("requested {requested} cards but only {remaining} remain")]
    NotEnoughCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur when converting a raw value into a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RankError {
    /// The value is not a rank ordinal (2..=14).
    #[error("rank value {0} is out of range")]
    OutOfRange(u8),
}
