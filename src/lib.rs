//! A deck of playing cards with optional `no_std` support.
//!
//! The crate provides a [`Deck`] built from any number of standard 52-card
//! decks plus jokers, optionally leaving out ranks. A deck deals its fixed
//! card pool through a shuffled index order and reports exhaustion through
//! [`DrawError`].
//!
//! # Example
//!
//! ```
//! use deckrs::{Deck, DeckOptions, DrawError};
//!
//! let options = DeckOptions::default().with_jokers(2).with_seed(42);
//! let mut deck = Deck::from_options(&options);
//! deck.shuffle();
//!
//! let hand = deck.deal(5).unwrap();
//! assert_eq!(hand.len(), 5);
//! assert_eq!(deck.remaining(), 49);
//! assert!(matches!(deck.deal(50), Err(DrawError::NotEnoughCards { .. })));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS, Rank, SUITS, Suit};
pub use deck::Deck;
pub use error::{DrawError, RankError};
pub use options::DeckOptions;
