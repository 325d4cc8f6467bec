//! Deck construction options.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{RANKS, Rank, SUITS};

/// Parameters used to build a [`Deck`](crate::Deck).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckrs::{DeckOptions, Rank};
///
/// let options = DeckOptions::default()
///     .with_decks(2)
///     .with_jokers(4)
///     .with_omitted_rank(Rank::Two)
///     .with_seed(7);
/// assert_eq!(options.pool_size(), 2 * 12 * 4 + 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOptions {
    /// Number of 52-card decks concatenated into the pool.
    pub decks: usize,
    /// Number of jokers appended after the decks.
    pub jokers: usize,
    /// Ranks left out of every suit of every deck.
    pub omit_ranks: HashSet<Rank>,
    /// Seed for the deck's generator. `None` derives one per deck.
    pub seed: Option<u64>,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            jokers: 0,
            omit_ranks: HashSet::new(),
            seed: None,
        }
    }
}

impl DeckOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: usize) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the number of jokers.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_jokers(2);
    /// assert_eq!(options.jokers, 2);
    /// ```
    #[must_use]
    pub const fn with_jokers(mut self, jokers: usize) -> Self {
        self.jokers = jokers;
        self
    }

    /// Adds a rank to leave out of the pool.
    #[must_use]
    pub fn with_omitted_rank(mut self, rank: Rank) -> Self {
        self.omit_ranks.insert(rank);
        self
    }

    /// Adds several ranks to leave out of the pool.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{DeckOptions, Rank};
    ///
    /// let options = DeckOptions::default().with_omit_ranks([Rank::Two, Rank::Three]);
    /// assert!(options.omit_ranks.contains(&Rank::Three));
    /// ```
    #[must_use]
    pub fn with_omit_ranks(mut self, ranks: impl IntoIterator<Item = Rank>) -> Self {
        self.omit_ranks.extend(ranks);
        self
    }

    /// Sets the seed for the deck's generator.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the number of cards a deck built from these options holds.
    #[must_use]
    pub fn pool_size(&self) -> usize {
        let kept = RANKS
            .iter()
            .filter(|&rank| !self.omit_ranks.contains(rank))
            .count();
        self.decks * kept * SUITS.len() + self.jokers
    }
}
