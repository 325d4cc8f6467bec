//! The deck engine: a fixed card pool dealt through a shuffled index order.

use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering};

use alloc::vec::Vec;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, RANKS, Rank, SUITS};
use crate::error::DrawError;
use crate::options::DeckOptions;

/// Decks built so far, mixed into derived seeds.
static DECKS_BUILT: AtomicUsize = AtomicUsize::new(0);

/// Derives a seed for a deck that was not given one.
fn derive_seed() -> u64 {
    let count = DECKS_BUILT.fetch_add(1, Ordering::Relaxed) as u64;
    let salt = count.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    clock_nanos() ^ salt
}

#[cfg(feature = "std")]
fn clock_nanos() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64)
}

#[cfg(not(feature = "std"))]
const fn clock_nanos() -> u64 {
    0
}

/// A deck of playing cards.
///
/// The deck keeps the cards it was built with in a fixed pool and deals them
/// through a separate draw order, a permutation of the pool's indices.
/// Shuffling permutes the indices only. A cursor marks the next card to deal.
///
/// Each deck owns its own generator, so decks never share a random sequence.
/// Cloning a deck clones the generator state as well.
///
/// # Example
///
/// ```
/// use deckrs::{Deck, DrawError, Rank};
///
/// let mut deck = Deck::with_seed(1, 2, &[Rank::Two, Rank::Three], 42);
/// assert_eq!(deck.len(), 46);
///
/// deck.shuffle();
/// for _ in 0..46 {
///     deck.draw().unwrap();
/// }
/// assert_eq!(deck.draw(), Err(DrawError::Exhausted));
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards the deck was built with.
    cards: Vec<Card>,
    /// Draw order (each entry indexes into `cards`).
    order: Vec<usize>,
    /// Next position in `order` to deal from.
    position: usize,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates an unshuffled deck of `decks` standard decks plus `jokers`
    /// jokers, leaving out every rank in `omit_ranks`.
    ///
    /// The deck's generator is seeded from the system clock mixed with a
    /// per-process counter.
    ///
    /// ```
    /// use deckrs::Deck;
    ///
    /// let deck = Deck::new(2, 2, &[]);
    /// assert_eq!(deck.len(), 106);
    /// ```
    #[cfg(feature = "std")]
    #[must_use]
    pub fn new(decks: usize, jokers: usize, omit_ranks: &[Rank]) -> Self {
        Self::with_seed(decks, jokers, omit_ranks, derive_seed())
    }

    /// Creates an unshuffled deck whose generator is seeded with `seed`.
    ///
    /// Two decks built from the same arguments and seed shuffle identically.
    #[must_use]
    pub fn with_seed(decks: usize, jokers: usize, omit_ranks: &[Rank], seed: u64) -> Self {
        Self::build(decks, jokers, |rank| omit_ranks.contains(&rank), seed)
    }

    /// Creates an unshuffled deck from options.
    ///
    /// Without a seed in `options` one is derived as in [`Deck::new`].
    ///
    /// Without the `std` feature there is no clock to read, so the derived
    /// seed depends only on how many decks have been built so far and every
    /// run of the program shuffles the same way. Set
    /// [`DeckOptions::seed`] from a real entropy source on those targets to
    /// get different shuffles from run to run.
    ///
    /// ```
    /// use deckrs::{Deck, DeckOptions};
    ///
    /// let options = DeckOptions::default().with_jokers(2).with_seed(9);
    /// let deck = Deck::from_options(&options);
    /// assert_eq!(deck.len(), options.pool_size());
    /// ```
    #[must_use]
    pub fn from_options(options: &DeckOptions) -> Self {
        let seed = options.seed.unwrap_or_else(derive_seed);
        Self::build(
            options.decks,
            options.jokers,
            |rank| options.omit_ranks.contains(&rank),
            seed,
        )
    }

    fn build(decks: usize, jokers: usize, omitted: impl Fn(Rank) -> bool, seed: u64) -> Self {
        let kept: Vec<Rank> = RANKS.iter().copied().filter(|&rank| !omitted(rank)).collect();
        let mut cards = Vec::with_capacity(decks * kept.len() * SUITS.len() + jokers);

        for _ in 0..decks {
            for suit in SUITS {
                for &rank in &kept {
                    cards.push(Card::new(suit, rank));
                }
            }
        }
        cards.extend(core::iter::repeat_n(Card::joker(), jokers));

        let order = (0..cards.len()).collect();

        Self {
            cards,
            order,
            position: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Shuffles the draw order with the deck's generator and restarts
    /// dealing from the top.
    ///
    /// The card pool is left untouched.
    pub fn shuffle(&mut self) {
        self.order.shuffle(&mut self.rng);
        self.position = 0;
    }

    /// Shuffles the draw order with a caller-supplied generator and restarts
    /// dealing from the top.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.order.shuffle(rng);
        self.position = 0;
    }

    /// Rewinds the cursor to the top without changing the draw order.
    pub const fn reset(&mut self) {
        self.position = 0;
    }

    /// Draws the next card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::Exhausted`] once every card has been dealt. The
    /// deck is left unchanged, so further draws keep failing the same way
    /// until it is shuffled or reset.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        let card = self.peek().copied().ok_or(DrawError::Exhausted)?;
        self.position += 1;
        Ok(card)
    }

    /// Draws `count` cards at once.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::NotEnoughCards`] if fewer than `count` cards
    /// remain; no card is drawn in that case.
    pub fn deal(&mut self, count: usize) -> Result<Vec<Card>, DrawError> {
        let remaining = self.remaining();
        if count > remaining {
            return Err(DrawError::NotEnoughCards {
                requested: count,
                remaining,
            });
        }

        let hand = self.iter_remaining().take(count).copied().collect();
        self.position += count;
        Ok(hand)
    }

    /// Returns the next card without drawing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.order
            .get(self.position)
            .and_then(|&index| self.cards.get(index))
    }

    /// Iterates over the cards not yet drawn, in draw order.
    pub fn iter_remaining(&self) -> impl Iterator<Item = &Card> + '_ {
        self.order[self.position..]
            .iter()
            .filter_map(|&index| self.cards.get(index))
    }

    /// Returns the total number of cards in the deck, drawn or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck was built without any cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards drawn since the last shuffle or reset.
    #[must_use]
    pub const fn drawn(&self) -> usize {
        self.position
    }

    /// Returns the number of cards left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.position
    }

    /// Returns whether every card has been drawn.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.position == self.cards.len()
    }

    /// Returns the card pool in construction order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the draw order as indices into [`Deck::cards`].
    #[must_use]
    pub fn draw_order(&self) -> &[usize] {
        &self.order
    }

    /// Returns the fraction of the deck drawn so far.
    ///
    /// An empty deck counts as fully drawn.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for card counts"
    )]
    pub fn penetration(&self) -> f64 {
        if self.cards.is_empty() {
            return 1.0;
        }
        self.position as f64 / self.cards.len() as f64
    }

    /// Returns whether the drawn fraction has reached `threshold`.
    ///
    /// A threshold of 0 disables reshuffling and always returns `false`.
    #[must_use]
    pub fn needs_reshuffle(&self, threshold: f64) -> bool {
        if threshold <= 0.0 {
            return false;
        }
        self.penetration() >= threshold
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::from_options(&DeckOptions::default())
    }
}

/// Two decks are equal when their draw orders and cursors match.
impl PartialEq for Deck {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.position == other.position
    }
}

impl Eq for Deck {}

/// Renders every card in draw order, drawn or not, separated by single spaces.
impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &index) in self.order.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if let Some(card) = self.cards.get(index) {
                write!(f, "{card}")?;
            }
        }
        Ok(())
    }
}
