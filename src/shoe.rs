//! The drawable stack of cards.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};

/// A shuffled shoe that replenishes itself when it runs dry.
///
/// The top of the shoe is the last element of the card vector. Drawing from
/// an empty shoe builds and shuffles a fresh one first, so a draw never fails.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    decks: u8,
    reshuffles: usize,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a shuffled shoe of `decks` decks from the given seed.
    ///
    /// A deck count of zero is treated as one.
    #[must_use]
    pub fn new(decks: u8, seed: u64) -> Self {
        let decks = decks.max(1);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::build(decks, &mut rng);

        Self {
            cards,
            decks,
            reshuffles: 0,
            rng,
        }
    }

    fn build(decks: u8, rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Removes and returns the top card, reshuffling a full shoe first if empty.
    pub fn draw(&mut self) -> Card {
        loop {
            if let Some(card) = self.cards.pop() {
                return card;
            }
            self.reshuffle();
        }
    }

    /// Replaces the remaining cards with a freshly shuffled full shoe.
    pub fn reshuffle(&mut self) {
        self.cards = Self::build(self.decks, &mut self.rng);
        self.reshuffles += 1;
        tracing::debug!(decks = self.decks, "shoe reshuffled");
    }

    /// Replaces the remaining cards with `cards`, drawn from the end.
    ///
    /// Mostly useful for stacking a shoe in tests.
    pub fn set_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    /// Returns the remaining cards, top card last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left before the next reshuffle.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of decks in a full shoe.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns the number of cards in a full shoe.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }

    /// Returns how many times the shoe has been rebuilt since creation.
    #[must_use]
    pub const fn reshuffles(&self) -> usize {
        self.reshuffles
    }
}
