//! Hand representation and scoring.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::card::Card;

/// Highest total that does not bust.
pub const BLACKJACK: u8 = 21;

/// The scored value of a set of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// Hand total with every ace counted as favourably as possible.
    pub total: u8,
    /// Number of aces counted as 11.
    pub soft_aces: u8,
}

impl Score {
    /// Returns whether at least one ace is counted as 11.
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        self.soft_aces > 0
    }
}

/// Scores `cards`.
///
/// Every ace first counts as 1. As many aces as fit without passing 21 are
/// then raised to 11. The result does not depend on the order of the cards.
#[must_use]
pub fn evaluate(cards: &[Card]) -> Score {
    let mut total: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces = aces.saturating_add(1);
            total = total.saturating_add(1);
        } else {
            total = total.saturating_add(card.base_value());
        }
    }

    let mut soft_aces = 0;
    while soft_aces < aces && total.saturating_add(10) <= BLACKJACK {
        total += 10;
        soft_aces += 1;
    }

    Score { total, soft_aces }
}

/// Returns whether `cards` is a natural blackjack: exactly two cards worth 21.
#[must_use]
pub fn is_natural_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && evaluate(cards).total == BLACKJACK
}

/// An ordered hand of cards, used for both the player and the dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card, which is the dealer's visible card.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Scores the hand, including the soft ace count.
    #[must_use]
    pub fn score(&self) -> Score {
        evaluate(&self.cards)
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.score().total
    }

    /// Value of the up card alone, as shown before the hole card is revealed.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        self.cards
            .first()
            .map_or(0, |card| evaluate(core::slice::from_ref(card)).total)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.score().is_soft()
    }

    /// Returns whether the hand is a natural blackjack.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        is_natural_blackjack(&self.cards)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
