//! Session state types.

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::hand::Hand;
use crate::result::Outcome;

/// Status of a single player's game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Waiting for the player to hit or stand.
    Playing,
    /// The player won.
    PlayerWin,
    /// The dealer won.
    DealerWin,
    /// Both sides finished level.
    Tie,
}

impl GameStatus {
    /// Returns whether the game has been decided.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }

    /// Returns the player's outcome, or `None` while the game is still running.
    #[must_use]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::Playing => None,
            Self::PlayerWin => Some(Outcome::Win),
            Self::DealerWin => Some(Outcome::Loss),
            Self::Tie => Some(Outcome::Draw),
        }
    }
}

/// One player's game against the dealer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The player's cards.
    pub player_hand: Hand,
    /// The dealer's cards; the first one is the up card.
    pub dealer_hand: Hand,
    /// Current status.
    pub status: GameStatus,
}

impl Session {
    pub(crate) const fn new() -> Self {
        Self {
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
            status: GameStatus::Playing,
        }
    }

    /// Returns whether the game has been decided.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the dealer's hand as it grew during dealer play.
    ///
    /// The first snapshot is the two dealt cards with the hole card turned
    /// over; each following snapshot adds one drawn card, ending with the
    /// final hand. Adapters render these with whatever pacing they like.
    /// Calling this again starts the sequence over.
    #[must_use]
    pub fn dealer_reveal(&self) -> DealerReveal<'_> {
        DealerReveal {
            cards: self.dealer_hand.cards(),
            shown: self.dealer_hand.len().min(2),
        }
    }
}

/// Iterator over growing prefixes of the dealer's hand.
///
/// Created by [`Session::dealer_reveal`].
#[derive(Debug, Clone)]
pub struct DealerReveal<'a> {
    cards: &'a [Card],
    shown: usize,
}

impl<'a> Iterator for DealerReveal<'a> {
    type Item = &'a [Card];

    fn next(&mut self) -> Option<Self::Item> {
        if self.shown == 0 || self.shown > self.cards.len() {
            return None;
        }
        let snapshot = &self.cards[..self.shown];
        self.shown += 1;
        Some(snapshot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = if self.shown == 0 {
            0
        } else {
            (self.cards.len() + 1).saturating_sub(self.shown)
        };
        (left, Some(left))
    }
}

impl ExactSizeIterator for DealerReveal<'_> {}
