//! Game engine and session management.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::{HashMap, hash_map::Entry};
#[cfg(feature = "std")]
use std::collections::{HashMap, hash_map::Entry};

use crate::sync::Mutex;

use crate::card::Card;
use crate::error::GameError;
use crate::options::GameOptions;
use crate::result::FinishedGame;
use crate::shoe::Shoe;
use crate::stats::StatsLedger;
use crate::store::StatsStore;

mod actions;
mod dealer;
pub mod state;

pub use actions::Action;
pub use dealer::{dealer_must_hit, settle};
pub use state::{DealerReveal, GameStatus, Session};

/// Identifies a player; the chat platform's user id.
pub type PlayerId = u64;

/// A blackjack table where every player plays their own game against the dealer.
///
/// The game owns the shared shoe, the active sessions (at most one per
/// player) and the stats ledger that finished games are recorded in. All
/// operations take `&self`; each one holds the session lock for its whole
/// duration, so two operations on the same player never interleave.
pub struct Game<S> {
    /// Table rules.
    pub options: GameOptions,
    /// Cards in the shoe.
    pub shoe: Mutex<Shoe>,
    /// Active sessions (`player_id` -> session).
    sessions: Mutex<HashMap<PlayerId, Session>>,
    /// Lifetime stats of every player.
    stats: StatsLedger<S>,
}

impl<S: StatsStore> Game<S> {
    /// Creates a new game with the given seed, recording stats into `store`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjbot::{Game, GameOptions, MemoryStore};
    ///
    /// let game = Game::new(GameOptions::default(), 42, MemoryStore::new());
    /// let session = game.start(7).unwrap();
    /// assert_eq!(session.player_hand.len(), 2);
    /// ```
    pub fn new(options: GameOptions, seed: u64, store: S) -> Self {
        Self::with_ledger(options, seed, StatsLedger::open(store))
    }

    /// Creates a new game around an already opened ledger.
    #[must_use]
    pub fn with_ledger(options: GameOptions, seed: u64, stats: StatsLedger<S>) -> Self {
        let shoe = Shoe::new(options.decks, seed);

        Self {
            options,
            shoe: Mutex::new(shoe),
            sessions: Mutex::new(HashMap::new()),
            stats,
        }
    }

    /// Draws a card from the shoe, reshuffling first if it is empty.
    fn draw(&self) -> Card {
        self.shoe.lock().draw()
    }

    /// Starts a game for `player_id` and deals two cards each.
    ///
    /// Naturals are settled on the spot, so the returned session may already
    /// be over.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadyActive`] if the player has a session; that
    /// session is left untouched.
    pub fn start(&self, player_id: PlayerId) -> Result<Session, GameError> {
        let mut sessions = self.sessions.lock();
        let Entry::Vacant(slot) = sessions.entry(player_id) else {
            return Err(GameError::AlreadyActive);
        };

        let mut session = Session::new();
        session.player_hand.add_card(self.draw());
        session.player_hand.add_card(self.draw());
        session.dealer_hand.add_card(self.draw());
        session.dealer_hand.add_card(self.draw());
        session.status = Self::check_naturals(&session);

        tracing::debug!(
            player_id,
            player = session.player_hand.value(),
            status = ?session.status,
            "dealt new game"
        );

        Ok(slot.insert(session).clone())
    }

    /// Settles the initial deal when either side holds a natural.
    fn check_naturals(session: &Session) -> GameStatus {
        if session.player_hand.is_natural() {
            let dealer_may_have_natural = session
                .dealer_hand
                .up_card()
                .is_some_and(Card::has_ten_value_or_ace);
            if dealer_may_have_natural && session.dealer_hand.is_natural() {
                GameStatus::Tie
            } else {
                GameStatus::PlayerWin
            }
        } else if session.dealer_hand.is_natural() {
            GameStatus::DealerWin
        } else {
            GameStatus::Playing
        }
    }

    /// Ends a decided game: records its outcome and removes the session.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoActiveGame`] if the player has no session, or
    /// [`GameError::StillPlaying`] if the game is undecided (the session is
    /// kept).
    pub fn finish(&self, player_id: PlayerId) -> Result<FinishedGame, GameError> {
        let mut sessions = self.sessions.lock();
        let status = sessions
            .get(&player_id)
            .ok_or(GameError::NoActiveGame)?
            .status;
        let Some(outcome) = status.outcome() else {
            return Err(GameError::StillPlaying);
        };

        let session = sessions
            .remove(&player_id)
            .ok_or(GameError::NoActiveGame)?;
        let stats = self.stats.record(player_id, outcome);
        drop(sessions);

        tracing::info!(player_id, ?outcome, "game finished");

        Ok(FinishedGame {
            player_id,
            session,
            outcome,
            stats,
        })
    }

    /// Returns a snapshot of the player's session.
    pub fn session(&self, player_id: PlayerId) -> Option<Session> {
        self.sessions.lock().get(&player_id).cloned()
    }

    /// Returns whether the player has a session, decided or not.
    pub fn has_session(&self, player_id: PlayerId) -> bool {
        self.sessions.lock().contains_key(&player_id)
    }

    /// Returns the number of sessions that have not been finished.
    pub fn active_games(&self) -> usize {
        self.sessions.lock().len()
    }

    /// Returns the number of cards remaining in the shoe.
    pub fn cards_remaining(&self) -> usize {
        self.shoe.lock().remaining()
    }

    /// Returns the stats ledger.
    pub const fn stats(&self) -> &StatsLedger<S> {
        &self.stats
    }
}
