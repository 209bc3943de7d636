//! Finished game results.

use serde::{Deserialize, Serialize};

use crate::game::{PlayerId, Session};
use crate::stats::StatsRecord;

/// A finished game from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Player beat the dealer.
    Win,
    /// Dealer beat the player.
    Loss,
    /// Neither side won.
    Draw,
}

/// Returned by [`Game::finish`](crate::Game::finish) once a session is
/// removed and its outcome recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedGame {
    /// The player the session belonged to.
    pub player_id: PlayerId,
    /// The final state of the session.
    pub session: Session,
    /// The outcome forwarded to the stats ledger.
    pub outcome: Outcome,
    /// The player's stats after this game was recorded.
    pub stats: StatsRecord,
}
