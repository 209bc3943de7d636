use crate::hand::{BLACKJACK, Score};
use crate::store::StatsStore;

use super::{Game, GameStatus, PlayerId, Session};

/// Total the dealer draws up to.
const DEALER_STANDS_ON: u8 = 17;

/// Returns whether the dealer must draw to a hand scoring `score`.
///
/// The dealer draws below 17 and stands above it. On exactly 17 the dealer
/// stands on a hard hand, and on a soft hand only if `stand_on_soft_17`.
#[must_use]
pub const fn dealer_must_hit(score: Score, stand_on_soft_17: bool) -> bool {
    if score.total < DEALER_STANDS_ON {
        return true;
    }
    score.total == DEALER_STANDS_ON && score.is_soft() && !stand_on_soft_17
}

/// Decides a game where the player stood on `player` and the dealer finished on `dealer`.
#[must_use]
pub const fn settle(player: u8, dealer: u8) -> GameStatus {
    if dealer > BLACKJACK || dealer < player {
        GameStatus::PlayerWin
    } else if dealer > player {
        GameStatus::DealerWin
    } else {
        GameStatus::Tie
    }
}

impl<S: StatsStore> Game<S> {
    /// Dealer plays their hand according to the rules and the game is settled.
    ///
    /// The caller holds the session lock, so nothing else touches this
    /// session until the outcome is written.
    pub(super) fn play_dealer(&self, player_id: PlayerId, session: &mut Session) {
        while dealer_must_hit(session.dealer_hand.score(), self.options.stand_on_soft_17) {
            let card = self.draw();
            session.dealer_hand.add_card(card);
            tracing::debug!(player_id, %card, "dealer draws");
        }

        let player = session.player_hand.value();
        let dealer = session.dealer_hand.value();
        session.status = settle(player, dealer);

        tracing::info!(player_id, player, dealer, status = ?session.status, "dealer played");
    }
}
