use core::str::FromStr;

use crate::error::{GameError, ParseActionError};
use crate::hand::BLACKJACK;
use crate::store::StatsStore;

use super::{Game, GameStatus, PlayerId, Session};

/// Something the player can do while their game is being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw another card.
    Hit,
    /// Keep the current hand and let the dealer play.
    Stand,
    /// The player did not answer in time; treated as a stand.
    TimedOut,
}

impl FromStr for Action {
    type Err = ParseActionError;

    /// Parses a command word, shortcut letter or reaction emoji.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim().trim_end_matches('\u{fe0f}');
        let is = |word: &str| input.eq_ignore_ascii_case(word);

        if is("hit") || is("h") || input == "\u{2b06}" {
            Ok(Self::Hit)
        } else if is("stand") || is("s") || input == "\u{23f9}" {
            Ok(Self::Stand)
        } else {
            Err(ParseActionError)
        }
    }
}

impl<S: StatsStore> Game<S> {
    /// Player action: Hit (draw a card).
    ///
    /// Busting hands the game to the dealer. Reaching exactly 21 stands
    /// automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if the player has no session or the game is already
    /// decided.
    pub fn hit(&self, player_id: PlayerId) -> Result<Session, GameError> {
        let mut sessions = self.sessions.lock();
        let session = sessions
            .get_mut(&player_id)
            .ok_or(GameError::NoActiveGame)?;

        if session.status != GameStatus::Playing {
            return Err(GameError::GameOver);
        }

        let card = self.draw();
        session.player_hand.add_card(card);
        let value = session.player_hand.value();
        tracing::debug!(player_id, %card, value, "player hit");

        if value > BLACKJACK {
            session.status = GameStatus::DealerWin;
            tracing::info!(player_id, value, "player bust");
        } else if value == BLACKJACK {
            self.play_dealer(player_id, session);
        }

        Ok(session.clone())
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer then draws to 17 and the game is decided.
    ///
    /// # Errors
    ///
    /// Returns an error if the player has no session or the game is already
    /// decided.
    pub fn stand(&self, player_id: PlayerId) -> Result<Session, GameError> {
        let mut sessions = self.sessions.lock();
        let session = sessions
            .get_mut(&player_id)
            .ok_or(GameError::NoActiveGame)?;

        if session.status != GameStatus::Playing {
            return Err(GameError::GameOver);
        }

        self.play_dealer(player_id, session);

        Ok(session.clone())
    }

    /// Applies an action from the presentation layer.
    ///
    /// # Errors
    ///
    /// Same as [`Game::hit`] and [`Game::stand`].
    pub fn act(&self, player_id: PlayerId, action: Action) -> Result<Session, GameError> {
        match action {
            Action::Hit => self.hit(player_id),
            Action::Stand => self.stand(player_id),
            Action::TimedOut => {
                tracing::debug!(player_id, "turn timed out, standing");
                self.stand(player_id)
            }
        }
    }
}
