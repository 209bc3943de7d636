//! Blackjack for a community chat bot, with optional `no_std` support.
//!
//! Every player plays their own game against the dealer. The crate provides
//! a [`Game`] type that deals from a shared shoe, keeps at most one session
//! per player, plays the dealer's hand and records finished games in a
//! [`StatsLedger`].
//!
//! # Example
//!
//! ```
//! use bjbot::{Game, GameOptions, GameStatus, MemoryStore};
//!
//! let game = Game::new(GameOptions::default(), 42, MemoryStore::new());
//! let mut session = game.start(1).unwrap();
//! if session.status == GameStatus::Playing {
//!     session = game.stand(1).unwrap();
//! }
//! let finished = game.finish(1).unwrap();
//! assert_eq!(finished.session, session);
//! assert_eq!(finished.stats.total_games(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
pub mod config;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;
pub mod stats;
pub mod store;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
#[cfg(feature = "std")]
pub use config::BotConfig;
#[cfg(feature = "std")]
pub use error::ConfigError;
pub use error::{GameError, ParseActionError, StoreError};
pub use game::{Action, DealerReveal, Game, GameStatus, PlayerId, Session};
pub use hand::{Hand, Score, evaluate, is_natural_blackjack};
pub use options::GameOptions;
pub use result::{FinishedGame, Outcome};
pub use shoe::Shoe;
pub use stats::{StatsLedger, StatsRecord};
#[cfg(feature = "std")]
pub use store::JsonFileStore;
pub use store::{MemoryStore, StatsStore};
