//! Per-player win/loss/draw counters.

extern crate alloc;

use alloc::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::game::PlayerId;
use crate::result::Outcome;
use crate::store::StatsStore;
use crate::sync::Mutex;

/// A player's lifetime blackjack record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatsRecord {
    /// Games the player won.
    pub wins: u32,
    /// Games the dealer won.
    pub losses: u32,
    /// Games that ended in a tie.
    pub draws: u32,
}

impl StatsRecord {
    /// Adds one game with the given outcome.
    pub const fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins = self.wins.saturating_add(1),
            Outcome::Loss => self.losses = self.losses.saturating_add(1),
            Outcome::Draw => self.draws = self.draws.saturating_add(1),
        }
    }

    /// Returns the number of games played.
    #[must_use]
    pub const fn total_games(&self) -> u64 {
        self.wins as u64 + self.losses as u64 + self.draws as u64
    }

    /// Returns the percentage of games won, or 0 if none were played.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        let total = self.total_games();
        if total == 0 {
            return 0.0;
        }
        #[expect(
            clippy::cast_precision_loss,
            reason = "game counts stay far below 2^52"
        )]
        let rate = f64::from(self.wins) / total as f64 * 100.0;
        rate
    }
}

/// Durable per-player stats, cached in memory and written through to a store.
///
/// Every change is persisted synchronously. A store failure is logged and
/// swallowed: the in-memory record stays correct and the next successful
/// write catches the store up.
pub struct StatsLedger<S> {
    store: S,
    records: Mutex<BTreeMap<PlayerId, StatsRecord>>,
}

impl<S: StatsStore> StatsLedger<S> {
    /// Opens a ledger, loading every record the store holds.
    ///
    /// An unreadable store is logged and treated as empty.
    pub fn open(store: S) -> Self {
        let records = match store.load() {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(error = %err, "could not load blackjack stats, starting empty");
                BTreeMap::new()
            }
        };
        tracing::debug!(players = records.len(), "stats ledger opened");

        Self {
            store,
            records: Mutex::new(records),
        }
    }

    /// Returns the player's record, creating and persisting a zeroed one if absent.
    pub fn get(&self, player_id: PlayerId) -> StatsRecord {
        let mut records = self.records.lock();
        if let Some(record) = records.get(&player_id) {
            return *record;
        }

        records.insert(player_id, StatsRecord::default());
        self.persist(&records);
        StatsRecord::default()
    }

    /// Adds one game with `outcome` to the player's record and persists it.
    ///
    /// Returns the updated record.
    pub fn record(&self, player_id: PlayerId, outcome: Outcome) -> StatsRecord {
        let mut records = self.records.lock();
        let record = records.entry(player_id).or_default();
        record.apply(outcome);
        let updated = *record;

        self.persist(&records);
        tracing::debug!(player_id, ?outcome, wins = updated.wins, "stats recorded");
        updated
    }

    /// Returns the number of players with a record.
    pub fn players(&self) -> usize {
        self.records.lock().len()
    }

    /// Returns the backing store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the ledger and returns its store.
    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&self, records: &BTreeMap<PlayerId, StatsRecord>) {
        if let Err(err) = self.store.persist(records) {
            tracing::warn!(error = %err, "failed to persist blackjack stats");
        }
    }
}
