//! Stats ledger and store tests.

#![expect(clippy::float_cmp, reason = "win rates are exact in these cases")]

use std::collections::BTreeMap;
use std::fs;

use bjbot::{
    JsonFileStore, MemoryStore, Outcome, PlayerId, StatsLedger, StatsRecord, StatsStore,
    StoreError,
};

/// A store whose writes always fail.
struct BrokenStore;

impl StatsStore for BrokenStore {
    fn load(&self) -> Result<BTreeMap<PlayerId, StatsRecord>, StoreError> {
        Err(StoreError::Unavailable("offline"))
    }

    fn persist(&self, _records: &BTreeMap<PlayerId, StatsRecord>) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("offline"))
    }
}

#[test]
fn get_creates_and_persists_a_zeroed_record() {
    let store = MemoryStore::new();
    let ledger = StatsLedger::open(&store);

    assert_eq!(store.record(7), None);
    assert_eq!(ledger.get(7), StatsRecord::default());
    assert_eq!(store.record(7), Some(StatsRecord::default()));
    assert_eq!(ledger.players(), 1);
}

#[test]
fn record_increments_only_the_matching_counter() {
    let ledger = StatsLedger::open(MemoryStore::new());

    ledger.record(1, Outcome::Win);
    ledger.record(1, Outcome::Win);
    ledger.record(1, Outcome::Loss);
    let record = ledger.record(1, Outcome::Draw);

    assert_eq!(
        record,
        StatsRecord {
            wins: 2,
            losses: 1,
            draws: 1
        }
    );
    assert_eq!(ledger.get(1), record);
    assert_eq!(ledger.get(2), StatsRecord::default());

    let records = ledger.into_store().into_records();
    assert_eq!(records.get(&1), Some(&record));
}

#[test]
fn win_rate_is_a_percentage() {
    assert_eq!(StatsRecord::default().win_rate(), 0.0);

    let record = StatsRecord {
        wins: 3,
        losses: 1,
        draws: 0,
    };
    assert_eq!(record.total_games(), 4);
    assert_eq!(record.win_rate(), 75.0);

    let record = StatsRecord {
        wins: 0,
        losses: 2,
        draws: 2,
    };
    assert_eq!(record.win_rate(), 0.0);
}

#[test]
fn ledger_loads_existing_records() {
    let mut records = BTreeMap::new();
    records.insert(
        3,
        StatsRecord {
            wins: 10,
            losses: 4,
            draws: 1,
        },
    );
    let ledger = StatsLedger::open(MemoryStore::with_records(records));

    let record = ledger.record(3, Outcome::Loss);
    assert_eq!(record.losses, 5);
    assert_eq!(record.total_games(), 16);
}

#[test]
fn persistence_failures_do_not_lose_the_in_memory_record() {
    let ledger = StatsLedger::open(BrokenStore);

    assert_eq!(ledger.get(1), StatsRecord::default());
    ledger.record(1, Outcome::Win);
    let record = ledger.record(1, Outcome::Win);

    assert_eq!(record.wins, 2);
    assert_eq!(ledger.get(1).wins, 2);
}

#[test]
fn json_store_round_trips_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blackjack_stats.json");

    {
        let ledger = StatsLedger::open(JsonFileStore::new(&path));
        ledger.record(42, Outcome::Win);
        ledger.record(42, Outcome::Draw);
        ledger.record(u64::MAX, Outcome::Loss);
    }

    let ledger = StatsLedger::open(JsonFileStore::new(&path));
    assert_eq!(
        ledger.get(42),
        StatsRecord {
            wins: 1,
            losses: 0,
            draws: 1
        }
    );
    assert_eq!(ledger.get(u64::MAX).losses, 1);
    assert_eq!(ledger.store().path(), path);
}

#[test]
fn json_store_uses_player_ids_as_object_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stats.json");
    let ledger = StatsLedger::open(JsonFileStore::new(&path));

    ledger.record(1234, Outcome::Win);

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        written,
        serde_json::json!({"1234": {"wins": 1, "losses": 0, "draws": 0}})
    );
    assert!(!dir.path().join("stats.json.tmp").exists());
}

#[test]
fn json_store_reads_a_missing_file_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("absent.json"));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn corrupt_stats_file_starts_an_empty_ledger() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stats.json");
    fs::write(&path, "{not json").unwrap();

    let store = JsonFileStore::new(&path);
    assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));

    let ledger = StatsLedger::open(store);
    assert_eq!(ledger.players(), 0);
    ledger.record(1, Outcome::Win);

    let reopened = JsonFileStore::new(&path).load().unwrap();
    assert_eq!(reopened.get(&1).map(|record| record.wins), Some(1));
}
