//! Bot configuration read from the environment.

use core::str::FromStr;
use core::time::Duration;
use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ConfigError;
use crate::options::GameOptions;

/// Runtime settings for a bot hosting the blackjack table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    /// File the stats ledger is persisted to (`BJ_STATS_FILE`).
    pub stats_file: PathBuf,
    /// Log filter directive (`LOG_LEVEL`).
    pub log_level: String,
    /// How long a player may take to choose before standing (`BJ_TURN_TIMEOUT_SECS`).
    pub turn_timeout: Duration,
    /// Pause between dealer cards when revealing (`BJ_REVEAL_DELAY_MS`).
    pub reveal_delay: Duration,
    /// Number of decks in the shoe (`BJ_DECKS`).
    pub decks: u8,
    /// Fixed shoe seed (`BJ_SEED`); unset means time-derived.
    pub seed: Option<u64>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            stats_file: PathBuf::from("blackjack_stats.json"),
            log_level: "info".to_string(),
            turn_timeout: Duration::from_secs(30),
            reveal_delay: Duration::from_millis(2500),
            decks: 1,
            seed: None,
        }
    }
}

impl BotConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value. Unset or empty variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(path) = get("BJ_STATS_FILE") {
            config.stats_file = PathBuf::from(path);
        }
        if let Some(level) = get("LOG_LEVEL") {
            config.log_level = level;
        }
        if let Some(secs) = parse(&get, "BJ_TURN_TIMEOUT_SECS")? {
            config.turn_timeout = Duration::from_secs(secs);
        }
        if let Some(millis) = parse(&get, "BJ_REVEAL_DELAY_MS")? {
            config.reveal_delay = Duration::from_millis(millis);
        }
        if let Some(decks) = parse::<u8>(&get, "BJ_DECKS")? {
            if decks == 0 {
                return Err(ConfigError::Invalid {
                    key: "BJ_DECKS",
                    value: decks.to_string(),
                });
            }
            config.decks = decks;
        }
        config.seed = parse(&get, "BJ_SEED")?;

        Ok(config)
    }

    /// Table rules derived from this configuration.
    #[must_use]
    pub fn game_options(&self) -> GameOptions {
        GameOptions::default().with_decks(self.decks)
    }

    /// The configured seed, or one derived from the current time.
    #[must_use]
    pub fn seed_or_now(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0, |elapsed| elapsed.as_nanos() as u64)
        })
    }
}

fn parse<T: FromStr>(
    get: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    get(key)
        .map(|value| {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|_| ConfigError::Invalid { key, value })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use core::time::Duration;
    use std::collections::HashMap;

    use super::BotConfig;
    use crate::error::ConfigError;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = BotConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, BotConfig::default());
        assert_eq!(config.turn_timeout, Duration::from_secs(30));
        assert_eq!(config.reveal_delay, Duration::from_millis(2500));
        assert_eq!(config.stats_file.to_str(), Some("blackjack_stats.json"));
    }

    #[test]
    fn reads_every_variable() {
        let config = BotConfig::from_lookup(lookup(&[
            ("BJ_STATS_FILE", "/var/lib/bot/stats.json"),
            ("LOG_LEVEL", "bjbot=debug"),
            ("BJ_TURN_TIMEOUT_SECS", "45"),
            ("BJ_REVEAL_DELAY_MS", "0"),
            ("BJ_DECKS", "6"),
            ("BJ_SEED", "1234"),
        ]))
        .unwrap();

        assert_eq!(config.stats_file.to_str(), Some("/var/lib/bot/stats.json"));
        assert_eq!(config.log_level, "bjbot=debug");
        assert_eq!(config.turn_timeout, Duration::from_secs(45));
        assert_eq!(config.reveal_delay, Duration::ZERO);
        assert_eq!(config.game_options().decks, 6);
        assert_eq!(config.seed_or_now(), 1234);
    }

    #[test]
    fn empty_values_keep_defaults() {
        let config =
            BotConfig::from_lookup(lookup(&[("LOG_LEVEL", "  "), ("BJ_SEED", "")])).unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.seed, None);
    }

    #[test]
    fn rejects_unparsable_numbers() {
        let err =
            BotConfig::from_lookup(lookup(&[("BJ_TURN_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "BJ_TURN_TIMEOUT_SECS",
                value: "soon".to_string(),
            }
        );
    }

    #[test]
    fn rejects_zero_decks() {
        let err = BotConfig::from_lookup(lookup(&[("BJ_DECKS", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "BJ_DECKS", .. }));
    }
}
