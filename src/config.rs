//! Runtime configuration read from `BLOCKFALL_*` environment variables.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::DEFAULT_GRAVITY_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Pool seed; 0 picks one from the clock
    pub seed: u32,
    pub gravity_ms: u32,
    /// Ring the terminal bell when rows are cleared
    pub bell: bool,
    /// env_logger output file
    pub log_path: Option<String>,
    /// JSONL event log file
    pub event_log: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 1,
            gravity_ms: DEFAULT_GRAVITY_MS,
            bell: true,
            log_path: None,
            event_log: None,
        }
    }
}

impl Config {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup; unset or unparsable values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("BLOCKFALL_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        let gravity_ms = lookup("BLOCKFALL_GRAVITY_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(defaults.gravity_ms);

        let bell = lookup("BLOCKFALL_BELL")
            .map(|v| {
                let v = v.trim().to_lowercase();
                !(v == "0" || v == "false" || v == "off")
            })
            .unwrap_or(defaults.bell);

        Self {
            seed,
            gravity_ms,
            bell,
            log_path: non_empty(lookup("BLOCKFALL_LOG_PATH")),
            event_log: non_empty(lookup("BLOCKFALL_EVENT_LOG")),
        }
    }

    /// Seed to start the game with
    pub fn effective_seed(&self) -> u32 {
        if self.seed != 0 {
            return self.seed;
        }
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
            .unwrap_or(1)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(s) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config_from(&[]), Config::default());
    }

    #[test]
    fn values_are_parsed() {
        let config = config_from(&[
            ("BLOCKFALL_SEED", "77"),
            ("BLOCKFALL_GRAVITY_MS", " 350 "),
            ("BLOCKFALL_BELL", "off"),
            ("BLOCKFALL_LOG_PATH", "/tmp/blockfall.log"),
            ("BLOCKFALL_EVENT_LOG", "  "),
        ]);
        assert_eq!(config.seed, 77);
        assert_eq!(config.gravity_ms, 350);
        assert!(!config.bell);
        assert_eq!(config.log_path.as_deref(), Some("/tmp/blockfall.log"));
        assert_eq!(config.event_log, None);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config_from(&[
            ("BLOCKFALL_SEED", "-3"),
            ("BLOCKFALL_GRAVITY_MS", "0"),
        ]);
        assert_eq!(config.seed, 1);
        assert_eq!(config.gravity_ms, DEFAULT_GRAVITY_MS);
    }

    #[test]
    fn nonzero_seed_is_used_as_is() {
        let config = config_from(&[("BLOCKFALL_SEED", "5")]);
        assert_eq!(config.effective_seed(), 5);
    }
}
