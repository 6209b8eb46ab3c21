use crate::day::DEFAULT_TIME_ZONE;
use crate::timer::DEFAULT_REST_SECONDS;
use std::{env, path::PathBuf};

const DEFAULT_PORT: u16 = 8080;
const MAX_REST_SECONDS: u32 = 3600;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_path: PathBuf,
    pub port: u16,
    pub time_zone: String,
    pub rest_seconds: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Unparseable or out-of-range values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_path = lookup("APP_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data/tracker.json"));

        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let time_zone = lookup("APP_TIME_ZONE")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_TIME_ZONE.to_string());

        let rest_seconds = lookup("APP_REST_SECONDS")
            .and_then(|value| value.parse::<u32>().ok())
            .filter(|seconds| (1..=MAX_REST_SECONDS).contains(seconds))
            .unwrap_or(DEFAULT_REST_SECONDS);

        Self {
            data_path,
            port,
            time_zone,
            rest_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.data_path, PathBuf::from("data/tracker.json"));
        assert_eq!(config.port, 8080);
        assert_eq!(config.time_zone, "America/Toronto");
        assert_eq!(config.rest_seconds, 60);
    }

    #[test]
    fn reads_overrides_and_ignores_bad_values() {
        let config = config_from(&[
            ("APP_DATA_PATH", "/tmp/week.json"),
            ("PORT", "not-a-port"),
            ("APP_TIME_ZONE", "Europe/Paris"),
            ("APP_REST_SECONDS", "0"),
        ]);
        assert_eq!(config.data_path, PathBuf::from("/tmp/week.json"));
        assert_eq!(config.port, 8080);
        assert_eq!(config.time_zone, "Europe/Paris");
        assert_eq!(config.rest_seconds, 60);

        assert_eq!(config_from(&[("APP_REST_SECONDS", "90")]).rest_seconds, 90);
    }
}
