//! Environment-driven configuration.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Where the client talks to and where it keeps its state.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// `TODO_API_URL`
    pub api_url: String,
    /// `TODO_STATE_FILE`
    pub state_file: PathBuf,
    /// `TODO_TIMEOUT_SECS`. Unset means no timeout.
    pub timeout: Option<Duration>,
}

impl AppConfig {
    /// Reads `TODO_API_URL`, `TODO_STATE_FILE` and `TODO_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source. Empty values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            api_url: var("TODO_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            state_file: var("TODO_STATE_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(default_state_file),
            timeout: var("TODO_TIMEOUT_SECS")
                .and_then(|val| val.trim().parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        }
    }

    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.to_string();
        self
    }

    pub fn with_state_file(mut self, state_file: impl Into<PathBuf>) -> Self {
        self.state_file = state_file.into();
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// `<data_local_dir>/todo/state.json`, or `.todo/state.json` when the
/// platform has no data directory.
pub fn default_state_file() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("todo"))
        .unwrap_or_else(|| PathBuf::from(".todo"))
        .join("state.json")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.state_file, default_state_file());
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn reads_variables() {
        let config = AppConfig::from_lookup(lookup(&[
            ("TODO_API_URL", "https://todo.example.com"),
            ("TODO_STATE_FILE", "/tmp/todo.json"),
            ("TODO_TIMEOUT_SECS", "15"),
        ]));
        assert_eq!(config.api_url, "https://todo.example.com");
        assert_eq!(config.state_file, PathBuf::from("/tmp/todo.json"));
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn empty_or_invalid_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            ("TODO_API_URL", "  "),
            ("TODO_TIMEOUT_SECS", "soon"),
        ]));
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout, None);

        let config = AppConfig::from_lookup(lookup(&[("TODO_TIMEOUT_SECS", "0")]));
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn overrides() {
        let config = AppConfig::default()
            .with_api_url("http://127.0.0.1:9000")
            .with_state_file("state.json");
        assert_eq!(config.api_url, "http://127.0.0.1:9000");
        assert_eq!(config.state_file, PathBuf::from("state.json"));
    }
}
