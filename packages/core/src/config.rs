use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};

use crate::theme::Theme;

pub const DEFAULT_API_URL: &str = "http://localhost:4000/graphql";
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "jwt";

/// Values baked in when the client is compiled; a browser has no process environment
const BUILD_ENV: [(&str, Option<&str>); 3] = [
    ("API_URL", option_env!("API_URL")),
    ("TOKEN_STORAGE_KEY", option_env!("TOKEN_STORAGE_KEY")),
    ("SESSION_SOURCE", option_env!("SESSION_SOURCE")),
];

/// Which oracle answers the session query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionSource {
    /// Presence of the stored token
    #[default]
    Local,
    /// `IS_LOGGED_IN` sent to the GraphQL API
    Remote,
}

impl FromStr for SessionSource {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(SessionSource::Local),
            "remote" => Ok(SessionSource::Remote),
            other => anyhow::bail!("unknown session source '{}' (expected local or remote)", other),
        }
    }
}

/// Client configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub token_storage_key: String,
    pub session_source: SessionSource,
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_string(),
            session_source: SessionSource::default(),
            theme: Theme::default(),
        }
    }
}

impl Config {
    /// Load configuration for the current target.
    ///
    /// wasm builds read the values captured at compile time; native builds
    /// read the process environment.
    pub fn load() -> Result<Self> {
        #[cfg(target_arch = "wasm32")]
        {
            Self::from_build_env()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::from_env()
        }
    }

    /// Load configuration from the variables set when the crate was compiled
    pub fn from_build_env() -> Result<Self> {
        Self::from_pairs(&BUILD_ENV)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_pairs(pairs: &[(&str, Option<&str>)]) -> Result<Self> {
        Self::from_lookup(|key| {
            pairs
                .iter()
                .find(|(name, _)| *name == key)
                .and_then(|(_, value)| value.map(str::to_string))
        })
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let session_source = match lookup("SESSION_SOURCE") {
            Some(value) => value
                .parse()
                .context("SESSION_SOURCE must be 'local' or 'remote'")?,
            None => SessionSource::default(),
        };

        Ok(Self {
            api_url: lookup("API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            token_storage_key: lookup("TOKEN_STORAGE_KEY")
                .unwrap_or_else(|| DEFAULT_TOKEN_STORAGE_KEY.to_string()),
            session_source,
            theme: Theme::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("API_URL", "https://api.example.com/graphql"),
            ("TOKEN_STORAGE_KEY", "session"),
            ("SESSION_SOURCE", "Remote"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "https://api.example.com/graphql");
        assert_eq!(config.token_storage_key, "session");
        assert_eq!(config.session_source, SessionSource::Remote);
    }

    #[test]
    fn test_compiled_values_are_used() {
        let config = Config::from_pairs(&[
            ("API_URL", Some("https://nuber.example.com/graphql")),
            ("TOKEN_STORAGE_KEY", None),
            ("SESSION_SOURCE", Some("remote")),
        ])
        .unwrap();

        assert_eq!(config.api_url, "https://nuber.example.com/graphql");
        assert_eq!(config.token_storage_key, DEFAULT_TOKEN_STORAGE_KEY);
        assert_eq!(config.session_source, SessionSource::Remote);
    }

    #[test]
    fn test_build_env_reads_compiled_table() {
        let config = Config::from_build_env().unwrap();
        assert_eq!(config, Config::from_pairs(&BUILD_ENV).unwrap());
        assert_eq!(
            config.api_url,
            option_env!("API_URL").unwrap_or(DEFAULT_API_URL)
        );
    }

    #[test]
    fn test_compiled_invalid_session_source_is_an_error() {
        assert!(Config::from_pairs(&[("SESSION_SOURCE", Some("cookie"))]).is_err());
    }

    #[test]
    fn test_invalid_session_source_is_an_error() {
        let err = Config::from_lookup(lookup(&[("SESSION_SOURCE", "cookie")])).unwrap_err();
        assert!(err.to_string().contains("SESSION_SOURCE"));
    }
}
