//! Runtime configuration
//!
//! Values come from a TOML file (default location under the platform config
//! directory) with CLI flags applied on top. A missing file yields the
//! defaults; a malformed file is an error.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::Cli;
use crate::error::TitlepickError;

/// Default title lookup endpoint, matching the review explorer's Flask route
const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/search_game_title";

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_min_query_len() -> usize {
    3
}

fn default_debounce_ms() -> u64 {
    200
}

fn default_timeout_ms() -> u64 {
    5_000
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Title lookup endpoint, queried with a `title` parameter
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Queries shorter than this clear the suggestion list without a request
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
    /// Quiet period between keystrokes and lookup dispatch
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// HTTP request timeout
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            min_query_len: default_min_query_len(),
            debounce_ms: default_debounce_ms(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Default config file location: `<config_dir>/titlepick/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("titlepick").join("config.toml"))
}

impl Config {
    /// Load configuration from the given path, or the default location when
    /// no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, TitlepickError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&path)?;
        toml::from_str(&text)
            .map_err(|error| TitlepickError::Config(format!("{}: {}", path.display(), error)))
    }

    /// Apply CLI flag overrides on top of file values
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(endpoint) = &cli.endpoint {
            self.endpoint = endpoint.clone();
        }
        if let Some(min_chars) = cli.min_chars {
            self.min_query_len = min_chars;
        }
        if let Some(debounce_ms) = cli.debounce_ms {
            self.debounce_ms = debounce_ms;
        }
        if let Some(timeout_ms) = cli.timeout_ms {
            self.timeout_ms = timeout_ms;
        }
    }
}
