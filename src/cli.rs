use std::path::PathBuf;

use clap::Parser;

/// Interactive game title lookup with live suggestions
#[derive(Debug, Parser)]
#[command(name = "titlepick", version, about)]
pub struct Cli {
    /// Title lookup endpoint URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Path to the config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Minimum characters before a lookup is issued
    #[arg(long, value_name = "N")]
    pub min_chars: Option<usize>,

    /// Quiet period between keystrokes and lookup dispatch, in milliseconds
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// HTTP request timeout, in milliseconds
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_overrides() {
        let cli = Cli::parse_from(["titlepick"]);
        assert!(cli.endpoint.is_none());
        assert!(cli.config.is_none());
        assert!(cli.min_chars.is_none());
        assert!(cli.debounce_ms.is_none());
        assert!(cli.timeout_ms.is_none());
    }

    #[test]
    fn test_parses_overrides() {
        let cli = Cli::parse_from([
            "titlepick",
            "--endpoint",
            "http://localhost:5000/search_game_title",
            "--min-chars",
            "2",
            "--debounce-ms",
            "150",
        ]);
        assert_eq!(
            cli.endpoint.as_deref(),
            Some("http://localhost:5000/search_game_title")
        );
        assert_eq!(cli.min_chars, Some(2));
        assert_eq!(cli.debounce_ms, Some(150));
    }
}
