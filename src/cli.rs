use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_ENDPOINT;

/// bundletui - compose product bundles from a remote catalog
#[derive(Parser, Debug)]
#[command(name = "bundletui")]
#[command(about = "A terminal UI for composing product bundles from a remote catalog")]
#[command(version)]
pub struct Cli {
    /// Product-search endpoint URL
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// API key sent as the x-api-key header
    #[arg(long, env = "BUNDLETUI_API_KEY")]
    pub api_key: Option<String>,

    /// Page size for catalog searches
    #[arg(long, default_value_t = 10)]
    pub limit: usize,

    /// Debounce window for the picker search box, in milliseconds
    #[arg(long = "debounce-ms", default_value_t = 300)]
    pub debounce_ms: u64,

    /// Write tracing output to this file (the terminal stays clean)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["bundletui"]);
        assert_eq!(cli.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cli.limit, 10);
        assert_eq!(cli.debounce_ms, 300);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::parse_from([
            "bundletui",
            "--endpoint",
            "https://catalog.example/search",
            "--limit",
            "25",
            "--debounce-ms",
            "150",
        ]);
        assert_eq!(cli.endpoint, "https://catalog.example/search");
        assert_eq!(cli.limit, 25);
        assert_eq!(cli.debounce_ms, 150);
    }
}
