// ABOUTME: Configuration module for the reveal-deck compiler
// ABOUTME: Provides default settings and environment variable overrides

use crate::errors::{DeckError, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_POLL_MS: u64 = 250;
pub const DEFAULT_SOURCE_EXTENSION: &str = "md";
pub const OUTPUT_EXTENSION: &str = "html";

/// Settings shared by the driver and the watch loop
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory that receives the generated HTML files
    pub output_dir: PathBuf,
    /// Sleep between two passes in watch mode
    pub poll_interval: Duration,
    /// Extension matched when the input is a directory
    pub source_extension: String,
    pub output_extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            poll_interval: Duration::from_millis(DEFAULT_POLL_MS),
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            output_extension: OUTPUT_EXTENSION.to_string(),
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup, falling back to
    /// defaults for anything missing or unparsable
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let output_dir = lookup("REVEAL_DECK_OUTPUT_DIR")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);
        let poll_interval = lookup("REVEAL_DECK_POLL_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.poll_interval);
        let source_extension = lookup("REVEAL_DECK_SOURCE_EXT")
            .map(|s| s.trim().trim_start_matches('.').to_string())
            .unwrap_or(defaults.source_extension);

        Self {
            output_dir,
            poll_interval,
            source_extension,
            output_extension: defaults.output_extension,
        }
    }

    /// Override the output directory, typically from the command line
    pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        self
    }

    /// Reject extensions that cannot be used as a plain glob suffix
    pub fn validate(&self) -> Result<()> {
        for (name, ext) in [
            ("source extension", &self.source_extension),
            ("output extension", &self.output_extension),
        ] {
            if ext.is_empty() {
                return Err(DeckError::ConfigError(format!("{} is empty", name)));
            }
            if ext.contains(['/', '\\', '*', '?', '[', ']']) {
                return Err(DeckError::ConfigError(format!(
                    "{} contains invalid characters: {:?}",
                    name, ext
                )));
            }
        }
        Ok(())
    }
}
