// ABOUTME: Configuration module for the deckdown crate
// ABOUTME: Provides parser options with defaults and environment variable handling

use std::env;

/// Options controlling slide pagination for a single parse call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Split slides at `---` delimiter lines
    pub use_delimiter: bool,
    /// Split slides at heading lines
    pub use_heading_pagination: bool,
    /// Smallest heading level (1-6) that forces a slide break
    pub min_heading_level: u8,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            use_delimiter: true,
            use_heading_pagination: true,
            min_heading_level: 1,
        }
    }
}

impl ParserOptions {
    /// Create a new options instance with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from environment variables
    pub fn from_env() -> Self {
        let use_delimiter = env::var("DECKDOWN_USE_DELIMITER")
            .ok()
            .map(|s| s.to_lowercase() != "false")
            .unwrap_or(true);
        let use_heading_pagination = env::var("DECKDOWN_USE_HEADING_PAGINATION")
            .ok()
            .map(|s| s.to_lowercase() != "false")
            .unwrap_or(true);
        let min_heading_level = env::var("DECKDOWN_MIN_HEADING_LEVEL")
            .ok()
            .and_then(|s| s.parse::<u8>().ok())
            .unwrap_or(1)
            .clamp(1, 6);

        Self {
            use_delimiter,
            use_heading_pagination,
            min_heading_level,
        }
    }

    /// Set the minimum heading level, clamped to the valid 1-6 range
    pub fn with_min_heading_level(mut self, level: u8) -> Self {
        self.min_heading_level = level.clamp(1, 6);
        self
    }
}
