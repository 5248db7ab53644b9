//! Rendering options
//!
//! Controls how a message chain is turned into one diagnostic string. The
//! stored chain is always oldest first; [`MessageOrder`] only affects output.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageOrder {
    /// Initial message first, most recent context last
    #[default]
    OldestFirst,
    /// Most recent context first
    NewestFirst,
}

/// Options for rendering an error's message chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Text placed between two fragments
    pub separator: String,
    /// Prefix the output with `[domain/code]`
    pub include_identity: bool,
    pub order: MessageOrder,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            separator: ": ".to_string(),
            include_identity: false,
            order: MessageOrder::OldestFirst,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fragment separator
    pub fn with_separator(mut self, separator: &str) -> Self {
        self.separator = separator.to_string();
        self
    }

    /// Prefixes output with the error identity
    pub fn with_identity(mut self) -> Self {
        self.include_identity = true;
        self
    }

    /// Renders the most recent context first
    pub fn newest_first(mut self) -> Self {
        self.order = MessageOrder::NewestFirst;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.separator, ": ");
        assert!(!options.include_identity);
        assert_eq!(options.order, MessageOrder::OldestFirst);
    }

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_separator(" <- ")
            .with_identity()
            .newest_first();
        assert_eq!(options.separator, " <- ");
        assert!(options.include_identity);
        assert_eq!(options.order, MessageOrder::NewestFirst);
    }

    #[test]
    fn test_render_options_partial_json() {
        let options: RenderOptions =
            serde_json::from_str(r#"{ "order": "newest_first" }"#).unwrap();
        assert_eq!(options.order, MessageOrder::NewestFirst);
        assert_eq!(options.separator, ": ");
    }
}
