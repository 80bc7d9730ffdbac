mod block;
mod config;
mod error;
mod parser;
pub mod rules;
mod textile;

pub use config::{CodeBlockConfig, CodeBlockStyle, Config};
pub use error::ConfigError;

/// Applies the ordered rule set to Markdown text.
#[derive(Debug, Clone)]
pub struct Converter {
    config: Config,
}

impl Converter {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Convert Markdown to Textile. Text no rule matches is returned unchanged.
    pub fn convert(&self, markdown: &str) -> String {
        rules::rules()
            .iter()
            .fold(markdown.to_string(), |text, rule| rule.apply(&text, &self.config))
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(Config::compiled_default())
    }
}

/// Convert Markdown to Textile using default config.
pub fn convert(markdown: &str) -> String {
    Converter::default().convert(markdown)
}

/// Convert Markdown to Textile with custom config.
pub fn convert_with_config(markdown: &str, config: &Config) -> String {
    Converter::new(config.clone()).convert(markdown)
}
