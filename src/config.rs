use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub code_blocks: CodeBlockConfig,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CodeBlockConfig {
    pub style: CodeBlockStyle,
}

/// Markup emitted for fenced code blocks.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CodeBlockStyle {
    /// `bc(lang). code`
    #[default]
    Textile,
    /// `<pre><code class="lang">code</code></pre>`
    Html,
}

impl Config {
    /// Config bundled with the crate (`src/default_config.toml`).
    pub fn compiled_default() -> Self {
        // build.rs rejects a malformed bundled file
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
