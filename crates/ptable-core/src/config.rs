//! Configuration types for ptable.
//!
//! [`Config::load`] reads `~/.config/ptable/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests), and
//! [`Config::load_from`] layers one specific file over them.

use crate::error::DataError;
use crate::query::QueryOptions;
use crate::types::ElementTable;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[data]
# Read elements from this JSON file instead of the bundled table.
# path = "/path/to/PeriodicTableJSON.json"

[query]
match_symbols = true

[output]
format          = "markdown"
show_appearance = true
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/ptable/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[data]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataConfig {
    /// Dataset file; `None` means the table bundled into the binary.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl DataConfig {
    /// Load the configured dataset.
    pub fn open(&self) -> Result<ElementTable, DataError> {
        match &self.path {
            Some(path) => ElementTable::load(path),
            None => ElementTable::bundled(),
        }
    }
}

/// `[query]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryConfig {
    #[serde(default = "default_match_symbols")]
    pub match_symbols: bool,
}

fn default_match_symbols() -> bool { true }

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            match_symbols: default_match_symbols(),
        }
    }
}

impl From<&QueryConfig> for QueryOptions {
    fn from(cfg: &QueryConfig) -> Self {
        QueryOptions {
            match_symbols: cfg.match_symbols,
        }
    }
}

/// How query results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

/// `[output]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_show_appearance")]
    pub show_appearance: bool,
}

fn default_show_appearance() -> bool { true }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_appearance: default_show_appearance(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/ptable/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
            tracing::debug!(path = %path.display(), "config: wrote default config");
        }

        Self::load_from(&path)
    }

    /// Layer the TOML file at `path` (if present) over the built-in defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    pub fn query_options(&self) -> QueryOptions {
        QueryOptions::from(&self.query)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("ptable")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
